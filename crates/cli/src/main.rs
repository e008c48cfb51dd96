//! cfn-bindgen CLI
//!
//! Command-line interface for generating typed CloudFormation bindings
//! from the AWS Resource Specification and inspecting templates.

use anyhow::{Context, Result};
use cfn_bindgen_common::{GeneratorConfig, SpecificationDefinition};
use cfn_bindgen_generator::BindingGenerator;
use cfn_bindgen_parser::SpecParser;
use cfn_bindgen_runtime::resources::all;
use cfn_bindgen_runtime::{Template, TemplateResource};
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cfn-bindgen")]
#[command(version, about = "Generate typed CloudFormation resource bindings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a Resource Specification and summarize its contents
    #[command(after_help = "EXAMPLES:\n  \
        # Summarize the whole specification\n  \
        cfn-bindgen parse --spec CloudFormationResourceSpecification.json\n\n  \
        # Only some services, listing every resource\n  \
        cfn-bindgen parse --spec spec.json --filter appmesh,sqs --verbose")]
    Parse {
        /// Path to the Resource Specification JSON
        #[arg(short, long)]
        spec: PathBuf,

        /// Fragment specifications merged over the primary one
        #[arg(long)]
        fragment: Vec<PathBuf>,

        /// Comma-separated list of service modules to include
        #[arg(long, value_delimiter = ',')]
        filter: Option<Vec<String>>,
    },

    /// Generate Rust bindings from a Resource Specification
    #[command(after_help = "EXAMPLES:\n  \
        # Regenerate the runtime crate's bindings\n  \
        cfn-bindgen generate \\\n    \
        --spec spec.json \\\n    \
        --output crates/runtime/src/resources\n\n  \
        # Bindings for a crate that depends on the runtime\n  \
        cfn-bindgen generate \\\n    \
        --spec spec.json \\\n    \
        --fragment sam.json \\\n    \
        --config cfn-bindgen.yaml \\\n    \
        --filter lambda,sqs \\\n    \
        --output src/cfn")]
    Generate {
        /// Path to the Resource Specification JSON
        #[arg(short, long)]
        spec: PathBuf,

        /// Fragment specifications merged over the primary one
        #[arg(long)]
        fragment: Vec<PathBuf>,

        /// Generator configuration (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Comma-separated list of service modules to include
        #[arg(long, value_delimiter = ',')]
        filter: Option<Vec<String>>,

        /// Output directory
        #[arg(short, long, default_value = "./resources")]
        output: PathBuf,
    },

    /// List the resources of a JSON or YAML template
    #[command(after_help = "EXAMPLES:\n  \
        cfn-bindgen inspect --template stack.yaml\n  \
        cfn-bindgen inspect --template stack.json --type AWS::SQS::Queue")]
    Inspect {
        /// Path to the template
        #[arg(short, long)]
        template: PathBuf,

        /// Only show resources of this type
        #[arg(long = "type")]
        type_name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse {
            spec,
            fragment,
            filter,
        } => parse_command(&spec, &fragment, filter.as_deref(), cli.verbose),
        Commands::Generate {
            spec,
            fragment,
            config,
            filter,
            output,
        } => generate_command(
            &spec,
            &fragment,
            config.as_deref(),
            filter.as_deref(),
            &output,
            cli.verbose,
        ),
        Commands::Inspect {
            template,
            type_name,
        } => inspect_command(&template, type_name.as_deref()),
    }
}

/// Log to stderr, honouring `RUST_LOG` when set
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_specification(
    spec_path: &Path,
    fragments: &[PathBuf],
    config: GeneratorConfig,
    filter: Option<&[String]>,
) -> Result<SpecificationDefinition> {
    let mut parser = SpecParser::from_file(spec_path)
        .with_context(|| format!("Failed to load specification {}", spec_path.display()))?
        .with_config(config);

    for fragment in fragments {
        println!("{} Merging fragment: {}", "→".cyan(), fragment.display());
        parser = parser
            .with_fragment_file(fragment)
            .with_context(|| format!("Failed to load fragment {}", fragment.display()))?;
    }

    let spec_def = match filter {
        Some(services) => parser.parse_filtered(services),
        None => parser.parse(),
    }
    .context("Failed to parse specification")?;

    debug!(
        version = %spec_def.version,
        resources = spec_def.resource_count(),
        "loaded specification"
    );
    Ok(spec_def)
}

fn parse_command(
    spec_path: &Path,
    fragments: &[PathBuf],
    filter: Option<&[String]>,
    verbose: bool,
) -> Result<()> {
    println!(
        "{} Parsing specification: {}",
        "→".cyan(),
        spec_path.display()
    );

    let spec_def = load_specification(spec_path, fragments, GeneratorConfig::default(), filter)?;

    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("\n{}", "Specification:".bold());
    println!("  Version: {}", spec_def.version.yellow());
    println!("  Services: {}", spec_def.services.len());
    println!("  Resource types: {}", spec_def.resource_count());
    println!("  Property types: {}", spec_def.property_type_count());

    if verbose {
        for service in &spec_def.services {
            println!(
                "\n{} ({})",
                service.namespace.bold(),
                service.name.as_str().cyan()
            );
            for resource in &service.resources {
                println!(
                    "  • {} ({} fields, {} property types, {} attributes)",
                    resource.type_name.cyan(),
                    resource.fields.len(),
                    resource.property_types.len(),
                    resource.attributes.len()
                );
            }
        }
    }

    Ok(())
}

fn generate_command(
    spec_path: &Path,
    fragments: &[PathBuf],
    config_path: Option<&Path>,
    filter: Option<&[String]>,
    output: &Path,
    verbose: bool,
) -> Result<()> {
    println!(
        "{} Generating bindings from: {}",
        "→".cyan(),
        spec_path.display()
    );

    let config = match config_path {
        Some(path) => {
            println!("{} Using config: {}", "→".cyan(), path.display());
            GeneratorConfig::load(path).context("Failed to load generator config")?
        },
        None => GeneratorConfig::default(),
    };

    println!("{} Parsing specification...", "→".cyan());
    let spec_def = load_specification(spec_path, fragments, config.clone(), filter)?;
    if spec_def.services.is_empty() {
        anyhow::bail!("No resource types left to generate, check --filter");
    }
    println!(
        "{} Parsed {} resource types in {} services",
        "✓".green(),
        spec_def.resource_count(),
        spec_def.services.len()
    );

    println!("{} Generating modules...", "→".cyan());
    let generator =
        BindingGenerator::new(spec_def, config).context("Failed to create generator")?;
    let written = generator
        .generate_to_directory(output)
        .context("Failed to generate bindings")?;

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!(
        "  {} files written to {}",
        written.len(),
        output.display()
    );
    if verbose {
        for path in &written {
            println!("  📄 {}", path.display());
        }
    }

    Ok(())
}

fn inspect_command(template_path: &Path, type_filter: Option<&str>) -> Result<()> {
    let template = load_template(template_path)?;

    if let Some(description) = &template.description {
        println!("{}", description.bold());
    }

    let mut shown = 0;
    for (name, resource) in &template.resources {
        let type_name = resource.type_name().unwrap_or("<no Type>");
        if type_filter.is_some_and(|t| t != type_name) {
            continue;
        }
        shown += 1;
        println!("  • {} {} {}", name.cyan(), type_name, binding_status(resource));
    }

    println!(
        "\n{} resources shown, {} in template",
        shown,
        template.resources.len()
    );
    Ok(())
}

/// Whether a generated binding exists for the entry, and whether the
/// entry decodes with it
fn binding_status(resource: &TemplateResource) -> ColoredString {
    let (type_name, properties) = match resource {
        TemplateResource::Typed(_) => return "typed".green(),
        TemplateResource::Raw(raw) => (
            resource.type_name().unwrap_or_default(),
            raw.get("Properties").cloned(),
        ),
    };

    match all::decode_typed(type_name, properties) {
        Some(Ok(_)) => "binding".green(),
        Some(Err(e)) => format!("invalid: {}", e).red(),
        None => "no binding".dimmed(),
    }
}

/// Load a template, as YAML when the extension says so and JSON otherwise
fn load_template(path: &Path) -> Result<Template> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template {}", path.display()))?;

    let template = if is_yaml(path) {
        Template::from_yaml(&content)
    } else {
        Template::from_json(&content)
    }
    .with_context(|| format!("Failed to parse template {}", path.display()))?;

    Ok(template)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}
