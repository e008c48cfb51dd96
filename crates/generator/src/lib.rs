//! Rust binding generation for CloudFormation resource types
//!
//! This crate renders the parsed specification IR into Rust modules: one
//! directory per service, one file per resource type, and a registry
//! (`all.rs`) mapping type names to their decoders.

mod templates;

use cfn_bindgen_common::naming::module_file;
use cfn_bindgen_common::{
    GeneratorConfig, GeneratorError, ResourceDefinition, Result, ServiceDefinition,
    SpecificationDefinition,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;
use tracing::{debug, info};

/// One resource type in the generated registry
#[derive(Debug, Serialize)]
struct RegistryEntry<'a> {
    type_name: &'a str,
    service: &'a str,
    struct_name: &'a str,
}

/// Binding generator
///
/// Transforms a [`SpecificationDefinition`] into a tree of Rust modules:
/// - `mod.rs` declaring every service module
/// - `all.rs` with the registry of resource types
/// - `<service>/mod.rs` re-exporting the resource structs
/// - `<service>/<resource>.rs` with a resource struct and its property types
pub struct BindingGenerator {
    spec_def: SpecificationDefinition,
    config: GeneratorConfig,
    tera: Tera,
}

impl BindingGenerator {
    /// Create a new generator from a parsed specification
    pub fn new(spec_def: SpecificationDefinition, config: GeneratorConfig) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self {
            spec_def,
            config,
            tera,
        })
    }

    pub fn specification(&self) -> &SpecificationDefinition {
        &self.spec_def
    }

    /// Generate all modules into `output_dir`
    ///
    /// Returns the paths of the written files in the order they were
    /// written. Existing files are overwritten; stale files of services
    /// no longer in the specification are left alone.
    pub fn generate_to_directory(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        create_dir(output_dir)?;

        let mut written = Vec::new();
        written.push(write_file(
            &output_dir.join("mod.rs"),
            &self.render_resources_mod()?,
        )?);
        written.push(write_file(&output_dir.join("all.rs"), &self.render_registry()?)?);

        for service in &self.spec_def.services {
            let service_dir = output_dir.join(service.name.trim_start_matches("r#"));
            create_dir(&service_dir)?;

            written.push(write_file(
                &service_dir.join("mod.rs"),
                &self.render_service_mod(service)?,
            )?);

            for resource in &service.resources {
                let path = service_dir.join(module_file(&resource.module_name));
                written.push(write_file(&path, &self.render_resource(resource)?)?);
            }
        }

        info!(
            services = self.spec_def.services.len(),
            resources = self.spec_def.resource_count(),
            files = written.len(),
            "generated bindings"
        );
        Ok(written)
    }

    /// Render the module of one resource type
    pub fn render_resource(&self, resource: &ResourceDefinition) -> Result<String> {
        let mut context = self.create_context();
        context.insert("resource", resource);
        self.render("resource.rs", &context)
    }

    /// Render the `mod.rs` of one service
    pub fn render_service_mod(&self, service: &ServiceDefinition) -> Result<String> {
        let mut context = self.create_context();
        context.insert("service", service);
        self.render("service_mod.rs", &context)
    }

    /// Render the top-level `mod.rs`
    pub fn render_resources_mod(&self) -> Result<String> {
        let mut context = self.create_context();
        context.insert("version", &self.spec_def.version);
        context.insert("services", &self.spec_def.services);
        self.render("resources_mod.rs", &context)
    }

    /// Render `all.rs`, the registry of every resource type
    pub fn render_registry(&self) -> Result<String> {
        let mut registry: Vec<RegistryEntry<'_>> = self
            .spec_def
            .services
            .iter()
            .flat_map(|service| {
                service.resources.iter().map(move |resource| RegistryEntry {
                    type_name: &resource.type_name,
                    service: &service.name,
                    struct_name: &resource.struct_name,
                })
            })
            .collect();
        // binary search in the generated code relies on this order
        registry.sort_by(|a, b| a.type_name.cmp(b.type_name));

        let mut context = self.create_context();
        context.insert("registry", &registry);
        self.render("all.rs", &context)
    }

    fn render(&self, template: &str, context: &tera::Context) -> Result<String> {
        debug!(template, "rendering");
        self.tera.render(template, context).map_err(|e| {
            GeneratorError::Generation(format!("Template error in {}: {:?}", template, e))
        })
    }

    /// Context shared by every template
    fn create_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        context.insert("runtime", &self.config.runtime_path);
        context
    }
}

/// Generate bindings (convenience function)
pub fn generate_bindings(
    spec_def: SpecificationDefinition,
    config: GeneratorConfig,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    BindingGenerator::new(spec_def, config)?.generate_to_directory(output_dir)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        GeneratorError::Generation(format!("Failed to create directory {:?}: {}", path, e))
    })
}

fn write_file(path: &Path, contents: &str) -> Result<PathBuf> {
    fs::write(path, contents)
        .map_err(|e| GeneratorError::Generation(format!("Failed to write {:?}: {}", path, e)))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(path.to_path_buf())
}
