//! Template loading and filters

use cfn_bindgen_common::{FieldDefinition, GeneratorError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Load all templates
///
/// Templates are compiled into the binary so generated output does not
/// depend on the working directory.
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.register_filter("rust_type", rust_type_filter);
    tera.register_filter("doc_comment", doc_comment_filter);

    // added together so `resource.rs` can import the macros
    tera.add_raw_templates(vec![
        ("macros.rs", include_str!("../templates/macros.rs.tera")),
        ("resource.rs", include_str!("../templates/resource.rs.tera")),
        ("service_mod.rs", include_str!("../templates/service_mod.rs.tera")),
        ("resources_mod.rs", include_str!("../templates/resources_mod.rs.tera")),
        ("all.rs", include_str!("../templates/all.rs.tera")),
    ])
    .map_err(|e| GeneratorError::Generation(format!("Failed to load templates: {}", e)))?;

    Ok(tera)
}

/// Filter rendering the Rust type of a field, without the `Option`
///
/// Takes the runtime crate path as the `runtime` argument.
fn rust_type_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let field: FieldDefinition = serde_json::from_value(value.clone())
        .map_err(|e| tera::Error::msg(format!("rust_type filter expects a field: {}", e)))?;
    let runtime = args
        .get("runtime")
        .and_then(Value::as_str)
        .unwrap_or("crate");

    Ok(Value::String(field.rust_type(runtime)))
}

/// Filter turning documentation text into `///` lines
///
/// Bare URLs are wrapped in angle brackets so rustdoc links them.
fn doc_comment_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("doc_comment filter expects a string"))?;
    let indent = args.get("indent").and_then(Value::as_str).unwrap_or("");

    let lines: Vec<String> = text
        .lines()
        .map(|line| {
            if line.starts_with("http") {
                format!("{}/// <{}>", indent, line)
            } else {
                format!("{}/// {}", indent, line)
            }
        })
        .collect();

    Ok(Value::String(lines.join("\n")))
}
