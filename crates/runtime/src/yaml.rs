//! YAML templates
//!
//! YAML templates may call intrinsic functions with short-form tags
//! (`!Ref Bucket`, `!GetAtt Bucket.Arn`, `!Sub "${AWS::StackName}-x"`).
//! Loading rewrites them to the long form used in JSON templates.

use crate::error::{CodecError, Result};
use crate::intrinsic::IntrinsicFunction;
use serde_json::{json, Map, Number};
use serde_yaml::value::TaggedValue;

/// Convert a YAML document to JSON, expanding short-form tags
pub(crate) fn to_json(value: serde_yaml::Value) -> Result<serde_json::Value> {
    Ok(match value {
        serde_yaml::Value::Null => serde_json::Value::Null,
        serde_yaml::Value::Bool(b) => serde_json::Value::Bool(b),
        serde_yaml::Value::Number(n) => number_to_json(&n)?,
        serde_yaml::Value::String(s) => serde_json::Value::String(s),
        serde_yaml::Value::Sequence(items) => serde_json::Value::Array(
            items
                .into_iter()
                .map(to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                object.insert(key_to_string(key)?, to_json(value)?);
            }
            serde_json::Value::Object(object)
        },
        serde_yaml::Value::Tagged(tagged) => expand_tag(*tagged)?,
    })
}

fn number_to_json(n: &serde_yaml::Number) -> Result<serde_json::Value> {
    if let Some(i) = n.as_i64() {
        return Ok(json!(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(json!(u));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .map(serde_json::Value::Number)
        .ok_or_else(|| CodecError::Template(format!("Unsupported number {}", n)))
}

fn key_to_string(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(CodecError::Template(format!(
            "Mapping keys must be scalars, found {:?}",
            other
        ))),
    }
}

/// Rewrite `!Tag argument` to `{"<function>": argument}`
fn expand_tag(tagged: TaggedValue) -> Result<serde_json::Value> {
    let tag = tagged.tag.to_string();
    let name = tag.trim_start_matches('!');
    let argument = to_json(tagged.value)?;

    let key = match name {
        // not a function, but used inside condition functions
        "Condition" => "Condition",
        _ => IntrinsicFunction::from_short_tag(name)
            .map(IntrinsicFunction::as_str)
            .ok_or_else(|| CodecError::Template(format!("Unknown YAML tag {}", tag)))?,
    };

    let argument = match (key, argument) {
        ("Fn::GetAtt", serde_json::Value::String(path)) => split_get_att(&path)?,
        (_, argument) => argument,
    };

    let mut object = Map::new();
    object.insert(key.to_string(), argument);
    Ok(serde_json::Value::Object(object))
}

/// `Resource.Attribute` to `["Resource", "Attribute"]`
///
/// Only the first dot separates the names, attribute names such as
/// `Endpoint.Address` keep theirs.
fn split_get_att(path: &str) -> Result<serde_json::Value> {
    match path.split_once('.') {
        Some((resource, attribute)) if !resource.is_empty() && !attribute.is_empty() => {
            Ok(json!([resource, attribute]))
        },
        _ => Err(CodecError::Template(format!(
            "!GetAtt expects Resource.Attribute, found '{}'",
            path
        ))),
    }
}
