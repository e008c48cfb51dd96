//! Resource envelope codec
//!
//! A resource travels as `{"Type": "<type name>", "Properties": {...}}`.
//! These functions convert between that envelope and a typed [`Resource`],
//! and find resources of one type in a template's `Resources` map.

use crate::error::{CodecError, Result};
use crate::template::TemplateResource;
use crate::Resource;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Serialize)]
struct Envelope<'a, R> {
    #[serde(rename = "Type")]
    type_name: &'static str,
    #[serde(rename = "Properties")]
    properties: &'a R,
}

impl<'a, R: Resource> Envelope<'a, R> {
    fn new(resource: &'a R) -> Self {
        Self {
            type_name: R::TYPE_NAME,
            properties: resource,
        }
    }
}

/// Encode a resource as a compact JSON envelope
///
/// `Properties` keeps the declared field order of `R`.
pub fn encode<R: Resource>(resource: &R) -> Result<Vec<u8>> {
    serde_json::to_vec(&Envelope::new(resource)).map_err(CodecError::Encode)
}

/// Encode a resource as an indented JSON envelope
pub fn encode_pretty<R: Resource>(resource: &R) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(&Envelope::new(resource)).map_err(CodecError::Encode)
}

/// Decode a resource from a JSON envelope
///
/// `Type` is not checked against `R::TYPE_NAME`. A missing or `null`
/// `Properties` gives `R::default()`.
pub fn decode<R: Resource>(bytes: &[u8]) -> Result<R> {
    let value: serde_json::Value = serde_json::from_slice(bytes).map_err(CodecError::Decode)?;
    decode_value(value)
}

/// Decode a resource from an already parsed JSON envelope
pub fn decode_value<R: Resource>(value: serde_json::Value) -> Result<R> {
    let serde_json::Value::Object(mut envelope) = value else {
        return Err(CodecError::decode_message("resource envelope must be a JSON object"));
    };
    decode_properties(envelope.remove("Properties"))
}

/// Decode the contents of a `Properties` key
pub fn decode_properties<R: Resource>(properties: Option<serde_json::Value>) -> Result<R> {
    match properties {
        None | Some(serde_json::Value::Null) => Ok(R::default()),
        Some(properties @ serde_json::Value::Object(_)) => {
            serde_json::from_value(properties).map_err(CodecError::Decode)
        },
        Some(_) => Err(CodecError::decode_message("Properties must be a JSON object")),
    }
}

/// Every resource of type `R`, keyed by logical name
///
/// Entries of other types are skipped, and so are entries of type `R`
/// that fail to decode.
pub fn lookup_all_by_type<R: Resource>(
    resources: &BTreeMap<String, TemplateResource>,
) -> BTreeMap<String, R> {
    resources
        .iter()
        .filter_map(|(name, resource)| match resource.extract::<R>() {
            Ok(found) => found.map(|r| (name.clone(), r)),
            Err(e) => {
                debug!(
                    resource = %name,
                    type_name = R::TYPE_NAME,
                    error = %e,
                    "skipping resource that failed to decode"
                );
                None
            },
        })
        .collect()
}

/// The resource named `name`, which must be of type `R`
pub fn lookup_by_name<R: Resource>(
    resources: &BTreeMap<String, TemplateResource>,
    name: &str,
) -> Result<R> {
    let not_found = || CodecError::NotFound {
        name: name.to_string(),
        type_name: R::TYPE_NAME,
    };

    match resources.get(name).map(TemplateResource::extract::<R>) {
        Some(Ok(Some(resource))) => Ok(resource),
        Some(Err(e)) => {
            debug!(
                resource = %name,
                type_name = R::TYPE_NAME,
                error = %e,
                "resource failed to decode"
            );
            Err(not_found())
        },
        Some(Ok(None)) | None => Err(not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::appmesh::Mesh;
    use crate::Value;

    #[test]
    fn test_encode_mesh() {
        let mesh = Mesh {
            mesh_name: Some(Value::from("prod-mesh")),
            ..Default::default()
        };
        let bytes = encode(&mesh).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"Type":"AWS::AppMesh::Mesh","Properties":{"MeshName":"prod-mesh"}}"#
        );
    }

    #[test]
    fn test_encode_empty_resource() {
        let bytes = encode(&Mesh::default()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"Type":"AWS::AppMesh::Mesh","Properties":{}}"#
        );
    }

    #[test]
    fn test_decode_ignores_type() {
        let mesh: Mesh =
            decode(br#"{"Type":"AWS::SQS::Queue","Properties":{"MeshName":"m"}}"#).unwrap();
        assert_eq!(mesh.mesh_name, Some(Value::from("m")));
    }

    #[test]
    fn test_decode_rejects_non_objects() {
        assert!(matches!(
            decode::<Mesh>(b"[1, 2, 3]"),
            Err(CodecError::Decode(_))
        ));
        assert!(matches!(
            decode::<Mesh>(b"not json"),
            Err(CodecError::Decode(_))
        ));
        assert!(matches!(
            decode::<Mesh>(br#"{"Properties": ["MeshName"]}"#),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_mismatched_field_type() {
        let result = decode::<Mesh>(br#"{"Properties": {"Tags": "not-a-list"}}"#);
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }
}
