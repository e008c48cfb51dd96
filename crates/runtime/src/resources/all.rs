//! Registry of every generated resource type
//!
//! Generated by cfn-bindgen from the CloudFormation Resource Specification.
//! Do not edit by hand.

use crate::{DynResource, Resource, Result};

/// Type names of every generated resource, sorted
pub const RESOURCE_TYPES: &[&str] = &[
    "AWS::AppMesh::Mesh",
    "AWS::Lambda::Alias",
    "AWS::Logs::LogGroup",
    "AWS::SQS::Queue",
];

/// Whether a binding exists for `type_name`
pub fn is_known(type_name: &str) -> bool {
    RESOURCE_TYPES.binary_search(&type_name).is_ok()
}

/// Decode the `Properties` of a resource of type `type_name`
///
/// Returns `None` when no binding exists for the type.
pub fn decode_typed(
    type_name: &str,
    properties: Option<serde_json::Value>,
) -> Option<Result<Box<dyn DynResource>>> {
    let decoded = match type_name {
        "AWS::AppMesh::Mesh" => decode::<super::appmesh::Mesh>(properties),
        "AWS::Lambda::Alias" => decode::<super::lambda::Alias>(properties),
        "AWS::Logs::LogGroup" => decode::<super::logs::LogGroup>(properties),
        "AWS::SQS::Queue" => decode::<super::sqs::Queue>(properties),
        _ => return None,
    };
    Some(decoded)
}

fn decode<R: Resource>(properties: Option<serde_json::Value>) -> Result<Box<dyn DynResource>> {
    let resource = crate::codec::decode_properties::<R>(properties)?;
    Ok(Box::new(resource))
}
