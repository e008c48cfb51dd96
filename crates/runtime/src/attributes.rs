//! Resource attributes that sit next to `Type` and `Properties`

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// What happens to the resource when it is removed from the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

/// What happens to the old resource when an update replaces it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateReplacePolicy {
    Delete,
    Retain,
    Snapshot,
}

/// Attributes of a resource entry in a template
///
/// All attributes are left out of the output when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceAttributes {
    /// Logical names this resource must be created after
    ///
    /// Templates may give a single name instead of a list.
    #[serde(
        rename = "DependsOn",
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub depends_on: Vec<String>,

    #[serde(
        rename = "Metadata",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub metadata: BTreeMap<String, serde_json::Value>,

    /// Name of a condition from the `Conditions` section
    #[serde(
        rename = "Condition",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub condition: Option<String>,

    #[serde(
        rename = "DeletionPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deletion_policy: Option<DeletionPolicy>,

    #[serde(
        rename = "UpdateReplacePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_replace_policy: Option<UpdateReplacePolicy>,

    #[serde(
        rename = "UpdatePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_policy: Option<serde_json::Value>,

    #[serde(
        rename = "CreationPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_policy: Option<serde_json::Value>,

    /// Entry keys without a field of their own, e.g. `Version` or
    /// vendor extensions, written back unchanged
    ///
    /// Must not hold `Type` or `Properties`.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ResourceAttributes {
    pub fn is_empty(&self) -> bool {
        *self == ResourceAttributes::default()
    }
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}
