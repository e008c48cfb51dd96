use crate::{PropertyType, Value};
use serde::{Deserialize, Serialize};

/// Key-value tag accepted by the `Tags` property of many resource types
///
/// Unset fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "Key", default)]
    pub key: Option<Value>,

    #[serde(rename = "Value", default)]
    pub value: Option<Value>,
}

impl Tag {
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

impl PropertyType for Tag {
    const TYPE_NAME: &'static str = "Tag";
}
