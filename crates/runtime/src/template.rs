//! Template document model
//!
//! Resources parsed from a document stay raw JSON objects until they are
//! looked up as a typed [`Resource`] or converted with
//! [`Template::resolve_types`]. Resources added from code are stored typed.

use crate::attributes::ResourceAttributes;
use crate::error::{CodecError, Result};
use crate::resource::DynResource;
use crate::resources::all;
use crate::{codec, yaml, Resource};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::debug;

/// Default `AWSTemplateFormatVersion` of new templates
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// A typed resource together with its attributes
#[derive(Debug, Clone)]
pub struct TypedResource {
    pub resource: Box<dyn DynResource>,
    pub attributes: ResourceAttributes,
}

impl TypedResource {
    pub fn new<R: Resource>(resource: R) -> Self {
        Self {
            resource: Box::new(resource),
            attributes: ResourceAttributes::default(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.resource.type_name()
    }
}

#[derive(Serialize)]
struct TypedEnvelope<'a> {
    #[serde(rename = "Type")]
    type_name: &'static str,
    #[serde(rename = "Properties")]
    properties: serde_json::Value,
    #[serde(flatten)]
    attributes: &'a ResourceAttributes,
}

impl Serialize for TypedResource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let properties = self.resource.properties().map_err(serde::ser::Error::custom)?;
        TypedEnvelope {
            type_name: self.resource.type_name(),
            properties,
            attributes: &self.attributes,
        }
        .serialize(serializer)
    }
}

/// A value of the `Resources` section
#[derive(Debug, Clone)]
pub enum TemplateResource {
    /// Built from code or converted by [`Template::resolve_types`]
    Typed(TypedResource),
    /// Parsed from a document and not converted yet
    Raw(serde_json::Map<String, serde_json::Value>),
}

impl TemplateResource {
    /// The `Type` of the entry, if it has one
    pub fn type_name(&self) -> Option<&str> {
        match self {
            TemplateResource::Typed(typed) => Some(typed.type_name()),
            TemplateResource::Raw(raw) => raw.get("Type").and_then(serde_json::Value::as_str),
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, TemplateResource::Typed(_))
    }

    /// The entry as an `R`
    ///
    /// Gives `Ok(None)` when the entry is of another type, and an error when
    /// a raw entry has type `R` but its properties do not decode.
    pub fn extract<R: Resource>(&self) -> Result<Option<R>> {
        match self {
            TemplateResource::Typed(typed) => Ok(typed.resource.downcast_ref::<R>().cloned()),
            TemplateResource::Raw(raw) => {
                if self.type_name() != Some(R::TYPE_NAME) {
                    return Ok(None);
                }
                codec::decode_properties(raw.get("Properties").cloned()).map(Some)
            },
        }
    }
}

impl Serialize for TemplateResource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            TemplateResource::Typed(typed) => typed.serialize(serializer),
            TemplateResource::Raw(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TemplateResource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Map::deserialize(deserializer).map(TemplateResource::Raw)
    }
}

/// A CloudFormation template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub format_version: Option<String>,

    /// A macro name or a list of them, e.g. `AWS::Serverless-2016-10-31`
    #[serde(rename = "Transform", default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<serde_json::Value>,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Metadata", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,

    #[serde(rename = "Parameters", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, serde_json::Value>,

    #[serde(rename = "Mappings", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, serde_json::Value>,

    #[serde(rename = "Conditions", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: BTreeMap<String, serde_json::Value>,

    #[serde(rename = "Resources", default)]
    pub resources: BTreeMap<String, TemplateResource>,

    #[serde(rename = "Outputs", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, serde_json::Value>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    /// Empty template with the current format version
    pub fn new() -> Self {
        Self {
            format_version: Some(TEMPLATE_FORMAT_VERSION.to_string()),
            transform: None,
            description: None,
            metadata: BTreeMap::new(),
            parameters: BTreeMap::new(),
            mappings: BTreeMap::new(),
            conditions: BTreeMap::new(),
            resources: BTreeMap::new(),
            outputs: BTreeMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(CodecError::Decode)
    }

    /// Parse a YAML template, expanding short-form tags such as `!Ref`
    pub fn from_yaml(content: &str) -> Result<Self> {
        let document: serde_yaml::Value = serde_yaml::from_str(content)?;
        let json = yaml::to_json(document)?;
        serde_json::from_value(json).map_err(CodecError::Decode)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(CodecError::Encode)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(CodecError::Encode)
    }

    /// Serialize as YAML, intrinsics in their long form
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Add a typed resource, replacing any entry with the same name
    pub fn add_resource<R: Resource>(&mut self, name: impl Into<String>, resource: R) {
        self.resources
            .insert(name.into(), TemplateResource::Typed(TypedResource::new(resource)));
    }

    /// Add a typed resource with attributes
    ///
    /// Fails when the attributes include an `UpdatePolicy` or a
    /// `CreationPolicy` the resource type does not accept, or when
    /// [`ResourceAttributes::extra`] holds `Type` or `Properties`.
    pub fn add_resource_with_attributes<R: Resource>(
        &mut self,
        name: impl Into<String>,
        resource: R,
        attributes: ResourceAttributes,
    ) -> Result<()> {
        if attributes.update_policy.is_some() && !R::SUPPORTS_UPDATE_POLICY {
            return Err(CodecError::UnsupportedAttribute {
                type_name: R::TYPE_NAME,
                attribute: "UpdatePolicy",
            });
        }
        if attributes.creation_policy.is_some() && !R::SUPPORTS_CREATION_POLICY {
            return Err(CodecError::UnsupportedAttribute {
                type_name: R::TYPE_NAME,
                attribute: "CreationPolicy",
            });
        }
        for reserved in ["Type", "Properties"] {
            if attributes.extra.contains_key(reserved) {
                return Err(CodecError::UnsupportedAttribute {
                    type_name: R::TYPE_NAME,
                    attribute: reserved,
                });
            }
        }

        self.resources.insert(
            name.into(),
            TemplateResource::Typed(TypedResource {
                resource: Box::new(resource),
                attributes,
            }),
        );
        Ok(())
    }

    /// Every resource of type `R`, keyed by logical name
    pub fn get_all<R: Resource>(&self) -> BTreeMap<String, R> {
        codec::lookup_all_by_type(&self.resources)
    }

    /// The resource named `name`, which must be of type `R`
    pub fn get<R: Resource>(&self, name: &str) -> Result<R> {
        codec::lookup_by_name(&self.resources, name)
    }

    /// Convert raw resources of every type with a generated binding into
    /// typed resources
    ///
    /// Unknown types stay raw. Returns the number of converted resources.
    /// On error the template is left unchanged.
    pub fn resolve_types(&mut self) -> Result<usize> {
        let mut resolved = Vec::new();
        for (name, entry) in &self.resources {
            if let TemplateResource::Raw(raw) = entry {
                if let Some(typed) = resolve_raw(name, raw)? {
                    resolved.push((name.clone(), typed));
                }
            }
        }

        let converted = resolved.len();
        for (name, typed) in resolved {
            self.resources.insert(name, TemplateResource::Typed(typed));
        }

        debug!(converted, "resolved resource types");
        Ok(converted)
    }
}

fn resolve_raw(
    name: &str,
    raw: &serde_json::Map<String, serde_json::Value>,
) -> Result<Option<TypedResource>> {
    let Some(type_name) = raw.get("Type").and_then(serde_json::Value::as_str) else {
        return Ok(None);
    };

    let invalid = |source| CodecError::InvalidResource {
        name: name.to_string(),
        type_name: type_name.to_string(),
        source,
    };

    let resource = match all::decode_typed(type_name, raw.get("Properties").cloned()) {
        Some(Ok(resource)) => resource,
        Some(Err(CodecError::Decode(source))) => return Err(invalid(source)),
        Some(Err(e)) => return Err(e),
        None => {
            debug!(resource = %name, type_name, "no binding for resource type");
            return Ok(None);
        },
    };

    let mut rest = raw.clone();
    rest.remove("Type");
    rest.remove("Properties");
    let attributes: ResourceAttributes =
        serde_json::from_value(serde_json::Value::Object(rest)).map_err(invalid)?;

    Ok(Some(TypedResource {
        resource,
        attributes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::sqs::Queue;
    use crate::Value;
    use serde_json::json;

    #[test]
    fn test_new_template() {
        let template = Template::new();
        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            json!({"AWSTemplateFormatVersion": "2010-09-09", "Resources": {}})
        );
    }

    #[test]
    fn test_raw_entry_type_name() {
        let template = Template::from_json(
            r#"{"Resources": {"Q": {"Type": "AWS::SQS::Queue"}, "X": {"Properties": {}}}}"#,
        )
        .unwrap();
        assert_eq!(template.format_version, None);
        assert_eq!(template.resources["Q"].type_name(), Some("AWS::SQS::Queue"));
        assert_eq!(template.resources["X"].type_name(), None);
        assert!(!template.resources["Q"].is_typed());
    }

    #[test]
    fn test_non_object_resource_rejected() {
        assert!(Template::from_json(r#"{"Resources": {"Q": 5}}"#).is_err());
    }

    #[test]
    fn test_typed_resource_with_attributes() {
        let mut template = Template::new();
        let queue = Queue {
            delay_seconds: Some(Value::from(5)),
            ..Default::default()
        };
        let attributes = ResourceAttributes {
            depends_on: vec!["Topic".to_string()],
            deletion_policy: Some(crate::DeletionPolicy::Retain),
            ..Default::default()
        };
        template
            .add_resource_with_attributes("Jobs", queue, attributes)
            .unwrap();

        assert_eq!(
            serde_json::to_value(&template.resources["Jobs"]).unwrap(),
            json!({
                "Type": "AWS::SQS::Queue",
                "Properties": {"DelaySeconds": 5},
                "DependsOn": ["Topic"],
                "DeletionPolicy": "Retain"
            })
        );
    }

    #[test]
    fn test_failed_resolve_leaves_template_raw() {
        let mut template = Template::from_json(
            r#"{"Resources": {
                "A": {"Type": "AWS::SQS::Queue", "Properties": {"DelaySeconds": 5}},
                "B": {"Type": "AWS::AppMesh::Mesh", "Properties": {"Tags": 7}},
                "C": {"Type": "AWS::SQS::Queue"}
            }}"#,
        )
        .unwrap();

        let result = template.resolve_types();
        assert!(matches!(
            result,
            Err(CodecError::InvalidResource { ref name, .. }) if name == "B"
        ));
        assert!(template.resources.values().all(|entry| !entry.is_typed()));
    }

    #[test]
    fn test_resolve_keeps_unmodelled_keys() {
        let mut template = Template::from_json(
            r#"{"Resources": {"Q": {
                "Type": "AWS::SQS::Queue",
                "Properties": {"DelaySeconds": 5},
                "DependsOn": "Topic",
                "Version": "2012-10-17",
                "x-vendor": {"owner": "platform"}
            }}}"#,
        )
        .unwrap();

        assert_eq!(template.resolve_types().unwrap(), 1);
        let TemplateResource::Typed(typed) = &template.resources["Q"] else {
            panic!("Q was not resolved");
        };
        assert!(!typed.attributes.extra.contains_key("Type"));
        assert!(!typed.attributes.extra.contains_key("Properties"));
        assert_eq!(
            serde_json::to_value(&template.resources["Q"]).unwrap(),
            json!({
                "Type": "AWS::SQS::Queue",
                "Properties": {"DelaySeconds": 5},
                "DependsOn": ["Topic"],
                "Version": "2012-10-17",
                "x-vendor": {"owner": "platform"}
            })
        );
    }

    #[test]
    fn test_update_policy_requires_support() {
        let mut template = Template::new();
        let attributes = ResourceAttributes {
            update_policy: Some(json!({"AutoScalingRollingUpdate": {}})),
            ..Default::default()
        };
        let result = template.add_resource_with_attributes("Q", Queue::default(), attributes);
        assert!(matches!(
            result,
            Err(CodecError::UnsupportedAttribute {
                attribute: "UpdatePolicy",
                ..
            })
        ));
        assert!(template.resources.is_empty());

        let mut attributes = ResourceAttributes::default();
        attributes.extra.insert("Type".to_string(), json!("AWS::SNS::Topic"));
        let result = template.add_resource_with_attributes("Q", Queue::default(), attributes);
        assert!(matches!(
            result,
            Err(CodecError::UnsupportedAttribute {
                attribute: "Type",
                ..
            })
        ));
        assert!(template.resources.is_empty());
    }
}
