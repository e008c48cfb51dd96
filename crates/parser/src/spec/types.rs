//! CloudFormation Resource Specification type definitions
//!
//! These types mirror the JSON documents AWS publishes per region, e.g.
//! `https://d1uauaxba7bl26.cloudfront.net/latest/gzip/CloudFormationResourceSpecification.json`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root Resource Specification document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceSpecification {
    /// Specification version (e.g., "18.6.0")
    #[serde(default)]
    pub resource_specification_version: String,

    /// Property types keyed by full name (e.g., `AWS::AppMesh::Mesh.MeshSpec`)
    #[serde(default)]
    pub property_types: BTreeMap<String, PropertyTypeSpec>,

    /// Resource types keyed by full name (e.g., `AWS::AppMesh::Mesh`)
    ///
    /// Single-resource documents use the singular `ResourceType` key.
    #[serde(default, alias = "ResourceType")]
    pub resource_types: BTreeMap<String, ResourceTypeSpec>,
}

impl ResourceSpecification {
    /// Merge a fragment document (such as the SAM transform specification)
    /// into this one; entries of the fragment replace entries of the same name
    pub fn merge(&mut self, fragment: ResourceSpecification) {
        self.property_types.extend(fragment.property_types);
        self.resource_types.extend(fragment.resource_types);
    }
}

/// A resource type entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceTypeSpec {
    /// Link to the CloudFormation User Guide
    #[serde(default)]
    pub documentation: Option<String>,

    /// Attributes readable with `Fn::GetAtt`
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeSpec>,

    /// Resource properties
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySpec>,
}

/// A property type entry
///
/// Most property types list `Properties`. A few are aliases for a primitive
/// and carry `PrimitiveType` (or a list/map of one) instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyTypeSpec {
    #[serde(default)]
    pub documentation: Option<String>,

    #[serde(default)]
    pub properties: BTreeMap<String, PropertySpec>,

    #[serde(default)]
    pub primitive_type: Option<String>,

    #[serde(default, rename = "Type")]
    pub type_: Option<String>,

    #[serde(default)]
    pub primitive_item_type: Option<String>,

    #[serde(default)]
    pub item_type: Option<String>,
}

impl PropertyTypeSpec {
    /// Whether this entry stands for a primitive instead of an object
    pub fn is_alias(&self) -> bool {
        self.properties.is_empty()
            && (self.primitive_type.is_some() || self.primitive_item_type.is_some())
    }
}

/// A single property of a resource or property type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertySpec {
    /// Link to the CloudFormation User Guide
    #[serde(default)]
    pub documentation: Option<String>,

    /// For lists, whether duplicate values are tolerated
    #[serde(default)]
    pub duplicates_allowed: Option<bool>,

    /// Item type of a list or map of property types
    #[serde(default)]
    pub item_type: Option<String>,

    /// Item type of a list or map of primitives
    #[serde(default)]
    pub primitive_item_type: Option<String>,

    /// Type of a primitive property
    #[serde(default)]
    pub primitive_type: Option<String>,

    #[serde(default)]
    pub required: bool,

    /// `List`, `Map`, or a property type name
    #[serde(default, rename = "Type")]
    pub type_: Option<String>,

    /// `Mutable`, `Immutable` or `Conditional`
    #[serde(default)]
    pub update_type: Option<String>,

    // Polymorphic properties list every shape they accept
    #[serde(default)]
    pub primitive_types: Vec<String>,

    #[serde(default)]
    pub primitive_item_types: Vec<String>,

    #[serde(default)]
    pub item_types: Vec<String>,

    #[serde(default)]
    pub types: Vec<String>,
}

impl PropertySpec {
    /// Whether the specification gives any type information at all
    ///
    /// Published specifications have occasionally shipped properties
    /// without a type.
    pub fn has_valid_type(&self) -> bool {
        self.item_type.is_some()
            || self.primitive_type.is_some()
            || self.primitive_item_type.is_some()
            || self.type_.is_some()
            || !self.item_types.is_empty()
            || !self.primitive_types.is_empty()
            || !self.primitive_item_types.is_empty()
            || !self.types.is_empty()
    }

    /// Whether the property accepts several different shapes
    pub fn is_polymorphic(&self) -> bool {
        !self.primitive_types.is_empty()
            || !self.primitive_item_types.is_empty()
            || !self.item_types.is_empty()
            || !self.types.is_empty()
    }

    /// Every shape accepted by a polymorphic property
    pub fn polymorphic_types(&self) -> Vec<String> {
        self.primitive_types
            .iter()
            .chain(&self.primitive_item_types)
            .chain(&self.item_types)
            .chain(&self.types)
            .cloned()
            .collect()
    }

    pub fn is_list(&self) -> bool {
        self.type_.as_deref() == Some("List")
    }

    pub fn is_map(&self) -> bool {
        self.type_.as_deref() == Some("Map")
    }
}

/// A resource attribute
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeSpec {
    #[serde(default)]
    pub primitive_type: Option<String>,

    #[serde(default)]
    pub primitive_item_type: Option<String>,

    #[serde(default, rename = "Type")]
    pub type_: Option<String>,

    #[serde(default)]
    pub item_type: Option<String>,
}

impl From<&AttributeSpec> for PropertySpec {
    fn from(attr: &AttributeSpec) -> Self {
        PropertySpec {
            primitive_type: attr.primitive_type.clone(),
            primitive_item_type: attr.primitive_item_type.clone(),
            type_: attr.type_.clone(),
            item_type: attr.item_type.clone(),
            ..Default::default()
        }
    }
}
