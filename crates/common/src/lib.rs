//! Common types and utilities for cfn-bindgen
//!
//! This crate contains the intermediate representation (IR) produced by the
//! parser and consumed by the generator, the shared error type, and the
//! generator configuration.

mod config;
pub mod naming;

pub use config::GeneratorConfig;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while parsing specifications or generating bindings
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Primitive types defined by the CloudFormation Resource Specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    String,
    Long,
    Integer,
    Double,
    Boolean,
    Timestamp,
    Json,
}

impl PrimitiveType {
    /// Rust type used for a slot of this primitive type
    ///
    /// Scalars become `Value` so they can hold either a literal or an
    /// intrinsic function. Timestamps stay plain strings and `Json` slots
    /// accept any document.
    pub fn rust_type(self, runtime: &str) -> String {
        match self {
            PrimitiveType::String
            | PrimitiveType::Long
            | PrimitiveType::Integer
            | PrimitiveType::Double
            | PrimitiveType::Boolean => format!("{}::Value", runtime),
            PrimitiveType::Timestamp => "String".to_string(),
            PrimitiveType::Json => "serde_json::Value".to_string(),
        }
    }
}

impl FromStr for PrimitiveType {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "String" => Ok(PrimitiveType::String),
            "Long" => Ok(PrimitiveType::Long),
            "Integer" => Ok(PrimitiveType::Integer),
            "Double" => Ok(PrimitiveType::Double),
            "Boolean" => Ok(PrimitiveType::Boolean),
            "Timestamp" => Ok(PrimitiveType::Timestamp),
            "Json" | "Map" => Ok(PrimitiveType::Json),
            other => Err(GeneratorError::Parse(format!(
                "Unknown primitive type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Represents a field type in the intermediate representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// A primitive slot
    Primitive(PrimitiveType),
    /// The shared `Tag` property type
    Tag,
    /// A property type scoped to the same resource, by struct name
    Property(String),
    /// A property that accepts several different shapes
    Polymorphic(Vec<String>),
    /// An ordered list
    List(Box<FieldType>),
    /// A string-keyed mapping
    Map(Box<FieldType>),
}

impl FieldType {
    /// Render the Rust type for this field type
    ///
    /// `runtime` is the path of the runtime crate as seen from the generated
    /// module (usually `crate`).
    pub fn rust_type(&self, runtime: &str) -> String {
        match self {
            FieldType::Primitive(p) => p.rust_type(runtime),
            FieldType::Tag => format!("{}::Tag", runtime),
            FieldType::Property(name) => name.clone(),
            FieldType::Polymorphic(_) => "serde_json::Value".to_string(),
            FieldType::List(inner) => format!("Vec<{}>", inner.rust_type(runtime)),
            FieldType::Map(inner) => format!(
                "std::collections::BTreeMap<String, {}>",
                inner.rust_type(runtime)
            ),
        }
    }

    /// Name of the property type this field refers to without going through
    /// a list or a map
    pub fn direct_property(&self) -> Option<&str> {
        match self {
            FieldType::Property(name) => Some(name),
            _ => None,
        }
    }

    /// Whether any part of this type is the shared `Tag` type
    pub fn uses_tag(&self) -> bool {
        match self {
            FieldType::Tag => true,
            FieldType::List(inner) | FieldType::Map(inner) => inner.uses_tag(),
            _ => false,
        }
    }
}

/// A fully parsed resource specification, grouped by service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecificationDefinition {
    /// `ResourceSpecificationVersion` of the primary document
    pub version: String,
    /// Services, sorted by module name
    pub services: Vec<ServiceDefinition>,
}

impl SpecificationDefinition {
    /// Total number of resource types across all services
    pub fn resource_count(&self) -> usize {
        self.services.iter().map(|s| s.resources.len()).sum()
    }

    /// Total number of property types across all services
    pub fn property_type_count(&self) -> usize {
        self.services
            .iter()
            .flat_map(|s| &s.resources)
            .map(|r| r.property_types.len())
            .sum()
    }

    /// Find a resource definition by its CloudFormation type name
    pub fn resource(&self, type_name: &str) -> Option<&ResourceDefinition> {
        self.services
            .iter()
            .flat_map(|s| &s.resources)
            .find(|r| r.type_name == type_name)
    }
}

/// All resource types of one CloudFormation service (e.g. `AWS::AppMesh`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Namespace and service, e.g. `AWS::AppMesh`
    pub namespace: String,
    /// Rust module name, e.g. `appmesh`
    pub name: String,
    /// Resource types, sorted by type name
    pub resources: Vec<ResourceDefinition>,
}

/// Represents a CloudFormation resource type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// CloudFormation type name, e.g. `AWS::AppMesh::Mesh`
    pub type_name: String,
    /// Rust struct name, e.g. `Mesh`
    pub struct_name: String,
    /// Rust module name, e.g. `mesh`
    pub module_name: String,
    pub documentation: Option<String>,
    pub fields: Vec<FieldDefinition>,
    /// Attributes available through `Fn::GetAtt`
    pub attributes: Vec<AttributeDefinition>,
    /// Property types scoped to this resource, sorted by type name
    pub property_types: Vec<PropertyTypeDefinition>,
    pub supports_update_policy: bool,
    pub supports_creation_policy: bool,
}

/// Represents a property type scoped to a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyTypeDefinition {
    /// CloudFormation type name, e.g. `AWS::AppMesh::Mesh.MeshSpec`
    pub type_name: String,
    /// Rust struct name, e.g. `MeshSpec`
    pub struct_name: String,
    pub documentation: Option<String>,
    pub fields: Vec<FieldDefinition>,
    /// Whether unset fields are left out of the serialized object
    pub omit_empty: bool,
}

/// Represents a single property of a resource or property type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Name on the wire, e.g. `MeshName`
    pub wire_name: String,
    /// Rust field name, e.g. `mesh_name`
    pub rust_name: String,
    pub field_type: FieldType,
    pub required: bool,
    /// `Mutable`, `Immutable` or `Conditional`
    pub update_type: Option<String>,
    pub documentation: Option<String>,
    /// Boxed to break a cycle between property types
    pub boxed: bool,
}

impl FieldDefinition {
    /// Rust type of the field without the surrounding `Option`
    pub fn rust_type(&self, runtime: &str) -> String {
        let inner = self.field_type.rust_type(runtime);
        if self.boxed {
            format!("Box<{}>", inner)
        } else {
            inner
        }
    }
}

/// A resource attribute readable with `Fn::GetAtt`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Attribute name, e.g. `Arn` or `Endpoint.Address`
    pub name: String,
    /// snake_case form used in the accessor name, e.g. `endpoint_address`
    pub rust_name: String,
    pub field_type: FieldType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_rust_types() {
        assert_eq!(PrimitiveType::String.rust_type("crate"), "crate::Value");
        assert_eq!(PrimitiveType::Long.rust_type("crate"), "crate::Value");
        assert_eq!(PrimitiveType::Timestamp.rust_type("crate"), "String");
        assert_eq!(PrimitiveType::Json.rust_type("crate"), "serde_json::Value");
    }

    #[test]
    fn test_parse_primitive() {
        assert_eq!(
            "Boolean".parse::<PrimitiveType>().unwrap(),
            PrimitiveType::Boolean
        );
        assert_eq!("Map".parse::<PrimitiveType>().unwrap(), PrimitiveType::Json);
        assert!("Float".parse::<PrimitiveType>().is_err());
    }

    #[test]
    fn test_nested_rust_types() {
        let ft = FieldType::Map(Box::new(FieldType::List(Box::new(FieldType::Primitive(
            PrimitiveType::String,
        )))));
        assert_eq!(
            ft.rust_type("cfn"),
            "std::collections::BTreeMap<String, Vec<cfn::Value>>"
        );

        let tags = FieldType::List(Box::new(FieldType::Tag));
        assert_eq!(tags.rust_type("crate"), "Vec<crate::Tag>");
        assert!(tags.uses_tag());
    }

    #[test]
    fn test_boxed_field() {
        let field = FieldDefinition {
            wire_name: "Statement".to_string(),
            rust_name: "statement".to_string(),
            field_type: FieldType::Property("Statement".to_string()),
            required: true,
            update_type: None,
            documentation: None,
            boxed: true,
        };
        assert_eq!(field.rust_type("crate"), "Box<Statement>");
        assert_eq!(field.field_type.direct_property(), Some("Statement"));
    }
}
