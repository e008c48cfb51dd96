//! CloudFormation Resource Specification parser
//!
//! Parses the Resource Specification JSON into SpecificationDefinition IR.
//!
//! Specifications are published per region, see
//! https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/cfn-resource-specification.html
//!
//! ## Format
//! A specification contains:
//! - `ResourceTypes`: every resource type with its properties and attributes
//! - `PropertyTypes`: the nested structures scoped to a resource
//!   (`AWS::AppMesh::Mesh.MeshSpec`), plus the shared `Tag`
//!
//! ## Usage
//! ```rust,ignore
//! use cfn_bindgen_parser::spec::SpecParser;
//!
//! let parser = SpecParser::from_file("CloudFormationResourceSpecification.json")?;
//! let definition = parser.parse()?;
//! ```

mod converter;
mod parser;
mod types;

pub use parser::SpecParser;
pub use types::*;
