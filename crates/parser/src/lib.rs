//! Specification parsing for cfn-bindgen
//!
//! This crate turns the AWS CloudFormation Resource Specification into an
//! intermediate representation (`SpecificationDefinition`).
//!
//! ## Mapping Strategy
//!
//! Every resource type becomes a `ResourceDefinition` grouped under its
//! service, and every property type scoped to it becomes a
//! `PropertyTypeDefinition`:
//! - primitive properties → `Value` slots (literal or intrinsic)
//! - `List`/`Map` properties → `Vec` / `BTreeMap`
//! - subproperty names → the scoped property type
//! - `ItemType: Tag` → the shared `Tag`

pub mod spec;
mod type_mapper;

pub use spec::SpecParser;
pub use type_mapper::{PropertyScope, TypeMapper};

use cfn_bindgen_common::{Result, SpecificationDefinition};
use std::path::Path;

/// Parse a specification file, optionally merging fragment files and
/// keeping only some services
///
/// # Arguments
/// * `path` - Primary specification document
/// * `fragments` - Fragment documents (e.g. the SAM specification)
/// * `filter` - Service modules to keep (e.g. `["appmesh"]`)
pub fn parse_specification(
    path: &Path,
    fragments: &[&Path],
    filter: Option<&[String]>,
) -> Result<SpecificationDefinition> {
    let mut parser = SpecParser::from_file(path)?;
    for fragment in fragments {
        parser = parser.with_fragment_file(fragment)?;
    }

    match filter {
        Some(services) => parser.parse_filtered(services),
        None => parser.parse(),
    }
}
