//! Runtime support for typed CloudFormation resources
//!
//! This crate provides:
//! - the resource envelope codec ([`codec`]): `{"Type", "Properties"}`
//!   encoding, decoding and lookups in a template's `Resources` map
//! - [`Value`], the type of primitive property slots, and the
//!   [`intrinsic`] function builders
//! - the [`Template`] document model with JSON and YAML support
//! - the generated resource bindings ([`resources`])
//!
//! ## Example
//! ```rust,ignore
//! use cfn_bindgen_runtime::resources::appmesh::Mesh;
//! use cfn_bindgen_runtime::{codec, Value};
//!
//! let mesh = Mesh {
//!     mesh_name: Some(Value::from("prod-mesh")),
//!     ..Default::default()
//! };
//! let json = codec::encode(&mesh)?;
//! ```

mod attributes;
pub mod codec;
mod error;
pub mod intrinsic;
mod resource;
pub mod resources;
mod tag;
mod template;
mod value;
mod yaml;

pub use attributes::{DeletionPolicy, ResourceAttributes, UpdateReplacePolicy};
pub use error::{CodecError, Result};
pub use intrinsic::{Intrinsic, IntrinsicFunction};
pub use resource::{DynResource, PropertyType, Resource};
pub use tag::Tag;
pub use template::{Template, TemplateResource, TypedResource, TEMPLATE_FORMAT_VERSION};
pub use value::Value;
