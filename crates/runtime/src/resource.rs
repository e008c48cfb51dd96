//! Per-type declarations implemented by generated bindings

use crate::error::{CodecError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// A top-level resource type, wrapped in the `{Type, Properties}` envelope
/// on the wire
pub trait Resource:
    Serialize + DeserializeOwned + Default + Clone + fmt::Debug + Send + Sync + 'static
{
    /// CloudFormation type name, e.g. `AWS::AppMesh::Mesh`
    const TYPE_NAME: &'static str;

    /// Whether the resource accepts an `UpdatePolicy` attribute
    const SUPPORTS_UPDATE_POLICY: bool = false;

    /// Whether the resource accepts a `CreationPolicy` attribute
    const SUPPORTS_CREATION_POLICY: bool = false;
}

/// A property type scoped to a resource, serialized as a plain object
pub trait PropertyType: Serialize + DeserializeOwned + Default + Clone + fmt::Debug {
    /// CloudFormation type name, e.g. `AWS::AppMesh::Mesh.MeshSpec`
    const TYPE_NAME: &'static str;
}

/// Object-safe view of a [`Resource`], for storing typed resources of
/// different types in one template
pub trait DynResource: fmt::Debug + Send + Sync {
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    /// The `Properties` object of the resource
    fn properties(&self) -> Result<serde_json::Value>;

    fn supports_update_policy(&self) -> bool;

    fn supports_creation_policy(&self) -> bool;

    fn clone_box(&self) -> Box<dyn DynResource>;
}

impl<R: Resource> DynResource for R {
    fn type_name(&self) -> &'static str {
        R::TYPE_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn properties(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(CodecError::Encode)
    }

    fn supports_update_policy(&self) -> bool {
        R::SUPPORTS_UPDATE_POLICY
    }

    fn supports_creation_policy(&self) -> bool {
        R::SUPPORTS_CREATION_POLICY
    }

    fn clone_box(&self) -> Box<dyn DynResource> {
        Box::new(self.clone())
    }
}

impl dyn DynResource {
    /// The concrete resource, if it is an `R`
    pub fn downcast_ref<R: Resource>(&self) -> Option<&R> {
        self.as_any().downcast_ref::<R>()
    }
}

impl Clone for Box<dyn DynResource> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}
