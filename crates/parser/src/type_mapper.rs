//! Type mapping from specification properties to the intermediate representation
//!
//! Maps Resource Specification property descriptions to our `FieldType` IR.

use crate::spec::{PropertySpec, ResourceSpecification};
use cfn_bindgen_common::{naming, FieldType, GeneratorConfig, PrimitiveType};
use tracing::warn;

/// Maps specification properties to FieldType
pub struct TypeMapper<'a> {
    spec: &'a ResourceSpecification,
    config: &'a GeneratorConfig,
}

/// Where a property lives, used to resolve scoped property type names
#[derive(Debug, Clone, Copy)]
pub struct PropertyScope<'a> {
    /// Owning resource type, e.g. `AWS::AppMesh::Mesh`
    pub resource_type: &'a str,
    /// Struct name of the owning resource, e.g. `Mesh`
    pub resource_struct: &'a str,
    /// Type that declares the property, for diagnostics
    pub owner: &'a str,
}

impl<'a> TypeMapper<'a> {
    pub fn new(spec: &'a ResourceSpecification, config: &'a GeneratorConfig) -> Self {
        Self { spec, config }
    }

    /// Map one property to a FieldType
    ///
    /// Properties without any type information become `Json`.
    pub fn map_property(
        &self,
        scope: PropertyScope<'_>,
        name: &str,
        prop: &PropertySpec,
    ) -> FieldType {
        if !prop.has_valid_type() {
            warn!(
                owner = scope.owner,
                property = name,
                "property has no type in the specification, using Json"
            );
            return FieldType::Primitive(PrimitiveType::Json);
        }

        if prop.is_polymorphic() {
            return FieldType::Polymorphic(prop.polymorphic_types());
        }

        if prop.is_list() || prop.is_map() {
            let item = if let Some(primitive) = &prop.primitive_item_type {
                self.map_primitive(scope, name, primitive)
            } else if let Some(item_type) = &prop.item_type {
                self.resolve_reference(scope, name, item_type)
            } else {
                warn!(
                    owner = scope.owner,
                    property = name,
                    "collection has no item type, using Json"
                );
                FieldType::Primitive(PrimitiveType::Json)
            };

            return if prop.is_list() {
                FieldType::List(Box::new(item))
            } else {
                FieldType::Map(Box::new(item))
            };
        }

        if let Some(primitive) = &prop.primitive_type {
            return self.map_primitive(scope, name, primitive);
        }

        match &prop.type_ {
            Some(type_name) => self.resolve_reference(scope, name, type_name),
            None => FieldType::Primitive(PrimitiveType::Json),
        }
    }

    /// Resolve a property type name used by a property of `scope`
    ///
    /// Lookup order: configured override, property type scoped to the
    /// resource, the shared `Tag` type. Anything else falls back to `Json`.
    fn resolve_reference(&self, scope: PropertyScope<'_>, name: &str, item: &str) -> FieldType {
        if let Some(primitive) = self.config.type_override(scope.resource_type, item) {
            return FieldType::Primitive(primitive);
        }

        let scoped = format!("{}.{}", scope.resource_type, item);
        if let Some(property_type) = self.spec.property_types.get(&scoped) {
            if property_type.is_alias() {
                let alias = PropertySpec {
                    primitive_type: property_type.primitive_type.clone(),
                    primitive_item_type: property_type.primitive_item_type.clone(),
                    type_: property_type.type_.clone(),
                    ..Default::default()
                };
                return self.map_property(scope, name, &alias);
            }
            return FieldType::Property(naming::property_struct(item, scope.resource_struct));
        }

        if item == "Tag" {
            return FieldType::Tag;
        }

        warn!(
            owner = scope.owner,
            property = name,
            item_type = item,
            "reference to an undefined property type, using Json"
        );
        FieldType::Primitive(PrimitiveType::Json)
    }

    fn map_primitive(&self, scope: PropertyScope<'_>, name: &str, primitive: &str) -> FieldType {
        match primitive.parse::<PrimitiveType>() {
            Ok(p) => FieldType::Primitive(p),
            Err(_) => {
                if let Some(p) = self.config.type_override(scope.resource_type, primitive) {
                    return FieldType::Primitive(p);
                }
                warn!(
                    owner = scope.owner,
                    property = name,
                    primitive,
                    "unknown primitive type, using Json"
                );
                FieldType::Primitive(PrimitiveType::Json)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r#"{
        "PropertyTypes": {
            "AWS::AppMesh::Mesh.MeshSpec": {
                "Properties": {
                    "EgressFilter": {"Type": "EgressFilter", "Required": false}
                }
            },
            "AWS::AppMesh::Mesh.EgressFilter": {
                "Properties": {
                    "Type": {"PrimitiveType": "String", "Required": true}
                }
            },
            "AWS::AppMesh::Mesh.Mode": {
                "PrimitiveType": "String"
            },
            "AWS::AppMesh::Mesh.Mesh": {
                "Properties": {
                    "Name": {"PrimitiveType": "String"}
                }
            }
        }
    }"#;

    fn scope() -> PropertyScope<'static> {
        PropertyScope {
            resource_type: "AWS::AppMesh::Mesh",
            resource_struct: "Mesh",
            owner: "AWS::AppMesh::Mesh",
        }
    }

    fn map(json: &str) -> FieldType {
        let spec: ResourceSpecification = serde_json::from_str(SPEC).unwrap();
        let config = GeneratorConfig::default();
        let mapper = TypeMapper::new(&spec, &config);
        let prop: PropertySpec = serde_json::from_str(json).unwrap();
        mapper.map_property(scope(), "Test", &prop)
    }

    #[test]
    fn test_map_primitives() {
        assert_eq!(
            map(r#"{"PrimitiveType": "String"}"#),
            FieldType::Primitive(PrimitiveType::String)
        );
        assert_eq!(
            map(r#"{"PrimitiveType": "Integer"}"#),
            FieldType::Primitive(PrimitiveType::Integer)
        );
        assert_eq!(
            map(r#"{"PrimitiveType": "Json"}"#),
            FieldType::Primitive(PrimitiveType::Json)
        );
    }

    #[test]
    fn test_map_property_reference() {
        assert_eq!(
            map(r#"{"Type": "MeshSpec"}"#),
            FieldType::Property("MeshSpec".to_string())
        );
    }

    #[test]
    fn test_map_collections() {
        assert_eq!(
            map(r#"{"Type": "List", "PrimitiveItemType": "String"}"#),
            FieldType::List(Box::new(FieldType::Primitive(PrimitiveType::String)))
        );
        assert_eq!(
            map(r#"{"Type": "Map", "ItemType": "EgressFilter"}"#),
            FieldType::Map(Box::new(FieldType::Property("EgressFilter".to_string())))
        );
        assert_eq!(
            map(r#"{"Type": "List", "ItemType": "Tag"}"#),
            FieldType::List(Box::new(FieldType::Tag))
        );
    }

    #[test]
    fn test_alias_property_type() {
        assert_eq!(
            map(r#"{"Type": "Mode"}"#),
            FieldType::Primitive(PrimitiveType::String)
        );
    }

    #[test]
    fn test_colliding_struct_name() {
        assert_eq!(
            map(r#"{"Type": "Mesh"}"#),
            FieldType::Property("MeshProperty".to_string())
        );
    }

    #[test]
    fn test_fallbacks_to_json() {
        assert_eq!(map(r#"{}"#), FieldType::Primitive(PrimitiveType::Json));
        assert_eq!(
            map(r#"{"Type": "Missing"}"#),
            FieldType::Primitive(PrimitiveType::Json)
        );
        assert_eq!(
            map(r#"{"PrimitiveType": "Float"}"#),
            FieldType::Primitive(PrimitiveType::Json)
        );
    }

    #[test]
    fn test_polymorphic() {
        assert_eq!(
            map(r#"{"PrimitiveTypes": ["String"], "Types": ["MeshSpec"]}"#),
            FieldType::Polymorphic(vec!["String".to_string(), "MeshSpec".to_string()])
        );
    }

    #[test]
    fn test_type_override() {
        let spec = ResourceSpecification::default();
        let config = GeneratorConfig::default();
        let mapper = TypeMapper::new(&spec, &config);
        let prop: PropertySpec =
            serde_json::from_str(r#"{"Type": "Map", "ItemType": "ParameterValues"}"#).unwrap();
        let scope = PropertyScope {
            resource_type: "AWS::SSM::Association",
            resource_struct: "Association",
            owner: "AWS::SSM::Association",
        };
        assert_eq!(
            mapper.map_property(scope, "Parameters", &prop),
            FieldType::Map(Box::new(FieldType::Primitive(PrimitiveType::Json)))
        );
    }
}
