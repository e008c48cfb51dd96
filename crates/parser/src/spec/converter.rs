//! Converts a Resource Specification to SpecificationDefinition IR

use super::types::{PropertySpec, ResourceSpecification};
use crate::type_mapper::{PropertyScope, TypeMapper};
use cfn_bindgen_common::naming::{self, TypeName};
use cfn_bindgen_common::{
    AttributeDefinition, FieldDefinition, GeneratorConfig, PropertyTypeDefinition,
    ResourceDefinition, Result, ServiceDefinition, SpecificationDefinition,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Convert a Resource Specification to SpecificationDefinition
///
/// `filter` restricts the output to the listed service modules
/// (e.g. `appmesh`).
pub fn convert_specification(
    spec: &ResourceSpecification,
    config: &GeneratorConfig,
    filter: Option<&[String]>,
) -> Result<SpecificationDefinition> {
    let mapper = TypeMapper::new(spec, config);
    let mut services: BTreeMap<String, ServiceDefinition> = BTreeMap::new();

    for (type_name, resource_spec) in &spec.resource_types {
        let name = TypeName::parse(type_name)?;
        let module = naming::service_module(name.namespace, name.service);

        if let Some(filter) = filter {
            if !filter.iter().any(|f| f.eq_ignore_ascii_case(&module)) {
                continue;
            }
        }

        let struct_name = name.resource.to_string();
        let scope = PropertyScope {
            resource_type: type_name,
            resource_struct: &struct_name,
            owner: type_name,
        };

        let fields = build_fields(&mapper, scope, &resource_spec.properties);

        let mut attributes: Vec<AttributeDefinition> = resource_spec
            .attributes
            .iter()
            .map(|(attr_name, attr)| AttributeDefinition {
                name: attr_name.clone(),
                rust_name: naming::to_snake_case(attr_name),
                field_type: mapper.map_property(scope, attr_name, &PropertySpec::from(attr)),
            })
            .collect();
        dedupe_attribute_names(type_name, &mut attributes);

        let mut property_types =
            build_property_types(spec, config, &mapper, type_name, &struct_name)?;
        box_recursive_fields(&mut property_types);

        debug!(
            resource = %type_name,
            fields = resource_spec.properties.len(),
            property_types = property_types.len(),
            "converted resource type"
        );

        services
            .entry(module.clone())
            .or_insert_with(|| ServiceDefinition {
                namespace: name.service_namespace(),
                name: module,
                resources: Vec::new(),
            })
            .resources
            .push(ResourceDefinition {
                type_name: type_name.clone(),
                module_name: naming::resource_module(name.resource),
                struct_name,
                documentation: resource_spec.documentation.clone(),
                fields,
                attributes,
                property_types,
                supports_update_policy: config.supports_update_policy(type_name),
                supports_creation_policy: config.supports_creation_policy(type_name),
            });
    }

    Ok(SpecificationDefinition {
        version: spec.resource_specification_version.clone(),
        services: services.into_values().collect(),
    })
}

/// Give attributes whose names snake-case alike distinct accessor names
///
/// `Endpoint.Port` and `EndpointPort` both become `endpoint_port`; the
/// later one in name order gets a numeric suffix (`endpoint_port_2`).
fn dedupe_attribute_names(resource_type: &str, attributes: &mut [AttributeDefinition]) {
    let mut used: HashSet<String> = HashSet::new();

    for attribute in attributes.iter_mut() {
        if used.insert(attribute.rust_name.clone()) {
            continue;
        }

        let mut n = 2;
        let mut candidate = format!("{}_{}", attribute.rust_name, n);
        while !used.insert(candidate.clone()) {
            n += 1;
            candidate = format!("{}_{}", attribute.rust_name, n);
        }
        debug!(
            resource = %resource_type,
            attribute = %attribute.name,
            accessor = %candidate,
            "renamed colliding attribute accessor"
        );
        attribute.rust_name = candidate;
    }
}

/// Build field definitions in wire-name order
fn build_fields(
    mapper: &TypeMapper<'_>,
    scope: PropertyScope<'_>,
    properties: &BTreeMap<String, PropertySpec>,
) -> Vec<FieldDefinition> {
    properties
        .iter()
        .map(|(wire_name, prop)| FieldDefinition {
            wire_name: wire_name.clone(),
            rust_name: naming::field_name(wire_name),
            field_type: mapper.map_property(scope, wire_name, prop),
            required: prop.required,
            update_type: prop.update_type.clone(),
            documentation: prop.documentation.clone(),
            boxed: false,
        })
        .collect()
}

/// Collect the property types scoped to one resource
fn build_property_types(
    spec: &ResourceSpecification,
    config: &GeneratorConfig,
    mapper: &TypeMapper<'_>,
    resource_type: &str,
    resource_struct: &str,
) -> Result<Vec<PropertyTypeDefinition>> {
    let prefix = format!("{}.", resource_type);
    let mut property_types = Vec::new();

    for (type_name, property_type) in spec.property_types.range(prefix.clone()..) {
        if !type_name.starts_with(&prefix) {
            break;
        }
        if property_type.is_alias() {
            // inlined at every use site
            continue;
        }

        let name = TypeName::parse(type_name)?;
        let property = name.property.unwrap_or(name.resource);
        let scope = PropertyScope {
            resource_type,
            resource_struct,
            owner: type_name,
        };

        property_types.push(PropertyTypeDefinition {
            type_name: type_name.clone(),
            struct_name: naming::property_struct(property, resource_struct),
            documentation: property_type.documentation.clone(),
            fields: build_fields(mapper, scope, &property_type.properties),
            omit_empty: config.elides(type_name),
        });
    }

    Ok(property_types)
}

/// Box fields whose property type can reach back to the declaring type
/// without passing through a list or a map
fn box_recursive_fields(property_types: &mut [PropertyTypeDefinition]) {
    let edges: HashMap<String, Vec<String>> = property_types
        .iter()
        .map(|pt| {
            let targets = pt
                .fields
                .iter()
                .filter_map(|f| f.field_type.direct_property())
                .map(str::to_string)
                .collect();
            (pt.struct_name.clone(), targets)
        })
        .collect();

    for pt in property_types.iter_mut() {
        for field in &mut pt.fields {
            if let Some(target) = field.field_type.direct_property() {
                if reaches(&edges, target, &pt.struct_name) {
                    field.boxed = true;
                }
            }
        }
    }
}

fn reaches(edges: &HashMap<String, Vec<String>>, from: &str, target: &str) -> bool {
    let mut stack = vec![from];
    let mut seen = HashSet::new();

    while let Some(node) = stack.pop() {
        if node == target {
            return true;
        }
        if !seen.insert(node) {
            continue;
        }
        if let Some(next) = edges.get(node) {
            stack.extend(next.iter().map(String::as_str));
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfn_bindgen_common::{FieldType, PrimitiveType};

    const WAF_SPEC: &str = r#"{
        "ResourceSpecificationVersion": "1.0.0",
        "PropertyTypes": {
            "AWS::WAFv2::RuleGroup.Statement": {
                "Properties": {
                    "NotStatement": {"Type": "NotStatement"},
                    "AndStatement": {"Type": "AndStatement"}
                }
            },
            "AWS::WAFv2::RuleGroup.NotStatement": {
                "Properties": {
                    "Statement": {"Type": "Statement", "Required": true}
                }
            },
            "AWS::WAFv2::RuleGroup.AndStatement": {
                "Properties": {
                    "Statements": {"Type": "List", "ItemType": "Statement", "Required": true}
                }
            }
        },
        "ResourceTypes": {
            "AWS::WAFv2::RuleGroup": {
                "Properties": {
                    "Rules": {"Type": "List", "ItemType": "Statement"},
                    "Capacity": {"PrimitiveType": "Integer", "Required": true}
                }
            }
        }
    }"#;

    fn convert(json: &str) -> SpecificationDefinition {
        let spec: ResourceSpecification = serde_json::from_str(json).unwrap();
        convert_specification(&spec, &GeneratorConfig::default(), None).unwrap()
    }

    #[test]
    fn test_recursive_fields_are_boxed() {
        let def = convert(WAF_SPEC);
        let resource = def.resource("AWS::WAFv2::RuleGroup").unwrap();

        let not_statement = resource
            .property_types
            .iter()
            .find(|pt| pt.struct_name == "NotStatement")
            .unwrap();
        assert!(not_statement.fields[0].boxed);

        let statement = resource
            .property_types
            .iter()
            .find(|pt| pt.struct_name == "Statement")
            .unwrap();
        let not_field = statement
            .fields
            .iter()
            .find(|f| f.wire_name == "NotStatement")
            .unwrap();
        assert!(not_field.boxed);

        // reached only through a list, so no cycle of direct fields
        let and_field = statement
            .fields
            .iter()
            .find(|f| f.wire_name == "AndStatement")
            .unwrap();
        assert!(!and_field.boxed);
    }

    #[test]
    fn test_fields_sorted_by_wire_name() {
        let def = convert(WAF_SPEC);
        let resource = def.resource("AWS::WAFv2::RuleGroup").unwrap();
        let names: Vec<&str> = resource.fields.iter().map(|f| f.wire_name.as_str()).collect();
        assert_eq!(names, vec!["Capacity", "Rules"]);
        assert_eq!(
            resource.fields[0].field_type,
            FieldType::Primitive(PrimitiveType::Integer)
        );
        assert!(resource.fields[0].required);
    }

    #[test]
    fn test_filter_services() {
        let spec: ResourceSpecification = serde_json::from_str(WAF_SPEC).unwrap();
        let filter = vec!["sqs".to_string()];
        let def = convert_specification(&spec, &GeneratorConfig::default(), Some(&filter))
            .unwrap();
        assert!(def.services.is_empty());

        let filter = vec!["WAFv2".to_string()];
        let def = convert_specification(&spec, &GeneratorConfig::default(), Some(&filter))
            .unwrap();
        assert_eq!(def.services.len(), 1);
        assert_eq!(def.services[0].name, "wafv2");
    }

    #[test]
    fn test_colliding_attribute_names() {
        let def = convert(
            r#"{
            "ResourceTypes": {
                "AWS::RDS::DBCluster": {
                    "Attributes": {
                        "Endpoint.Port": {"PrimitiveType": "String"},
                        "EndpointPort": {"PrimitiveType": "String"},
                        "Arn": {"PrimitiveType": "String"}
                    }
                }
            }
        }"#,
        );
        let resource = def.resource("AWS::RDS::DBCluster").unwrap();
        let names: Vec<(&str, &str)> = resource
            .attributes
            .iter()
            .map(|a| (a.name.as_str(), a.rust_name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Arn", "arn"),
                ("Endpoint.Port", "endpoint_port"),
                ("EndpointPort", "endpoint_port_2"),
            ]
        );
    }

    #[test]
    fn test_invalid_resource_name() {
        let spec = ResourceSpecification {
            resource_types: BTreeMap::from([("NotAType".to_string(), Default::default())]),
            ..Default::default()
        };
        assert!(convert_specification(&spec, &GeneratorConfig::default(), None).is_err());
    }
}
