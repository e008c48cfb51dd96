//! Naming rules for turning CloudFormation names into Rust identifiers

use crate::{GeneratorError, Result};

/// Words that cannot be used as plain identifiers
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that are not allowed as raw identifiers either
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "super", "Self"];

/// Names that would shadow types used by generated code
const RESERVED_STRUCT_NAMES: &[&str] = &[
    "Box",
    "Clone",
    "Debug",
    "Default",
    "Deserialize",
    "Err",
    "None",
    "Ok",
    "Option",
    "PartialEq",
    "Result",
    "Serialize",
    "Some",
    "String",
    "Vec",
];

/// The parts of a CloudFormation type name
///
/// `AWS::AppMesh::Mesh.MeshSpec` splits into namespace `AWS`, service
/// `AppMesh`, resource `Mesh` and property `MeshSpec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName<'a> {
    pub namespace: &'a str,
    pub service: &'a str,
    pub resource: &'a str,
    pub property: Option<&'a str>,
}

impl<'a> TypeName<'a> {
    /// Split a resource or property type name
    pub fn parse(name: &'a str) -> Result<Self> {
        let parts: Vec<&str> = name.split("::").collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(GeneratorError::Parse(format!(
                "Invalid CloudFormation type name '{}'",
                name
            )));
        }

        let (resource, property) = match parts[2].split_once('.') {
            Some((resource, property)) if !resource.is_empty() && !property.is_empty() => {
                (resource, Some(property))
            },
            Some(_) => {
                return Err(GeneratorError::Parse(format!(
                    "Invalid CloudFormation property type name '{}'",
                    name
                )))
            },
            None => (parts[2], None),
        };

        Ok(Self {
            namespace: parts[0],
            service: parts[1],
            resource,
            property,
        })
    }

    /// Type name of the owning resource, e.g. `AWS::AppMesh::Mesh`
    pub fn resource_type(&self) -> String {
        format!("{}::{}::{}", self.namespace, self.service, self.resource)
    }

    /// Namespace and service, e.g. `AWS::AppMesh`
    pub fn service_namespace(&self) -> String {
        format!("{}::{}", self.namespace, self.service)
    }
}

/// Convert a PascalCase name into snake_case
///
/// Runs of capitals are kept together (`DBInstanceClass` becomes
/// `db_instance_class`) and dots, dashes and spaces become underscores.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '.' | '-' | ' ' | '_' | ':') {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out.trim_end_matches('_').to_string()
}

/// Make a snake_case word usable as a Rust identifier
pub fn escape_identifier(word: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&word) {
        format!("{}_", word)
    } else if RUST_KEYWORDS.contains(&word) {
        format!("r#{}", word)
    } else if word.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", word)
    } else {
        word.to_string()
    }
}

/// Rust field name for a CloudFormation property name
pub fn field_name(property: &str) -> String {
    escape_identifier(&to_snake_case(property))
}

/// Rust module name for a service
///
/// Services in the `AWS` namespace use the lower-cased service name
/// (`appmesh`); other namespaces are prefixed (`alexa_ask`).
pub fn service_module(namespace: &str, service: &str) -> String {
    let module = if namespace == "AWS" {
        service.to_lowercase()
    } else {
        format!("{}_{}", namespace.to_lowercase(), service.to_lowercase())
    };
    escape_identifier(&module)
}

/// Rust module name for a resource
pub fn resource_module(resource: &str) -> String {
    escape_identifier(&to_snake_case(resource))
}

/// File name backing a module identifier
pub fn module_file(module: &str) -> String {
    format!("{}.rs", module.trim_start_matches("r#"))
}

/// Rust struct name for a property type
///
/// `resource` is the struct name of the owning resource; a property type
/// named like its resource, or like a type the generated code relies on,
/// gets a `Property` suffix.
pub fn property_struct(property: &str, resource: &str) -> String {
    if property == resource || RESERVED_STRUCT_NAMES.contains(&property) {
        format!("{}Property", property)
    } else {
        property.to_string()
    }
}
