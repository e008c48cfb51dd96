//! Generator configuration loaded from YAML files
//!
//! The defaults cover the published AWS specification; a YAML file only
//! needs to list the keys it changes.

use crate::{GeneratorError, PrimitiveType, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Options that steer how bindings are generated
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Config format version
    pub version: u32,
    /// Path of the runtime crate as seen from generated modules
    pub runtime_path: String,
    /// Property types that serialize unset fields as `null` instead of
    /// leaving them out (full CloudFormation type names)
    pub no_elide: Vec<String>,
    /// Resources that accept an `UpdatePolicy` attribute
    pub update_policy_resources: Vec<String>,
    /// Resources that accept a `CreationPolicy` attribute
    pub creation_policy_resources: Vec<String>,
    /// Item types to force to a primitive, keyed by
    /// `<resource type>.<item type>`
    /// Example: {"AWS::SSM::Association.ParameterValues": "Json"}
    pub type_overrides: HashMap<String, PrimitiveType>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            runtime_path: "crate".to_string(),
            no_elide: Vec::new(),
            update_policy_resources: vec![
                "AWS::AutoScaling::AutoScalingGroup".to_string(),
                "AWS::ElastiCache::ReplicationGroup".to_string(),
                "AWS::Elasticsearch::Domain".to_string(),
                "AWS::Lambda::Alias".to_string(),
                "AWS::OpenSearchService::Domain".to_string(),
            ],
            creation_policy_resources: vec![
                "AWS::AppStream::Fleet".to_string(),
                "AWS::AutoScaling::AutoScalingGroup".to_string(),
                "AWS::CloudFormation::WaitCondition".to_string(),
                "AWS::EC2::Instance".to_string(),
            ],
            type_overrides: HashMap::from([(
                "AWS::SSM::Association.ParameterValues".to_string(),
                PrimitiveType::Json,
            )]),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            GeneratorError::Config(msg) => {
                GeneratorError::Config(format!("{} (in {:?})", msg, path))
            },
            other => other,
        })
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| GeneratorError::Config(format!("Failed to parse config YAML: {}", e)))?;

        if config.runtime_path.trim().is_empty() {
            return Err(GeneratorError::Config(
                "runtime_path must not be empty".to_string(),
            ));
        }

        Ok(config)
    }

    /// Whether unset fields of this property type are left out
    pub fn elides(&self, property_type: &str) -> bool {
        !self.no_elide.iter().any(|t| t == property_type)
    }

    /// Whether this resource accepts an `UpdatePolicy`
    pub fn supports_update_policy(&self, resource_type: &str) -> bool {
        self.update_policy_resources.iter().any(|t| t == resource_type)
    }

    /// Whether this resource accepts a `CreationPolicy`
    pub fn supports_creation_policy(&self, resource_type: &str) -> bool {
        self.creation_policy_resources
            .iter()
            .any(|t| t == resource_type)
    }

    /// Primitive forced for an item type referenced from `resource_type`
    pub fn type_override(&self, resource_type: &str, item_type: &str) -> Option<PrimitiveType> {
        self.type_overrides
            .get(&format!("{}.{}", resource_type, item_type))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.runtime_path, "crate");
        assert!(config.elides("AWS::AppMesh::Mesh.MeshSpec"));
        assert!(config.supports_update_policy("AWS::Lambda::Alias"));
        assert!(!config.supports_update_policy("AWS::SQS::Queue"));
        assert!(config.supports_creation_policy("AWS::EC2::Instance"));
        assert_eq!(
            config.type_override("AWS::SSM::Association", "ParameterValues"),
            Some(PrimitiveType::Json)
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
runtime_path: cfn_bindgen_runtime
no_elide:
  - AWS::AppMesh::Mesh.EgressFilter
"#;
        let config = GeneratorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.runtime_path, "cfn_bindgen_runtime");
        assert!(!config.elides("AWS::AppMesh::Mesh.EgressFilter"));
        assert!(config.supports_creation_policy("AWS::AutoScaling::AutoScalingGroup"));
    }

    #[test]
    fn test_type_overrides_from_yaml() {
        let yaml = r#"
type_overrides:
  AWS::Foo::Bar.Settings: Json
  AWS::Foo::Bar.Count: Integer
"#;
        let config = GeneratorConfig::from_yaml(yaml).unwrap();
        assert_eq!(
            config.type_override("AWS::Foo::Bar", "Count"),
            Some(PrimitiveType::Integer)
        );
        // the map is replaced as a whole
        assert_eq!(
            config.type_override("AWS::SSM::Association", "ParameterValues"),
            None
        );
    }

    #[test]
    fn test_empty_runtime_path_rejected() {
        let err = GeneratorConfig::from_yaml("runtime_path: ''").unwrap_err();
        assert!(matches!(err, GeneratorError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "version: 2").unwrap();

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.version, 2);

        let missing = GeneratorConfig::load(Path::new("/nonexistent/cfn-bindgen.yaml"));
        assert!(matches!(missing, Err(GeneratorError::Config(_))));
    }
}
