//! Resource Specification file parser

use super::types::ResourceSpecification;
use cfn_bindgen_common::{GeneratorConfig, GeneratorError, Result, SpecificationDefinition};
use std::fs;
use std::path::Path;
use tracing::info;

/// Resource Specification parser
///
/// Reads the primary specification document and any number of fragment
/// documents merged on top of it.
pub struct SpecParser {
    /// Loaded specification, fragments already merged
    spec: ResourceSpecification,

    /// Generation options that influence type mapping
    config: GeneratorConfig,
}

impl SpecParser {
    /// Load a specification from file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = SpecParser::from_file("CloudFormationResourceSpecification.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let spec = read_spec(path.as_ref())?;
        Ok(Self {
            spec,
            config: GeneratorConfig::default(),
        })
    }

    /// Parse a specification from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let spec = parse_spec(json)?;
        Ok(Self {
            spec,
            config: GeneratorConfig::default(),
        })
    }

    /// Use the given generator configuration
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Merge a fragment document read from a file
    pub fn with_fragment_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let fragment = read_spec(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            resources = fragment.resource_types.len(),
            "merging specification fragment"
        );
        self.spec.merge(fragment);
        Ok(self)
    }

    /// Merge a fragment document given as a JSON string
    pub fn with_fragment_json(mut self, json: &str) -> Result<Self> {
        self.spec.merge(parse_spec(json)?);
        Ok(self)
    }

    /// Parse the specification into SpecificationDefinition IR
    pub fn parse(&self) -> Result<SpecificationDefinition> {
        super::converter::convert_specification(&self.spec, &self.config, None)
    }

    /// Parse only the given service modules (e.g. `appmesh`, `sqs`)
    pub fn parse_filtered(&self, services: &[String]) -> Result<SpecificationDefinition> {
        super::converter::convert_specification(&self.spec, &self.config, Some(services))
    }

    /// Get reference to the underlying specification
    pub fn spec(&self) -> &ResourceSpecification {
        &self.spec
    }
}

fn read_spec(path: &Path) -> Result<ResourceSpecification> {
    let content = fs::read_to_string(path).map_err(|e| {
        GeneratorError::Parse(format!(
            "Failed to read specification file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_spec(&content)
}

fn parse_spec(json: &str) -> Result<ResourceSpecification> {
    serde_json::from_str(json)
        .map_err(|e| GeneratorError::Parse(format!("Failed to parse specification JSON: {}", e)))
}
