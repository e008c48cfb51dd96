//! `AWS::Lambda::Alias`
//!
//! Generated by cfn-bindgen from the CloudFormation Resource Specification.
//! Do not edit by hand.

use serde::{Deserialize, Serialize};

/// `AWS::Lambda::Alias`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lambda-alias.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    /// `Description`, update type Mutable
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<crate::Value>,

    /// `FunctionName`, required, update type Immutable
    #[serde(rename = "FunctionName", default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<crate::Value>,

    /// `FunctionVersion`, required, update type Mutable
    #[serde(rename = "FunctionVersion", default, skip_serializing_if = "Option::is_none")]
    pub function_version: Option<crate::Value>,

    /// `Name`, required, update type Immutable
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<crate::Value>,

    /// `ProvisionedConcurrencyConfig`, update type Mutable
    #[serde(rename = "ProvisionedConcurrencyConfig", default, skip_serializing_if = "Option::is_none")]
    pub provisioned_concurrency_config: Option<ProvisionedConcurrencyConfiguration>,

    /// `RoutingConfig`, update type Mutable
    #[serde(rename = "RoutingConfig", default, skip_serializing_if = "Option::is_none")]
    pub routing_config: Option<AliasRoutingConfiguration>,
}

impl crate::Resource for Alias {
    const TYPE_NAME: &'static str = "AWS::Lambda::Alias";
    const SUPPORTS_UPDATE_POLICY: bool = true;
}

/// `AWS::Lambda::Alias.AliasRoutingConfiguration`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AliasRoutingConfiguration {
    /// `AdditionalVersionWeights`, required, update type Mutable
    #[serde(rename = "AdditionalVersionWeights", default, skip_serializing_if = "Option::is_none")]
    pub additional_version_weights: Option<Vec<VersionWeight>>,
}

impl crate::PropertyType for AliasRoutingConfiguration {
    const TYPE_NAME: &'static str = "AWS::Lambda::Alias.AliasRoutingConfiguration";
}

/// `AWS::Lambda::Alias.ProvisionedConcurrencyConfiguration`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvisionedConcurrencyConfiguration {
    /// `ProvisionedConcurrentExecutions`, required, update type Mutable
    #[serde(rename = "ProvisionedConcurrentExecutions", default, skip_serializing_if = "Option::is_none")]
    pub provisioned_concurrent_executions: Option<crate::Value>,
}

impl crate::PropertyType for ProvisionedConcurrencyConfiguration {
    const TYPE_NAME: &'static str = "AWS::Lambda::Alias.ProvisionedConcurrencyConfiguration";
}

/// `AWS::Lambda::Alias.VersionWeight`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionWeight {
    /// `FunctionVersion`, required, update type Mutable
    #[serde(rename = "FunctionVersion", default, skip_serializing_if = "Option::is_none")]
    pub function_version: Option<crate::Value>,

    /// `FunctionWeight`, required, update type Mutable
    #[serde(rename = "FunctionWeight", default, skip_serializing_if = "Option::is_none")]
    pub function_weight: Option<crate::Value>,
}

impl crate::PropertyType for VersionWeight {
    const TYPE_NAME: &'static str = "AWS::Lambda::Alias.VersionWeight";
}
