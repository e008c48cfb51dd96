//! `AWS::Logs::LogGroup`
//!
//! Generated by cfn-bindgen from the CloudFormation Resource Specification.
//! Do not edit by hand.

use serde::{Deserialize, Serialize};

/// `AWS::Logs::LogGroup`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-loggroup.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogGroup {
    /// `DataProtectionPolicy`, update type Mutable
    #[serde(rename = "DataProtectionPolicy", default, skip_serializing_if = "Option::is_none")]
    pub data_protection_policy: Option<serde_json::Value>,

    /// `KmsKeyId`, update type Mutable
    #[serde(rename = "KmsKeyId", default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<crate::Value>,

    /// `LogGroupClass`, update type Mutable
    #[serde(rename = "LogGroupClass", default, skip_serializing_if = "Option::is_none")]
    pub log_group_class: Option<crate::Value>,

    /// `LogGroupName`, update type Immutable
    #[serde(rename = "LogGroupName", default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<crate::Value>,

    /// `RetentionInDays`, update type Mutable
    #[serde(rename = "RetentionInDays", default, skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<crate::Value>,

    /// `Tags`, update type Mutable
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::Tag>>,
}

impl crate::Resource for LogGroup {
    const TYPE_NAME: &'static str = "AWS::Logs::LogGroup";
}

impl LogGroup {
    /// `Fn::GetAtt` reference to the `Arn` attribute of `logical_name`
    pub fn get_att_arn(logical_name: &str) -> crate::Value {
        crate::intrinsic::get_att(logical_name, "Arn")
    }
}
