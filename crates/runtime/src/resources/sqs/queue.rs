//! `AWS::SQS::Queue`
//!
//! Generated by cfn-bindgen from the CloudFormation Resource Specification.
//! Do not edit by hand.

use serde::{Deserialize, Serialize};

/// `AWS::SQS::Queue`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sqs-queue.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    /// `ContentBasedDeduplication`, update type Mutable
    #[serde(rename = "ContentBasedDeduplication", default, skip_serializing_if = "Option::is_none")]
    pub content_based_deduplication: Option<crate::Value>,

    /// `DeduplicationScope`, update type Mutable
    #[serde(rename = "DeduplicationScope", default, skip_serializing_if = "Option::is_none")]
    pub deduplication_scope: Option<crate::Value>,

    /// `DelaySeconds`, update type Mutable
    #[serde(rename = "DelaySeconds", default, skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<crate::Value>,

    /// `FifoQueue`, update type Immutable
    #[serde(rename = "FifoQueue", default, skip_serializing_if = "Option::is_none")]
    pub fifo_queue: Option<crate::Value>,

    /// `FifoThroughputLimit`, update type Mutable
    #[serde(rename = "FifoThroughputLimit", default, skip_serializing_if = "Option::is_none")]
    pub fifo_throughput_limit: Option<crate::Value>,

    /// `KmsDataKeyReusePeriodSeconds`, update type Mutable
    #[serde(rename = "KmsDataKeyReusePeriodSeconds", default, skip_serializing_if = "Option::is_none")]
    pub kms_data_key_reuse_period_seconds: Option<crate::Value>,

    /// `KmsMasterKeyId`, update type Mutable
    #[serde(rename = "KmsMasterKeyId", default, skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<crate::Value>,

    /// `MaximumMessageSize`, update type Mutable
    #[serde(rename = "MaximumMessageSize", default, skip_serializing_if = "Option::is_none")]
    pub maximum_message_size: Option<crate::Value>,

    /// `MessageRetentionPeriod`, update type Mutable
    #[serde(rename = "MessageRetentionPeriod", default, skip_serializing_if = "Option::is_none")]
    pub message_retention_period: Option<crate::Value>,

    /// `QueueName`, update type Immutable
    #[serde(rename = "QueueName", default, skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<crate::Value>,

    /// `ReceiveMessageWaitTimeSeconds`, update type Mutable
    #[serde(rename = "ReceiveMessageWaitTimeSeconds", default, skip_serializing_if = "Option::is_none")]
    pub receive_message_wait_time_seconds: Option<crate::Value>,

    /// `RedriveAllowPolicy`, update type Mutable
    #[serde(rename = "RedriveAllowPolicy", default, skip_serializing_if = "Option::is_none")]
    pub redrive_allow_policy: Option<serde_json::Value>,

    /// `RedrivePolicy`, update type Mutable
    #[serde(rename = "RedrivePolicy", default, skip_serializing_if = "Option::is_none")]
    pub redrive_policy: Option<serde_json::Value>,

    /// `SqsManagedSseEnabled`, update type Mutable
    #[serde(rename = "SqsManagedSseEnabled", default, skip_serializing_if = "Option::is_none")]
    pub sqs_managed_sse_enabled: Option<crate::Value>,

    /// `Tags`, update type Mutable
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::Tag>>,

    /// `VisibilityTimeout`, update type Mutable
    #[serde(rename = "VisibilityTimeout", default, skip_serializing_if = "Option::is_none")]
    pub visibility_timeout: Option<crate::Value>,
}

impl crate::Resource for Queue {
    const TYPE_NAME: &'static str = "AWS::SQS::Queue";
}

impl Queue {
    /// `Fn::GetAtt` reference to the `Arn` attribute of `logical_name`
    pub fn get_att_arn(logical_name: &str) -> crate::Value {
        crate::intrinsic::get_att(logical_name, "Arn")
    }

    /// `Fn::GetAtt` reference to the `QueueName` attribute of `logical_name`
    pub fn get_att_queue_name(logical_name: &str) -> crate::Value {
        crate::intrinsic::get_att(logical_name, "QueueName")
    }

    /// `Fn::GetAtt` reference to the `QueueUrl` attribute of `logical_name`
    pub fn get_att_queue_url(logical_name: &str) -> crate::Value {
        crate::intrinsic::get_att(logical_name, "QueueUrl")
    }
}
