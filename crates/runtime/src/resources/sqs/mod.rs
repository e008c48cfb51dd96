//! `AWS::SQS` resource types
//!
//! Generated by cfn-bindgen from the CloudFormation Resource Specification.
//! Do not edit by hand.

pub mod queue;

pub use queue::Queue;
