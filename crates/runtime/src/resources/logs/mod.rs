//! `AWS::Logs` resource types
//!
//! Generated by cfn-bindgen from the CloudFormation Resource Specification.
//! Do not edit by hand.

pub mod log_group;

pub use log_group::LogGroup;
