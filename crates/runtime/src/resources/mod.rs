//! Generated CloudFormation resource bindings
//!
//! Generated by cfn-bindgen from version 18.6.0 of the CloudFormation
//! Resource Specification. Do not edit by hand.

pub mod all;
pub mod appmesh;
pub mod lambda;
pub mod logs;
pub mod sqs;
