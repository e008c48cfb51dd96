//! `AWS::Lambda` resource types
//!
//! Generated by cfn-bindgen from the CloudFormation Resource Specification.
//! Do not edit by hand.

pub mod alias;

pub use alias::Alias;
