//! `AWS::AppMesh` resource types
//!
//! Generated by cfn-bindgen from the CloudFormation Resource Specification.
//! Do not edit by hand.

pub mod mesh;

pub use mesh::Mesh;
