//! `AWS::AppMesh::Mesh`
//!
//! Generated by cfn-bindgen from the CloudFormation Resource Specification.
//! Do not edit by hand.

use serde::{Deserialize, Serialize};

/// `AWS::AppMesh::Mesh`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appmesh-mesh.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// `MeshName`, update type Immutable
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appmesh-mesh.html#cfn-appmesh-mesh-meshname>
    #[serde(rename = "MeshName", default, skip_serializing_if = "Option::is_none")]
    pub mesh_name: Option<crate::Value>,

    /// `Spec`, update type Mutable
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appmesh-mesh.html#cfn-appmesh-mesh-spec>
    #[serde(rename = "Spec", default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<MeshSpec>,

    /// `Tags`, update type Mutable
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appmesh-mesh.html#cfn-appmesh-mesh-tags>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::Tag>>,
}

impl crate::Resource for Mesh {
    const TYPE_NAME: &'static str = "AWS::AppMesh::Mesh";
}

impl Mesh {
    /// `Fn::GetAtt` reference to the `Arn` attribute of `logical_name`
    pub fn get_att_arn(logical_name: &str) -> crate::Value {
        crate::intrinsic::get_att(logical_name, "Arn")
    }

    /// `Fn::GetAtt` reference to the `MeshName` attribute of `logical_name`
    pub fn get_att_mesh_name(logical_name: &str) -> crate::Value {
        crate::intrinsic::get_att(logical_name, "MeshName")
    }

    /// `Fn::GetAtt` reference to the `Uid` attribute of `logical_name`
    pub fn get_att_uid(logical_name: &str) -> crate::Value {
        crate::intrinsic::get_att(logical_name, "Uid")
    }
}

/// `AWS::AppMesh::Mesh.EgressFilter`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-appmesh-mesh-egressfilter.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EgressFilter {
    /// `Type`, required, update type Mutable
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-appmesh-mesh-egressfilter.html#cfn-appmesh-mesh-egressfilter-type>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<crate::Value>,
}

impl crate::PropertyType for EgressFilter {
    const TYPE_NAME: &'static str = "AWS::AppMesh::Mesh.EgressFilter";
}

/// `AWS::AppMesh::Mesh.MeshServiceDiscovery`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-appmesh-mesh-meshservicediscovery.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshServiceDiscovery {
    /// `IpPreference`, update type Mutable
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-appmesh-mesh-meshservicediscovery.html#cfn-appmesh-mesh-meshservicediscovery-ippreference>
    #[serde(rename = "IpPreference", default, skip_serializing_if = "Option::is_none")]
    pub ip_preference: Option<crate::Value>,
}

impl crate::PropertyType for MeshServiceDiscovery {
    const TYPE_NAME: &'static str = "AWS::AppMesh::Mesh.MeshServiceDiscovery";
}

/// `AWS::AppMesh::Mesh.MeshSpec`
///
/// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-appmesh-mesh-meshspec.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshSpec {
    /// `EgressFilter`, update type Mutable
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-appmesh-mesh-meshspec.html#cfn-appmesh-mesh-meshspec-egressfilter>
    #[serde(rename = "EgressFilter", default, skip_serializing_if = "Option::is_none")]
    pub egress_filter: Option<EgressFilter>,

    /// `ServiceDiscovery`, update type Mutable
    ///
    /// <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-appmesh-mesh-meshspec.html#cfn-appmesh-mesh-meshspec-servicediscovery>
    #[serde(rename = "ServiceDiscovery", default, skip_serializing_if = "Option::is_none")]
    pub service_discovery: Option<MeshServiceDiscovery>,
}

impl crate::PropertyType for MeshSpec {
    const TYPE_NAME: &'static str = "AWS::AppMesh::Mesh.MeshSpec";
}
