//! Integration tests for the template document model

use cfn_bindgen_runtime::resources::all;
use cfn_bindgen_runtime::resources::appmesh::Mesh;
use cfn_bindgen_runtime::resources::lambda::Alias;
use cfn_bindgen_runtime::resources::logs::LogGroup;
use cfn_bindgen_runtime::resources::sqs::Queue;
use cfn_bindgen_runtime::{
    intrinsic, CodecError, DeletionPolicy, ResourceAttributes, Template, TemplateResource, Value,
};
use serde_json::json;

const YAML_TEMPLATE: &str = r#"
AWSTemplateFormatVersion: "2010-09-09"
Description: Service mesh with a work queue
Parameters:
  Env:
    Type: String
Conditions:
  IsProd: !Equals [!Ref Env, prod]
Resources:
  Mesh:
    Type: AWS::AppMesh::Mesh
    Properties:
      MeshName: !Sub "${AWS::StackName}-mesh"
      Spec:
        EgressFilter:
          Type: DROP_ALL
  Jobs:
    Type: AWS::SQS::Queue
    DependsOn: Mesh
    DeletionPolicy: Retain
    Properties:
      VisibilityTimeout: 60
      RedrivePolicy:
        deadLetterTargetArn: !GetAtt Dlq.Arn
        maxReceiveCount: 5
  Dlq:
    Type: AWS::SQS::Queue
    Condition: IsProd
  Topic:
    Type: AWS::SNS::Topic
Outputs:
  MeshArn:
    Value: !GetAtt Mesh.Arn
"#;

#[test]
fn test_registry_is_sorted() {
    let mut sorted = all::RESOURCE_TYPES.to_vec();
    sorted.sort();
    assert_eq!(sorted, all::RESOURCE_TYPES);
    assert!(all::is_known("AWS::SQS::Queue"));
    assert!(!all::is_known("AWS::SNS::Topic"));
    assert!(all::decode_typed("AWS::SNS::Topic", None).is_none());
}

#[test]
fn test_yaml_template_lookups() {
    let template = Template::from_yaml(YAML_TEMPLATE).unwrap();

    assert_eq!(template.format_version.as_deref(), Some("2010-09-09"));
    assert_eq!(
        template.conditions["IsProd"],
        json!({"Fn::Equals": [{"Ref": "Env"}, "prod"]})
    );
    assert_eq!(
        template.outputs["MeshArn"],
        json!({"Value": {"Fn::GetAtt": ["Mesh", "Arn"]}})
    );

    let mesh: Mesh = template.get("Mesh").unwrap();
    assert_eq!(mesh.mesh_name, Some(intrinsic::make_name("mesh")));

    let queues = template.get_all::<Queue>();
    assert_eq!(queues.len(), 2);
    assert_eq!(queues["Jobs"].visibility_timeout, Some(Value::from(60)));
    assert_eq!(
        queues["Jobs"].redrive_policy.as_ref().unwrap()["deadLetterTargetArn"],
        json!({"Fn::GetAtt": ["Dlq", "Arn"]})
    );
    assert_eq!(queues["Dlq"], Queue::default());

    assert!(matches!(
        template.get::<Queue>("Mesh"),
        Err(CodecError::NotFound { .. })
    ));
    assert!(template.get_all::<LogGroup>().is_empty());
}

#[test]
fn test_resolve_types() {
    let mut template = Template::from_yaml(YAML_TEMPLATE).unwrap();
    let converted = template.resolve_types().unwrap();
    assert_eq!(converted, 3);

    assert!(template.resources["Mesh"].is_typed());
    assert!(!template.resources["Topic"].is_typed());

    match &template.resources["Jobs"] {
        TemplateResource::Typed(typed) => {
            assert_eq!(typed.type_name(), "AWS::SQS::Queue");
            assert_eq!(typed.attributes.depends_on, vec!["Mesh"]);
            assert_eq!(typed.attributes.deletion_policy, Some(DeletionPolicy::Retain));
            let queue = typed.resource.downcast_ref::<Queue>().unwrap();
            assert_eq!(queue.visibility_timeout, Some(Value::from(60)));
        },
        other => panic!("expected a typed resource, got {:?}", other),
    }

    // lookups read typed entries the same way as raw ones
    let mesh: Mesh = template.get("Mesh").unwrap();
    assert_eq!(mesh.mesh_name, Some(intrinsic::make_name("mesh")));
    assert_eq!(template.get_all::<Queue>().len(), 2);

    // resolving twice converts nothing new
    assert_eq!(template.resolve_types().unwrap(), 0);
}

#[test]
fn test_resolve_types_rejects_bad_properties() {
    let mut template = Template::from_json(
        r#"{"Resources": {"Bad": {"Type": "AWS::SQS::Queue", "Properties": {"Tags": "x"}}}}"#,
    )
    .unwrap();

    match template.resolve_types() {
        Err(CodecError::InvalidResource { name, type_name, .. }) => {
            assert_eq!(name, "Bad");
            assert_eq!(type_name, "AWS::SQS::Queue");
        },
        other => panic!("expected InvalidResource, got {:?}", other),
    }
}

#[test]
fn test_resolved_template_output() {
    let mut template = Template::from_yaml(YAML_TEMPLATE).unwrap();
    let before: serde_json::Value = serde_json::from_str(&template.to_json().unwrap()).unwrap();

    template.resolve_types().unwrap();
    let after: serde_json::Value = serde_json::from_str(&template.to_json().unwrap()).unwrap();

    assert_eq!(before["Resources"]["Mesh"], after["Resources"]["Mesh"]);
    assert_eq!(before["Resources"]["Topic"], after["Resources"]["Topic"]);
    assert_eq!(before["Outputs"], after["Outputs"]);

    // a single DependsOn name is written back as a list
    assert_eq!(
        after["Resources"]["Jobs"],
        json!({
            "Type": "AWS::SQS::Queue",
            "DependsOn": ["Mesh"],
            "DeletionPolicy": "Retain",
            "Properties": {
                "VisibilityTimeout": 60,
                "RedrivePolicy": {
                    "deadLetterTargetArn": {"Fn::GetAtt": ["Dlq", "Arn"]},
                    "maxReceiveCount": 5
                }
            }
        })
    );
    assert_eq!(
        after["Resources"]["Dlq"],
        json!({"Type": "AWS::SQS::Queue", "Condition": "IsProd", "Properties": {}})
    );
}

#[test]
fn test_build_template_in_code() {
    let mut template = Template::new();
    template.description = Some("Alias with rolling updates".to_string());

    let alias = Alias {
        function_name: Some(intrinsic::reference("Function")),
        function_version: Some(Value::from("$LATEST")),
        name: Some(Value::from("live")),
        ..Default::default()
    };
    let attributes = ResourceAttributes {
        update_policy: Some(json!({"CodeDeployLambdaAliasUpdate": {
            "ApplicationName": "app",
            "DeploymentGroupName": "group"
        }})),
        ..Default::default()
    };
    template
        .add_resource_with_attributes("Live", alias, attributes)
        .unwrap();
    template.add_resource(
        "Logs",
        LogGroup {
            retention_in_days: Some(Value::from(14)),
            ..Default::default()
        },
    );

    let json: serde_json::Value = serde_json::from_str(&template.to_json_pretty().unwrap()).unwrap();
    assert_eq!(json["AWSTemplateFormatVersion"], "2010-09-09");
    assert_eq!(json["Description"], "Alias with rolling updates");
    assert_eq!(
        json["Resources"]["Live"]["Properties"],
        json!({"FunctionName": {"Ref": "Function"}, "FunctionVersion": "$LATEST", "Name": "live"})
    );
    assert_eq!(
        json["Resources"]["Live"]["UpdatePolicy"]["CodeDeployLambdaAliasUpdate"]["ApplicationName"],
        "app"
    );
    assert_eq!(
        json["Resources"]["Logs"],
        json!({"Type": "AWS::Logs::LogGroup", "Properties": {"RetentionInDays": 14}})
    );

    // YAML output reads back to the same document
    let yaml = template.to_yaml().unwrap();
    let reloaded = Template::from_yaml(&yaml).unwrap();
    let alias: Alias = reloaded.get("Live").unwrap();
    assert_eq!(alias.name, Some(Value::from("live")));
    let reloaded_json: serde_json::Value = serde_json::from_str(&reloaded.to_json().unwrap()).unwrap();
    assert_eq!(reloaded_json, json);
}
