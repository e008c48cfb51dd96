//! Intrinsic functions
//!
//! Builders for the `Ref` and `Fn::*` expressions CloudFormation evaluates
//! at deploy time. Values are only constructed here, never evaluated.
//!
//! ```rust,ignore
//! use cfn_bindgen_runtime::intrinsic;
//!
//! let bucket_arn = intrinsic::get_att("Bucket", "Arn");
//! let name = intrinsic::make_name("queue");
//! ```

use crate::error::CodecError;
use crate::Value;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The intrinsic functions a template may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrinsicFunction {
    Ref,
    Base64,
    Cidr,
    And,
    Equals,
    If,
    Not,
    Or,
    FindInMap,
    GetAtt,
    GetAZs,
    ImportValue,
    Join,
    Select,
    Split,
    Sub,
}

impl IntrinsicFunction {
    pub const ALL: [IntrinsicFunction; 16] = [
        IntrinsicFunction::Ref,
        IntrinsicFunction::Base64,
        IntrinsicFunction::Cidr,
        IntrinsicFunction::And,
        IntrinsicFunction::Equals,
        IntrinsicFunction::If,
        IntrinsicFunction::Not,
        IntrinsicFunction::Or,
        IntrinsicFunction::FindInMap,
        IntrinsicFunction::GetAtt,
        IntrinsicFunction::GetAZs,
        IntrinsicFunction::ImportValue,
        IntrinsicFunction::Join,
        IntrinsicFunction::Select,
        IntrinsicFunction::Split,
        IntrinsicFunction::Sub,
    ];

    /// Key used in the JSON form, e.g. `Fn::GetAtt`
    pub fn as_str(self) -> &'static str {
        match self {
            IntrinsicFunction::Ref => "Ref",
            IntrinsicFunction::Base64 => "Fn::Base64",
            IntrinsicFunction::Cidr => "Fn::Cidr",
            IntrinsicFunction::And => "Fn::And",
            IntrinsicFunction::Equals => "Fn::Equals",
            IntrinsicFunction::If => "Fn::If",
            IntrinsicFunction::Not => "Fn::Not",
            IntrinsicFunction::Or => "Fn::Or",
            IntrinsicFunction::FindInMap => "Fn::FindInMap",
            IntrinsicFunction::GetAtt => "Fn::GetAtt",
            IntrinsicFunction::GetAZs => "Fn::GetAZs",
            IntrinsicFunction::ImportValue => "Fn::ImportValue",
            IntrinsicFunction::Join => "Fn::Join",
            IntrinsicFunction::Select => "Fn::Select",
            IntrinsicFunction::Split => "Fn::Split",
            IntrinsicFunction::Sub => "Fn::Sub",
        }
    }

    /// YAML short-form tag without the `!`, e.g. `GetAtt`
    pub fn short_tag(self) -> &'static str {
        let name = self.as_str();
        name.strip_prefix("Fn::").unwrap_or(name)
    }

    /// Look up a function by its YAML short-form tag
    pub fn from_short_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.short_tag() == tag)
    }
}

impl FromStr for IntrinsicFunction {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CodecError::UnknownFunction(s.to_string()))
    }
}

impl fmt::Display for IntrinsicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A call to an intrinsic function, encoded as `{"<function>": <argument>}`
#[derive(Debug, Clone, PartialEq)]
pub struct Intrinsic {
    pub function: IntrinsicFunction,
    pub argument: Box<Value>,
}

impl Intrinsic {
    pub fn new(function: IntrinsicFunction, argument: impl Into<Value>) -> Self {
        Self {
            function,
            argument: Box::new(argument.into()),
        }
    }
}

impl Serialize for Intrinsic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.function.as_str(), self.argument.as_ref())?;
        map.end()
    }
}

impl From<Intrinsic> for Value {
    fn from(intrinsic: Intrinsic) -> Self {
        Value::Intrinsic(intrinsic)
    }
}

fn call(function: IntrinsicFunction, argument: impl Into<Value>) -> Value {
    Value::Intrinsic(Intrinsic::new(function, argument))
}

/// `Ref` to a parameter, a resource or a pseudo parameter
pub fn reference(name: impl Into<String>) -> Value {
    call(IntrinsicFunction::Ref, Value::String(name.into()))
}

/// `Fn::GetAtt` of an attribute of a resource
pub fn get_att(logical_name: impl Into<String>, attribute: impl Into<String>) -> Value {
    call(
        IntrinsicFunction::GetAtt,
        vec![
            Value::String(logical_name.into()),
            Value::String(attribute.into()),
        ],
    )
}

/// `Fn::Sub` of a template string
pub fn sub(template: impl Into<String>) -> Value {
    call(IntrinsicFunction::Sub, Value::String(template.into()))
}

/// `Fn::Sub` of a template string with explicit variables
pub fn sub_with(template: impl Into<String>, variables: BTreeMap<String, Value>) -> Value {
    call(
        IntrinsicFunction::Sub,
        vec![Value::String(template.into()), Value::Map(variables)],
    )
}

/// `Fn::Join` of values with a delimiter
pub fn join(delimiter: impl Into<String>, values: Vec<Value>) -> Value {
    call(
        IntrinsicFunction::Join,
        vec![Value::String(delimiter.into()), Value::List(values)],
    )
}

/// `Fn::Select` of one element of a list
pub fn select(index: impl Into<Value>, list: impl Into<Value>) -> Value {
    call(IntrinsicFunction::Select, vec![index.into(), list.into()])
}

/// `Fn::Split` of a string on a delimiter
pub fn split(delimiter: impl Into<String>, source: impl Into<Value>) -> Value {
    call(
        IntrinsicFunction::Split,
        vec![Value::String(delimiter.into()), source.into()],
    )
}

/// `Fn::ImportValue` of an output exported by another stack
pub fn import_value(name: impl Into<Value>) -> Value {
    call(IntrinsicFunction::ImportValue, name)
}

/// `Fn::FindInMap` of a value in the `Mappings` section
pub fn find_in_map(
    map_name: impl Into<String>,
    top_level_key: impl Into<Value>,
    second_level_key: impl Into<Value>,
) -> Value {
    call(
        IntrinsicFunction::FindInMap,
        vec![
            Value::String(map_name.into()),
            top_level_key.into(),
            second_level_key.into(),
        ],
    )
}

/// `Fn::Base64` of a string
pub fn base64(input: impl Into<Value>) -> Value {
    call(IntrinsicFunction::Base64, input)
}

/// `Fn::GetAZs` of a region, an empty string means the stack's region
pub fn get_azs(region: impl Into<Value>) -> Value {
    call(IntrinsicFunction::GetAZs, region)
}

/// `Fn::Cidr` address blocks
pub fn cidr(
    ip_block: impl Into<Value>,
    count: impl Into<Value>,
    cidr_bits: impl Into<Value>,
) -> Value {
    call(
        IntrinsicFunction::Cidr,
        vec![ip_block.into(), count.into(), cidr_bits.into()],
    )
}

/// `Fn::If` on a named condition
pub fn if_(
    condition: impl Into<String>,
    value_if_true: impl Into<Value>,
    value_if_false: impl Into<Value>,
) -> Value {
    call(
        IntrinsicFunction::If,
        vec![
            Value::String(condition.into()),
            value_if_true.into(),
            value_if_false.into(),
        ],
    )
}

/// `Fn::Equals` of two values
pub fn equals(left: impl Into<Value>, right: impl Into<Value>) -> Value {
    call(IntrinsicFunction::Equals, vec![left.into(), right.into()])
}

/// `Fn::And` of conditions
pub fn and(conditions: Vec<Value>) -> Value {
    call(IntrinsicFunction::And, conditions)
}

/// `Fn::Or` of conditions
pub fn or(conditions: Vec<Value>) -> Value {
    call(IntrinsicFunction::Or, conditions)
}

/// `Fn::Not` of a condition
pub fn not(condition: impl Into<Value>) -> Value {
    call(IntrinsicFunction::Not, vec![condition.into()])
}

/// Name unique to the stack: `${AWS::StackName}-<suffix>`
pub fn make_name(suffix: &str) -> Value {
    sub(format!("${{{}}}-{}", pseudo::STACK_NAME, suffix))
}

/// Pseudo parameters predefined by CloudFormation
pub mod pseudo {
    use super::reference;
    use crate::Value;

    pub const ACCOUNT_ID: &str = "AWS::AccountId";
    pub const NOTIFICATION_ARNS: &str = "AWS::NotificationARNs";
    pub const NO_VALUE: &str = "AWS::NoValue";
    pub const PARTITION: &str = "AWS::Partition";
    pub const REGION: &str = "AWS::Region";
    pub const STACK_ID: &str = "AWS::StackId";
    pub const STACK_NAME: &str = "AWS::StackName";
    pub const URL_SUFFIX: &str = "AWS::URLSuffix";

    pub fn account_id() -> Value {
        reference(ACCOUNT_ID)
    }

    pub fn notification_arns() -> Value {
        reference(NOTIFICATION_ARNS)
    }

    /// Removes the property it is assigned to when used inside `Fn::If`
    pub fn no_value() -> Value {
        reference(NO_VALUE)
    }

    pub fn partition() -> Value {
        reference(PARTITION)
    }

    pub fn region() -> Value {
        reference(REGION)
    }

    pub fn stack_id() -> Value {
        reference(STACK_ID)
    }

    pub fn stack_name() -> Value {
        reference(STACK_NAME)
    }

    pub fn url_suffix() -> Value {
        reference(URL_SUFFIX)
    }
}
