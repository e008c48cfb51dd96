//! Values of primitive property slots
//!
//! A slot holds either a literal or an intrinsic function call that
//! CloudFormation resolves at deploy time.

use crate::intrinsic::{Intrinsic, IntrinsicFunction};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A literal or an intrinsic function call
///
/// A one-key [`Value::Map`] whose key names an intrinsic function is the
/// same document as the matching [`Value::Intrinsic`] and compares equal
/// to it.
#[derive(Debug, Clone)]
pub enum Value {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Intrinsic(Intrinsic),
}

impl Value {
    /// List of string literals
    pub fn string_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Value::String(s.into())).collect())
    }

    /// Map value, read as a function call when its only key names one
    pub fn map(map: BTreeMap<String, Value>) -> Self {
        if map.len() == 1 {
            if let Some((key, argument)) = map.iter().next() {
                if let Ok(function) = key.parse::<IntrinsicFunction>() {
                    return Value::Intrinsic(Intrinsic::new(function, argument.clone()));
                }
            }
        }
        Value::Map(map)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Intrinsic(i) => Some(i),
            _ => None,
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }

    /// Build a value from a JSON document
    ///
    /// An object with a single key naming an intrinsic function becomes
    /// [`Value::Intrinsic`]. `null` has no representation.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, String> {
        match json {
            serde_json::Value::Null => Err("null is not a valid value".to_string()),
            serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::Integer(i)),
                None => n
                    .as_f64()
                    .map(Value::Double)
                    .ok_or_else(|| format!("unsupported number {}", n)),
            },
            serde_json::Value::String(s) => Ok(Value::String(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(Value::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            serde_json::Value::Object(map) => {
                if map.len() == 1 {
                    if let Some((key, argument)) = map.iter().next() {
                        if let Ok(function) = key.parse::<IntrinsicFunction>() {
                            let argument = Value::from_json(argument)
                                .map_err(|e| format!("argument of {}: {}", function, e))?;
                            return Ok(Value::Intrinsic(Intrinsic::new(function, argument)));
                        }
                    }
                }

                map.iter()
                    .map(|(k, v)| Value::from_json(v).map(|v| (k.clone(), v)))
                    .collect::<Result<BTreeMap<_, _>, _>>()
                    .map(Value::Map)
            },
        }
    }
}

/// Whether `map` spells out the same call as `intrinsic`
fn map_is_call(map: &BTreeMap<String, Value>, intrinsic: &Intrinsic) -> bool {
    map.len() == 1
        && map
            .get(intrinsic.function.as_str())
            .is_some_and(|argument| argument == intrinsic.argument.as_ref())
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Intrinsic(a), Value::Intrinsic(b)) => a == b,
            (Value::Map(map), Value::Intrinsic(intrinsic))
            | (Value::Intrinsic(intrinsic), Value::Map(map)) => map_is_call(map, intrinsic),
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            // JSON has no NaN or infinity; serde_json would write `null`
            Value::Double(d) if !d.is_finite() => Err(serde::ser::Error::custom(format!(
                "non-finite number {} cannot be encoded",
                d
            ))),
            Value::Double(d) => serializer.serialize_f64(*d),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::List(items) => items.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
            Value::Intrinsic(intrinsic) => intrinsic.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Value::from_json(&json).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            other => {
                let json = serde_json::to_string(other).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            },
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intrinsic;
    use serde_json::json;

    fn parse(json: serde_json::Value) -> Value {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse(json!("prod-mesh")), Value::from("prod-mesh"));
        assert_eq!(parse(json!(30)), Value::Integer(30));
        assert_eq!(parse(json!(0.5)), Value::Double(0.5));
        assert_eq!(parse(json!(true)), Value::Boolean(true));
        assert_eq!(
            parse(json!(["a", "b"])),
            Value::string_list(["a", "b"])
        );
    }

    #[test]
    fn test_intrinsic_object() {
        let value = parse(json!({"Fn::GetAtt": ["Mesh", "Arn"]}));
        assert_eq!(value, intrinsic::get_att("Mesh", "Arn"));
        assert!(value.is_intrinsic());
        assert_eq!(
            value.as_intrinsic().map(|i| i.function),
            Some(IntrinsicFunction::GetAtt)
        );
    }

    #[test]
    fn test_plain_objects_stay_maps() {
        // two keys, so not a function call even though one key is `Ref`
        let value = parse(json!({"Ref": "A", "Other": 1}));
        assert!(matches!(value, Value::Map(ref m) if m.len() == 2));

        let value = parse(json!({"Fn::Length": [1, 2]}));
        assert!(matches!(value, Value::Map(_)));
    }

    #[test]
    fn test_null_is_rejected() {
        assert!(serde_json::from_value::<Value>(json!(null)).is_err());
        assert!(serde_json::from_value::<Value>(json!({"Ref": null})).is_err());
    }

    #[test]
    fn test_serialize() {
        let value = Value::List(vec![
            Value::from(1),
            Value::from(1.5),
            Value::from(false),
            intrinsic::reference("Queue"),
        ]);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!([1, 1.5, false, {"Ref": "Queue"}])
        );
    }

    #[test]
    fn test_non_finite_double_rejected() {
        for d in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = serde_json::to_value(Value::Double(d)).unwrap_err();
            assert!(err.to_string().contains("non-finite"));
        }
        assert!(serde_json::to_string(&Value::List(vec![Value::Double(f64::NAN)])).is_err());
    }

    #[test]
    fn test_single_intrinsic_key_map() {
        let map = BTreeMap::from([("Ref".to_string(), Value::from("Queue"))]);
        let raw = Value::Map(map.clone());

        assert_eq!(raw, intrinsic::reference("Queue"));
        assert_eq!(intrinsic::reference("Queue"), raw);
        assert_eq!(parse(serde_json::to_value(&raw).unwrap()), raw);

        let value = Value::from(map);
        assert!(value.is_intrinsic());
        assert_eq!(value, intrinsic::reference("Queue"));

        // the argument still has to match
        assert_ne!(raw, intrinsic::reference("Topic"));
        let other = Value::Map(BTreeMap::from([
            ("Ref".to_string(), Value::from("Queue")),
            ("Other".to_string(), Value::from(1)),
        ]));
        assert_ne!(other, intrinsic::reference("Queue"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(
            intrinsic::reference("Bucket").to_string(),
            r#"{"Ref":"Bucket"}"#
        );
    }
}
