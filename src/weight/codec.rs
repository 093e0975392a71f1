//! Persisted tree form
//!
//! Expressions serialize as a self-describing tree:
//!
//! - constants as themselves (`null`, `true`/`false`, integers, floats)
//! - parameters as a bare string holding the name
//! - operator nodes as a single-key object mapping the operator symbol to the
//!   operand (unary) or a two-element array of operands (binary)
//!
//! ```json
//! {"exp": {"-": [0, {"*": ["rate", "t"]}]}}
//! ```
//!
//! Decoding rebuilds nodes exactly as stored, without folding, so a decoded
//! tree is equal to the tree that was encoded.

use crate::error::WeightError;
use crate::weight::expr::{BinaryOp, UnaryOp, WeightExpr};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

impl Serialize for WeightExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WeightExpr::Null => serializer.serialize_unit(),
            WeightExpr::Boolean(b) => serializer.serialize_bool(*b),
            WeightExpr::Integer(i) => serializer.serialize_i64(*i),
            WeightExpr::Float(x) => serializer.serialize_f64(*x),
            WeightExpr::Param(name) => serializer.serialize_str(name),
            WeightExpr::Unary(op, arg) => {
                let mut map = serializer.serialize_map(Some(1))?;
                let arg: &WeightExpr = arg;
                map.serialize_entry(op.symbol(), arg)?;
                map.end()
            }
            WeightExpr::Binary(op, lhs, rhs) => {
                let mut map = serializer.serialize_map(Some(1))?;
                let operands: [&WeightExpr; 2] = [lhs, rhs];
                map.serialize_entry(op.symbol(), &operands)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for WeightExpr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WeightExprVisitor)
    }
}

struct WeightExprVisitor;

impl<'de> Visitor<'de> for WeightExprVisitor {
    type Value = WeightExpr;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a constant, a parameter name, or a single-operator object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<WeightExpr, E> {
        Ok(WeightExpr::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<WeightExpr, E> {
        Ok(WeightExpr::Null)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<WeightExpr, E> {
        Ok(WeightExpr::Boolean(b))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> Result<WeightExpr, E> {
        Ok(WeightExpr::Integer(i))
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> Result<WeightExpr, E> {
        Ok(match i64::try_from(u) {
            Ok(i) => WeightExpr::Integer(i),
            Err(_) => WeightExpr::Float(u as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, x: f64) -> Result<WeightExpr, E> {
        Ok(WeightExpr::Float(x))
    }

    fn visit_str<E: de::Error>(self, name: &str) -> Result<WeightExpr, E> {
        Ok(WeightExpr::Param(name.to_string()))
    }

    fn visit_string<E: de::Error>(self, name: String) -> Result<WeightExpr, E> {
        Ok(WeightExpr::Param(name))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<WeightExpr, A::Error> {
        let symbol: String = map
            .next_key()?
            .ok_or_else(|| de::Error::custom("empty operator object"))?;

        let expr = if let Some(op) = UnaryOp::from_symbol(&symbol) {
            let arg: WeightExpr = map.next_value()?;
            WeightExpr::Unary(op, Arc::new(arg))
        } else if let Some(op) = BinaryOp::from_symbol(&symbol) {
            let mut args: Vec<WeightExpr> = map.next_value()?;
            if args.len() != 2 {
                return Err(de::Error::custom(WeightError::InvalidArity {
                    op: symbol,
                    expected: 2,
                    found: args.len(),
                }));
            }
            let rhs = args.pop().unwrap_or_default();
            let lhs = args.pop().unwrap_or_default();
            WeightExpr::Binary(op, Arc::new(lhs), Arc::new(rhs))
        } else {
            return Err(de::Error::custom(WeightError::UnknownOperator { op: symbol }));
        };

        if let Some(extra) = map.next_key::<String>()? {
            return Err(de::Error::custom(format!(
                "operator object has more than one key ('{}' and '{}')",
                expr.kind_symbol(),
                extra
            )));
        }
        Ok(expr)
    }
}

impl WeightExpr {
    fn kind_symbol(&self) -> &'static str {
        match self {
            WeightExpr::Unary(op, _) => op.symbol(),
            WeightExpr::Binary(op, _, _) => op.symbol(),
            _ => "",
        }
    }

    /// Encode as a JSON value in the persisted tree form
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Decode from a JSON value in the persisted tree form
    pub fn from_json_value(value: &serde_json::Value) -> crate::error::Result<Self> {
        Ok(WeightExpr::deserialize(value)?)
    }
}
