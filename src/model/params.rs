//! Named parameter sets
//!
//! A [`Params`] holds the definitions of a group of model parameters, such as
//! the probability or rate parameters of a model. It persists as a JSON object
//! from parameter name to expression tree.

use crate::error::Result;
use crate::weight::{ParamDefs, WeightExpr};
use serde::{Deserialize, Serialize};

/// A set of named parameter definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    /// The definitions, by parameter name
    pub defs: ParamDefs,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self {
            defs: ParamDefs::new(),
        }
    }

    /// Wrap an existing environment
    pub fn from_defs(defs: ParamDefs) -> Self {
        Self { defs }
    }

    /// Define (or redefine) a parameter
    pub fn set(&mut self, name: impl Into<String>, expr: impl Into<WeightExpr>) {
        self.defs.insert(name, expr);
    }

    /// The definition of a parameter
    pub fn get(&self, name: &str) -> Option<&WeightExpr> {
        self.defs.get(name)
    }

    /// Parameter names, sorted
    pub fn names(&self) -> Vec<String> {
        self.defs.names()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Remove every parameter
    pub fn clear(&mut self) {
        self.defs.clear();
    }

    /// The union of two parameter sets; definitions in `other` win on clashes
    pub fn combine(&self, other: &Params) -> Params {
        let mut combined = self.clone();
        combined.defs.merge(&other.defs);
        combined
    }

    /// Replace the contents with the parameters stored in `value`
    pub fn read_json(&mut self, value: &serde_json::Value) -> Result<()> {
        *self = Params::deserialize(value)?;
        Ok(())
    }

    /// The persisted form of this set
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
