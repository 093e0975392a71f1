//! Parameter environments
//!
//! [`ParamDefs`] maps parameter names to their defining expressions. The
//! algorithms resolve a parameter by recursing into its definition with that
//! name removed from the environment, so a definition can never re-resolve
//! through itself. Removal accumulates along the resolution path, which means
//! any cycle ends with one of its names treated as unresolved. Use
//! [`ParamDefs::check_acyclic`] to reject cyclic environments up front.

use crate::error::{Result, WeightError};
use crate::weight::expr::WeightExpr;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A mapping from parameter name to defining expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamDefs {
    defs: HashMap<String, WeightExpr>,
}

impl ParamDefs {
    /// Create an empty environment
    pub fn new() -> Self {
        Self {
            defs: HashMap::new(),
        }
    }

    /// Define (or redefine) `name`, returning the previous definition
    pub fn insert(&mut self, name: impl Into<String>, expr: impl Into<WeightExpr>) -> Option<WeightExpr> {
        self.defs.insert(name.into(), expr.into())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, expr: impl Into<WeightExpr>) -> Self {
        self.insert(name, expr);
        self
    }

    /// The definition of `name`
    pub fn get(&self, name: &str) -> Option<&WeightExpr> {
        self.defs.get(name)
    }

    /// Whether `name` is defined
    pub fn contains(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    /// Remove the definition of `name`
    pub fn remove(&mut self, name: &str) -> Option<WeightExpr> {
        self.defs.remove(name)
    }

    /// A copy of this environment without `name`
    pub fn exclude(&self, name: &str) -> ParamDefs {
        let mut copy = self.clone();
        copy.remove(name);
        copy
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether there are no definitions
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Defined names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.defs.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterate over `(name, definition)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &WeightExpr)> {
        self.defs.iter()
    }

    /// Copy every definition of `other` into this environment, replacing clashes
    pub fn merge(&mut self, other: &ParamDefs) {
        self.defs
            .extend(other.iter().map(|(name, expr)| (name.clone(), expr.clone())));
    }

    /// Remove every definition
    pub fn clear(&mut self) {
        self.defs.clear();
    }

    /// Check that no definition reaches itself through other definitions
    ///
    /// A definition that mentions its own name directly is not a cycle: the
    /// resolution guard treats that inner reference as a free parameter.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the environment is acyclic, or
    /// [`WeightError::CyclicDefinition`] naming a parameter on a cycle
    pub fn check_acyclic(&self) -> Result<()> {
        // name -> defined names its definition mentions
        let deps: HashMap<&str, HashSet<&str>> = self
            .defs
            .iter()
            .map(|(name, expr)| {
                let mut refs = HashSet::new();
                collect_refs(expr, &mut refs);
                refs.retain(|r| *r != name.as_str() && self.defs.contains_key(*r));
                (name.as_str(), refs)
            })
            .collect();

        fn visit<'a>(
            name: &'a str,
            deps: &HashMap<&'a str, HashSet<&'a str>>,
            visited: &mut HashSet<&'a str>,
            in_progress: &mut HashSet<&'a str>,
        ) -> Result<()> {
            if visited.contains(name) {
                return Ok(());
            }
            if !in_progress.insert(name) {
                return Err(WeightError::CyclicDefinition {
                    name: name.to_string(),
                });
            }
            if let Some(refs) = deps.get(name) {
                for dep in refs {
                    visit(*dep, deps, visited, in_progress)?;
                }
            }
            in_progress.remove(name);
            visited.insert(name);
            Ok(())
        }

        let mut visited = HashSet::new();
        let mut in_progress = HashSet::new();
        let mut names: Vec<&str> = deps.keys().copied().collect();
        names.sort_unstable();
        for name in names {
            if let Err(err) = visit(name, &deps, &mut visited, &mut in_progress) {
                warn!("{}", err);
                return Err(err);
            }
        }
        Ok(())
    }

    pub(crate) fn scope(&self) -> Scope<'_> {
        Scope {
            defs: self,
            hidden: None,
        }
    }
}

/// Parameter names mentioned directly in `expr`
fn collect_refs<'a>(expr: &'a WeightExpr, refs: &mut HashSet<&'a str>) {
    match expr.as_param() {
        Some(name) => {
            refs.insert(name);
        }
        None => {
            for arg in expr.operands() {
                collect_refs(arg, refs);
            }
        }
    }
}

impl<K: Into<String>, V: Into<WeightExpr>> FromIterator<(K, V)> for ParamDefs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            defs: iter
                .into_iter()
                .map(|(name, expr)| (name.into(), expr.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<WeightExpr>> Extend<(K, V)> for ParamDefs {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.defs
            .extend(iter.into_iter().map(|(name, expr)| (name.into(), expr.into())));
    }
}

/// A borrowed view of a [`ParamDefs`] with the names on the current
/// resolution path hidden.
///
/// Equivalent to repeatedly calling [`ParamDefs::exclude`], without copying
/// the map at every step.
#[derive(Clone, Copy)]
pub(crate) struct Scope<'a> {
    defs: &'a ParamDefs,
    hidden: Option<(&'a str, &'a Scope<'a>)>,
}

impl<'a> Scope<'a> {
    fn is_hidden(&self, name: &str) -> bool {
        let mut scope = self;
        while let Some((hidden, parent)) = scope.hidden {
            if hidden == name {
                return true;
            }
            scope = parent;
        }
        false
    }

    /// The visible definition of `name`
    pub(crate) fn resolve(&self, name: &str) -> Option<&'a WeightExpr> {
        if self.is_hidden(name) {
            None
        } else {
            self.defs.get(name)
        }
    }

    /// This scope with `name` hidden as well
    pub(crate) fn without<'b>(&'b self, name: &'b str) -> Scope<'b> {
        Scope {
            defs: self.defs,
            hidden: Some((name, self)),
        }
    }
}
