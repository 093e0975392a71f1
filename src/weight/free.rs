//! Free-parameter extraction

use crate::weight::defs::{ParamDefs, Scope};
use crate::weight::expr::WeightExpr;
use std::collections::BTreeSet;

impl WeightExpr {
    /// Names of the parameters this expression depends on that `defs` does
    /// not resolve
    ///
    /// Resolvable parameters are followed into their definitions, so the
    /// result lists the genuine inputs of the expression.
    pub fn free_params(&self, defs: &ParamDefs) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        collect_free(self, defs.scope(), &mut names);
        names
    }
}

fn collect_free(expr: &WeightExpr, scope: Scope<'_>, names: &mut BTreeSet<String>) {
    match expr {
        WeightExpr::Null | WeightExpr::Boolean(_) | WeightExpr::Integer(_) | WeightExpr::Float(_) => {}
        WeightExpr::Param(name) => match scope.resolve(name) {
            Some(def) => collect_free(def, scope.without(name), names),
            None => {
                names.insert(name.clone());
            }
        },
        WeightExpr::Unary(_, arg) => collect_free(arg, scope, names),
        WeightExpr::Binary(_, lhs, rhs) => {
            collect_free(lhs, scope, names);
            collect_free(rhs, scope, names);
        }
    }
}
