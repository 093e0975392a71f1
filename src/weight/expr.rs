//! The weight expression tree
//!
//! A [`WeightExpr`] is an immutable tree. Children are shared behind [`Arc`],
//! so cloning a node is cheap and a tree can be read from several threads at
//! once. Operator nodes should only be created through the builders in
//! [`crate::weight::algebra`], which keep constants folded.

use std::fmt;
use std::sync::Arc;

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Natural logarithm
    Log,

    /// Exponential
    Exp,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition (+)
    Add,

    /// Subtraction (-)
    Sub,

    /// Multiplication (*)
    Mul,

    /// Division (/)
    Div,

    /// Power (pow)
    Pow,
}

impl UnaryOp {
    /// All unary operators
    pub const ALL: [UnaryOp; 2] = [UnaryOp::Log, UnaryOp::Exp];

    /// The symbol used in rendered and persisted forms
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Log => "log",
            UnaryOp::Exp => "exp",
        }
    }

    /// Look up an operator by its symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl BinaryOp {
    /// All binary operators
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
    ];

    /// The symbol used in rendered and persisted forms
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "pow",
        }
    }

    /// Look up an operator by its symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator to two numbers
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Kinds of constant leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstKind {
    Null,
    Boolean,
    Integer,
    Float,
}

/// Classification of a node, as returned by [`WeightExpr::kind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// A constant leaf
    Constant(ConstKind),

    /// A named parameter reference
    Param,

    /// A unary operator node
    Unary(UnaryOp),

    /// A binary operator node
    Binary(BinaryOp),
}

/// A symbolic weight expression
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeightExpr {
    /// The constant 0
    #[default]
    Null,

    /// 0 (false) or 1 (true)
    Boolean(bool),

    /// Integer literal
    Integer(i64),

    /// Floating-point literal
    Float(f64),

    /// Reference to a named parameter
    Param(String),

    /// Unary operator applied to an operand
    Unary(UnaryOp, Arc<WeightExpr>),

    /// Binary operator applied to two operands
    Binary(BinaryOp, Arc<WeightExpr>, Arc<WeightExpr>),
}

impl WeightExpr {
    /// The canonical zero constant
    pub fn zero() -> Self {
        WeightExpr::Null
    }

    /// The canonical one constant
    pub fn one() -> Self {
        WeightExpr::Boolean(true)
    }

    /// A reference to the parameter `name`
    pub fn param(name: impl Into<String>) -> Self {
        WeightExpr::Param(name.into())
    }

    /// Classify this node
    pub fn kind(&self) -> ExprKind {
        match self {
            WeightExpr::Null => ExprKind::Constant(ConstKind::Null),
            WeightExpr::Boolean(_) => ExprKind::Constant(ConstKind::Boolean),
            WeightExpr::Integer(_) => ExprKind::Constant(ConstKind::Integer),
            WeightExpr::Float(_) => ExprKind::Constant(ConstKind::Float),
            WeightExpr::Param(_) => ExprKind::Param,
            WeightExpr::Unary(op, _) => ExprKind::Unary(*op),
            WeightExpr::Binary(op, _, _) => ExprKind::Binary(*op),
        }
    }

    /// The ordered sub-expressions of an operator node; empty for leaves
    pub fn operands(&self) -> Vec<&WeightExpr> {
        match self {
            WeightExpr::Unary(_, arg) => vec![&**arg],
            WeightExpr::Binary(_, lhs, rhs) => vec![&**lhs, &**rhs],
            _ => Vec::new(),
        }
    }

    /// True for constant leaves
    pub fn is_constant(&self) -> bool {
        matches!(self.kind(), ExprKind::Constant(_))
    }

    /// The name of a parameter reference
    pub fn as_param(&self) -> Option<&str> {
        match self {
            WeightExpr::Param(name) => Some(name),
            _ => None,
        }
    }

    /// Numeric literal value. Null and booleans are not numeric literals.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            WeightExpr::Integer(i) => Some(*i as f64),
            WeightExpr::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Value of any constant leaf
    pub fn constant_value(&self) -> Option<f64> {
        match self {
            WeightExpr::Null => Some(0.0),
            WeightExpr::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => self.as_number(),
        }
    }

    /// Null, false, integer 0 or float 0.0
    pub fn is_zero(&self) -> bool {
        match self {
            WeightExpr::Null => true,
            WeightExpr::Boolean(b) => !*b,
            WeightExpr::Integer(i) => *i == 0,
            WeightExpr::Float(f) => *f == 0.0,
            _ => false,
        }
    }

    /// True, integer 1 or float 1.0
    pub fn is_one(&self) -> bool {
        match self {
            WeightExpr::Boolean(b) => *b,
            WeightExpr::Integer(i) => *i == 1,
            WeightExpr::Float(f) => *f == 1.0,
            _ => false,
        }
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        1 + self
            .operands()
            .into_iter()
            .map(WeightExpr::node_count)
            .sum::<usize>()
    }
}

impl From<bool> for WeightExpr {
    fn from(b: bool) -> Self {
        WeightExpr::Boolean(b)
    }
}

impl From<i64> for WeightExpr {
    fn from(i: i64) -> Self {
        WeightExpr::Integer(i)
    }
}

impl From<i32> for WeightExpr {
    fn from(i: i32) -> Self {
        WeightExpr::Integer(i64::from(i))
    }
}

impl From<f64> for WeightExpr {
    fn from(f: f64) -> Self {
        WeightExpr::Float(f)
    }
}

impl From<&str> for WeightExpr {
    fn from(name: &str) -> Self {
        WeightExpr::Param(name.to_string())
    }
}

impl From<String> for WeightExpr {
    fn from(name: String) -> Self {
        WeightExpr::Param(name)
    }
}

impl From<&WeightExpr> for WeightExpr {
    fn from(expr: &WeightExpr) -> Self {
        expr.clone()
    }
}
