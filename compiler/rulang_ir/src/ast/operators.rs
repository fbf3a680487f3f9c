//! Operator enums shared by the parser and the engine.

use std::fmt;

/// Assignment operator of an [`Operation`](super::Operation).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
}

impl AssignOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
        }
    }

    /// Arithmetic applied to the current value, if any.
    pub fn arith(self) -> Option<ArithOp> {
        match self {
            AssignOp::Assign => None,
            AssignOp::AddAssign => Some(ArithOp::Add),
            AssignOp::SubAssign => Some(ArithOp::Sub),
        }
    }
}

/// Arithmetic operator of an `Aggregate`.
///
/// All four share one precedence level; chains fold left to right.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }
}

/// Comparator of a leaf boolean test.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    /// Membership: list element, map key, or substring.
    In,
}

impl CompareOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
            CompareOp::In => "in",
        }
    }
}

/// Combinator joining two boolean operands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Combinator {
    And,
    Or,
    /// Binary `A not B`, meaning `A and not B`.
    Not,
}

impl Combinator {
    /// Binding power used by the boolean precedence climber.
    ///
    /// `and` binds tighter than `or`; `not` groups like `or`.
    pub fn precedence(self) -> u8 {
        match self {
            Combinator::Or | Combinator::Not => 1,
            Combinator::And => 2,
        }
    }

    pub fn as_keyword(self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
            Combinator::Not => "not",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_keyword())
    }
}
