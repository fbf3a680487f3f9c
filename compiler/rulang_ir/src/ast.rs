//! Syntax tree produced by the parser and walked by the engine.
//!
//! Every node owns its children outright (`Box`/`Vec`); there is no sharing
//! and no parent links. Once parsed, a tree is never mutated.
//!
//! `Display` renders expressions with every boolean group and arithmetic
//! step parenthesized, which makes grouping decisions easy to assert on.

mod operators;

use std::fmt;

pub use operators::{ArithOp, AssignOp, Combinator, CompareOp};

use crate::token::format_number;

/// Ordered statement list: the whole program, or any block body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequence {
    pub stmts: Vec<Stmt>,
}

impl Sequence {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Sequence { stmts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.stmts.iter()
    }
}

/// A statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Operation(Operation),
    Branch(Branch),
    ForLoop(ForLoop),
    /// Bare call evaluated for its side effect (`APPEND`, `LOG`).
    Call(FunctionCall),
}

/// `target op value`
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub target: Reference,
    pub op: AssignOp,
    pub value: Expr,
}

/// `if condition then ... else ...`
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub condition: Expr,
    pub then_body: Sequence,
    pub else_body: Option<Sequence>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForLoop {
    pub kind: LoopKind,
    pub body: Sequence,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoopKind {
    /// `for (n) ...`
    Counted(Expr),
    /// `for each [..] ...` or `for each ref ...`
    EachOf(EachSource),
}

#[derive(Clone, Debug, PartialEq)]
pub enum EachSource {
    /// Literal array of strings and numbers.
    Literal(Vec<Literal>),
    /// Context-bound collection.
    Reference(Reference),
}

/// `name(arg, ...)`
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
}

/// Bare variable reference.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

/// Assignable location: a variable or a property path rooted at one.
#[derive(Clone, Debug, PartialEq)]
pub enum Reference {
    Identifier(Identifier),
    Property(PropertyAccess),
}

impl Reference {
    /// Name of the context slot the reference is rooted at.
    pub fn root_name(&self) -> &str {
        match self {
            Reference::Identifier(ident) => &ident.name,
            Reference::Property(access) => &access.base.name,
        }
    }
}

impl From<Reference> for Expr {
    fn from(reference: Reference) -> Self {
        match reference {
            Reference::Identifier(ident) => Expr::Identifier(ident),
            Reference::Property(access) => Expr::Property(access),
        }
    }
}

/// `base.step[step]...` with at least one step.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyAccess {
    pub base: Identifier,
    pub steps: Vec<PathStep>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathStep {
    /// `.name`
    Field(Identifier),
    /// `[expr]`
    Index(IndexAccess),
}

#[derive(Clone, Debug, PartialEq)]
pub struct IndexAccess {
    pub index: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Str(String),
    Number(f64),
    Bool(bool),
}

/// `{ 'name': expr, ... }`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectNode {
    pub properties: Vec<ObjectProperty>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectProperty {
    pub name: String,
    pub value: Expr,
}

/// Binary boolean tree node.
///
/// A group with no right operand stands for its left operand alone.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanGroup {
    pub left: Box<Expr>,
    pub combinator: Option<Combinator>,
    pub right: Option<Box<Expr>>,
    /// Written inside explicit parentheses in the source.
    pub parenthesized: bool,
}

impl BooleanGroup {
    pub fn binary(left: Expr, combinator: Combinator, right: Expr) -> Self {
        BooleanGroup {
            left: Box::new(left),
            combinator: Some(combinator),
            right: Some(Box::new(right)),
            parenthesized: false,
        }
    }

    pub fn single(left: Expr) -> Self {
        BooleanGroup {
            left: Box::new(left),
            combinator: None,
            right: None,
            parenthesized: false,
        }
    }
}

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(Identifier),
    Property(PropertyAccess),
    Call(FunctionCall),
    Object(ObjectNode),
    /// Arithmetic step; chains nest on the left.
    Aggregate {
        left: Box<Expr>,
        op: ArithOp,
        right: Box<Expr>,
    },
    /// Flat `'a' + b + 1` chain started by a string literal.
    Concat(Vec<Expr>),
    /// Leaf boolean test.
    Comparison {
        left: Box<Expr>,
        op: CompareOp,
        right: Box<Expr>,
    },
    Group(BooleanGroup),
}

impl Expr {
    pub fn number(n: f64) -> Self {
        Expr::Literal(Literal::Number(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Expr::Literal(Literal::Str(s.into()))
    }

    pub fn boolean(b: bool) -> Self {
        Expr::Literal(Literal::Bool(b))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(Identifier::new(name))
    }

    pub fn aggregate(left: Expr, op: ArithOp, right: Expr) -> Self {
        Expr::Aggregate {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn comparison(left: Expr, op: CompareOp, right: Expr) -> Self {
        Expr::Comparison {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Whether this node is a boolean combinator node.
    pub fn is_group(&self) -> bool {
        matches!(self, Expr::Group(_))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "'{s}'"),
            Literal::Number(n) => f.write_str(&format_number(*n)),
            Literal::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl fmt::Display for PropertyAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base.name)?;
        for step in &self.steps {
            match step {
                PathStep::Field(ident) => write!(f, ".{}", ident.name)?,
                PathStep::Index(access) => write!(f, "[{}]", access.index)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Identifier(ident) => f.write_str(&ident.name),
            Reference::Property(access) => write!(f, "{access}"),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{lit}"),
            Expr::Identifier(ident) => f.write_str(&ident.name),
            Expr::Property(access) => write!(f, "{access}"),
            Expr::Call(call) => {
                write!(f, "{}(", call.name)?;
                write_list(f, &call.args)?;
                f.write_str(")")
            }
            Expr::Object(object) => {
                f.write_str("{")?;
                for (i, prop) in object.properties.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{}': {}", prop.name, prop.value)?;
                }
                f.write_str("}")
            }
            Expr::Aggregate { left, op, right } => {
                write!(f, "({left} {} {right})", op.as_symbol())
            }
            Expr::Concat(parts) => {
                f.write_str("concat(")?;
                write_list(f, parts)?;
                f.write_str(")")
            }
            Expr::Comparison { left, op, right } => {
                write!(f, "{left} {} {right}", op.as_symbol())
            }
            Expr::Group(group) => match (&group.combinator, &group.right) {
                (Some(combinator), Some(right)) => {
                    write!(f, "({} {combinator} {right})", group.left)
                }
                _ => write!(f, "{}", group.left),
            },
        }
    }
}
