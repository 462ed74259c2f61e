use std::fmt::{Debug, Display};

use serde_json::{json, Value};

use crate::Span;

use super::{
    expressions::{BooleanExpr, CallExpr, FloatExpr, IdentifierExpr, InfixExpr, IntegerExpr},
    statements::{
        AssignStmt, BlockStmt, ExpressionStmt, FunctionStmt, IfStmt, LetStmt, ReturnStmt,
    },
};

/// Node Kinds
///
/// One tag per node variant the parser can build.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeKind {
    Program,

    // Statements
    ExpressionStatement,
    LetStatement,
    FunctionStatement,
    BlockStatement,
    ReturnStatement,
    AssignStatement,
    IfStatement,

    // Expressions
    InfixExpression,
    CallExpression,

    // Literals
    IntegerLiteral,
    FloatLiteral,
    IdentifierLiteral,
    BooleanLiteral,

    // Helper
    Parameter,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::LetStatement => "LetStatement",
            NodeKind::FunctionStatement => "FunctionStatement",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::AssignStatement => "AssignStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::InfixExpression => "InfixExpression",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::IntegerLiteral => "IntegerLiteral",
            NodeKind::FloatLiteral => "FloatLiteral",
            NodeKind::IdentifierLiteral => "IdentifierLiteral",
            NodeKind::BooleanLiteral => "BooleanLiteral",
            NodeKind::Parameter => "Parameter",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Node Trait
///
/// Defines what every node in the tree can report about itself.
pub trait Node: Debug {
    /// Returns the kind tag of the node.
    fn kind(&self) -> NodeKind;
    /// Returns a field-by-field snapshot of the node and its children.
    ///
    /// The object always carries a `"type"` entry holding the kind tag.
    fn data(&self) -> Value;
    /// Returns the span of source the node was parsed from.
    fn span(&self) -> &Span;
}

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top level statements, in source order.
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Node for Program {
    fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
    fn data(&self) -> Value {
        json!({
            "type": self.kind().as_str(),
            "statements": self.statements.iter().map(Node::data).collect::<Vec<_>>(),
        })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Let(LetStmt),
    Function(FunctionStmt),
    Block(BlockStmt),
    Return(ReturnStmt),
    Assign(AssignStmt),
    If(IfStmt),
}

impl Stmt {
    fn inner(&self) -> &dyn Node {
        match self {
            Stmt::Expression(stmt) => stmt,
            Stmt::Let(stmt) => stmt,
            Stmt::Function(stmt) => stmt,
            Stmt::Block(stmt) => stmt,
            Stmt::Return(stmt) => stmt,
            Stmt::Assign(stmt) => stmt,
            Stmt::If(stmt) => stmt,
        }
    }
}

impl Node for Stmt {
    fn kind(&self) -> NodeKind {
        self.inner().kind()
    }
    fn data(&self) -> Value {
        self.inner().data()
    }
    fn span(&self) -> &Span {
        self.inner().span()
    }
}

/// Expressions, including literals
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Infix(InfixExpr),
    Call(CallExpr),
    Integer(IntegerExpr),
    Float(FloatExpr),
    Identifier(IdentifierExpr),
    Boolean(BooleanExpr),
}

impl Expr {
    fn inner(&self) -> &dyn Node {
        match self {
            Expr::Infix(expr) => expr,
            Expr::Call(expr) => expr,
            Expr::Integer(expr) => expr,
            Expr::Float(expr) => expr,
            Expr::Identifier(expr) => expr,
            Expr::Boolean(expr) => expr,
        }
    }
}

impl Node for Expr {
    fn kind(&self) -> NodeKind {
        self.inner().kind()
    }
    fn data(&self) -> Value {
        self.inner().data()
    }
    fn span(&self) -> &Span {
        self.inner().span()
    }
}

/// Fully parenthesized source form, e.g. `(2 + (3 * 4))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Infix(expr) => write!(f, "({} {} {})", expr.left, expr.operator, expr.right),
            Expr::Call(expr) => {
                write!(f, "{}(", expr.callee)?;
                for (i, argument) in expr.arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
            Expr::Integer(expr) => write!(f, "{}", expr.value),
            Expr::Float(expr) => write!(f, "{:?}", expr.value),
            Expr::Identifier(expr) => write!(f, "{}", expr.value),
            Expr::Boolean(expr) => write!(f, "{}", expr.value),
        }
    }
}
