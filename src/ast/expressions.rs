use serde_json::{json, Value};

use crate::Span;

use super::ast::{Expr, Node, NodeKind};

// LITERALS

/// Integer Literal
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
    pub span: Span,
}

impl Node for IntegerExpr {
    fn kind(&self) -> NodeKind {
        NodeKind::IntegerLiteral
    }
    fn data(&self) -> Value {
        json!({ "type": self.kind().as_str(), "value": self.value })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

/// Float Literal
#[derive(Debug, Clone, PartialEq)]
pub struct FloatExpr {
    pub value: f64,
    pub span: Span,
}

impl Node for FloatExpr {
    fn kind(&self) -> NodeKind {
        NodeKind::FloatLiteral
    }
    fn data(&self) -> Value {
        json!({ "type": self.kind().as_str(), "value": self.value })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

/// Identifier Literal
/// A name used as a value, a call target, a declaration or an assignment
/// target.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub value: String,
    pub span: Span,
}

impl Node for IdentifierExpr {
    fn kind(&self) -> NodeKind {
        NodeKind::IdentifierLiteral
    }
    fn data(&self) -> Value {
        json!({ "type": self.kind().as_str(), "value": self.value })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

/// Boolean Literal
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

impl Node for BooleanExpr {
    fn kind(&self) -> NodeKind {
        NodeKind::BooleanLiteral
    }
    fn data(&self) -> Value {
        json!({ "type": self.kind().as_str(), "value": self.value })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

// COMPLEX

/// Infix Expression
/// A binary operation. `operator` is the operator's source text (`+`, `<=`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Node for InfixExpr {
    fn kind(&self) -> NodeKind {
        NodeKind::InfixExpression
    }
    fn data(&self) -> Value {
        json!({
            "type": self.kind().as_str(),
            "left": self.left.data(),
            "operator": self.operator,
            "right": self.right.data(),
        })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

impl Node for CallExpr {
    fn kind(&self) -> NodeKind {
        NodeKind::CallExpression
    }
    fn data(&self) -> Value {
        json!({
            "type": self.kind().as_str(),
            "callee": self.callee.data(),
            "arguments": self.arguments.iter().map(Node::data).collect::<Vec<_>>(),
        })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}
