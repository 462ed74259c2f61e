use std::slice::Iter;

use serde_json::{json, Value};

use crate::Span;

use super::{
    ast::{Expr, Node, NodeKind, Stmt},
    expressions::IdentifierExpr,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl Node for BlockStmt {
    fn kind(&self) -> NodeKind {
        NodeKind::BlockStatement
    }
    fn data(&self) -> Value {
        json!({
            "type": self.kind().as_str(),
            "statements": self.iter().map(Node::data).collect::<Vec<_>>(),
        })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

impl Node for ExpressionStmt {
    fn kind(&self) -> NodeKind {
        NodeKind::ExpressionStatement
    }
    fn data(&self) -> Value {
        json!({ "type": self.kind().as_str(), "expression": self.expression.data() })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

/// `let name[: type] = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: IdentifierExpr,
    pub value: Expr,
    pub declared_type: Option<String>,
    pub span: Span,
}

impl Node for LetStmt {
    fn kind(&self) -> NodeKind {
        NodeKind::LetStatement
    }
    fn data(&self) -> Value {
        json!({
            "type": self.kind().as_str(),
            "name": self.name.data(),
            "value": self.value.data(),
            "declared_type": self.declared_type,
        })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

/// `name = value;`
///
/// Only bare identifiers can be assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: IdentifierExpr,
    pub value: Expr,
    pub span: Span,
}

impl Node for AssignStmt {
    fn kind(&self) -> NodeKind {
        NodeKind::AssignStatement
    }
    fn data(&self) -> Value {
        json!({
            "type": self.kind().as_str(),
            "target": self.target.data(),
            "value": self.value.data(),
        })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub consequence: BlockStmt,
    /// `None` exactly when no `else` was written.
    pub alternative: Option<BlockStmt>,
    pub span: Span,
}

impl Node for IfStmt {
    fn kind(&self) -> NodeKind {
        NodeKind::IfStatement
    }
    fn data(&self) -> Value {
        json!({
            "type": self.kind().as_str(),
            "condition": self.condition.data(),
            "consequence": self.consequence.data(),
            "alternative": self.alternative.as_ref().map(Node::data),
        })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

/// A function parameter, `name: type`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub declared_type: Option<String>,
    pub span: Span,
}

impl Node for Parameter {
    fn kind(&self) -> NodeKind {
        NodeKind::Parameter
    }
    fn data(&self) -> Value {
        json!({
            "type": self.kind().as_str(),
            "name": self.name,
            "declared_type": self.declared_type,
        })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStmt {
    pub name: IdentifierExpr,
    /// In declaration order; names are unique.
    pub parameters: Vec<Parameter>,
    pub body: BlockStmt,
    pub return_type: Option<String>,
    pub span: Span,
}

impl Node for FunctionStmt {
    fn kind(&self) -> NodeKind {
        NodeKind::FunctionStatement
    }
    fn data(&self) -> Value {
        json!({
            "type": self.kind().as_str(),
            "name": self.name.data(),
            "return_type": self.return_type,
            "parameters": self.parameters.iter().map(Node::data).collect::<Vec<_>>(),
            "body": self.body.data(),
        })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

impl Node for ReturnStmt {
    fn kind(&self) -> NodeKind {
        NodeKind::ReturnStatement
    }
    fn data(&self) -> Value {
        json!({ "type": self.kind().as_str(), "value": self.value.data() })
    }
    fn span(&self) -> &Span {
        &self.span
    }
}
