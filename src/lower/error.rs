use thiserror::Error;

use crate::ast::Node;

/// Typed errors produced while lowering the syntax tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LowerError {
    #[error("Unsupported node kind '{kind}': {content}")]
    UnsupportedNodeKind { kind: &'static str, content: String },
}

impl LowerError {
    pub(crate) fn unsupported(node: &Node) -> Self {
        LowerError::UnsupportedNodeKind {
            kind: node.kind(),
            content: format!("{node:?}"),
        }
    }
}

pub type LowerResult<T> = Result<T, LowerError>;
