//! Syntax tree handed over by the grammar-driven parser.
//!
//! The parser emits `type`-tagged objects with camelCase fields; these types
//! mirror that shape so a parse result can be deserialized directly.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    #[serde(rename = "integer")]
    IntegerLiteral { value: i64 },
    #[serde(rename = "float")]
    FloatLiteral { value: f64 },
    #[serde(rename = "boolean")]
    BooleanLiteral { value: bool },
    #[serde(rename = "string")]
    StringLiteral(StringLiteral),
    Identifier(Identifier),
    #[serde(rename_all = "camelCase")]
    Assignment {
        assign_to: Box<Node>,
        assign_value: Box<Node>,
    },
    #[serde(rename = "destructured_assignment", rename_all = "camelCase")]
    DestructuredAssignment {
        assign_to: Destructure,
        assign_value: Box<Node>,
    },
    Destructure(Destructure),
    #[serde(rename_all = "camelCase")]
    Invocation {
        /// The parser wraps the callee in a list; a bare node is accepted too.
        #[serde(deserialize_with = "one_or_many")]
        invoked_value: Vec<Node>,
        #[serde(default)]
        args_list: Vec<Node>,
    },
    #[serde(rename = "function", rename_all = "camelCase")]
    FunctionDef {
        #[serde(default)]
        arg_list: Vec<Arg>,
        #[serde(default)]
        body: Vec<Node>,
    },
    Arg(Arg),
    #[serde(rename = "object")]
    ObjectLiteral { entries: Vec<ObjectEntry> },
    #[serde(rename = "array")]
    ArrayLiteral { items: Vec<Node> },
    #[serde(rename_all = "camelCase")]
    Import {
        assign_to: Identifier,
        import_from: StringLiteral,
    },
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(rename = "value")]
    pub name: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Destructure {
    pub identifiers: Vec<Identifier>,
}

/// One declared parameter: a bare identifier, or an assignment carrying the
/// parameter's default value.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Arg {
    pub expressions: Vec<Node>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ObjectEntry {
    pub key: Node,
    pub value: Node,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Node>),
    One(Box<Node>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Node>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(nodes) => nodes,
        OneOrMany::One(node) => vec![*node],
    })
}

/// Top-level statements in source order.
pub type Program = Vec<Node>;

impl Node {
    /// Wire name of the node kind, as found in the parser's `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::IntegerLiteral { .. } => "integer",
            Node::FloatLiteral { .. } => "float",
            Node::BooleanLiteral { .. } => "boolean",
            Node::StringLiteral(_) => "string",
            Node::Identifier(_) => "identifier",
            Node::Assignment { .. } => "assignment",
            Node::DestructuredAssignment { .. } => "destructured_assignment",
            Node::Destructure(_) => "destructure",
            Node::Invocation { .. } => "invocation",
            Node::FunctionDef { .. } => "function",
            Node::Arg(_) => "arg",
            Node::ObjectLiteral { .. } => "object",
            Node::ArrayLiteral { .. } => "array",
            Node::Import { .. } => "import",
        }
    }

    pub fn integer(value: i64) -> Self {
        Node::IntegerLiteral { value }
    }

    pub fn boolean(value: bool) -> Self {
        Node::BooleanLiteral { value }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(Identifier::new(name))
    }

    pub fn assignment(assign_to: Node, assign_value: Node) -> Self {
        Node::Assignment {
            assign_to: Box::new(assign_to),
            assign_value: Box::new(assign_value),
        }
    }

    pub fn invocation(invoked_value: Node, args_list: Vec<Node>) -> Self {
        Node::Invocation {
            invoked_value: vec![invoked_value],
            args_list,
        }
    }

    pub fn function(arg_list: Vec<Arg>, body: Vec<Node>) -> Self {
        Node::FunctionDef { arg_list, body }
    }
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Arg {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            expressions: vec![Node::identifier(name)],
        }
    }

    pub fn with_default(name: impl Into<String>, default: Node) -> Self {
        Self {
            expressions: vec![Node::assignment(Node::identifier(name), default)],
        }
    }
}
