//! Lowers the syntax tree into an emission tree of async JavaScript.
//!
//! Every function becomes an `async` arrow function and every call is wrapped
//! in `await`. Lowering never tracks indentation; block structure is expressed
//! only through nested groups (see [`crate::emit`]).

use tracing::{debug, trace};

use crate::ast::{Arg, Node};
use crate::emit::Emission;

mod error;

pub use error::{LowerError, LowerResult};

const DECLARATION: &str = "const ";
const SUSPEND: &str = "await ";
const FUNCTION_OPEN: &str = "async (";

/// Where a node is being lowered.
///
/// Only statement position declares: an assignment there is `const name = value`.
/// Everywhere else (assigned values, call operands, parameter defaults) it is a
/// plain `name = value`, and an awaited call is parenthesized so it can be
/// called or passed on as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    #[default]
    Statement,
    Expression,
}

/// Lowers a whole program: one emission per statement, in source order.
pub fn lower_program(program: &[Node]) -> LowerResult<Emission> {
    debug!(statements = program.len(), "lowering program");
    lower_sequence(program)
}

pub fn lower_node(node: &Node) -> LowerResult<Emission> {
    lower(node, Context::Statement)
}

fn lower_expression(node: &Node) -> LowerResult<Emission> {
    lower(node, Context::Expression)
}

fn lower_sequence(nodes: &[Node]) -> LowerResult<Emission> {
    nodes
        .iter()
        .map(lower_node)
        .collect::<LowerResult<Vec<_>>>()
        .map(Emission::Group)
}

pub fn lower(node: &Node, context: Context) -> LowerResult<Emission> {
    trace!(kind = node.kind(), ?context, "lowering node");
    match node {
        Node::IntegerLiteral { value } => Ok(Emission::line(value.to_string())),
        Node::BooleanLiteral { value } => Ok(Emission::line(value.to_string())),
        Node::Identifier(identifier) => Ok(Emission::line(identifier.name.as_str())),
        Node::Assignment {
            assign_to,
            assign_value,
        } => {
            let keyword = match context {
                Context::Statement => DECLARATION,
                Context::Expression => "",
            };
            let target = lower_expression(assign_to)?;
            let value = lower_expression(assign_value)?;
            Ok(Emission::splice([
                Emission::line(keyword),
                target,
                Emission::line(" = "),
                value,
            ]))
        }
        Node::Invocation {
            invoked_value,
            args_list,
        } => {
            let callee = invoked_value
                .iter()
                .map(lower_callee)
                .collect::<LowerResult<Vec<_>>>()?;
            let args = args_list
                .iter()
                .map(lower_expression)
                .collect::<LowerResult<Vec<_>>>()?;

            let mut parts = Vec::with_capacity(callee.len() + args.len() * 2 + 4);
            if context == Context::Expression {
                parts.push(Emission::line("("));
            }
            parts.push(Emission::line(SUSPEND));
            parts.extend(callee);
            parts.push(Emission::line("("));
            parts.extend(separated(args, ", "));
            parts.push(Emission::line(")"));
            if context == Context::Expression {
                parts.push(Emission::line(")"));
            }
            Ok(Emission::splice(parts))
        }
        Node::FunctionDef { arg_list, body } => lower_function(arg_list, body),
        Node::FloatLiteral { .. }
        | Node::StringLiteral(_)
        | Node::DestructuredAssignment { .. }
        | Node::Destructure(_)
        | Node::Arg(_)
        | Node::ObjectLiteral { .. }
        | Node::ArrayLiteral { .. }
        | Node::Import { .. } => Err(LowerError::unsupported(node)),
    }
}

/// Arrow functions must be parenthesized before they can be called.
fn lower_callee(node: &Node) -> LowerResult<Emission> {
    let callee = lower_expression(node)?;
    if matches!(node, Node::FunctionDef { .. }) {
        Ok(Emission::splice([
            Emission::line("("),
            callee,
            Emission::line(")"),
        ]))
    } else {
        Ok(callee)
    }
}

fn lower_function(arg_list: &[Arg], body: &[Node]) -> LowerResult<Emission> {
    let params = arg_list
        .iter()
        .map(lower_arg)
        .collect::<LowerResult<Vec<_>>>()?;

    let mut header = vec![Emission::line(FUNCTION_OPEN)];
    header.extend(separated(params, ", "));

    if body.is_empty() {
        header.push(Emission::line(") => {}"));
        return Ok(Emission::splice(header));
    }

    header.push(Emission::line(") => {"));
    let mut items = match Emission::splice(header) {
        Emission::Group(items) => items,
        line => vec![line],
    };
    items.push(lower_sequence(body)?);
    items.push(Emission::line("}"));
    Ok(Emission::Group(items))
}

fn lower_arg(arg: &Arg) -> LowerResult<Emission> {
    let expressions = arg
        .expressions
        .iter()
        .map(lower_expression)
        .collect::<LowerResult<Vec<_>>>()?;
    Ok(Emission::splice(separated(expressions, ", ")))
}

fn separated(items: Vec<Emission>, separator: &str) -> Vec<Emission> {
    let mut parts = Vec::with_capacity(items.len() * 2);
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            parts.push(Emission::line(separator));
        }
        parts.push(item);
    }
    parts
}
