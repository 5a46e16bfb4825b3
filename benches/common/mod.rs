#![allow(dead_code)]
use std::fs;

use practical::ast::{Arg, Node, Program};

pub const WORKLOADS: [(&str, &str); 2] = [
    ("defaults", "tests/programs/function_defaults/program.json"),
    ("calls", "tests/programs/nested_calls/program.json"),
];

pub fn load_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| panic!("read {path}: {err}"))
}

pub fn load_program(path: &str) -> Program {
    let source = load_source(path);
    serde_json::from_str(&source).unwrap_or_else(|err| panic!("parse {path}: {err}"))
}

/// Builds `width` sibling functions, each nesting `depth` functions deep.
pub fn synthetic_program(width: usize, depth: usize) -> Program {
    (0..width)
        .map(|index| {
            let mut body = vec![Node::invocation(
                Node::identifier("work"),
                vec![Node::integer(index as i64)],
            )];
            for level in 0..depth {
                body = vec![Node::assignment(
                    Node::identifier(format!("f{level}")),
                    Node::function(vec![Arg::named("x")], body),
                )];
            }
            Node::assignment(
                Node::identifier(format!("g{index}")),
                Node::function(vec![], body),
            )
        })
        .collect()
}
