pub mod ast;
pub mod compiler;
pub mod emit;
pub mod lower;

pub use compiler::{compile, compile_json};
