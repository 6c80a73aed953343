pub mod ast;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod writer;

pub use ast::{Dict, Value};
pub use error::FoamError;

/// Parse Foam text into its value tree.
///
/// The returned value is always a `Value::Dict` (the implicit top-level
/// body). Fails with `UnexpectedCharacter` on lexical errors and
/// `UnexpectedToken` on grammar errors; never returns a partial tree.
///
/// # Example
/// ```
/// let tree = foam_cfg::parse("a uniform 2;").unwrap();
/// assert_eq!(tree.get("a").unwrap().as_list().unwrap().len(), 2);
/// ```
pub fn parse(input: &str) -> Result<Value, FoamError> {
    parser::Parser::new(input).parse()
}

/// Write a value tree back to canonical Foam text.
///
/// Fails with `InvalidRootElement` unless the root is a dict.
///
/// # Example
/// ```
/// use foam_cfg::{Dict, Value};
///
/// let mut tree = Dict::new();
/// tree.insert("a".into(), Value::from("1"));
/// assert_eq!(foam_cfg::write(&Value::Dict(tree)).unwrap(), "a 1;");
/// ```
pub fn write(tree: &Value) -> Result<String, FoamError> {
    writer::write(tree)
}
