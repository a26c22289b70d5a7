/// The parser core: the `Parser` type, precedence table, and the Pratt
/// expression loop.
pub mod core;
/// Infix position handlers: binary operators, calls, and indexing.
pub mod infix;
/// Prefix position handlers: literals, identifiers, grouping, conditionals,
/// function literals, and the unary operators.
pub mod prefix;
/// Statement-level parsing: `let`, `return`, blocks, and expression
/// statements.
pub mod statement;

pub use self::core::{Parser, Precedence};
