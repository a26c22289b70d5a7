/// The runtime value model: the `Value` enum, the boolean/null singletons,
/// function and builtin representations, and display formatting.
pub mod core;
/// Lexically scoped name bindings with parent-chain lookup.
pub mod environment;

pub use self::core::Value;
pub use self::environment::Environment;
