// src/graph/mod.rs
//! Import graph construction and the analyses that consume it.

pub mod builder;
pub mod dependency;
pub mod imports;
pub mod layers;
pub mod resolver;
pub mod unused;

pub use builder::GraphBuilder;
pub use dependency::DependencyGraph;
pub use imports::{ImportResolver, PythonImports, ResolverRegistry};
pub use layers::validate_architecture;
pub use unused::find_unused;
