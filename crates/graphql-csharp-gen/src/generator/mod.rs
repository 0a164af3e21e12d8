pub(crate) mod ast;
pub(crate) mod codegen;
pub mod config;
pub(crate) mod converter;
pub(crate) mod naming;
pub mod orchestrator;
pub(crate) mod schema_index;
