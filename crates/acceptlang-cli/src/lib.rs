//! CLI tool to resolve the preferred language of an `Accept-Language` header.

mod cli;
mod logger;

pub use cli::Cli;
