//! Extension traits to provide helper utilities.

mod toml_table;
mod toml_value;

pub use toml_table::TomlTableExt;
pub use toml_value::TomlValueExt;
