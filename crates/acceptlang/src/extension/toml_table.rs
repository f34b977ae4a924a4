use toml::Table;

/// Extension trait for [`Table`](toml::Table).
pub trait TomlTableExt {
    /// Extracts the string corresponding to the key.
    fn get_str(&self, key: &str) -> Option<&str>;

    /// Extracts the table value corresponding to the key.
    fn get_table(&self, key: &str) -> Option<&Table>;
}

impl TomlTableExt for Table {
    #[inline]
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    #[inline]
    fn get_table(&self, key: &str) -> Option<&Table> {
        self.get(key).and_then(|v| v.as_table())
    }
}

#[cfg(test)]
mod tests {
    use super::TomlTableExt;
    use toml::Table;

    #[test]
    fn test_get_typed_values() {
        let table = r#"
            separator = "-"
            two-letter-only = false

            [tracing]
            level = "debug"
        "#
        .parse::<Table>()
        .unwrap();
        assert_eq!(table.get_str("separator"), Some("-"));
        assert_eq!(table.get_str("two-letter-only"), None);
        assert_eq!(
            table.get_table("tracing").and_then(|t| t.get_str("level")),
            Some("debug")
        );
        assert!(table.get_table("separator").is_none());
    }
}
