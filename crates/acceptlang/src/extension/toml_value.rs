use crate::{bail, error::Error};
use toml::Value;

/// Extension trait for [`Value`](toml::Value) which checks the primitive type
/// of a configuration option.
///
/// Every method takes the option name so that a type mismatch can be reported
/// together with the expected and the actual type names.
pub trait TomlValueExt {
    /// Returns the value as a boolean.
    fn try_to_bool(&self, option: &str) -> Result<bool, Error>;

    /// Returns the value as a string slice.
    fn try_to_str(&self, option: &str) -> Result<&str, Error>;

    /// Returns the value as an array of string slices.
    fn try_to_str_array(&self, option: &str) -> Result<Vec<&str>, Error>;
}

impl TomlValueExt for Value {
    fn try_to_bool(&self, option: &str) -> Result<bool, Error> {
        match self {
            Value::Boolean(b) => Ok(*b),
            _ => bail!(type_mismatch(option, "boolean", self)),
        }
    }

    fn try_to_str(&self, option: &str) -> Result<&str, Error> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            _ => bail!(type_mismatch(option, "string", self)),
        }
    }

    fn try_to_str_array(&self, option: &str) -> Result<Vec<&str>, Error> {
        let Value::Array(values) = self else {
            bail!(type_mismatch(option, "array", self));
        };
        let mut items = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            match value {
                Value::String(s) => items.push(s.as_str()),
                _ => bail!(type_mismatch(&format!("{option}[{index}]"), "string", value)),
            }
        }
        Ok(items)
    }
}

/// Creates an error for the type mismatch of a configuration option.
fn type_mismatch(option: &str, expected: &str, value: &Value) -> Error {
    let found = value.type_str();
    Error::new(format!(
        "invalid type for the option `{option}`: expected `{expected}`, found `{found}`"
    ))
}

#[cfg(test)]
mod tests {
    use super::TomlValueExt;
    use toml::Value;

    #[test]
    fn test_type_mismatch() {
        let value = Value::String("yes".to_owned());
        let err = value.try_to_bool("exact-match-only").unwrap_err();
        assert_eq!(
            err.message(),
            "invalid type for the option `exact-match-only`: expected `boolean`, found `string`"
        );
        assert_eq!(value.try_to_str("separator").unwrap(), "yes");
    }

    #[test]
    fn test_array_elements() {
        let value = Value::Array(vec![Value::String("en".to_owned()), Value::Integer(1)]);
        let err = value.try_to_str_array("accepted-languages").unwrap_err();
        assert_eq!(
            err.message(),
            "invalid type for the option `accepted-languages[1]`: expected `string`, found `integer`"
        );
    }
}
