//! Argument validation for admin operations.
//!
//! Builders check their required fields before producing query arguments,
//! so an invalid call fails without anything being signed or sent.

/// An admin operation argument is missing or invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent or empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The subuser access level is not one of the accepted input values.
    #[error("invalid subuser access level '{0}'")]
    InvalidSubuserAccess(String),

    /// The key type is neither `s3` nor `swift`.
    #[error("unsupported key type '{0}'")]
    UnsupportedKeyType(String),
}

/// Return the value if present and non-empty.
pub(crate) fn require<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_require_non_empty_value() {
        assert_eq!(require("user id", Some("alice")), Ok("alice"));
        assert_eq!(
            require("user id", Some("")),
            Err(ValidationError::MissingField("user id"))
        );
        assert_eq!(
            require("user id", None),
            Err(ValidationError::MissingField("user id"))
        );
    }

    #[test]
    fn test_should_describe_missing_field() {
        assert_eq!(
            ValidationError::MissingField("bucket name").to_string(),
            "bucket name is required"
        );
    }
}
