/// Custom GraphQL scalar for comment timestamps
///
/// Timestamps travel as ISO 8601 / RFC 3339 strings.

use async_graphql::dynamic::Scalar;
use async_graphql::Value;
use chrono::DateTime as ChronoDateTime;

/// Register custom scalars in the schema builder
pub fn register_custom_scalars() -> Vec<Scalar> {
    vec![datetime_scalar()]
}

/// Create the DateTime scalar
fn datetime_scalar() -> Scalar {
    Scalar::new("DateTime")
        .description("ISO 8601 datetime format with timezone")
        .validator(|value| {
            if let Value::String(s) = value {
                ChronoDateTime::parse_from_rfc3339(s.as_str()).is_ok()
            } else {
                false
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_registration() {
        let scalars = register_custom_scalars();
        assert_eq!(scalars.len(), 1);
    }

    #[test]
    fn test_datetime_validation_valid() {
        let result = ChronoDateTime::parse_from_rfc3339("2024-01-15T10:00:00Z");
        assert!(result.is_ok());
    }

    #[test]
    fn test_datetime_validation_invalid() {
        let result = ChronoDateTime::parse_from_rfc3339("not-a-datetime");
        assert!(result.is_err());
    }
}
