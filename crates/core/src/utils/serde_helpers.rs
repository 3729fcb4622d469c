//! Serde utility helpers for case-insensitive token deserialization

/// Normalize a user-supplied token: lowercase, with `_` treated as `-`.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase().replace('_', "-")
}

/// Macro to implement case-insensitive deserialization for fieldless enums
/// that are spelled as kebab-case tokens.
///
/// Usage:
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     MyEnum,
///     Variant1 => "variant-one",
///     Variant2 => "variant-two"
/// );
/// ```
///
/// `"Variant-One"`, `"VARIANT_ONE"` and `"variant-one"` all map to
/// `MyEnum::Variant1`.
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:expr),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                match $crate::utils::serde_helpers::normalize_token(&s).as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::normalize_token;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    enum TestEnum {
        First,
        SecondOption,
    }

    impl_case_insensitive_deserialize!(
        TestEnum,
        First => "first",
        SecondOption => "second-option"
    );

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("Emit_Object"), "emit-object");
        assert_eq!(normalize_token("  repl "), "repl");
    }

    #[test]
    fn test_case_insensitive_deserialize() {
        let result: TestEnum = serde_json::from_str(r#""first""#).unwrap();
        assert_eq!(result, TestEnum::First);

        let result: TestEnum = serde_json::from_str(r#""FIRST""#).unwrap();
        assert_eq!(result, TestEnum::First);

        let result: TestEnum = serde_json::from_str(r#""Second_Option""#).unwrap();
        assert_eq!(result, TestEnum::SecondOption);

        let result: Result<TestEnum, _> = serde_json::from_str(r#""secondoption""#);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown variant 'secondoption'"));
        assert!(err.contains("expected one of: first, second-option"));
    }
}
