#[macro_export]
macro_rules! impl_string_primitive {
    ($name:ident) => {
        impl $name {
            pub fn new(value: std::string::String) -> $crate::DomainResult<Self> {
                let value = if $crate::starts_or_ends_with_whitespace(&value) {
                    value.trim().to_string()
                } else {
                    value
                };
                let value = Self(value);
                match value.validate() {
                    Ok(_) => Ok(value),
                    Err(e) => Err($crate::DomainError {
                        kind: $crate::DomainErrorKind::Validation,
                        messages: vec![e.to_string().into()],
                        source: e.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::convert::TryFrom<String> for $name {
            type Error = $crate::DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

#[macro_export]
macro_rules! impl_int_primitive {
    ($name:ident, $ty:ty) => {
        impl $name {
            pub fn new(value: $ty) -> $crate::DomainResult<Self> {
                let value = Self(value);
                match value.validate() {
                    Ok(_) => Ok(value),
                    Err(e) => Err($crate::DomainError {
                        kind: $crate::DomainErrorKind::Validation,
                        messages: vec![e.to_string().into()],
                        source: e.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::convert::TryFrom<$ty> for $name {
            type Error = $crate::DomainError;

            fn try_from(value: $ty) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use garde::Validate as _;

    #[derive(Debug, Clone, garde::Validate)]
    pub struct StringPrimitive(#[garde(length(chars, min = 1, max = 100))] pub String);
    impl_string_primitive!(StringPrimitive);

    #[rstest::rstest]
    #[case(String::from("a1b2c3"), true)]
    #[case(String::new(), false)]
    #[case(String::from("a"), true)]
    #[case("a".repeat(100), true)]
    #[case("a".repeat(101), false)]
    #[case("🙂".repeat(100), true)]
    #[case("🙂".repeat(100) + &String::from("a"), false)]
    fn impl_string_primitive(#[case] s: String, #[case] expected: bool) {
        let primitive = StringPrimitive::new(s);
        assert_eq!(primitive.is_ok(), expected);
    }

    #[test]
    fn impl_string_primitive_trims_whitespace() {
        let primitive = StringPrimitive::new(String::from("  a1b2c3  ")).unwrap();
        assert_eq!(primitive.0, "a1b2c3");
    }

    #[derive(Debug, Clone, Copy, garde::Validate)]
    pub struct IntPrimitive(#[garde(range(min = 0, max = 100))] pub i16);
    impl_int_primitive!(IntPrimitive, i16);

    #[rstest::rstest]
    #[case(0, true)]
    #[case(100, true)]
    #[case(-1, false)]
    #[case(101, false)]
    fn impl_int_primitive(#[case] value: i16, #[case] expected: bool) {
        let primitive = IntPrimitive::new(value);
        assert_eq!(primitive.is_ok(), expected);
    }
}
