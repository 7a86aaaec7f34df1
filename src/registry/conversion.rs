// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Literal;
use crate::error::RegistryError;

fn type_name(literal: &Literal) -> &'static str {
    match literal {
        Literal::String { .. } => "string",
        Literal::Integer { .. } => "integer",
        Literal::Boolean { .. } => "boolean",
        Literal::List { .. } => "list",
    }
}

fn mismatch(expected: &'static str, found: &Literal) -> RegistryError {
    RegistryError::TypeMismatch {
        expected,
        found: type_name(found),
    }
}

impl TryFrom<&Literal> for String {
    type Error = RegistryError;

    fn try_from(literal: &Literal) -> Result<Self, Self::Error> {
        literal
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", literal))
    }
}

impl TryFrom<&Literal> for bool {
    type Error = RegistryError;

    fn try_from(literal: &Literal) -> Result<Self, Self::Error> {
        literal.as_bool().ok_or_else(|| mismatch("boolean", literal))
    }
}

macro_rules! impl_integer_conversion {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<&Literal> for $ty {
                type Error = RegistryError;

                fn try_from(literal: &Literal) -> Result<Self, Self::Error> {
                    let digits = literal
                        .as_digits()
                        .ok_or_else(|| mismatch("integer", literal))?;
                    digits.parse::<$ty>().map_err(|_| RegistryError::IntegerOverflow {
                        digits: digits.to_string(),
                        target: stringify!($ty),
                    })
                }
            }
        )*
    };
}

impl_integer_conversion!(i64, u64, u32, usize);

impl<'a, T> TryFrom<&'a Literal> for Vec<T>
where
    T: TryFrom<&'a Literal, Error = RegistryError>,
{
    type Error = RegistryError;

    fn try_from(literal: &'a Literal) -> Result<Self, Self::Error> {
        literal
            .items()
            .ok_or_else(|| mismatch("list", literal))?
            .iter()
            .map(T::try_from)
            .collect()
    }
}
