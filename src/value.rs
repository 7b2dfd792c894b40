use std::{borrow::Cow, sync::Arc};

use smol_str::SmolStr;

use crate::bind::{Bind, IntoBind};

/// The shape of a predicate operand, fixed when the predicate is built.
///
/// Equality and pattern predicates pick their sql from the variant: `Null` becomes
/// `IS NULL`, a `Sequence` becomes `IN`, and so on.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Scalar(Bind),
    Text(SmolStr),
    Binary(Vec<u8>),
    /// Character codes not yet packed as text.
    Chars(Vec<char>),
    Sequence(Vec<Bind>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(_) => "scalar",
            Self::Text(_) => "text",
            Self::Binary(_) => "binary",
            Self::Chars(_) => "chars",
            Self::Sequence(_) => "sequence",
        }
    }

    /// Collapse into the single value bound for a placeholder.
    pub fn into_bind(self) -> Bind {
        match self {
            Self::Null => Bind::Null,
            Self::Scalar(bind) => bind,
            Self::Text(text) => Bind::Text(text),
            Self::Binary(bytes) => Bind::Bytes(bytes),
            Self::Chars(chars) => Bind::Array(chars_to_binds(&chars)),
            Self::Sequence(binds) => Bind::Array(binds),
        }
    }
}

pub(crate) fn chars_to_binds(chars: &[char]) -> Vec<Bind> {
    chars
        .iter()
        .map(|c| Bind::Text(smol_str::format_smolstr!("{}", c)))
        .collect()
}

pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// A `Scalar` holding a null, text, bytes or an array is reclassified, so each
/// value has a single shape.
impl IntoValue for Value {
    fn into_value(self) -> Value {
        match self {
            Self::Scalar(bind) => bind.into_value(),
            value => value,
        }
    }
}

impl IntoValue for Bind {
    fn into_value(self) -> Value {
        match self {
            Bind::Null => Value::Null,
            Bind::Text(text) => Value::Text(text),
            Bind::Bytes(bytes) => Value::Binary(bytes),
            Bind::Array(binds) => Value::Sequence(binds),
            other => Value::Scalar(other),
        }
    }
}

impl<T> IntoValue for Option<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}

impl<T> IntoValue for &T
where
    T: IntoValue + Clone,
{
    fn into_value(self) -> Value {
        self.clone().into_value()
    }
}

impl<T> IntoValue for Box<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        (*self).into_value()
    }
}

impl<T> IntoValue for Arc<T>
where
    T: IntoValue + Clone,
{
    fn into_value(self) -> Value {
        Arc::unwrap_or_clone(self).into_value()
    }
}

macro_rules! impl_scalar_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoValue for $ty {
                #[inline]
                fn into_value(self) -> Value {
                    Value::Scalar(self.into_bind())
                }
            }
        )+
    };
}

impl_scalar_value!(bool, i8, i16, i32, i64, u16, u32, u64, f32, f64);

#[cfg(feature = "chrono")]
impl_scalar_value!(
    chrono::DateTime<chrono::Utc>,
    chrono::NaiveDateTime,
    chrono::NaiveDate,
);

#[cfg(feature = "time")]
impl_scalar_value!(time::OffsetDateTime, time::PrimitiveDateTime, time::Date);

#[cfg(feature = "uuid")]
impl_scalar_value!(uuid::Uuid);

#[cfg(feature = "json")]
impl_scalar_value!(serde_json::Value);

impl IntoValue for u8 {
    fn into_value(self) -> Value {
        Value::Scalar(Bind::U8(self))
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::Text(smol_str::format_smolstr!("{}", self))
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Text(SmolStr::new(self))
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Text(SmolStr::from(self))
    }
}

impl IntoValue for SmolStr {
    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

impl IntoValue for Cow<'_, str> {
    fn into_value(self) -> Value {
        Value::Text(SmolStr::new(self.as_ref()))
    }
}

impl IntoValue for Box<str> {
    fn into_value(self) -> Value {
        Value::Text(SmolStr::new(self.as_ref()))
    }
}

impl IntoValue for Arc<str> {
    fn into_value(self) -> Value {
        Value::Text(SmolStr::new(self.as_ref()))
    }
}

impl IntoValue for Vec<u8> {
    fn into_value(self) -> Value {
        Value::Binary(self)
    }
}

impl IntoValue for &[u8] {
    fn into_value(self) -> Value {
        Value::Binary(self.to_vec())
    }
}

impl<const N: usize> IntoValue for [u8; N] {
    fn into_value(self) -> Value {
        Value::Binary(self.to_vec())
    }
}

impl IntoValue for Vec<char> {
    fn into_value(self) -> Value {
        Value::Chars(self)
    }
}

impl IntoValue for &[char] {
    fn into_value(self) -> Value {
        Value::Chars(self.to_vec())
    }
}

impl<T> IntoValue for Vec<T>
where
    T: IntoBind,
{
    fn into_value(self) -> Value {
        Value::Sequence(self.into_iter().map(IntoBind::into_bind).collect())
    }
}

impl<T> IntoValue for &[T]
where
    T: IntoBind + Clone,
{
    fn into_value(self) -> Value {
        Value::Sequence(self.iter().cloned().map(IntoBind::into_bind).collect())
    }
}

impl<T, const N: usize> IntoValue for [T; N]
where
    T: IntoBind,
{
    fn into_value(self) -> Value {
        Value::Sequence(self.into_iter().map(IntoBind::into_bind).collect())
    }
}
