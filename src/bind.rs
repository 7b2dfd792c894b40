use std::{borrow::Cow, sync::Arc};

use smol_str::SmolStr;

/// A value deferred to the driver and substituted at a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Text(SmolStr),
    Bytes(Vec<u8>),
    /// A whole sequence bound to a single placeholder, as in `col IN $1`.
    Array(Vec<Bind>),
    #[cfg(feature = "chrono")]
    ChronoDateTime(chrono::DateTime<chrono::Utc>),
    #[cfg(feature = "chrono")]
    ChronoNaiveDateTime(chrono::NaiveDateTime),
    #[cfg(feature = "chrono")]
    ChronoNaiveDate(chrono::NaiveDate),
    #[cfg(feature = "time")]
    TimeOffsetDateTime(time::OffsetDateTime),
    #[cfg(feature = "time")]
    TimePrimitiveDateTime(time::PrimitiveDateTime),
    #[cfg(feature = "time")]
    TimeDate(time::Date),
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),
    #[cfg(feature = "json")]
    Json(serde_json::Value),
}

impl Bind {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

pub trait IntoBind {
    fn into_bind(self) -> Bind;
}

/// Values for a raw sql fragment, one per `?`.
pub trait IntoBinds {
    fn into_binds(self) -> Vec<Bind>;
}

impl IntoBinds for () {
    fn into_binds(self) -> Vec<Bind> {
        Vec::new()
    }
}

impl<T> IntoBinds for T
where
    T: IntoBind,
{
    fn into_binds(self) -> Vec<Bind> {
        vec![self.into_bind()]
    }
}

impl<T> IntoBinds for Vec<T>
where
    T: IntoBind,
{
    fn into_binds(self) -> Vec<Bind> {
        self.into_iter().map(IntoBind::into_bind).collect()
    }
}

impl<T, const N: usize> IntoBinds for [T; N]
where
    T: IntoBind,
{
    fn into_binds(self) -> Vec<Bind> {
        self.into_iter().map(IntoBind::into_bind).collect()
    }
}

impl IntoBind for Bind {
    fn into_bind(self) -> Bind {
        self
    }
}

impl<T> IntoBind for Option<T>
where
    T: IntoBind,
{
    fn into_bind(self) -> Bind {
        if let Some(value) = self {
            value.into_bind()
        } else {
            Bind::Null
        }
    }
}

// u8 and char are left out: sequences of them are binary data and text.
macro_rules! impl_into_bind {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl IntoBind for $ty {
                #[inline]
                fn into_bind(self) -> Bind {
                    Bind::$variant(self)
                }
            }
        )+
    };
}

impl_into_bind! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

#[cfg(feature = "chrono")]
impl_into_bind! {
    chrono::DateTime<chrono::Utc> => ChronoDateTime,
    chrono::NaiveDateTime => ChronoNaiveDateTime,
    chrono::NaiveDate => ChronoNaiveDate,
}

#[cfg(feature = "time")]
impl_into_bind! {
    time::OffsetDateTime => TimeOffsetDateTime,
    time::PrimitiveDateTime => TimePrimitiveDateTime,
    time::Date => TimeDate,
}

#[cfg(feature = "uuid")]
impl_into_bind! {
    uuid::Uuid => Uuid,
}

#[cfg(feature = "json")]
impl_into_bind! {
    serde_json::Value => Json,
}

impl IntoBind for &str {
    fn into_bind(self) -> Bind {
        Bind::Text(SmolStr::new(self))
    }
}

impl IntoBind for String {
    fn into_bind(self) -> Bind {
        Bind::Text(SmolStr::from(self))
    }
}

impl IntoBind for &String {
    fn into_bind(self) -> Bind {
        Bind::Text(SmolStr::new(self.as_str()))
    }
}

impl IntoBind for SmolStr {
    fn into_bind(self) -> Bind {
        Bind::Text(self)
    }
}

impl IntoBind for Cow<'_, str> {
    fn into_bind(self) -> Bind {
        Bind::Text(SmolStr::new(self.as_ref()))
    }
}

impl IntoBind for Arc<str> {
    fn into_bind(self) -> Bind {
        Bind::Text(SmolStr::new(self.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_binds() {
        assert_eq!(Bind::I32(5), 5.into_bind());
        assert_eq!(Bind::Bool(false), false.into_bind());
        assert_eq!(Bind::Text(SmolStr::new_static("foo")), "foo".into_bind());
        assert!(None::<i64>.into_bind().is_null());
        assert_eq!(Bind::I64(7), Some(7_i64).into_bind());
    }

    #[test]
    fn test_into_binds() {
        assert!(().into_binds().is_empty());
        assert_eq!(vec![Bind::I32(1)], 1.into_binds());
        assert_eq!(vec![Bind::I32(1), Bind::I32(2)], [1, 2].into_binds());
        assert_eq!(
            vec![Bind::Text("a".into()), Bind::Null],
            vec![Some("a"), None].into_binds()
        );
    }
}
