use std::{fmt, sync::Arc};

use smol_str::SmolStr;

use crate::{
    bind::IntoBinds,
    builder::Builder,
    dialect::Dialect,
    error::Result,
    ident::IntoIdent,
    operator::Operator,
    value::IntoValue,
    writer::Buffer,
};

pub mod binary;
pub mod cond;
pub mod equality;
pub mod r#in;
pub mod like;
pub mod raw;
pub mod unary;

pub use binary::BinaryCondition;
pub use cond::{Conjunction, GroupCondition, and, or};
pub use equality::EqualityCondition;
pub use like::LikeCondition;
pub use raw::RawCondition;

/// A user supplied builder embedded in a condition tree.
#[derive(Clone)]
pub struct CustomCondition(Arc<dyn Builder + Send + Sync>);

impl fmt::Debug for CustomCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomCondition").finish_non_exhaustive()
    }
}

impl Builder for CustomCondition {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()> {
        self.0.build(dialect, buf)
    }
}

#[derive(Debug, Clone)]
pub enum ConditionKind {
    Equality(EqualityCondition),
    Binary(BinaryCondition),
    Like(LikeCondition),
    Group(GroupCondition),
    Raw(RawCondition),
    Custom(CustomCondition),
}

impl Builder for ConditionKind {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()> {
        match self {
            ConditionKind::Equality(equality) => equality.build(dialect, buf),
            ConditionKind::Binary(binary) => binary.build(dialect, buf),
            ConditionKind::Like(like) => like.build(dialect, buf),
            ConditionKind::Group(group) => group.build(dialect, buf),
            ConditionKind::Raw(raw) => raw.build(dialect, buf),
            ConditionKind::Custom(custom) => custom.build(dialect, buf),
        }
    }
}

/// An immutable node of a condition tree, returned by every factory function.
#[derive(Debug, Clone)]
pub struct Condition {
    kind: ConditionKind,
}

impl Condition {
    pub fn new(kind: ConditionKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &ConditionKind {
        &self.kind
    }

    pub fn into_kind(self) -> ConditionKind {
        self.kind
    }

    pub fn custom<B>(builder: B) -> Self
    where
        B: Builder + Send + Sync + 'static,
    {
        Self::new(ConditionKind::Custom(CustomCondition(Arc::new(builder))))
    }

    pub(crate) fn binary<C, V>(column: C, operator: Operator, value: V) -> Self
    where
        C: IntoIdent,
        V: IntoValue,
    {
        Self::new(ConditionKind::Binary(BinaryCondition {
            column: column.into_ident(),
            operator,
            value: value.into_value().into_bind(),
        }))
    }

    fn equality<C, V>(column: C, negated: bool, value: V) -> Self
    where
        C: IntoIdent,
        V: IntoValue,
    {
        Self::new(ConditionKind::Equality(EqualityCondition {
            column: column.into_ident(),
            negated,
            value: value.into_value(),
        }))
    }

    fn like<C, V>(column: C, negated: bool, value: V) -> Self
    where
        C: IntoIdent,
        V: IntoValue,
    {
        Self::new(ConditionKind::Like(LikeCondition {
            column: column.into_ident(),
            negated,
            value: value.into_value(),
        }))
    }
}

impl Builder for Condition {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()> {
        self.kind.build(dialect, buf)
    }
}

impl From<ConditionKind> for Condition {
    fn from(kind: ConditionKind) -> Self {
        Self::new(kind)
    }
}

/// `=`.
/// A null value renders `IS NULL`, a sequence renders `IN` with the whole sequence
/// bound once, and an empty sequence renders the dialect's false literal.
pub fn eq<C, V>(column: C, value: V) -> Condition
where
    C: IntoIdent,
    V: IntoValue,
{
    Condition::equality(column, false, value)
}

/// `!=`.
/// A null value renders `IS NOT NULL`, a sequence renders `NOT IN`, and an empty
/// sequence renders the dialect's true literal.
pub fn neq<C, V>(column: C, value: V) -> Condition
where
    C: IntoIdent,
    V: IntoValue,
{
    Condition::equality(column, true, value)
}

/// `LIKE`. Fails at render time when the value is not text, bytes or characters.
pub fn like<C, V>(column: C, value: V) -> Condition
where
    C: IntoIdent,
    V: IntoValue,
{
    Condition::like(column, false, value)
}

/// `NOT LIKE`. Same operand rules as [`like`].
pub fn not_like<C, V>(column: C, value: V) -> Condition
where
    C: IntoIdent,
    V: IntoValue,
{
    Condition::like(column, true, value)
}

/// A trusted sql fragment. Each `?` outside quotes is replaced by the dialect
/// placeholder and takes the next value.
pub fn raw<S, B>(sql: S, values: B) -> Condition
where
    S: Into<SmolStr>,
    B: IntoBinds,
{
    Condition::new(ConditionKind::Raw(RawCondition {
        sql: sql.into(),
        values: values.into_binds(),
    }))
}

#[cfg(test)]
mod tests {
    use std::thread;

    use crate::{
        bind::Bind,
        dialect::{MySql, Postgres, Sqlite},
        gt, lte,
        tests::render,
    };

    use super::*;

    fn sample() -> Condition {
        and([
            eq("status", ["active", "pending"]),
            or([neq("deleted_at", None::<i64>), gt("age", 18)]),
            like("email", "%@example.com"),
            lte("score", 9.5),
        ])
    }

    #[test]
    fn test_tree() {
        let (sql, values) = render(&sample(), &Postgres);
        assert_eq!(
            concat!(
                "(\"status\" IN $1) AND ((\"deleted_at\" IS NOT NULL) OR (\"age\" > $2)) ",
                "AND (\"email\" LIKE $3) AND (\"score\" <= $4)",
            ),
            sql
        );
        assert_eq!(
            vec![
                Bind::Array(vec![Bind::Text("active".into()), Bind::Text("pending".into())]),
                Bind::I32(18),
                Bind::Text("%@example.com".into()),
                Bind::F64(9.5),
            ],
            values
        );
    }

    #[test]
    fn test_placeholders_match_values() {
        let dialects: [&dyn Dialect; 3] = [&Postgres, &MySql, &Sqlite];
        for dialect in dialects {
            let (sql, values) = render(&sample(), dialect);
            let placeholders = if dialect.placeholder(1).as_str() == "?" {
                sql.matches('?').count()
            } else {
                sql.matches('$').count()
            };
            assert_eq!(values.len(), placeholders);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let cond = sample();
        assert_eq!(render(&cond, &MySql), render(&cond, &MySql));
        assert_eq!(render(&cond, &Postgres), render(&cond.clone(), &Postgres));
    }

    #[test]
    fn test_shared_across_threads() {
        let cond = Arc::new(sample());
        let expected = render(&*cond, &Postgres);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cond = Arc::clone(&cond);
                thread::spawn(move || cond.to_sql(&Postgres))
            })
            .collect();
        for handle in handles {
            assert_eq!(Ok(expected.clone()), handle.join().unwrap());
        }
    }

    #[test]
    fn test_kind_accessors() {
        let cond = gt("age", 18);
        let ConditionKind::Binary(binary) = cond.kind() else {
            panic!("expected a binary condition");
        };
        assert_eq!("age", binary.column().as_str());
        assert_eq!(Operator::Gt, binary.operator());
        assert_eq!(&Bind::I32(18), binary.value());

        let ConditionKind::Equality(equality) = neq("id", 1).into_kind() else {
            panic!("expected an equality condition");
        };
        assert!(equality.is_negated());
    }
}
