use crate::{builder::Builder, dialect::Dialect, error::Result, writer::Buffer};

use super::{Condition, ConditionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }
}

/// Children joined by a conjunction, each one wrapped in parentheses.
#[derive(Debug, Clone)]
pub struct GroupCondition {
    pub(crate) conjunction: Conjunction,
    pub(crate) conditions: Vec<Condition>,
}

impl GroupCondition {
    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

impl Builder for GroupCondition {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()> {
        for (index, condition) in self.conditions.iter().enumerate() {
            if index > 0 {
                buf.write_char(' ')?;
                buf.write_str(self.conjunction.as_str())?;
                buf.write_char(' ')?;
            }
            buf.write_char('(')?;
            if let Err(err) = condition.build(dialect, buf) {
                tracing::trace!(index, conjunction = self.conjunction.as_str(), "condition failed");
                return Err(err);
            }
            buf.write_char(')')?;
        }
        Ok(())
    }
}

fn group<I>(conjunction: Conjunction, conditions: I) -> Condition
where
    I: IntoIterator<Item = Condition>,
{
    Condition::new(ConditionKind::Group(GroupCondition {
        conjunction,
        conditions: conditions.into_iter().collect(),
    }))
}

/// `(a) AND (b) AND ...`. No conditions render to nothing.
pub fn and<I>(conditions: I) -> Condition
where
    I: IntoIterator<Item = Condition>,
{
    group(Conjunction::And, conditions)
}

/// `(a) OR (b) OR ...`. No conditions render to nothing.
pub fn or<I>(conditions: I) -> Condition
where
    I: IntoIterator<Item = Condition>,
{
    group(Conjunction::Or, conditions)
}

#[cfg(test)]
mod tests {
    use std::{
        fmt,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use crate::{
        bind::Bind,
        build_fn,
        dialect::{MySql, Postgres},
        eq,
        error::Error,
        gt, like,
        tests::render,
    };

    use super::*;

    #[test]
    fn test_and() {
        let cond = and([eq("a", 1), eq("b", 2)]);
        let (sql, values) = render(&cond, &MySql);
        assert_eq!("(`a` = ?) AND (`b` = ?)", sql);
        assert_eq!(vec![Bind::I32(1), Bind::I32(2)], values);
    }

    #[test]
    fn test_or_numbers_placeholders_in_order() {
        let cond = or([eq("a", 1), gt("b", 2), eq("c", 3)]);
        let (sql, values) = render(&cond, &Postgres);
        assert_eq!("(\"a\" = $1) OR (\"b\" > $2) OR (\"c\" = $3)", sql);
        assert_eq!(vec![Bind::I32(1), Bind::I32(2), Bind::I32(3)], values);
    }

    #[test]
    fn test_nested() {
        let cond = and([eq("a", 1), or([eq("b", 2), eq("c", None::<i32>)])]);
        let (sql, values) = render(&cond, &Postgres);
        assert_eq!("(\"a\" = $1) AND ((\"b\" = $2) OR (\"c\" IS NULL))", sql);
        assert_eq!(vec![Bind::I32(1), Bind::I32(2)], values);
    }

    #[test]
    fn test_single_child() {
        let (sql, _) = render(&and([eq("a", 1)]), &Postgres);
        assert_eq!("(\"a\" = $1)", sql);
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!((String::new(), Vec::new()), render(&or([]), &Postgres));
        assert_eq!((String::new(), Vec::new()), render(&and(Vec::new()), &MySql));
    }

    #[test]
    fn test_error_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let sibling = Condition::custom(build_fn(move |_, buf| {
            counter.fetch_add(1, Ordering::SeqCst);
            buf.write_str("1 = 1")?;
            Ok(())
        }));

        let cond = and([eq("a", 1), like("b", 42), sibling.clone()]);
        assert_eq!(Err(Error::ColumnNotSpecified), cond.to_sql(&Postgres));
        assert_eq!(0, calls.load(Ordering::SeqCst));

        let cond = and([sibling, like("b", 42)]);
        assert_eq!(Err(Error::ColumnNotSpecified), cond.to_sql(&Postgres));
        assert_eq!(1, calls.load(Ordering::SeqCst));
    }

    #[test]
    fn test_partial_text_is_left_on_error() {
        let mut buf = crate::SqlBuffer::new();
        let cond = or([eq("a", 1), like("b", None::<&str>)]);
        assert_eq!(Err(Error::ColumnNotSpecified), cond.build(&Postgres, &mut buf));
        assert_eq!("(\"a\" = $1) OR (", buf.sql());
    }

    #[test]
    fn test_group_accessors() {
        let cond = or([eq("a", 1), eq("b", 2)]);
        let ConditionKind::Group(group) = cond.kind() else {
            panic!("expected a group");
        };
        assert_eq!(Conjunction::Or, group.conjunction());
        assert_eq!(2, group.conditions().len());
    }

    /// Refuses to write one given piece of text.
    #[derive(Default)]
    struct RefusingBuffer {
        sql: String,
        values: Vec<Bind>,
    }

    impl fmt::Write for RefusingBuffer {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if s == "refused" {
                return Err(fmt::Error);
            }
            self.sql.push_str(s);
            Ok(())
        }
    }

    impl Buffer for RefusingBuffer {
        fn write_value(&mut self, value: Bind) {
            self.values.push(value);
        }

        fn value_count(&self) -> usize {
            self.values.len()
        }
    }

    #[test]
    fn test_buffer_error_is_returned_unchanged() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let sibling = Condition::custom(build_fn(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }));
        let refused = Condition::custom(build_fn(|_, buf| {
            buf.write_str("refused")?;
            Ok(())
        }));

        for cond in [
            and([eq("a", 1), refused.clone(), sibling.clone()]),
            or([refused.clone(), sibling.clone()]),
            and([or([eq("b", 2), refused.clone()]), sibling.clone()]),
        ] {
            let mut buf = RefusingBuffer::default();
            assert_eq!(
                Err(Error::Format(fmt::Error)),
                cond.build(&Postgres, &mut buf)
            );
        }
        assert_eq!(0, calls.load(Ordering::SeqCst));
    }
}
