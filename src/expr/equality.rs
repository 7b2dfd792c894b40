use crate::{
    bind::Bind,
    builder::Builder,
    dialect::Dialect,
    error::Result,
    ident::Ident,
    operator::Operator,
    value::{Value, chars_to_binds},
    writer::{Buffer, write_comparison, write_ident},
};

use super::{r#in::InOperator, unary::UnaryOperator};

/// `=` or `!=`, switching to `IS [NOT] NULL` and `[NOT] IN` from the value shape.
#[derive(Debug, Clone)]
pub struct EqualityCondition {
    pub(crate) column: Ident,
    pub(crate) negated: bool,
    pub(crate) value: Value,
}

impl EqualityCondition {
    pub fn column(&self) -> &Ident {
        &self.column
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    fn null_operator(&self) -> UnaryOperator {
        if self.negated {
            UnaryOperator::NotNull
        } else {
            UnaryOperator::Null
        }
    }

    fn in_operator(&self) -> InOperator {
        if self.negated {
            InOperator::NotIn
        } else {
            InOperator::In
        }
    }

    fn operator(&self) -> Operator {
        if self.negated {
            Operator::NotEq
        } else {
            Operator::Eq
        }
    }

    /// `IN` nothing is always false, `NOT IN` nothing always true.
    fn write_empty(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()> {
        buf.write_str(dialect.encode_bool(self.negated))?;
        Ok(())
    }

    fn write_in(
        &self,
        dialect: &dyn Dialect,
        buf: &mut dyn Buffer,
        binds: Vec<Bind>,
    ) -> Result<()> {
        write_comparison(
            dialect,
            buf,
            &self.column,
            self.in_operator().as_str(),
            Bind::Array(binds),
        )
    }
}

impl Builder for EqualityCondition {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()> {
        match &self.value {
            Value::Null => {
                write_ident(dialect, buf, &self.column)?;
                buf.write_char(' ')?;
                buf.write_str(self.null_operator().as_str())?;
                Ok(())
            }
            Value::Sequence(binds) if binds.is_empty() => self.write_empty(dialect, buf),
            Value::Chars(chars) if chars.is_empty() => self.write_empty(dialect, buf),
            Value::Sequence(binds) => self.write_in(dialect, buf, binds.clone()),
            Value::Chars(chars) => self.write_in(dialect, buf, chars_to_binds(chars)),
            value => write_comparison(
                dialect,
                buf,
                &self.column,
                self.operator().as_str(),
                value.clone().into_bind(),
            ),
        }
    }
}
