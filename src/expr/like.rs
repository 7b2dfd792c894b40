use crate::{
    bind::Bind,
    builder::Builder,
    dialect::Dialect,
    error::{Error, Result},
    ident::Ident,
    operator::Operator,
    value::Value,
    writer::{Buffer, write_comparison},
};

/// `LIKE` / `NOT LIKE` against a textual operand.
///
/// Text is bound as is, binary data is passed through untouched and character codes
/// are packed into a single text value. Anything else, null and empty byte or
/// character sequences included, fails with [`Error::ColumnNotSpecified`].
#[derive(Debug, Clone)]
pub struct LikeCondition {
    pub(crate) column: Ident,
    pub(crate) negated: bool,
    pub(crate) value: Value,
}

impl LikeCondition {
    pub fn column(&self) -> &Ident {
        &self.column
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    fn pattern(&self) -> Result<Bind> {
        match &self.value {
            Value::Text(text) => Ok(Bind::Text(text.clone())),
            Value::Binary(bytes) if !bytes.is_empty() => Ok(Bind::Bytes(bytes.clone())),
            Value::Chars(chars) if !chars.is_empty() => {
                Ok(Bind::Text(chars.iter().collect::<String>().into()))
            }
            value => {
                tracing::debug!(
                    column = %self.column,
                    kind = value.kind(),
                    "like operand is not textual"
                );
                Err(Error::ColumnNotSpecified)
            }
        }
    }
}

impl Builder for LikeCondition {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()> {
        let pattern = self.pattern()?;
        let operator = if self.negated {
            Operator::NotLike
        } else {
            Operator::Like
        };
        write_comparison(dialect, buf, &self.column, operator.as_str(), pattern)
    }
}
