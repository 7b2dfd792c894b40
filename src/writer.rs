use std::fmt;

use crate::{bind::Bind, dialect::Dialect, error::Result, ident::Ident};

/// Sink for one render pass: sql text plus the values bound to its placeholders.
///
/// The number of placeholders written to the text must always match
/// [`Buffer::value_count`], in the same order.
pub trait Buffer: fmt::Write {
    fn write_value(&mut self, value: Bind);

    fn value_count(&self) -> usize;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SqlBuffer {
    sql: String,
    values: Vec<Bind>,
}

impl SqlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sql: String::with_capacity(capacity),
            values: Vec::new(),
        }
    }

    pub fn sql(&self) -> &str {
        self.sql.as_str()
    }

    pub fn values(&self) -> &[Bind] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty() && self.values.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<Bind>) {
        (self.sql, self.values)
    }
}

impl fmt::Write for SqlBuffer {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sql.push_str(s);
        Ok(())
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        self.sql.push(c);
        Ok(())
    }
}

impl Buffer for SqlBuffer {
    fn write_value(&mut self, value: Bind) {
        self.values.push(value);
    }

    fn value_count(&self) -> usize {
        self.values.len()
    }
}

pub(crate) fn write_ident(
    dialect: &dyn Dialect,
    buf: &mut dyn Buffer,
    ident: &Ident,
) -> Result<()> {
    buf.write_str(&dialect.quote_ident(ident.as_str()))?;
    Ok(())
}

/// Write the next placeholder and record its value in one step.
pub(crate) fn write_bind(dialect: &dyn Dialect, buf: &mut dyn Buffer, value: Bind) -> Result<()> {
    let placeholder = dialect.placeholder(buf.value_count() + 1);
    buf.write_str(&placeholder)?;
    buf.write_value(value);
    Ok(())
}

/// `<column> <operator> <placeholder>`
pub(crate) fn write_comparison(
    dialect: &dyn Dialect,
    buf: &mut dyn Buffer,
    column: &Ident,
    operator: &str,
    value: Bind,
) -> Result<()> {
    write_ident(dialect, buf, column)?;
    buf.write_char(' ')?;
    buf.write_str(operator)?;
    buf.write_char(' ')?;
    write_bind(dialect, buf, value)
}
