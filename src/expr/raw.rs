use smol_str::SmolStr;

use crate::{
    bind::Bind,
    builder::Builder,
    dialect::Dialect,
    error::{Error, Result},
    writer::{Buffer, write_bind},
};

/// A trusted sql fragment where every `?` takes the next value.
#[derive(Debug, Clone)]
pub struct RawCondition {
    pub(crate) sql: SmolStr,
    pub(crate) values: Vec<Bind>,
}

impl RawCondition {
    pub fn sql(&self) -> &str {
        self.sql.as_str()
    }

    pub fn values(&self) -> &[Bind] {
        &self.values
    }
}

impl Builder for RawCondition {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()> {
        let sql = self.sql.as_str();
        let mut values = self.values.iter();
        let mut placeholders = 0;

        // quote char of the literal or identifier we are in
        let mut quoted: Option<char> = None;
        let mut span_start = 0;

        let mut chars = sql.char_indices().peekable();
        while let Some((index, char)) = chars.next() {
            if let Some(quote) = quoted {
                if char == quote {
                    if let Some(&(_, next)) = chars.peek() {
                        if next == quote {
                            // doubled, still quoted
                            chars.next();
                            continue;
                        }
                    }
                    quoted = None;
                }
                continue;
            }

            match char {
                '\'' | '"' | '`' => quoted = Some(char),
                '?' => match chars.peek() {
                    // jsonb operators
                    Some(&(_, '?')) => {
                        chars.next();
                    }
                    Some(&(_, '|' | '&')) => {}
                    _ => {
                        buf.write_str(&sql[span_start..index])?;
                        placeholders += 1;
                        if let Some(value) = values.next() {
                            write_bind(dialect, buf, value.clone())?;
                        }
                        span_start = index + char.len_utf8();
                    }
                },
                _ => {}
            }
        }

        if span_start < sql.len() {
            buf.write_str(&sql[span_start..])?;
        }

        if placeholders != self.values.len() {
            tracing::debug!(
                sql,
                placeholders,
                values = self.values.len(),
                "raw sql placeholder mismatch"
            );
            return Err(Error::PlaceholderMismatch {
                placeholders,
                values: self.values.len(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        and,
        dialect::{MySql, Postgres},
        eq, raw,
        tests::render,
    };

    use super::*;

    #[test]
    fn test_raw_str() {
        let (sql, values) = render(&raw("'te?st'", ()), &Postgres);
        assert_eq!("'te?st'", sql);
        assert!(values.is_empty());
    }

    #[test]
    fn test_raw_double_quote() {
        let (sql, _) = render(&raw("'te''? st'", ()), &Postgres);
        assert_eq!("'te''? st'", sql);
    }

    #[test]
    fn test_raw_bind() {
        let (sql, values) = render(&raw("'test' = ?", "test"), &Postgres);
        assert_eq!("'test' = $1", sql);
        assert_eq!(vec![Bind::Text("test".into())], values);
    }

    #[test]
    fn test_raw_adjacent_binds() {
        let (sql, values) = render(&raw("point(?,?)", [1, 2]), &Postgres);
        assert_eq!("point($1,$2)", sql);
        assert_eq!(vec![Bind::I32(1), Bind::I32(2)], values);
    }

    #[test]
    fn test_raw_ident() {
        let (sql, _) = render(&raw("\"te? ? \"\"st\" = ?", 1), &Postgres);
        assert_eq!("\"te? ? \"\"st\" = $1", sql);
        let (sql, _) = render(&raw("`a?` = ?", 1), &MySql);
        assert_eq!("`a?` = ?", sql);
    }

    #[test]
    fn test_placeholder_double() {
        let (sql, _) = render(&raw("data ?? 'key'", ()), &Postgres);
        assert_eq!("data ?? 'key'", sql);
        let (sql, _) = render(&raw("data ?| array['a'] and data ?& array['b']", ()), &Postgres);
        assert_eq!("data ?| array['a'] and data ?& array['b']", sql);
    }

    #[test]
    fn test_raw_continues_numbering_inside_groups() {
        let cond = and([eq("a", 1), raw("b + ? > ?", [2, 3])]);
        let (sql, values) = render(&cond, &Postgres);
        assert_eq!("(\"a\" = $1) AND (b + $2 > $3)", sql);
        assert_eq!(3, values.len());
    }

    #[test]
    fn test_raw_mismatch() {
        assert_eq!(
            Err(Error::PlaceholderMismatch {
                placeholders: 2,
                values: 1
            }),
            raw("a = ? and b = ?", 1).to_sql(&Postgres)
        );
        assert_eq!(
            Err(Error::PlaceholderMismatch {
                placeholders: 0,
                values: 1
            }),
            raw("a = 1", 1).to_sql(&Postgres)
        );
    }
}
