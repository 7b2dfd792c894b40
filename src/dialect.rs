use smol_str::{SmolStr, format_smolstr};

/// Lexical rules of one SQL variant.
///
/// Implementations are stateless, a single instance can be shared by every render.
pub trait Dialect: Send + Sync {
    fn quote_char(&self) -> char;

    /// Quote a column or `table.column` reference.
    ///
    /// Every dot separated part is wrapped in [`Dialect::quote_char`], a `*` part is
    /// left bare. Identifiers are trusted input and are not escaped.
    fn quote_ident(&self, name: &str) -> String {
        let quote = self.quote_char();
        let mut quoted = String::with_capacity(name.len() + 2);
        for (i, part) in name.split('.').enumerate() {
            if i > 0 {
                quoted.push('.');
            }
            if part == "*" {
                quoted.push('*');
                continue;
            }
            quoted.push(quote);
            quoted.push_str(part);
            quoted.push(quote);
        }
        quoted
    }

    fn encode_bool(&self, value: bool) -> &'static str;

    /// The placeholder token for the bound value at `index`, starting at 1.
    fn placeholder(&self, index: usize) -> SmolStr;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_char(&self) -> char {
        '"'
    }

    fn encode_bool(&self, value: bool) -> &'static str {
        if value { "TRUE" } else { "FALSE" }
    }

    fn placeholder(&self, index: usize) -> SmolStr {
        format_smolstr!("${}", index)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_char(&self) -> char {
        '`'
    }

    fn encode_bool(&self, value: bool) -> &'static str {
        if value { "1" } else { "0" }
    }

    fn placeholder(&self, _index: usize) -> SmolStr {
        SmolStr::new_static("?")
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_char(&self) -> char {
        '"'
    }

    fn encode_bool(&self, value: bool) -> &'static str {
        if value { "1" } else { "0" }
    }

    fn placeholder(&self, _index: usize) -> SmolStr {
        SmolStr::new_static("?")
    }
}

#[cfg(feature = "postgres")]
impl Dialect for sqlx::Postgres {
    fn quote_char(&self) -> char {
        Postgres.quote_char()
    }

    fn encode_bool(&self, value: bool) -> &'static str {
        Postgres.encode_bool(value)
    }

    fn placeholder(&self, index: usize) -> SmolStr {
        Postgres.placeholder(index)
    }
}

#[cfg(feature = "mysql")]
impl Dialect for sqlx::MySql {
    fn quote_char(&self) -> char {
        MySql.quote_char()
    }

    fn encode_bool(&self, value: bool) -> &'static str {
        MySql.encode_bool(value)
    }

    fn placeholder(&self, index: usize) -> SmolStr {
        MySql.placeholder(index)
    }
}

#[cfg(feature = "sqlite")]
impl Dialect for sqlx::Sqlite {
    fn quote_char(&self) -> char {
        Sqlite.quote_char()
    }

    fn encode_bool(&self, value: bool) -> &'static str {
        Sqlite.encode_bool(value)
    }

    fn placeholder(&self, index: usize) -> SmolStr {
        Sqlite.placeholder(index)
    }
}
