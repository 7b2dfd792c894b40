//! Composable sql conditions.
//!
//! Every factory returns a [`Condition`] that renders into a [`Buffer`] for a given
//! [`Dialect`], producing sql text and the values bound to its placeholders.
//!
//! ```
//! use qcond::{Builder, Postgres, and, eq, like};
//!
//! let cond = and([eq("id", [1, 2, 3]), like("name", "foo%")]);
//! let (sql, values) = cond.to_sql(&Postgres).unwrap();
//! assert_eq!("(\"id\" IN $1) AND (\"name\" LIKE $2)", sql);
//! assert_eq!(2, values.len());
//! ```

mod bind;
mod builder;
mod dialect;
mod error;
pub mod expr;
mod ident;
mod operator;
mod value;
mod writer;

pub use bind::{Bind, IntoBind, IntoBinds};
pub use builder::{BuildFn, Builder, build_fn};
pub use dialect::{Dialect, MySql, Postgres, Sqlite};
pub use error::{Error, Result};
pub use expr::{Condition, ConditionKind, and, eq, like, neq, not_like, or, raw};
pub use ident::{Ident, IntoIdent};
pub use operator::{Operator, gt, gte, lt, lte};
pub use value::{IntoValue, Value};
pub use writer::{Buffer, SqlBuffer};
