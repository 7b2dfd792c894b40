use std::ops::Deref;

use crate::{
    bind::Bind,
    dialect::Dialect,
    error::Result,
    writer::{Buffer, SqlBuffer},
};

/// Anything that renders itself as a sql fragment with bound values.
///
/// Rendering only appends to the given buffer and gives the same output every time
/// it is called. After an error the buffer holds partial text and must be dropped.
pub trait Builder {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()>;

    /// Render into a fresh buffer.
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<(String, Vec<Bind>)> {
        let size_hint = 64;
        let mut buf = SqlBuffer::with_capacity(size_hint);
        self.build(dialect, &mut buf)?;
        let (sql, values) = buf.into_parts();
        tracing::trace!(sql = %sql, binds = values.len(), "rendered condition");
        Ok((sql, values))
    }
}

impl<D> Builder for D
where
    D: Deref,
    D::Target: Builder,
{
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()> {
        self.deref().build(dialect, buf)
    }
}

/// A builder backed by a closure.
#[derive(Clone, Copy)]
pub struct BuildFn<F>(F);

impl<F> std::fmt::Debug for BuildFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BuildFn")
    }
}

pub fn build_fn<F>(f: F) -> BuildFn<F>
where
    F: Fn(&dyn Dialect, &mut dyn Buffer) -> Result<()>,
{
    BuildFn(f)
}

impl<F> Builder for BuildFn<F>
where
    F: Fn(&dyn Dialect, &mut dyn Buffer) -> Result<()>,
{
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()> {
        (self.0)(dialect, buf)
    }
}
