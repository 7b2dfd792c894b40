use crate::{
    bind::Bind,
    builder::Builder,
    dialect::Dialect,
    error::Result,
    ident::Ident,
    operator::Operator,
    writer::{Buffer, write_comparison},
};

/// `<column> <operator> <placeholder>` with the value bound unconditionally.
#[derive(Debug, Clone)]
pub struct BinaryCondition {
    pub(crate) column: Ident,
    pub(crate) operator: Operator,
    pub(crate) value: Bind,
}

impl BinaryCondition {
    pub fn column(&self) -> &Ident {
        &self.column
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &Bind {
        &self.value
    }
}

impl Builder for BinaryCondition {
    fn build(&self, dialect: &dyn Dialect, buf: &mut dyn Buffer) -> Result<()> {
        write_comparison(
            dialect,
            buf,
            &self.column,
            self.operator.as_str(),
            self.value.clone(),
        )
    }
}
