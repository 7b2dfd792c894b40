use qcond_derive::BinaryOperator;

/// Comparison operators written between a column and its placeholder.
///
/// The ordering operators get a free factory function each (`gt`, `gte`, `lt`,
/// `lte`); the others have their own value policy and factories in [`crate::expr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinaryOperator)]
pub enum Operator {
    #[binary(ignore)]
    Eq,
    #[binary(ignore)]
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
    #[binary(ignore)]
    Like,
    #[binary(ignore)]
    NotLike,
}

impl Operator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
        }
    }
}
