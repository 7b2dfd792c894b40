#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Null,
    NotNull,
}

impl UnaryOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Null => "IS NULL",
            UnaryOperator::NotNull => "IS NOT NULL",
        }
    }
}
