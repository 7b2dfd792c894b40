#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InOperator {
    In,
    NotIn,
}

impl InOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            InOperator::In => "IN",
            InOperator::NotIn => "NOT IN",
        }
    }
}
