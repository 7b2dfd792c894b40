use proc_macro::TokenStream;

mod binary;

/// Generates one free factory function per unit variant of an operator enum.
///
/// `Gte` becomes `pub fn gte(column, value) -> crate::Condition`. Variants marked
/// `#[binary(ignore)]` are skipped.
#[proc_macro_derive(BinaryOperator, attributes(binary))]
pub fn operator_functions(input: TokenStream) -> TokenStream {
    binary::operator_functions_impl(input)
}
