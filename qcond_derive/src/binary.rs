use darling::{FromDeriveInput, FromVariant, ast};
use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(supports(enum_unit))]
struct BinaryDeriveInput {
    ident: syn::Ident,
    data: ast::Data<BinaryVariant, ()>,
}

#[derive(Debug, FromVariant)]
#[darling(attributes(binary))]
struct BinaryVariant {
    ident: syn::Ident,
    #[darling(default)]
    ignore: bool,
}

pub fn operator_functions_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_info = match BinaryDeriveInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    let enum_name = &enum_info.ident;

    // supports(enum_unit) already rejected structs
    let Some(variants) = enum_info.data.take_enum() else {
        return syn::Error::new_spanned(enum_name, "only enums are supported")
            .to_compile_error()
            .into();
    };

    let functions = variants.iter().filter_map(|var| {
        if var.ignore {
            return None;
        }

        let var_name = &var.ident;
        let snake = var_name.to_string().to_snake_case();
        let function = format_ident!("{}", snake);
        let doc = format!(
            "[`{enum_name}::{var_name}`] comparison, rendered as \
             `<column> <operator> <placeholder>`.\n\n\
             The value is bound as is: null and sequence values are not special-cased."
        );

        Some(quote! {
            #[doc = #doc]
            pub fn #function<C, V>(column: C, value: V) -> crate::Condition
            where
                C: crate::IntoIdent,
                V: crate::IntoValue,
            {
                crate::Condition::binary(column, #enum_name::#var_name, value)
            }
        })
    });

    quote! {
        #(#functions)*
    }
    .into()
}
