use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// `Set(self)` for column value types such as `Role` and `StringList`, so
/// they can be passed straight to sea-orm's `ActiveModel` builders.
pub(crate) fn derive_into_active_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::sea_orm::IntoActiveValue<#ident #ty_generics>
            for #ident #ty_generics #where_clause
        {
            #[inline]
            fn into_active_value(self) -> ::sea_orm::ActiveValue<Self> {
                ::sea_orm::ActiveValue::Set(self)
            }
        }
    }
    .into()
}
