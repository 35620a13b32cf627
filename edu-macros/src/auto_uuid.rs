use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

const REQUIRED_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

pub(crate) fn auto_uuid(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(&input.ident, "AutoUuid requires named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(&input.ident, "AutoUuid can only be derived for structs")
                .to_compile_error()
                .into()
        }
    };

    for required in REQUIRED_FIELDS {
        let present = named
            .iter()
            .any(|f| f.ident.as_ref().is_some_and(|ident| ident == required));
        if !present {
            return syn::Error::new_spanned(
                &input.ident,
                format!("AutoUuid requires a `{required}` field"),
            )
            .to_compile_error()
            .into();
        }
    }

    let expanded = quote! {
        #[async_trait::async_trait]
        impl sea_orm::ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, sea_orm::DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                let now = chrono::Utc::now();
                if insert {
                    if self.id.is_not_set() {
                        self.id = sea_orm::ActiveValue::Set(uuid::Uuid::new_v4().to_string());
                    }
                    self.created_at = sea_orm::ActiveValue::Set(Some(now));
                }
                self.updated_at = sea_orm::ActiveValue::Set(Some(now));
                Ok(self)
            }
        }
    };

    TokenStream::from(expanded)
}
