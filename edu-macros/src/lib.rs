mod active_value;
mod auto_uuid;

use proc_macro::TokenStream;

/// Derives IntoActiveValue trait implementation for enums
///
/// This macro automatically implements the IntoActiveValue trait for enums
/// that are used with sea-orm.
#[proc_macro_derive(IntoActiveValue)]
pub fn derive_into_active_value(input: TokenStream) -> TokenStream {
    active_value::derive_into_active_value(input)
}

/// Implements `ActiveModelBehavior` for a sea-orm entity module.
///
/// On insert an unset `id` receives a fresh UUID v4 string and `created_at`
/// is stamped. `updated_at` is stamped on every save. The entity must declare
/// `id: String`, `created_at: Option<DateTimeUtc>` and `updated_at: Option<DateTimeUtc>`.
#[proc_macro_derive(AutoUuid)]
pub fn auto_uuid(input: TokenStream) -> TokenStream {
    auto_uuid::auto_uuid(input)
}
