use darling::FromDeriveInput;
use syn::parse_macro_input;

use crate::{attrs::ContainerAttrs, config::MacroConfig, context::MacroContext};

mod attrs;
pub(crate) mod config;
pub(crate) mod context;
mod form_record;

/// Derives `FormRecord` and `FormField` for a struct with named fields.
///
/// Container attributes:
/// - `#[form(crate = path)]` points the generated code at a re-export of `formbind`.
/// - `#[form(rename_all = "...")]` renames every field, using serde's case names.
///
/// Field attributes:
/// - `#[form(rename = "...")]` matches keys against this name instead.
/// - `#[form(flatten)]` merges the fields of a nested record into this one.
/// - `#[form(skip)]` leaves the field out of decoding and encoding.
#[proc_macro_derive(FormRecord, attributes(form))]
pub fn form_record_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    match create_context(input) {
        Ok(context) => form_record::derive(context).into(),
        Err(err) => err.write_errors().into(),
    }
}

fn create_context(input: syn::DeriveInput) -> darling::Result<MacroContext> {
    let attrs = ContainerAttrs::from_derive_input(&input)?;
    Ok(MacroContext::new(MacroConfig::from_attrs(attrs), input))
}
