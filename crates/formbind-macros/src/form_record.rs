
use darling::FromField as _;
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::ext::IdentExt as _;
use syn::spanned::Spanned as _;
use syn::{Data, DataStruct, Field, Fields};

use crate::attrs::FieldAttrs;
use crate::context::MacroContext;

pub fn derive(context: MacroContext) -> TokenStream {
    derive_inner(&context).unwrap_or_else(syn::Error::into_compile_error)
}

fn derive_inner(context: &MacroContext) -> syn::Result<TokenStream> {
    match &context.input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => generate_form_record(context, fields.named.iter()),
        _ => Err(syn::Error::new_spanned(
            context.ident(),
            "FormRecord can only be derived for structs with named fields",
        )),
    }
}

struct RecordField<'a> {
    field: &'a Field,
    attrs: FieldAttrs,
}

fn generate_form_record<'a>(
    context: &MacroContext,
    fields: impl Iterator<Item = &'a Field>,
) -> syn::Result<TokenStream> {
    let mut record_fields = Vec::new();
    for field in fields {
        let attrs = FieldAttrs::from_field(field)
            .map_err(|err| syn::Error::new(field.span(), err.to_string()))?;
        if attrs.skip {
            if attrs.flatten || attrs.rename.is_some() {
                return Err(syn::Error::new_spanned(
                    &field.ident,
                    "`skip` cannot be combined with `flatten` or `rename`",
                ));
            }
            continue;
        }
        record_fields.push(RecordField { field, attrs });
    }

    let ident = context.ident();
    let generics = context.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let form_record = context.FormRecord();
    let form_field = context.FormField();
    let field_def = context.FieldDef();
    let field_shape = context.FieldShape();
    let field_slot = context.FieldSlot();
    let field_view = context.FieldView();

    let mut defs = Vec::new();
    let mut refs = Vec::new();
    let mut muts = Vec::new();
    for (index, RecordField { field, attrs }) in record_fields.iter().enumerate() {
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let ty = &field.ty;
        let name = field_ident.unraw().to_string();
        let rename = match attrs.rename.clone().or_else(|| context.apply_rename(&name)) {
            Some(rename) => quote! { ::core::option::Option::Some(#rename) },
            None => quote! { ::core::option::Option::None },
        };
        let flatten = attrs.flatten;
        let index = Literal::usize_unsuffixed(index);

        defs.push(quote! {
            #field_def {
                name: #name,
                rename: #rename,
                flatten: #flatten,
                shape: <#ty as #form_field>::shape,
            }
        });
        refs.push(quote! { #index => ::core::option::Option::Some(&self.#field_ident) });
        muts.push(quote! { #index => ::core::option::Option::Some(&mut self.#field_ident) });
    }

    Ok(quote! {
        impl #impl_generics #form_record for #ident #ty_generics #where_clause {
            fn fields() -> &'static [#field_def] {
                const { &[#(#defs),*] }
            }

            fn field(&self, index: usize) -> ::core::option::Option<&dyn #form_field> {
                match index {
                    #(#refs,)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #form_field> {
                match index {
                    #(#muts,)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics #form_field for #ident #ty_generics #where_clause {
            fn slot(&mut self) -> #field_slot<'_> {
                #field_slot::Record(self)
            }

            fn view(&self) -> #field_view<'_> {
                #field_view::Record(self)
            }

            fn shape() -> #field_shape {
                #field_shape::Record(<Self as #form_record>::fields())
            }
        }
    })
}
