use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, parse_quote};

use crate::config::MacroConfig;

pub struct MacroContext {
    pub config: MacroConfig,
    pub input: DeriveInput,
}

impl MacroContext {
    pub fn new(config: MacroConfig, input: DeriveInput) -> Self {
        Self { config, input }
    }

    pub fn ident(&self) -> &Ident {
        &self.input.ident
    }

    /// The input's generics with `FormField` required of every type parameter.
    pub fn bounded_generics(&self) -> Generics {
        let mut generics = self.input.generics.clone();
        let form_field = self.FormField();
        let params: Vec<Ident> = generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect();
        if !params.is_empty() {
            let where_clause = generics.make_where_clause();
            for param in params {
                where_clause
                    .predicates
                    .push(parse_quote!(#param: #form_field));
            }
        }
        generics
    }

    /// Applies container-level `rename_all` to a field name.
    pub fn apply_rename(&self, name: &str) -> Option<String> {
        self.config.rename_all.map(|rename_all| rename_all.apply(name))
    }

    #[allow(non_snake_case)]
    pub fn FormField(&self) -> TokenStream {
        let form_crate = &self.config.form_crate;
        quote!(#form_crate::FormField)
    }

    #[allow(non_snake_case)]
    pub fn FormRecord(&self) -> TokenStream {
        let form_crate = &self.config.form_crate;
        quote!(#form_crate::FormRecord)
    }

    #[allow(non_snake_case)]
    pub fn FieldDef(&self) -> TokenStream {
        let form_crate = &self.config.form_crate;
        quote!(#form_crate::FieldDef)
    }

    #[allow(non_snake_case)]
    pub fn FieldShape(&self) -> TokenStream {
        let form_crate = &self.config.form_crate;
        quote!(#form_crate::FieldShape)
    }

    #[allow(non_snake_case)]
    pub fn FieldSlot(&self) -> TokenStream {
        let form_crate = &self.config.form_crate;
        quote!(#form_crate::FieldSlot)
    }

    #[allow(non_snake_case)]
    pub fn FieldView(&self) -> TokenStream {
        let form_crate = &self.config.form_crate;
        quote!(#form_crate::FieldView)
    }
}
