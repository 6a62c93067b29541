//! Derive macros for locator-rs. Use `#[derive(Constructible)]` so you don't need to spell out `impl Constructible for T`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, LitStr};

fn snake_case(s: &str) -> String {
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Implements `locator_rs::Constructible`. Name is derived from the type (e.g. `HttpClient` → `http_client`).
#[proc_macro_derive(Constructible)]
pub fn derive_constructible(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let object_name = LitStr::new(&snake_case(&name.to_string()), name.span());
    let expanded: proc_macro2::TokenStream = quote! {
        impl #impl_generics ::locator_rs::Constructible for #name #ty_generics #where_clause {
            fn object_name() -> &'static str {
                #object_name
            }
        }
    };
    TokenStream::from(expanded)
}
