use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Type};

pub enum Kind {
    Command,
    Query,
}

pub fn derive_request(input: TokenStream, kind: Kind) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    // Extract #[response(T)] from struct-level attributes, defaulting to ()
    let response = extract_response(&input);

    let kind = match kind {
        Kind::Command => quote! { mediated_rust::RequestKind::Command },
        Kind::Query => quote! { mediated_rust::RequestKind::Query },
    };

    let expanded = quote! {
        impl mediated_rust::Request for #name {
            type Response = #response;
            const KIND: mediated_rust::RequestKind = #kind;
        }
    };

    TokenStream::from(expanded)
}

fn extract_response(input: &DeriveInput) -> proc_macro2::TokenStream {
    for attr in &input.attrs {
        if !attr.path().is_ident("response") {
            continue;
        }

        match attr.parse_args::<Type>() {
            Ok(ty) => return quote! { #ty },
            Err(_) => panic!("response attribute expects a type, e.g. #[response(UserId)]"),
        }
    }

    // Default: the unit response
    quote! { () }
}
