mod request;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Command)] / #[derive(Query)]
// ============================================================================

/// Derive macro marking a struct as a command request.
///
/// Implements `mediated_rust::Request` with `KIND = RequestKind::Command`.
/// The response type is taken from a struct-level `#[response(T)]` attribute
/// and defaults to `()` when the command has nothing meaningful to return.
///
/// # Usage
///
/// Command with a response:
/// ```ignore
/// #[derive(Command)]
/// #[response(UserId)]
/// struct CreateUser {
///     name: String,
/// }
/// ```
///
/// Command with the unit response:
/// ```ignore
/// #[derive(Command)]
/// struct DeactivateUser {
///     id: UserId,
/// }
/// ```
#[proc_macro_derive(Command, attributes(response))]
pub fn derive_command(input: TokenStream) -> TokenStream {
    request::derive_request(input, request::Kind::Command)
}

/// Derive macro marking a struct as a query request.
///
/// Implements `mediated_rust::Request` with `KIND = RequestKind::Query`.
/// The response type is taken from a struct-level `#[response(T)]` attribute
/// and defaults to `()` (a query without one is rarely useful, but allowed).
///
/// # Usage
///
/// ```ignore
/// #[derive(Query)]
/// #[response(Option<User>)]
/// struct GetUser {
///     id: UserId,
/// }
/// ```
#[proc_macro_derive(Query, attributes(response))]
pub fn derive_query(input: TokenStream) -> TokenStream {
    request::derive_request(input, request::Kind::Query)
}
