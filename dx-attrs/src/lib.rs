mod error_kind;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields. Tuple structs, enums,
/// and unions are rejected.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use dx_attrs::ErrorKind;
/// use dx_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add something here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | The text of the labels that point to each span of the error, in order.       |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression that should evaluate to a [`String`] (or, for `labels`, any
/// iterator of values that can be displayed). The struct is destructured before the expressions
/// are evaluated, so named fields can be referred to directly, by reference:
///
/// ```
/// use dx_attrs::ErrorKind;
/// use dx_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown function `{}`", name),
///     labels = ["this function"],
///     help = if *builtin { "this name is reserved" } else { "check the spelling" },
/// )]
/// pub struct Bar {
///     name: String,
///     builtin: bool,
/// }
/// ```
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error_kind::derive(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
