mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `ErrorKind` trait from `drill_error` for the given struct.
///
/// The report is described with the `error` attribute:
/// ```ignore
/// use drill_attrs::ErrorKind;
/// use drill_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add something here"])]
/// pub struct UnexpectedEof;
/// ```
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the report.                              |
/// | `labels`    | An array of label texts, one for each span of the error, in order.           |
/// | `help`      | Optional help text describing what the user can do to fix the error.         |
///
/// Each tag accepts an expression. For structs with named fields, the fields are in scope (as
/// references) while the expressions are evaluated. Tuple structs are not supported.
///
/// The deriving crate must depend on `ariadne` and `drill_error`, and have the `ErrorKind` trait
/// in scope.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    match ErrorKindTarget::from_input(input) {
        Ok(target) => target.into_token_stream().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
