use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{spanned::Spanned, Attribute, Data, DeriveInput, Expr, Fields, Ident, Result};

/// The tags that can be given to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Reads the tags of the first `#[error(...)]` attribute in the list, if there is one.
    fn from_attributes(attributes: &[Attribute]) -> Result<Self> {
        let mut args = Self::default();
        let Some(attr) = attributes.iter().find(|attr| attr.path().is_ident("error")) else {
            return Ok(args);
        };

        attr.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("message") {
                &mut args.message
            } else if meta.path.is_ident("labels") {
                &mut args.labels
            } else if meta.path.is_ident("help") {
                &mut args.help
            } else {
                return Err(meta.error("unknown tag, expected `message`, `labels`, or `help`"));
            };
            *slot = Some(meta.value()?.parse()?);
            Ok(())
        })?;

        Ok(args)
    }
}

/// The struct to derive [`ErrorKind`] for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub args: ErrorArgs,
}

impl ErrorKindTarget {
    /// Validates the derive input. Only structs are accepted.
    pub fn from_input(input: DeriveInput) -> Result<Self> {
        let Data::Struct(data) = input.data else {
            return Err(syn::Error::new(input.ident.span(), "`ErrorKind` can only be derived for structs"));
        };

        Ok(Self {
            args: ErrorArgs::from_attributes(&input.attrs)?,
            name: input.ident,
            fields: data.fields,
        })
    }

    /// Brings the named fields of the struct into scope as references, so the tag expressions can
    /// use them directly.
    fn destructure(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(fields) => {
                let idents = fields.named.iter().map(|field| &field.ident);
                quote! { let #name { #(#idents),* } = self; }
            },
            Fields::Unnamed(fields) => quote_spanned! { fields.span() =>
                compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => TokenStream2::new(),
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let name = &self.name;
        let destructure = self.destructure();
        let message = self.args.message.as_ref()
            .map(|message| quote! { #message })
            .unwrap_or_else(|| {
                let fallback = name.to_string();
                quote! { #fallback }
            });
        let labels = self.args.labels.as_ref()
            .map(|labels| quote! { #labels })
            .unwrap_or_else(|| quote! { [""] });
        let help = self.args.help.as_ref().map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            impl ErrorKind for #name {
                fn build_report<'a>(
                    &self,
                    src_id: &'a str,
                    spans: &[::std::ops::Range<usize>],
                ) -> ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                    #[allow(unused_variables)]
                    #destructure

                    let offset = spans.first().map_or(0, |span| span.start);
                    let labels = spans.iter()
                        .cloned()
                        .zip(#labels)
                        .map(|(span, label_str)| {
                            let label_str = label_str.to_string();
                            let label = ariadne::Label::new((src_id, span))
                                .with_color(drill_error::EXPR);
                            if label_str.is_empty() {
                                label
                            } else {
                                label.with_message(label_str)
                            }
                        })
                        .collect::<Vec<_>>();

                    let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                        .with_message(#message)
                        .with_labels(labels);

                    #help
                    builder.finish()
                }
            }
        });
    }
}
