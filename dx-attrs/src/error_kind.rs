use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    punctuated::Punctuated,
    Data,
    DeriveInput,
    Error,
    Expr,
    Fields,
    MetaNameValue,
    Result,
    Token,
};

/// The expressions given to the tags of the `error` attribute.
#[derive(Default)]
struct Tags {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Tags {
    /// Collects the tags from every `error` attribute on the item. A tag may only be given once.
    fn collect(input: &DeriveInput) -> Result<Self> {
        let mut tags = Self::default();
        for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("error")) {
            let pairs = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
            for MetaNameValue { path, value, .. } in pairs {
                let slot = match path.get_ident().map(|ident| ident.to_string()).as_deref() {
                    Some("message") => &mut tags.message,
                    Some("labels") => &mut tags.labels,
                    Some("help") => &mut tags.help,
                    _ => {
                        let tag = path.to_token_stream().to_string();
                        return Err(Error::new_spanned(path, format!("unknown tag `{}`", tag)));
                    },
                };

                if slot.replace(value).is_some() {
                    return Err(Error::new_spanned(path, "this tag was already given"));
                }
            }
        }

        Ok(tags)
    }
}

/// Returns a pattern that binds every named field of the struct, or [`None`] for a unit struct.
fn field_pattern(input: &DeriveInput) -> Result<Option<TokenStream2>> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(&input.ident, "`ErrorKind` can only be derived for structs"));
    };

    match &data.fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| &field.ident);
            let name = &input.ident;
            Ok(Some(quote! { #name { #(#names),* } }))
        },
        Fields::Unnamed(_) => Err(Error::new_spanned(
            &input.ident,
            "`ErrorKind` cannot be derived for tuple structs",
        )),
        Fields::Unit => Ok(None),
    }
}

/// Generates the `ErrorKind` implementation for the struct.
pub fn derive(input: DeriveInput) -> Result<TokenStream2> {
    let pattern = field_pattern(&input)?;
    let Tags { message, labels, help } = Tags::collect(&input)?;
    let Some(message) = message else {
        return Err(Error::new_spanned(&input.ident, "missing `message` tag in `error` attribute"));
    };

    // the fields are bound by reference, for the tag expressions to use
    let bind_fields = pattern.map(|pattern| quote! {
        #[allow(unused_variables)]
        let #pattern = self;
    });
    let labels = labels.map_or_else(|| quote! { [""] }, |labels| labels.to_token_stream());
    let set_help = help.map(|help| quote! { builder.set_help(#help); });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ErrorKind for #name #ty_generics #where_clause {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #bind_fields

                let labels = #labels
                    .into_iter()
                    .zip(spans.iter())
                    .map(|(text, span)| {
                        let text = text.to_string();
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(dx_error::EXPR);
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    })
                    .collect::<Vec<_>>();

                let offset = spans.first().map_or(0, |span| span.start);
                #[allow(unused_mut)]
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(labels);
                #set_help
                builder.finish()
            }
        }
    })
}
