use crate::utils::{apply_derives, parse_bool_flag};
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Clone, (Debug 可控), Serialize, Deserialize, PartialEq, Eq
/// - 参数：`#[value_object(debug = true|false)]`，默认 true
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ValueObjectAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
    ];
    if cfg.derive_debug {
        required.insert(0, syn::parse_quote!(Debug));
    }

    match &mut input {
        Item::Struct(st) => apply_derives(&mut st.attrs, required),
        Item::Enum(en) => apply_derives(&mut en.attrs, required),
        other => {
            return syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
                .to_compile_error()
                .into();
        }
    }

    TokenStream::from(quote! { #input })
}

// -------- parsing --------

struct ValueObjectAttrConfig {
    derive_debug: bool,
}

impl Parse for ValueObjectAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut derive_debug: Option<bool> = None;
        let pairs: Punctuated<syn::MetaNameValue, Token![,]> =
            Punctuated::parse_terminated(input)?;

        for pair in pairs {
            if !pair.path.is_ident("debug") {
                return Err(syn::Error::new(
                    pair.path.span(),
                    "unknown key in attribute; expected 'debug'",
                ));
            }
            if derive_debug.is_some() {
                return Err(syn::Error::new(
                    pair.path.span(),
                    "duplicate key 'debug' in attribute",
                ));
            }
            derive_debug = Some(parse_bool_flag(pair.value, "debug")?);
        }

        Ok(Self {
            derive_debug: derive_debug.unwrap_or(true),
        })
    }
}
