use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::{Attribute, Field, FieldsNamed, Ident, Token, Type};

/// 拆出已有的 derive 列表，其余属性原样保留
fn split_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("derive") {
            retained.push(attr.clone());
            continue;
        }
        if let Ok(list) = attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
        {
            existing.extend(list);
        }
    }

    (retained, existing)
}

// Serialize 与 serde::Serialize 视为同一个 derive
fn derive_key(path: &syn::Path) -> String {
    match path.segments.last() {
        Some(last) => {
            let ident = last.ident.to_string();
            if ident == "Serialize" || ident == "Deserialize" {
                format!("serde::{ident}")
            } else {
                ident
            }
        }
        None => path.to_token_stream().to_string(),
    }
}

/// 合并宏要求的 derive 与用户手写的 derive（去重，required 在前）
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let (retained, existing) = split_derives(attrs);

    let mut seen = std::collections::HashSet::new();
    let merged: Vec<syn::Path> = required
        .into_iter()
        .chain(existing)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();

    let derive: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    *attrs = std::iter::once(derive).chain(retained).collect();
}

/// 把名为 `name` 的字段放到最前；缺失时以 `ty` 新建
pub(crate) fn ensure_leading_field(fields: &mut FieldsNamed, name: &str, ty: &Type) {
    let is_target = |f: &Field| f.ident.as_ref().is_some_and(|i| i == name);

    let leading: Field = match fields.named.iter().find(|f| is_target(f)) {
        Some(existing) => existing.clone(),
        None => {
            let ident = Ident::new(name, proc_macro2::Span::call_site());
            syn::parse_quote! { #ident: #ty }
        }
    };

    let mut reordered: Punctuated<Field, Token![,]> = Punctuated::new();
    reordered.push(leading);
    for f in fields.named.iter().filter(|f| !is_target(f)) {
        reordered.push(f.clone());
    }

    fields.named = reordered;
}

/// 解析 `key = true|false` 形式的布尔参数
pub(crate) fn parse_bool_flag(expr: syn::Expr, key: &str) -> syn::Result<bool> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Bool(b),
            ..
        }) => Ok(b.value()),
        other => Err(syn::Error::new_spanned(
            other,
            format!("expected boolean literal for '{key}'"),
        )),
    }
}
