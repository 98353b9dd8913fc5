use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_quote, Fields, GenericParam, Ident, ItemStruct};

/// Declare a model with exactly three named components.
///
/// Component fields become public. Type parameters, such as the encoding tag
/// of `Rgb<E>`, are carried by `PhantomData` fields named after them. The
/// model derives `Clone`, `Copy`, `Debug` and `PartialEq` and gets `new`,
/// `to_components` and `From<Components>`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let item = syn::parse_macro_input!(input as ItemStruct);
    expand(item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(mut item: ItemStruct) -> syn::Result<TokenStream2> {
    let components = match &item.fields {
        Fields::Named(named) if named.named.len() == 3 => {
            named.named.iter().filter_map(|f| f.ident.clone()).collect::<Vec<_>>()
        }
        _ => {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "a model needs exactly three named component fields",
            ))
        }
    };

    let markers = item
        .generics
        .params
        .iter()
        .map(|param| match param {
            GenericParam::Type(ty) => Ok((
                format_ident!("_{}", ty.ident.to_string().to_lowercase()),
                ty.ident.clone(),
            )),
            other => Err(syn::Error::new_spanned(
                other,
                "models only take type parameters",
            )),
        })
        .collect::<syn::Result<Vec<(Ident, Ident)>>>()?;

    if let Fields::Named(named) = &mut item.fields {
        for field in named.named.iter_mut() {
            field.vis = parse_quote!(pub);
        }
        for (marker, ty) in &markers {
            named
                .named
                .push(parse_quote!(#marker: ::std::marker::PhantomData<#ty>));
        }
    }
    item.attrs
        .push(parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let (first, second, third) = (&components[0], &components[1], &components[2]);
    let marker_names = markers.iter().map(|(marker, _)| marker);

    Ok(quote! {
        #item

        impl #impl_generics #name #ty_generics #where_clause {
            /// A model with the given component values.
            pub fn new(
                #first: crate::color::Component,
                #second: crate::color::Component,
                #third: crate::color::Component,
            ) -> Self {
                Self {
                    #first,
                    #second,
                    #third,
                    #(#marker_names: ::std::marker::PhantomData,)*
                }
            }

            /// The component values in declaration order.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#first, self.#second, self.#third)
            }
        }

        impl #impl_generics ::core::convert::From<crate::color::Components>
            for #name #ty_generics #where_clause
        {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }
    })
}
