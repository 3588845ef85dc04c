use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields};

// derive_field_enum
pub fn derive_field_enum(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data) = &input.data else {
        let err = Error::new_spanned(ident, "FieldEnum can only be derived for unit-only enums");
        return err.to_compile_error();
    };
    if data.variants.is_empty() {
        let err = Error::new_spanned(ident, "FieldEnum requires at least one variant");
        return err.to_compile_error();
    }
    if let Some(variant) = data
        .variants
        .iter()
        .find(|variant| !matches!(variant.fields, Fields::Unit))
    {
        let err = Error::new_spanned(variant, "FieldEnum variants must not carry data");
        return err.to_compile_error();
    }

    let names = data
        .variants
        .iter()
        .map(|variant| variant.ident.to_string())
        .collect::<Vec<_>>();

    let to_value_arms = data.variants.iter().zip(0u32..).map(|(variant, ordinal)| {
        let variant_ident = &variant.ident;
        let variant_name = variant_ident.to_string();

        quote! {
            Self::#variant_ident => ::pagequery::value::Value::Enum(
                ::pagequery::value::ValueEnum::new(#variant_name, #ordinal),
            ),
        }
    });

    quote! {
        impl #impl_generics ::pagequery::traits::FieldValue for #ident #ty_generics #where_clause {
            const KIND: ::pagequery::model::FieldKind =
                ::pagequery::model::FieldKind::Enum(&[#(#names),*]);

            fn to_value(&self) -> ::pagequery::value::Value {
                match self {
                    #(#to_value_arms)*
                }
            }
        }
    }
}
