use crate::util::{ContainerAttrs, FieldAttrs, FieldCardinality, classify_field};
use darling::FromAttributes;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident, Type, Visibility, ext::IdentExt};

///
/// RecordField
///

struct RecordField<'a> {
    ident: &'a Ident,
    name: String,
    cardinality: FieldCardinality,
    inner: &'a Type,
}

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(input: &DeriveInput) -> darling::Result<TokenStream> {
    let ident = &input.ident;
    let record_name = ident.unraw().to_string();

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Record cannot be derived for generic structs",
        )
        .into());
    }

    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            ident,
            "Record can only be derived for structs with named fields",
        )
        .into());
    };
    let Fields::Named(named) = &data.fields else {
        return Err(Error::new_spanned(
            &data.fields,
            "Record can only be derived for structs with named fields",
        )
        .into());
    };

    let container = ContainerAttrs::from_attributes(&input.attrs)?;

    // only public fields are addressable
    let mut fields = Vec::new();
    for field in &named.named {
        let attrs = FieldAttrs::from_attributes(&field.attrs)?;
        if !matches!(field.vis, Visibility::Public(_)) || attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let declared = ident.unraw().to_string();
        let name = match (attrs.rename, container.rename_all) {
            (Some(rename), _) => rename,
            (None, Some(rule)) => rule.apply(&declared),
            (None, None) => declared,
        };
        let (cardinality, inner) = classify_field(&field.ty);

        fields.push(RecordField {
            ident,
            name,
            cardinality,
            inner,
        });
    }

    if let Some(duplicate) = fields
        .iter()
        .enumerate()
        .find_map(|(index, field)| fields[..index].iter().find(|prior| prior.name == field.name))
    {
        return Err(Error::new_spanned(
            duplicate.ident,
            format!("duplicate query field name '{}'", duplicate.name),
        )
        .into());
    }

    let field_models = fields.iter().map(|field| {
        let field_name = &field.name;
        let inner = field.inner;
        let cardinality = match field.cardinality {
            FieldCardinality::One => quote!(One),
            FieldCardinality::Opt => quote!(Opt),
            FieldCardinality::Many => quote!(Many),
        };

        quote! {
            ::pagequery::model::FieldModel {
                name: #field_name,
                kind: <#inner as ::pagequery::traits::FieldValue>::KIND,
                cardinality: ::pagequery::model::Cardinality::#cardinality,
            }
        }
    });

    let by_name_match_arms = fields.iter().map(|field| {
        let field_name = &field.name;
        let value_expr = field_value_expr(field.ident, field.cardinality);

        quote! {
            #field_name => Some(#value_expr),
        }
    });

    let record_entries = fields.iter().map(|field| {
        let field_name = &field.name;
        let value_expr = field_value_expr(field.ident, field.cardinality);

        quote! {
            (#field_name.to_string(), #value_expr)
        }
    });

    Ok(quote! {
        impl ::pagequery::traits::Record for #ident {
            fn model() -> &'static ::pagequery::model::RecordModel {
                static MODEL: ::pagequery::model::RecordModel = ::pagequery::model::RecordModel {
                    name: #record_name,
                    fields: &[#(#field_models),*],
                };

                &MODEL
            }

            fn get_value(&self, field: &str) -> Option<::pagequery::value::Value> {
                #[allow(unused_imports)]
                use ::pagequery::{traits::FieldValue, value::Value};

                match field {
                    #(#by_name_match_arms)*
                    _ => None,
                }
            }
        }

        impl ::pagequery::traits::FieldValue for #ident {
            const KIND: ::pagequery::model::FieldKind =
                ::pagequery::model::FieldKind::Record(<Self as ::pagequery::traits::Record>::model);

            fn to_value(&self) -> ::pagequery::value::Value {
                #[allow(unused_imports)]
                use ::pagequery::{traits::FieldValue, value::Value};

                Value::Record(vec![#(#record_entries),*])
            }
        }
    })
}

fn field_value_expr(field_ident: &Ident, cardinality: FieldCardinality) -> TokenStream {
    match cardinality {
        FieldCardinality::One => quote! {
            FieldValue::to_value(&self.#field_ident)
        },
        FieldCardinality::Opt => quote! {
            match self.#field_ident.as_ref() {
                Some(inner) => FieldValue::to_value(inner),
                None => Value::Null,
            }
        },
        FieldCardinality::Many => quote! {
            Value::List(
                self.#field_ident
                    .iter()
                    .map(FieldValue::to_value)
                    .collect::<Vec<_>>(),
            )
        },
    }
}
