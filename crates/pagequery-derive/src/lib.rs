use proc_macro::TokenStream;

mod field_enum;
mod record;
mod util;

#[proc_macro_derive(Record, attributes(query))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}

#[proc_macro_derive(FieldEnum)]
pub fn derive_field_enum(input: TokenStream) -> TokenStream {
    field_enum::derive_field_enum(input.into()).into()
}
