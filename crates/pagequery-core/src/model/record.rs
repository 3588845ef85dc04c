use crate::model::FieldModel;

///
/// RecordModel
/// Static field registry for one record type, generated by `#[derive(Record)]`.
///

#[derive(Debug)]
pub struct RecordModel {
    pub name: &'static str,
    /// Public fields in declaration order.
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [FieldModel]) -> Self {
        Self { name, fields }
    }

    /// Look up a field by name.
    ///
    /// An exact match wins; otherwise the first field whose name matches
    /// ignoring ASCII case is returned.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        let fields: &'static [FieldModel] = self.fields;

        fields
            .iter()
            .find(|field| field.name == name)
            .or_else(|| fields.iter().find(|field| field.name.eq_ignore_ascii_case(name)))
    }
}
