use convert_case::{Case, Casing};
use darling::{FromAttributes, FromMeta};
use syn::{GenericArgument, PathArguments, Type};

///
/// FieldCardinality
///

#[derive(Clone, Copy)]
pub enum FieldCardinality {
    One,
    Opt,
    Many,
}

/// Split a field type into its cardinality and element type.
///
/// `Option<T>` and `Vec<T>` are recognised by their last path segment.
pub fn classify_field(ty: &Type) -> (FieldCardinality, &Type) {
    if let Some(inner) = single_type_arg(ty, "Option") {
        (FieldCardinality::Opt, inner)
    } else if let Some(inner) = single_type_arg(ty, "Vec") {
        (FieldCardinality::Many, inner)
    } else {
        (FieldCardinality::One, ty)
    }
}

fn single_type_arg<'a>(ty: &'a Type, ident: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != ident {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

///
/// RenameRule
///

#[derive(Clone, Copy, Debug)]
pub enum RenameRule {
    Camel,
    Pascal,
    Snake,
}

impl RenameRule {
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Camel => name.to_case(Case::Camel),
            Self::Pascal => name.to_case(Case::Pascal),
            Self::Snake => name.to_case(Case::Snake),
        }
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "snake_case" => Ok(Self::Snake),
            _ => Err(darling::Error::custom(
                "unsupported rename_all rule; expected camelCase, PascalCase or snake_case",
            )),
        }
    }
}

///
/// ContainerAttrs
/// `#[query(...)]` on the struct.
///

#[derive(Debug, Default, FromAttributes)]
#[darling(attributes(query))]
pub struct ContainerAttrs {
    #[darling(default)]
    pub rename_all: Option<RenameRule>,
}

///
/// FieldAttrs
/// `#[query(...)]` on a field.
///

#[derive(Debug, Default, FromAttributes)]
#[darling(attributes(query))]
pub struct FieldAttrs {
    #[darling(default)]
    pub skip: bool,

    #[darling(default)]
    pub rename: Option<String>,
}
