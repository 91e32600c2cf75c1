use convert_case::{Case, Casing as _};
use darling::FromMeta;

/// Case conventions accepted by `#[form(rename_all = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameAll {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameAll {
    fn case(self) -> Case<'static> {
        match self {
            RenameAll::Lower => Case::Flat,
            RenameAll::Upper => Case::UpperFlat,
            RenameAll::Pascal => Case::Pascal,
            RenameAll::Camel => Case::Camel,
            RenameAll::Snake => Case::Snake,
            RenameAll::ScreamingSnake => Case::UpperSnake,
            RenameAll::Kebab => Case::Kebab,
            RenameAll::ScreamingKebab => Case::Cobol,
        }
    }

    pub fn apply(self, name: &str) -> String {
        name.to_case(self.case())
    }
}

/// Style names as written in the attribute, the same ones serde accepts.
const STYLES: [(&str, RenameAll); 8] = [
    ("lowercase", RenameAll::Lower),
    ("UPPERCASE", RenameAll::Upper),
    ("PascalCase", RenameAll::Pascal),
    ("camelCase", RenameAll::Camel),
    ("snake_case", RenameAll::Snake),
    ("SCREAMING_SNAKE_CASE", RenameAll::ScreamingSnake),
    ("kebab-case", RenameAll::Kebab),
    ("SCREAMING-KEBAB-CASE", RenameAll::ScreamingKebab),
];

impl FromMeta for RenameAll {
    fn from_string(value: &str) -> darling::Result<Self> {
        STYLES
            .iter()
            .find(|(style, _)| *style == value)
            .map(|&(_, rename)| rename)
            .ok_or_else(|| darling::Error::unknown_value(value))
    }
}
