use darling::FromField;

#[derive(Debug, Default, FromField)]
#[darling(default, attributes(form))]
pub struct FieldAttrs {
    /// Merge the fields of a nested record into the parent namespace.
    pub flatten: bool,
    /// Key name for this field (overrides rename_all).
    pub rename: Option<String>,
    /// Leave the field out of the record.
    pub skip: bool,
}
