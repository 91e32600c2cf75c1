use tracing::debug;

use crate::assign::assign_tree;
use crate::key_path::KeyScheme;
use crate::prelude_internal::*;
use crate::schema::{RecordSchema, SchemaOptions};
use crate::tree::ValueTree;

/// Decoding options.
///
/// The default matches keys case-sensitively, rejects keys that match no
/// field, and treats every key as a single segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderConfig {
    pub case_insensitive: bool,
    /// Ignore keys that match no field instead of failing. Only consulted
    /// without `recurse`; recursive decoding always skips unmatched paths.
    pub allow_extra: bool,
    /// Splits keys into paths that address nested records.
    pub recurse: Option<DecodeKeyFn>,
}

/// Assigns [`FormValues`] onto a record.
///
/// ```ignore
/// let mut signup = Signup::default();
/// Decoder::new()
///     .case_insensitive(true)
///     .recurse_scheme(KeyScheme::RepeatedBrackets)
///     .decode(&FormValues::from_urlencoded(body), &mut signup)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Decoder { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    #[must_use]
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.config.case_insensitive = case_insensitive;
        self
    }

    #[must_use]
    pub fn allow_extra(mut self, allow_extra: bool) -> Self {
        self.config.allow_extra = allow_extra;
        self
    }

    #[must_use]
    pub fn recurse(mut self, decode: DecodeKeyFn) -> Self {
        self.config.recurse = Some(decode);
        self
    }

    #[must_use]
    pub fn recurse_scheme(self, scheme: KeyScheme) -> Self {
        self.recurse(scheme.decoder())
    }

    pub fn schema_options(&self) -> SchemaOptions {
        SchemaOptions {
            case_insensitive: self.config.case_insensitive,
            recurse: self.config.recurse.is_some(),
        }
    }

    /// Regroups `values` the way [`Decoder::decode`] sees them.
    pub fn value_tree(&self, values: &FormValues) -> ValueTree {
        ValueTree::build(values, self.config.case_insensitive, self.config.recurse)
    }

    /// Assigns `values` onto `dst`.
    ///
    /// Name clashes, and unexpected keys when no key decoder is set, are
    /// reported before `dst` is touched.
    /// A value that fails to parse stops decoding, leaving fields assigned
    /// earlier in place.
    pub fn decode<T: FormField>(&self, values: &FormValues, dst: &mut T) -> Result<(), DecodeError> {
        let type_name = dst.type_name();
        let Some(fields) = T::shape().record_fields() else {
            return Err(UsageTypeError::NotRecord { type_name }.into());
        };
        if matches!(dst.view(), FieldView::Absent) {
            return Err(UsageTypeError::Absent { type_name }.into());
        }

        let options = self.schema_options();
        let schema = RecordSchema::build(fields, options)?;
        let tree = self.value_tree(values);
        debug!(
            record = type_name,
            keys = values.len(),
            fields = schema.len(),
            case_insensitive = options.case_insensitive,
            recursive = options.recurse,
            allow_extra = self.config.allow_extra,
            "decoding form values"
        );

        if !self.config.allow_extra && self.config.recurse.is_none() {
            check_unexpected(&tree, &schema)?;
        }

        let FieldSlot::Record(record) = dst.slot() else {
            return Err(UsageTypeError::NotRecord { type_name }.into());
        };
        assign_tree(&tree, &schema, record, options)
    }
}

/// Decodes with the default [`Decoder`].
pub fn decode<T: FormField>(values: &FormValues, dst: &mut T) -> Result<(), DecodeError> {
    Decoder::new().decode(values, dst)
}

/// Rejects keys that match no field. Only flat trees are checked; with a key
/// decoder, unmatched paths are skipped during assignment.
fn check_unexpected(tree: &ValueTree, schema: &RecordSchema) -> Result<(), DecodeError> {
    for (segment, node) in tree.iter() {
        if schema.get(segment).is_some() {
            continue;
        }
        let leaf = node.first_leaf();
        return Err(UnexpectedFieldError {
            field: leaf.map_or_else(|| segment.clone(), |leaf| leaf.key().to_string()),
            values: leaf.map(|leaf| leaf.values().to_vec()).unwrap_or_default(),
        }
        .into());
    }
    Ok(())
}
