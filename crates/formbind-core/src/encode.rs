use tracing::{debug, trace};

use crate::key_path::KeyScheme;
use crate::prelude_internal::*;
use crate::schema::{RecordSchema, SchemaOptions};

/// Produces [`FormValues`] from a record.
///
/// Without a key encoder, record-typed fields that are not flattened cannot
/// be represented and fail with [`FieldTypeError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    recurse: Option<EncodeKeyFn>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn recurse(mut self, encode: EncodeKeyFn) -> Self {
        self.recurse = Some(encode);
        self
    }

    #[must_use]
    pub fn recurse_scheme(self, scheme: KeyScheme) -> Self {
        self.recurse(scheme.encoder())
    }

    pub fn encode<T: FormField>(&self, src: &T) -> Result<FormValues, EncodeError> {
        let type_name = src.type_name();
        let Some(fields) = T::shape().record_fields() else {
            return Err(UsageTypeError::NotRecord { type_name }.into());
        };
        let record = match src.view() {
            FieldView::Record(record) => record,
            FieldView::Absent => return Err(UsageTypeError::Absent { type_name }.into()),
            _ => return Err(UsageTypeError::NotRecord { type_name }.into()),
        };

        RecordSchema::build(
            fields,
            SchemaOptions {
                case_insensitive: false,
                recurse: self.recurse.is_some(),
            },
        )?;
        debug!(record = type_name, "encoding record");

        let mut out = FormValues::new();
        self.encode_record(record, fields, &mut Vec::new(), &mut out)?;
        Ok(out)
    }

    /// Encodes straight to `application/x-www-form-urlencoded`.
    pub fn encode_to_string<T: FormField>(&self, src: &T) -> Result<String, EncodeError> {
        Ok(self.encode(src)?.to_urlencoded())
    }

    fn encode_record(
        &self,
        record: &dyn FormRecord,
        fields: &'static [FieldDef],
        prefix: &mut Vec<String>,
        out: &mut FormValues,
    ) -> Result<(), EncodeError> {
        for (index, def) in fields.iter().enumerate() {
            let field = record
                .field(index)
                .ok_or(EncodeError::MissingField { field: def.name })?;
            let shape = (def.shape)();

            if def.flatten
                && let FieldShape::Record(inner) = shape
            {
                if let FieldView::Record(flattened) = field.view() {
                    self.encode_record(flattened, inner, prefix, out)?;
                }
                continue;
            }

            let name = def.key_name();
            let values = match field.view() {
                FieldView::Absent => {
                    trace!(field = name, "skipping absent field");
                    continue;
                }
                FieldView::Record(nested) => {
                    match (self.recurse.is_some(), shape.record_fields()) {
                        (true, Some(inner)) => {
                            prefix.push(name.to_string());
                            let result = self.encode_record(nested, inner, prefix, out);
                            prefix.pop();
                            result?;
                            continue;
                        }
                        _ => {
                            return Err(FieldTypeError {
                                field: name.to_string(),
                                type_name: field.type_name(),
                            }
                            .into());
                        }
                    }
                }
                FieldView::Encoder(encoder) => encoder
                    .encode_field()
                    .map_err(|cause| FieldEncodeError::new(name, cause))?,
                FieldView::Bool(value) => vec![value.to_string()],
                FieldView::Int(value) => vec![value.to_string()],
                FieldView::Uint(value) => vec![value.to_string()],
                FieldView::Text(text) => vec![text.to_string()],
                FieldView::TextList(list) => list.to_vec(),
                FieldView::Unsupported => {
                    return Err(FieldTypeError {
                        field: name.to_string(),
                        type_name: field.type_name(),
                    }
                    .into());
                }
            };
            out.insert(self.key_for(prefix, name), values);
        }
        Ok(())
    }

    fn key_for(&self, prefix: &[String], name: &str) -> String {
        match self.recurse {
            Some(encode) if !prefix.is_empty() => {
                let mut segments = prefix.to_vec();
                segments.push(name.to_string());
                encode(&segments)
            }
            _ => name.to_string(),
        }
    }
}

/// Encodes with the default [`Encoder`].
pub fn encode<T: FormField>(src: &T) -> Result<FormValues, EncodeError> {
    Encoder::new().encode(src)
}
