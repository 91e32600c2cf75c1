//! Walks a value tree and a schema together, writing matched values.

use tracing::{debug, trace};

use crate::prelude_internal::*;
use crate::schema::{RecordSchema, SchemaOptions};
use crate::tree::{LeafValues, ValueTree};

pub(crate) fn assign_tree(
    tree: &ValueTree,
    schema: &RecordSchema,
    record: &mut dyn FormRecord,
    options: SchemaOptions,
) -> Result<(), DecodeError> {
    for (segment, node) in tree.iter() {
        let Some(descriptor) = schema.get(segment) else {
            debug!(segment = %segment, "no field matches key, skipping");
            continue;
        };
        let name = descriptor.name();

        match (descriptor.nested(), node.leaf(), node.children()) {
            (None, Some(leaf), _) => {
                let field = descriptor
                    .resolve_mut(record)
                    .ok_or(DecodeError::MissingField { field: name })?;
                assign_leaf(name, leaf, field)?;
            }
            (Some(nested), _, Some(children)) => {
                let sub_schema = nested.schema(options)?;
                if !reaches_a_field(children, &sub_schema, options)? {
                    debug!(field = name, "no nested key matches a field, skipping");
                    continue;
                }
                let field = descriptor
                    .resolve_mut(record)
                    .ok_or(DecodeError::MissingField { field: name })?;
                let type_name = field.type_name();
                let FieldSlot::Record(inner) = field.slot() else {
                    return Err(FieldTypeError {
                        field: name.to_string(),
                        type_name,
                    }
                    .into());
                };
                trace!(field = name, "descending into record");
                assign_tree(children, &sub_schema, inner, options)?;
            }
            _ => debug!(field = name, "key shape does not match field, skipping"),
        }
    }
    Ok(())
}

/// Whether assigning `tree` would write at least one field, so that lazily
/// allocated records are only created when something lands in them.
fn reaches_a_field(
    tree: &ValueTree,
    schema: &RecordSchema,
    options: SchemaOptions,
) -> Result<bool, DuplicateFieldError> {
    for (segment, node) in tree.iter() {
        let Some(descriptor) = schema.get(segment) else {
            continue;
        };
        match (descriptor.nested(), node.leaf(), node.children()) {
            (None, Some(_), _) => return Ok(true),
            (Some(nested), _, Some(children)) => {
                let sub_schema = nested.schema(options)?;
                if reaches_a_field(children, &sub_schema, options)? {
                    return Ok(true);
                }
            }
            _ => {}
        }
    }
    Ok(false)
}

fn assign_leaf(
    name: &'static str,
    leaf: &LeafValues,
    field: &mut dyn FormField,
) -> Result<(), DecodeError> {
    let type_name = field.type_name();
    match coerce(field.slot(), leaf) {
        Ok(true) => {
            trace!(field = name, key = leaf.key(), "assigned");
            Ok(())
        }
        Ok(false) => Err(FieldTypeError {
            field: name.to_string(),
            type_name,
        }
        .into()),
        Err(cause) => Err(FieldParseError::new(name, cause).into()),
    }
}

/// `Ok(false)` when the slot has no coercion.
fn coerce(slot: FieldSlot<'_>, leaf: &LeafValues) -> Result<bool, BoxError> {
    let values = leaf.values();
    match slot {
        FieldSlot::Parser(parser) => parser.parse_field(leaf.key(), values)?,
        FieldSlot::Bool(slot) => *slot = parse_bool(single(values)?)?,
        FieldSlot::Int(slot) => {
            let text = single(values)?;
            slot.set_from_str(text).map_err(|_| unexpected(text))?;
        }
        FieldSlot::Uint(slot) => {
            let text = single(values)?;
            slot.set_from_str(text).map_err(|_| unexpected(text))?;
        }
        FieldSlot::Text(slot) => single(values)?.clone_into(slot),
        FieldSlot::TextList(slot) => values.clone_into(slot),
        FieldSlot::Record(_) | FieldSlot::Unsupported => return Ok(false),
    }
    Ok(true)
}

fn single(values: &[String]) -> Result<&str, UnexpectedValuesError> {
    match values {
        [value] => Ok(value.as_str()),
        _ => Err(UnexpectedValuesError {
            values: values.to_vec(),
        }),
    }
}

fn parse_bool(text: &str) -> Result<bool, UnexpectedValueError> {
    match text {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(unexpected(text)),
    }
}

fn unexpected(text: &str) -> UnexpectedValueError {
    UnexpectedValueError {
        value: text.to_string(),
    }
}
