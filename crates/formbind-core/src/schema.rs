//! Field-name tables for records.
//!
//! Building a [`RecordSchema`] resolves flattening and renaming into one flat
//! table per namespace and rejects names that collide, all before any
//! destination is written.

use core::ptr;
use std::borrow::Cow;

use tracing::trace;

use crate::prelude_internal::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaOptions {
    /// Match names after lowercasing both sides.
    pub case_insensitive: bool,
    /// Build sub-schemas for record-typed fields.
    pub recurse: bool,
}

impl SchemaOptions {
    pub fn fold(&self, name: &str) -> String {
        if self.case_insensitive {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    }
}

/// Lookup table from (possibly folded) field names to the fields they reach.
#[derive(Debug, Clone, Default)]
pub struct RecordSchema {
    entries: AHashMap<String, FieldDescriptor>,
}

#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: &'static str,
    access: Vec<usize>,
    nested: Option<NestedSchema>,
}

/// The schema of a record-typed field's own namespace.
#[derive(Debug, Clone)]
pub enum NestedSchema {
    Built(RecordSchema),
    /// The record type is already being built further up, so its table is
    /// produced when a value first reaches it. The build further up has
    /// already checked it for duplicates.
    Deferred(&'static [FieldDef]),
}

impl FieldDescriptor {
    /// The unfolded name the field is matched by.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field indices leading from the record to this field, one per flatten hop.
    pub fn access(&self) -> &[usize] {
        &self.access
    }

    pub fn nested(&self) -> Option<&NestedSchema> {
        self.nested.as_ref()
    }

    /// Follows the access path, passing through flattened records.
    pub fn resolve_mut<'r>(&self, record: &'r mut dyn FormRecord) -> Option<&'r mut dyn FormField> {
        let (&last, hops) = self.access.split_last()?;
        let mut current = record;
        for &index in hops {
            current = match current.field_mut(index)?.slot() {
                FieldSlot::Record(inner) => inner,
                _ => return None,
            };
        }
        current.field_mut(last)
    }
}

impl NestedSchema {
    /// The built table, building a deferred one now.
    pub fn schema(
        &self,
        options: SchemaOptions,
    ) -> Result<Cow<'_, RecordSchema>, DuplicateFieldError> {
        match self {
            NestedSchema::Built(schema) => Ok(Cow::Borrowed(schema)),
            NestedSchema::Deferred(fields) => {
                trace!("building deferred record schema");
                RecordSchema::build(fields, options).map(Cow::Owned)
            }
        }
    }
}

impl RecordSchema {
    pub fn of<T: FormRecord>(options: SchemaOptions) -> Result<Self, DuplicateFieldError> {
        Self::build(T::fields(), options)
    }

    pub fn build(
        fields: &'static [FieldDef],
        options: SchemaOptions,
    ) -> Result<Self, DuplicateFieldError> {
        let mut building = Vec::new();
        Self::build_nested(fields, options, &mut building)
    }

    fn build_nested(
        fields: &'static [FieldDef],
        options: SchemaOptions,
        building: &mut Vec<&'static [FieldDef]>,
    ) -> Result<Self, DuplicateFieldError> {
        building.push(fields);
        let mut schema = RecordSchema::default();
        let result = schema.add_fields(fields, &[], options, building);
        building.pop();
        result.map(|()| schema)
    }

    fn add_fields(
        &mut self,
        fields: &'static [FieldDef],
        prefix: &[usize],
        options: SchemaOptions,
        building: &mut Vec<&'static [FieldDef]>,
    ) -> Result<(), DuplicateFieldError> {
        for (index, def) in fields.iter().enumerate() {
            let mut access = prefix.to_vec();
            access.push(index);
            let shape = (def.shape)();

            if def.flatten
                && let FieldShape::Record(inner) = shape
            {
                trace!(field = def.name, "flattening record fields");
                self.add_fields(inner, &access, options, building)?;
                continue;
            }

            let name = def.key_name();
            let key = options.fold(name);
            if self.entries.contains_key(&key) {
                return Err(DuplicateFieldError {
                    field: name.to_string(),
                });
            }

            let nested = match shape.record_fields() {
                Some(inner) if options.recurse => {
                    let on_stack = building.iter().any(|open| ptr::eq(*open, inner));
                    if on_stack {
                        Some(NestedSchema::Deferred(inner))
                    } else {
                        Some(NestedSchema::Built(Self::build_nested(
                            inner, options, building,
                        )?))
                    }
                }
                _ => None,
            };

            self.entries.insert(
                key,
                FieldDescriptor {
                    name,
                    access,
                    nested,
                },
            );
        }
        Ok(())
    }

    /// Looks up an already folded name.
    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
