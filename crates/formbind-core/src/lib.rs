/// Splitting flat form keys into paths and joining them back.
pub mod key_path;

/// Ordered multi-valued form data.
pub mod values;

/// Traits describing records and the fields they expose.
pub mod field;

/// Per-record field-name tables with flattening resolved.
pub mod schema;

/// Hierarchical view of form data.
pub mod tree;

/// Assigning form data onto records.
pub mod decode;

/// Producing form data from records.
pub mod encode;

/// Ready-made field parsers.
pub mod parsers;

/// Error types reported by decoding and encoding.
pub mod error;

mod assign;

pub use decode::{Decoder, DecoderConfig, decode};
pub use encode::{Encoder, encode};
pub use error::*;
pub use field::{
    FieldDef, FieldEncoder, FieldParser, FieldShape, FieldSlot, FieldView, FormField, FormRecord,
    IntSlot, UintSlot,
};
pub use key_path::{DecodeKeyFn, EncodeKeyFn, KeyPath, KeyScheme, UnknownKeyScheme};
pub use parsers::PositiveInteger;
pub use schema::{FieldDescriptor, NestedSchema, RecordSchema, SchemaOptions};
pub use tree::{LeafValues, ValueNode, ValueTree};
pub use values::FormValues;

pub(crate) mod prelude_internal {
    #![allow(unused_imports)]
    pub use crate::error::{
        BoxError, DecodeError, DuplicateFieldError, EncodeError, FieldEncodeError,
        FieldParseError, FieldTypeError, UnexpectedFieldError, UnexpectedValueError,
        UnexpectedValuesError, UsageTypeError,
    };
    pub use crate::field::{
        FieldDef, FieldEncoder, FieldParser, FieldShape, FieldSlot, FieldView, FormField, FormRecord,
    };
    pub use crate::key_path::{DecodeKeyFn, EncodeKeyFn, KeyPath};
    pub use crate::values::FormValues;
    pub use ahash::AHashMap;
    pub use indexmap::IndexMap;
    pub use thisisplural::Plural;
}
