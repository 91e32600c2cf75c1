//! Describing records to the decoder and encoder.
//!
//! A record lists its fields once, statically, through [`FormRecord::fields`].
//! The schema builder walks that list without touching any value, so name
//! clashes surface before a destination is modified. At assignment time each
//! field hands out a typed [`FieldSlot`] to write into; at encoding time it
//! hands out a [`FieldView`] to read from.
//!
//! `#[derive(FormRecord)]` implements both [`FormRecord`] and [`FormField`]
//! for a struct with named fields.

use core::any::Any;

use crate::prelude_internal::*;

/// How the schema builder should treat a field type.
#[derive(Debug, Clone, Copy)]
pub enum FieldShape {
    /// Assigned from the values of a single key.
    Value,
    /// A record stored inline. Its fields can be flattened into the parent.
    Record(&'static [FieldDef]),
    /// A record behind an indirection that is allocated on first use.
    LazyRecord(&'static [FieldDef]),
}

impl FieldShape {
    pub fn record_fields(self) -> Option<&'static [FieldDef]> {
        match self {
            FieldShape::Value => None,
            FieldShape::Record(fields) | FieldShape::LazyRecord(fields) => Some(fields),
        }
    }

    /// Moves a record shape behind an indirection.
    pub fn indirect(self) -> Self {
        match self {
            FieldShape::Record(fields) => FieldShape::LazyRecord(fields),
            shape => shape,
        }
    }
}

/// One declared field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Name as declared.
    pub name: &'static str,
    /// Name override used for matching keys.
    pub rename: Option<&'static str>,
    /// Merge the fields of an inline record into the parent namespace.
    pub flatten: bool,
    pub shape: fn() -> FieldShape,
}

impl FieldDef {
    /// The name keys are matched against, before case folding.
    pub fn key_name(&self) -> &'static str {
        self.rename.unwrap_or(self.name)
    }
}

/// A struct whose fields can be assigned from form data.
pub trait FormRecord {
    fn fields() -> &'static [FieldDef]
    where
        Self: Sized;

    /// The field at `index` in [`FormRecord::fields`].
    fn field(&self, index: usize) -> Option<&dyn FormField>;

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn FormField>;
}

/// A value that can sit in a record field.
pub trait FormField {
    /// Where decoded values go. Lazily allocated containers allocate here.
    fn slot(&mut self) -> FieldSlot<'_>;

    /// What encoding reads.
    fn view(&self) -> FieldView<'_> {
        FieldView::Unsupported
    }

    fn shape() -> FieldShape
    where
        Self: Sized,
    {
        FieldShape::Value
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Parses a field's raw values itself, taking precedence over built-in coercion.
///
/// `key` is the input key as submitted, before case folding.
pub trait FieldParser {
    fn parse_field(&mut self, key: &str, values: &[String]) -> Result<(), BoxError>;
}

/// Produces a field's values itself, taking precedence over built-in formatting.
pub trait FieldEncoder {
    fn encode_field(&self) -> Result<Vec<String>, BoxError>;
}

pub enum FieldSlot<'a> {
    Parser(&'a mut dyn FieldParser),
    Bool(&'a mut bool),
    Int(IntSlot<'a>),
    Uint(UintSlot<'a>),
    Text(&'a mut String),
    TextList(&'a mut Vec<String>),
    Record(&'a mut dyn FormRecord),
    Unsupported,
}

pub enum FieldView<'a> {
    Encoder(&'a dyn FieldEncoder),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(&'a str),
    TextList(&'a [String]),
    Record(&'a dyn FormRecord),
    /// An optional field holding nothing.
    Absent,
    Unsupported,
}

macro_rules! integer_slot {
    ($slot:ident, $kind:ident, $wide:ty; $($variant:ident($ty:ty)),* $(,)?) => {
        pub enum $slot<'a> {
            $($variant(&'a mut $ty),)*
        }

        impl $slot<'_> {
            /// Parses `text` at the slot's width and stores it.
            pub fn set_from_str(self, text: &str) -> Result<(), core::num::ParseIntError> {
                match self {
                    $($slot::$variant(slot) => *slot = text.parse()?,)*
                }
                Ok(())
            }

            pub fn bits(&self) -> u32 {
                match self {
                    $($slot::$variant(_) => <$ty>::BITS,)*
                }
            }
        }

        $(
            impl FormField for $ty {
                fn slot(&mut self) -> FieldSlot<'_> {
                    FieldSlot::$kind($slot::$variant(self))
                }

                fn view(&self) -> FieldView<'_> {
                    FieldView::$kind(*self as $wide)
                }
            }
        )*
    };
}

integer_slot!(IntSlot, Int, i64; I8(i8), I16(i16), I32(i32), I64(i64), Isize(isize));
integer_slot!(UintSlot, Uint, u64; U8(u8), U16(u16), U32(u32), U64(u64), Usize(usize));

impl FormField for bool {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Bool(self)
    }

    fn view(&self) -> FieldView<'_> {
        FieldView::Bool(*self)
    }
}

impl FormField for String {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Text(self)
    }

    fn view(&self) -> FieldView<'_> {
        FieldView::Text(self)
    }
}

/// Only `Vec<String>` has a built-in coercion; other element types are rejected
/// when a value is assigned.
impl<T: 'static> FormField for Vec<T> {
    fn slot(&mut self) -> FieldSlot<'_> {
        match (self as &mut dyn Any).downcast_mut::<Vec<String>>() {
            Some(list) => FieldSlot::TextList(list),
            None => FieldSlot::Unsupported,
        }
    }

    fn view(&self) -> FieldView<'_> {
        match (self as &dyn Any).downcast_ref::<Vec<String>>() {
            Some(list) => FieldView::TextList(list),
            None => FieldView::Unsupported,
        }
    }
}

/// `None` is replaced with `T::default()` the first time a value reaches it.
impl<T: FormField + Default> FormField for Option<T> {
    fn slot(&mut self) -> FieldSlot<'_> {
        self.get_or_insert_with(T::default).slot()
    }

    fn view(&self) -> FieldView<'_> {
        match self {
            Some(inner) => inner.view(),
            None => FieldView::Absent,
        }
    }

    fn shape() -> FieldShape {
        T::shape().indirect()
    }
}

impl<T: FormField> FormField for Box<T> {
    fn slot(&mut self) -> FieldSlot<'_> {
        (**self).slot()
    }

    fn view(&self) -> FieldView<'_> {
        (**self).view()
    }

    fn shape() -> FieldShape {
        T::shape().indirect()
    }
}
