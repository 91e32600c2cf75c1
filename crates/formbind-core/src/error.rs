use core::fmt;

/// Error produced by custom field parsers and encoders.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The destination handed to the decoder or encoder cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageTypeError {
    #[error("cannot use {type_name}: not a record")]
    NotRecord { type_name: &'static str },
    #[error("cannot use {type_name}: the record is absent")]
    Absent { type_name: &'static str },
}

/// Two fields of one namespace match the same key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate field {field:?}")]
pub struct DuplicateFieldError {
    pub field: String,
}

/// An input key matches no field and extra keys are not allowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct UnexpectedFieldError {
    /// The key as it appeared in the input.
    pub field: String,
    pub values: Vec<String>,
}

impl fmt::Display for UnexpectedFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.values.as_slice() {
            [] => write!(f, "unexpected field {:?}", self.field),
            [value] => write!(f, "unexpected field {:?} with value {value:?}", self.field),
            values => write!(
                f,
                "unexpected field {:?} with {} values",
                self.field,
                values.len()
            ),
        }
    }
}

/// A field's type has no built-in coercion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field {field:?} has unsupported type {type_name}")]
pub struct FieldTypeError {
    pub field: String,
    pub type_name: &'static str,
}

/// A single value could not be coerced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected value {value:?}")]
pub struct UnexpectedValueError {
    pub value: String,
}

/// The number of values did not fit the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected exactly one value, got {values:?}")]
pub struct UnexpectedValuesError {
    pub values: Vec<String>,
}

/// Parsing a field's values failed.
///
/// The underlying error is reachable through [`std::error::Error::source`],
/// [`FieldParseError::cause`] and [`FieldParseError::downcast_cause`].
#[derive(Debug, thiserror::Error)]
#[error("error parsing field {field:?}: {cause}")]
pub struct FieldParseError {
    pub field: String,
    #[source]
    cause: BoxError,
}

impl FieldParseError {
    pub fn new(field: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        FieldParseError {
            field: field.into(),
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.cause
    }

    pub fn downcast_cause<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref::<E>()
    }

    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

/// A custom field encoder failed.
#[derive(Debug, thiserror::Error)]
#[error("error encoding field {field:?}: {cause}")]
pub struct FieldEncodeError {
    pub field: String,
    #[source]
    cause: BoxError,
}

impl FieldEncodeError {
    pub fn new(field: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        FieldEncodeError {
            field: field.into(),
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.cause
    }

    pub fn downcast_cause<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref::<E>()
    }

    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Usage(#[from] UsageTypeError),
    #[error(transparent)]
    DuplicateField(#[from] DuplicateFieldError),
    #[error(transparent)]
    UnexpectedField(#[from] UnexpectedFieldError),
    #[error(transparent)]
    FieldType(#[from] FieldTypeError),
    #[error(transparent)]
    FieldParse(#[from] FieldParseError),
    /// A record implementation does not expose a field from its own table.
    #[error("record does not expose field {field:?}")]
    MissingField { field: &'static str },
}

impl DecodeError {
    pub fn as_field_parse(&self) -> Option<&FieldParseError> {
        match self {
            DecodeError::FieldParse(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    Usage(#[from] UsageTypeError),
    #[error(transparent)]
    DuplicateField(#[from] DuplicateFieldError),
    #[error(transparent)]
    FieldType(#[from] FieldTypeError),
    #[error(transparent)]
    FieldEncode(#[from] FieldEncodeError),
    #[error("record does not expose field {field:?}")]
    MissingField { field: &'static str },
}
