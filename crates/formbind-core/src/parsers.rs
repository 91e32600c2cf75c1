use crate::prelude_internal::*;

/// A non-negative integer field.
///
/// Only the first value is read, and no value at all leaves the field as it
/// was. A value that is not an integer fails with the integer parse error as
/// the cause; a negative one with [`UnexpectedValueError`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveInteger(pub i64);

impl PositiveInteger {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl FieldParser for PositiveInteger {
    fn parse_field(&mut self, _key: &str, values: &[String]) -> Result<(), BoxError> {
        let Some(first) = values.first() else {
            return Ok(());
        };
        let value: i64 = first.parse()?;
        if value < 0 {
            return Err(UnexpectedValueError {
                value: first.clone(),
            }
            .into());
        }
        self.0 = value;
        Ok(())
    }
}

impl FieldEncoder for PositiveInteger {
    fn encode_field(&self) -> Result<Vec<String>, BoxError> {
        Ok(vec![self.0.to_string()])
    }
}

impl FormField for PositiveInteger {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Parser(self)
    }

    fn view(&self) -> FieldView<'_> {
        FieldView::Encoder(self)
    }
}
