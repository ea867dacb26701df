use super::catalog::FieldSpec;
use super::error::DecodeError;
use super::layout;

/// Bounds-checked window access over a framed dump message.
///
/// Every window must lie inside the data region, after the leading
/// frame bytes and before the terminator. A window that does not is
/// reported as [`DecodeError::CatalogOverflow`] rather than panicking,
/// so a catalog that outgrows a message surfaces as a decode error.
pub struct DumpReader<'a> {
    data: &'a [u8],
}

impl<'a> DumpReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn check(
        &self,
        field: &'static str,
        range: std::ops::Range<usize>,
    ) -> Result<&'a [u8], DecodeError> {
        let end_of_data = self.data.len().saturating_sub(1);
        if range.start < layout::PRESET_ID_OFFSET || range.end > end_of_data {
            return Err(DecodeError::CatalogOverflow {
                field,
                start: range.start,
                end: range.end,
                len: self.data.len(),
            });
        }
        Ok(&self.data[range])
    }

    /// Byte window of instance `index` of a catalog field.
    pub fn field(&self, spec: &FieldSpec, index: usize) -> Result<&'a [u8], DecodeError> {
        self.check(spec.name, spec.window(index))
    }

    /// Single byte of a one-byte scalar field.
    pub fn byte(&self, spec: &FieldSpec) -> Result<u8, DecodeError> {
        Ok(self.field(spec, 0)?[0])
    }

    /// Unmodeled bytes from `offset` to the end of the data region.
    pub fn trailing(&self, field: &'static str, offset: usize) -> Result<&'a [u8], DecodeError> {
        self.check(field, offset..self.data.len().saturating_sub(1))
    }
}
