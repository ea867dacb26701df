use thiserror::Error;

use super::tables::DeviceModel;

/// Errors returned while validating framing or decoding a preset dump.
///
/// Every error is fatal to the decode attempt; there is no partial
/// result. Framing variants are detected before any field is read,
/// the remaining variants while populating specific fields.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("message does not start with the Akai SysEx header, got {found:02x?}")]
    BadHeader { found: Vec<u8> },
    #[error("unknown device code 0x{code:02x}")]
    UnknownDevice { code: u8 },
    #[error("device {model} is recognized but not supported by this decoder")]
    UnsupportedDevice { model: DeviceModel },
    #[error("message length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("message does not end with the SysEx terminator, got 0x{found:02x}")]
    MissingTerminator { found: u8 },
    #[error("unsupported command 0x{command:02x}")]
    UnsupportedCommand { command: u8 },
    #[error("preset id {id} outside 1..=30")]
    InvalidPresetId { id: u8 },
    #[error("unknown code 0x{code:02x} in the {table} table")]
    UnknownCode { table: &'static str, code: u8 },
    #[error("field {field} at {start}..{end} falls outside the data region of a {len} byte message")]
    CatalogOverflow {
        field: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },
}
