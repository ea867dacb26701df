use super::codec::unpack14;
use super::error::DecodeError;
use super::layout;
use super::tables::DeviceModel;

/// A raw message whose framing has been validated: header, device id,
/// declared length and terminator all agree with the buffer.
///
/// Borrows the caller's buffer; nothing is copied.
#[derive(Debug)]
pub struct ValidatedFrame<'a> {
    data: &'a [u8],
    pub device: DeviceModel,
    pub command: u8,
    pub declared_len: u16,
}

impl<'a> ValidatedFrame<'a> {
    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }
}

/// Validate the framing of a raw SysEx message.
///
/// Checks run in order: manufacturer header, device id, device support,
/// declared length against the actual buffer length, terminator. The
/// header check inspects no byte past the first three, so a non-Akai
/// message fails fast with [`DecodeError::BadHeader`].
pub fn validate_frame(raw: &[u8]) -> Result<ValidatedFrame<'_>, DecodeError> {
    match raw.get(..layout::AKAI_HEADER.len()) {
        Some(header) if header == layout::AKAI_HEADER.as_slice() => {}
        _ => {
            let found = raw[..raw.len().min(layout::AKAI_HEADER.len())].to_vec();
            return Err(DecodeError::BadHeader { found });
        }
    }

    if raw.len() < layout::FRAME_OVERHEAD {
        return Err(DecodeError::LengthMismatch {
            expected: layout::FRAME_OVERHEAD,
            actual: raw.len(),
        });
    }

    let code = raw[layout::DEVICE_OFFSET];
    let device = DeviceModel::from_code(code).ok_or(DecodeError::UnknownDevice { code })?;
    if device != DeviceModel::Mpk261 {
        return Err(DecodeError::UnsupportedDevice { model: device });
    }

    let declared_len = unpack14(raw[layout::LENGTH_HI_OFFSET], raw[layout::LENGTH_LO_OFFSET]);
    let expected = layout::FRAME_OVERHEAD + declared_len as usize;
    if expected != raw.len() {
        return Err(DecodeError::LengthMismatch {
            expected,
            actual: raw.len(),
        });
    }

    let last = raw[raw.len() - 1];
    if last != layout::SYSEX_END {
        return Err(DecodeError::MissingTerminator { found: last });
    }

    Ok(ValidatedFrame {
        data: raw,
        device,
        command: raw[layout::COMMAND_OFFSET],
        declared_len,
    })
}
