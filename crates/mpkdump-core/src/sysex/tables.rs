//! Static code-to-label tables.
//!
//! An unknown code is a decode error, never a substituted default.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DecodeError;
use super::layout;

/// Device models that identify themselves in the frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceModel {
    Mpk249,
    Mpk261,
}

impl DeviceModel {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            layout::DEVICE_MPK249 => Some(DeviceModel::Mpk249),
            layout::DEVICE_MPK261 => Some(DeviceModel::Mpk261),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            DeviceModel::Mpk249 => layout::DEVICE_MPK249,
            DeviceModel::Mpk261 => layout::DEVICE_MPK261,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceModel::Mpk249 => "MPK249",
            DeviceModel::Mpk261 => "MPK261",
        }
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pad LED color label for a color code byte.
pub fn pad_color(code: u8) -> Result<&'static str, DecodeError> {
    let name = match code {
        0x00 => "Off",
        0x01 => "Red",
        0x02 => "Orange",
        0x03 => "Amber",
        0x04 => "Yellow",
        0x05 => "Green",
        0x06 => "Green_Blue",
        0x07 => "Aqua",
        0x08 => "Light_Blue",
        0x09 => "Blue",
        0x0A => "Purple",
        0x0B => "Pink",
        0x0C => "Hot_Pink",
        0x0D => "Pastel_Purple",
        0x0E => "Pastel_Green",
        0x0F => "Pastel_Pink",
        0x10 => "Grey",
        _ => {
            return Err(DecodeError::UnknownCode {
                table: "pad colors",
                code,
            });
        }
    };
    Ok(name)
}

/// DAW transport button label for a button index.
pub fn daw_button(code: u8) -> Result<&'static str, DecodeError> {
    let name = match code {
        0x00 => "Enter",
        0x01 => "Left",
        0x02 => "Right",
        0x03 => "Up",
        0x04 => "Down",
        _ => {
            return Err(DecodeError::UnknownCode {
                table: "DAW buttons",
                code,
            });
        }
    };
    Ok(name)
}

/// Keyboard-split option label for an option index.
pub fn split_option(code: u8) -> Result<&'static str, DecodeError> {
    let name = match code {
        0 => "Pitch Bend",
        1 => "Mod Wheel",
        2 => "Footswitch 1",
        3 => "Footswitch 2",
        4 => "Expression Pedal",
        5 => "Arpeggiator",
        6 => "Aftertouch",
        _ => {
            return Err(DecodeError::UnknownCode {
                table: "split options",
                code,
            });
        }
    };
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::{DeviceModel, daw_button, pad_color, split_option};

    #[test]
    fn device_model_codes_round_trip() {
        assert_eq!(DeviceModel::from_code(0x24), Some(DeviceModel::Mpk249));
        assert_eq!(DeviceModel::from_code(0x25), Some(DeviceModel::Mpk261));
        assert_eq!(DeviceModel::from_code(0x26), None);
        assert_eq!(DeviceModel::Mpk261.code(), 0x25);
        assert_eq!(DeviceModel::Mpk261.to_string(), "MPK261");
    }

    #[test]
    fn pad_color_known_codes() {
        assert_eq!(pad_color(0x00).unwrap(), "Off");
        assert_eq!(pad_color(0x10).unwrap(), "Grey");
    }

    #[test]
    fn pad_color_unknown_code() {
        let err = pad_color(0x11).unwrap_err();
        assert!(err.to_string().contains("pad colors"));
    }

    #[test]
    fn daw_button_bounds() {
        assert_eq!(daw_button(0).unwrap(), "Enter");
        assert_eq!(daw_button(4).unwrap(), "Down");
        assert!(daw_button(5).is_err());
    }

    #[test]
    fn split_option_bounds() {
        assert_eq!(split_option(0).unwrap(), "Pitch Bend");
        assert_eq!(split_option(6).unwrap(), "Aftertouch");
        assert!(split_option(7).is_err());
    }
}
