//! Core decoder for Akai MPK2-series preset-dump SysEx messages.
//!
//! Given the full byte sequence of one inbound System-Exclusive
//! message, the decoder validates its framing and produces a typed,
//! immutable [`PresetDump`], or fails with a precise diagnosis. Byte
//! offsets live in a static field catalog; the parser walks the
//! catalog and never indexes the buffer directly. All I/O (port
//! enumeration, message reception, report output) belongs to callers.
//!
//! Invariants:
//! - Decoding is all-or-nothing; no partially populated dump escapes.
//! - The decoder holds no state across calls and retains no input.
//! - Unknown lookup codes are errors, never substituted defaults.
//!
//! Version française (résumé):
//! Décodeur pur pour les dumps de presets SysEx des MPK2 d'Akai :
//! validation du cadrage puis décodage complet vers [`PresetDump`],
//! piloté par un catalogue statique d'offsets. Aucune E/S, aucun état
//! entre les appels, échec explicite plutôt que résultat partiel.
//!
//! # Examples
//! ```
//! use mpkdump_core::{DecodeError, decode};
//!
//! let err = decode(&[0xF0, 0x42, 0x00]).unwrap_err();
//! assert!(matches!(err, DecodeError::BadHeader { .. }));
//! ```

use serde::{Deserialize, Serialize};

pub mod sysex;

pub use sysex::error::DecodeError;
pub use sysex::frame::{ValidatedFrame, validate_frame};
pub use sysex::parser::{decode, decode_preset_dump, decode_preset_dump_with};
pub use sysex::tables::DeviceModel;

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// One fully decoded preset dump.
///
/// Constructed in full by one decode call and immutable thereafter.
/// Bank letters and in-bank positions are derived from indices via
/// [`sysex::codec`], never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetDump {
    /// Preset slot on the device, 1..=30.
    pub preset_id: u8,
    /// Fixed-width 8-character preset label, untrimmed.
    pub preset_name: String,
    pub keyboard: KeyboardSpec,
    pub footswitch1: FootswitchSpec,
    pub footswitch2: FootswitchSpec,
    /// 64 pad records in bank-major order (bank A pad 1 first).
    pub pads: Vec<PadSpec>,
    pub knobs: Vec<KnobSpec>,
    pub faders: Vec<FaderSpec>,
    pub switches: Vec<SwitchSpec>,
    /// Present only for dump shapes that carry DAW-control records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daw_controls: Option<Vec<DawControlSpec>>,
    /// Present only for dump shapes that carry the split block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard_split: Option<KeyboardSplitSpec>,
    /// Unmodeled regions, retained verbatim.
    pub misc: MiscSpec,
}

impl PresetDump {
    /// Pad record at (bank, pad-within-bank), both zero-based.
    pub fn pad(&self, bank: usize, pad: usize) -> Option<&PadSpec> {
        if pad >= sysex::layout::PADS_PER_BANK {
            return None;
        }
        self.pads.get(bank * sysex::layout::PADS_PER_BANK + pad)
    }
}

/// Keyboard zone settings. Most of the 21-byte window is not yet
/// understood; the raw bytes are kept alongside the named fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardSpec {
    pub channel: u8,
    pub octave: u8,
    pub transpose: u8,
    pub raw: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootswitchSpec {
    pub mode: u8,
    pub channel: u8,
    pub controller: u8,
}

/// One drum pad: note/program assignment plus LED colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PadSpec {
    pub mode: u8,
    pub channel: u8,
    pub note: u8,
    pub program: u8,
    pub off_color: String,
    pub on_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnobSpec {
    pub mode: u8,
    pub channel: u8,
    pub controller: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaderSpec {
    pub mode: u8,
    pub channel: u8,
    pub controller: u8,
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchSpec {
    pub mode: u8,
    pub channel: u8,
    pub controller: u8,
    pub toggle_mode: u8,
    pub program: u8,
    pub note: u8,
    pub velocity: u8,
}

/// One DAW transport button (Enter/Left/Right/Up/Down).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DawControlSpec {
    pub button: String,
    pub mode: u8,
    pub controller: u8,
    pub key1: u8,
    pub key2: u8,
}

/// Keyboard split configuration: per-option zone assignment plus the
/// split on/off, split key and zone-B channel bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardSplitSpec {
    pub options: Vec<SplitOption>,
    pub split_on: bool,
    pub split_key: u8,
    pub zone_b_channel: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOption {
    pub option: String,
    pub zone: SplitZone,
}

/// Which keyboard zone an option applies to.
///
/// The device encodes both-enabled and both-disabled identically, so
/// there is no `Off` variant; see [`sysex::parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitZone {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "A+B")]
    Both,
}

impl std::fmt::Display for SplitZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SplitZone::A => "A",
            SplitZone::B => "B",
            SplitZone::Both => "A+B",
        };
        f.write_str(label)
    }
}

/// Unmodeled byte regions, kept verbatim so future catalog extensions
/// can reinterpret them without re-decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiscSpec {
    pub reserved: Vec<u8>,
    pub trailing: Vec<u8>,
}

/// Tool identification metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// A decoded dump wrapped with frame and tool metadata, ready for
/// JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpReport {
    /// Report schema version (not the firmware version).
    pub report_version: u32,
    pub tool: ToolInfo,
    /// Device model name as reported in the frame header.
    pub device: String,
    pub command: u8,
    pub declared_len: u16,
    pub preset: PresetDump,
}

/// Wrap a decoded preset with frame and tool metadata.
pub fn make_report(
    device: DeviceModel,
    command: u8,
    declared_len: u16,
    preset: PresetDump,
) -> DumpReport {
    DumpReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "mpkdump".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        device: device.name().to_string(),
        command,
        declared_len,
        preset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_preset() -> PresetDump {
        PresetDump {
            preset_id: 1,
            preset_name: "Preset 1".to_string(),
            keyboard: KeyboardSpec {
                channel: 0,
                octave: 4,
                transpose: 24,
                raw: vec![0; 21],
            },
            footswitch1: FootswitchSpec {
                mode: 0,
                channel: 0,
                controller: 64,
            },
            footswitch2: FootswitchSpec {
                mode: 0,
                channel: 0,
                controller: 65,
            },
            pads: vec![],
            knobs: vec![],
            faders: vec![],
            switches: vec![],
            daw_controls: None,
            keyboard_split: None,
            misc: MiscSpec {
                reserved: vec![],
                trailing: vec![],
            },
        }
    }

    #[test]
    fn report_omits_optional_fields_when_none() {
        let report = make_report(DeviceModel::Mpk261, 0x10, 1547, empty_preset());

        let value = serde_json::to_value(&report).expect("report json");
        assert_eq!(value["report_version"], REPORT_VERSION);
        assert_eq!(value["device"], "MPK261");
        let preset = &value["preset"];
        assert!(preset.get("daw_controls").is_none());
        assert!(preset.get("keyboard_split").is_none());
    }

    #[test]
    fn split_zone_serializes_as_labels() {
        let value = serde_json::to_value(SplitZone::Both).expect("zone json");
        assert_eq!(value, "A+B");
        assert_eq!(SplitZone::Both.to_string(), "A+B");
    }

    #[test]
    fn pad_accessor_is_bank_major() {
        let mut dump = empty_preset();
        for i in 0..64u8 {
            dump.pads.push(PadSpec {
                mode: 0,
                channel: 0,
                note: i,
                program: 0,
                off_color: "Off".to_string(),
                on_color: "Red".to_string(),
            });
        }
        assert_eq!(dump.pad(0, 0).unwrap().note, 0);
        assert_eq!(dump.pad(2, 5).unwrap().note, 37);
        assert_eq!(dump.pad(3, 15).unwrap().note, 63);
        assert!(dump.pad(4, 0).is_none());
        assert!(dump.pad(0, 16).is_none());
    }
}
