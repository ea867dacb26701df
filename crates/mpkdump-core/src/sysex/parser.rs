use super::catalog::{Catalog, MPK261_FULL};
use super::error::DecodeError;
use super::frame::{ValidatedFrame, validate_frame};
use super::layout;
use super::reader::DumpReader;
use super::tables::{self, DeviceModel};
use crate::{
    DawControlSpec, FaderSpec, FootswitchSpec, KeyboardSpec, KeyboardSplitSpec, KnobSpec,
    MiscSpec, PadSpec, PresetDump, SplitOption, SplitZone, SwitchSpec,
};

/// Validate framing and decode a full preset dump in one call.
///
/// # Examples
/// ```
/// use mpkdump_core::decode;
///
/// let err = decode(&[0x01, 0x02, 0x03]).unwrap_err();
/// assert!(err.to_string().contains("Akai SysEx header"));
/// ```
pub fn decode(raw: &[u8]) -> Result<PresetDump, DecodeError> {
    let frame = validate_frame(raw)?;
    decode_preset_dump(&frame)
}

/// Decode a validated frame against the catalog for its device.
pub fn decode_preset_dump(frame: &ValidatedFrame<'_>) -> Result<PresetDump, DecodeError> {
    let catalog = match frame.device {
        DeviceModel::Mpk261 => &MPK261_FULL,
        model => return Err(DecodeError::UnsupportedDevice { model }),
    };
    decode_preset_dump_with(frame, catalog)
}

/// Decode a validated frame against an explicit catalog.
///
/// All-or-nothing: any field failure aborts the decode with the
/// offending field's error, never a partially populated dump.
pub fn decode_preset_dump_with(
    frame: &ValidatedFrame<'_>,
    catalog: &Catalog,
) -> Result<PresetDump, DecodeError> {
    if frame.command != layout::CMD_PRESET_DUMP {
        return Err(DecodeError::UnsupportedCommand {
            command: frame.command,
        });
    }

    let reader = DumpReader::new(frame.bytes());

    let preset_id = reader.byte(&catalog.preset_id)?;
    if !(layout::PRESET_ID_MIN..=layout::PRESET_ID_MAX).contains(&preset_id) {
        return Err(DecodeError::InvalidPresetId { id: preset_id });
    }

    // Byte-to-char passthrough: names are expected, not guaranteed, to
    // be printable ASCII.
    let preset_name: String = reader
        .field(&catalog.preset_name, 0)?
        .iter()
        .map(|&b| char::from(b))
        .collect();

    let keyboard = {
        let window = reader.field(&catalog.keyboard, 0)?;
        KeyboardSpec {
            channel: window[0],
            octave: window[1],
            transpose: window[5],
            raw: window.to_vec(),
        }
    };

    let footswitch1 = read_footswitch(&reader, catalog, 0)?;
    let footswitch2 = read_footswitch(&reader, catalog, 1)?;

    let mut pads = Vec::with_capacity(layout::PAD_COUNT);
    for bank in 0..layout::PAD_BANKS {
        for pad in 0..layout::PADS_PER_BANK {
            let window = reader.field(&catalog.pads, bank * layout::PADS_PER_BANK + pad)?;
            pads.push(PadSpec {
                mode: window[0],
                channel: window[1],
                note: window[2],
                program: window[6],
                off_color: tables::pad_color(window[9])?.to_string(),
                on_color: tables::pad_color(window[10])?.to_string(),
            });
        }
    }

    let mut knobs = Vec::with_capacity(layout::CONTROL_COUNT);
    for i in 0..catalog.knobs.count {
        let window = reader.field(&catalog.knobs, i)?;
        knobs.push(KnobSpec {
            mode: window[0],
            channel: window[1],
            controller: window[2],
        });
    }

    let mut faders = Vec::with_capacity(layout::CONTROL_COUNT);
    for i in 0..catalog.faders.count {
        let window = reader.field(&catalog.faders, i)?;
        faders.push(FaderSpec {
            mode: window[0],
            channel: window[1],
            controller: window[2],
            min: window[3],
            max: window[4],
        });
    }

    let mut switches = Vec::with_capacity(layout::CONTROL_COUNT);
    for i in 0..catalog.switches.count {
        let window = reader.field(&catalog.switches, i)?;
        switches.push(SwitchSpec {
            mode: window[0],
            channel: window[1],
            controller: window[2],
            toggle_mode: window[3],
            program: window[4],
            note: window[8],
            velocity: window[9],
        });
    }

    let daw_controls = match &catalog.daw_controls {
        Some(spec) => {
            let mut controls = Vec::with_capacity(spec.count);
            for i in 0..spec.count {
                let window = reader.field(spec, i)?;
                controls.push(DawControlSpec {
                    button: tables::daw_button(i as u8)?.to_string(),
                    mode: window[0],
                    controller: window[2],
                    key1: window[11],
                    key2: window[12],
                });
            }
            Some(controls)
        }
        None => None,
    };

    let keyboard_split = match &catalog.split {
        Some(split) => {
            let options_a = reader.field(&split.options_a, 0)?;
            let options_b = reader.field(&split.options_b, 0)?;
            let mut options = Vec::with_capacity(layout::SPLIT_OPTION_COUNT);
            for i in 0..layout::SPLIT_OPTION_COUNT {
                options.push(SplitOption {
                    option: tables::split_option(i as u8)?.to_string(),
                    zone: split_zone(options_a[i] != 0, options_b[i] != 0),
                });
            }
            let config = reader.field(&split.config, 0)?;
            Some(KeyboardSplitSpec {
                options,
                split_on: config[0] != 0,
                split_key: config[1],
                zone_b_channel: config[2],
            })
        }
        None => None,
    };

    let misc = MiscSpec {
        reserved: reader.field(&catalog.reserved, 0)?.to_vec(),
        trailing: reader
            .trailing("trailing", catalog.trailing_offset)?
            .to_vec(),
    };

    Ok(PresetDump {
        preset_id,
        preset_name,
        keyboard,
        footswitch1,
        footswitch2,
        pads,
        knobs,
        faders,
        switches,
        daw_controls,
        keyboard_split,
        misc,
    })
}

fn read_footswitch(
    reader: &DumpReader<'_>,
    catalog: &Catalog,
    index: usize,
) -> Result<FootswitchSpec, DecodeError> {
    let window = reader.field(&catalog.footswitches, index)?;
    Ok(FootswitchSpec {
        mode: window[0],
        channel: window[1],
        controller: window[2],
    })
}

// The device reports the same label for both-enabled and both-disabled;
// observed encoding, kept as-is.
fn split_zone(a: bool, b: bool) -> SplitZone {
    match (a, b) {
        (true, false) => SplitZone::A,
        (false, true) => SplitZone::B,
        _ => SplitZone::Both,
    }
}

#[cfg(test)]
mod tests {
    use super::{decode, split_zone};
    use crate::SplitZone;
    use crate::sysex::codec::pack14;
    use crate::sysex::error::DecodeError;
    use crate::sysex::layout;

    fn empty_dump() -> Vec<u8> {
        let mut raw = vec![0u8; layout::FULL_DUMP_LEN];
        raw[..3].copy_from_slice(&layout::AKAI_HEADER);
        raw[layout::DEVICE_OFFSET] = layout::DEVICE_MPK261;
        raw[layout::COMMAND_OFFSET] = layout::CMD_PRESET_DUMP;
        let (hi, lo) = pack14((layout::FULL_DUMP_LEN - layout::FRAME_OVERHEAD) as u16);
        raw[layout::LENGTH_HI_OFFSET] = hi;
        raw[layout::LENGTH_LO_OFFSET] = lo;
        raw[layout::PRESET_ID_OFFSET] = 1;
        let last = raw.len() - 1;
        raw[last] = layout::SYSEX_END;
        raw
    }

    #[test]
    fn decodes_zero_filled_dump() {
        let dump = decode(&empty_dump()).unwrap();
        assert_eq!(dump.preset_id, 1);
        assert_eq!(dump.preset_name, "\0\0\0\0\0\0\0\0");
        assert_eq!(dump.pads.len(), 64);
        assert_eq!(dump.knobs.len(), 24);
        assert_eq!(dump.faders.len(), 24);
        assert_eq!(dump.switches.len(), 24);
        assert_eq!(dump.daw_controls.as_ref().unwrap().len(), 5);
        assert!(dump.keyboard_split.is_some());
    }

    #[test]
    fn rejects_preset_id_zero_and_thirty_one() {
        for id in [0u8, 31] {
            let mut raw = empty_dump();
            raw[layout::PRESET_ID_OFFSET] = id;
            let err = decode(&raw).unwrap_err();
            assert!(matches!(err, DecodeError::InvalidPresetId { id: got } if got == id));
        }
    }

    #[test]
    fn accepts_preset_id_bounds() {
        for id in [1u8, 30] {
            let mut raw = empty_dump();
            raw[layout::PRESET_ID_OFFSET] = id;
            assert_eq!(decode(&raw).unwrap().preset_id, id);
        }
    }

    #[test]
    fn rejects_unsupported_command() {
        let mut raw = empty_dump();
        raw[layout::COMMAND_OFFSET] = 0x11;
        let err = decode(&raw).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnsupportedCommand { command: 0x11 }
        ));
    }

    #[test]
    fn rejects_unknown_pad_color() {
        let mut raw = empty_dump();
        let window = crate::sysex::catalog::MPK261_FULL.pad_window(0, 0);
        raw[window.start + 9] = 0x11;
        let err = decode(&raw).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownCode {
                table: "pad colors",
                code: 0x11
            }
        ));
    }

    #[test]
    fn non_printable_name_bytes_pass_through() {
        let mut raw = empty_dump();
        raw[layout::PRESET_NAME_OFFSET] = 0x01;
        let dump = decode(&raw).unwrap();
        assert_eq!(dump.preset_name.chars().next(), Some('\u{1}'));
    }

    #[test]
    fn split_zone_tie_break() {
        assert_eq!(split_zone(true, true), SplitZone::Both);
        assert_eq!(split_zone(true, false), SplitZone::A);
        assert_eq!(split_zone(false, true), SplitZone::B);
        // Both disabled degenerates to the same label as both enabled.
        assert_eq!(split_zone(false, false), SplitZone::Both);
    }
}
