//! Frame accounting and byte geometry for MPK2 preset-dump messages.
//!
//! Offsets are relative to the start of the message (the `0xF0` SysEx
//! status byte). The data region runs from [`PRESET_ID_OFFSET`] up to,
//! but not including, the trailing `0xF7` terminator.

pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;

/// Akai manufacturer header: SysEx start + manufacturer id 0x47 0x00.
pub const AKAI_HEADER: [u8; 3] = [0xF0, 0x47, 0x00];

pub const DEVICE_OFFSET: usize = 3;
pub const COMMAND_OFFSET: usize = 4;
pub const LENGTH_HI_OFFSET: usize = 5;
pub const LENGTH_LO_OFFSET: usize = 6;

/// Bytes not counted by the declared length: header (3), device id,
/// command, two length bytes, and the terminator.
pub const FRAME_OVERHEAD: usize = 8;

pub const DEVICE_MPK249: u8 = 0x24;
pub const DEVICE_MPK261: u8 = 0x25;

pub const CMD_PRESET_DUMP: u8 = 0x10;

/// First byte of the data region; everything before it is framing.
pub const PRESET_ID_OFFSET: usize = 0x07;
pub const PRESET_ID_MIN: u8 = 1;
pub const PRESET_ID_MAX: u8 = 30;

pub const PRESET_NAME_OFFSET: usize = 0x08;
pub const PRESET_NAME_LEN: usize = 8;

pub const KEYBOARD_OFFSET: usize = 0x1D;
pub const KEYBOARD_LEN: usize = 21;

// The footswitch block is two 6-byte records at 0x32, but the sixth
// byte of each is constant padding and the second record's padding
// coincides with the first pad record. Windows are 5 bytes so the
// catalog stays disjoint.
pub const FOOTSWITCH_OFFSET: usize = 0x32;
pub const FOOTSWITCH_LEN: usize = 5;
pub const FOOTSWITCH_STRIDE: usize = 6;
pub const FOOTSWITCH_COUNT: usize = 2;

pub const PAD_OFFSET: usize = 0x3D;
pub const PAD_LEN: usize = 11;
pub const PAD_BANKS: usize = 4;
pub const PADS_PER_BANK: usize = 16;
pub const PAD_COUNT: usize = PAD_BANKS * PADS_PER_BANK;

pub const KNOB_OFFSET: usize = 0x2FD;
pub const KNOB_LEN: usize = 9;

pub const FADER_OFFSET: usize = 0x3D5;
pub const FADER_LEN: usize = 6;

pub const SWITCH_OFFSET: usize = 0x465;
pub const SWITCH_LEN: usize = 13;

/// Knobs, faders and switches each come in three banks of eight.
pub const CONTROL_COUNT: usize = 24;
pub const CONTROLS_PER_BANK: usize = 8;

pub const DAW_CONTROL_OFFSET: usize = 0x59D;
pub const DAW_CONTROL_LEN: usize = 13;
pub const DAW_CONTROL_COUNT: usize = 5;

pub const RESERVED_OFFSET: usize = 0x5DE;
pub const RESERVED_LEN: usize = 0x0B;

pub const SPLIT_OFFSET: usize = 0x5E9;
pub const SPLIT_OPTION_COUNT: usize = 7;
pub const SPLIT_CONFIG_LEN: usize = 3;

/// First unmodeled byte after the keyboard-split block.
pub const TRAILING_OFFSET: usize = SPLIT_OFFSET + 2 * SPLIT_OPTION_COUNT + SPLIT_CONFIG_LEN;

// Geometry of the older dump shape without DAW-control or split fields:
// everything past the switch table is one opaque window.
pub const BASE_RESERVED_OFFSET: usize = 0x59D;
pub const BASE_RESERVED_LEN: usize = 117;
pub const BASE_TRAILING_OFFSET: usize = BASE_RESERVED_OFFSET + BASE_RESERVED_LEN;

/// Total length of a full MPK261 preset dump, terminator included.
pub const FULL_DUMP_LEN: usize = BASE_TRAILING_OFFSET + 1;
