//! The field catalog: where every decoded field lives in the dump.
//!
//! A catalog is pure data; the parser walks it without per-field logic.
//! Supporting another dump shape means declaring another catalog, not
//! touching the decoder.

use std::ops::Range;

use super::layout;

/// One logical field: a byte window, repeated `count` times at `stride`
/// byte intervals for array fields.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub count: usize,
    pub stride: usize,
}

impl FieldSpec {
    pub const fn scalar(name: &'static str, offset: usize, width: usize) -> Self {
        Self {
            name,
            offset,
            width,
            count: 1,
            stride: 0,
        }
    }

    pub const fn array(
        name: &'static str,
        offset: usize,
        width: usize,
        count: usize,
        stride: usize,
    ) -> Self {
        Self {
            name,
            offset,
            width,
            count,
            stride,
        }
    }

    /// Byte window of instance `index`.
    pub fn window(&self, index: usize) -> Range<usize> {
        let start = self.offset + index * self.stride;
        start..start + self.width
    }
}

/// The keyboard-split block: two parallel option vectors plus the
/// split on/off, split key and zone-B channel configuration bytes.
#[derive(Debug, Clone, Copy)]
pub struct SplitFields {
    pub options_a: FieldSpec,
    pub options_b: FieldSpec,
    pub config: FieldSpec,
}

/// Full byte geometry of one preset-dump shape.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub name: &'static str,
    pub preset_id: FieldSpec,
    pub preset_name: FieldSpec,
    pub keyboard: FieldSpec,
    pub footswitches: FieldSpec,
    pub pads: FieldSpec,
    pub knobs: FieldSpec,
    pub faders: FieldSpec,
    pub switches: FieldSpec,
    pub daw_controls: Option<FieldSpec>,
    pub split: Option<SplitFields>,
    pub reserved: FieldSpec,
    /// Everything from here to the terminator is kept verbatim.
    pub trailing_offset: usize,
}

impl Catalog {
    /// Window of the pad record at (bank, pad-within-bank).
    pub fn pad_window(&self, bank: usize, pad: usize) -> Range<usize> {
        self.pads.window(bank * layout::PADS_PER_BANK + pad)
    }
}

const PRESET_ID: FieldSpec = FieldSpec::scalar("preset id", layout::PRESET_ID_OFFSET, 1);
const PRESET_NAME: FieldSpec = FieldSpec::scalar(
    "preset name",
    layout::PRESET_NAME_OFFSET,
    layout::PRESET_NAME_LEN,
);
const KEYBOARD: FieldSpec =
    FieldSpec::scalar("keyboard", layout::KEYBOARD_OFFSET, layout::KEYBOARD_LEN);
const FOOTSWITCHES: FieldSpec = FieldSpec::array(
    "footswitch",
    layout::FOOTSWITCH_OFFSET,
    layout::FOOTSWITCH_LEN,
    layout::FOOTSWITCH_COUNT,
    layout::FOOTSWITCH_STRIDE,
);
const PADS: FieldSpec = FieldSpec::array(
    "pad",
    layout::PAD_OFFSET,
    layout::PAD_LEN,
    layout::PAD_COUNT,
    layout::PAD_LEN,
);
const KNOBS: FieldSpec = FieldSpec::array(
    "knob",
    layout::KNOB_OFFSET,
    layout::KNOB_LEN,
    layout::CONTROL_COUNT,
    layout::KNOB_LEN,
);
const FADERS: FieldSpec = FieldSpec::array(
    "fader",
    layout::FADER_OFFSET,
    layout::FADER_LEN,
    layout::CONTROL_COUNT,
    layout::FADER_LEN,
);
const SWITCHES: FieldSpec = FieldSpec::array(
    "switch",
    layout::SWITCH_OFFSET,
    layout::SWITCH_LEN,
    layout::CONTROL_COUNT,
    layout::SWITCH_LEN,
);

/// MPK261 dump shape with DAW-control and keyboard-split fields.
pub static MPK261_FULL: Catalog = Catalog {
    name: "mpk261-full",
    preset_id: PRESET_ID,
    preset_name: PRESET_NAME,
    keyboard: KEYBOARD,
    footswitches: FOOTSWITCHES,
    pads: PADS,
    knobs: KNOBS,
    faders: FADERS,
    switches: SWITCHES,
    daw_controls: Some(FieldSpec::array(
        "DAW control",
        layout::DAW_CONTROL_OFFSET,
        layout::DAW_CONTROL_LEN,
        layout::DAW_CONTROL_COUNT,
        layout::DAW_CONTROL_LEN,
    )),
    split: Some(SplitFields {
        options_a: FieldSpec::scalar(
            "split A options",
            layout::SPLIT_OFFSET,
            layout::SPLIT_OPTION_COUNT,
        ),
        options_b: FieldSpec::scalar(
            "split B options",
            layout::SPLIT_OFFSET + layout::SPLIT_OPTION_COUNT,
            layout::SPLIT_OPTION_COUNT,
        ),
        config: FieldSpec::scalar(
            "split config",
            layout::SPLIT_OFFSET + 2 * layout::SPLIT_OPTION_COUNT,
            layout::SPLIT_CONFIG_LEN,
        ),
    }),
    reserved: FieldSpec::scalar("reserved", layout::RESERVED_OFFSET, layout::RESERVED_LEN),
    trailing_offset: layout::TRAILING_OFFSET,
};

/// Older dump shape without DAW-control or keyboard-split fields;
/// everything past the switch table is opaque. Which firmware emits
/// this shape is undocumented, so it stays a separate catalog.
pub static MPK261_BASE: Catalog = Catalog {
    name: "mpk261-base",
    preset_id: PRESET_ID,
    preset_name: PRESET_NAME,
    keyboard: KEYBOARD,
    footswitches: FOOTSWITCHES,
    pads: PADS,
    knobs: KNOBS,
    faders: FADERS,
    switches: SWITCHES,
    daw_controls: None,
    split: None,
    reserved: FieldSpec::scalar(
        "reserved",
        layout::BASE_RESERVED_OFFSET,
        layout::BASE_RESERVED_LEN,
    ),
    trailing_offset: layout::BASE_TRAILING_OFFSET,
};
