//! Regenerates the synthetic `.syx` fixtures under `tests/fixtures/`.
//!
//! Run from the repository root: `cargo run --bin syx_fixtures`.

use std::fs;
use std::path::{Path, PathBuf};

use mpkdump_core::sysex::codec::pack14;
use mpkdump_core::sysex::layout;

fn main() -> Result<(), String> {
    let root = PathBuf::from("tests").join("fixtures");
    write_fixture(&root.join("preset05.syx"), preset_dump(5, b"TestPre "))?;
    Ok(())
}

/// A zero-filled but frame-consistent MPK261 preset dump.
fn preset_dump(preset_id: u8, name: &[u8; layout::PRESET_NAME_LEN]) -> Vec<u8> {
    let mut raw = vec![0u8; layout::FULL_DUMP_LEN];
    raw[..3].copy_from_slice(&layout::AKAI_HEADER);
    raw[layout::DEVICE_OFFSET] = layout::DEVICE_MPK261;
    raw[layout::COMMAND_OFFSET] = layout::CMD_PRESET_DUMP;
    let (hi, lo) = pack14((layout::FULL_DUMP_LEN - layout::FRAME_OVERHEAD) as u16);
    raw[layout::LENGTH_HI_OFFSET] = hi;
    raw[layout::LENGTH_LO_OFFSET] = lo;
    raw[layout::PRESET_ID_OFFSET] = preset_id;
    raw[layout::PRESET_NAME_OFFSET..layout::PRESET_NAME_OFFSET + layout::PRESET_NAME_LEN]
        .copy_from_slice(name);
    let last = raw.len() - 1;
    raw[last] = layout::SYSEX_END;
    raw
}

fn write_fixture(path: &Path, bytes: Vec<u8>) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create {}: {}", parent.display(), err))?;
    }
    fs::write(path, bytes).map_err(|err| format!("failed to write {}: {}", path.display(), err))?;
    println!("wrote {}", path.display());
    Ok(())
}
