//! 7-bit-safe value packing and bank labelling.
//!
//! SysEx data bytes must not have the MSB set (`0xF7` terminates the
//! message), so values wider than 7 bits are split across two bytes.

/// Split a 14-bit value into MIDI-safe high and low bytes.
///
/// Both output bytes are always <= 0x7F.
///
/// # Examples
/// ```
/// use mpkdump_core::sysex::codec::pack14;
///
/// assert_eq!(pack14(1547), (0x0C, 0x0B));
/// ```
pub fn pack14(value: u16) -> (u8, u8) {
    (((value >> 7) & 0x7F) as u8, (value & 0x7F) as u8)
}

/// Join the high and low bytes of a 14-bit packed value.
///
/// Inverse of [`pack14`] for every value in `0..=16383`.
pub fn unpack14(hi: u8, lo: u8) -> u16 {
    ((u16::from(hi) & 0x7F) << 7) | (u16::from(lo) & 0x7F)
}

/// Bank letter for a zero-based group index: 0 -> 'A', 3 -> 'D'.
pub fn bank_letter(group: usize) -> char {
    char::from(b'A' + group as u8)
}

/// Bank letter and one-based in-bank position for a control index,
/// with eight controls per bank (knobs, faders, switches).
pub fn control_position(index: usize) -> (char, usize) {
    (bank_letter(index / 8), index % 8 + 1)
}

#[cfg(test)]
mod tests {
    use super::{bank_letter, control_position, pack14, unpack14};

    #[test]
    fn pack14_round_trips() {
        for value in 0..=16383u16 {
            let (hi, lo) = pack14(value);
            assert!(hi <= 0x7F);
            assert!(lo <= 0x7F);
            assert_eq!(unpack14(hi, lo), value);
        }
    }

    #[test]
    fn unpack14_masks_high_bits() {
        assert_eq!(unpack14(0xFF, 0xFF), 16383);
    }

    #[test]
    fn bank_letters() {
        assert_eq!(bank_letter(0), 'A');
        assert_eq!(bank_letter(2), 'C');
        assert_eq!(bank_letter(3), 'D');
    }

    #[test]
    fn control_positions() {
        assert_eq!(control_position(0), ('A', 1));
        assert_eq!(control_position(7), ('A', 8));
        assert_eq!(control_position(8), ('B', 1));
        assert_eq!(control_position(23), ('C', 8));
    }
}
