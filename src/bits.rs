/// Set bit `bit` of `x` on if `toggle` is true, otherwise off.
pub fn bit(bit: u32, x: u32, toggle: bool) -> u32 {
    if toggle {
        x | (1 << bit)
    } else {
        x & !(1 << bit)
    }
}

/// Test whether bit `bit` of `x` is set.
pub fn test_bit(bit: u32, x: u32) -> bool {
    (x >> bit) & 1 == 1
}

/// Mask covering the low `width` bits.
fn mask(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Extract the `width`-bit field of `x` starting at bit `shift`.
pub fn field(x: u32, shift: u32, width: u32) -> u32 {
    (x >> shift) & mask(width)
}

/// Replace the `width`-bit field of `x` starting at bit `shift` with `value`.
///
/// Bits of `value` above `width` are discarded; bits of `x` outside the field are kept.
pub fn set_field(x: u32, shift: u32, width: u32, value: u32) -> u32 {
    let m = mask(width) << shift;
    (x & !m) | ((value << shift) & m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_toggle() {
        assert_eq!(bit(8, 0, true), 0x100);
        assert_eq!(bit(8, 0xffff, false), 0xfeff);
        assert!(test_bit(8, 0x100));
        assert!(!test_bit(7, 0x100));
    }

    #[test]
    fn test_field_extract() {
        assert_eq!(field(0x8000_0a11, 16, 16), 0x8000);
        assert_eq!(field(0x8000_0a11, 9, 7), 0x05);
        assert_eq!(field(0x8000_0a11, 0, 8), 0x11);
        assert_eq!(field(0xdead_beef, 0, 32), 0xdead_beef);
    }

    #[test]
    fn test_set_field_keeps_neighbours() {
        let x = set_field(0x8000_0a11, 0, 8, 0x20);
        assert_eq!(x, 0x8000_0a20);
        let x = set_field(x, 8, 24, 0x80_0c01);
        assert_eq!(x, 0x800c_0120);
        // Oversized values are truncated to the field.
        assert_eq!(set_field(0, 0, 8, 0x1ff), 0xff);
    }
}
