//! Byte-level codecs shared by the register types.
//!
//! The DS3231 stores calendar fields as packed binary-coded decimal and the
//! aging offset / temperature as two's complement bytes. Raw register bytes
//! are unsigned, so the signed conversions are done with explicit bit
//! manipulation instead of relying on `as` casts between signed types.

/// Packs a decimal value (0-99) into BCD: tens in bits 7:4, ones in bits 3:0.
///
/// No bounds checking is performed; values above 99 produce garbage.
#[must_use]
pub const fn decimal_to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Unpacks a BCD byte into its decimal value.
///
/// Callers are responsible for masking out control bits (mask bits, century,
/// DY/DT, ...) before decoding.
#[must_use]
pub const fn bcd_to_decimal(bcd: u8) -> u8 {
    10 * (bcd >> 4) + (bcd & 0x0F)
}

/// Returns `true` if both nibbles of `bcd` are decimal digits.
#[must_use]
pub const fn is_bcd(bcd: u8) -> bool {
    (bcd >> 4) <= 9 && (bcd & 0x0F) <= 9
}

/// Encodes a signed value into a two's complement register byte.
#[must_use]
pub fn encode_twos_complement(value: i8) -> u8 {
    if value < 0 {
        // -128 has no positive i8 counterpart, widen before negating
        let magnitude = u8::try_from(-i16::from(value)).unwrap_or(0x80);
        (!magnitude).wrapping_add(1)
    } else {
        value.unsigned_abs()
    }
}

/// Decodes a two's complement register byte, sign extending when bit 7 is set.
#[must_use]
pub fn decode_twos_complement(raw: u8) -> i8 {
    let widened = i16::from(raw);
    let value = if raw & 0x80 != 0 {
        widened | !0xFF
    } else {
        widened
    };
    i8::try_from(value).unwrap_or(i8::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_to_bcd() {
        assert_eq!(decimal_to_bcd(0), 0x00);
        assert_eq!(decimal_to_bcd(9), 0x09);
        assert_eq!(decimal_to_bcd(10), 0x10);
        assert_eq!(decimal_to_bcd(59), 0x59);
        assert_eq!(decimal_to_bcd(99), 0x99);
    }

    #[test]
    fn test_bcd_to_decimal() {
        assert_eq!(bcd_to_decimal(0x00), 0);
        assert_eq!(bcd_to_decimal(0x31), 31);
        assert_eq!(bcd_to_decimal(0x99), 99);
        // Not valid BCD, but the arithmetic is still defined
        assert_eq!(bcd_to_decimal(0x6A), 70);
    }

    #[test]
    fn test_bcd_is_inverse_over_full_range() {
        for value in 0..=99u8 {
            let bcd = decimal_to_bcd(value);
            assert!(is_bcd(bcd));
            assert_eq!(bcd_to_decimal(bcd), value);
            assert_eq!(decimal_to_bcd(bcd_to_decimal(bcd)), bcd);
        }
    }

    #[test]
    fn test_is_bcd_rejects_hex_digits() {
        assert!(!is_bcd(0x0A));
        assert!(!is_bcd(0xA0));
        assert!(!is_bcd(0x5F));
        assert!(is_bcd(0x59));
    }

    #[test]
    fn test_twos_complement_encode() {
        assert_eq!(encode_twos_complement(0), 0x00);
        assert_eq!(encode_twos_complement(5), 0x05);
        assert_eq!(encode_twos_complement(-5), 0xFB);
        assert_eq!(encode_twos_complement(-10), 0xF6);
        assert_eq!(encode_twos_complement(127), 0x7F);
        assert_eq!(encode_twos_complement(-128), 0x80);
    }

    #[test]
    fn test_twos_complement_decode() {
        assert_eq!(decode_twos_complement(0x00), 0);
        assert_eq!(decode_twos_complement(0x05), 5);
        assert_eq!(decode_twos_complement(0xFB), -5);
        assert_eq!(decode_twos_complement(0xE0), -32);
        assert_eq!(decode_twos_complement(0x7F), 127);
        assert_eq!(decode_twos_complement(0x80), -128);
        assert_eq!(decode_twos_complement(0xFF), -1);
    }

    #[test]
    fn test_twos_complement_every_value() {
        for value in i8::MIN..=i8::MAX {
            assert_eq!(decode_twos_complement(encode_twos_complement(value)), value);
        }
    }
}
