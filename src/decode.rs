//! Bit-frame decoding primitives.
//!
//! Stateless conversion of raw line fragments into normalized values. The
//! upstream serial link is noisy and gives no framing guarantee beyond "a
//! line", so every function here is **total**: short lines, stray bytes and
//! NUL padding all decode to something, never to an error. Out-of-range
//! button positions read as released; an axis field that cannot be parsed
//! decodes to exactly `0.0`.

use crate::layout::{AxisEncoding, AxisFrame};

/// Reads one button flag: true iff the byte at `bit` is ASCII `'1'`.
#[inline]
pub fn decode_button(line: &str, bit: usize) -> bool {
    line.as_bytes().get(bit) == Some(&b'1')
}

/// Decodes one axis field to a normalized value.
///
/// The `frame.width` characters starting at `frame.offset` are read as a
/// base-2 integer; any character other than `'1'` counts as a zero bit. A
/// field lying entirely past the end of the line decodes to `0.0`. The raw
/// integer is normalized against `base` per `encoding`, and a result that is
/// exactly zero is returned before inversion so a centered axis never comes
/// out as `-0.0`.
///
/// Values are not clamped; calibrated layouts keep results in `[-1.0, 1.0]`.
pub fn decode_axis(line: &str, frame: &AxisFrame, base: u32, encoding: AxisEncoding) -> f32 {
    let Some((raw, bits_read)) = read_field(line.as_bytes(), frame.offset, frame.width) else {
        return 0.0;
    };
    if base == 0 {
        // Normalizing against 0 has no meaning; report center.
        return 0.0;
    }

    let value = match encoding {
        AxisEncoding::OffsetBinary => (raw as f32 - base as f32) / base as f32,
        AxisEncoding::TwosComplement => sign_extend(raw, bits_read) as f32 / base as f32,
    };

    if value == 0.0 {
        return 0.0;
    }
    if frame.invert {
        -value
    } else {
        value
    }
}

/// Parses up to `width` characters at `offset` as base-2.
///
/// Returns the raw value and the number of characters actually read, or
/// `None` when the field starts past the end of the line. A line shorter
/// than `offset + width` yields the bits that are present, matching how the
/// adapters truncate a frame mid-transmission.
fn read_field(line: &[u8], offset: usize, width: usize) -> Option<(u32, u32)> {
    if offset >= line.len() || width == 0 {
        return None;
    }
    let end = line.len().min(offset.saturating_add(width));
    let field = &line[offset..end];

    let mut raw: u32 = 0;
    for &byte in field {
        raw = (raw << 1) | u32::from(byte == b'1');
    }
    Some((raw, field.len() as u32))
}

/// Reinterprets `raw` as a signed integer of `bits` bits.
fn sign_extend(raw: u32, bits: u32) -> i32 {
    if bits == 0 || bits >= 32 {
        return raw as i32;
    }
    let sign = 1u32 << (bits - 1);
    if raw & sign != 0 {
        (raw as i64 - (1i64 << bits)) as i32
    } else {
        raw as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(offset: usize, width: usize, invert: bool) -> AxisFrame {
        AxisFrame {
            offset,
            width,
            invert,
        }
    }

    /// Builds a line of `len` zeros with `raw` written as binary at `offset`.
    fn line_with_field(len: usize, offset: usize, width: usize, raw: u32) -> String {
        let mut chars = vec![b'0'; len];
        for i in 0..width {
            if raw & (1 << (width - 1 - i)) != 0 {
                chars[offset + i] = b'1';
            }
        }
        String::from_utf8(chars).unwrap()
    }

    #[test]
    fn button_reads_exact_character() {
        assert!(decode_button("001", 2));
        assert!(!decode_button("001", 0));
        assert!(!decode_button("0x1", 1));
        // Out of range is released, not an error.
        assert!(!decode_button("001", 3));
        assert!(!decode_button("", 0));
    }

    #[test]
    fn button_is_idempotent() {
        let line = "10101";
        for _ in 0..3 {
            assert!(decode_button(line, 0));
            assert!(!decode_button(line, 1));
        }
    }

    #[test]
    fn base_value_decodes_to_exact_zero() {
        let line = line_with_field(16, 4, 8, 128);
        let f = frame(4, 8, false);
        assert_eq!(decode_axis(&line, &f, 128, AxisEncoding::OffsetBinary), 0.0);
        // Inversion never applies to a centered axis.
        let f = frame(4, 8, true);
        let v = decode_axis(&line, &f, 128, AxisEncoding::OffsetBinary);
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive());
    }

    #[test]
    fn double_base_decodes_to_one() {
        let line = line_with_field(16, 0, 9, 256);
        assert_eq!(
            decode_axis(&line, &frame(0, 9, false), 128, AxisEncoding::OffsetBinary),
            1.0
        );
        assert_eq!(
            decode_axis(&line, &frame(0, 9, true), 128, AxisEncoding::OffsetBinary),
            -1.0
        );
    }

    #[test]
    fn full_scale_eight_bit_field() {
        let line = line_with_field(8, 0, 8, 255);
        let v = decode_axis(&line, &frame(0, 8, false), 128, AxisEncoding::OffsetBinary);
        assert_eq!(v, 127.0 / 128.0);
    }

    #[test]
    fn monotone_in_raw_value() {
        let f = frame(0, 8, false);
        let mut prev = f32::NEG_INFINITY;
        for raw in 0..=255u32 {
            let line = line_with_field(8, 0, 8, raw);
            let v = decode_axis(&line, &f, 128, AxisEncoding::OffsetBinary);
            assert!(v >= prev, "raw {raw} decoded below its predecessor");
            prev = v;
        }
    }

    #[test]
    fn noise_counts_as_zero_bits() {
        // 1x1\0 parses as 1010.
        let v = decode_axis("1x1\0", &frame(0, 4, false), 4, AxisEncoding::OffsetBinary);
        assert_eq!(v, (10.0 - 4.0) / 4.0);
    }

    #[test]
    fn field_past_line_end_is_neutral() {
        let f = frame(10, 8, false);
        assert_eq!(decode_axis("0101", &f, 128, AxisEncoding::OffsetBinary), 0.0);
        assert_eq!(decode_axis("", &f, 128, AxisEncoding::OffsetBinary), 0.0);
    }

    #[test]
    fn truncated_field_parses_available_bits() {
        // Only 4 of 8 field characters arrive: 1111 -> 15.
        let line = line_with_field(4, 0, 4, 15);
        let v = decode_axis(&line, &frame(0, 8, false), 128, AxisEncoding::OffsetBinary);
        assert_eq!(v, (15.0 - 128.0) / 128.0);
    }

    #[test]
    fn zero_base_is_neutral_not_nan() {
        let line = line_with_field(8, 0, 8, 200);
        let v = decode_axis(&line, &frame(0, 8, false), 0, AxisEncoding::OffsetBinary);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn twos_complement_center_and_extremes() {
        let f = frame(0, 8, false);
        let center = line_with_field(8, 0, 8, 0);
        assert_eq!(
            decode_axis(&center, &f, 128, AxisEncoding::TwosComplement),
            0.0
        );

        let max = line_with_field(8, 0, 8, 127);
        assert_eq!(
            decode_axis(&max, &f, 128, AxisEncoding::TwosComplement),
            127.0 / 128.0
        );

        let min = line_with_field(8, 0, 8, 0x80);
        assert_eq!(
            decode_axis(&min, &f, 128, AxisEncoding::TwosComplement),
            -1.0
        );
    }

    #[test]
    fn twos_complement_respects_inversion() {
        let f = frame(0, 8, true);
        let min = line_with_field(8, 0, 8, 0x80);
        assert_eq!(decode_axis(&min, &f, 128, AxisEncoding::TwosComplement), 1.0);
    }
}
