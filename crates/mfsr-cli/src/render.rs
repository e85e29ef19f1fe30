//! Text rendering of register contents.

use mfsr_core::RegisterWord;

/// Binary digits, most significant first, grouped in nibbles.
///
/// ```
/// use mfsr_cli::render_binary;
///
/// assert_eq!(render_binary(0x95C1u16), "1001 0101 1100 0001");
/// ```
pub fn render_binary<W: RegisterWord>(value: W) -> String {
    let digits = format!("{:0width$b}", value, width = W::BITS as usize);
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(digit);
    }
    out
}

/// Feedback bits as a run of `0` and `1`.
pub fn render_bits(bits: impl IntoIterator<Item = bool>) -> String {
    bits.into_iter().map(|b| if b { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibble_groups() {
        assert_eq!(render_binary(0x0000u16), "0000 0000 0000 0000");
        assert_eq!(render_binary(0x4AE0u16), "0100 1010 1110 0000");
        assert_eq!(render_binary(0x5Au8), "0101 1010");
        assert_eq!(
            render_binary(u32::MAX),
            "1111 1111 1111 1111 1111 1111 1111 1111"
        );
    }

    #[test]
    fn leading_zeros_are_kept() {
        assert_eq!(render_binary(1u8), "0000 0001");
        assert_eq!(render_binary(1u64).len(), 64 + 15);
    }

    #[test]
    fn bit_runs() {
        assert_eq!(render_bits([false, true, true]), "011");
        assert_eq!(render_bits(std::iter::empty()), "");
    }
}
