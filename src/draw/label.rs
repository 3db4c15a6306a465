//! Fixed-capacity measurement label formatting.

use std::fmt::{self, Write};

/// Capacity of the label buffer in bytes.
///
/// Large enough for any on-screen measurement ("99999 x 99999" is 13 bytes).
pub const LABEL_CAPACITY: usize = 32;

/// A `"width x height"` label formatted into a fixed-capacity buffer.
///
/// Formatting never allocates and never overflows: output beyond
/// [`LABEL_CAPACITY`] bytes is truncated at a character boundary.
#[derive(Debug, Clone, Copy)]
pub struct MeasureLabel {
    buf: [u8; LABEL_CAPACITY],
    len: usize,
}

impl MeasureLabel {
    /// Formats the given magnitudes as `"<width> x <height>"`, both rounded
    /// to the nearest integer.
    pub fn format(width: f64, height: f64) -> Self {
        let mut label = Self {
            buf: [0; LABEL_CAPACITY],
            len: 0,
        };
        // Truncation is acceptable output, not an error.
        let _ = write!(label, "{:.0} x {:.0}", width, height);
        label
    }

    /// Returns the formatted label text.
    pub fn as_str(&self) -> &str {
        // Writes only ever stop at character boundaries, so this cannot fail
        // for content produced by `format`; fall back to empty rather than
        // panicking in the render path.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Length of the formatted text in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when nothing was written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Write for MeasureLabel {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let available = LABEL_CAPACITY - self.len;
        let mut take = s.len().min(available);
        while take > 0 && !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rounded_magnitudes() {
        let label = MeasureLabel::format(50.0, 20.0);
        assert_eq!(label.as_str(), "50 x 20");
        assert_eq!(label.len(), 7);
    }

    #[test]
    fn zero_delta_formats_as_zero_by_zero() {
        let label = MeasureLabel::format(0.0, 0.0);
        assert_eq!(label.as_str(), "0 x 0");
    }

    #[test]
    fn five_digit_values_fit() {
        let label = MeasureLabel::format(12345.0, 54321.0);
        assert_eq!(label.as_str(), "12345 x 54321");
        assert!(label.len() <= LABEL_CAPACITY);
    }

    #[test]
    fn oversized_values_truncate_without_overflow() {
        let label = MeasureLabel::format(1.0e300, 1.0e300);
        assert_eq!(label.len(), LABEL_CAPACITY);
        assert_eq!(label.as_str().len(), LABEL_CAPACITY);
        // Truncated output is still the prefix of the full rendering.
        assert!(label.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn fractional_values_round_to_nearest_integer() {
        let label = MeasureLabel::format(49.7, 20.2);
        assert_eq!(label.as_str(), "50 x 20");
    }
}
