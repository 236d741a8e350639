use std::fmt::Display;

/// Width the original program assumed for every character of a text file.
pub const BITS_PER_CHARACTER: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    pub original_bits: usize,
    pub encoded_bits: usize,
    pub decoded_bits: usize,
    pub decoded_matches_original: bool,
}

impl CompressionReport {
    pub fn new(original: &str, encoded: &str, decoded: &str) -> Self {
        Self {
            original_bits: Self::character_bits(original),
            encoded_bits: encoded.chars().filter(|&c| c == '0' || c == '1').count(),
            decoded_bits: Self::character_bits(decoded),
            decoded_matches_original: original == decoded,
        }
    }

    fn character_bits(text: &str) -> usize {
        text.chars().count() * BITS_PER_CHARACTER
    }

    /// Original size relative to the encoded size, in percent.
    ///
    /// `None` if nothing was encoded.
    pub fn compression_percentage(&self) -> Option<f64> {
        if self.encoded_bits == 0 {
            return None;
        }
        Some(self.original_bits as f64 / self.encoded_bits as f64 * 100.0)
    }
}

impl Display for CompressionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of bits in original file: {}", self.original_bits)?;
        writeln!(f, "Number of bits in encoded file: {}", self.encoded_bits)?;
        writeln!(f, "Number of bits in decoded file: {}", self.decoded_bits)?;
        writeln!(
            f,
            "Decoded file matches original file: {}",
            self.decoded_matches_original
        )?;
        match self.compression_percentage() {
            Some(percentage) => write!(f, "Percentage of compression: {:.5}%", percentage),
            None => write!(f, "Percentage of compression: n/a"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::CompressionReport;

    #[test]
    fn test_report_counts_bits() {
        let report = CompressionReport::new("aabbbc\nab", "111100010\n110", "aabbbc\nab");
        assert_eq!(report.original_bits, 9 * 16);
        assert_eq!(report.encoded_bits, 12);
        assert_eq!(report.decoded_bits, 9 * 16);
        assert!(report.decoded_matches_original);
        assert_eq!(report.compression_percentage(), Some(1200.0));
    }

    #[test]
    fn test_report_detects_mismatch() {
        let report = CompressionReport::new("abc", "0", "ab");
        assert!(!report.decoded_matches_original);
    }

    #[test]
    fn test_empty_encoding_has_no_percentage() {
        let report = CompressionReport::new("\n", "\n", "\n");
        assert_eq!(report.compression_percentage(), None);
        assert!(report.to_string().ends_with("n/a"));
    }
}
