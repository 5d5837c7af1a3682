//! Size-reduction reporting shared by all three operations.
//!
//! Sizes are measured in mebibytes (bytes / 1,048,576) and rendered to two
//! decimal places; the reduction percentage is rendered to one.

use std::path::Path;

use crate::error::ReportError;

const BYTES_PER_MIB: f64 = 1_048_576.0;

/// Byte sizes of source and destination, plus the computed reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReport {
    pub original_mib: f64,
    pub new_mib: f64,
    pub reduction_pct: f64,
}

/// Compute the size reduction between a source and destination byte count.
///
/// A zero-byte source has no meaningful reduction and is reported as an
/// explicit error rather than a division-by-zero fault.
pub fn size_reduction(original_bytes: u64, new_bytes: u64) -> Result<SizeReport, ReportError> {
    if original_bytes == 0 {
        return Err(ReportError::EmptySource);
    }

    let original_mib = original_bytes as f64 / BYTES_PER_MIB;
    let new_mib = new_bytes as f64 / BYTES_PER_MIB;
    let reduction_pct = (original_mib - new_mib) / original_mib * 100.0;

    Ok(SizeReport {
        original_mib,
        new_mib,
        reduction_pct,
    })
}

/// Measure the two files on disk and compute their size reduction.
///
/// Called only after the destination has been written successfully.
pub fn measure(input: &Path, output: &Path) -> Result<SizeReport, ReportError> {
    let original_bytes = std::fs::metadata(input)?.len();
    let new_bytes = std::fs::metadata(output)?.len();
    size_reduction(original_bytes, new_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_reduction() {
        // 10.00 MB down to 7.50 MB is a 25.0% reduction
        let report = size_reduction(10 * 1_048_576, 7_864_320).unwrap();
        assert!((report.original_mib - 10.0).abs() < 1e-9);
        assert!((report.new_mib - 7.5).abs() < 1e-9);
        assert!((report.reduction_pct - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_reduction() {
        let report = size_reduction(1_048_576, 1_048_576).unwrap();
        assert_eq!(report.reduction_pct, 0.0);
    }

    #[test]
    fn test_growth_is_negative_reduction() {
        let report = size_reduction(1_048_576, 2_097_152).unwrap();
        assert!(report.reduction_pct < 0.0);
    }

    #[test]
    fn test_zero_byte_source_is_an_error() {
        let err = size_reduction(0, 100).unwrap_err();
        assert!(err.to_string().contains("zero-byte source"));
    }
}
