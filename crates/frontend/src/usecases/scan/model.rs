//! Scan simulation. The outcome is a pure function of the scanned code,
//! so the station behaves the same on every run; the async wrapper only
//! adds the device round-trip delay.

use gloo_timers::future::TimeoutFuture;

/// Simulated device round-trip.
pub const SCAN_DELAY_MS: u32 = 1500;

/// Most recent results kept in the station log.
pub const SCAN_LOG_CAP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Success,
    Failure,
}

/// One settled scan attempt, newest first in the station log.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRecord {
    pub id: String,
    pub code: String,
    pub status: ScanStatus,
    pub message: String,
    pub timestamp: String,
}

/// Decides the outcome of scanning `code`. Failure cases are fixed
/// sentinels so the station can be demonstrated reliably.
pub fn classify_scan(code: &str) -> Result<String, String> {
    let code = code.trim();
    if code.is_empty() {
        return Err("No barcode detected. Position the package and try again.".to_string());
    }
    if code.eq_ignore_ascii_case("PKG-404") {
        return Err(format!("Package {} not found in the system.", code));
    }
    if code.to_ascii_uppercase().contains("ERR") {
        return Err(format!("Scan failed for {}. The label may be damaged.", code));
    }
    Ok(format!("Package {} scanned successfully.", code))
}

/// Runs one scan against the simulated device.
pub async fn simulate_scan(code: String) -> Result<String, String> {
    TimeoutFuture::new(SCAN_DELAY_MS).await;
    classify_scan(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_code_succeeds() {
        let result = classify_scan("PKG-001");
        assert_eq!(result, Ok("Package PKG-001 scanned successfully.".to_string()));
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        assert!(classify_scan("   ").is_err());
        assert!(classify_scan("").is_err());
    }

    #[test]
    fn unknown_package_sentinel_fails() {
        assert!(classify_scan("PKG-404").is_err());
        assert!(classify_scan("pkg-404").is_err());
    }

    #[test]
    fn damaged_label_sentinel_fails_case_insensitively() {
        assert!(classify_scan("PKG-ERR-7").is_err());
        assert!(classify_scan("pkg-err-7").is_err());
    }

    #[test]
    fn code_is_trimmed_before_classification() {
        let result = classify_scan("  PKG-002  ");
        assert_eq!(result, Ok("Package PKG-002 scanned successfully.".to_string()));
    }
}
