//! Status line text
//!
//! Fixed-capacity strings for the text the firmware refreshes on screen.

use core::fmt::{self, Write};

use heapless::String;

/// Capacity of the uptime line: "Up " plus a `u64` plus "s"
pub const UPTIME_LINE_LEN: usize = 24;

/// Format an uptime in seconds as `"Up 42s"`
pub fn uptime_line(secs: u64) -> Result<String<UPTIME_LINE_LEN>, fmt::Error> {
    let mut line = String::new();
    write!(line, "Up {}s", secs)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_line() {
        assert_eq!(uptime_line(0).unwrap().as_str(), "Up 0s");
        assert_eq!(uptime_line(3_600).unwrap().as_str(), "Up 3600s");
    }

    #[test]
    fn test_uptime_line_fits_largest_count() {
        let line = uptime_line(u64::MAX).unwrap();
        assert_eq!(line.as_str(), "Up 18446744073709551615s");
        assert_eq!(line.len(), UPTIME_LINE_LEN);
    }
}
