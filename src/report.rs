//! Peak-to-peak report formatting.
//!
//! One bare decimal integer per sampling window, CRLF-terminated. This
//! is the program's only data output; diagnostics from the log queue
//! are prefixed so a consumer can keep the report stream machine-
//! readable.

use crate::logging::{format_to_buffer, LogRecord};

/// Bytes needed for the longest report line (`u32::MAX` + CRLF).
pub const REPORT_LINE_MAX: usize = 12;

/// Format one report line into `buf`, returning the byte count.
pub fn format_report(buf: &mut [u8], peak_to_peak: u32) -> usize {
    format_to_buffer(buf, format_args!("{}\r\n", peak_to_peak))
}

/// Format a drained log record: `# [timestamp_ms] LEVEL: message`.
pub fn format_log_line(buf: &mut [u8], record: &LogRecord) -> usize {
    let msg = core::str::from_utf8(&record.msg[..record.len as usize]).unwrap_or("<invalid utf8>");
    format_to_buffer(
        buf,
        format_args!(
            "# [{:8}] {}: {}\r\n",
            record.timestamp_ms,
            record.level.as_str(),
            msg
        ),
    )
}
