//! Non-blocking diagnostics queue.
//!
//! The control loop must not stall on the serial link while it is
//! busy-waiting a sampling window, so log records go into a fixed ring
//! and get drained to the console once per loop turn. Push never
//! blocks; when the ring is full the record is dropped and counted.
//!
//! Single producer (the loop), single consumer (the drain at the end of
//! the same loop turn, or the render core during bring-up).

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, Ordering};

/// Maximum message length in bytes.
pub const MAX_MSG_LEN: usize = 96;

/// Ring capacity (records). Must be a power of two.
pub const LOG_QUEUE_SIZE: usize = 64;

/// Log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// One queued log record.
#[derive(Clone, Copy)]
pub struct LogRecord {
    /// Milliseconds since boot at push time.
    pub timestamp_ms: u32,
    pub level: LogLevel,
    /// Message length in bytes.
    pub len: u8,
    /// Message bytes (not null-terminated).
    pub msg: [u8; MAX_MSG_LEN],
}

impl Default for LogRecord {
    fn default() -> Self {
        Self {
            timestamp_ms: 0,
            level: LogLevel::Info,
            len: 0,
            msg: [0; MAX_MSG_LEN],
        }
    }
}

/// Fixed-size SPSC log ring.
pub struct LogQueue<const N: usize = LOG_QUEUE_SIZE> {
    records: UnsafeCell<[LogRecord; N]>,
    write_idx: AtomicU32,
    read_idx: AtomicU32,
    dropped: AtomicU32,
}

// SAFETY: single producer, single consumer; write_idx is published with
// Release after the record is written and observed with Acquire.
unsafe impl<const N: usize> Sync for LogQueue<N> {}
unsafe impl<const N: usize> Send for LogQueue<N> {}

impl<const N: usize> LogQueue<N> {
    const MASK: usize = N - 1;

    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "log queue size must be a power of 2");

        Self {
            records: UnsafeCell::new(
                [LogRecord {
                    timestamp_ms: 0,
                    level: LogLevel::Info,
                    len: 0,
                    msg: [0; MAX_MSG_LEN],
                }; N],
            ),
            write_idx: AtomicU32::new(0),
            read_idx: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Queue a record. Returns `false` (and counts a drop) if the ring
    /// is full. Never blocks.
    #[inline]
    pub fn push(&self, timestamp_ms: u32, level: LogLevel, msg: &[u8]) -> bool {
        let write = self.write_idx.load(Ordering::Relaxed);
        let read = self.read_idx.load(Ordering::Acquire);

        if write.wrapping_sub(read) >= N as u32 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }

        let idx = (write as usize) & Self::MASK;

        // SAFETY: single producer; slot is unreachable by the consumer
        // until write_idx is published below.
        unsafe {
            let record = &mut (*self.records.get())[idx];
            record.timestamp_ms = timestamp_ms;
            record.level = level;
            record.len = msg.len().min(MAX_MSG_LEN) as u8;
            record.msg[..record.len as usize].copy_from_slice(&msg[..record.len as usize]);
        }

        self.write_idx.store(write.wrapping_add(1), Ordering::Release);
        true
    }

    /// Take the oldest record, if any.
    #[inline]
    pub fn pop(&self) -> Option<LogRecord> {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);

        if read == write {
            return None;
        }

        let idx = (read as usize) & Self::MASK;

        // SAFETY: single consumer, slot published by the producer.
        let record = unsafe { (*self.records.get())[idx] };

        self.read_idx.store(read.wrapping_add(1), Ordering::Release);
        Some(record)
    }

    /// Records dropped since the last [`reset_dropped`](Self::reset_dropped).
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn reset_dropped(&self) {
        self.dropped.store(0, Ordering::Relaxed);
    }

    /// Records waiting to be drained.
    #[inline]
    pub fn pending(&self) -> u32 {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);
        write.wrapping_sub(read)
    }
}

impl<const N: usize> Default for LogQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Format arguments into a byte buffer, truncating on overflow.
///
/// Returns the number of bytes written.
#[inline]
pub fn format_to_buffer(buf: &mut [u8], args: core::fmt::Arguments<'_>) -> usize {
    use core::fmt::Write;

    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl<'a> Write for BufWriter<'a> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let remaining = self.buf.len() - self.pos;
            let to_write = bytes.len().min(remaining);
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };
    let _ = core::fmt::write(&mut writer, args);
    writer.pos
}

/// Queue a formatted record at an explicit level.
#[macro_export]
macro_rules! log_at {
    ($level:expr, $queue:expr, $timestamp:expr, $($arg:tt)*) => {{
        let mut buf = [0u8; $crate::logging::MAX_MSG_LEN];
        let len = $crate::logging::format_to_buffer(&mut buf, format_args!($($arg)*));
        $queue.push($timestamp, $level, &buf[..len]);
    }};
}

#[macro_export]
macro_rules! log_error {
    ($queue:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::LogLevel::Error, $queue, $timestamp, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($queue:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::LogLevel::Warn, $queue, $timestamp, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($queue:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::LogLevel::Info, $queue, $timestamp, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($queue:expr, $timestamp:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::LogLevel::Debug, $queue, $timestamp, $($arg)*)
    };
}
