//! Serial console output (ESP-IDF only).
//!
//! TX-only UART carrying the report stream plus drained diagnostics.
//! UART1 on a spare pin keeps the link free of the boot console's
//! chatter; hook a USB-UART adapter (CH340, CP2102, ...) to it.

use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::uart::{self, UartTxDriver};
use esp_idf_svc::sys::EspError;

use crate::config::SERIAL_BAUD;
use crate::logging::LogQueue;
use crate::report::{format_log_line, format_report, REPORT_LINE_MAX};

/// Open UART1 TX-only at the configured baud rate.
pub fn init_serial<'d>(
    uart: impl Peripheral<P = esp_idf_svc::hal::uart::UART1> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
) -> Result<UartTxDriver<'d>, EspError> {
    let uart_config =
        uart::config::Config::default().baudrate(esp_idf_svc::hal::units::Hertz(SERIAL_BAUD));

    UartTxDriver::new(
        uart,
        tx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )
}

/// Write one bare peak-to-peak report line.
pub fn write_report(uart: &mut UartTxDriver<'_>, peak_to_peak: u32) {
    let mut buf = [0u8; REPORT_LINE_MAX];
    let len = format_report(&mut buf, peak_to_peak);
    let _ = uart.write(&buf[..len]);
}

/// Drain all queued diagnostics to the link.
///
/// Called once per loop turn, after the report line. Also surfaces the
/// dropped-record count whenever records were lost since the last drain.
pub fn drain_logs(uart: &mut UartTxDriver<'_>, queue: &LogQueue) {
    let mut buf = [0u8; 160];

    while let Some(record) = queue.pop() {
        let len = format_log_line(&mut buf, &record);
        let _ = uart.write(&buf[..len]);
    }

    let dropped = queue.dropped();
    if dropped > 0 {
        let len = crate::logging::format_to_buffer(
            &mut buf,
            format_args!("# [        ] WARN: {} log records dropped\r\n", dropped),
        );
        let _ = uart.write(&buf[..len]);
        queue.reset_dropped();
    }
}
