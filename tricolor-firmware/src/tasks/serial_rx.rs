//! Serial receive task
//!
//! Reads the command link one byte at a time and hands each byte to the
//! command task through the mailbox.

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use tricolor_hal_rp2040::uart::RxError;

use crate::channels::COMMAND_MAILBOX;

/// Serial RX task - posts every received byte to the command mailbox
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut buf = [0u8; 1];

    loop {
        match rx.read(&mut buf).await {
            Ok(1) => {
                let byte = buf[0];
                trace!("RX: {:#04x}", byte);
                if COMMAND_MAILBOX.is_pending() {
                    trace!("Overrun: pending byte replaced");
                }
                COMMAND_MAILBOX.post(byte);
                // Let the command task take the byte before reading the next
                yield_now().await;
            }
            Ok(_) => {}
            Err(e) => {
                // Line errors are not reported back; the byte is dropped
                trace!("UART read error: {:?}", RxError::from(e));
            }
        }
    }
}
