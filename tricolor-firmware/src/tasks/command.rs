//! Command task
//!
//! Sole owner of the indicator outputs. Takes bytes from the mailbox and
//! applies each one with a single synchronous handler call.

use defmt::*;
use embassy_time::Instant;

use tricolor_core::config::link_config;
use tricolor_core::CommandHandler;
use tricolor_drivers::indicator::GpioIndicator;
use tricolor_hal_rp2040::gpio::RpOutput;

use crate::channels::COMMAND_MAILBOX;

/// Handler over the board's three GPIO indicators
pub type BoardHandler = CommandHandler<GpioIndicator<RpOutput<'static>>>;

#[embassy_executor::task]
pub async fn command_task(mut handler: BoardHandler) {
    info!("Command task started");

    let budget_us = link_config().byte_period_us() as u64;

    loop {
        let event = COMMAND_MAILBOX.receive().await;

        let start = Instant::now();
        handler.handle(event);
        let elapsed_us = start.elapsed().as_micros();

        if !event.is_recognized() {
            trace!("Unrecognized byte {:#04x}, all off", event.byte);
        }
        if elapsed_us > budget_us {
            trace!("Apply took {}us (byte period {}us)", elapsed_us, budget_us);
        }
        debug!("{:?} -> {:?}", event.command(), handler.state());
    }
}
