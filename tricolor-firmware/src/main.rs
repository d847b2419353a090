//! Tricolor - Serial Indicator Firmware
//!
//! Drives a red, green and blue indicator from single-byte commands
//! received on a 9600 baud 8N1 serial link:
//!
//! | Byte | Effect         |
//! |------|----------------|
//! | `R`  | red only       |
//! | `V`  | green only     |
//! | `A`  | blue only      |
//! | `T`  | all on         |
//! | `0`  | all off        |
//! | else | all off        |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tricolor_core::config::{link_config, BoardConfig};
use tricolor_core::state::Line;
use tricolor_core::CommandHandler;
use tricolor_drivers::indicator::GpioIndicator;
use tricolor_hal::BaudDivisor;
use tricolor_hal_rp2040::gpio::RpOutput;
use tricolor_hal_rp2040::pins::PinBank;
use tricolor_hal_rp2040::uart::rp_config;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Baud error above this (per mille) is worth a warning
const MAX_BAUD_ERROR_PERMILLE: i32 = 20;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tricolor firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = config::load_board_config();

    // Indicators are driven dark before the link can deliver a byte
    let (mut bank, uart) = PinBank::from_peripherals(p);
    let handler = build_handler(&mut bank, &board);
    info!("Indicators initialized, all off");

    let link = link_config();
    let divisor = BaudDivisor::new(embassy_rp::clocks::clk_peri_freq(), link.baudrate);
    let error = divisor.error_permille(link.baudrate);
    info!(
        "UART0: {} baud 8N1 (ibrd={} fbrd={}, actual {} baud)",
        link.baudrate,
        divisor.ibrd,
        divisor.fbrd,
        divisor.actual_baud()
    );
    if error.abs() > MAX_BAUD_ERROR_PERMILLE {
        warn!("Baud rate error {} per mille exceeds tolerance", error);
    }

    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 16]);

    let uart = Uart::new_blocking(uart.uart0, uart.tx, uart.rx, unwrap!(rp_config(&link)));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!("UART initialized for command link");

    // Consumer first so the first byte always finds a waiter
    spawner.spawn(unwrap!(tasks::command_task(handler)));
    spawner.spawn(unwrap!(tasks::serial_rx_task(rx)));

    info!("All tasks spawned");

    loop {
        Timer::after_secs(60).await;
        trace!("Idle heartbeat");
    }
}

/// Claim the three indicator pins and wrap them in a command handler
fn build_handler(bank: &mut PinBank, board: &BoardConfig) -> tasks::BoardHandler {
    let outputs = Line::ALL.map(|line| {
        let pin_cfg = board.indicators.pin(line);
        let pin = unwrap!(bank.take(pin_cfg.pin));
        debug!(
            "{:?} on gpio{} ({:?})",
            line,
            pin_cfg.pin,
            pin_cfg.polarity()
        );
        GpioIndicator::new(RpOutput::new_off(pin, pin_cfg.polarity()), pin_cfg.polarity())
    });
    CommandHandler::new(outputs)
}
