//! segno-hw-interface
//!
//! Firmware for the Segno one-knob MIDI controller on the Raspberry Pi
//! Pico 2. Wires the library crates into the running device:
//!
//! 1. The rotary board (I2C0) asserts INT on rotation or a press of the
//!    knob's built-in button.
//! 2. The input task reads the hardware delta, folds it through the
//!    bounded position adapter, and drives the shared `Menu`: knob turns
//!    edit the active parameter, knob presses advance the page and rebind
//!    the adapter to the new page's range and seed.
//! 3. The send button (plain GPIO) composes the committed message and
//!    writes it to UART0 at 31250 baud, fire-and-forget.
//! 4. The OLED task (I2C1) polls the menu at 30 Hz and flushes a full
//!    frame whenever the render model changes.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, I2C1};
use embassy_rp::uart;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use rotary_driver::{BoundedPosition, RotaryBoard, DEFAULT_ADDRESS};
use segno::{message::MAX_MESSAGE_LEN, Menu};
use segno_oled_display_rs::{display_update_task, DisplayConfig, OledDriver};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Shared menu state — written by the input and send tasks, read by the
/// OLED display task.
static MENU: StaticCell<Mutex<CriticalSectionRawMutex, Menu>> = StaticCell::new();

/// Settle time after a send-button edge before the level is trusted.
const BUTTON_DEBOUNCE: Duration = Duration::from_millis(20);

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `display_update_task` so it
/// can be spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn oled_task(
    driver: OledDriver<I2c<'static, i2c::Async>>,
    menu: &'static Mutex<CriticalSectionRawMutex, Menu>,
    config: DisplayConfig,
) {
    display_update_task(driver, menu, config).await;
}

/// Interrupt-driven encoder and navigation-button task.
///
/// Waits for the board's INT pin to go LOW (active-low), reads the delta
/// and button level, clears the interrupt flags, then applies the event
/// to the menu. The mutex is held only for the in-memory update — never
/// during I2C traffic.
#[embassy_executor::task]
async fn input_task(
    mut int_pin: Input<'static>,
    mut board: RotaryBoard<I2c<'static, i2c::Async>>,
    menu: &'static Mutex<CriticalSectionRawMutex, Menu>,
) {
    info!("Input task started");

    // Arm the bounded adapter with the startup page's range and seed.
    let mut position = {
        let menu = menu.lock().await;
        let b = menu.binding();
        BoundedPosition::new(b.min, b.max, b.value)
    };
    let mut nav_held = false;

    loop {
        int_pin.wait_for_low().await;

        let delta = match board.read_delta().await {
            Ok(d) => d,
            Err(_) => {
                error!("Encoder read failed");
                // Clear flags even on error so INT returns HIGH and the
                // next movement produces a fresh interrupt instead of a
                // tight error loop.
                let _ = board.clear_interrupts().await;
                continue;
            }
        };

        // On a read failure assume the level is unchanged — a missed
        // press beats a phantom one.
        let pressed = board.button_pressed().await.unwrap_or(nav_held);

        // Clear AFTER reading — drives INT back HIGH. Clearing first
        // would risk missing a movement that lands during the reads.
        if board.clear_interrupts().await.is_err() {
            warn!("Failed to clear interrupt flags");
        }

        // Navigation fires on the press edge.
        if pressed && !nav_held {
            let binding = {
                let mut menu = menu.lock().await;
                menu.navigate()
            };
            position.set_range(binding.min, binding.max);
            position.reset(binding.value);
            debug!(
                "Page change: range [{}, {}], seed {}",
                binding.min, binding.max, binding.value
            );
        }
        nav_held = pressed;

        if delta != 0 {
            let before = position.value();
            let after = position.apply(delta);
            // Turning against a range end changes nothing and must not
            // redraw or clear a banner.
            if after != before {
                menu.lock().await.set_position(after);
                debug!("Encoder: delta={}, position={}", delta, after);
            }
        }
    }
}

/// Send-button task: compose the committed message and transmit it.
///
/// Transmission is fire-and-forget; a UART error is logged and dropped,
/// and the display shows the acknowledgement banner regardless, matching
/// the device's no-feedback MIDI model.
#[embassy_executor::task]
async fn send_task(
    mut button: Input<'static>,
    mut midi_tx: uart::UartTx<'static, uart::Blocking>,
    menu: &'static Mutex<CriticalSectionRawMutex, Menu>,
) {
    info!("Send task started");

    loop {
        button.wait_for_falling_edge().await;
        Timer::after(BUTTON_DEBOUNCE).await;
        if button.is_high() {
            continue; // bounce, not a press
        }

        let message = {
            let mut menu = menu.lock().await;
            menu.send()
        };

        let mut wire = [0u8; MAX_MESSAGE_LEN];
        match message.copy_to_slice(&mut wire) {
            Ok(len) => {
                if midi_tx.blocking_write(&wire[..len]).is_err() {
                    warn!("MIDI transmit failed");
                } else {
                    info!("Sent {} byte MIDI message", len);
                }
            }
            Err(_) => warn!("Message serialisation failed"),
        }

        // One message per press, however long the button is held.
        button.wait_for_high().await;
        Timer::after(BUTTON_DEBOUNCE).await;
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("segno-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // MIDI_TX  → GP0   (UART0 TX, 31250 baud)
    // OLED_SDA → GP2   (I2C1)
    // OLED_SCL → GP3   (I2C1)
    // ENC_SDA  → GP4   (I2C0)
    // ENC_SCL  → GP5   (I2C0)
    // ENC_INT  → GP6   active-low, pull-up enabled
    // BTN_SEND → GP7   active-low, pull-up enabled
    // ———————————————————————————————————————————————————————————————————————

    let i2c_encoder = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c::Config::default());
    let i2c_oled = I2c::new_async(p.I2C1, p.PIN_3, p.PIN_2, Irqs, i2c::Config::default());

    let mut uart_config = uart::Config::default();
    uart_config.baudrate = 31250;
    let midi_tx = uart::UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);

    let int_pin = Input::new(p.PIN_6, Pull::Up);
    let send_button = Input::new(p.PIN_7, Pull::Up);

    let mut board = RotaryBoard::new(i2c_encoder, DEFAULT_ADDRESS);
    let oled_driver = OledDriver::new(i2c_oled, 0x3C);

    let menu = MENU.init(Mutex::new(Menu::new()));

    // —— Encoder board initialisation ———————————————————————————————————————

    // Button pull-up plus button/encoder interrupts. Without this the INT
    // pin never fires and the input task sleeps forever. On failure we log
    // and continue — the display still works, input will not.
    if board.init().await.is_err() {
        error!("Failed to initialise the rotary board");
    }

    // Drop any stale flags accumulated before interrupts were enabled so
    // INT starts HIGH and clean.
    if board.clear_interrupts().await.is_err() {
        warn!("Failed to clear initial interrupt flags");
    }

    // —— Spawn tasks ————————————————————————————————————————————————————————

    spawner
        .spawn(oled_task(oled_driver, menu, DisplayConfig::default()))
        .unwrap();
    spawner.spawn(input_task(int_pin, board, menu)).unwrap();
    spawner.spawn(send_task(send_button, midi_tx, menu)).unwrap();

    info!("All tasks spawned");
}
