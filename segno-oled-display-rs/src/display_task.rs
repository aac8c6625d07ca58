//! Periodic display update loop.
//!
//! Polls the shared [`Menu`] at the configured refresh rate, rebuilds the
//! [`RenderModel`](segno::RenderModel), and redraws the whole frame when
//! it differs from the last flushed one. The mutex is held only long
//! enough to take the model snapshot, never across I2C traffic.

use embedded_hal_async::i2c::I2c;

use segno::{Menu, RenderModel};

use crate::driver::OledDriver;
use crate::layout::{draw_frame, DisplayConfig};

/// Display update loop.
///
/// Generic over the I2C type, so it cannot itself be an Embassy task;
/// spawn it through a concrete wrapper:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn oled_task(d: OledDriver<ConcreteI2c>, m: SharedMenu, c: DisplayConfig) {
///     display_update_task(d, m, c).await;
/// }
/// ```
///
/// A failed panel initialisation ends the task (there is nothing to
/// drive). A failed draw or flush skips recording the frame, so the same
/// frame is retried on the next cycle.
pub async fn display_update_task<I2C>(
    mut driver: OledDriver<I2C>,
    menu: &'static embassy_sync::mutex::Mutex<
        embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex,
        Menu,
    >,
    config: DisplayConfig,
) where
    I2C: I2c,
{
    if let Err(_e) = driver.init().await {
        #[cfg(feature = "defmt")]
        defmt::error!("OLED init failed: {}", _e);
        return;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("OLED initialised");

    let period = embassy_time::Duration::from_millis(config.period_ms());
    let mut flushed: Option<RenderModel> = None;

    loop {
        embassy_time::Timer::after(period).await;

        // Snapshot under the mutex; render and flush without it.
        let frame = { menu.lock().await.frame() };

        if flushed.as_ref() == Some(&frame) {
            continue;
        }

        driver.clear_buffer();
        let Some(target) = driver.draw_target() else {
            // init() succeeded, so this is unreachable; skip the cycle.
            continue;
        };
        if draw_frame(target, &frame, &config).is_err() {
            #[cfg(feature = "defmt")]
            defmt::error!("Frame draw failed");
            continue;
        }

        if let Err(_e) = driver.flush().await {
            #[cfg(feature = "defmt")]
            defmt::error!("Flush failed: {}", _e);
            continue;
        }

        flushed = Some(frame);
    }
}
