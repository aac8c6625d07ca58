use wmidi::MidiMessage;

use super::page::{EncoderBinding, Page};
use super::params::MidiParams;
use crate::message;
use crate::render::RenderModel;

/// Big-text banner shown from power-on until the first input event.
pub const BANNER_READY: &str = "READY";

/// Big-text banner shown after a transmission until the next input event.
pub const BANNER_SENT: &str = "Sent!";

/// The menu controller: current page, committed parameters, and the
/// transient banner overlay.
///
/// Constructed once at startup and owned for the process lifetime. This is
/// the sole mutator of the parameter store; the display and transport only
/// ever receive value snapshots ([`RenderModel`], [`MidiMessage`]).
///
/// The overlay is pure display state: [`send()`](Self::send) arms it
/// without touching the page or parameters, and any navigation or encoder
/// event clears it, so the next frame is rebuilt from the actual committed
/// state.
pub struct Menu {
    page: Page,
    params: MidiParams,
    overlay: Option<&'static str>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    /// Start on the command-type page with power-on parameter defaults and
    /// the `READY` banner.
    pub fn new() -> Self {
        Self {
            page: Page::CommandType,
            params: MidiParams::default(),
            overlay: Some(BANNER_READY),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn params(&self) -> &MidiParams {
        &self.params
    }

    /// Adapter binding for the currently active page. Used once at startup
    /// to arm the encoder; after that, [`navigate()`](Self::navigate)
    /// returns the binding for each new page.
    pub fn binding(&self) -> EncoderBinding {
        self.page.binding(&self.params)
    }

    /// Navigation-button activation: advance to the next page.
    ///
    /// Always legal from every page. Returns the new page's range and seed
    /// for the caller to rebind the encoder adapter.
    pub fn navigate(&mut self) -> EncoderBinding {
        self.overlay = None;
        self.page = self.page.next(self.params.command());
        self.page.binding(&self.params)
    }

    /// Absolute encoder position for the active page's parameter.
    ///
    /// The caller only reports *changed* bounded positions, so every call
    /// commits a value and invalidates the current frame. Out-of-range
    /// positions are a driver defect and are clamped by the store.
    pub fn set_position(&mut self, position: i32) {
        self.overlay = None;
        self.page.apply(&mut self.params, position);
    }

    /// Send-button activation: compose the outbound message from the
    /// committed store and arm the `Sent!` banner.
    ///
    /// Neither the page nor the parameters change; the caller hands the
    /// message to the transport fire-and-forget.
    pub fn send(&mut self) -> MidiMessage<'static> {
        self.overlay = Some(BANNER_SENT);
        message::compose(&self.params)
    }

    /// Render model for the current state, overlay included.
    pub fn frame(&self) -> RenderModel {
        match self.overlay {
            Some(text) => RenderModel::overlay(self.page, &self.params, text),
            None => RenderModel::build(self.page, &self.params),
        }
    }
}
