//! Pure render-model construction.
//!
//! [`RenderModel`] is a value snapshot of everything one display frame
//! needs. It is rebuilt in full on every state change — nothing here is
//! cached or partially updated, so identical `(page, params)` input always
//! yields an identical model and the display redraw stays idempotent.

use core::fmt::Write;

use heapless::String;

use crate::menu::{MidiCommand, MidiParams, Page};

/// The status row: all four parameter fields, rendered on every frame
/// regardless of which page is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    /// Command-type mnemonic, "PC" or "CC".
    pub command: &'static str,
    /// Channel, zero-padded to 2 digits.
    pub channel: String<4>,
    /// Controller number, zero-padded to 3 digits; blank in Program
    /// Change mode, where no controller number exists.
    pub cc_number: String<4>,
    /// Value, zero-padded to 3 digits.
    pub value: String<4>,
}

/// Snapshot of one display frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    /// Large center text: the value under edit, or a transient banner.
    pub big: String<8>,
    pub status: StatusRow,
    /// Short name of the active page; empty while a banner is shown.
    pub label: &'static str,
    /// Horizontal offset of the page-indicator marker.
    pub indicator_x: i32,
}

impl RenderModel {
    /// Build the frame for the active page.
    pub fn build(page: Page, params: &MidiParams) -> Self {
        let mut big: String<8> = String::new();
        match page {
            Page::CommandType => {
                let _ = big.push_str(params.command().mnemonic());
            }
            Page::Channel => {
                let _ = write!(big, "{:02}", params.channel());
            }
            Page::CcNumber => {
                let _ = write!(big, "{:03}", params.cc_number());
            }
            Page::CommandValue => {
                let _ = write!(big, "{:03}", params.value());
            }
        }

        Self {
            big,
            status: status_row(params),
            label: page.label(),
            indicator_x: page.indicator_x(),
        }
    }

    /// Build a banner frame: `text` in the big slot, no page label, status
    /// row and indicator unchanged from the committed state.
    pub fn overlay(page: Page, params: &MidiParams, text: &str) -> Self {
        let mut big: String<8> = String::new();
        let _ = big.push_str(text);

        Self {
            big,
            status: status_row(params),
            label: "",
            indicator_x: page.indicator_x(),
        }
    }
}

fn status_row(params: &MidiParams) -> StatusRow {
    let mut channel: String<4> = String::new();
    let _ = write!(channel, "{:02}", params.channel());

    let mut cc_number: String<4> = String::new();
    if params.command() == MidiCommand::ControlChange {
        let _ = write!(cc_number, "{:03}", params.cc_number());
    }

    let mut value: String<4> = String::new();
    let _ = write!(value, "{:03}", params.value());

    StatusRow {
        command: params.command().mnemonic(),
        channel,
        cc_number,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(command: i32, channel: i32, cc_number: i32, value: i32) -> MidiParams {
        let mut p = MidiParams::default();
        p.set_command(command);
        p.set_channel(channel);
        p.set_cc_number(cc_number);
        p.set_value(value);
        p
    }

    #[test]
    fn status_row_pads_all_fields_in_program_change_mode() {
        let p = params(0, 3, 11, 7);
        let model = RenderModel::build(Page::Channel, &p);

        assert_eq!(model.status.command, "PC");
        assert_eq!(model.status.channel.as_str(), "03");
        assert_eq!(model.status.cc_number.as_str(), "");
        assert_eq!(model.status.value.as_str(), "007");
    }

    #[test]
    fn status_row_shows_cc_number_in_control_change_mode() {
        let p = params(1, 10, 4, 127);
        let model = RenderModel::build(Page::CommandValue, &p);

        assert_eq!(model.status.command, "CC");
        assert_eq!(model.status.channel.as_str(), "10");
        assert_eq!(model.status.cc_number.as_str(), "004");
        assert_eq!(model.status.value.as_str(), "127");
    }

    #[test]
    fn status_row_is_identical_on_every_page() {
        let p = params(1, 5, 64, 99);
        let reference = RenderModel::build(Page::CommandType, &p).status;

        for page in [Page::Channel, Page::CcNumber, Page::CommandValue] {
            assert_eq!(RenderModel::build(page, &p).status, reference);
        }
    }

    #[test]
    fn big_text_per_page() {
        let p = params(1, 2, 8, 15);

        assert_eq!(RenderModel::build(Page::CommandType, &p).big.as_str(), "CC");
        assert_eq!(RenderModel::build(Page::Channel, &p).big.as_str(), "02");
        assert_eq!(RenderModel::build(Page::CcNumber, &p).big.as_str(), "008");
        assert_eq!(RenderModel::build(Page::CommandValue, &p).big.as_str(), "015");
    }

    #[test]
    fn labels_and_indicator_follow_the_page() {
        let p = MidiParams::default();

        let model = RenderModel::build(Page::CcNumber, &p);
        assert_eq!(model.label, "cc num");
        assert_eq!(model.indicator_x, 73);
    }

    #[test]
    fn overlay_keeps_status_and_indicator_but_blanks_the_label() {
        let p = params(0, 3, 11, 7);
        let normal = RenderModel::build(Page::CommandValue, &p);
        let banner = RenderModel::overlay(Page::CommandValue, &p, "Sent!");

        assert_eq!(banner.big.as_str(), "Sent!");
        assert_eq!(banner.label, "");
        assert_eq!(banner.status, normal.status);
        assert_eq!(banner.indicator_x, normal.indicator_x);
    }

    #[test]
    fn build_is_reproducible() {
        let p = params(1, 16, 0, 64);
        assert_eq!(
            RenderModel::build(Page::Channel, &p),
            RenderModel::build(Page::Channel, &p)
        );
    }
}
