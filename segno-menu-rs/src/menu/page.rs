use super::command::MidiCommand;
use super::params::MidiParams;

/// Range and seed handed to the encoder adapter on every page change.
///
/// The adapter accumulates raw ticks into an absolute position bounded to
/// `[min, max]`, starting from `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderBinding {
    pub min: i32,
    pub max: i32,
    /// Current value of the newly bound parameter — editing continues from
    /// the committed value, never from zero.
    pub value: i32,
}

/// One of the four mutually exclusive editing pages.
///
/// All per-page data — bound field, legal range, label, indicator offset —
/// lives on this enum, so the transition table below is the only place
/// page order is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Choose between Program Change and Control Change.
    CommandType,
    /// MIDI channel, 1–16.
    Channel,
    /// Controller number. Only reachable in Control Change mode.
    CcNumber,
    /// Program number or controller data value.
    CommandValue,
}

impl Page {
    /// Label text rendered below the big value.
    pub fn label(self) -> &'static str {
        match self {
            Page::CommandType => "type",
            Page::Channel => "channel",
            Page::CcNumber => "cc num",
            Page::CommandValue => "value",
        }
    }

    /// Horizontal pixel offset of the page-indicator marker.
    ///
    /// Four fixed slots across the 128 px display, one per status field.
    pub fn indicator_x(self) -> i32 {
        match self {
            Page::CommandType => 12,
            Page::Channel => 40,
            Page::CcNumber => 73,
            Page::CommandValue => 102,
        }
    }

    /// Legal encoder range for the parameter this page edits.
    pub fn range(self) -> (i32, i32) {
        match self {
            Page::CommandType => (0, 1),
            Page::Channel => (1, 16),
            Page::CcNumber => (0, 127),
            Page::CommandValue => (0, 127),
        }
    }

    /// The page that follows this one in the navigation cycle.
    ///
    /// `CcNumber` is skipped entirely in Program Change mode, where no
    /// controller number exists.
    pub fn next(self, command: MidiCommand) -> Page {
        match self {
            Page::CommandType => Page::Channel,
            Page::Channel => match command {
                MidiCommand::ProgramChange => Page::CommandValue,
                MidiCommand::ControlChange => Page::CcNumber,
            },
            Page::CcNumber => Page::CommandValue,
            Page::CommandValue => Page::CommandType,
        }
    }

    /// Committed value of the bound parameter, in the encoder domain.
    pub fn current_value(self, params: &MidiParams) -> i32 {
        match self {
            Page::CommandType => params.command().index(),
            Page::Channel => i32::from(params.channel()),
            Page::CcNumber => i32::from(params.cc_number()),
            Page::CommandValue => i32::from(params.value()),
        }
    }

    /// Store an absolute encoder position into the bound parameter.
    ///
    /// The setters re-clamp to the field domain.
    pub fn apply(self, params: &mut MidiParams, position: i32) {
        match self {
            Page::CommandType => params.set_command(position),
            Page::Channel => params.set_channel(position),
            Page::CcNumber => params.set_cc_number(position),
            Page::CommandValue => params.set_value(position),
        }
    }

    /// The adapter binding for this page: its range plus the committed
    /// value as the starting position.
    pub fn binding(self, params: &MidiParams) -> EncoderBinding {
        let (min, max) = self.range();
        EncoderBinding {
            min,
            max,
            value: self.current_value(params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Page::CommandType.label(), "type");
        assert_eq!(Page::Channel.label(), "channel");
        assert_eq!(Page::CcNumber.label(), "cc num");
        assert_eq!(Page::CommandValue.label(), "value");
    }

    #[test]
    fn indicator_offsets_are_distinct_and_ordered() {
        let offsets = [
            Page::CommandType.indicator_x(),
            Page::Channel.indicator_x(),
            Page::CcNumber.indicator_x(),
            Page::CommandValue.indicator_x(),
        ];
        assert_eq!(offsets, [12, 40, 73, 102]);
    }

    #[test]
    fn ranges() {
        assert_eq!(Page::CommandType.range(), (0, 1));
        assert_eq!(Page::Channel.range(), (1, 16));
        assert_eq!(Page::CcNumber.range(), (0, 127));
        assert_eq!(Page::CommandValue.range(), (0, 127));
    }

    #[test]
    fn program_change_cycle_skips_cc_number() {
        let cmd = MidiCommand::ProgramChange;
        assert_eq!(Page::CommandType.next(cmd), Page::Channel);
        assert_eq!(Page::Channel.next(cmd), Page::CommandValue);
        assert_eq!(Page::CommandValue.next(cmd), Page::CommandType);
    }

    #[test]
    fn control_change_cycle_visits_cc_number() {
        let cmd = MidiCommand::ControlChange;
        assert_eq!(Page::CommandType.next(cmd), Page::Channel);
        assert_eq!(Page::Channel.next(cmd), Page::CcNumber);
        assert_eq!(Page::CcNumber.next(cmd), Page::CommandValue);
        assert_eq!(Page::CommandValue.next(cmd), Page::CommandType);
    }

    #[test]
    fn apply_and_read_back_each_field() {
        let mut params = MidiParams::default();

        Page::CommandType.apply(&mut params, 1);
        assert_eq!(Page::CommandType.current_value(&params), 1);

        Page::Channel.apply(&mut params, 12);
        assert_eq!(Page::Channel.current_value(&params), 12);

        Page::CcNumber.apply(&mut params, 74);
        assert_eq!(Page::CcNumber.current_value(&params), 74);

        Page::CommandValue.apply(&mut params, 127);
        assert_eq!(Page::CommandValue.current_value(&params), 127);
    }

    #[test]
    fn binding_seeds_from_committed_value() {
        let mut params = MidiParams::default();
        params.set_channel(7);

        let binding = Page::Channel.binding(&params);
        assert_eq!(binding, EncoderBinding { min: 1, max: 16, value: 7 });
    }

    #[test]
    fn command_type_binding_encodes_command_as_index() {
        let mut params = MidiParams::default();
        params.set_command(1);

        let binding = Page::CommandType.binding(&params);
        assert_eq!(binding, EncoderBinding { min: 0, max: 1, value: 1 });
    }
}
