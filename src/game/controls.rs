use super::Phase;
use crate::consts;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// The clickable controls shown beneath the board
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Button {
    Start,
    Pause,
}

impl Button {
    /// Width of the area set aside for each button
    pub(crate) const WIDTH: u16 = 14;
}

/// The state of the start & pause/resume controls for a given game phase
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Controls {
    pub(crate) start_enabled: bool,
    pub(crate) pause_enabled: bool,
    pub(crate) pause_label: &'static str,
}

impl Controls {
    pub(crate) fn for_phase(phase: Phase) -> Controls {
        match phase {
            Phase::Idle => Controls {
                start_enabled: true,
                pause_enabled: false,
                pause_label: "Pause",
            },
            Phase::Running => Controls {
                start_enabled: false,
                pause_enabled: true,
                pause_label: "Pause",
            },
            Phase::Paused => Controls {
                start_enabled: false,
                pause_enabled: true,
                pause_label: "Resume",
            },
        }
    }

    pub(crate) fn enabled(self, button: Button) -> bool {
        match button {
            Button::Start => self.start_enabled,
            Button::Pause => self.pause_enabled,
        }
    }

    /// Render a button as a `Line`, e.g., `[ Start (s) ]`
    pub(crate) fn button_line(self, button: Button) -> Line<'static> {
        let (label, key) = match button {
            Button::Start => ("Start", "s"),
            Button::Pause => (self.pause_label, "p"),
        };
        if self.enabled(button) {
            Line::from_iter([
                Span::raw(format!("[ {label} (")),
                Span::styled(key, consts::KEY_STYLE),
                Span::raw(") ]"),
            ])
            .style(consts::BUTTON_STYLE)
        } else {
            Line::raw(format!("[ {label} ({key}) ]")).style(consts::DISABLED_BUTTON_STYLE)
        }
    }
}

/// A single button drawn in its current state
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ButtonWidget {
    pub(crate) controls: Controls,
    pub(crate) button: Button,
}

impl Widget for ButtonWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.controls.button_line(self.button).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Phase::Idle, true, false, "Pause")]
    #[case(Phase::Running, false, true, "Pause")]
    #[case(Phase::Paused, false, true, "Resume")]
    fn test_for_phase(
        #[case] phase: Phase,
        #[case] start: bool,
        #[case] pause: bool,
        #[case] label: &str,
    ) {
        let controls = Controls::for_phase(phase);
        assert_eq!(controls.enabled(Button::Start), start);
        assert_eq!(controls.enabled(Button::Pause), pause);
        assert_eq!(controls.pause_label, label);
    }

    #[test]
    fn labels_fit() {
        for phase in [Phase::Idle, Phase::Running, Phase::Paused] {
            let controls = Controls::for_phase(phase);
            for button in [Button::Start, Button::Pause] {
                let width = controls.button_line(button).width();
                assert!(
                    width <= usize::from(Button::WIDTH),
                    "{button:?} is {width} columns wide in {phase:?}"
                );
            }
        }
    }

    #[test]
    fn render_disabled_pause() {
        let area = Rect::new(0, 0, 14, 1);
        let mut buffer = Buffer::empty(area);
        ButtonWidget {
            controls: Controls::for_phase(Phase::Idle),
            button: Button::Pause,
        }
        .render(area, &mut buffer);
        let mut expected = Buffer::with_lines(["[ Pause (p) ] "]);
        expected.set_style(Rect::new(0, 0, 14, 1), consts::DISABLED_BUTTON_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
