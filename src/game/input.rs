use super::board::Point;
use serde::Deserialize;
use std::fmt;

/// Rule for deciding whether the pointer or the keyboard steers the snake
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum InputPolicy {
    /// Once the pointer has moved over the game, it steers on every tick
    #[default]
    Pointer,

    /// Whichever device was used most recently steers
    Latest,

    /// Pointer motion is ignored for steering
    Keyboard,
}

impl InputPolicy {
    /// Return the policy after this one when cycling through them
    pub(crate) fn next(self) -> InputPolicy {
        match self {
            InputPolicy::Pointer => InputPolicy::Latest,
            InputPolicy::Latest => InputPolicy::Keyboard,
            InputPolicy::Keyboard => InputPolicy::Pointer,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            InputPolicy::Pointer => "pointer",
            InputPolicy::Latest => "latest",
            InputPolicy::Keyboard => "keyboard",
        }
    }
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Device {
    Keyboard,
    Pointer,
}

/// Captured input that is consulted when the snake next moves
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct InputState {
    policy: InputPolicy,

    /// The most recent pointer position, in board pixels
    pub(super) pointer: Option<Point>,

    last_device: Option<Device>,
}

impl InputState {
    pub(crate) fn new(policy: InputPolicy) -> InputState {
        InputState {
            policy,
            pointer: None,
            last_device: None,
        }
    }

    pub(crate) fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub(crate) fn set_policy(&mut self, policy: InputPolicy) {
        self.policy = policy;
    }

    /// Note that a steering key was pressed
    pub(crate) fn record_key(&mut self) {
        self.last_device = Some(Device::Keyboard);
    }

    /// Note that the pointer moved to `pos`
    pub(crate) fn record_pointer(&mut self, pos: Point) {
        self.pointer = Some(pos);
        self.last_device = Some(Device::Pointer);
    }

    /// Return the position the snake should turn towards on the next tick,
    /// or `None` if the keyboard heading applies
    pub(crate) fn steering_target(&self) -> Option<Point> {
        let pointer = self.pointer?;
        match self.policy {
            InputPolicy::Pointer => Some(pointer),
            InputPolicy::Latest => (self.last_device == Some(Device::Pointer)).then_some(pointer),
            InputPolicy::Keyboard => None,
        }
    }
}
