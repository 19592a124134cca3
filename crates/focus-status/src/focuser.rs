//! Focuser lifecycle states
//!
//! The daemon reports the state of the focus mechanism as a small ordinal.
//! This module only labels states; transitions are driven by the daemon's
//! hardware control loop.

use std::fmt;

use crate::error::StatusError;
use crate::markup::{Color, Markup, PlainMarkup, TagMarkup, UNKNOWN_LABEL};

/// Plain labels, indexed by state ordinal
const LABELS: [&str; 4] = ["OFFLINE", "INITIALIZING", "IDLE", "MOVING"];

/// Label colors, indexed by state ordinal
const COLORS: [Color; 4] = [Color::Red, Color::Yellow, Color::Default, Color::Yellow];

/// State of the focuser hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
#[repr(i32)]
pub enum FocuserStatus {
    /// Not connected to the controller
    Disabled = 0,
    /// Connected, homing in progress
    Initializing = 1,
    /// Ready for commands
    Idle = 2,
    /// Motion in progress
    Moving = 3,
}

impl FocuserStatus {
    /// Every state, in ordinal order
    pub const ALL: [FocuserStatus; 4] = [
        Self::Disabled,
        Self::Initializing,
        Self::Idle,
        Self::Moving,
    ];

    /// Integer code sent on the wire
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up the state for a wire code
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Disabled),
            1 => Some(Self::Initializing),
            2 => Some(Self::Idle),
            3 => Some(Self::Moving),
            _ => None,
        }
    }

    /// Plain label for this state
    pub const fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    /// Color used when the label is rendered with markup
    pub const fn color(self) -> Color {
        COLORS[self as usize]
    }
}

/// Label for a raw device status code
///
/// With `formatted` set the label is wrapped in bold and color tags,
/// e.g. `[b][red]OFFLINE[/red][/b]`. Unknown codes give `UNKNOWN`, rendered
/// bold red when formatted.
pub fn label(code: i32, formatted: bool) -> String {
    if formatted {
        label_with(code, &TagMarkup)
    } else {
        label_with(code, &PlainMarkup)
    }
}

/// Label for a raw device status code using the given markup convention
pub fn label_with<M: Markup + ?Sized>(code: i32, markup: &M) -> String {
    match FocuserStatus::from_code(code) {
        Some(status) => markup.emphasize(status.label(), status.color()),
        None => markup.emphasize(UNKNOWN_LABEL, Color::Red),
    }
}

impl TryFrom<i32> for FocuserStatus {
    type Error = StatusError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(StatusError::UnknownFocuserCode(code))
    }
}

impl From<FocuserStatus> for i32 {
    fn from(status: FocuserStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for FocuserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
