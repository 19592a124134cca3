//! Command result codes
//!
//! Every command sent to the focus daemon completes with an integer result
//! code. Non-negative codes are produced by the daemon itself; negative codes
//! are produced on the client side when the command never got a reply.
//!
//! The integers are exchanged on the wire and must stay stable. Gaps in the
//! numbering (4, 5) are reserved and treated like any other unknown code.

use std::borrow::Cow;
use std::fmt;

use crate::error::StatusError;

/// Outcome of a command issued to the focus daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
#[repr(i32)]
pub enum CommandStatus {
    /// Command completed
    Succeeded = 0,
    /// Generic command failure
    Failed = 1,
    /// Another command is already in progress
    Blocked = 2,
    /// Command rejected because of the caller's network origin
    InvalidControlIp = 3,

    /// Requested position is outside the allowed travel range
    PositionOutsideLimits = 6,
    /// Operation requires an active hardware connection
    NotConnected = 7,
    /// Connect requested while already connected
    NotDisconnected = 8,

    /// Cancelled by the user before the daemon replied
    TerminatedByUser = -100,
    /// The client could not reach the daemon
    DaemonUnreachable = -101,
}

impl CommandStatus {
    /// Every defined status, in code table order
    pub const ALL: [CommandStatus; 9] = [
        Self::Succeeded,
        Self::Failed,
        Self::Blocked,
        Self::InvalidControlIp,
        Self::PositionOutsideLimits,
        Self::NotConnected,
        Self::NotDisconnected,
        Self::TerminatedByUser,
        Self::DaemonUnreachable,
    ];

    /// Integer code sent on the wire
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up the status for a wire code
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Succeeded),
            1 => Some(Self::Failed),
            2 => Some(Self::Blocked),
            3 => Some(Self::InvalidControlIp),
            6 => Some(Self::PositionOutsideLimits),
            7 => Some(Self::NotConnected),
            8 => Some(Self::NotDisconnected),
            -100 => Some(Self::TerminatedByUser),
            -101 => Some(Self::DaemonUnreachable),
            _ => None,
        }
    }

    /// Diagnostic text for this status
    ///
    /// Success has no diagnostic and returns an empty string.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Succeeded => "",
            Self::Failed => "error: command failed",
            Self::Blocked => "error: another command is already running",
            Self::InvalidControlIp => "error: command not accepted from this IP",
            Self::PositionOutsideLimits => "error: requested position outside channel range",
            Self::NotConnected => "error: focuser is not connected",
            Self::NotDisconnected => "error: focuser is already connected",
            Self::TerminatedByUser => "error: terminated by user",
            Self::DaemonUnreachable => "error: unable to communicate with focus daemon",
        }
    }

    /// Returns whether the command succeeded
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Returns whether the code originates from the client rather than the daemon
    pub const fn is_client_side(self) -> bool {
        self.code() < 0
    }
}

/// Diagnostic text for a raw command result code
///
/// Never fails: codes outside the table produce
/// `error: Unknown error code {code}`.
pub fn message(code: i32) -> Cow<'static, str> {
    match CommandStatus::from_code(code) {
        Some(status) => Cow::Borrowed(status.message()),
        None => Cow::Owned(format!("error: Unknown error code {code}")),
    }
}

impl TryFrom<i32> for CommandStatus {
    type Error = StatusError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(StatusError::UnknownCommandCode(code))
    }
}

impl From<CommandStatus> for i32 {
    fn from(status: CommandStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            f.write_str("succeeded")
        } else {
            f.write_str(self.message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_wire_values() {
        assert_eq!(CommandStatus::Succeeded.code(), 0);
        assert_eq!(CommandStatus::InvalidControlIp.code(), 3);
        assert_eq!(CommandStatus::PositionOutsideLimits.code(), 6);
        assert_eq!(CommandStatus::NotDisconnected.code(), 8);
        assert_eq!(CommandStatus::TerminatedByUser.code(), -100);
        assert_eq!(CommandStatus::DaemonUnreachable.code(), -101);
    }

    #[test]
    fn test_from_code_inverts_code() {
        for status in CommandStatus::ALL {
            assert_eq!(CommandStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_reserved_gaps_are_unknown() {
        assert_eq!(CommandStatus::from_code(4), None);
        assert_eq!(CommandStatus::from_code(5), None);
        assert_eq!(message(4), "error: Unknown error code 4");
        assert_eq!(message(5), "error: Unknown error code 5");
    }

    #[test]
    fn test_message_borrows_known_codes() {
        assert!(matches!(message(2), Cow::Borrowed(_)));
        assert!(matches!(message(999), Cow::Owned(_)));
    }

    #[test]
    fn test_client_side_codes() {
        assert!(CommandStatus::TerminatedByUser.is_client_side());
        assert!(CommandStatus::DaemonUnreachable.is_client_side());
        assert!(!CommandStatus::Failed.is_client_side());
        assert!(!CommandStatus::Succeeded.is_client_side());
    }

    #[test]
    fn test_only_succeeded_is_success() {
        let successes: Vec<_> = CommandStatus::ALL
            .into_iter()
            .filter(|s| s.is_success())
            .collect();
        assert_eq!(successes, vec![CommandStatus::Succeeded]);
    }

    #[test]
    fn test_try_from_reports_code() {
        assert_eq!(CommandStatus::try_from(7), Ok(CommandStatus::NotConnected));
        assert_eq!(
            CommandStatus::try_from(-1),
            Err(StatusError::UnknownCommandCode(-1))
        );
        assert_eq!(i32::from(CommandStatus::Blocked), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(CommandStatus::Succeeded.to_string(), "succeeded");
        assert_eq!(
            CommandStatus::NotConnected.to_string(),
            "error: focuser is not connected"
        );
    }
}
