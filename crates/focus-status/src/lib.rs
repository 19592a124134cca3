//! Focuser Status Library
//!
//! This crate provides the status vocabulary shared by the focus daemon and
//! its clients:
//!
//! - **Command results**: integer codes reported for every command, with
//!   diagnostic text
//! - **Focuser states**: the lifecycle of the focus mechanism, with plain and
//!   terminal-formatted labels
//!
//! Both lookups are total: unrecognized integers render as "unknown" rather
//! than failing. Typed conversions (`TryFrom<i32>`) are available when a
//! caller needs to reject unknown codes.
//!
//! # Example
//!
//! ```rust
//! use focus_status::{command, focuser, CommandStatus, FocuserStatus};
//!
//! assert_eq!(command::message(7), "error: focuser is not connected");
//! assert_eq!(command::message(42), "error: Unknown error code 42");
//!
//! assert_eq!(focuser::label(2, false), "IDLE");
//! assert_eq!(focuser::label(0, true), "[b][red]OFFLINE[/red][/b]");
//!
//! let status = CommandStatus::try_from(-101).unwrap();
//! assert!(status.is_client_side());
//! assert_eq!(FocuserStatus::Moving.code(), 3);
//! ```

pub mod command;
pub mod error;
pub mod focuser;
pub mod markup;

pub use command::CommandStatus;
pub use error::StatusError;
pub use focuser::FocuserStatus;
pub use markup::{Color, Markup, PlainMarkup, TagMarkup};
