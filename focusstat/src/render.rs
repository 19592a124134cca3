//! Rendering decoded codes for the terminal

use clap::ValueEnum;
use focus_status::markup::UNKNOWN_LABEL;
use focus_status::{
    command, focuser, Color, CommandStatus, FocuserStatus, Markup, PlainMarkup, TagMarkup,
};
use owo_colors::{OwoColorize, Style};
use serde::{Deserialize, Serialize};

/// How focuser labels are decorated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// `[b][red]...[/red][/b]` tags for the console formatter
    #[default]
    Tags,
    /// ANSI escape sequences
    Ansi,
    /// Undecorated text
    Plain,
}

impl OutputStyle {
    /// Name used on the command line and in the settings file
    pub fn name(self) -> &'static str {
        match self {
            OutputStyle::Tags => "tags",
            OutputStyle::Ansi => "ansi",
            OutputStyle::Plain => "plain",
        }
    }

    /// Markup implementation for this style
    pub fn markup(self) -> &'static dyn Markup {
        match self {
            OutputStyle::Tags => &TagMarkup,
            OutputStyle::Ansi => &AnsiMarkup,
            OutputStyle::Plain => &PlainMarkup,
        }
    }
}

/// Bold, colored text using ANSI escapes
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiMarkup;

impl Markup for AnsiMarkup {
    fn emphasize(&self, text: &str, color: Color) -> String {
        let style = match color {
            Color::Default => Style::new().bold(),
            Color::Red => Style::new().bold().red(),
            Color::Yellow => Style::new().bold().yellow(),
        };
        text.style(style).to_string()
    }
}

/// A single decoded code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub code: i32,
    pub known: bool,
    pub text: String,
}

impl Decoded {
    /// One line of text output
    pub fn line(&self) -> String {
        format!("{:>5}  {}", self.code, self.text)
    }
}

/// Decode a command result code
///
/// Success has no diagnostic message, so it is shown as `succeeded`.
pub fn decode_command(code: i32) -> Decoded {
    match CommandStatus::from_code(code) {
        Some(status) => Decoded {
            code,
            known: true,
            text: status.to_string(),
        },
        None => Decoded {
            code,
            known: false,
            text: command::message(code).into_owned(),
        },
    }
}

/// Decode a focuser state code with the given markup style
pub fn decode_focuser(code: i32, style: OutputStyle) -> Decoded {
    Decoded {
        code,
        known: FocuserStatus::from_code(code).is_some(),
        text: focuser::label_with(code, style.markup()),
    }
}

/// Both code tables, one decoded entry per known code
pub fn tables(style: OutputStyle) -> (Vec<Decoded>, Vec<Decoded>) {
    let commands = CommandStatus::ALL
        .iter()
        .map(|status| decode_command(status.code()))
        .collect();
    let states = FocuserStatus::ALL
        .iter()
        .map(|status| decode_focuser(status.code(), style))
        .collect();
    (commands, states)
}

/// Label shown for states the table does not know, in the given style
pub fn unknown_label(style: OutputStyle) -> String {
    style.markup().emphasize(UNKNOWN_LABEL, Color::Red)
}
