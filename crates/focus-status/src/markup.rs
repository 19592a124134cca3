//! Terminal markup for status labels
//!
//! Lookup tables only carry a [`Color`]; how bold and color are written out
//! is decided by a [`Markup`] implementation. The default, [`TagMarkup`],
//! emits the `[b][color]...[/color][/b]` tags understood by the operator
//! console's formatter.

/// Label used for device states outside the table
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// Terminal colors used by status labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// Terminal's default foreground
    Default,
    Red,
    Yellow,
}

impl Color {
    /// Name of the color as used inside markup tags
    pub fn name(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }
}

/// A convention for rendering bold, colored text
pub trait Markup {
    /// Wrap `text` so that it renders bold in `color`
    fn emphasize(&self, text: &str, color: Color) -> String;
}

/// Bracketed tag markup: `[b][red]OFFLINE[/red][/b]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagMarkup;

impl Markup for TagMarkup {
    fn emphasize(&self, text: &str, color: Color) -> String {
        let color = color.name();
        format!("[b][{color}]{text}[/{color}][/b]")
    }
}

/// No markup at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainMarkup;

impl Markup for PlainMarkup {
    fn emphasize(&self, text: &str, _color: Color) -> String {
        text.to_string()
    }
}

impl<M: Markup + ?Sized> Markup for &M {
    fn emphasize(&self, text: &str, color: Color) -> String {
        (**self).emphasize(text, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_markup_wraps_bold_then_color() {
        assert_eq!(
            TagMarkup.emphasize("IDLE", Color::Default),
            "[b][default]IDLE[/default][/b]"
        );
        assert_eq!(
            TagMarkup.emphasize(UNKNOWN_LABEL, Color::Red),
            "[b][red]UNKNOWN[/red][/b]"
        );
    }

    #[test]
    fn test_plain_markup_ignores_color() {
        assert_eq!(PlainMarkup.emphasize("MOVING", Color::Yellow), "MOVING");
    }

    #[test]
    fn test_markup_through_reference() {
        fn emphasize_idle<M: Markup>(markup: M) -> String {
            markup.emphasize("IDLE", Color::Default)
        }

        assert_eq!(emphasize_idle(&TagMarkup), emphasize_idle(TagMarkup));

        let dynamic: &dyn Markup = &PlainMarkup;
        assert_eq!(emphasize_idle(dynamic), "IDLE");
    }
}
