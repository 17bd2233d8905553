//! Style configuration for border and header decoration.
//!
//! A [`Style`] turns into an SGR escape prefix plus a reset suffix. Tables do
//! not hard-code escape literals; they hold a [`StyleConfig`] and ask it to
//! decorate borders, headers and description titles.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Text attribute flags.
    ///
    /// Each flag corresponds to an ANSI SGR (Select Graphic Rendition) code.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        /// Bold/bright text (SGR 1).
        const BOLD      = 1 << 0;
        /// Dim/faint text (SGR 2).
        const DIM       = 1 << 1;
        /// Italic text (SGR 3).
        const ITALIC    = 1 << 2;
        /// Single underline (SGR 4).
        const UNDERLINE = 1 << 3;
        /// Reverse video (SGR 7).
        const REVERSE   = 1 << 4;
    }
}

impl Attributes {
    const SGR_CODES: [(Self, u8); 5] = [
        (Self::BOLD, 1),
        (Self::DIM, 2),
        (Self::ITALIC, 3),
        (Self::UNDERLINE, 4),
        (Self::REVERSE, 7),
    ];

    /// Get the ANSI SGR codes for enabled attributes.
    #[must_use]
    pub fn to_sgr_codes(&self) -> Vec<u8> {
        Self::SGR_CODES
            .iter()
            .filter(|(attr, _)| self.contains(*attr))
            .map(|(_, code)| *code)
            .collect()
    }
}

/// SGR reset sequence closing every styled span.
pub const RESET: &str = "\x1b[0m";

/// Visual style: attributes plus an optional 256-colour foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Enabled attributes.
    pub attributes: Attributes,
    /// 256-colour palette index for the foreground.
    pub color: Option<u8>,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: Attributes::empty(),
            color: None,
        }
    }

    /// Add the bold attribute.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.attributes = self.attributes.union(Attributes::BOLD);
        self
    }

    /// Add the dim attribute.
    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.attributes = self.attributes.union(Attributes::DIM);
        self
    }

    /// Add the italic attribute.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.attributes = self.attributes.union(Attributes::ITALIC);
        self
    }

    /// Add the underline attribute.
    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.attributes = self.attributes.union(Attributes::UNDERLINE);
        self
    }

    /// Set a 256-colour foreground.
    #[must_use]
    pub const fn color(mut self, index: u8) -> Self {
        self.color = Some(index);
        self
    }

    /// Returns true if this style emits no escape codes.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.attributes.is_empty() && self.color.is_none()
    }

    /// Escape prefix that switches this style on. Empty for a plain style.
    ///
    /// Attributes and colour are emitted as separate sequences so each one
    /// can be peeled by [`crate::ansi::split_wrapper`] independently.
    #[must_use]
    pub fn prefix(&self) -> String {
        let mut prefix: String = self
            .attributes
            .to_sgr_codes()
            .iter()
            .map(|code| format!("\x1b[{code}m"))
            .collect();
        if let Some(index) = self.color {
            prefix.push_str(&format!("\x1b[38;5;{index}m"));
        }
        prefix
    }

    /// Wrap `text` in this style's prefix and a reset.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        format!("{}{text}{RESET}", self.prefix())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        for (flag, name) in [
            (Attributes::BOLD, "bold"),
            (Attributes::DIM, "dim"),
            (Attributes::ITALIC, "italic"),
            (Attributes::UNDERLINE, "underline"),
            (Attributes::REVERSE, "reverse"),
        ] {
            if self.attributes.contains(flag) {
                parts.push(name.to_string());
            }
        }
        if let Some(index) = self.color {
            parts.push(format!("color({index})"));
        }
        if parts.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

/// Styles a table applies when styling is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleConfig {
    /// Applied to every border glyph and horizontal line when dim borders are on.
    pub border: Style,
    /// Applied to highlighted header text.
    pub header: Style,
    /// Applied to description titles.
    pub title: Style,
}

impl StyleConfig {
    /// A configuration that never emits escape codes.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            border: Style::new(),
            header: Style::new(),
            title: Style::new(),
        }
    }
}

impl Default for StyleConfig {
    /// Faint dark-grey borders, bold headers and titles.
    fn default() -> Self {
        Self {
            border: Style::new().dim().color(240),
            header: Style::new().bold(),
            title: Style::new().bold(),
        }
    }
}
