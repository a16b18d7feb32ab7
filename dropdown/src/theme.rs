//! Named colors used by the dropdown's visual contract.
//!
//! Views refer to colors by name (`Color::var("text")`); a [`Theme`] maps
//! those names to concrete colors when the view is drawn.

use crate::types::{Color, Rgb};

pub const TEXT: &str = "text";
pub const CAPTION: &str = "caption";
pub const PLACEHOLDER: &str = "placeholder";
pub const TRIGGER_BORDER: &str = "trigger_border";
pub const SURFACE: &str = "surface";
pub const HEADER: &str = "header";
pub const HEADER_RULE: &str = "header_rule";
pub const RULE: &str = "rule";
pub const PRESSED: &str = "pressed";
pub const CURSOR: &str = "cursor";
pub const BADGE: &str = "badge";
pub const CHECKMARK: &str = "checkmark";
pub const BUTTON: &str = "button";
pub const BUTTON_BORDER: &str = "button_border";
pub const FOCUS: &str = "focus";

/// Fraction the backdrop darkens whatever lies under the sheet.
pub const BACKDROP_DIM: f32 = 0.4;

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Light palette matching the control's reference look.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub text: Color,
    pub caption: Color,
    pub placeholder: Color,
    pub trigger_border: Color,
    pub surface: Color,
    pub header: Color,
    pub header_rule: Color,
    pub rule: Color,
    pub pressed: Color,
    pub cursor: Color,
    pub badge: Color,
    pub checkmark: Color,
    pub button: Color,
    pub button_border: Color,
    pub focus: Color,
}

impl DefaultTheme {
    pub fn new() -> Self {
        Self {
            text: Color::hex(0x111111),
            caption: Color::hex(0x333333),
            placeholder: Color::hex(0x8E8E93),
            trigger_border: Color::hex(0xDADCE0),
            surface: Color::hex(0xFFFFFF),
            header: Color::hex(0xF2F3F5),
            header_rule: Color::hex(0x616262),
            rule: Color::hex(0xEEEEEE),
            pressed: Color::hex(0xF7F7F7),
            cursor: Color::hex(0xE8EAED),
            badge: Color::hex(0x666666),
            checkmark: Color::hex(0x000000),
            button: Color::hex(0xF0F0F0),
            button_border: Color::hex(0x666666),
            focus: Color::oklch(0.55, 0.15, 260.0),
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            TEXT => Some(&self.text),
            CAPTION => Some(&self.caption),
            PLACEHOLDER => Some(&self.placeholder),
            TRIGGER_BORDER => Some(&self.trigger_border),
            SURFACE => Some(&self.surface),
            HEADER => Some(&self.header),
            HEADER_RULE => Some(&self.header_rule),
            RULE => Some(&self.rule),
            PRESSED => Some(&self.pressed),
            CURSOR => Some(&self.cursor),
            BADGE => Some(&self.badge),
            CHECKMARK => Some(&self.checkmark),
            BUTTON => Some(&self.button),
            BUTTON_BORDER => Some(&self.button_border),
            FOCUS => Some(&self.focus),
            _ => None,
        }
    }
}

/// Context for resolving color variables against a theme.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to RGB, following variables through the theme.
    /// Unknown variables resolve to `None`.
    pub fn resolve(&self, color: &Color) -> Option<Rgb> {
        self.resolve_depth(color, 0)
    }

    fn resolve_depth(&self, color: &Color, depth: u8) -> Option<Rgb> {
        match color {
            Color::Var(name) => {
                // Bounded: a theme entry may point back at itself
                if depth > 8 {
                    log::warn!("color variable '{}' does not resolve", name);
                    return None;
                }
                let resolved = self.theme.resolve(name)?;
                self.resolve_depth(resolved, depth + 1)
            }
            other => other.to_rgb(),
        }
    }

    /// Resolve with a fallback for missing or unknown colors.
    pub fn resolve_or(&self, color: Option<&Color>, fallback: Rgb) -> Rgb {
        color.and_then(|c| self.resolve(c)).unwrap_or(fallback)
    }
}
