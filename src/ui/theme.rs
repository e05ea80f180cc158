//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Foreground color of a rendered translation.
pub const TRANSLATION_RGB: (u8, u8, u8) = (214, 112, 214);

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Usage", "Notes")
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Style for secondary/supplementary info (e.g., language names)
    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    /// Style for a translated text.
    ///
    /// Always truecolor `214;112;214`, regardless of `NO_COLOR`.
    pub fn translation<T: Display>(text: T) -> String {
        let (r, g, b) = TRANSLATION_RGB;
        format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
    }
}
