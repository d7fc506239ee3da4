//! Crossterm styling for the text menu.
//!
//! Every helper returns a ready-to-print `String`; with color disabled the
//! text comes back untouched so output stays diffable in tests and pipes.

use crossterm::style::{Color, Stylize};

/// Consistent color scheme for headings, results, and battle output.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Section titles and banners.
    pub fn heading(&self, text: &str) -> String {
        self.paint(text, Color::Cyan, true)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, Color::Green, false)
    }

    /// Not-found reports and rejected choices.
    pub fn error(&self, text: &str) -> String {
        self.paint(text, Color::Red, false)
    }

    pub fn damage(&self, text: &str) -> String {
        self.paint(text, Color::DarkYellow, false)
    }

    pub fn winner(&self, text: &str) -> String {
        self.paint(text, Color::Yellow, true)
    }

    /// Health figure colored by the share of `maximum` left.
    pub fn health(&self, current: i32, maximum: i32) -> String {
        let text = current.to_string();
        if maximum <= 0 {
            return self.paint(&text, Color::Grey, false);
        }

        let percent = i64::from(current) * 100 / i64::from(maximum);
        let color = match percent {
            75.. => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::DarkYellow,
            _ => Color::Red,
        };
        self.paint(&text, color, false)
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.color {
            return text.to_owned();
        }
        let styled = text.with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}
