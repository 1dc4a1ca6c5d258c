//! Colors and styles for access widgets.

use ratatui::style::{Color, Modifier, Style};

/// Theme used by every orgward widget.
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub fg: Color,
    pub accent: Color,
    pub granted: Color,
    pub denied: Color,
    /// Explanatory text such as denial notices
    pub muted: Color,
    pub border: Color,

    pub bold: Style,
    /// Labels of denied rows
    pub dim: Style,
}

impl Theme {
    /// Style for a yes/no cell
    pub fn decision(&self, allowed: bool) -> Style {
        let color = if allowed { self.granted } else { self.denied };
        Style::default().fg(color)
    }

    pub fn notice(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::ITALIC)
    }
}

impl Default for Theme {
    fn default() -> Self {
        orgward_default()
    }
}

/// Default orgward palette: slate foreground with teal accents.
pub fn orgward_default() -> Theme {
    let fg = Color::Rgb(220, 224, 232); // #dce0e8

    Theme {
        fg,
        accent: Color::Rgb(0, 180, 170),   // #00b4aa
        granted: Color::Rgb(80, 200, 120), // #50c878
        denied: Color::Rgb(255, 85, 85),   // #ff5555
        muted: Color::Rgb(120, 124, 132),  // #787c84
        border: Color::Rgb(60, 60, 60),    // #3c3c3c

        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
    }
}
