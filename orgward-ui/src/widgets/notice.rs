//! Gate output as terminal lines.

use ratatui::text::{Line, Span};

use crate::Theme;
use crate::gate::Rendered;

/// Turn gated line content into a displayable line.
///
/// Granted and fallback content pass through unchanged, notices become a
/// muted line and `Nothing` yields `None`.
pub fn rendered_line<'a>(rendered: Rendered<Line<'a>>, theme: &Theme) -> Option<Line<'a>> {
    match rendered {
        Rendered::Granted(line) | Rendered::Fallback(line) => Some(line),
        Rendered::Notice(message) => Some(Line::from(Span::styled(message, theme.notice()))),
        Rendered::Nothing => None,
    }
}
