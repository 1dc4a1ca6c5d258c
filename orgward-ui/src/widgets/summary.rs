//! Access summary panel.
//!
//! Shows the acting user's role and a yes/no row for each summary check.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::Theme;
use crate::access::AccessSummary;

/// Widget rendering an [`AccessSummary`].
#[derive(Debug, Clone, Default)]
pub struct AccessSummaryWidget {
    summary: Option<AccessSummary>,
}

impl AccessSummaryWidget {
    pub fn new(summary: AccessSummary) -> Self {
        Self {
            summary: Some(summary),
        }
    }

    /// Widget for a context that has not loaded yet.
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> Option<&AccessSummary> {
        self.summary.as_ref()
    }

    fn rows(summary: &AccessSummary) -> [(&'static str, bool); 8] {
        [
            ("View organization", summary.can_view_organization),
            ("Manage organization", summary.can_manage_organization),
            ("Manage members", summary.can_manage_members),
            ("Create content", summary.can_create_content),
            ("Manage content", summary.can_manage_content),
            ("View analytics", summary.can_view_analytics),
            ("Owner", summary.is_owner),
            ("Admin or owner", summary.is_admin_or_owner),
        ]
    }

    /// Converts the widget to a renderable Paragraph with the given theme.
    pub fn to_paragraph(&self, theme: &Theme) -> Paragraph<'static> {
        let block = Block::default()
            .title(Span::styled(" Access ", theme.bold))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        let lines = match &self.summary {
            None => vec![Line::from(Span::styled("Loading membership...", theme.notice()))],
            Some(summary) => {
                let role = summary
                    .role
                    .map(|role| role.as_str())
                    .unwrap_or("none");
                let mut lines = vec![Line::from(vec![
                    Span::styled("Role: ", Style::default().fg(theme.fg)),
                    Span::styled(role, Style::default().fg(theme.accent)),
                ])];

                lines.extend(Self::rows(summary).into_iter().map(|(label, allowed)| {
                    let mark = if allowed { "\u{2713}" } else { "\u{2717}" }; // ✓ / ✗
                    let label_style = if allowed {
                        Style::default().fg(theme.fg)
                    } else {
                        theme.dim
                    };
                    Line::from(vec![
                        Span::styled(format!("{mark} "), theme.decision(allowed)),
                        Span::styled(label, label_style),
                    ])
                }));
                lines
            }
        };

        Paragraph::new(lines).block(block)
    }
}
