//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the page position, sort method, active filter and highlight, and
//! an optional message. While a prompt is open it shows the prompt instead.

use dirmenu_core::event::AfterSelect;
use dirmenu_core::nav::sort::SortMethod;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub page_index: usize,
    pub page_count: usize,
    pub sort_method: SortMethod,
    pub reversed: bool,
    pub filter: Option<&'a str>,
    pub highlight: Option<&'a str>,
    pub after_select: AfterSelect,
    pub status_message: Option<&'a str>,
    /// `(label, text)` of an open prompt.
    pub prompt: Option<(&'a str, &'a str)>,
}

const BG: Color = Color::DarkGray;

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>) {
    let base = Style::default().bg(BG).fg(Color::White);

    if let Some((label, text)) = props.prompt {
        let line = Line::from(vec![
            Span::styled(format!(" {label}: "), base.add_modifier(Modifier::BOLD)),
            Span::styled(format!("{text}_"), base),
        ]);
        f.render_widget(Paragraph::new(line).style(base), area);
        return;
    }

    let mut spans = vec![
        Span::styled(format!(" {}/{}", props.page_index, props.page_count), base),
        Span::styled(format!("  {}", sort_label(props.sort_method, props.reversed)), base),
    ];
    if let Some(filter) = props.filter {
        spans.push(Span::styled(format!("  filter /{filter}/"), base.fg(Color::Green)));
    }
    if let Some(query) = props.highlight {
        spans.push(Span::styled(format!("  mark {query:?}"), base.fg(Color::Magenta)));
    }
    if props.after_select == AfterSelect::Stay {
        spans.push(Span::styled("  [stay]", base.fg(Color::Cyan)));
    }
    if let Some(msg) = props.status_message {
        spans.push(Span::styled(
            format!("  {msg}"),
            base.fg(Color::Red).add_modifier(Modifier::ITALIC),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
}

fn sort_label(method: SortMethod, reversed: bool) -> String {
    let arrow = if reversed { "↑" } else { "↓" };
    format!("{method} {arrow}")
}
