use dirmenu_core::config::keymap::SideBinding;
use dirmenu_core::nav::keys::ReservedKeys;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Keys handled by the TUI itself rather than the navigator.
const TUI_KEYS: [(&str, &str); 7] = [
    ("Esc / C-c", "Quit"),
    ("C-q", "Quit, printing the current page"),
    ("C-f", "Edit the filter regex"),
    ("C-l", "Edit the highlight query"),
    ("Left / Right", "Previous / next page"),
    ("Backspace", "Go to the parent directory"),
    ("F1", "Toggle this help"),
];

/// Renders a centered popup dialog with the given title and message lines.
pub fn render_popup(f: &mut Frame, title: &str, lines: &[String]) {
    let area = centered_rect(60, 70, f.area());

    f.render_widget(Clear, area);

    let content: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();

    let popup = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(popup, area);
}

/// Lines for the help popup: reserved keys, side bindings, then TUI keys.
pub fn help_lines(reserved: &ReservedKeys, bindings: &[SideBinding]) -> Vec<String> {
    let mut lines = vec![
        format!("  {:<14} Go to the parent directory", reserved.back_to_parent),
        format!("  {:<14} Open the current directory", reserved.current_directory),
        String::new(),
    ];
    lines.extend(
        bindings
            .iter()
            .map(|b| format!("  {:<14} {}", b.key, b.description)),
    );
    lines.push(String::new());
    lines.extend(
        TUI_KEYS
            .iter()
            .map(|(key, what)| format!("  {key:<14} {what}")),
    );
    lines
}

/// Calculates a centered rectangle of the given percentage size within the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
