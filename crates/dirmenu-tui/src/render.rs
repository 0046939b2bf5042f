use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, AppMode};
use crate::ui::menu::render_menu;
use crate::ui::popup::{help_lines, render_popup};
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Main render function: composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App) {
    let navigator = app.navigator();
    let session = navigator.session();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    render_menu(f, chunks[0], navigator.current_page(), session.column_major());

    let prompt = match app.mode() {
        AppMode::Filter(text) => Some(("filter", text.as_str())),
        AppMode::Highlight(text) => Some(("highlight", text.as_str())),
        AppMode::Normal | AppMode::Help => None,
    };
    let props = StatusBarProps {
        page_index: navigator.page_index(),
        page_count: navigator.pages().len(),
        sort_method: session.sort_method(),
        reversed: session.is_reversed(),
        filter: session.filter(),
        highlight: session.highlight(),
        after_select: session.after_select(),
        status_message: app.status_message(),
        prompt,
    };
    render_statusbar(f, chunks[1], &props);

    if *app.mode() == AppMode::Help {
        let lines = help_lines(navigator.reserved_keys(), &navigator.side_bindings());
        render_popup(f, "Help", &lines);
    }
}

/// Plain-text form of the current page, printed when the session ends but
/// the listing should stay visible.
pub fn page_listing(app: &App) -> String {
    let page = app.navigator().current_page();
    let mut out = format!("{}\n", page.title());
    for item in page.items() {
        out.push_str(&format!("[{}] {}\n", item.key(), item.label()));
    }
    out
}
