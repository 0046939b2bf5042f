//! The keyed menu grid.
//!
//! Items are laid out in as many equal-width columns as the area allows,
//! filled row by row or column by column depending on the session layout.

use dirmenu_core::nav::page::{KeyedEntry, Page};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const COLUMN_GAP: usize = 2;

/// Renders `page` inside a bordered block titled with the page title.
pub fn render_menu(f: &mut Frame, area: Rect, page: &Page, column_major: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(page.title().to_owned())
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let items = page.items();
    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "(empty)",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        f.render_widget(empty, inner);
        return;
    }

    let cell_width = items.iter().map(cell_len).max().unwrap_or(0) + COLUMN_GAP;
    let columns = column_count(cell_width, inner.width);
    let lines: Vec<Line> = grid_rows(items.len(), columns, column_major)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .flat_map(|i| cell_spans(&items[i], cell_width))
                .collect();
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

/// How many cells of `cell_width` fit in `area_width`, at least one.
pub fn column_count(cell_width: usize, area_width: u16) -> usize {
    if cell_width == 0 {
        return 1;
    }
    (usize::from(area_width) / cell_width).max(1)
}

/// Item indices for each display row.
pub fn grid_rows(count: usize, columns: usize, column_major: bool) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let rows = count.div_ceil(columns);
    if column_major {
        (0..rows)
            .map(|r| (r..count).step_by(rows).collect())
            .collect()
    } else {
        (0..count)
            .collect::<Vec<_>>()
            .chunks(columns)
            .map(<[usize]>::to_vec)
            .collect()
    }
}

fn cell_len(item: &KeyedEntry) -> usize {
    cell_width(item.key(), item.label())
}

/// Display columns taken by `"[key] label"`; wide characters count double.
fn cell_width(key: &str, label: &str) -> usize {
    Span::raw(format!("[{key}] ")).width() + Span::raw(label).width()
}

fn cell_spans(item: &KeyedEntry, width: usize) -> Vec<Span<'static>> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let label_style = if item.entry().is_dir() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let match_style = label_style
        .fg(Color::Magenta)
        .add_modifier(Modifier::UNDERLINED);

    let mut spans = vec![
        Span::styled(format!("[{}]", item.key()), key_style),
        Span::raw(" "),
    ];
    match item.highlight() {
        Some(indices) => {
            for (i, c) in item.label().chars().enumerate() {
                let style = if indices.contains(&i) {
                    match_style
                } else {
                    label_style
                };
                spans.push(Span::styled(c.to_string(), style));
            }
        }
        None => spans.push(Span::styled(item.label().to_owned(), label_style)),
    }
    let padding = width.saturating_sub(cell_len(item));
    spans.push(Span::raw(" ".repeat(padding)));
    spans
}
