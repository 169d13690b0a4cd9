// UI rendering logic
//
// Paints the demo: each widget's Element tree inside a bordered block, the
// submitted lines, a status bar with the focused widget's key hints, and
// the captured system logs.

use super::app::{App, FocusTarget};
use crate::logging::{LogEntry, LogLevel};
use knobs::Component;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    // Split the terminal into vertical sections:
    // - Selector (3 lines fixed)
    // - Text field (3 lines fixed)
    // - Submitted lines (fills remaining space)
    // - System logs (8 lines fixed)
    // - Status bar (1 line)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Selector
            Constraint::Length(3), // Text field
            Constraint::Min(3),    // Submitted
            Constraint::Length(8), // System logs - fixed height
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_widget_block(f, chunks[0], " Level ", &app.selector);
    render_widget_block(f, chunks[1], " Message ", &app.text_field);
    render_submitted(f, chunks[2], app);
    render_logs_panel(f, chunks[3], app);
    render_status(f, chunks[4], app);
}

/// Paint a component's layout tree inside a titled block
///
/// The border follows the component's focus flag so the active widget
/// stands out even before any key is pressed.
fn render_widget_block(f: &mut Frame, area: Rect, title: &str, component: &dyn Component) {
    let border_style = if component.focused() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);

    f.render_widget(block, area);
    f.render_widget(&component.render(), inner);
}

fn render_submitted(f: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let skip = app.submitted.len().saturating_sub(height);

    let items: Vec<ListItem> = app
        .submitted
        .iter()
        .skip(skip)
        .map(|line| ListItem::new(format!("› {}", line)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Submitted ({}) ", app.submitted.len())),
    );

    f.render_widget(list, area);
}

/// Render the status bar: focused widget, its hints, global keys
fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let name = match app.focus {
        FocusTarget::Selector => "selector",
        FocusTarget::TextField => "text field",
    };
    let hint = app.focused().focus_hint().unwrap_or_default();

    let status = Paragraph::new(format!(
        " [{}] {}  Tab:focus  Esc:quit",
        name, hint
    ))
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM));

    f.render_widget(status, area);
}

pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" System Logs ({}) ", app.log_buffer.len()));

    if app.log_buffer.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "no log entries yet",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Get recent log entries from buffer
    let height = area.height.saturating_sub(2) as usize; // Account for borders
    let log_entries = app.log_buffer.recent(height);

    // Convert log entries to list items with color coding
    let items: Vec<ListItem> = log_entries
        .iter()
        .map(|entry| {
            let formatted = format_log_entry(entry);
            let style = log_level_style(&entry.level);
            ListItem::new(formatted).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    // Last path segment is enough to tell widgets from the host
    let source = entry.target.rsplit("::").next().unwrap_or_default();
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        source,
        entry.message
    )
}

/// Get color style for log level
fn log_level_style(level: &LogLevel) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Info => Style::default().fg(Color::Blue),
        LogLevel::Debug => Style::default().fg(Color::Gray),
        LogLevel::Trace => Style::default().fg(Color::DarkGray),
    }
}
