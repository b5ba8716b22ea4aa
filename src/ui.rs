//! Rendering. Pure presentation over observable state: nothing in here
//! mutates the stores.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, PromptKind};
use crate::entry::FileEntry;
use crate::settings::ViewMode;

pub fn draw(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tab bar
            Constraint::Min(0),    // main area
            Constraint::Length(1), // prompt or status line
        ])
        .split(frame.area());

    draw_tab_bar(frame, app, rows[0]);

    if app.settings.sidebar_visible {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(0)])
            .split(rows[1]);
        draw_sidebar(frame, app, columns[0]);
        draw_entries(frame, app, columns[1]);
    } else {
        draw_entries(frame, app, rows[1]);
    }

    if app.prompt.is_some() {
        draw_prompt(frame, app, rows[2]);
    } else {
        draw_status_bar(frame, app, rows[2]);
    }
}

fn draw_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .tabs
        .tabs()
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.label)))
        .collect();
    let active_index = app
        .tabs
        .tabs()
        .iter()
        .position(|t| t.id == app.tabs.active_id())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(active_index)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .bookmarks
        .bookmarks()
        .iter()
        .map(|b| ListItem::new(b.label.clone()))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Bookmarks ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

fn draw_entries(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(" {} ", app.tabs.active_tab().path);
    let block = Block::default().title(title).borders(Borders::ALL);

    if app.listing.is_loading() {
        let paragraph = Paragraph::new("Loading...")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(paragraph, area);
        return;
    }

    // Listing errors render in place of the file list.
    if let Some(error) = app.listing.error() {
        let paragraph = Paragraph::new(error.to_string())
            .block(block)
            .style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
        return;
    }

    let entries = app.visible_entries();
    if entries.is_empty() {
        let paragraph = Paragraph::new("Empty directory")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(entry_line(app, entry, area.width))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.cursor.min(entries.len() - 1)));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_stateful_widget(list, area, &mut state);
}

fn entry_line(app: &App, entry: &FileEntry, width: u16) -> Line<'static> {
    let marker = if app.selection.is_selected(&entry.path) {
        "*"
    } else {
        " "
    };
    let name = if entry.is_dir {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    };

    let mut style = if entry.is_dir {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else if entry.is_symlink {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    // Entries staged for a cut render dimmed until pasted.
    if app.clipboard.contains_cut(&entry.path) {
        style = style.add_modifier(Modifier::DIM);
    }

    match app.settings.view_mode {
        ViewMode::List => {
            let size = if entry.is_dir {
                String::new()
            } else {
                format_size(entry.size)
            };
            let modified = entry.modified.clone().unwrap_or_default();
            let name_width = (width as usize).saturating_sub(30).max(12);
            Line::from(vec![
                Span::raw(format!("{marker} ")),
                Span::styled(format!("{name:<name_width$.name_width$}"), style),
                Span::styled(format!("{size:>9} "), Style::default().fg(Color::Gray)),
                Span::styled(modified, Style::default().fg(Color::DarkGray)),
            ])
        }
        ViewMode::Grid => Line::from(vec![
            Span::raw(format!("{marker} ")),
            Span::styled(name, style),
        ]),
    }
}

fn draw_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = &app.prompt else { return };
    let label = match prompt.kind {
        PromptKind::CreateFolder => "New folder",
        PromptKind::Rename => "Rename to",
        PromptKind::Search => "Search",
        PromptKind::OpenLocation => "Go to",
        PromptKind::ConfirmDelete => "Delete selection? [y/n]",
    };
    let text = if prompt.kind == PromptKind::ConfirmDelete {
        label.to_string()
    } else {
        format!("{}: {}", label, prompt.buffer)
    };
    let paragraph = Paragraph::new(text).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow),
    );
    frame.render_widget(paragraph, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let selection_info = if app.selection.is_empty() {
        String::new()
    } else {
        format!(" | {} selected", app.selection.len())
    };
    let clipboard_info = if app.clipboard.is_empty() {
        String::new()
    } else {
        format!(" | {} staged", app.clipboard.paths().len())
    };

    let line = Line::from(vec![
        Span::raw(format!(
            " {}{}{}",
            app.status_message, selection_info, clipboard_info
        )),
    ]);
    let paragraph = Paragraph::new(line).style(
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray),
    );
    frame.render_widget(paragraph, area);
}

/// Human-readable byte size for the list view.
fn format_size(size: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;
    match size {
        s if s < KIB => format!("{s} B"),
        s if s < MIB => format!("{:.1} K", s as f64 / KIB as f64),
        s if s < GIB => format!("{:.1} M", s as f64 / MIB as f64),
        s => format!("{:.1} G", s as f64 / GIB as f64),
    }
}
