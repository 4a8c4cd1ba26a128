//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use noughts::{Cell, Mark, Position, Snapshot};

use crate::app::{App, MenuItem, Screen};

/// The rendered grid, row by row.
pub const GRID: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
];

/// Number of cells the grid renders.
pub fn cell_count() -> usize {
    GRID.iter().map(|row| row.len()).sum()
}

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = match app.screen() {
        Screen::Menu => "Noughts - Tic Tac Toe".to_string(),
        Screen::Game => format!("Noughts - {}", app.snapshot().mode().label()),
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Menu => draw_menu(frame, chunks[1], app.menu_cursor()),
        Screen::Game => draw_board(frame, chunks[1], app.snapshot(), app.cursor()),
    }

    let (status, help) = match app.screen() {
        Screen::Menu => (
            "Choose a mode".to_string(),
            "↑/↓ select · Enter confirm · 1/2 shortcut · q quit",
        ),
        Screen::Game => (
            app.status(),
            "arrows move · Enter/1-9 play · r reset · m menu · q quit",
        ),
    };
    let status_style = if app.snapshot().banner().is_some() && app.screen() == Screen::Game {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status_text = Paragraph::new(status)
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_menu(frame: &mut Frame, area: Rect, selected: usize) {
    let menu_area = center_rect(area, 30, MenuItem::ALL.len() as u16 + 2);

    let lines: Vec<Line> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == selected {
                Line::from(Span::styled(
                    format!("> {} <", item.label()),
                    Style::default().fg(Color::Black).bg(Color::White),
                ))
            } else {
                Line::from(item.label())
            }
        })
        .collect();

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Main Menu"));
    frame.render_widget(menu, menu_area);
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, positions) in GRID.iter().enumerate() {
        draw_row(frame, rows[i * 2], snapshot, cursor, positions);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Position,
    positions: &[Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], snapshot, cursor, *pos);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, pos: Position) {
    let on_winning_line = snapshot
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let label = (pos.to_index() + 1).to_string();
    let (symbol, mut style) = match snapshot.cell(pos) {
        Cell::Empty if snapshot.cell_enabled(pos) => (label, Style::default().fg(Color::Gray)),
        Cell::Empty => (" ".to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if on_winning_line {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == cursor && snapshot.accepting_input() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
