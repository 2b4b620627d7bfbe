//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use super::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictactoe_core::{GameStatus, Position, Square};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title + status chip
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Scoreboard
            Constraint::Length(3),  // Last event
            Constraint::Length(1),  // Key help
        ])
        .split(area);

    draw_header(frame, chunks[0], app, theme);
    draw_board(frame, chunks[1], app, theme);
    draw_scoreboard(frame, chunks[2], app, theme);

    let event = Paragraph::new(app.last_event())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(event, chunks[3]);

    let help = Paragraph::new("arrows/hjkl move · enter/space place · 1-9 cell · n new round · r reset · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let chip_style = match app.game().status() {
        GameStatus::InProgress => {
            Style::default().fg(theme.player(app.game().current_player()))
        }
        GameStatus::Won(win) => Style::default()
            .fg(Color::Black)
            .bg(theme.player(win.player))
            .add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    };

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!(" {} ", app.status_chip()), chip_style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let board_area = center_rect(area, 41, 11);

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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, theme, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, theme: &Theme, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, theme, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, theme: &Theme, pos: Position) {
    let game = app.game();
    let key = (pos.to_index() + 1).to_string();

    let (symbol, mut style) = match game.board().get(pos) {
        Square::Empty => (key, Style::default().fg(Color::DarkGray)),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(theme.player(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = game
        .winning_line()
        .is_some_and(|line| line.contains(&pos));
    if on_winning_line {
        style = style.bg(theme.highlight).fg(Color::Black);
    }
    if pos == app.cursor() && !game.is_game_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Middle line of the three-row cell.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let scores = app.game().scores();
    let line = Line::from(vec![
        Span::styled(format!("X {}", scores.x()), Style::default().fg(theme.x).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(format!("O {}", scores.o()), Style::default().fg(theme.o).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(format!("Draws {}", scores.draws()), Style::default().fg(Color::Gray)),
    ]);

    let board = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title("Score"),
    );
    frame.render_widget(board, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
