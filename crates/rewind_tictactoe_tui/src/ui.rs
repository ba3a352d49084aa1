//! Stateless UI rendering for the game and its move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameHistory, Mark, Position, Square, rules};

use crate::app::App;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const MOVE_LIST_WIDTH: u16 = 24;

/// Screen regions that respond to mouse clicks, recorded during a draw.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    cells: Vec<(Position, Rect)>,
    moves: Vec<(usize, Rect)>,
}

impl HitMap {
    /// Records the area of a board square.
    pub fn push_cell(&mut self, pos: Position, area: Rect) {
        self.cells.push((pos, area));
    }

    /// Records the area of a move list row.
    pub fn push_move(&mut self, index: usize, area: Rect) {
        self.moves.push((index, area));
    }

    /// Board square under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .find(|(_, area)| contains(*area, column, row))
            .map(|(pos, _)| *pos)
    }

    /// History index of the move list row under the given coordinates.
    pub fn move_at(&self, column: u16, row: u16) -> Option<usize> {
        self.moves
            .iter()
            .find(|(_, area)| contains(*area, column, row))
            .map(|(index, _)| *index)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Renders the whole screen and returns the clickable regions.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let mut hit_map = HitMap::default();
    let history = app.history();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(25), Constraint::Length(MOVE_LIST_WIDTH)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, &mut hit_map);
    draw_moves(frame, body[1], history, app.selected(), &mut hit_map);

    let status = Paragraph::new(status_text(history))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9/Enter: Play | [ ]: Step | Home/End | j/k/g: Pick | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    hit_map
}

/// Status line, noting when no square is left to play.
fn status_text(history: &GameHistory) -> String {
    let status = history.status().to_string();
    if history.current_winner().is_none() && rules::is_full(history.current_snapshot()) {
        format!("{} (board full, jump back to branch)", status)
    } else {
        status
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, hit_map: &mut HitMap) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let winning = rules::winning_line(app.history().current_snapshot());

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(area);

        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            if let Some(pos) = Position::from_index(row * 3 + col) {
                let highlight = winning.is_some_and(|line| line.contains(&pos));
                draw_cell(frame, cell, app, pos, highlight);
                hit_map.push_cell(pos, cell);
            }
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, winning: bool) {
    let square = app.history().current_snapshot().get(pos);

    let (symbol, base_style) = match square {
        Square::Empty if app.show_hints() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (" ".to_string(), Style::default()),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning {
        base_style.bg(Color::Green)
    } else if pos == app.focus() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the cell holds the symbol.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(
    frame: &mut Frame,
    area: Rect,
    history: &GameHistory,
    selected: usize,
    hit_map: &mut HitMap,
) {
    let block = Block::default().borders(Borders::ALL).title("History");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (row, entry) in history.move_list().iter().enumerate() {
        let Ok(offset) = u16::try_from(row) else {
            break;
        };
        if offset >= inner.height {
            break;
        }

        let index = *entry.index();
        let marker = if index == history.cursor() { "*" } else { " " };
        let text = format!("{}{}. Go to {}", marker, index + 1, entry.label());

        let mut style = Style::default();
        if index == history.cursor() {
            style = style.add_modifier(Modifier::BOLD);
        }
        if index == selected {
            style = style.fg(Color::Yellow);
        }

        let line_area = Rect::new(inner.x, inner.y + offset, inner.width, 1);
        frame.render_widget(Paragraph::new(text).style(style), line_area);
        hit_map.push_move(index, line_area);
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        let mut hit_map = HitMap::default();
        terminal
            .draw(|f| hit_map = draw(f, app))
            .expect("draw");
        let text = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (text, hit_map)
    }

    fn play(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_new_game_shows_start_and_next_player() {
        let app = App::new(true);
        let (text, hit_map) = render(&app);

        assert!(text.contains("Next player: X"));
        assert!(text.contains("Go to start"));
        assert!(!text.contains("Go to move #1"));
        assert_eq!(hit_map.cells.len(), 9);
        assert_eq!(hit_map.moves.len(), 1);
    }

    #[test]
    fn test_win_shows_winner_and_move_list() {
        let mut app = App::new(true);
        play(&mut app, "15263");
        let (text, hit_map) = render(&app);

        assert!(text.contains("Winner: X"));
        assert!(text.contains("Go to move #5"));
        assert_eq!(hit_map.moves.len(), 6);
    }

    #[test]
    fn test_hit_map_cells_are_distinct() {
        let app = App::new(true);
        let (_, hit_map) = render(&app);

        for (pos, area) in &hit_map.cells {
            assert_eq!(hit_map.cell_at(area.x, area.y), Some(*pos));
        }
        let (index, area) = hit_map.moves[0];
        assert_eq!(hit_map.move_at(area.x, area.y), Some(index));
    }

    #[test]
    fn test_full_board_notes_no_moves_left() {
        let mut app = App::new(true);
        // X O X / X O O / O X X
        play(&mut app, "123546879");
        let (text, _) = render(&app);
        assert!(!text.contains("Winner"));
        assert!(text.contains("Next player: O (board full"));
        assert!(text.contains("Go to move #9"));
    }
}
