use crate::game::{Board, Cell, GameOutcome, GameState, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Every board line is this many characters wide: a 3-char left margin,
/// seven 3-char cells, and a 2-char right margin. Mouse mapping in
/// `column_at` depends on this geometry.
const GRID_WIDTH: u16 = 26;
const CELL_WIDTH: u16 = 3;
const LEFT_MARGIN: u16 = 3;

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Render the play screen and return the area the board grid occupied, so
/// the event loop can translate mouse clicks back into columns.
pub fn render(
    frame: &mut Frame,
    game: &GameState,
    names: &[String; 2],
    selected_column: usize,
    message: &Option<String>,
    outcome: Option<GameOutcome>,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, names, outcome, chunks[0]);
    render_board(frame, game.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, outcome.is_some(), chunks[3]);

    chunks[1]
}

/// Map a terminal column from a mouse event to a board column, if the click
/// landed inside the centered grid. Only the x position matters; a click
/// anywhere in a column band drops there.
pub fn column_at(board_area: Rect, x: u16) -> Option<usize> {
    if board_area.width < GRID_WIDTH {
        return None;
    }
    let grid_x = board_area.x + (board_area.width - GRID_WIDTH) / 2;
    let cells_x = grid_x + LEFT_MARGIN;
    if x < cells_x || x >= cells_x + CELL_WIDTH * COLS as u16 {
        return None;
    }
    Some(((x - cells_x) / CELL_WIDTH) as usize)
}

fn render_header(
    frame: &mut Frame,
    game: &GameState,
    names: &[String; 2],
    outcome: Option<GameOutcome>,
    area: Rect,
) {
    let player = game.active_player();
    let (status, color) = match outcome {
        Some(_) => ("Game Over".to_string(), Color::White),
        None => {
            let name = display_name(names, player);
            (format!("Current Player: {name}"), player_color(player))
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::One => (" ● ", player_color(Player::One)),
                Cell::Two => (" ● ", player_color(Player::Two)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator under the grid
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, game_over: bool, area: Rect) {
    let text = if game_over {
        "Enter: New Game  |  Q: Quit"
    } else {
        "Click a column to drop  |  ←/→: Select  |  Enter: Drop  |  Q: Quit"
    };

    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn display_name(names: &[String; 2], player: Player) -> &str {
    let name = match player {
        Player::One => &names[0],
        Player::Two => &names[1],
    };
    if name.is_empty() {
        player.label()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_at_maps_cell_bands() {
        let area = Rect::new(0, 0, GRID_WIDTH, 10);
        // Grid starts at x=0, cells at x=3, three terminal columns per cell
        assert_eq!(column_at(area, 2), None);
        assert_eq!(column_at(area, 3), Some(0));
        assert_eq!(column_at(area, 5), Some(0));
        assert_eq!(column_at(area, 6), Some(1));
        assert_eq!(column_at(area, 23), Some(6));
        assert_eq!(column_at(area, 24), None);
    }

    #[test]
    fn test_column_at_accounts_for_centering() {
        let area = Rect::new(10, 0, GRID_WIDTH + 20, 10);
        let grid_x = 10 + 10; // centered with 10 columns of slack each side
        assert_eq!(column_at(area, grid_x + 2), None);
        assert_eq!(column_at(area, grid_x + 3), Some(0));
        assert_eq!(column_at(area, grid_x + 3 + 3 * 3 + 1), Some(3));
    }

    #[test]
    fn test_column_at_in_narrow_area() {
        let area = Rect::new(0, 0, GRID_WIDTH - 1, 10);
        assert_eq!(column_at(area, 5), None);
    }

    #[test]
    fn test_display_name_falls_back_to_label() {
        let names = [String::new(), "Bob".to_string()];
        assert_eq!(display_name(&names, Player::One), "Player 1");
        assert_eq!(display_name(&names, Player::Two), "Bob");
    }
}
