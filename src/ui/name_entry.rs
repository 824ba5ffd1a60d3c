use crate::config::MAX_NAME_LEN;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The pre-game form: one text field per player, one of them focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntryForm {
    names: [String; 2],
    focus: usize,
}

impl NameEntryForm {
    pub fn new(player_one: String, player_two: String) -> Self {
        NameEntryForm {
            names: [player_one, player_two],
            focus: 0,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % 2;
    }

    pub fn push_char(&mut self, c: char) {
        if self.names[self.focus].chars().count() < MAX_NAME_LEN && !c.is_control() {
            self.names[self.focus].push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.names[self.focus].pop();
    }

    /// Both names trimmed, or `None` while either field is still blank.
    pub fn submit(&self) -> Option<[String; 2]> {
        let one = self.names[0].trim();
        let two = self.names[1].trim();
        if one.is_empty() || two.is_empty() {
            return None;
        }
        Some([one.to_string(), two.to_string()])
    }

    fn field_line(&self, index: usize, label: &str) -> Line<'_> {
        let focused = self.focus == index;
        let style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if focused { "▌" } else { " " };
        Line::from(vec![
            Span::styled(format!("{label:>15}: "), style),
            Span::raw(self.names[index].clone()),
            Span::styled(cursor, style),
        ])
    }
}

pub fn render(frame: &mut Frame, form: &NameEntryForm, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(frame.area());

    render_form(frame, form, chunks[1]);
    render_message(frame, message, chunks[2]);
}

fn render_form(frame: &mut Frame, form: &NameEntryForm, area: Rect) {
    let lines = vec![
        Line::from(""),
        form.field_line(0, "Player 1 Name"),
        Line::from(""),
        form.field_line(1, "Player 2 Name"),
        Line::from(""),
        Line::from("Tab: Switch Field  |  Enter: Start Game  |  Esc: Quit"),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_are_refused() {
        let form = NameEntryForm::new(String::new(), String::new());
        assert_eq!(form.submit(), None);

        let form = NameEntryForm::new("Alice".into(), "   ".into());
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn test_submit_trims_names() {
        let form = NameEntryForm::new(" Alice ".into(), "Bob".into());
        assert_eq!(form.submit(), Some(["Alice".into(), "Bob".into()]));
    }

    #[test]
    fn test_typing_targets_focused_field() {
        let mut form = NameEntryForm::new(String::new(), String::new());
        form.push_char('A');
        form.focus_next();
        form.push_char('B');
        assert_eq!(form.submit(), Some(["A".into(), "B".into()]));

        form.pop_char();
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = NameEntryForm::new(String::new(), String::new());
        form.focus_next();
        form.focus_next();
        form.push_char('X');
        assert_eq!(form.names[0], "X");
    }

    #[test]
    fn test_name_length_is_capped() {
        let mut form = NameEntryForm::new(String::new(), "Bob".into());
        for _ in 0..(MAX_NAME_LEN + 5) {
            form.push_char('a');
        }
        assert_eq!(form.names[0].chars().count(), MAX_NAME_LEN);
    }
}
