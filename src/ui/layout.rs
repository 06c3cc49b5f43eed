//! Screen layout for the sorting scene: bordered play field with a prompt
//! strip under it, and a scoreboard column on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use trash_toss::game::RoundResult;

const SCOREBOARD_WIDTH: u16 = 24;
const FIELD_MIN_HEIGHT: u16 = 10;
const PROMPT_HEIGHT: u16 = 2;
const MODAL_WIDTH: u16 = 40;

/// Drawable areas inside the scene borders.
pub struct SceneAreas {
    pub field: Rect,
    pub prompt: Rect,
    pub scoreboard: Rect,
}

/// Clear the screen, draw the field and scoreboard borders and return what
/// is left inside them.
///
/// ```text
/// ┌─ Trash Toss ─────────────┐┌─ Score ──────┐
/// │ [♻]     c  b  o      [X] ││              │
/// │▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔││              │
/// └──────────────────────────┘│              │
///        Sort the Tin Can!    │              │
///   [←] Recycle  [→] Trash    └──────────────┘
/// ```
pub fn split_scene(frame: &mut Frame, area: Rect, accent: Color) -> SceneAreas {
    frame.render_widget(Clear, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SCOREBOARD_WIDTH)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(FIELD_MIN_HEIGHT),
            Constraint::Length(PROMPT_HEIGHT),
        ])
        .split(columns[0]);

    SceneAreas {
        field: bordered(frame, left[0], " Trash Toss ", accent),
        prompt: left[1],
        scoreboard: bordered(frame, columns[1], " Score ", Color::DarkGray),
    }
}

fn bordered(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Key hints as `[key] action` pairs on one line.
fn hint_line<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, action) in hints {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Headline above a row of key hints, both centered.
pub fn render_prompt(
    frame: &mut Frame,
    area: Rect,
    headline: &str,
    color: Color,
    hints: &[(&str, &str)],
) {
    let lines = vec![
        Line::from(Span::styled(headline, Style::default().fg(color))),
        hint_line(hints),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

pub fn result_color(result: RoundResult) -> Color {
    match result {
        RoundResult::Win => Color::Green,
        RoundResult::Loss => Color::Red,
    }
}

/// Centered round-over box on top of the scene, sized to its body.
pub fn render_result_modal(
    frame: &mut Frame,
    area: Rect,
    result: RoundResult,
    title: &str,
    body: Vec<Line>,
) {
    let color = result_color(result);
    // border (2) + title + spacer
    let height = (body.len() as u16 + 4).min(area.height);
    let width = MODAL_WIDTH.min(area.width);
    let modal = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(body);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(Clear, modal);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        modal,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_line_separates_pairs() {
        let line = hint_line(&[("[←]", "Recycle"), ("[q]", "Quit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[←] Recycle  [q] Quit");
    }

    #[test]
    fn test_result_colors() {
        assert_eq!(result_color(RoundResult::Win), Color::Green);
        assert_eq!(result_color(RoundResult::Loss), Color::Red);
    }
}
