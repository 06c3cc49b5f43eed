//! UI rendering for the trash sorting game.

use crate::ui::layout::{render_prompt, render_result_modal, split_scene};
use glam::Vec2;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use trash_toss::game::{Bin, TrashGame};

/// Visible world window: x in [-WORLD_HALF_WIDTH, WORLD_HALF_WIDTH], y in [0, WORLD_HEIGHT].
const WORLD_HALF_WIDTH: f32 = 10.0;
const WORLD_HEIGHT: f32 = 10.0;

const CONTROLS: [(&str, &str); 3] = [("[←]", "Recycle"), ("[→]", "Trash"), ("[q]", "Quit")];

/// Render the whole game screen.
pub fn render_sort_game(
    frame: &mut Frame,
    area: Rect,
    game: &TrashGame,
    best_score: Option<i32>,
    new_best: bool,
) {
    let scene = split_scene(frame, area, Color::Green);

    if game.hud.start_visible {
        render_title(frame, scene.field);
        render_prompt(
            frame,
            scene.prompt,
            "Press Enter to start!",
            Color::Yellow,
            &[("[Enter]", "Start"), ("[q]", "Quit")],
        );
    } else {
        render_play_area(frame, scene.field, game);
        render_prompt_content(frame, scene.prompt, game);
    }
    render_scoreboard(frame, scene.scoreboard, game, best_score);

    if game.hud.game_over_visible {
        render_round_over(frame, area, game, best_score, new_best);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "TRASH TOSS",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Sort the falling trash before time runs out."),
        Line::from("Recyclables go left, everything else goes right."),
        Line::from(""),
        Line::from(Span::styled(
            "[ Start ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let y = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
    let height = (lines.len() as u16).min(area.height);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(area.x, y, area.width, height),
    );
}

/// Map a world position to a cell in a `width` x `height` grid.
fn world_to_cell(pos: Vec2, width: usize, height: usize) -> Option<(usize, usize)> {
    if width == 0 || height == 0 {
        return None;
    }
    let nx = (pos.x + WORLD_HALF_WIDTH) / (2.0 * WORLD_HALF_WIDTH);
    let ny = 1.0 - pos.y / WORLD_HEIGHT;
    if !(0.0..=1.0).contains(&nx) || !(0.0..=1.0).contains(&ny) {
        return None;
    }
    let col = ((nx * (width - 1) as f32).round() as usize).min(width - 1);
    let row = ((ny * (height - 1) as f32).round() as usize).min(height - 1);
    Some((col, row))
}

/// Render the play field: floor, bins and live items.
fn render_play_area(frame: &mut Frame, area: Rect, game: &TrashGame) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default()); width]; height];

    // Floor
    for cell in &mut grid[height - 1] {
        *cell = ('▔', Style::default().fg(Color::DarkGray));
    }

    for bin in Bin::ALL {
        let (label, color) = match bin {
            Bin::Recycle => ("[♻]", Color::Green),
            Bin::NonRecycle => ("[X]", Color::Red),
        };
        if let Some((col, row)) = world_to_cell(game.config.bin_position(bin), width, height) {
            let start = col.saturating_sub(1);
            for (i, ch) in label.chars().enumerate() {
                if let Some(cell) = grid[row].get_mut(start + i) {
                    *cell = (ch, Style::default().fg(color).add_modifier(Modifier::BOLD));
                }
            }
        }
    }

    let active_id = game.batch.active().map(|item| item.id);
    for item in game.batch.live_items() {
        if let Some((col, row)) = world_to_cell(item.position, width, height) {
            let style = if Some(item.id) == active_id {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if item.thrown {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            grid[row][col] = (item.kind.glyph, style);
        }
    }

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, style)| Span::styled(ch.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_prompt_content(frame: &mut Frame, area: Rect, game: &TrashGame) {
    if game.hud.game_over_visible {
        render_prompt(
            frame,
            area,
            &game.hud.game_over_text,
            Color::Yellow,
            &[("[Enter]", "Restart"), ("[q]", "Quit")],
        );
        return;
    }

    let status = match game.batch.active() {
        Some(item) => format!("Sort the {}!", item.kind.name),
        None => "Next batch incoming...".to_string(),
    };
    render_prompt(frame, area, &status, Color::Green, &CONTROLS);
}

fn render_scoreboard(frame: &mut Frame, area: Rect, game: &TrashGame, best_score: Option<i32>) {
    if area.height < 2 || area.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", game.hud.score_text),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if game.hud.timer_visible {
        let timer_color = if game.timer <= 5.0 {
            Color::Red
        } else {
            Color::Yellow
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", game.hud.timer_text),
            Style::default().fg(timer_color),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(" Goal: ", label),
        Span::styled(
            format!("{}", game.config.win_score),
            Style::default().fg(Color::Cyan),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Streak: ", label),
        Span::styled(
            format!("{}", game.correct_streak),
            Style::default().fg(Color::Green),
        ),
        Span::styled(" / ", label),
        Span::styled(
            format!("{}", game.wrong_streak),
            Style::default().fg(Color::Red),
        ),
    ]));

    if game.is_running() {
        let total = game.batch.items.len();
        let thrown = game.batch.cursor.min(total);
        lines.push(Line::from(vec![
            Span::styled(" Batch: ", label),
            Span::styled(
                format!("{}{}", "●".repeat(thrown), "○".repeat(total - thrown)),
                Style::default().fg(Color::White),
            ),
        ]));
        if let Some(item) = game.batch.active() {
            lines.push(Line::from(vec![
                Span::styled(" Next: ", label),
                Span::styled(
                    format!("{} {}", item.kind.glyph, item.kind.name),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));
    let best = best_score.map_or_else(|| "-".to_string(), |b| b.to_string());
    lines.push(Line::from(vec![
        Span::styled(" Best: ", label),
        Span::styled(best, Style::default().fg(Color::Magenta)),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_round_over(
    frame: &mut Frame,
    area: Rect,
    game: &TrashGame,
    best_score: Option<i32>,
    new_best: bool,
) {
    let Some(result) = game.result else {
        return;
    };
    let body = vec![
        Line::from(Span::styled(
            format!(
                "Final score: {}  ({} right, {} wrong)",
                game.score, game.correct_throws, game.wrong_throws
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            round_over_detail(best_score, new_best),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Restart  [q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_result_modal(frame, area, result, &game.hud.game_over_text, body);
}

/// Line under the final score: only a round that beat the stored best counts
/// as a new best, a tie just shows the best.
fn round_over_detail(best_score: Option<i32>, new_best: bool) -> String {
    match best_score {
        _ if new_best => "New best score!".to_string(),
        Some(best) => format!("Best: {}", best),
        None => String::new(),
    }
}
