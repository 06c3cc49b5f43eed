pub mod layout;
pub mod sort_scene;

use ratatui::Frame;
use trash_toss::game::TrashGame;

/// Main UI drawing function. `new_best` is set when the last finished round
/// beat the stored best score.
pub fn draw_ui(frame: &mut Frame, game: &TrashGame, best_score: Option<i32>, new_best: bool) {
    let area = frame.size();
    sort_scene::render_sort_game(frame, area, game, best_score, new_best);
}
