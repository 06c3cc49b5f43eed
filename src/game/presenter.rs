//! HUD labels and control visibility.
//!
//! The HUD is plain data; the terminal renderer only reads it.

/// Format the countdown label: whole seconds rounded up, never negative.
pub fn format_timer(timer: f64) -> String {
    format!("Time: {}", timer.max(0.0).ceil() as i64)
}

pub fn format_score(score: i32) -> String {
    format!("Score: {}", score)
}

/// Label text and widget visibility for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score_text: String,
    pub timer_text: String,
    pub game_over_text: String,
    pub timer_visible: bool,
    pub game_over_visible: bool,
    pub start_visible: bool,
    pub restart_visible: bool,
}

impl Hud {
    /// Title-screen HUD: only the start control is shown.
    pub fn new(round_seconds: f64) -> Self {
        Self {
            score_text: format_score(0),
            timer_text: format_timer(round_seconds),
            game_over_text: String::new(),
            timer_visible: false,
            game_over_visible: false,
            start_visible: true,
            restart_visible: false,
        }
    }

    pub fn show_running(&mut self) {
        self.timer_visible = true;
        self.start_visible = false;
        self.game_over_visible = false;
    }

    pub fn show_ended(&mut self, message: &str) {
        self.timer_visible = false;
        self.game_over_text = message.to_string();
        self.game_over_visible = true;
        self.restart_visible = true;
    }

    pub fn reset_for_restart(&mut self, round_seconds: f64) {
        self.score_text = format_score(0);
        self.timer_text = format_timer(round_seconds);
        self.game_over_visible = false;
        self.restart_visible = false;
    }

    pub fn set_score(&mut self, score: i32) {
        self.score_text = format_score(score);
    }

    pub fn set_timer(&mut self, timer: f64) {
        self.timer_text = format_timer(timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timer_rounds_up() {
        assert_eq!(format_timer(30.0), "Time: 30");
        assert_eq!(format_timer(29.01), "Time: 30");
        assert_eq!(format_timer(0.2), "Time: 1");
    }

    #[test]
    fn test_format_timer_never_negative() {
        assert_eq!(format_timer(0.0), "Time: 0");
        assert_eq!(format_timer(-0.4), "Time: 0");
        assert_eq!(format_timer(-12.0), "Time: 0");
    }

    #[test]
    fn test_format_score_negative() {
        assert_eq!(format_score(-2), "Score: -2");
    }

    #[test]
    fn test_title_hud() {
        let hud = Hud::new(30.0);
        assert_eq!(hud.score_text, "Score: 0");
        assert_eq!(hud.timer_text, "Time: 30");
        assert!(hud.start_visible);
        assert!(!hud.timer_visible);
        assert!(!hud.game_over_visible);
        assert!(!hud.restart_visible);
    }

    #[test]
    fn test_visibility_transitions() {
        let mut hud = Hud::new(30.0);
        hud.show_running();
        assert!(hud.timer_visible);
        assert!(!hud.start_visible);

        hud.show_ended("Game Over");
        assert!(!hud.timer_visible);
        assert!(hud.game_over_visible);
        assert!(hud.restart_visible);
        assert_eq!(hud.game_over_text, "Game Over");

        hud.set_score(5);
        hud.reset_for_restart(30.0);
        assert_eq!(hud.score_text, "Score: 0");
        assert!(!hud.game_over_visible);
        assert!(!hud.restart_visible);
    }
}
