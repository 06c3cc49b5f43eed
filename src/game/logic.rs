//! Game logic for the trash sorting game.

use super::physics;
use super::state::{ScheduledAction, TrashGame};
use super::types::{Bin, ItemId, RoundResult, SessionPhase, Sound, ThrowOutcome};
use crate::core::constants::*;
use glam::Vec2;
use rand::Rng;

/// Input actions for the sorting game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TossInput {
    /// Left arrow.
    ThrowRecycle,
    /// Right arrow.
    ThrowNonRecycle,
    /// Enter/Space: presses whichever of start/restart is visible.
    Confirm,
    /// Any other key.
    Other,
}

/// Result of one game tick: what the UI and audio layers need to react to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Sound cues whose delay elapsed this tick, in order.
    pub sounds: Vec<Sound>,
    /// A new batch replaced the exhausted one.
    pub spawned_batch: bool,
    /// The countdown ran out this tick.
    pub round_ended: Option<RoundResult>,
    /// Outcome of the throw made during this frame, if any.
    pub throw: Option<ThrowOutcome>,
}

/// True if an item with this recyclability belongs in `bin`.
pub fn is_correct_bin(recyclable: bool, bin: Bin) -> bool {
    (recyclable && bin == Bin::Recycle) || (!recyclable && bin == Bin::NonRecycle)
}

/// Route a key press. Returns the throw outcome when the input threw an item.
pub fn process_input<R: Rng>(
    game: &mut TrashGame,
    input: TossInput,
    rng: &mut R,
) -> Option<ThrowOutcome> {
    match input {
        TossInput::ThrowRecycle => throw(game, Bin::Recycle),
        TossInput::ThrowNonRecycle => throw(game, Bin::NonRecycle),
        TossInput::Confirm => {
            if game.hud.start_visible {
                start(game, rng);
            } else if game.hud.restart_visible {
                restart(game, rng);
            }
            None
        }
        TossInput::Other => None,
    }
}

/// Start the first round from the title screen.
pub fn start<R: Rng>(game: &mut TrashGame, rng: &mut R) -> bool {
    if game.phase != SessionPhase::NotStarted {
        return false;
    }
    enter_running(game, rng);
    true
}

/// Reset scoring and the countdown after a finished round, then start again.
pub fn restart<R: Rng>(game: &mut TrashGame, rng: &mut R) -> bool {
    if game.phase != SessionPhase::Ended {
        return false;
    }
    game.clock.resume();
    game.score = 0;
    game.timer = game.config.round_seconds;
    game.correct_streak = 0;
    game.wrong_streak = 0;
    game.correct_throws = 0;
    game.wrong_throws = 0;
    game.batch.cursor = 0;
    game.result = None;
    game.hud.reset_for_restart(game.config.round_seconds);
    enter_running(game, rng);
    true
}

fn enter_running<R: Rng>(game: &mut TrashGame, rng: &mut R) {
    game.phase = SessionPhase::Running;
    game.hud.show_running();
    spawn_batch(game, rng);
    tracing::info!(round_seconds = game.config.round_seconds, "round started");
}

fn spawn_batch<R: Rng>(game: &mut TrashGame, rng: &mut R) {
    game.batch = game
        .spawner
        .spawn_batch(rng, &game.config.catalog, &game.config.spawn_points);
}

/// Finish the round: pick the banner, clear the field and freeze the clock.
pub fn end_game(game: &mut TrashGame) -> RoundResult {
    let result = RoundResult::from_score(game.score, game.config.win_score);
    game.phase = SessionPhase::Ended;
    game.result = Some(result);
    game.hud.show_ended(result.message());
    game.batch.clear();
    // The items pending actions refer to are gone; nothing may leak into the next round.
    game.scheduler.clear();
    game.clock.freeze();
    tracing::info!(score = game.score, ?result, "Game Over!");
    result
}

/// Throw the active item toward `bin`. Ignored unless a round is running and
/// an unthrown item remains in the batch.
pub fn throw(game: &mut TrashGame, bin: Bin) -> Option<ThrowOutcome> {
    if !game.is_running() {
        return None;
    }
    let target = game.config.bin_position(bin);
    let (id, recyclable) = {
        let item = game.batch.active_mut()?;
        let force = (target - item.position) * THROW_FORCE_SCALE;
        physics::apply_force(item, force);
        item.thrown = true;
        (item.id, item.recyclable)
    };

    let outcome = evaluate_throw(game, id, recyclable, bin);
    game.batch.cursor += 1;
    Some(outcome)
}

/// Score a throw and queue its timed effects.
pub fn evaluate_throw(
    game: &mut TrashGame,
    id: ItemId,
    recyclable: bool,
    bin: Bin,
) -> ThrowOutcome {
    let now = game.clock.now;
    let outcome = if is_correct_bin(recyclable, bin) {
        ThrowOutcome::Correct
    } else {
        ThrowOutcome::Incorrect
    };
    game.score += outcome.score_delta();

    match outcome {
        ThrowOutcome::Correct => {
            tracing::debug!(item = id, bin = bin.name(), "Correct!");
            game.correct_streak += 1;
            game.wrong_streak = 0;
            game.correct_throws += 1;

            game.scheduler.schedule(
                now,
                SOUND_DELAY_SECONDS,
                ScheduledAction::PlaySound(Sound::Correct),
            );

            if game.correct_streak >= game.config.correct_streak_reset {
                game.correct_streak = 0;
            }

            game.scheduler
                .schedule(now, CORRECT_RESOLVE_SECONDS, ScheduledAction::Destroy(id));
            game.scheduler
                .schedule(now, CORRECT_RESOLVE_SECONDS, ScheduledAction::SlotResolved);
        }
        ThrowOutcome::Incorrect => {
            tracing::debug!(item = id, bin = bin.name(), "Wrong bin!");
            game.wrong_streak += 1;
            game.correct_streak = 0;
            game.wrong_throws += 1;

            if let Some(item) = game.batch.get_mut(id) {
                physics::apply_force(item, Vec2::from(BOUNCE_FORCE));
            }

            game.scheduler.schedule(
                now,
                SOUND_DELAY_SECONDS,
                ScheduledAction::PlaySound(Sound::Wrong),
            );

            if game.wrong_streak >= game.config.wrong_streak_reset {
                game.wrong_streak = 0;
            }

            game.scheduler
                .schedule(now, DEFLECT_DELAY_SECONDS, ScheduledAction::Deflect(id));
            game.scheduler
                .schedule(now, WRONG_RESOLVE_SECONDS, ScheduledAction::Destroy(id));
            game.scheduler
                .schedule(now, WRONG_RESOLVE_SECONDS, ScheduledAction::SlotResolved);
        }
    }

    game.hud.set_score(game.score);
    outcome
}

/// Advance the session by a real frame delta.
///
/// Order within a tick: clock, countdown (which may end the round), item
/// motion, then any timed effects that came due.
pub fn process_tick<R: Rng>(game: &mut TrashGame, real_dt: f64, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    if !game.is_running() {
        return result;
    }

    let dt = game.clock.advance(real_dt);

    game.timer -= dt;
    game.hud.set_timer(game.timer);
    if game.timer <= 0.0 {
        game.hud.set_timer(0.0);
        result.round_ended = Some(end_game(game));
        return result;
    }

    let gravity = game.config.gravity;
    for item in &mut game.batch.items {
        physics::integrate(item, dt as f32, gravity);
    }

    for action in game.scheduler.drain_due(game.clock.now) {
        dispatch(game, action, rng, &mut result);
    }

    result
}

/// Run one frame of the main loop: advance time, then apply the key pressed
/// during the frame. The countdown is checked first, so a key that arrives
/// after time ran out is dropped along with the frame that ended the round.
pub fn process_frame<R: Rng>(
    game: &mut TrashGame,
    real_dt: f64,
    input: Option<TossInput>,
    rng: &mut R,
) -> TickResult {
    let mut result = process_tick(game, real_dt, rng);
    if result.round_ended.is_some() {
        if let Some(input) = input {
            tracing::debug!(?input, "input dropped, round already over");
        }
        return result;
    }
    if let Some(input) = input {
        result.throw = process_input(game, input, rng);
    }
    result
}

fn dispatch<R: Rng>(
    game: &mut TrashGame,
    action: ScheduledAction,
    rng: &mut R,
    result: &mut TickResult,
) {
    match action {
        ScheduledAction::PlaySound(sound) => result.sounds.push(sound),
        ScheduledAction::Deflect(id) => {
            if let Some(item) = game.batch.get_mut(id).filter(|item| item.is_live()) {
                item.velocity = physics::deflect(item.velocity);
            }
        }
        ScheduledAction::Destroy(id) => {
            if let Some(item) = game.batch.get_mut(id).filter(|item| item.is_live()) {
                item.destroyed = true;
            }
        }
        ScheduledAction::SlotResolved => {
            if on_slot_resolved(game, rng) {
                result.spawned_batch = true;
            }
        }
    }
}

/// Count one resolved slot. Returns true if this exhausted the batch and a new
/// one was spawned.
pub fn on_slot_resolved<R: Rng>(game: &mut TrashGame, rng: &mut R) -> bool {
    game.batch.remaining -= 1;
    if game.batch.remaining <= 0 {
        spawn_batch(game, rng);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::game::types::TrashKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    /// Game whose catalog only holds one kind, so every item's bin is known.
    fn game_with(recyclable: bool) -> TrashGame {
        let config = GameConfig {
            catalog: vec![TrashKind::new("Only", 'o', recyclable)],
            ..Default::default()
        };
        TrashGame::new(config)
    }

    fn running(recyclable: bool) -> (TrashGame, ChaCha8Rng) {
        let mut game = game_with(recyclable);
        let mut rng = rng();
        assert!(start(&mut game, &mut rng));
        (game, rng)
    }

    #[test]
    fn test_is_correct_bin_truth_table() {
        assert!(is_correct_bin(true, Bin::Recycle));
        assert!(!is_correct_bin(true, Bin::NonRecycle));
        assert!(!is_correct_bin(false, Bin::Recycle));
        assert!(is_correct_bin(false, Bin::NonRecycle));
        for recyclable in [true, false] {
            for bin in Bin::ALL {
                assert_eq!(
                    is_correct_bin(recyclable, bin),
                    recyclable == (bin == Bin::Recycle)
                );
            }
        }
    }

    #[test]
    fn test_start_spawns_batch_and_shows_timer() {
        let (game, _) = running(true);
        assert_eq!(game.phase, SessionPhase::Running);
        assert_eq!(game.batch.items.len(), 3);
        assert_eq!(game.batch.cursor, 0);
        assert!(game.hud.timer_visible);
        assert!(!game.hud.start_visible);
        assert_eq!(game.hud.timer_text, "Time: 30");
    }

    #[test]
    fn test_start_twice_ignored() {
        let (mut game, mut rng) = running(true);
        let first_ids: Vec<_> = game.batch.items.iter().map(|i| i.id).collect();
        assert!(!start(&mut game, &mut rng));
        let ids: Vec<_> = game.batch.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, first_ids);
    }

    #[test]
    fn test_throw_ignored_before_start() {
        let mut game = game_with(true);
        assert!(throw(&mut game, Bin::Recycle).is_none());
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_correct_throw() {
        let (mut game, _) = running(true);
        let outcome = throw(&mut game, Bin::Recycle);

        assert_eq!(outcome, Some(ThrowOutcome::Correct));
        assert_eq!(game.score, 1);
        assert_eq!(game.correct_streak, 1);
        assert_eq!(game.wrong_streak, 0);
        assert_eq!(game.batch.cursor, 1);
        assert_eq!(game.hud.score_text, "Score: 1");
        // sound, destroy, resolve
        assert_eq!(game.scheduler.pending(), 3);
        assert!(game.batch.items[0].thrown);
    }

    #[test]
    fn test_incorrect_throw() {
        let (mut game, _) = running(true);
        game.correct_streak = 4;
        let outcome = throw(&mut game, Bin::NonRecycle);

        assert_eq!(outcome, Some(ThrowOutcome::Incorrect));
        assert_eq!(game.score, -1);
        assert_eq!(game.wrong_streak, 1);
        assert_eq!(game.correct_streak, 0);
        assert_eq!(game.hud.score_text, "Score: -1");
        // sound, deflect, destroy, resolve
        assert_eq!(game.scheduler.pending(), 4);
    }

    #[test]
    fn test_throw_impulse_points_at_bin() {
        let (mut game, _) = running(true);
        let start_pos = game.batch.items[0].position;
        throw(&mut game, Bin::Recycle);

        let expected = (game.config.recycle_bin - start_pos) * THROW_FORCE_SCALE
            * FIXED_PHYSICS_STEP
            / ITEM_MASS;
        assert!((game.batch.items[0].velocity - expected).length() < 1e-4);
    }

    #[test]
    fn test_incorrect_throw_adds_bounce() {
        let (mut game, _) = running(false);
        let start_pos = game.batch.items[0].position;
        throw(&mut game, Bin::Recycle);

        let throw_dv = (game.config.recycle_bin - start_pos) * THROW_FORCE_SCALE
            * FIXED_PHYSICS_STEP;
        let bounce_dv = Vec2::from(BOUNCE_FORCE) * FIXED_PHYSICS_STEP;
        assert!((game.batch.items[0].velocity - (throw_dv + bounce_dv)).length() < 1e-4);
    }

    #[test]
    fn test_input_ignored_once_batch_thrown() {
        let (mut game, _) = running(true);
        for _ in 0..3 {
            assert!(throw(&mut game, Bin::Recycle).is_some());
        }
        assert!(!game.can_throw());
        assert!(throw(&mut game, Bin::Recycle).is_none());
        assert_eq!(game.score, 3);
        assert_eq!(game.batch.cursor, 3);
    }

    #[test]
    fn test_correct_streak_resets_at_ten() {
        let (mut game, mut rng) = running(true);
        for n in 1..=10 {
            if !game.can_throw() {
                // Let the batch resolve and respawn
                process_tick(&mut game, CORRECT_RESOLVE_SECONDS, &mut rng);
            }
            throw(&mut game, Bin::Recycle);
            if n < 10 {
                assert_eq!(game.correct_streak, n);
            }
        }
        assert_eq!(game.correct_streak, 0);
        assert_eq!(game.score, 10);
    }

    #[test]
    fn test_wrong_streak_resets_at_three() {
        let (mut game, _) = running(true);
        throw(&mut game, Bin::NonRecycle);
        assert_eq!(game.wrong_streak, 1);
        throw(&mut game, Bin::NonRecycle);
        assert_eq!(game.wrong_streak, 2);
        throw(&mut game, Bin::NonRecycle);
        assert_eq!(game.wrong_streak, 0);
        assert_eq!(game.score, -3);
    }

    #[test]
    fn test_correct_throw_resets_wrong_streak() {
        let (mut game, _) = running(true);
        throw(&mut game, Bin::NonRecycle);
        throw(&mut game, Bin::NonRecycle);
        throw(&mut game, Bin::Recycle);
        assert_eq!(game.wrong_streak, 0);
        assert_eq!(game.correct_streak, 1);
    }

    #[test]
    fn test_sound_fires_after_delay() {
        let (mut game, mut rng) = running(true);
        throw(&mut game, Bin::Recycle);

        let early = process_tick(&mut game, 0.2, &mut rng);
        assert!(early.sounds.is_empty());

        let due = process_tick(&mut game, 0.1, &mut rng);
        assert_eq!(due.sounds, vec![Sound::Correct]);
    }

    #[test]
    fn test_correct_item_destroyed_after_half_second() {
        let (mut game, mut rng) = running(true);
        throw(&mut game, Bin::Recycle);
        let id = game.batch.items[0].id;

        process_tick(&mut game, 0.4, &mut rng);
        assert!(game.batch.items[0].is_live());

        process_tick(&mut game, 0.15, &mut rng);
        assert_eq!(game.batch.items[0].id, id);
        assert!(!game.batch.items[0].is_live());
        assert_eq!(game.batch.remaining, 2);
    }

    #[test]
    fn test_wrong_item_deflected_then_destroyed() {
        let (mut game, mut rng) = running(true);
        throw(&mut game, Bin::NonRecycle);

        process_tick(&mut game, DEFLECT_DELAY_SECONDS, &mut rng);
        let speed = game.batch.items[0].velocity.length();
        assert!((speed - DEFLECT_SPEED).abs() < 1e-3);

        process_tick(&mut game, 0.5, &mut rng);
        assert!(game.batch.items[0].is_live());

        process_tick(&mut game, 0.25, &mut rng);
        assert!(!game.batch.items[0].is_live());
        assert_eq!(game.batch.remaining, 2);
    }

    #[test]
    fn test_new_batch_only_after_all_resolved() {
        let (mut game, mut rng) = running(true);
        let first_ids: Vec<_> = game.batch.items.iter().map(|i| i.id).collect();

        throw(&mut game, Bin::Recycle);
        throw(&mut game, Bin::Recycle);
        let r = process_tick(&mut game, CORRECT_RESOLVE_SECONDS, &mut rng);
        assert!(!r.spawned_batch);
        assert_eq!(game.batch.remaining, 1);

        throw(&mut game, Bin::Recycle);
        let r = process_tick(&mut game, CORRECT_RESOLVE_SECONDS, &mut rng);
        assert!(r.spawned_batch);
        assert_eq!(game.batch.cursor, 0);
        assert_eq!(game.batch.remaining, 3);
        assert_eq!(game.batch.items.len(), 3);
        assert!(game.batch.items.iter().all(|i| !first_ids.contains(&i.id)));
    }

    #[test]
    fn test_timer_counts_down() {
        let (mut game, mut rng) = running(true);
        process_tick(&mut game, 0.5, &mut rng);
        assert!((game.timer - 29.5).abs() < 1e-9);
        assert_eq!(game.hud.timer_text, "Time: 30");

        process_tick(&mut game, 0.6, &mut rng);
        assert_eq!(game.hud.timer_text, "Time: 29");
    }

    #[test]
    fn test_timeout_ends_game_with_loss() {
        let (mut game, mut rng) = running(true);
        throw(&mut game, Bin::Recycle);

        let result = process_tick(&mut game, 31.0, &mut rng);
        assert_eq!(result.round_ended, Some(RoundResult::Loss));
        assert_eq!(game.phase, SessionPhase::Ended);
        assert_eq!(game.hud.timer_text, "Time: 0");
        assert_eq!(game.hud.game_over_text, "Game Over");
        assert!(game.hud.game_over_visible);
        assert!(game.hud.restart_visible);
        assert!(!game.hud.timer_visible);
        assert!(game.batch.items.is_empty());
        assert!(game.scheduler.is_empty());
        assert!(game.clock.is_frozen());
        // Effects queued before the timeout never fire
        assert!(result.sounds.is_empty());
    }

    #[test]
    fn test_timeout_with_win_score() {
        let (mut game, mut rng) = running(true);
        game.score = 45;
        let result = process_tick(&mut game, 30.0, &mut rng);
        assert_eq!(result.round_ended, Some(RoundResult::Win));
        assert_eq!(game.hud.game_over_text, "Win!");
    }

    #[test]
    fn test_ended_game_ignores_ticks_and_throws() {
        let (mut game, mut rng) = running(true);
        process_tick(&mut game, 30.0, &mut rng);
        let now = game.clock.now;

        let result = process_tick(&mut game, 5.0, &mut rng);
        assert_eq!(result, TickResult::default());
        assert_eq!(game.clock.now, now);
        assert!(throw(&mut game, Bin::Recycle).is_none());
    }

    #[test]
    fn test_restart_resets_session() {
        let (mut game, mut rng) = running(true);
        throw(&mut game, Bin::Recycle);
        throw(&mut game, Bin::NonRecycle);
        throw(&mut game, Bin::NonRecycle);
        process_tick(&mut game, 30.0, &mut rng);

        assert!(restart(&mut game, &mut rng));
        assert_eq!(game.phase, SessionPhase::Running);
        assert_eq!(game.score, 0);
        assert_eq!(game.timer, 30.0);
        assert_eq!(game.correct_streak, 0);
        assert_eq!(game.wrong_streak, 0);
        assert_eq!(game.batch.cursor, 0);
        assert_eq!(game.batch.remaining, 3);
        assert_eq!(game.hud.score_text, "Score: 0");
        assert_eq!(game.hud.timer_text, "Time: 30");
        assert!(!game.hud.game_over_visible);
        assert!(!game.hud.restart_visible);
        assert!(game.hud.timer_visible);
        assert!(!game.clock.is_frozen());
        assert!(game.result.is_none());
    }

    #[test]
    fn test_restart_only_from_ended() {
        let mut game = game_with(true);
        let mut rng = rng();
        assert!(!restart(&mut game, &mut rng));
        start(&mut game, &mut rng);
        assert!(!restart(&mut game, &mut rng));
    }

    #[test]
    fn test_stale_resolves_do_not_leak_into_restart() {
        let (mut game, mut rng) = running(true);
        throw(&mut game, Bin::Recycle);
        throw(&mut game, Bin::NonRecycle);
        process_tick(&mut game, 30.0, &mut rng);
        restart(&mut game, &mut rng);

        process_tick(&mut game, 2.0, &mut rng);
        assert_eq!(game.batch.remaining, 3);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_confirm_starts_then_restarts() {
        let mut game = game_with(true);
        let mut rng = rng();

        process_input(&mut game, TossInput::Confirm, &mut rng);
        assert_eq!(game.phase, SessionPhase::Running);

        // Confirm does nothing mid-round
        process_input(&mut game, TossInput::Confirm, &mut rng);
        assert_eq!(game.phase, SessionPhase::Running);

        process_tick(&mut game, 30.0, &mut rng);
        process_input(&mut game, TossInput::Confirm, &mut rng);
        assert_eq!(game.phase, SessionPhase::Running);
        assert_eq!(game.timer, 30.0);
    }

    #[test]
    fn test_process_input_throws() {
        let (mut game, mut rng) = running(false);
        assert_eq!(
            process_input(&mut game, TossInput::ThrowNonRecycle, &mut rng),
            Some(ThrowOutcome::Correct)
        );
        assert_eq!(
            process_input(&mut game, TossInput::ThrowRecycle, &mut rng),
            Some(ThrowOutcome::Incorrect)
        );
        assert_eq!(process_input(&mut game, TossInput::Other, &mut rng), None);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_thrown_items_move_resting_items_stay() {
        let (mut game, mut rng) = running(true);
        let resting = game.batch.items[1].position;
        let thrown = game.batch.items[0].position;
        throw(&mut game, Bin::Recycle);

        process_tick(&mut game, 0.1, &mut rng);
        assert_ne!(game.batch.items[0].position, thrown);
        assert_eq!(game.batch.items[1].position, resting);
    }

    #[test]
    fn test_frame_checks_timeout_before_input() {
        let (mut game, mut rng) = running(true);
        game.score = 44;
        game.timer = 0.005;

        let result = process_frame(&mut game, 0.016, Some(TossInput::ThrowRecycle), &mut rng);
        assert_eq!(result.round_ended, Some(RoundResult::Loss));
        assert_eq!(result.throw, None);
        assert_eq!(game.score, 44);
        assert_eq!(game.hud.game_over_text, "Game Over");
    }

    #[test]
    fn test_frame_applies_input_while_running() {
        let (mut game, mut rng) = running(true);
        let result = process_frame(&mut game, 0.016, Some(TossInput::ThrowRecycle), &mut rng);
        assert_eq!(result.round_ended, None);
        assert_eq!(result.throw, Some(ThrowOutcome::Correct));
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_confirm_on_final_frame_does_not_restart() {
        let (mut game, mut rng) = running(true);
        game.timer = 0.01;

        process_frame(&mut game, 0.016, Some(TossInput::Confirm), &mut rng);
        assert_eq!(game.phase, SessionPhase::Ended);

        process_frame(&mut game, 0.016, Some(TossInput::Confirm), &mut rng);
        assert_eq!(game.phase, SessionPhase::Running);
    }
}
