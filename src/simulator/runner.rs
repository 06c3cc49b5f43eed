//! Simulation runner: one autopilot per round, stats taken from `TickResult`s.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::config::GameConfig;
use crate::game::logic::{process_frame, process_input, TossInput};
use crate::game::state::TrashGame;
use crate::game::types::{Bin, ThrowOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run `config.num_runs` rounds and aggregate them.
pub fn run_simulation(config: &SimConfig, game_config: &GameConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let stats = simulate_round(config, game_config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Round {}/{} - Score {}, Correct {}, Wrong {}, Batches {}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.correct,
                stats.wrong,
                stats.batches
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, game_config.win_score)
}

/// Play one full round from the title screen until the countdown runs out.
pub fn simulate_round<R: Rng>(config: &SimConfig, game_config: &GameConfig, rng: &mut R) -> RunStats {
    let mut game = TrashGame::new(game_config.clone());
    process_input(&mut game, TossInput::Confirm, rng);

    let mut stats = RunStats {
        batches: 1,
        ..Default::default()
    };
    let mut since_throw = config.throw_interval;

    loop {
        let input = if game.can_throw() && since_throw >= config.throw_interval {
            game.batch.active().map(|item| {
                let right = Bin::for_recyclable(item.recyclable);
                let bin = if rng.gen_bool(config.accuracy.clamp(0.0, 1.0)) {
                    right
                } else {
                    right.other()
                };
                match bin {
                    Bin::Recycle => TossInput::ThrowRecycle,
                    Bin::NonRecycle => TossInput::ThrowNonRecycle,
                }
            })
        } else {
            None
        };

        let tick = process_frame(&mut game, config.frame_seconds, input, rng);
        match tick.throw {
            Some(ThrowOutcome::Correct) => stats.correct += 1,
            Some(ThrowOutcome::Incorrect) => stats.wrong += 1,
            None => {}
        }
        if tick.throw.is_some() {
            since_throw = 0.0;
        }
        since_throw += config.frame_seconds;
        if tick.spawned_batch {
            stats.batches += 1;
        }
        if let Some(result) = tick.round_ended {
            stats.score = game.score;
            stats.result = Some(result);
            return stats;
        }
    }
}
