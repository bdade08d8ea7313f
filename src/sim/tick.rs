//! Per-frame simulation update
//!
//! Advances the game by exactly one host frame. Everything that depends on
//! frame parity (scrolling, colour rolls) keys off `TickInput::frame`.

use super::collision::is_safe;
use super::state::{GamePhase, GameState, Obstacle};

/// How far past the hero's right edge the autopilot looks for stalactites
pub const AUTOPILOT_LOOKAHEAD: i32 = 96;
/// Frames the autopilot lingers on the title and game-over screens
pub const AUTOPILOT_MENU_DELAY: u64 = 120;

/// Input for a single frame (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Host frame counter
    pub frame: u64,
    /// Grow the hero (held)
    pub up: bool,
    /// Shrink the hero (held)
    pub down: bool,
    /// Confirm key released this frame
    pub confirm: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    match state.phase {
        GamePhase::Title => {
            menu_frame(state, input.frame);
            if input.confirm {
                state.start_session();
                log::info!(
                    "Session {} started with {} stalactites",
                    state.sessions_played + 1,
                    state.obstacles.len()
                );
            }
        }
        GamePhase::GameOver => {
            menu_frame(state, input.frame);
            if input.confirm {
                state.phase = GamePhase::Title;
                log::info!("Back to title");
            }
        }
        GamePhase::Playing => playing_frame(state, input),
    }
}

/// Title and game-over screens share the rotating headline colour and keep
/// the stalactite list empty
fn menu_frame(state: &mut GameState, frame: u64) {
    // Same cadence as the hero colour: only on every Nth frame
    if frame % state.config.color_interval == 0 {
        state.headline_color = state.random_color();
    }
    state.obstacles.clear();
}

fn playing_frame(state: &mut GameState, input: &TickInput) {
    // Up wins when both are held
    if input.up {
        state.hero.height = (state.hero.height + 1).min(state.config.screen_height);
    } else if input.down {
        state.hero.height = (state.hero.height - 1).max(state.config.hero_min_height);
    }

    if input.frame % state.config.scroll_interval == 0 {
        scroll_obstacles(state);
    }

    if input.frame % state.config.color_interval == 0 {
        state.hero.color = state.random_color();
    }

    let safe = is_safe(
        &state.obstacles,
        state.config.obstacle_width,
        &state.hero,
        state.config.screen_height,
    );

    if safe {
        update_score(state);
    } else {
        state.end_session();
        log::info!(
            "Game over at frame {}: score {}, distance {}, score/100px {}",
            input.frame,
            state.stats.display_score(),
            state.stats.distance,
            state.stats.ppd
        );
    }
}

/// Move every stalactite left one step and recycle the ones that left the
/// screen. Returns how many were recycled.
pub fn scroll_obstacles(state: &mut GameState) -> usize {
    let width = state.config.obstacle_width;
    let speed = state.config.scroll_speed;
    let wrap_x = state.config.wrap_x();

    let mut recycled = 0;
    for i in 0..state.obstacles.len() {
        state.obstacles[i].x -= speed;
        if state.obstacles[i].x < -width {
            let height = state.random_obstacle_height();
            let color = state.random_color();
            state.obstacles[i] = Obstacle {
                x: wrap_x,
                height,
                color,
            };
            recycled += 1;
        }
    }

    if recycled > 0 {
        log::trace!("Recycled {} stalactite(s)", recycled);
    }
    recycled
}

/// Credit a safe frame
fn update_score(state: &mut GameState) {
    let above = (state.hero.height - state.config.min_scoring_height()).max(0);
    state.stats.score += above as f64 * state.config.score_rate;
    state.stats.distance += state.config.scroll_speed as u32;
    state.stats.ppd = points_per_distance(state.stats.score, state.stats.distance);
}

/// Score per 100 pixels travelled, truncated; zero before any distance
pub fn points_per_distance(score: f64, distance: u32) -> u32 {
    if distance == 0 {
        return 0;
    }
    (100.0 * score / distance as f64) as u32
}

/// Fill in input for idle/demo mode
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::Title | GamePhase::GameOver => {
            input.confirm = input.frame % AUTOPILOT_MENU_DELAY == 0;
        }
        GamePhase::Playing => {
            let config = &state.config;
            let hero = &state.hero;
            let near = hero.x - config.obstacle_width;
            let far = hero.x + hero.width + AUTOPILOT_LOOKAHEAD;

            // Stay one pixel under the lowest tip in the window
            let tallest = state
                .obstacles
                .iter()
                .filter(|o| o.x > near && o.x < far)
                .map(|o| o.height)
                .max();
            let target = match tallest {
                Some(height) => config.screen_height - height - 1,
                None => config.screen_height,
            }
            .clamp(config.hero_min_height, config.screen_height);

            input.up = hero.height < target;
            input.down = hero.height > target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::palette::Color;
    use crate::sim::state::GAME_OVER_MESSAGES;
    use proptest::prelude::*;

    fn new_state(seed: u64) -> GameState {
        GameState::new(GameConfig::default(), seed).unwrap()
    }

    fn playing_state(seed: u64) -> GameState {
        let mut state = new_state(seed);
        tick(
            &mut state,
            &TickInput {
                confirm: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    fn frame(frame: u64) -> TickInput {
        TickInput {
            frame,
            ..Default::default()
        }
    }

    #[test]
    fn test_title_waits_for_confirm() {
        let mut state = new_state(1);
        for f in 0..30 {
            tick(&mut state, &frame(f));
        }
        assert_eq!(state.phase, GamePhase::Title);
        assert!(state.obstacles.is_empty());

        // Holding keys does nothing on the title screen
        tick(
            &mut state,
            &TickInput {
                frame: 30,
                up: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.hero.height, 150);
    }

    #[test]
    fn test_title_to_playing_resets_session() {
        let mut state = new_state(5);
        state.stats.score = 77.0;
        state.stats.distance = 500;
        state.stats.ppd = 15;
        state.hero.height = 12;

        tick(
            &mut state,
            &TickInput {
                frame: 3,
                confirm: true,
                ..Default::default()
            },
        );

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.stats.score, 0.0);
        assert_eq!(state.stats.distance, 0);
        assert_eq!(state.stats.ppd, 0);
        assert_eq!(state.hero.height, 150);
        let xs: Vec<i32> = state.obstacles.iter().map(|o| o.x).collect();
        assert_eq!(xs.len(), 33);
        assert_eq!(&xs[..3], &[255, 263, 271]);
        assert_eq!(xs[32], 255 + 32 * 8);
    }

    #[test]
    fn test_safe_frame_at_max_height_scores() {
        let mut state = playing_state(9);
        // Odd frame: nothing scrolls, nothing overlaps the hero
        tick(&mut state, &frame(1));

        assert_eq!(state.phase, GamePhase::Playing);
        assert!((state.stats.score - 4.8).abs() < 1e-9);
        assert_eq!(state.stats.distance, 1);
        assert_eq!(state.stats.ppd, 480);
    }

    #[test]
    fn test_low_hero_scores_nothing() {
        let mut state = playing_state(9);
        state.hero.height = 30;
        tick(&mut state, &frame(1));
        assert_eq!(state.stats.score, 0.0);
        assert_eq!(state.stats.distance, 1);
        assert_eq!(state.stats.ppd, 0);
    }

    #[test]
    fn test_up_and_down_clamp() {
        let mut state = playing_state(3);
        let up = |f| TickInput {
            frame: f,
            up: true,
            ..Default::default()
        };
        let down = |f| TickInput {
            frame: f,
            down: true,
            ..Default::default()
        };

        tick(&mut state, &up(1));
        assert_eq!(state.hero.height, 151);

        state.hero.height = 180;
        tick(&mut state, &up(3));
        assert_eq!(state.hero.height, 180);

        state.hero.height = 5;
        tick(&mut state, &down(5));
        assert_eq!(state.hero.height, 4);
        tick(&mut state, &down(7));
        assert_eq!(state.hero.height, 4);
    }

    #[test]
    fn test_up_wins_over_down() {
        let mut state = playing_state(3);
        tick(
            &mut state,
            &TickInput {
                frame: 1,
                up: true,
                down: true,
                ..Default::default()
            },
        );
        assert_eq!(state.hero.height, 151);
    }

    #[test]
    fn test_scroll_only_on_even_frames() {
        let mut state = playing_state(11);
        let before: Vec<i32> = state.obstacles.iter().map(|o| o.x).collect();

        tick(&mut state, &frame(1));
        let odd: Vec<i32> = state.obstacles.iter().map(|o| o.x).collect();
        assert_eq!(before, odd);

        tick(&mut state, &frame(2));
        let even: Vec<i32> = state.obstacles.iter().map(|o| o.x).collect();
        for (b, e) in before.iter().zip(&even) {
            assert_eq!(*e, b - 1);
        }
    }

    #[test]
    fn test_obstacle_wraps_past_left_edge() {
        let mut state = playing_state(13);
        state.obstacles[0].x = -8;
        state.obstacles[1].x = -7;

        tick(&mut state, &frame(2));

        // -8 - 1 = -9 < -8 wraps; -7 - 1 = -8 does not
        assert_eq!(state.obstacles[0].x, 255);
        assert!((1..150).contains(&state.obstacles[0].height));
        assert_ne!(state.obstacles[0].color, Color::BACKGROUND);
        assert_ne!(state.obstacles[0].color, Color::BORDER);
        assert_eq!(state.obstacles[1].x, -8);
    }

    #[test]
    fn test_collision_ends_session() {
        let mut state = playing_state(21);
        state.stats.score = 10.0;
        state.stats.distance = 40;
        state.stats.ppd = 25;
        state.obstacles[0] = Obstacle {
            x: 12,
            height: 180,
            color: Color::Pink,
        };

        tick(&mut state, &frame(1));

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.obstacles.is_empty());
        assert!(GAME_OVER_MESSAGES.contains(&state.game_over_message.unwrap()));
        // Frozen at the last safe frame's values
        assert_eq!(state.stats.score, 10.0);
        assert_eq!(state.stats.distance, 40);
        assert_eq!(state.stats.ppd, 25);
    }

    #[test]
    fn test_collision_boundary_literal() {
        let mut state = playing_state(21);
        state.obstacles[0] = Obstacle {
            x: 12,
            height: 149,
            color: Color::Pink,
        };
        state.hero.height = 30;
        tick(&mut state, &frame(1));
        assert_eq!(state.phase, GamePhase::Playing);

        state.hero.height = 31;
        tick(&mut state, &frame(3));
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_game_over_holds_stats_until_confirm() {
        let mut state = playing_state(21);
        state.obstacles[0].x = 12;
        state.obstacles[0].height = 179;
        tick(&mut state, &frame(1));
        assert_eq!(state.phase, GamePhase::GameOver);
        let frozen = state.stats;

        for f in 2..50 {
            tick(
                &mut state,
                &TickInput {
                    frame: f,
                    up: true,
                    ..Default::default()
                },
            );
            assert_eq!(state.phase, GamePhase::GameOver);
            assert_eq!(state.stats, frozen);
            assert!(state.obstacles.is_empty());
        }

        tick(
            &mut state,
            &TickInput {
                frame: 50,
                confirm: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.stats, frozen);
    }

    #[test]
    fn test_menu_forces_empty_obstacles() {
        let mut state = new_state(4);
        state.obstacles.push(Obstacle {
            x: 40,
            height: 10,
            color: Color::Lime,
        });
        tick(&mut state, &frame(1));
        assert!(state.obstacles.is_empty());
    }

    /// Colour the next roll will produce, without touching `state`
    fn next_color(state: &GameState) -> Color {
        state.clone().random_color()
    }

    #[test]
    fn test_hero_color_rolls_every_fifth_frame() {
        let mut state = playing_state(21);
        let hero_color = state.hero.color;
        let expected = next_color(&state);

        for f in 1..5u64 {
            tick(&mut state, &frame(f));
            assert_eq!(state.hero.color, hero_color, "frame {}", f);
        }
        // Nothing recycled yet, so frames 1..4 drew nothing from the rng
        assert_eq!(next_color(&state), expected);

        tick(&mut state, &frame(5));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.hero.color, expected);
    }

    #[test]
    fn test_headline_color_rolls_every_fifth_frame_on_title() {
        let mut state = new_state(8);
        let headline = state.headline_color;
        let expected = next_color(&state);

        for f in 1..5u64 {
            tick(&mut state, &frame(f));
            assert_eq!(state.headline_color, headline, "frame {}", f);
        }
        assert_eq!(next_color(&state), expected);

        tick(&mut state, &frame(5));
        assert_eq!(state.headline_color, expected);
    }

    #[test]
    fn test_headline_color_rolls_every_fifth_frame_on_game_over() {
        let mut state = playing_state(13);
        state.end_session();
        assert_eq!(state.phase, GamePhase::GameOver);

        let headline = state.headline_color;
        let expected = next_color(&state);
        for f in 6..10u64 {
            tick(&mut state, &frame(f));
            assert_eq!(state.headline_color, headline, "frame {}", f);
        }
        assert_eq!(next_color(&state), expected);

        tick(&mut state, &frame(10));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.headline_color, expected);
    }

    #[test]
    fn test_points_per_distance() {
        assert_eq!(points_per_distance(0.0, 0), 0);
        assert_eq!(points_per_distance(12.0, 0), 0);
        assert_eq!(points_per_distance(4.8, 1), 480);
        assert_eq!(points_per_distance(1.0, 3), 33);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing_state(99999);
        let mut b = playing_state(99999);

        for f in 1..2000u64 {
            let input = TickInput {
                frame: f,
                up: f % 7 < 3,
                down: f % 11 < 5,
                ..Default::default()
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.hero, b.hero);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_autopilot_survives() {
        let mut state = new_state(31337);
        for f in 0..10_000u64 {
            tick(
                &mut state,
                &TickInput {
                    frame: f,
                    idle_mode: true,
                    ..Default::default()
                },
            );
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.sessions_played, 0);
        assert!(state.stats.distance > 9_000);
        assert!(state.stats.score > 0.0);
    }

    proptest! {
        #[test]
        fn prop_hero_height_stays_in_bounds(moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..600)) {
            let mut state = playing_state(7);
            for (i, (up, down)) in moves.into_iter().enumerate() {
                tick(&mut state, &TickInput {
                    frame: i as u64 + 1,
                    up,
                    down,
                    ..Default::default()
                });
                prop_assert!(state.hero.height >= 4);
                prop_assert!(state.hero.height <= 180);
            }
        }

        #[test]
        fn prop_session_invariants(seed in any::<u64>(), moves in proptest::collection::vec(0u8..3, 1..1500)) {
            let mut state = playing_state(seed);
            let mut last_score = state.stats.score;
            for (i, m) in moves.into_iter().enumerate() {
                tick(&mut state, &TickInput {
                    frame: i as u64 + 1,
                    up: m == 1,
                    down: m == 2,
                    ..Default::default()
                });
                match state.phase {
                    GamePhase::Playing => {
                        prop_assert_eq!(state.obstacles.len(), 33);
                        prop_assert!(state.stats.score >= last_score);
                        last_score = state.stats.score;
                    }
                    _ => {
                        prop_assert!(state.obstacles.is_empty());
                        break;
                    }
                }
            }
        }
    }
}
