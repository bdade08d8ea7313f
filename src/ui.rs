//! Screen layout
//!
//! `draw` describes one frame in terms of four primitives, so any backend that
//! can fill rectangles and print text can show the game.

use crate::consts::{BYLINE, GAME_TITLE, VERSION};
use crate::sim::{Color, GamePhase, GameState, SessionStats};

/// Drawing primitives in logical pixels (origin top-left)
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    /// One-pixel outline drawn inside the rectangle
    fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color);
}

/// Colour of the byline on the title screen
const BYLINE_COLOR: Color = Color::Lime;
/// Left edge of the in-game HUD
const HUD_X: i32 = 40;
/// Left edge of the game-over stats
const STATS_X: i32 = 80;

/// Draw the current frame
pub fn draw(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear(Color::BACKGROUND);

    let mid = state.config.screen_height / 2;
    match state.phase {
        GamePhase::Title => {
            canvas.draw_text(93, mid - 8, GAME_TITLE, state.headline_color);
            canvas.draw_text(118, mid, VERSION, state.headline_color);
            canvas.draw_text(94, mid + 8, BYLINE, BYLINE_COLOR);
            canvas.draw_text(85, mid + 24, "(press SPACE to start)", Color::BORDER);
        }
        GamePhase::GameOver => {
            if let Some(message) = &state.game_over_message {
                canvas.draw_text(message.x, mid - 8, message.text, state.headline_color);
            }
            let [score, distance, ppd] = stat_lines(&state.stats);
            canvas.draw_text(STATS_X, mid + 8, &score, Color::BORDER);
            canvas.draw_text(STATS_X, mid + 16, &distance, Color::BORDER);
            canvas.draw_text(STATS_X, mid + 24, &ppd, Color::BORDER);
            canvas.draw_text(STATS_X, mid + 40, "(press SPACE to continue)", Color::BORDER);
        }
        GamePhase::Playing => draw_playing(state, canvas),
    }
}

fn draw_playing(state: &GameState, canvas: &mut impl Canvas) {
    let height = state.config.screen_height;
    let hero = &state.hero;
    let top = height - hero.height;
    canvas.fill_rect(hero.x, top, hero.width, hero.height, hero.color);
    canvas.stroke_rect(hero.x, top, hero.width, hero.height, Color::BORDER);

    let [score, distance, ppd] = stat_lines(&state.stats);
    canvas.draw_text(HUD_X, height - 30, &score, Color::BORDER);
    canvas.draw_text(HUD_X, height - 20, &distance, Color::BORDER);
    canvas.draw_text(HUD_X, height - 10, &ppd, Color::BORDER);

    // Stalactites go on top of the HUD
    let width = state.config.obstacle_width;
    for obstacle in &state.obstacles {
        canvas.fill_rect(obstacle.x, 0, width, obstacle.height, obstacle.color);
        canvas.stroke_rect(obstacle.x, 0, width, obstacle.height, Color::BORDER);
    }
}

/// Score, distance and ppd lines shared by the HUD and the game-over screen
pub fn stat_lines(stats: &SessionStats) -> [String; 3] {
    [
        format!("Score: {}", stats.display_score()),
        format!("Distance: {}", stats.distance),
        format!("Score/100 px: {}", stats.ppd),
    ]
}
