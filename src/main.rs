//! Pastel Stalactites entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use pastel_stalactites::GameConfig;
    use pastel_stalactites::consts::WINDOW_TITLE;
    use pastel_stalactites::platform::{FrameClock, Key, Keyboard, is_idle_toggle};
    use pastel_stalactites::renderer::{RenderState, VertexCanvas};
    use pastel_stalactites::sim::{GameState, tick};
    use pastel_stalactites::ui::draw;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        canvas: VertexCanvas,
        clock: FrameClock,
        keyboard: Keyboard,
        last_time: f64,
        idle_mode: bool,
    }

    impl Game {
        fn new(state: GameState) -> Self {
            let canvas = VertexCanvas::new(state.config.screen_width, state.config.screen_height);
            let clock = FrameClock::new(state.config.fps);
            Self {
                state,
                render_state: None,
                canvas,
                clock,
                keyboard: Keyboard::new(),
                last_time: 0.0,
                idle_mode: false,
            }
        }

        /// Run every simulation frame that is due
        fn update(&mut self, dt: f32) {
            let due = self.clock.advance(dt);
            for _ in 0..due {
                let input = self
                    .keyboard
                    .snapshot(self.clock.frame_count(), self.idle_mode);
                tick(&mut self.state, &input);
                self.clock.finish_frame();

                // Releases are one-shot
                self.keyboard.end_frame();
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            draw(&self.state, &mut self.canvas);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.canvas) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("{} starting...", WINDOW_TITLE);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        document.set_title(WINDOW_TITLE);

        let config = GameConfig::load().map_err(|e| {
            log::error!("Invalid config: {}", e);
            JsValue::from_str(&e.to_string())
        })?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let logical = (config.screen_width, config.screen_height);
        let state = GameState::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let game = Rc::new(RefCell::new(Game::new(state)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, logical)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&window, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Pastel Stalactites running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if let Some(key) = Key::from_dom_key(&key) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                    g.keyboard.key_down(key);
                } else if is_idle_toggle(&key, event.repeat()) {
                    g.idle_mode = !g.idle_mode;
                    log::info!("Idle mode: {}", g.idle_mode);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().keyboard.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events for held keys will never arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keyboard.reset();
                log::info!("Keyboard state reset (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use pastel_stalactites::GameConfig;
    use pastel_stalactites::sim::{GamePhase, GameState, SessionStats, TickInput, tick};

    /// One minute of game time
    pub const HEADLESS_FRAMES: u64 = 60 * 60;

    /// What the autopilot achieved
    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub seed: u64,
        pub frames: u64,
        pub phase: GamePhase,
        pub sessions_played: u32,
        pub stats: SessionStats,
    }

    /// Play from the title screen with the autopilot until game over or the
    /// frame limit
    pub fn run(config: GameConfig, seed: u64, max_frames: u64) -> Result<RunSummary, pastel_stalactites::ConfigError> {
        let mut state = GameState::new(config, seed)?;

        let mut frames = 0;
        while frames < max_frames {
            let input = TickInput {
                frame: frames,
                idle_mode: true,
                ..Default::default()
            };
            tick(&mut state, &input);
            frames += 1;

            if state.phase == GamePhase::GameOver {
                break;
            }
        }

        Ok(RunSummary {
            seed,
            frames,
            phase: state.phase,
            sessions_played: state.sessions_played,
            stats: state.stats,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Pastel Stalactites (native) starting...");
    log::info!("Native mode runs a headless autopilot session - run with `trunk serve` for the playable web version");

    let config = match std::env::args_os().nth(1) {
        Some(path) => pastel_stalactites::GameConfig::load_from(std::path::Path::new(&path)),
        None => Ok(pastel_stalactites::GameConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    match headless::run(config, seed, headless::HEADLESS_FRAMES) {
        Ok(summary) => {
            log::info!(
                "Autopilot finished after {} frames in {:?}",
                summary.frames,
                summary.phase
            );
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("Failed to serialize summary: {}", e),
            }
        }
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::headless;
    use pastel_stalactites::GameConfig;
    use pastel_stalactites::sim::GamePhase;

    #[test]
    fn test_headless_run_survives_limit() {
        let summary = headless::run(GameConfig::default(), 7, 1200).unwrap();
        assert_eq!(summary.frames, 1200);
        assert_eq!(summary.phase, GamePhase::Playing);
        assert_eq!(summary.stats.distance, 1199);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["seed"], 7);
        assert_eq!(json["phase"], "Playing");
    }

    #[test]
    fn test_headless_run_rejects_bad_config() {
        let config = GameConfig {
            screen_width: 0,
            ..Default::default()
        };
        assert!(headless::run(config, 1, 10).is_err());
    }
}
