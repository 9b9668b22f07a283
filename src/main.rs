//! Power Pong entry point
//!
//! Browser: wires canvas, keyboard, buttons and score displays, then runs the
//! frame loop. Native: headless runner with an autopilot player.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use power_pong::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use power_pong::platform::controls::BUTTONS;
    use power_pong::platform::score::{COMPUTER_SCORE_ID, PLAYER_SCORE_ID};
    use power_pong::platform::{KeyState, ScoreSink, push_scores};
    use power_pong::renderer::{RenderState, ShapeBatch, draw_frame};
    use power_pong::sim::{self, GameState, Side};

    /// Score `<span>`s in the page
    struct DomScores {
        player: Option<Element>,
        computer: Option<Element>,
    }

    impl DomScores {
        fn find(document: &web_sys::Document) -> Self {
            let lookup = |id: &str| {
                let el = document.get_element_by_id(id);
                if el.is_none() {
                    log::warn!("Score element #{} not found", id);
                }
                el
            };
            Self {
                player: lookup(PLAYER_SCORE_ID),
                computer: lookup(COMPUTER_SCORE_ID),
            }
        }
    }

    impl ScoreSink for DomScores {
        fn set_score(&mut self, side: Side, score: u32) {
            let el = match side {
                Side::Player => &self.player,
                Side::Computer => &self.computer,
            };
            if let Some(el) = el {
                el.set_text_content(Some(&score.to_string()));
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        keys: KeyState,
        batch: ShapeBatch,
        render_state: Option<RenderState>,
        scores: DomScores,
    }

    impl Game {
        /// One display frame: input, draw, simulate, show scores
        fn frame(&mut self) {
            let input = self.keys.tick_input();
            sim::apply_input(&mut self.state, &input);

            draw_frame(&self.state, &mut self.batch);
            self.render();

            sim::step(&mut self.state);
            push_scores(&self.state, &mut self.scores);
        }

        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.batch.vertices()) {
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

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Power Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Field and canvas share one coordinate space
        let width = FIELD_WIDTH as u32;
        let height = FIELD_HEIGHT as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            keys: KeyState::new(),
            batch: ShapeBatch::new(),
            render_state: None,
            scores: DomScores::find(&document),
        }));

        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .expect("Failed to create device");
        game.borrow_mut().render_state = Some(render_state);

        setup_keyboard(game.clone());
        setup_buttons(&document, game.clone());

        request_animation_frame(game);

        log::info!("Power Pong running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.set(&event.key(), pressed);
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-up events are lost while the page is unfocused
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().keys.release_all();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        for (id, control) in BUTTONS {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Button #{} not found", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                control.apply(&mut game.borrow_mut().state);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::Result;
    use clap::Parser;

    use power_pong::renderer::{ShapeBatch, draw_frame};
    use power_pong::sim::{self, Difficulty, GameEvent, GameState, Side, TickInput};
    use power_pong::tuning::Tuning;

    #[derive(Parser, Debug, Clone)]
    #[command(name = "power-pong")]
    #[command(about = "Headless Power Pong: autopilot player vs. computer", long_about = None)]
    pub struct Cli {
        /// Number of frames to simulate
        #[arg(long, default_value_t = 3600)]
        pub frames: u64,

        /// RNG seed (defaults to the current time)
        #[arg(long)]
        pub seed: Option<u64>,

        /// Opponent strength
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        pub difficulty: Difficulty,

        /// JSON file overriding balance values
        #[arg(long)]
        pub tuning: Option<PathBuf>,
    }

    /// Totals collected over a run
    #[derive(Debug, Default)]
    struct RunStats {
        rallies: u64,
        paddle_hits: u64,
        wall_bounces: u64,
        power_ups_spawned: u64,
        power_ups_collected: u64,
        longest_rally_hits: u64,
    }

    pub fn run(cli: Cli) -> Result<()> {
        let tuning = match &cli.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let difficulty = cli.difficulty;
        let seed = cli.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        log::info!(
            "Simulating {} frames at {} (seed {})",
            cli.frames,
            difficulty.as_str(),
            seed
        );

        let mut state = GameState::with_tuning(seed, tuning);
        sim::set_difficulty(&mut state, difficulty);

        let mut batch = ShapeBatch::new();
        let mut stats = RunStats::default();
        let mut rally_hits = 0;

        for _ in 0..cli.frames {
            let input = TickInput::autopilot(&state);
            sim::apply_input(&mut state, &input);
            draw_frame(&state, &mut batch);

            for event in sim::step(&mut state) {
                match event {
                    GameEvent::WallBounce => stats.wall_bounces += 1,
                    GameEvent::PaddleHit(_) => {
                        stats.paddle_hits += 1;
                        rally_hits += 1;
                    }
                    GameEvent::Scored(_) => {
                        stats.rallies += 1;
                        stats.longest_rally_hits = stats.longest_rally_hits.max(rally_hits);
                        rally_hits = 0;
                    }
                    GameEvent::PowerUpSpawned(_) => stats.power_ups_spawned += 1,
                    GameEvent::PowerUpCollected(_) => stats.power_ups_collected += 1,
                }
            }
        }

        log::info!("Run finished: {:?}", stats);
        log::debug!("Last frame tessellated to {} vertices", batch.vertices().len());
        println!(
            "Player {} - {} Computer after {} frames",
            state.scores.get(Side::Player),
            state.scores.get(Side::Computer),
            state.frame
        );
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Power Pong (native) starting...");

    native::run(native::Cli::parse())
}
