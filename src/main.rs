//! Rock Runner entry point
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

    use rock_runner::audio::{AudioManager, SoundEffect};
    use rock_runner::consts::*;
    use rock_runner::renderer::SceneRenderState;
    use rock_runner::settings::Settings;
    use rock_runner::sim::{self, GameEvent, Session};

    /// Game instance holding all state
    struct Game {
        session: Session,
        render_state: Option<SceneRenderState>,
        audio: AudioManager,
        settings: Settings,
        /// Events drained once per animation frame
        events: Vec<GameEvent>,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new() -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);
            audio.set_music_volume(settings.music_volume);
            Self {
                session: Session::new(),
                render_state: None,
                audio,
                settings,
                events: Vec::new(),
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Advance the sim one frame and route its events to audio
        fn update(&mut self, time: f64) {
            sim::frame(&mut self.session, &mut self.events);

            for event in self.events.drain(..) {
                match event {
                    GameEvent::Jumped => {
                        self.audio.stop_run_loop();
                        self.audio.play(SoundEffect::Jump);
                    }
                    GameEvent::Landed => {
                        self.audio.play(SoundEffect::Land);
                        self.audio.start_run_loop();
                    }
                    GameEvent::GameOver { score, high_score } => {
                        self.audio.stop_run_loop();
                        self.audio.stop_music();
                        self.audio.play(SoundEffect::GameOver);
                        if score == high_score && score > 0 {
                            self.audio.play(SoundEffect::HighScore);
                        }
                    }
                    GameEvent::Restarted => {
                        self.audio.play(SoundEffect::Restart);
                        self.audio.start_music();
                        self.audio.start_run_loop();
                    }
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.session, time) {
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

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Live score readout
            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&format!("Score: {}", self.session.score.score)));
            }

            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "");
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // Show/hide game over overlay
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.session.is_running() {
                    let _ = el.set_attribute("class", "hidden");
                } else {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.session.score.score.to_string()));
                    }
                    if let Some(high_el) = document.get_element_by_id("final-high-score") {
                        high_el.set_text_content(Some(&self.session.score.high_score.to_string()));
                    }
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rock Runner starting...");
        let boot_start = js_sys::Date::now();

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new()));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
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

        let render_state = SceneRenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());
        setup_timers(game.clone());
        setup_mute_on_blur(game.clone());

        // Show HUD
        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!(
            "Rock Runner running! (init took {:.0} ms)",
            js_sys::Date::now() - boot_start
        );
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match event.key().as_str() {
                    "ArrowUp" | " " => {
                        event.prevent_default();
                        let mut g = game.borrow_mut();
                        g.audio.resume();
                        if !g.audio.music_playing() && g.session.is_running() {
                            g.audio.start_music();
                            g.audio.start_run_loop();
                        }
                        let mut events = std::mem::take(&mut g.events);
                        sim::jump(&mut g.session, &mut events);
                        g.events = events;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer (mouse or touch) on the canvas also jumps
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                g.audio.resume();
                if !g.audio.music_playing() && g.session.is_running() {
                    g.audio.start_music();
                    g.audio.start_run_loop();
                }
                let mut events = std::mem::take(&mut g.events);
                sim::jump(&mut g.session, &mut events);
                g.events = events;
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                let mut events = std::mem::take(&mut g.events);
                sim::restart(&mut g.session, &mut events);
                g.events = events;
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Fixed wall-clock intervals: scoring every 100 ms, spawning every 2 s.
    /// Both keep firing after game over; the sim ignores them while not
    /// Running.
    fn setup_timers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                sim::score_tick(&mut game.borrow_mut().session);
            });
            let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                SCORE_INTERVAL_MS,
            );
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut()>::new(move || {
                sim::spawn_tick(&mut game.borrow_mut().session);
            });
            let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                SPAWN_INTERVAL_MS,
            );
            closure.forget();
        }
    }

    fn setup_mute_on_blur(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(false);
                }
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.last_time = time;
            g.update(time);
            g.render(time);
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rock Runner (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning headless demo...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive one run to its end without a browser: spawn a rock, score a few
/// ticks, and let the collision finish it.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use rock_runner::sim::{self, GameEvent, Session, SessionPhase};

    let mut session = Session::new();
    let mut events = Vec::new();

    sim::spawn_tick(&mut session);
    sim::jump(&mut session, &mut events);

    let mut frames = 0u32;
    while session.phase != SessionPhase::GameOver && frames < 10_000 {
        sim::frame(&mut session, &mut events);
        if frames % 17 == 0 {
            sim::score_tick(&mut session);
        }
        frames += 1;
    }

    assert_eq!(session.phase, SessionPhase::GameOver);
    assert!(events.contains(&GameEvent::Jumped));
    assert!(
        events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
    );
    println!(
        "✓ Run ended after {} frames with score {}",
        frames, session.score.score
    );
}
