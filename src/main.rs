//! Basket Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use basket_catch::renderer::{Color, Surface};
    use basket_catch::{FrameOutcome, GameConfig, GameController, Key};

    /// Canvas 2D context as a drawing surface
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
        width: f32,
        height: f32,
    }

    impl Surface for CanvasSurface {
        fn size(&self) -> (f32, f32) {
            (self.width, self.height)
        }

        fn clear(&mut self) {
            self.ctx
                .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        }

        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
            self.ctx.set_fill_style_str(color.as_css());
            self.ctx
                .fill_rect(x as f64, y as f64, width as f64, height as f64);
        }

        fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
            self.ctx.begin_path();
            if let Err(e) = self.ctx.arc(
                x as f64,
                y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            ) {
                log::warn!("arc failed: {:?}", e);
            }
            self.ctx.set_fill_style_str(color.as_css());
            self.ctx.fill();
            self.ctx.close_path();
        }

        fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
            self.ctx.set_fill_style_str(color.as_css());
            self.ctx.set_font(&format!("{size}px Arial"));
            if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
                log::warn!("fill_text failed: {:?}", e);
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        controller: GameController,
        surface: CanvasSurface,
        /// Interval callback, created once and reused across restarts
        spawn_fn: Option<js_sys::Function>,
        /// Active `setInterval` handle
        spawn_handle: Option<i32>,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Basket Catch starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let config = GameConfig {
            surface_width: canvas.width() as f32,
            surface_height: canvas.height() as f32,
            ..Default::default()
        };
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let seed = js_sys::Date::now() as u64;
        let surface = CanvasSurface {
            ctx,
            width: config.surface_width,
            height: config.surface_height,
        };
        let game = Rc::new(RefCell::new(Game {
            controller: GameController::new(config, seed),
            surface,
            spawn_fn: None,
            spawn_handle: None,
        }));

        // Spawn callback
        {
            let spawn_game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                spawn_game.borrow_mut().controller.spawn_tick();
            });
            let spawn_fn: js_sys::Function = closure.into_js_value().unchecked_into();
            game.borrow_mut().spawn_fn = Some(spawn_fn);
        }

        setup_input_handlers(game.clone())?;
        setup_restart_button(game.clone());

        start_spawning(&game);
        request_animation_frame(game);

        log::info!("Basket Catch running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down: direction keys and restart
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_name(&event.key()) else {
                    return;
                };
                event.prevent_default();

                let resumed = {
                    let mut g = game.borrow_mut();
                    let was_running = g.controller.is_running();
                    g.controller.key_down(key);
                    !was_running && g.controller.is_running()
                };
                if resumed {
                    start_spawning(&game);
                    request_animation_frame(game.clone());
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    game.borrow_mut().controller.key_up(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let was_running = {
                    let mut g = game.borrow_mut();
                    let was_running = g.controller.is_running();
                    g.controller.restart(js_sys::Date::now() as u64);
                    was_running
                };
                // A running game keeps its existing frame loop and interval
                if !was_running {
                    start_spawning(&game);
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn start_spawning(game: &Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut g = game.borrow_mut();
        if g.spawn_handle.is_some() {
            return;
        }
        let interval_ms = g.controller.config().spawn_interval_ms as i32;
        let handle = match &g.spawn_fn {
            Some(spawn_fn) => window
                .set_interval_with_callback_and_timeout_and_arguments_0(spawn_fn, interval_ms),
            None => return,
        };
        match handle {
            Ok(handle) => g.spawn_handle = Some(handle),
            Err(e) => log::error!("Failed to start spawn timer: {:?}", e),
        }
    }

    fn stop_spawning(game: &Rc<RefCell<Game>>) {
        if let Some(handle) = game.borrow_mut().spawn_handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let outcome = {
            let mut guard = game.borrow_mut();
            let g = &mut *guard;
            g.controller.frame(&mut g.surface)
        };

        match outcome {
            FrameOutcome::Continue => request_animation_frame(game),
            FrameOutcome::GameOver | FrameOutcome::Stopped => stop_spawning(&game),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Two minutes of play at 60 Hz
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u64 = 120 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use basket_catch::consts::FRAME_MS;
    use basket_catch::{CommandBuffer, GameConfig, GameController, HeadlessDriver};

    env_logger::init();
    log::info!("Basket Catch (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let config = GameConfig::load()?;
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let mut surface = CommandBuffer::new(config.surface_width, config.surface_height);
    let mut controller = GameController::new(config, seed);
    controller.set_autopilot(true);

    let summary = HeadlessDriver::new(FRAME_MS, DEMO_FRAMES).run(&mut controller, &mut surface);
    log::debug!("Final frame: {}", controller.snapshot().to_json()?);

    println!(
        "{} after {} frames - score {}, missed {}/{}",
        if summary.game_over { "Game over" } else { "Time up" },
        summary.frames,
        summary.score,
        summary.missed_balls,
        controller.config().max_missed_balls
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
