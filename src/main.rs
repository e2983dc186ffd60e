//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use brick_breaker::Key;
    use brick_breaker::platform::web::{AlertNotifier, CanvasSurface, window_size};
    use brick_breaker::{FrameStatus, Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session,
        surface: CanvasSurface,
        notifier: AlertNotifier,
    }

    impl Game {
        /// Run one frame
        fn frame(&mut self) {
            if let FrameStatus::Ended(outcome) = self.session.frame(&mut self.surface, &mut self.notifier) {
                log::info!("{:?}; new session started", outcome);
            }
        }

        /// Refit the playfield to the window
        fn resize(&mut self, width: f32, height: f32) {
            self.session.resize(width, height);
            let layout = self.session.state.layout;
            self.surface.set_size(layout.width, layout.height);
        }

        /// Touch x relative to the canvas
        fn touch_x(&self, event: &TouchEvent) -> Option<f32> {
            let touch = event.touches().get(0)?;
            let rect = self.surface.canvas().get_bounding_client_rect();
            Some(touch.client_x() as f32 - rect.left() as f32)
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let settings = Settings::load();
        log::info!(
            "Grid {}x{}, {} lives, input mode {}",
            settings.rows,
            settings.columns,
            settings.lives,
            settings.input_mode.as_str()
        );

        let (width, height) = window_size(&window);
        let session = Session::with_surface_size(settings, width, height);
        let surface = CanvasSurface::new(canvas.clone())?;
        let layout = session.state.layout;
        surface.set_size(layout.width, layout.height);

        let game = Rc::new(RefCell::new(Game {
            session,
            surface,
            notifier: AlertNotifier::new(window.clone()),
        }));

        setup_input_handlers(&window, &canvas, game.clone())?;
        setup_resize_handler(&window, game.clone())?;

        request_animation_frame(game);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    game.borrow_mut().session.input.key_down(key);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    game.borrow_mut().session.input.key_up(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if let Some(x) = g.touch_x(&event) {
                    let width = g.session.state.layout.width;
                    g.session.input.touch_start(x, width);
                }
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if let Some(x) = g.touch_x(&event) {
                    g.session.input.touch_move(x);
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch end
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().session.input.touch_end();
            });
            canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize_handler(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window_clone = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::UiEvent| {
            let (width, height) = window_size(&window_clone);
            game.borrow_mut().resize(width, height);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Frames the headless runner plays before giving up (about five minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAME_LIMIT: u64 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::driver::LogNotifier;
    use brick_breaker::{DisplayList, FrameStatus, Session, Settings};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    let mut session = Session::new(Settings::load());
    let mut surface = DisplayList::new();
    let mut notifier = LogNotifier;

    for _ in 0..HEADLESS_FRAME_LIMIT {
        if let FrameStatus::Ended(_) = session.frame(&mut surface, &mut notifier) {
            if let Some(summary) = session.last_summary() {
                println!(
                    "{:?} after {} frames: score {}",
                    summary.outcome, summary.frames, summary.score
                );
            }
            return;
        }
    }

    println!(
        "Still playing after {} frames: score {}, lives {}",
        HEADLESS_FRAME_LIMIT, session.state.score, session.state.lives
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
