//! Flappy Bean entry point
//!
//! Platform-specific initialization: canvas sizing, DOM event wiring, and
//! the animation-frame loop. Everything gameplay-related lives in the
//! library crate.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, HtmlInputElement,
    };

    use flappy_bean::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use flappy_bean::render::RenderPass;
    use flappy_bean::sim::{GameContext, GameMode, Scale};
    use flappy_bean::{FrameDriver, FrameOutcome, Settings};

    /// Game instance holding all state
    struct Game {
        ctx: GameContext,
        driver: FrameDriver,
        render_pass: RenderPass,
        scale: Scale,
        surface: (f64, f64),
        /// True while an animation frame is requested
        loop_active: bool,
    }

    impl Game {
        /// Run one frame: tick, then render, then the score-display step.
        fn frame(&mut self) -> FrameOutcome {
            let outcome = self.driver.frame(&mut self.ctx, self.scale);
            self.render_pass
                .render(&self.ctx, self.scale, self.surface.0, self.surface.1);
            self.update_score_display();
            outcome
        }

        /// Update the Last/High score text. The high score ratchets here,
        /// every frame, not only at game over.
        fn update_score_display(&mut self) {
            self.ctx.stats.ratchet(self.ctx.session.score);
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.get_element_by_id("scoreDisplay") {
                el.set_inner_html(&format!(
                    "Last Score: {}<br>High Score: {}",
                    self.ctx.stats.last_score, self.ctx.stats.high_score
                ));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Bean starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let (width, height) = fit_canvas(&canvas);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // The sprite may still be loading (or missing); the render pass
        // skips the actor until the image is usable.
        let sprite = HtmlImageElement::new().expect("image element");
        sprite.set_src("bean.png");

        let game = Rc::new(RefCell::new(Game {
            ctx: GameContext::new(),
            driver: FrameDriver::new(),
            render_pass: RenderPass::new(context, sprite),
            scale: Scale::for_display(width as f32, height as f32),
            surface: (width, height),
            loop_active: false,
        }));

        setup_start_button(&document, game.clone());
        setup_keyboard(&document, game.clone());
        setup_resize(canvas, game.clone());

        game.borrow_mut().update_score_display();

        log::info!("Flappy Bean ready");
    }

    /// Size the canvas to the largest 16:9 rectangle that fits the window
    /// and center it. Returns the surface dimensions in pixels.
    fn fit_canvas(canvas: &HtmlCanvasElement) -> (f64, f64) {
        let window = web_sys::window().unwrap();
        let browser_w = window.inner_width().unwrap().as_f64().unwrap_or(1600.0);
        let browser_h = window.inner_height().unwrap().as_f64().unwrap_or(900.0);

        let aspect = f64::from(FIELD_WIDTH / FIELD_HEIGHT);
        let factor = if browser_w / browser_h < aspect {
            browser_w / f64::from(FIELD_WIDTH)
        } else {
            browser_h / f64::from(FIELD_HEIGHT)
        };
        let width = f64::from(FIELD_WIDTH) * factor;
        let height = f64::from(FIELD_HEIGHT) * factor;

        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let style = canvas.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("left", &format!("{}px", (browser_w - width) / 2.0));
        let _ = style.set_property("top", &format!("{}px", (browser_h - height) / 2.0));

        (width, height)
    }

    /// Difficulty inputs, read only while no run is active
    fn read_settings(document: &Document) -> Settings {
        let difficulty = document
            .get_element_by_id("difficultySlider")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.value().parse::<f32>().ok())
            .unwrap_or(0.0);
        let accelerate = document
            .get_element_by_id("toggleDifficulty")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.checked())
            .unwrap_or(false);
        Settings::new(difficulty, accelerate)
    }

    /// (Re)start a run: capture current settings, reset the session, hide
    /// the between-run UI, and make sure the frame loop is going.
    fn start_game(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let settings = read_settings(&document);
        let seed = js_sys::Date::now() as u64;

        let was_active = {
            let mut guard = game.borrow_mut();
            let g = &mut *guard;
            g.driver.start(&mut g.ctx, seed, &settings, g.scale);
            let was_active = g.loop_active;
            g.loop_active = true;
            was_active
        };

        set_display(&document, "startButton", "none");
        set_display(&document, "controls", "none");
        set_display(&document, "scoreDisplay", "none");
        set_display(&document, "startScreenImage", "none");

        if !was_active {
            request_frame(game);
        }
    }

    /// Bring the between-run UI back once a run has ended.
    fn show_end_screen() {
        let document = web_sys::window().unwrap().document().unwrap();
        set_display(&document, "startButton", "block");
        set_display(&document, "controls", "flex");
        set_display(&document, "scoreDisplay", "block");
        set_display(&document, "startScreenImage", "block");
    }

    fn set_display(document: &Document, id: &str, value: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                let _ = el.style().set_property("display", value);
            }
        }
    }

    fn request_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let outcome = game.borrow_mut().frame();
        match outcome {
            FrameOutcome::Continue => request_frame(game),
            FrameOutcome::Stop => {
                game.borrow_mut().loop_active = false;
                show_end_screen();
            }
        }
    }

    fn setup_start_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("startButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_game(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Space flaps while running and starts a run otherwise.
    fn setup_keyboard(document: &Document, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if event.code() != "Space" {
                return;
            }
            let running = game.borrow().ctx.session.mode == GameMode::Running;
            if running {
                game.borrow_mut().driver.queue_flap();
            } else {
                start_game(game.clone());
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = fit_canvas(&canvas);
            let mut guard = game.borrow_mut();
            guard.surface = (width, height);
            guard.scale = Scale::for_display(width as f32, height as f32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Bean (native) starting...");
    log::info!("Rendering needs a browser canvas - run with `trunk serve` for the web version");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
