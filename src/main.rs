//! Flappy entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

    use flappy::renderer::CanvasSurface;
    use flappy::{DeathStyle, Game, GameConfig, Scheduler};

    /// Everything the frame and input callbacks share
    struct Host {
        game: Game,
        surface: CanvasSurface,
    }

    /// Schedules the next frame with requestAnimationFrame
    struct RafScheduler {
        host: Rc<RefCell<Host>>,
    }

    impl Scheduler for RafScheduler {
        fn request_frame(&mut self) {
            request_animation_frame(self.host.clone());
        }
    }

    /// Load an image and wait until it is decoded
    async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(src);
        JsFuture::from(image.decode()).await?;
        Ok(image)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy starting...");

        let config = GameConfig::load();

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(config.screen_width as u32);
        canvas.set_height(config.screen_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // The loop only starts once the actor sprite is ready
        let actor_image = match load_image(&config.actor_sprite).await {
            Ok(image) => image,
            Err(e) => {
                log::error!("Failed to load {}: {:?}", config.actor_sprite, e);
                return;
            }
        };
        let explosion_image = if config.death_style == DeathStyle::Exploded {
            match load_image(&config.explosion_sprite).await {
                Ok(image) => Some(image),
                Err(e) => {
                    log::warn!("Failed to load {}: {:?}", config.explosion_sprite, e);
                    None
                }
            }
        } else {
            None
        };

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!(
            "Game initialized with seed: {} ({} death style)",
            seed,
            config.death_style.as_str()
        );

        let host = Rc::new(RefCell::new(Host {
            game: Game::new(config, seed),
            surface: CanvasSurface::new(ctx, actor_image, explosion_image),
        }));

        setup_input_handlers(host.clone());

        // Start game loop
        let mut scheduler = RafScheduler { host: host.clone() };
        host.borrow_mut().game.start(&mut scheduler);

        log::info!("Flappy running!");
    }

    fn setup_input_handlers(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut scheduler = RafScheduler { host: host.clone() };
            let mut h = host.borrow_mut();
            if let Some(action) = h.game.config().keys.action_for(&event.code()) {
                // Keep Space from scrolling the page
                event.prevent_default();
                h.game.handle(action, &mut scheduler);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame chain stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(host);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>) {
        let mut scheduler = RafScheduler { host: host.clone() };
        let mut h = host.borrow_mut();
        let Host { game, surface } = &mut *h;
        game.frame(surface, &mut scheduler);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Seed for the headless run when the config does not fix one
#[cfg(not(target_arch = "wasm32"))]
const DEMO_SEED: u64 = 0x5EED;

/// Upper bound on headless ticks (~5 minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_MAX_TICKS: u64 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy::game::run_autopilot;
    use flappy::renderer::NullSurface;
    use flappy::{Game, GameConfig};

    env_logger::init();
    log::info!("Flappy (native) starting...");
    log::info!("Native mode runs headless with the autopilot - use `trunk serve` for the web version");

    let config = GameConfig::load();
    let seed = config.seed.unwrap_or(DEMO_SEED);
    let mut game = Game::new(config, seed);

    let ticks = run_autopilot(&mut game, &mut NullSurface, DEMO_MAX_TICKS);
    let state = game.state();
    println!(
        "Autopilot ran {} ticks (seed {}): score {}, best {}, {:?}",
        ticks, seed, state.score.current, state.score.best, state.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
