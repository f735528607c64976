pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Expands to:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, level
///   loading, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use airtime_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// airtime_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `airtime_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    // One zero-argument export per runner accessor.
    (@getters $($export:ident -> $ret:ty = $method:ident),* $(,)?) => {
        $(
            #[wasm_bindgen]
            pub fn $export() -> $ret {
                with_runner(|r| r.$method())
            }
        )*
    };

    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) -> bool {
            with_runner(|r| r.load_manifest(json))
        }

        #[wasm_bindgen]
        pub fn game_register_level(name: &str, json: &str) {
            with_runner(|r| r.register_level(name, json));
        }

        #[wasm_bindgen]
        pub fn game_load_level(name: &str) -> bool {
            with_runner(|r| r.load_level(name))
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        $crate::export_game!(@getters
            get_header_ptr -> *const f32 = header_ptr,
            get_instances_ptr -> *const f32 = instances_ptr,
            get_instance_count -> u32 = instance_count,
            get_sound_events_ptr -> *const f32 = sound_events_ptr,
            get_sound_events_len -> u32 = sound_events_len,
            get_game_events_ptr -> *const f32 = game_events_ptr,
            get_game_events_len -> u32 = game_events_len,
            get_world_width -> f32 = world_width,
            get_world_height -> f32 = world_height,
            get_camera_x -> f32 = camera_x,
            get_camera_y -> f32 = camera_y,
            get_max_instances -> u32 = max_instances,
            get_max_sounds -> u32 = max_sounds,
            get_max_events -> u32 = max_events,
            get_buffer_total_floats -> u32 = buffer_total_floats,
        );
    };
}
