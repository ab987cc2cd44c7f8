//! Process-wide runtime setup: the `log` backend and the panic hook.
//!
//! Hosts call [`init`] once before attaching any animation; calling it again
//! is a no-op.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the logger at `level` (the browser console on wasm32, stderr
/// elsewhere) and the panic hook.
pub fn init(level: LevelFilter) {
    INIT.call_once(|| {
        #[cfg(all(target_arch = "wasm32", feature = "console_error_panic_hook"))]
        console_error_panic_hook::set_once();

        install(level);
    });
}

#[cfg(target_arch = "wasm32")]
fn install(level: LevelFilter) {
    // Another logger may already be installed by the embedding app.
    match level.to_level() {
        Some(level) => {
            console_log::init_with_level(level).ok();
        }
        None => log::set_max_level(LevelFilter::Off),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install(level: LevelFilter) {
    env_logger::Builder::new().filter_level(level).try_init().ok();
}
