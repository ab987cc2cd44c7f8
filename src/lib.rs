//! Scroll-driven wave text.
//!
//! Two mirrored columns of text drift sideways along a sine wave as a pinned
//! section scrolls by, while the item nearest the viewport centre is flagged
//! as focused and drives a synced thumbnail image.
//!
//! The positioning logic is target independent and tested on the host; the
//! browser bindings only exist on `wasm32`.

pub mod config;
pub mod error;
pub mod focus;
pub mod logging;
pub mod positioner;
pub mod render;
pub mod scroll;
pub mod smoothing;
pub mod wave;

pub use config::WaveConfig;
pub use error::{AttachError, ConfigError};
pub use positioner::{ColumnSpec, FocusGeometry, RenderState, WaveColumnPositioner};
pub use render::Surface;
pub use scroll::{ScrollSample, TrackGeometry};
pub use wave::{Range, Side};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use log::{info, LevelFilter};
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlElement;

    mod dom;
    mod listener;
    mod widget;

    pub use widget::WaveText;

    pub const CONTAINER_SELECTOR: &str = "[data-wave-text]";

    thread_local! {
        static MOUNTED: RefCell<Vec<WaveText>> = RefCell::new(Vec::new());
    }

    /// Set up logging once and attach to every marked container on the page.
    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        crate::logging::init(LevelFilter::Info);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let containers = document.query_selector_all(CONTAINER_SELECTOR)?;

        let mut attached = 0;
        for i in 0..containers.length() {
            let Some(container) = containers.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let handle = WaveText::attach(&container, JsValue::UNDEFINED);
            attached += usize::from(handle.is_active());
            MOUNTED.with(|mounted| mounted.borrow_mut().push(handle));
        }
        info!("wave text attached to {} of {} containers", attached, containers.length());
        Ok(())
    }

    /// Dispose every animation attached by `main`.
    #[wasm_bindgen(js_name = disposeAll)]
    pub fn dispose_all() {
        let handles = MOUNTED.with(|mounted| std::mem::take(&mut *mounted.borrow_mut()));
        drop(handles);
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::WaveText;
