use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};
use web_sys::{EventTarget, HtmlElement, Window};

use super::dom::{self, DomBindings};
use super::listener::Listener;
use crate::config::WaveConfig;
use crate::error::AttachError;
use crate::positioner::WaveColumnPositioner;
use crate::render::{paint_offsets, paint_state};
use crate::scroll::ScrollSample;
use crate::wave::Side;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct Session {
    positioner: WaveColumnPositioner,
    dom: DomBindings,
    frame: Option<i32>,
}

/// Scroll-driven wave animation attached to one container.
///
/// A handle whose attach failed is inert: every method is a no-op.
#[wasm_bindgen]
pub struct WaveText {
    inner: Option<Active>,
}

#[wasm_bindgen]
impl WaveText {
    /// Attach to `container`. `options` may be `undefined` (read the
    /// container's data attributes) or `{ waveNumber, waveSpeed }`.
    pub fn attach(container: &HtmlElement, options: JsValue) -> WaveText {
        match Active::attach(container, &options) {
            Ok(active) => WaveText {
                inner: Some(active),
            },
            Err(err) => {
                warn!("wave text left static: {}", err);
                WaveText { inner: None }
            }
        }
    }

    /// Attach to the first element matching `selector`.
    #[wasm_bindgen(js_name = attachTo)]
    pub fn attach_to(selector: &str, options: JsValue) -> WaveText {
        match dom::find_container(selector) {
            Ok(container) => Self::attach(&container, options),
            Err(err) => {
                warn!("wave text left static for {:?}: {}", selector, err);
                WaveText { inner: None }
            }
        }
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Last scroll progress seen, `0` for an inert handle.
    pub fn progress(&self) -> f64 {
        self.inner
            .as_ref()
            .map_or(0.0, |active| active.session.borrow().positioner.progress())
    }

    /// Remove every listener and stop animating. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        self.inner = None;
    }
}

struct Active {
    session: Rc<RefCell<Session>>,
    tick: FrameCallback,
    // Dropped after `Drop::drop` below, which unsubscribes them.
    _listeners: Vec<Listener>,
}

impl Active {
    fn attach(container: &HtmlElement, options: &JsValue) -> Result<Self, AttachError> {
        let window = web_sys::window().ok_or_else(|| AttachError::Dom("no window".into()))?;
        let mut dom = DomBindings::locate(container)?;
        let config = resolve_config(&dom, options);
        let positioner = WaveColumnPositioner::new(
            config,
            dom.column_spec(Side::Left),
            dom.column_spec(Side::Right),
            dom.thumbnail_src(),
        )?;
        paint_offsets(&positioner, &mut dom);

        let session = Rc::new(RefCell::new(Session {
            positioner,
            dom,
            frame: None,
        }));
        let tick: FrameCallback = Rc::new(RefCell::new(None));
        *tick.borrow_mut() = Some(frame_callback(session.clone(), tick.clone()));

        let target: &EventTarget = &window;
        let listeners = vec![
            Listener::new(target, "scroll", {
                let session = session.clone();
                let tick = tick.clone();
                move || on_scroll(&session, &tick)
            }),
            Listener::new(target, "resize", {
                let session = session.clone();
                move || on_resize(&session)
            }),
        ]
        .into_iter()
        .collect::<Result<Vec<_>, JsValue>>()
        .map_err(|err| AttachError::Dom(format!("{:?}", err)))?;

        let active = Active {
            session,
            tick,
            _listeners: listeners,
        };
        on_scroll(&active.session, &active.tick);
        Ok(active)
    }
}

impl Drop for Active {
    fn drop(&mut self) {
        let mut session = self.session.borrow_mut();
        session.positioner.dispose();
        if let (Some(frame), Some(window)) = (session.frame.take(), web_sys::window()) {
            if let Err(err) = window.cancel_animation_frame(frame) {
                warn!("failed to cancel wave animation frame: {:?}", err);
            }
        }
        drop(session);
        // Breaks the callback's reference back to its own slot.
        self.tick.borrow_mut().take();
    }
}

fn resolve_config(dom: &DomBindings, options: &JsValue) -> WaveConfig {
    let parsed = if options.is_undefined() || options.is_null() {
        dom.attribute_config()
    } else {
        let json = js_sys::JSON::stringify(options)
            .map(String::from)
            .unwrap_or_default();
        WaveConfig::from_json(&json)
    };
    parsed.unwrap_or_else(|err| {
        warn!("{}; falling back to the default wave config", err);
        WaveConfig::default()
    })
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map_or(0.0, |p| p.now())
}

fn on_scroll(session: &Rc<RefCell<Session>>, tick: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut guard = session.borrow_mut();
    let Session { positioner, dom, .. } = &mut *guard;
    let sample = ScrollSample::new(dom.track_geometry(&window).progress(), now_ms(&window));
    let Some(state) = positioner.update(sample, &dom.focus_geometry(&window)) else {
        return;
    };
    paint_state(&state, positioner, dom);
    schedule(&mut guard, tick, &window);
}

fn on_resize(session: &Rc<RefCell<Session>>) {
    let mut guard = session.borrow_mut();
    let Session { positioner, dom, .. } = &mut *guard;
    for side in Side::BOTH {
        let (width, widths) = dom.measure(side);
        positioner.resize(side, width, &widths);
    }
    debug!(
        "wave ranges resized: left {:?}, right {:?}",
        positioner.range(Side::Left),
        positioner.range(Side::Right)
    );
}

fn schedule(session: &mut Session, tick: &FrameCallback, window: &Window) {
    if session.frame.is_some() || session.positioner.is_settled() {
        return;
    }
    if let Some(callback) = tick.borrow().as_ref() {
        session.frame = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok();
    }
}

fn frame_callback(session: Rc<RefCell<Session>>, tick: FrameCallback) -> Closure<dyn FnMut(f64)> {
    Closure::wrap(Box::new(move |now: f64| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut guard = session.borrow_mut();
        guard.frame = None;
        if guard.positioner.is_disposed() {
            return;
        }
        let Session { positioner, dom, .. } = &mut *guard;
        let moving = positioner.advance_to(now);
        paint_offsets(positioner, dom);

        if moving {
            schedule(&mut guard, &tick, &window);
        }
    }) as Box<dyn FnMut(f64)>)
}
