//! DOM lookup, measurement and writes for one wave-text container.
//!
//! Expected markup:
//!
//! ```html
//! <section data-wave-text data-wave-number="12" data-wave-speed="1">
//!   <div data-wave-wrapper>
//!     <div data-wave-column="left">
//!       <p data-wave-item data-image="a.jpg">Alpha</p>
//!     </div>
//!     <img data-wave-thumbnail src="a.jpg">
//!     <div data-wave-column="right">
//!       <p data-wave-item>Alpha</p>
//!     </div>
//!   </div>
//! </section>
//! ```

use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlImageElement, Window};

use crate::config::WaveConfig;
use crate::error::{AttachError, ConfigError};
use crate::positioner::{ColumnSpec, FocusGeometry};
use crate::render::Surface;
use crate::scroll::TrackGeometry;
use crate::wave::Side;

pub const ITEM_SELECTOR: &str = "[data-wave-item]";
pub const WRAPPER_SELECTOR: &str = "[data-wave-wrapper]";
pub const THUMBNAIL_SELECTOR: &str = "[data-wave-thumbnail]";
pub const IMAGE_ATTRIBUTE: &str = "data-image";
pub const FOCUSED_CLASS: &str = "is-focused";

fn column_selector(side: Side) -> String {
    format!("[data-wave-column=\"{}\"]", side)
}

fn dom_err(err: JsValue) -> AttachError {
    AttachError::Dom(format!("{:?}", err))
}

fn query<T: JsCast>(root: &Element, selector: &str) -> Result<Option<T>, AttachError> {
    Ok(root
        .query_selector(selector)
        .map_err(dom_err)?
        .and_then(|el| el.dyn_into::<T>().ok()))
}

fn items(column: &Element) -> Result<Vec<HtmlElement>, AttachError> {
    let list = column.query_selector_all(ITEM_SELECTOR).map_err(dom_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// First element in the document matching `selector`.
pub fn find_container(selector: &str) -> Result<HtmlElement, AttachError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AttachError::Dom("no document".into()))?;
    document
        .query_selector(selector)
        .map_err(dom_err)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(AttachError::MissingContainer)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub struct DomBindings {
    container: HtmlElement,
    wrapper: HtmlElement,
    thumbnail: HtmlImageElement,
    columns: [HtmlElement; 2],
    items: [Vec<HtmlElement>; 2],
}

impl DomBindings {
    pub fn locate(container: &HtmlElement) -> Result<Self, AttachError> {
        let wrapper = query::<HtmlElement>(container, WRAPPER_SELECTOR)?.unwrap_or_else(|| container.clone());
        let thumbnail =
            query::<HtmlImageElement>(container, THUMBNAIL_SELECTOR)?.ok_or(AttachError::MissingThumbnail)?;

        let left = query::<HtmlElement>(container, &column_selector(Side::Left))?
            .ok_or(AttachError::MissingColumn(Side::Left))?;
        let right = query::<HtmlElement>(container, &column_selector(Side::Right))?
            .ok_or(AttachError::MissingColumn(Side::Right))?;
        let left_items = items(&left)?;
        let right_items = items(&right)?;

        Ok(Self {
            container: container.clone(),
            wrapper,
            thumbnail,
            columns: [left, right],
            items: [left_items, right_items],
        })
    }

    fn slot(side: Side) -> usize {
        match side {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn items(&self, side: Side) -> &[HtmlElement] {
        &self.items[Self::slot(side)]
    }

    /// Configuration declared on the container's data attributes.
    pub fn attribute_config(&self) -> Result<WaveConfig, ConfigError> {
        WaveConfig::from_attributes(
            self.container.get_attribute("data-wave-number").as_deref(),
            self.container.get_attribute("data-wave-speed").as_deref(),
        )
    }

    /// Column width and the width of each of its elements.
    pub fn measure(&self, side: Side) -> (f64, Vec<f64>) {
        let width = self.columns[Self::slot(side)].client_width() as f64;
        let widths = self
            .items(side)
            .iter()
            .map(|el| el.offset_width() as f64)
            .collect();
        (width, widths)
    }

    pub fn column_spec(&self, side: Side) -> ColumnSpec {
        let (width, element_widths) = self.measure(side);
        ColumnSpec {
            width,
            element_widths,
            images: self
                .items(side)
                .iter()
                .map(|el| el.get_attribute(IMAGE_ATTRIBUTE))
                .collect(),
        }
    }

    /// The thumbnail's source as written in the markup.
    pub fn thumbnail_src(&self) -> Option<String> {
        self.thumbnail
            .get_attribute("src")
            .filter(|src| !src.is_empty())
    }

    pub fn track_geometry(&self, window: &Window) -> TrackGeometry {
        let rect = self.container.get_bounding_client_rect();
        TrackGeometry {
            top: rect.top(),
            height: rect.height(),
            viewport_height: viewport_height(window),
        }
    }

    pub fn focus_geometry(&self, window: &Window) -> FocusGeometry {
        let centers = self
            .items(Side::Left)
            .iter()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                rect.top() + rect.height() / 2.0
            })
            .collect();
        let wrapper = self.wrapper.get_bounding_client_rect();
        FocusGeometry {
            centers,
            viewport_height: viewport_height(window),
            wrapper_top: wrapper.top(),
            wrapper_height: wrapper.height(),
            thumbnail_height: self.thumbnail.offset_height() as f64,
        }
    }
}

impl Surface for DomBindings {
    fn set_offset(&mut self, side: Side, index: usize, x: f64) {
        if let Some(el) = self.items(side).get(index) {
            if let Err(err) = el
                .style()
                .set_property("transform", &format!("translate3d({:.2}px, 0, 0)", x))
            {
                debug!("failed to move {} item {}: {:?}", side, index, err);
            }
        }
    }

    fn set_focused(&mut self, side: Side, index: usize, focused: bool) {
        if let Some(el) = self.items(side).get(index) {
            if let Err(err) = el.class_list().toggle_with_force(FOCUSED_CLASS, focused) {
                debug!("failed to flag {} item {}: {:?}", side, index, err);
            }
        }
    }

    fn set_thumbnail_src(&mut self, src: &str) {
        self.thumbnail.set_src(src);
    }

    fn set_thumbnail_y(&mut self, y: f64) {
        if let Err(err) = self
            .thumbnail
            .style()
            .set_property("transform", &format!("translate3d(0, {:.2}px, 0)", y))
        {
            debug!("failed to move thumbnail: {:?}", err);
        }
    }
}
