//! Browser access for the page: layout reads, smooth scrolling and the
//! window listener that drives the tracker.

use log::debug;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::sections::{RevealTarget, Section};
use crate::tracker::{SectionBox, Viewport};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoDocumentElement,
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("could not read `{0}` from the window")]
    Metric(&'static str),
    #[error("could not attach `{0}` listener")]
    Listener(&'static str),
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn viewport() -> Result<Viewport, DomError> {
    let window = window()?;
    let scroll_y = window.scroll_y().map_err(|_| DomError::Metric("scrollY"))?;
    let inner_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .ok_or(DomError::Metric("innerHeight"))?;
    let document_height = window
        .document()
        .ok_or(DomError::NoDocument)?
        .document_element()
        .ok_or(DomError::NoDocumentElement)?
        .scroll_height() as f64;

    Ok(Viewport { scroll_y, inner_height, document_height })
}

fn element_box(element: &Element) -> SectionBox {
    let rect = element.get_bounding_client_rect();
    SectionBox { top: rect.top(), bottom: rect.bottom() }
}

pub fn section_element(document: &Document, section: Section) -> Result<Element, DomError> {
    document
        .get_element_by_id(section.id())
        .ok_or_else(|| DomError::MissingElement(section.to_string()))
}

pub fn reveal_element(document: &Document, target: RevealTarget) -> Result<Element, DomError> {
    let selector = format!("[data-reveal=\"{}\"]", target.key());
    match document.query_selector(&selector) {
        Ok(Some(element)) => Ok(element),
        _ => Err(DomError::MissingElement(selector)),
    }
}

pub fn section_bounds(document: &Document, section: Section) -> Option<SectionBox> {
    section_element(document, section).ok().map(|el| element_box(&el))
}

pub fn reveal_bounds(document: &Document, target: RevealTarget) -> Option<SectionBox> {
    reveal_element(document, target).ok().map(|el| element_box(&el))
}

/// Smoothly scrolls `section` into view.
pub fn scroll_to_section(section: Section) -> Result<(), DomError> {
    let element = section_element(&document()?, section)?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

const LISTENER_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Keeps a handler registered for window scroll and resize events until dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    pub fn attach<F>(handler: F) -> Result<Self, DomError>
    where
        F: Fn() + 'static,
    {
        let listener = ScrollListener {
            window: window()?,
            callback: Closure::<dyn Fn()>::new(handler),
        };
        // on error the partially attached listener is removed by Drop
        for event in LISTENER_EVENTS {
            listener
                .window
                .add_event_listener_with_callback(event, listener.callback.as_ref().unchecked_ref())
                .map_err(|_| DomError::Listener(event))?;
        }
        debug!("scroll listener attached");
        Ok(listener)
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        for event in LISTENER_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
        debug!("scroll listener detached");
    }
}
