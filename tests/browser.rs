#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use rawchi_site::dom::{self, DomError, ScrollListener};
use rawchi_site::sections::{RevealTarget, Section};
use rawchi_site::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement};
use yew::AppHandle;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(tag: &str, id: Option<&str>, reveal: Option<&str>) -> Element {
    let document = dom::document().unwrap();
    let element = document.create_element(tag).unwrap();
    if let Some(id) = id {
        element.set_id(id);
    }
    if let Some(key) = reveal {
        element.set_attribute("data-reveal", key).unwrap();
    }
    element.set_attribute("style", "display: block; height: 300px;").unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn fire(name: &str) {
    let event = Event::new(name).unwrap();
    dom::window().unwrap().dispatch_event(&event).unwrap();
}

fn click(selector: &str) {
    dom::document()
        .unwrap()
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn exists(selector: &str) -> bool {
    dom::document().unwrap().query_selector(selector).unwrap().is_some()
}

fn active_link(section: Section) -> String {
    format!(".nav-link.active[href=\"{}\"]", section.href())
}

/// Page rendered into a viewport-sized root that scrolls on its own.
///
/// The spacer keeps the window far from its bottom edge so the tracker never
/// pins `contact`, and smooth scrolls move the root instead of the window.
struct MountedPage {
    root: Element,
    spacer: Element,
    app: AppHandle<App>,
}

impl MountedPage {
    async fn new() -> Self {
        let spacer = mount("div", None, None);
        spacer.set_attribute("style", "display: block; height: 10000px;").unwrap();

        let root = mount("div", Some("app-root"), None);
        root.set_attribute(
            "style",
            "position: fixed; top: 0; left: 0; width: 100%; height: 100%; overflow: hidden;",
        )
        .unwrap();

        let app = yew::Renderer::<App>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;
        MountedPage { root, spacer, app }
    }

    /// Scrolls the root so `section` starts `offset` pixels below the viewport top.
    fn place(&self, section: Section, offset: f64) {
        let element = dom::document().unwrap().get_element_by_id(section.id()).unwrap();
        let top = element.get_bounding_client_rect().top() + self.root.scroll_top() as f64;
        self.root.set_scroll_top((top - offset) as i32);
    }

    fn teardown(self) {
        self.app.destroy();
        self.root.remove();
        self.spacer.remove();
    }
}

#[wasm_bindgen_test]
fn viewport_reads_window_metrics() {
    let viewport = dom::viewport().unwrap();
    assert!(viewport.inner_height > 0.0);
    assert!(viewport.document_height >= 0.0);
    assert!(viewport.scroll_y >= 0.0);
}

#[wasm_bindgen_test]
fn section_bounds_follow_element_layout() {
    let element = mount("section", Some(Section::Services.id()), None);
    let document = dom::document().unwrap();

    let bounds = dom::section_bounds(&document, Section::Services).unwrap();
    assert_eq!(bounds.bottom - bounds.top, 300.0);

    element.remove();
    assert!(dom::section_bounds(&document, Section::Services).is_none());
}

#[wasm_bindgen_test]
fn reveal_targets_are_found_by_data_attribute() {
    let element = mount("footer", None, Some(RevealTarget::Footer.key()));
    let document = dom::document().unwrap();

    assert!(dom::reveal_bounds(&document, RevealTarget::Footer).is_some());
    element.remove();
    assert!(dom::reveal_bounds(&document, RevealTarget::Footer).is_none());
}

#[wasm_bindgen_test]
fn scrolling_to_missing_section_reports_it() {
    let err = dom::scroll_to_section(Section::Portfolio).unwrap_err();
    assert_eq!(err, DomError::MissingElement("#portfolio".to_string()));
}

#[wasm_bindgen_test]
fn scrolling_to_present_section_succeeds() {
    let element = mount("section", Some(Section::Team.id()), None);
    assert!(dom::scroll_to_section(Section::Team).is_ok());
    element.remove();
}

#[wasm_bindgen_test]
fn listener_runs_until_dropped() {
    let calls = Rc::new(Cell::new(0));
    let listener = {
        let calls = calls.clone();
        ScrollListener::attach(move || calls.set(calls.get() + 1)).unwrap()
    };

    fire("scroll");
    fire("resize");
    assert_eq!(calls.get(), 2);

    drop(listener);
    fire("scroll");
    fire("resize");
    assert_eq!(calls.get(), 2);
}

#[wasm_bindgen_test]
async fn page_renders_each_anchor_once() {
    let page = MountedPage::new().await;

    let document = dom::document().unwrap();
    for section in Section::ALL {
        let matches = document
            .query_selector_all(&format!("[id=\"{}\"]", section.id()))
            .unwrap();
        assert_eq!(matches.length(), 1, "{} must be unique", section);
    }
    assert!(exists(&active_link(Section::Home)));
    assert!(!exists(".nav-mobile"));

    page.teardown();
}

#[wasm_bindgen_test]
async fn burger_toggles_mobile_menu() {
    let page = MountedPage::new().await;

    click(".burger-menu");
    TimeoutFuture::new(20).await;
    assert!(exists(".nav-mobile"));

    click(".burger-menu");
    TimeoutFuture::new(20).await;
    assert!(!exists(".nav-mobile"));

    page.teardown();
}

#[wasm_bindgen_test]
async fn link_click_highlights_target_and_closes_menu() {
    let page = MountedPage::new().await;
    assert!(exists(&active_link(Section::Home)));

    click(".burger-menu");
    TimeoutFuture::new(20).await;
    click(".nav-mobile-link[href=\"#services\"]");
    TimeoutFuture::new(0).await;

    assert!(exists(&active_link(Section::Services)));
    assert!(!exists(&active_link(Section::Home)));
    assert!(!exists(".nav-mobile"));

    page.teardown();
}

#[wasm_bindgen_test]
async fn click_on_missing_target_still_highlights_and_closes() {
    let page = MountedPage::new().await;

    let portfolio = dom::document()
        .unwrap()
        .get_element_by_id(Section::Portfolio.id())
        .unwrap();
    portfolio.set_id("portfolio-detached");
    assert_eq!(
        dom::scroll_to_section(Section::Portfolio),
        Err(DomError::MissingElement("#portfolio".to_string()))
    );

    click(".burger-menu");
    TimeoutFuture::new(20).await;
    click(".nav-mobile-link[href=\"#portfolio\"]");
    TimeoutFuture::new(20).await;

    assert_eq!(page.root.scroll_top(), 0);
    assert!(exists(&active_link(Section::Portfolio)));
    assert!(!exists(".nav-mobile"));

    page.teardown();
}

#[wasm_bindgen_test]
async fn window_scroll_moves_highlight_to_section_under_nav() {
    let page = MountedPage::new().await;
    assert!(exists(&active_link(Section::Home)));

    page.place(Section::Portfolio, 50.0);
    fire("scroll");
    TimeoutFuture::new(20).await;
    assert!(exists(&active_link(Section::Portfolio)));

    page.place(Section::Services, 50.0);
    fire("scroll");
    TimeoutFuture::new(20).await;
    assert!(exists(&active_link(Section::Services)));

    page.teardown();
}
