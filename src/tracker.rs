//! Derives the highlighted nav link and the revealed blocks from layout.
//!
//! Everything here is a pure function of a [`Viewport`] snapshot and a box
//! lookup, so it runs the same against the live DOM and in unit tests.

use crate::config::{BOTTOM_TOLERANCE, NAV_OFFSET};
use crate::sections::{RevealSet, RevealTarget, Section};

/// Scroll metrics read from the window on each event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub inner_height: f64,
    pub document_height: f64,
}

impl Viewport {
    pub fn at_bottom(&self) -> bool {
        self.inner_height + self.scroll_y >= self.document_height - BOTTOM_TOLERANCE
    }
}

/// Vertical extent of an element relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBox {
    pub fn spans(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }

    pub fn in_view(&self, inner_height: f64) -> bool {
        self.top < inner_height && self.bottom > 0.0
    }
}

/// Section that should be highlighted, or `None` to keep the current one.
///
/// Near the document bottom `contact` wins even if an earlier section still
/// crosses the nav line. Sections whose element is missing are skipped.
pub fn active_section<F>(viewport: &Viewport, mut bounds: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBox>,
{
    if viewport.at_bottom() {
        return Some(Section::Contact);
    }

    Section::ALL
        .into_iter()
        .find(|&section| bounds(section).is_some_and(|b| b.spans(NAV_OFFSET)))
}

/// Targets currently intersecting the viewport.
pub fn visible_targets<F>(viewport: &Viewport, mut bounds: F) -> RevealSet
where
    F: FnMut(RevealTarget) -> Option<SectionBox>,
{
    RevealTarget::ALL
        .into_iter()
        .filter(|&target| bounds(target).is_some_and(|b| b.in_view(viewport.inner_height)))
        .collect()
}
