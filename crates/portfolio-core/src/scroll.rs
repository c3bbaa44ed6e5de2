//! Scroll-position math behind the navbar, section highlighting, reveal
//! animations and the hero parallax.

use crate::constants::{
    is_desktop_width, NAVBAR_SCROLLED_AFTER, PARALLAX_CONTENT_RATE, PARALLAX_VISUAL_RATE,
    REVEAL_VISIBLE_MARGIN, SECTION_ACTIVATION_OFFSET,
};

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER
}

/// Document offset to scroll to so `target` lands just below a fixed navbar.
#[inline]
pub fn anchor_scroll_target(target_offset_top: f64, nav_height: f64) -> f64 {
    target_offset_top - nav_height
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub offset_top: f64,
    pub height: f64,
}

/// Id of the section the reader is in. Sections overlap near their edges;
/// the last matching one in document order wins.
pub fn active_section<'a>(scroll_y: f64, sections: &[SectionBounds<'a>]) -> Option<&'a str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.offset_top - SECTION_ACTIVATION_OFFSET;
            scroll_y > top && scroll_y <= top + s.height
        })
        .last()
        .map(|s| s.id)
}

/// An element reveals once its top edge is this far inside the viewport.
#[inline]
pub fn should_reveal(element_top: f64, window_height: f64) -> bool {
    element_top < window_height - REVEAL_VISIBLE_MARGIN
}

/// Vertical offsets for hero content and hero visual; desktop only.
pub fn parallax_offsets(scroll_y: f64, viewport_width: f64) -> Option<(f64, f64)> {
    is_desktop_width(viewport_width)
        .then(|| (scroll_y * PARALLAX_CONTENT_RATE, scroll_y * PARALLAX_VISUAL_RATE))
}
