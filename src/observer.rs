//! Scroll and pointer derived state for the page: which nav entry is active
//! and where the background glows sit.

use crate::sections::Section;

/// Distance from the viewport top, in px, that a section must straddle to be active.
pub const PROBE_LINE: f64 = 100.0;

/// Viewport-relative vertical extent of a section, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn contains_probe(&self) -> bool {
        self.top <= PROBE_LINE && self.bottom >= PROBE_LINE
    }
}

/// First section (in iteration order) straddling the probe line.
///
/// `None` means no measured section covers it, e.g. while the page is
/// overscrolled; callers keep whatever was active before.
pub fn active_section<I>(bounds: I) -> Option<Section>
where
    I: IntoIterator<Item = (Section, SectionBounds)>,
{
    bounds
        .into_iter()
        .find(|(_, b)| b.contains_probe())
        .map(|(section, _)| section)
}

/// Pointer position relative to the viewport, not the document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Anything carrying viewport (`clientX`/`clientY`) coordinates, e.g. a `MouseEvent`.
pub trait ClientPosition {
    fn client_x(&self) -> i32;
    fn client_y(&self) -> i32;
}

impl Pointer {
    pub fn from_event<E: ClientPosition>(event: &E) -> Self {
        Self {
            x: f64::from(event.client_x()),
            y: f64::from(event.client_y()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlowPosition {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl GlowPosition {
    const PRIMARY_DAMPING: f64 = 10.0;
    const SECONDARY_DAMPING: f64 = 15.0;

    pub fn from_pointer(pointer: Pointer) -> Self {
        Self {
            top: pointer.y / Self::PRIMARY_DAMPING,
            left: pointer.x / Self::PRIMARY_DAMPING,
            bottom: pointer.y / Self::SECONDARY_DAMPING,
            right: pointer.x / Self::SECONDARY_DAMPING,
        }
    }

    pub fn primary_style(&self) -> String {
        format!("top: {}px; left: {}px;", self.top, self.left)
    }

    pub fn secondary_style(&self) -> String {
        format!("bottom: {}px; right: {}px;", self.bottom, self.right)
    }
}
