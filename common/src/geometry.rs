use std::collections::BTreeMap;

use crate::section::Section;

// SectionGeometry
//
// offset_top is document-relative (used for the active section), viewport_top
// is the bounding rect top (used for reveal and scroll targets)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionGeometry {
    pub offset_top: f64,
    pub viewport_top: f64,
}

// GeometryProvider
//
// read-only view of the document and viewport.  a section whose element is
// not mounted yet reports None
pub trait GeometryProvider {
    fn scroll_offset(&self) -> f64;

    fn viewport_height(&self) -> f64;

    fn document_height(&self) -> f64;

    fn header_height(&self) -> f64;

    fn section(&self, section: Section) -> Option<SectionGeometry>;
}

// fire-and-forget animated scroll; completion is never observed
pub trait SmoothScroller {
    fn smooth_scroll_to(&self, offset: f64);
}

// ScrollMetrics
//
// one snapshot of everything on_scroll needs, so the recompute is a pure
// function of its input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    pub header_height: f64,
    pub sections: BTreeMap<Section, SectionGeometry>,
}

impl ScrollMetrics {
    pub fn capture(provider: &impl GeometryProvider) -> Self {
        let sections = Section::ALL
            .into_iter()
            .filter_map(|section| provider.section(section).map(|g| (section, g)))
            .collect();

        ScrollMetrics {
            scroll_offset: provider.scroll_offset(),
            viewport_height: provider.viewport_height(),
            document_height: provider.document_height(),
            header_height: provider.header_height(),
            sections,
        }
    }

    pub fn offset_top(&self, section: Section) -> Option<f64> {
        self.sections.get(&section).map(|g| g.offset_top)
    }

    pub fn viewport_top(&self, section: Section) -> Option<f64> {
        self.sections.get(&section).map(|g| g.viewport_top)
    }
}
