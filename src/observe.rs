//! Section visibility tracking.
//!
//! [`ViewportObserver`] mirrors an intersection observer: targets are registered by id,
//! and a record is produced whenever a target crosses the visibility threshold (plus one
//! initial record per target). [`SectionWatch`] owns an observer for the lifetime of a
//! mounted page and releases every target when torn down or dropped.

use crate::content::SectionId;
use crate::foundation::core::Rect;
use crate::layout::PageLayout;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct IntersectionEntry {
    pub section: SectionId,
    /// Visible fraction of the element's area.
    pub ratio: f64,
    /// `ratio >= threshold`.
    pub is_intersecting: bool,
}

#[derive(Clone, Debug, PartialEq)]
struct Target {
    section: SectionId,
    rect: Rect,
    last: Option<bool>,
}

/// Visible fraction of `element` inside `visible`. Empty elements report 0.
pub fn intersection_ratio(element: Rect, visible: Rect) -> f64 {
    let area = element.area();
    if area <= 0.0 {
        return 0.0;
    }
    (element.intersect(visible).area() / area).clamp(0.0, 1.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewportObserver {
    threshold: f64,
    targets: Vec<Target>,
}

impl ViewportObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            targets: Vec::new(),
        }
    }

    /// Start observing `section`. Returns `false` (and attaches nothing) when the element
    /// is not in the document or is already observed.
    pub fn observe(&mut self, section: SectionId, layout: &PageLayout) -> bool {
        if self.targets.iter().any(|t| t.section == section) {
            return false;
        }
        let Some(rect) = layout.section(section) else {
            return false;
        };
        self.targets.push(Target {
            section,
            rect,
            last: None,
        });
        true
    }

    pub fn unobserve(&mut self, section: SectionId) {
        self.targets.retain(|t| t.section != section);
    }

    /// Release every target.
    pub fn disconnect(&mut self) -> usize {
        let n = self.targets.len();
        self.targets.clear();
        n
    }

    pub fn observed(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.targets.iter().map(|t| t.section)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Pick up new element geometry. Targets whose element left the document are dropped.
    pub fn relayout(&mut self, layout: &PageLayout) {
        self.targets.retain_mut(|t| match layout.section(t.section) {
            Some(rect) => {
                t.rect = rect;
                true
            }
            None => false,
        });
    }

    /// Records for targets whose threshold state changed since the last call, in observe order.
    pub fn take_records(&mut self, visible: Rect) -> Vec<IntersectionEntry> {
        let threshold = self.threshold;
        self.targets
            .iter_mut()
            .filter_map(|t| {
                let ratio = intersection_ratio(t.rect, visible);
                let is_intersecting = ratio > 0.0 && ratio >= threshold;
                if t.last == Some(is_intersecting) {
                    return None;
                }
                t.last = Some(is_intersecting);
                Some(IntersectionEntry {
                    section: t.section,
                    ratio,
                    is_intersecting,
                })
            })
            .collect()
    }
}

/// Apply records to the current active section: the last intersecting record wins.
pub fn resolve_active(current: SectionId, entries: &[IntersectionEntry]) -> SectionId {
    entries
        .iter()
        .filter(|e| e.is_intersecting)
        .map(|e| e.section)
        .last()
        .unwrap_or(current)
}

/// Mounted observation of the page sections.
#[derive(Debug)]
pub struct SectionWatch {
    observer: ViewportObserver,
}

impl SectionWatch {
    /// Observe `ids` in order. Sections missing from `layout` are skipped.
    pub fn mount(ids: &[SectionId], threshold: f64, layout: &PageLayout) -> Self {
        let mut observer = ViewportObserver::new(threshold);
        for &id in ids {
            if !observer.observe(id, layout) {
                tracing::debug!(section = %id, "section not observed");
            }
        }
        tracing::debug!(targets = observer.len(), "section watch mounted");
        Self { observer }
    }

    pub fn observer(&self) -> &ViewportObserver {
        &self.observer
    }

    pub fn relayout(&mut self, layout: &PageLayout) {
        self.observer.relayout(layout);
    }

    pub fn poll(&mut self, visible: Rect) -> Vec<IntersectionEntry> {
        self.observer.take_records(visible)
    }

    /// Release all targets. Returns how many were released.
    pub fn teardown(mut self) -> usize {
        self.release()
    }

    fn release(&mut self) -> usize {
        let n = self.observer.disconnect();
        if n > 0 {
            tracing::debug!(released = n, "section watch torn down");
        }
        n
    }
}

impl Drop for SectionWatch {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "../tests/unit/observe.rs"]
mod tests;
