//! Damage accumulation for incremental repaint.
//!
//! A stroke stamps many small, heavily overlapping groups of dabs. Overlapping
//! damage is merged as it arrives so a host re-uploads a handful of areas per
//! frame instead of one per dab group.

use crate::util::Rect;

/// Damaged areas of the surface since the last drain.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    whole_surface: bool,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks everything damaged (clear, resize). Pending rects become redundant.
    pub fn mark_full(&mut self) {
        self.whole_surface = true;
        self.regions.clear();
    }

    /// Records `rect`, merging it with every pending rect it overlaps.
    pub fn mark_rect(&mut self, rect: Rect) {
        if self.whole_surface || !rect.is_valid() {
            return;
        }

        let mut merged = rect;
        // A grown rect can reach regions it missed before, so repeat until stable.
        loop {
            let before = self.regions.len();
            self.regions.retain(|pending| {
                if pending.intersects(&merged) {
                    merged = merged.union(*pending);
                    false
                } else {
                    true
                }
            });
            if self.regions.len() == before {
                break;
            }
        }
        self.regions.push(merged);
    }

    pub fn mark_optional_rect(&mut self, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.mark_rect(rect);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.whole_surface || !self.regions.is_empty()
    }

    /// Returns and forgets the pending damage.
    ///
    /// Full damage comes back as one rect covering a `width` x `height`
    /// surface (nothing for a zero-size one).
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if std::mem::take(&mut self.whole_surface) {
            self.regions.clear();
            return Rect::new(0, 0, width, height).into_iter().collect();
        }
        std::mem::take(&mut self.regions)
    }
}
