// Copyright 2026 the Jumpcue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jumpcue Crowding: filter out candidate regions positioned too closely
//! together.
//!
//! Detected UI elements frequently overlap: a link inside a button, two
//! buttons flush against each other, a container reported alongside its
//! children. Labelling all of them wastes addresses and draws unreadable,
//! stacked labels. [`reduce_crowding`] keeps exactly one representative per
//! visually crowded cluster:
//!
//! - duplicate frames collapse to the first occurrence;
//! - when one frame fully contains another, the smaller (more specific)
//!   region survives;
//! - when frames overlap beyond a threshold, or sit so close that a padded
//!   frame would touch, the larger (more salient) region survives.
//!
//! The padding parameters absorb near-misses caused by the rendered label's
//! footprint: two regions that don't overlap on screen can still produce
//! overlapping labels.
//!
//! # Example
//!
//! ```rust
//! use jumpcue_crowding::{CrowdingParams, Positioned, reduce_crowding};
//! use kurbo::Rect;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Region(Rect);
//!
//! impl Positioned for Region {
//!     fn frame(&self) -> Rect {
//!         self.0
//!     }
//! }
//!
//! let button = Region(Rect::new(0.0, 0.0, 100.0, 20.0));
//! let link_inside = Region(Rect::new(10.0, 5.0, 40.0, 15.0));
//!
//! // The nested link is the more specific target; the button is dropped.
//! let kept = reduce_crowding(
//!     vec![button, link_inside.clone()],
//!     &CrowdingParams::default(),
//! );
//! assert_eq!(kept, vec![link_inside]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

/// A candidate that occupies an axis-aligned rectangular region.
pub trait Positioned {
    /// The candidate's frame, in the shared candidate coordinate space.
    fn frame(&self) -> Rect;
}

impl Positioned for Rect {
    fn frame(&self) -> Rect {
        *self
    }
}

/// Tuning parameters for [`reduce_crowding`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrowdingParams {
    /// How much two intersecting frames need to overlap, as a fraction of
    /// their average area in `[0, 1]`, before the smaller one is removed.
    pub intersection_threshold: f64,
    /// Horizontal padding applied to a candidate's frame when testing
    /// whether non-intersecting frames are still too close.
    pub padding_x: f64,
    /// Vertical padding applied to a candidate's frame when testing whether
    /// non-intersecting frames are still too close.
    pub padding_y: f64,
}

impl Default for CrowdingParams {
    fn default() -> Self {
        Self {
            intersection_threshold: 0.1,
            padding_x: 0.0,
            padding_y: 0.0,
        }
    }
}

/// The area of a rectangle, independent of orientation.
pub fn rect_area(rect: Rect) -> f64 {
    rect.width().abs() * rect.height().abs()
}

/// Whether two rectangles intersect with positive area.
///
/// Rectangles that merely share an edge or a corner do not intersect, and a
/// zero-area rectangle intersects nothing.
pub fn rects_intersect(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Edge-inclusive containment.
fn contains(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

fn intersection_area(a: Rect, b: Rect) -> f64 {
    let width = a.x1.min(b.x1) - a.x0.max(b.x0);
    let height = a.y1.min(b.y1) - a.y0.max(b.y0);
    if width <= 0.0 || height <= 0.0 {
        0.0
    } else {
        width * height
    }
}

/// The percentage overlap between two rectangles.
///
/// Returns 0 when the rectangles do not intersect, 1 when either rectangle
/// fully contains the other, and otherwise the intersection area as a
/// fraction of the average of the two areas.
pub fn percentage_overlap(a: Rect, b: Rect) -> f64 {
    if !rects_intersect(a, b) {
        return 0.0;
    }
    if contains(a, b) || contains(b, a) {
        return 1.0;
    }
    intersection_area(a, b) / ((rect_area(a) + rect_area(b)) / 2.0)
}

/// Reduce crowding by filtering out candidates positioned too closely
/// together.
///
/// A single left-to-right pass over `candidates`, comparing each candidate
/// against every already-accepted entry in acceptance order:
///
/// - equal frames: the candidate is dropped;
/// - one frame fully contains the other: the smaller area survives;
/// - the frames overlap at least [`CrowdingParams::intersection_threshold`],
///   or don't intersect but would once the candidate is inflated by the
///   paddings: the larger area survives.
///
/// Surviving an individual comparison is not final: a candidate that
/// supersedes one accepted entry can still be dropped by a later one, and a
/// superseded entry keeps participating in comparisons until the pass ends.
/// The result preserves input order and never grows; with no conflicts the
/// input comes back unchanged.
pub fn reduce_crowding<C: Positioned>(candidates: Vec<C>, params: &CrowdingParams) -> Vec<C> {
    struct Slot<C> {
        item: C,
        superseded: bool,
    }

    let mut accumulator: Vec<Slot<C>> = Vec::with_capacity(candidates.len());

    'candidates: for candidate in candidates {
        let frame = candidate.frame();
        let padded = frame.inflate(params.padding_x, params.padding_y);

        for slot in &mut accumulator {
            let accumulated = slot.item.frame();

            if frame == accumulated {
                continue 'candidates;
            }

            let overlap = percentage_overlap(frame, accumulated);

            if overlap == 1.0 {
                // Fully nested: keep the smaller region. It is the more
                // specific target (typically a child of the other).
                if rect_area(frame) >= rect_area(accumulated) {
                    continue 'candidates;
                }
                slot.superseded = true;
                continue;
            }

            let intersects = rects_intersect(frame, accumulated);
            if (intersects && overlap >= params.intersection_threshold)
                || (!intersects && rects_intersect(padded, accumulated))
            {
                // Crowded: keep the larger, more salient region.
                if rect_area(frame) < rect_area(accumulated) {
                    continue 'candidates;
                }
                slot.superseded = true;
            }
        }

        accumulator.push(Slot {
            item: candidate,
            superseded: false,
        });
    }

    accumulator
        .into_iter()
        .filter(|slot| !slot.superseded)
        .map(|slot| slot.item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Copy, Clone, Debug, PartialEq)]
    struct Item {
        frame: Rect,
    }

    impl Positioned for Item {
        fn frame(&self) -> Rect {
            self.frame
        }
    }

    fn item(x: f64, y: f64, width: f64, height: f64) -> Item {
        Item {
            frame: Rect::new(x, y, x + width, y + height),
        }
    }

    /// The element pipeline's parameters: labels stack vertically, so only
    /// vertical padding is applied.
    fn reduce(items: Vec<Item>) -> Vec<Item> {
        let params = CrowdingParams {
            intersection_threshold: 0.1,
            padding_x: 0.0,
            padding_y: 10.0,
        };
        reduce_crowding(items, &params)
    }

    #[test]
    fn rect_area_is_orientation_independent() {
        assert_eq!(rect_area(Rect::new(0.0, 0.0, 0.0, 0.0)), 0.0);
        assert_eq!(rect_area(Rect::new(0.0, 0.0, 0.0, 1.0)), 0.0);
        assert_eq!(rect_area(Rect::new(0.0, 0.0, 2.0, 4.0)), 8.0);
        assert_eq!(rect_area(Rect::new(0.0, 0.0, 4.0, 2.0)), 8.0);
        assert_eq!(rect_area(Rect::new(0.0, 0.0, -4.0, 2.0)), 8.0);
        assert_eq!(rect_area(Rect::new(0.0, 0.0, 4.0, -2.0)), 8.0);
        assert_eq!(rect_area(Rect::new(0.0, 0.0, 16.0, 4.0)), 64.0);
    }

    #[test]
    fn percentage_overlap_disjoint_rects() {
        let a = Rect::new(1.0, 1.0, 5.0, 5.0);
        let b = Rect::new(9.0, 9.0, 13.0, 13.0);
        assert_eq!(percentage_overlap(a, b), 0.0);

        // Zero-area rectangles intersect nothing.
        let c = Rect::new(1.0, 1.0, 1.0, 1.0);
        let d = Rect::new(2.0, 2.0, 2.0, 2.0);
        assert_eq!(percentage_overlap(c, d), 0.0);

        // Sharing an edge is not an intersection.
        let e = Rect::new(0.0, 0.0, 4.0, 4.0);
        let f = Rect::new(4.0, 0.0, 8.0, 4.0);
        assert_eq!(percentage_overlap(e, f), 0.0);
    }

    #[test]
    fn percentage_overlap_containment() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert_eq!(percentage_overlap(a, a), 1.0);

        let inner = Rect::new(1.0, 1.0, 3.0, 3.0);
        assert_eq!(percentage_overlap(a, inner), 1.0);
        assert_eq!(percentage_overlap(inner, a), 1.0);

        // Containment is edge-inclusive.
        let corner = Rect::new(2.0, 2.0, 4.0, 4.0);
        assert_eq!(percentage_overlap(a, corner), 1.0);
    }

    #[test]
    fn percentage_overlap_partial() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);

        assert_eq!(percentage_overlap(a, Rect::new(2.0, 2.0, 6.0, 6.0)), 0.25);
        assert_eq!(percentage_overlap(a, Rect::new(3.0, 3.0, 7.0, 7.0)), 0.0625);
        assert_eq!(percentage_overlap(a, Rect::new(1.0, 1.0, 5.0, 5.0)), 0.5625);

        let i = Rect::new(-1.0, 0.0, 9.0, 10.0);
        let j = Rect::new(1.0, 0.0, 11.0, 10.0);
        assert_eq!(percentage_overlap(i, j), 0.8);

        // Non-dyadic coordinates land within float tolerance.
        let g = Rect::new(1.0, 1.0, 5.0, 5.0);
        let h = Rect::new(1.2, 1.2, 5.2, 5.2);
        assert!((percentage_overlap(g, h) - 0.9025).abs() < 1e-12);
    }

    #[test]
    fn no_items_removed_when_frames_are_not_close_enough() {
        assert_eq!(reduce(vec![]), vec![]);

        let lone = item(0.0, 0.0, 0.0, 0.0);
        assert_eq!(reduce(vec![lone]), vec![lone]);

        let a = item(0.0, 0.0, 10.0, 10.0);
        let b = item(20.0, 20.0, 10.0, 10.0);
        let c = item(40.0, 40.0, 10.0, 10.0);
        assert_eq!(reduce(vec![a, b]), vec![a, b]);
        assert_eq!(reduce(vec![a, b, c]), vec![a, b, c]);
    }

    #[test]
    fn items_with_duplicate_frames_removed() {
        let it = item(2.0, 4.0, 10.0, 10.0);

        assert_eq!(reduce(vec![it; 5]), vec![it]);
        assert_eq!(reduce(vec![it; 2]), vec![it]);
        assert_eq!(reduce(vec![it]), vec![it]);

        let other = item(0.0, 0.0, 0.0, 0.0);
        assert_eq!(reduce(vec![it, other, it, it, it]), vec![it, other]);
        assert_eq!(reduce(vec![it, other, it]), vec![it, other]);
        assert_eq!(reduce(vec![other, it, it, it]), vec![other, it]);
    }

    #[test]
    fn items_kept_when_frames_overlap_less_than_threshold() {
        let a = item(0.0, 0.0, 10.0, 10.0);
        let b = item(9.0, 9.0, 10.0, 10.0);

        let overlap = percentage_overlap(a.frame, b.frame);
        assert!(overlap > 0.0);
        assert!(overlap < 0.1);

        assert_eq!(reduce(vec![a, b]), vec![a, b]);
    }

    #[test]
    fn larger_items_removed_when_frames_overlap_completely() {
        let bigger = item(0.0, 0.0, 11.0, 11.0);
        let smaller = item(0.0, 0.0, 10.0, 10.0);

        assert_eq!(percentage_overlap(bigger.frame, smaller.frame), 1.0);

        assert_eq!(reduce(vec![bigger, smaller]), vec![smaller]);
        assert_eq!(reduce(vec![smaller, bigger]), vec![smaller]);
    }

    #[test]
    fn smaller_items_removed_when_frames_overlap_at_least_threshold() {
        let bigger = item(0.0, 0.0, 11.0, 11.0);
        let smaller = item(6.5, 6.5, 10.0, 10.0);

        let overlap = percentage_overlap(bigger.frame, smaller.frame);
        assert!(overlap >= 0.1);

        assert_eq!(reduce(vec![bigger, smaller]), vec![bigger]);
        assert_eq!(reduce(vec![smaller, bigger]), vec![bigger]);
    }

    #[test]
    fn smaller_items_removed_when_padded_frames_overlap() {
        let smaller = item(0.0, 0.0, 10.0, 10.0);
        let bigger = item(0.0, 11.0, 10.0, 10.5);

        assert!(!rects_intersect(smaller.frame, bigger.frame));

        assert_eq!(reduce(vec![smaller, bigger]), vec![bigger]);
        assert_eq!(reduce(vec![bigger, smaller]), vec![bigger]);
    }

    #[test]
    fn later_equal_area_item_supersedes_earlier_on_padded_overlap() {
        // Equal areas break the "keep the larger" rule toward the candidate:
        // only a strictly smaller candidate is discarded, so each stacked
        // cell supersedes the one before it and the chain collapses to the
        // last survivor.
        let a = item(0.0, 0.0, 10.0, 10.0);
        let b = item(0.0, 10.0, 10.0, 10.0);
        let c = item(0.0, 20.0, 10.0, 10.0);

        assert_eq!(reduce(vec![a, b]), vec![b]);
        assert_eq!(reduce(vec![a, b, c]), vec![c]);
    }

    #[test]
    fn complex_crowding_scenarios() {
        let a = item(0.0, 0.0, 1.0, 1.0);
        let b = a;
        let c = item(-1.0, 4.0, 8.0, 8.0);
        let d = c;
        let e = item(-9.0, 9.0, 2.0, 2.0);
        let f = e;
        let g = item(-9.0, 9.0, 4.0, 4.0);
        let h = g;

        assert_eq!(reduce(vec![a]), vec![a]);

        // `c` sits close enough (with vertical padding) to supersede `a`.
        assert_eq!(reduce(vec![a, c]), vec![c]);
        assert_eq!(reduce(vec![a, c, e]), vec![c, e]);

        // Duplicates collapse, then the same conflicts resolve.
        assert_eq!(reduce(vec![a, b, c, d, e, f]), vec![c, e]);

        // `g` and `h` fully contain `e`, so the smaller `e` wins.
        assert_eq!(reduce(vec![a, b, c, d, e, f, g, h]), vec![c, e]);

        // Repeated frames across more than two candidates collapse the same
        // way regardless of arrival order.
        assert_eq!(
            reduce(vec![a, b, a, b, c, d, c, d, e, f, e, f, g, h, g, h]),
            vec![c, e]
        );
        assert_eq!(
            reduce(vec![a, b, b, a, c, d, d, c, e, f, f, e, g, h, h, g]),
            vec![c, e]
        );
    }

    #[test]
    fn candidate_discarded_by_already_superseded_entry() {
        // A superseded entry keeps participating: a duplicate of it arriving
        // later is still dropped, it does not resurrect the frame.
        let small = item(0.0, 0.0, 10.0, 10.0);
        let big = item(0.0, 0.0, 30.0, 30.0);

        // `small` supersedes nothing; `big` contains `small`, so `small`
        // survives and `big` is dropped; the second `big` matches the
        // superseded frame and is dropped by the equal-frame rule.
        assert_eq!(reduce(vec![big, small, big]), vec![small]);
    }
}
