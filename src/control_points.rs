//! The user placed control points of the curve being edited.

use core::slice;

use tinyvec::ArrayVec;

use super::*;
use crate::bezier::scalar;

/// Maximum number of control points of the interactive canvas.
pub const DEFAULT_CAPACITY: usize = 256;

/// Edge length of the square marker drawn for, and hit tested against, every point.
pub const MARKER_SIZE: NativeFloat = 15.0;

/// Ordered, capacity bounded set of control points with at most one point being dragged.
///
/// Order is significant: consecutive points form the control polygon and their
/// sequence defines the curve. Duplicates are allowed.
/// `selected` is either None or a live index into the set.
#[derive(Debug, Clone)]
pub struct ControlPointSet<P, const N: usize = DEFAULT_CAPACITY>
where
    P: Point,
    [P; N]: tinyvec::Array<Item = P>,
{
    points: ArrayVec<[P; N]>,
    selected: Option<usize>,
    marker_size: P::Scalar,
}

impl<P, const N: usize> ControlPointSet<P, N>
where
    P: Point,
    [P; N]: tinyvec::Array<Item = P>,
{
    /// Create an empty set whose hit boxes have the default `MARKER_SIZE`.
    pub fn new() -> Self {
        Self::with_marker_size(scalar::<P::Scalar>(MARKER_SIZE))
    }

    pub fn with_marker_size(marker_size: P::Scalar) -> Self {
        ControlPointSet {
            points: ArrayVec::new(),
            selected: None,
            marker_size,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn marker_size(&self) -> P::Scalar {
        self.marker_size
    }

    /// The points in insertion order
    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn iter(&self) -> slice::Iter<'_, P> {
        self.points.iter()
    }

    pub fn get(&self, index: usize) -> Option<P> {
        self.points.get(index).copied()
    }

    /// Index of the point currently being dragged
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.selected.is_some()
    }

    /// Returns the lowest index whose marker box (a `marker_size` square centered on
    /// the point, edges inclusive) contains `position`.
    pub fn hit_test(&self, position: P) -> Option<usize> {
        let half = self.marker_size * scalar::<P::Scalar>(0.5);
        self.points.iter().position(|p| {
            let (min_x, min_y) = (p.x() - half, p.y() - half);
            let (max_x, max_y) = (min_x + self.marker_size, min_y + self.marker_size);
            min_x <= position.x()
                && position.x() <= max_x
                && min_y <= position.y()
                && position.y() <= max_y
        })
    }

    /// Append a point and return its index.
    /// At capacity this is a no-op and None is returned.
    pub fn add(&mut self, position: P) -> Option<usize> {
        if self.points.len() < N {
            self.points.push(position);
            log::debug!("added control point #{}", self.points.len() - 1);
            Some(self.points.len() - 1)
        } else {
            log::debug!("control point capacity of {} reached, ignoring add", N);
            None
        }
    }

    /// Start dragging the point at `index`, replacing any previous drag.
    /// An index that does not refer to a point ends the drag instead.
    pub fn begin_drag(&mut self, index: usize) {
        self.selected = (index < self.points.len()).then_some(index);
    }

    /// Move the dragged point to `position`. Without an active drag nothing changes.
    pub fn update_drag(&mut self, position: P) {
        if let Some(index) = self.selected {
            self.points[index] = position;
        }
    }

    pub fn end_drag(&mut self) {
        self.selected = None;
    }

    /// Remove and return the point at `index`. A drag on that point ends,
    /// a drag on a later point follows it to its new index.
    pub fn remove(&mut self, index: usize) -> Option<P> {
        if index >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        log::debug!("removed control point #{}", index);
        Some(removed)
    }

    /// Remove all points and end any drag
    pub fn clear(&mut self) {
        self.points.clear();
        self.selected = None;
    }
}

impl<P, const N: usize> Default for ControlPointSet<P, N>
where
    P: Point,
    [P; N]: tinyvec::Array<Item = P>,
{
    fn default() -> Self {
        Self::new()
    }
}
