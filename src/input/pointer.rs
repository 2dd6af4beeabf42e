//! Pointer coordinate translation
//!
//! Pointer events arrive in page coordinates. The canvas position is the sum
//! of the offsets of every element up its containment chain; subtracting that
//! sum yields canvas-local coordinates.

use crate::model::Point;

/// Offsets of an element and its ancestors, each relative to its parent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetChain {
    offsets: Vec<Point>,
}

impl OffsetChain {
    /// An element sitting at the page origin
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain with a single element at an absolute offset
    pub fn absolute(offset: Point) -> Self {
        Self {
            offsets: vec![offset],
        }
    }

    /// Add the next ancestor's offset
    #[must_use]
    pub fn then(mut self, parent_offset: Point) -> Self {
        self.offsets.push(parent_offset);
        self
    }

    /// Total offset of the element from the page origin
    pub fn cumulative(&self) -> Point {
        self.offsets
            .iter()
            .fold(Point::default(), |acc, o| Point::new(acc.x + o.x, acc.y + o.y))
    }
}

impl FromIterator<Point> for OffsetChain {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            offsets: iter.into_iter().collect(),
        }
    }
}

/// A pointer event over the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in page coordinates
    pub page: Point,
    /// Containment chain of the canvas element
    pub target: OffsetChain,
}

impl PointerEvent {
    /// Create an event at `page` over an element with the given chain
    pub fn new(page: Point, target: OffsetChain) -> Self {
        Self { page, target }
    }

    /// Position relative to the canvas' top-left corner
    pub fn local(&self) -> Point {
        let offset = self.target.cumulative();
        Point::new(self.page.x - offset.x, self.page.y - offset.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_subtracts_cumulative_offset() {
        let chain = OffsetChain::absolute(Point::new(8.0, 50.0)).then(Point::new(2.0, 10.0));
        assert_eq!(chain.cumulative(), Point::new(10.0, 60.0));

        let event = PointerEvent::new(Point::new(110.0, 160.0), chain);
        assert_eq!(event.local(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let event = PointerEvent::new(Point::new(3.0, 4.0), OffsetChain::new());
        assert_eq!(event.local(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_collect_chain() {
        let chain: OffsetChain = [Point::new(1.0, 1.0), Point::new(2.0, 3.0)]
            .into_iter()
            .collect();
        assert_eq!(chain.cumulative(), Point::new(3.0, 4.0));
    }
}
