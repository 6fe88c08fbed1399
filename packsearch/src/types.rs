use thiserror::Error;

use crate::{geometry::Aabb, id::Id};

/// The largest width or height a [`Rectangle`] may have.
///
/// Every sort key is computed in 32 bits. The largest key any heuristic can
/// produce is bounded by `MAX_SIDE * MAX_SIDE`, which still fits in a `u32`.
pub const MAX_SIDE: u32 = u16::MAX as u32;

/// An input to the packing search.
///
/// `Rectangle` is just a 2D size and an [`Id`]. It's expected that consumers
/// will assign meaning to the IDs and then use them to associate placements
/// back to the application's own objects.
///
/// Rectangles are never modified by the search. Sort keys computed for a
/// particular heuristic are carried next to the rectangle in a
/// [`RankedEntry`](struct.RankedEntry.html) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub(crate) id: Id,
    pub(crate) size: (u32, u32),
}

impl Rectangle {
    /// Creates a rectangle with a freshly generated ID.
    pub fn new(size: (u32, u32)) -> Result<Self, RectangleError> {
        Self::with_id(Id::generate(), size)
    }

    /// Creates a rectangle with an ID chosen by the caller.
    pub fn with_id<I: Into<Id>>(id: I, size: (u32, u32)) -> Result<Self, RectangleError> {
        let (width, height) = size;

        if width == 0 || height == 0 {
            return Err(RectangleError::ZeroSized { width, height });
        }

        if width > MAX_SIDE || height > MAX_SIDE {
            return Err(RectangleError::TooLarge { width, height });
        }

        Ok(Self { id: id.into(), size })
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.1
    }

    #[inline]
    pub fn area(&self) -> u32 {
        self.size.0 * self.size.1
    }

    #[inline]
    pub fn perimeter(&self) -> u32 {
        2 * (self.size.0 + self.size.1)
    }

    #[inline]
    pub fn bigger_side(&self) -> u32 {
        self.size.0.max(self.size.1)
    }

    #[inline]
    pub fn smaller_side(&self) -> u32 {
        self.size.0.min(self.size.1)
    }

    /// Area scaled by how elongated the rectangle is.
    ///
    /// Computed as `(bigger_side / smaller_side) * area` with integer division,
    /// which is at most `bigger_side * bigger_side`. A square scores its plain
    /// area; a 4:1 strip scores four times its area.
    ///
    /// The ratio is truncated, so every rectangle less than twice as long as
    /// it is wide scores exactly its area: 12x10 and 15x8 tie with a square of
    /// area 120.
    #[inline]
    pub fn pathological_multiplier(&self) -> u32 {
        (self.bigger_side() / self.smaller_side()) * self.area()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RectangleError {
    #[error("Rectangle must have a non-zero size, got {width}x{height}")]
    ZeroSized { width: u32, height: u32 },

    #[error("Rectangle sides must be at most {max} pixels, got {width}x{height}", max = MAX_SIDE)]
    TooLarge { width: u32, height: u32 },
}

/// A rectangle that was placed by a placement engine.
///
/// `PlacedRect` values correspond 1:1 to the `Rectangle` values handed to the
/// engine. They expose the ID from the input, as well as position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedRect {
    pub(crate) id: Id,
    pub(crate) rect: Aabb,
}

impl PlacedRect {
    #[inline]
    pub fn new(id: Id, position: (u32, u32), size: (u32, u32)) -> Self {
        Self {
            id,
            rect: Aabb {
                pos: position,
                size,
            },
        }
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.rect.size
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn max(&self) -> (u64, u64) {
        self.rect.max()
    }
}

/// The output of a single placement engine run: every input rectangle with a
/// position, plus the size of the bin the engine packed them into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub(crate) bin_size: (u32, u32),
    pub(crate) items: Vec<PlacedRect>,
}

impl Placement {
    pub fn new(bin_size: (u32, u32), items: Vec<PlacedRect>) -> Self {
        Self { bin_size, items }
    }

    /// The size of the container the engine worked in. Usually larger than
    /// `bounding_size`.
    #[inline]
    pub fn bin_size(&self) -> (u32, u32) {
        self.bin_size
    }

    #[inline]
    pub fn items(&self) -> &[PlacedRect] {
        &self.items
    }

    /// Size of the smallest rectangle anchored at the origin that encloses
    /// every placed item.
    pub fn bounding_size(&self) -> (u64, u64) {
        self.items.iter().fold((0, 0), |(width, height), item| {
            let max = item.max();
            (width.max(max.0), height.max(max.1))
        })
    }

    /// The value the search minimizes.
    pub fn bounding_area(&self) -> u64 {
        let (width, height) = self.bounding_size();
        width.saturating_mul(height)
    }

    pub fn position_of(&self, id: Id) -> Option<(u32, u32)> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(PlacedRect::position)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn derived_metrics() {
        let rect = Rectangle::new((20, 5)).unwrap();

        assert_eq!(rect.area(), 100);
        assert_eq!(rect.perimeter(), 50);
        assert_eq!(rect.bigger_side(), 20);
        assert_eq!(rect.smaller_side(), 5);
        assert_eq!(rect.pathological_multiplier(), 400);
    }

    #[test]
    fn pathological_multiplier_of_square_is_area() {
        let rect = Rectangle::new((32, 32)).unwrap();

        assert_eq!(rect.pathological_multiplier(), rect.area());
    }

    #[test]
    fn largest_rectangle_does_not_overflow() {
        let square = Rectangle::new((MAX_SIDE, MAX_SIDE)).unwrap();
        assert_eq!(square.area(), MAX_SIDE * MAX_SIDE);
        assert_eq!(square.pathological_multiplier(), MAX_SIDE * MAX_SIDE);

        let strip = Rectangle::new((MAX_SIDE, 1)).unwrap();
        assert_eq!(strip.pathological_multiplier(), MAX_SIDE * MAX_SIDE);
        assert_eq!(strip.perimeter(), 2 * (MAX_SIDE + 1));
    }

    #[test]
    fn rejects_zero_size() {
        assert_eq!(
            Rectangle::new((0, 10)),
            Err(RectangleError::ZeroSized {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn rejects_oversized() {
        assert_eq!(
            Rectangle::new((MAX_SIDE + 1, 10)),
            Err(RectangleError::TooLarge {
                width: MAX_SIDE + 1,
                height: 10
            })
        );
    }

    #[test]
    fn placement_bounds() {
        let placement = Placement::new(
            (128, 128),
            vec![
                PlacedRect::new(Id::from(1), (0, 0), (64, 32)),
                PlacedRect::new(Id::from(2), (64, 0), (10, 50)),
            ],
        );

        assert_eq!(placement.bounding_size(), (74, 50));
        assert_eq!(placement.bounding_area(), 74 * 50);
        assert_eq!(placement.position_of(Id::from(2)), Some((64, 0)));
        assert_eq!(placement.position_of(Id::from(3)), None);
    }

    #[test]
    fn placement_bounds_past_u32() {
        let placement = Placement::new(
            (u32::MAX, u32::MAX),
            vec![PlacedRect::new(Id::from(1), (u32::MAX - 5, 0), (10, 10))],
        );

        let width = u64::from(u32::MAX) + 5;
        assert_eq!(placement.bounding_size(), (width, 10));
        assert_eq!(placement.bounding_area(), width * 10);
    }

    #[test]
    fn empty_placement() {
        let placement = Placement::new((128, 128), Vec::new());

        assert_eq!(placement.bounding_size(), (0, 0));
        assert_eq!(placement.bounding_area(), 0);
    }
}
