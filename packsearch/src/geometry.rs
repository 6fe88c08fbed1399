#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Aabb {
    pub pos: (u32, u32),
    pub size: (u32, u32),
}

impl Aabb {
    fn min(&self) -> (u64, u64) {
        (u64::from(self.pos.0), u64::from(self.pos.1))
    }

    /// The far corner. Computed in 64 bits, since positions reported by
    /// third-party engines can sit anywhere in the `u32` range.
    pub fn max(&self) -> (u64, u64) {
        (
            u64::from(self.pos.0) + u64::from(self.size.0),
            u64::from(self.pos.1) + u64::from(self.size.1),
        )
    }

    /// Whether the two boxes share any area. Boxes that only touch along an
    /// edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (self_min, other_min) = (self.min(), other.min());
        let (self_max, other_max) = (self.max(), other.max());

        let x_overlap = self_min.0 < other_max.0 && other_min.0 < self_max.0;
        let y_overlap = self_min.1 < other_max.1 && other_min.1 < self_max.1;

        x_overlap && y_overlap
    }

    /// Whether this box lies entirely inside a container of the given size
    /// anchored at the origin.
    pub fn fits_within(&self, container: (u32, u32)) -> bool {
        let max = self.max();
        max.0 <= u64::from(container.0) && max.1 <= u64::from(container.1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn aabb(pos: (u32, u32), size: (u32, u32)) -> Aabb {
        Aabb { pos, size }
    }

    #[test]
    fn overlapping() {
        let a = aabb((0, 0), (10, 10));
        let b = aabb((5, 5), (10, 10));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn contained() {
        let outer = aabb((0, 0), (100, 100));
        let inner = aabb((40, 40), (2, 2));

        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn touching_edges() {
        let a = aabb((0, 0), (10, 10));

        assert!(!a.intersects(&aabb((10, 0), (10, 10))));
        assert!(!a.intersects(&aabb((0, 10), (10, 10))));
    }

    #[test]
    fn disjoint() {
        let a = aabb((0, 0), (4, 4));
        let b = aabb((50, 2), (4, 4));

        assert!(!a.intersects(&b));
    }

    #[test]
    fn near_u32_limit() {
        let edge = aabb((u32::MAX - 5, 0), (10, 10));

        assert_eq!(edge.max(), (u64::from(u32::MAX) + 5, 10));
        assert!(edge.intersects(&aabb((u32::MAX - 1, 5), (1, 1))));
        assert!(!edge.fits_within((u32::MAX, u32::MAX)));
    }

    #[test]
    fn fits() {
        assert!(aabb((0, 0), (128, 128)).fits_within((128, 128)));
        assert!(!aabb((64, 0), (65, 1)).fits_within((128, 128)));
    }
}
