use crate::{heuristic::Heuristic, types::Rectangle};

/// Computes the key a rectangle is ranked by under a given heuristic.
pub type MetricFn = fn(&Rectangle) -> u32;

impl Heuristic {
    /// The metric this heuristic ranks rectangles by.
    pub fn metric(self) -> MetricFn {
        match self {
            Heuristic::Area => Rectangle::area,
            Heuristic::Perimeter => Rectangle::perimeter,
            Heuristic::BiggerSide => Rectangle::bigger_side,
            Heuristic::Width => Rectangle::width,
            Heuristic::Height => Rectangle::height,
            Heuristic::PathologicalMultiplier => Rectangle::pathological_multiplier,
        }
    }

    #[inline]
    pub fn key(self, rectangle: &Rectangle) -> u32 {
        (self.metric())(rectangle)
    }
}

/// Free-standing form of [`Heuristic::key`].
#[inline]
pub fn compute_key(rectangle: &Rectangle, heuristic: Heuristic) -> u32 {
    heuristic.key(rectangle)
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::types::MAX_SIDE;

    fn rect(width: u32, height: u32) -> Rectangle {
        Rectangle::new((width, height)).unwrap()
    }

    // (size, area, perimeter, bigger side, width, height, pathological)
    const TABLE: &[((u32, u32), [u32; 6])] = &[
        ((1, 1), [1, 4, 1, 1, 1, 1]),
        ((10, 10), [100, 40, 10, 10, 10, 100]),
        ((20, 5), [100, 50, 20, 20, 5, 400]),
        ((5, 20), [100, 50, 20, 5, 20, 400]),
        ((7, 3), [21, 20, 7, 7, 3, 42]),
        ((3, 64), [192, 134, 64, 3, 64, 4032]),
        ((MAX_SIDE, 1), [MAX_SIDE, 2 * MAX_SIDE + 2, MAX_SIDE, MAX_SIDE, 1, MAX_SIDE * MAX_SIDE]),
    ];

    #[test]
    fn keys_match_closed_forms() {
        for &(size, expected) in TABLE {
            let rectangle = rect(size.0, size.1);

            for (heuristic, &key) in Heuristic::all().zip(expected.iter()) {
                assert_eq!(
                    compute_key(&rectangle, heuristic),
                    key,
                    "{} of {:?}",
                    heuristic,
                    size
                );
            }
        }
    }

    #[test]
    fn pathological_grows_with_elongation() {
        // All of these have an area of 256.
        let keys: Vec<_> = [(16, 16), (32, 8), (64, 4), (128, 2), (256, 1)]
            .iter()
            .map(|&(w, h)| Heuristic::PathologicalMultiplier.key(&rect(w, h)))
            .collect();

        assert_eq!(keys, vec![256, 1024, 4096, 16384, 65536]);
    }

    #[test]
    fn pathological_ratios_below_two_score_plain_area() {
        let heuristic = Heuristic::PathologicalMultiplier;

        assert_eq!(heuristic.key(&rect(12, 10)), 120);
        assert_eq!(heuristic.key(&rect(15, 8)), 120);
        assert_eq!(heuristic.key(&rect(19, 10)), 190);
        assert_eq!(heuristic.key(&rect(20, 10)), 400);
    }

    #[test]
    fn pathological_is_orientation_independent() {
        let heuristic = Heuristic::PathologicalMultiplier;

        assert_eq!(heuristic.key(&rect(9, 2)), heuristic.key(&rect(2, 9)));
    }
}
