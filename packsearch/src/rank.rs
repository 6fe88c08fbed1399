use std::cmp::Reverse;

use crate::{heuristic::Heuristic, types::Rectangle};

/// A rectangle paired with the key it was ranked by.
///
/// Keys are only meaningful relative to other entries produced by the same
/// heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry {
    pub rectangle: Rectangle,
    pub key: u32,
}

/// Ranks rectangles by the given heuristic, largest key first.
///
/// Rectangles with equal keys keep their relative input order, so ranking the
/// same input twice always yields the same sequence. The input is left
/// untouched.
pub fn rank(rectangles: &[Rectangle], heuristic: Heuristic) -> Vec<RankedEntry> {
    let metric = heuristic.metric();

    let mut entries: Vec<RankedEntry> = rectangles
        .iter()
        .map(|&rectangle| RankedEntry {
            rectangle,
            key: metric(&rectangle),
        })
        .collect();

    // sort_by_key is stable.
    entries.sort_by_key(|entry| Reverse(entry.key));

    entries
}

/// Like [`rank`], but discards the keys.
pub fn sort_by_heuristic(rectangles: &[Rectangle], heuristic: Heuristic) -> Vec<Rectangle> {
    rank(rectangles, heuristic)
        .into_iter()
        .map(|entry| entry.rectangle)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn sizes(rectangles: &[Rectangle]) -> Vec<(u32, u32)> {
        rectangles.iter().map(Rectangle::size).collect()
    }

    fn sample() -> Vec<Rectangle> {
        [(10, 10), (20, 5), (5, 20)]
            .iter()
            .map(|&size| Rectangle::new(size).unwrap())
            .collect()
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let input = sample();
        let sorted = sort_by_heuristic(&input, Heuristic::Area);

        assert_eq!(sorted, input);
    }

    #[test]
    fn by_width_descending() {
        let sorted = sort_by_heuristic(&sample(), Heuristic::Width);

        assert_eq!(sizes(&sorted), vec![(20, 5), (10, 10), (5, 20)]);
    }

    #[test]
    fn by_height_descending() {
        let sorted = sort_by_heuristic(&sample(), Heuristic::Height);

        assert_eq!(sizes(&sorted), vec![(5, 20), (10, 10), (20, 5)]);
    }

    #[test]
    fn ties_among_larger_keys() {
        // (20, 5) and (5, 20) tie on bigger side and must stay in input order.
        let sorted = sort_by_heuristic(&sample(), Heuristic::BiggerSide);

        assert_eq!(sizes(&sorted), vec![(20, 5), (5, 20), (10, 10)]);
    }

    #[test]
    fn entries_carry_keys() {
        let entries = rank(&sample(), Heuristic::PathologicalMultiplier);
        let keys: Vec<_> = entries.iter().map(|entry| entry.key).collect();

        assert_eq!(keys, vec![400, 400, 100]);
        assert_eq!(entries[2].rectangle.size(), (10, 10));
    }

    #[test]
    fn input_is_not_modified() {
        let input = sample();
        let before = input.clone();

        let _ = sort_by_heuristic(&input, Heuristic::Width);

        assert_eq!(input, before);
    }

    #[test]
    fn empty_input() {
        assert!(rank(&[], Heuristic::Area).is_empty());
    }
}
