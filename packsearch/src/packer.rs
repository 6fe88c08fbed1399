use crate::{
    engine::{PlacementEngine, PlacementError},
    geometry::Aabb,
    types::{PlacedRect, Placement, Rectangle},
};

/// A small placement engine that keeps a list of candidate corners ("anchors")
/// and puts each rectangle at the first anchor where it fits.
///
/// Rectangles are placed in exactly the order they're given; ranking them is
/// the search's job. The engine starts with a bin of `min_size` and doubles it
/// until everything fits or `max_size` is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorPacker {
    min_size: (u32, u32),
    max_size: (u32, u32),
}

impl Default for AnchorPacker {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorPacker {
    pub fn new() -> Self {
        Self {
            min_size: (128, 128),
            max_size: (1024, 1024),
        }
    }

    pub fn min_size(self, min_size: (u32, u32)) -> Self {
        Self { min_size, ..self }
    }

    pub fn max_size(self, max_size: (u32, u32)) -> Self {
        Self { max_size, ..self }
    }

    fn starting_size(&self) -> (u32, u32) {
        (
            self.min_size.0.max(1).min(self.max_size.0),
            self.min_size.1.max(1).min(self.max_size.1),
        )
    }

    /// Tries to fit every item into a bin of the given size. On failure,
    /// returns how many items were left over.
    fn place_in_bin(ordered: &[Rectangle], size: (u32, u32)) -> Result<Vec<PlacedRect>, usize> {
        log::trace!(
            "Trying to place {} items into bin of size {:?}",
            ordered.len(),
            size
        );

        let mut anchors = vec![(0, 0)];
        let mut items: Vec<PlacedRect> = Vec::with_capacity(ordered.len());
        let mut unplaced = 0;

        for input_item in ordered {
            let fit_anchor = anchors.iter().copied().position(|anchor| {
                let potential_aabb = Aabb {
                    pos: anchor,
                    size: input_item.size,
                };

                potential_aabb.fits_within(size)
                    && items
                        .iter()
                        .all(|placed_item| !potential_aabb.intersects(&placed_item.rect))
            });

            match fit_anchor {
                Some(index) => {
                    let anchor = anchors.remove(index);

                    log::trace!(
                        "Item {} ({}x{}) fit at anchor {:?}",
                        input_item.id,
                        input_item.size.0,
                        input_item.size.1,
                        anchor
                    );

                    let new_anchor_hor = (anchor.0 + input_item.size.0, anchor.1);
                    if new_anchor_hor.0 < size.0 && new_anchor_hor.1 < size.1 {
                        anchors.push(new_anchor_hor);
                    }

                    let new_anchor_ver = (anchor.0, anchor.1 + input_item.size.1);
                    if new_anchor_ver.0 < size.0 && new_anchor_ver.1 < size.1 {
                        anchors.push(new_anchor_ver);
                    }

                    items.push(PlacedRect::new(input_item.id, anchor, input_item.size));
                }
                None => {
                    log::trace!("Item {} did not fit in this bin.", input_item.id);
                    unplaced += 1;
                }
            }
        }

        if unplaced == 0 {
            Ok(items)
        } else {
            Err(unplaced)
        }
    }
}

impl PlacementEngine for AnchorPacker {
    fn place(&self, ordered: &[Rectangle]) -> Result<Placement, PlacementError> {
        if let Some(too_large) = ordered
            .iter()
            .find(|item| item.width() > self.max_size.0 || item.height() > self.max_size.1)
        {
            return Err(PlacementError::RectangleTooLarge {
                id: too_large.id,
                size: too_large.size,
                max_size: self.max_size,
            });
        }

        let mut current_size = self.starting_size();

        loop {
            match Self::place_in_bin(ordered, current_size) {
                Ok(items) => {
                    log::trace!(
                        "Placed {} items into bin of size {:?}",
                        items.len(),
                        current_size
                    );

                    return Ok(Placement::new(current_size, items));
                }

                Err(unplaced) => {
                    // Grow the bin and start over, unless it's already as big
                    // as it's allowed to be.
                    if current_size.0 < self.max_size.0 || current_size.1 < self.max_size.1 {
                        current_size = (
                            current_size.0.saturating_mul(2).min(self.max_size.0),
                            current_size.1.saturating_mul(2).min(self.max_size.1),
                        );
                    } else {
                        return Err(PlacementError::ExceedsMaxSize {
                            unplaced,
                            max_size: self.max_size,
                        });
                    }
                }
            }
        }
    }
}
