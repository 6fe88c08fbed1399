use thiserror::Error;

use crate::{
    engine::{PlacementEngine, PlacementError},
    heuristic::{Heuristic, HeuristicSelector},
    id::Id,
    rank::sort_by_heuristic,
    types::{PlacedRect, Placement, Rectangle},
};

/// Tries every heuristic in `selector` and returns the tightest packing.
///
/// For each heuristic, in canonical order, a copy of `rectangles` is ranked by
/// that heuristic and handed to `engine`. The placement with the smallest
/// bounding area wins; when two heuristics produce the same area, the one that
/// comes first in canonical order is kept.
///
/// Heuristics whose placement fails are skipped and show up in
/// [`PackingResult::trials`]. The search only fails if the selector is empty or
/// no heuristic produced a placement.
pub fn pack<E>(
    rectangles: &[Rectangle],
    selector: HeuristicSelector,
    engine: &E,
) -> Result<PackingResult, PackError>
where
    E: PlacementEngine + ?Sized,
{
    let heuristics = heuristics_to_try(rectangles, selector)?;

    let outcomes = heuristics
        .iter()
        .map(|&heuristic| run_trial(rectangles, heuristic, engine))
        .collect();

    select_best(rectangles, &heuristics, outcomes)
}

/// Like [`pack`], but runs one trial per heuristic on the rayon thread pool.
///
/// Produces exactly the same result as `pack` for the same inputs.
#[cfg(feature = "parallel")]
pub fn pack_parallel<E>(
    rectangles: &[Rectangle],
    selector: HeuristicSelector,
    engine: &E,
) -> Result<PackingResult, PackError>
where
    E: PlacementEngine + Sync + ?Sized,
{
    use rayon::prelude::*;

    let heuristics = heuristics_to_try(rectangles, selector)?;

    // Indexed parallel iterators collect in input order, so completion order
    // never leaks into the selection below.
    let outcomes = heuristics
        .par_iter()
        .map(|&heuristic| run_trial(rectangles, heuristic, engine))
        .collect();

    select_best(rectangles, &heuristics, outcomes)
}

fn heuristics_to_try(
    rectangles: &[Rectangle],
    selector: HeuristicSelector,
) -> Result<Vec<Heuristic>, PackError> {
    let heuristics = selector.decompose();

    if heuristics.is_empty() {
        return Err(PackError::EmptySelector);
    }

    log::debug!(
        "Searching {} heuristics ({}) for {} rectangles",
        heuristics.len(),
        selector,
        rectangles.len()
    );

    Ok(heuristics)
}

fn run_trial<E>(
    rectangles: &[Rectangle],
    heuristic: Heuristic,
    engine: &E,
) -> Result<Placement, PlacementError>
where
    E: PlacementEngine + ?Sized,
{
    let ordered = sort_by_heuristic(rectangles, heuristic);
    engine.place(&ordered)
}

fn select_best(
    rectangles: &[Rectangle],
    heuristics: &[Heuristic],
    outcomes: Vec<Result<Placement, PlacementError>>,
) -> Result<PackingResult, PackError> {
    let mut best: Option<(Heuristic, Placement)> = None;
    let mut trials = Vec::with_capacity(heuristics.len());

    for (&heuristic, outcome) in heuristics.iter().zip(outcomes) {
        match outcome {
            Ok(placement) => {
                let area = placement.bounding_area();
                log::debug!("Heuristic {} packed into area {}", heuristic, area);

                trials.push(Trial {
                    heuristic,
                    outcome: Ok(area),
                });

                // Strictly smaller only: an earlier heuristic keeps ties.
                let improves = match &best {
                    Some((_, current)) => area < current.bounding_area(),
                    None => true,
                };

                if improves {
                    best = Some((heuristic, placement));
                }
            }
            Err(err) => {
                log::debug!("Heuristic {} failed: {}", heuristic, err);

                trials.push(Trial {
                    heuristic,
                    outcome: Err(err),
                });
            }
        }
    }

    match best {
        Some((heuristic, placement)) => {
            log::debug!(
                "Picked heuristic {} with bounding size {:?}",
                heuristic,
                placement.bounding_size()
            );

            Ok(PackingResult {
                heuristic,
                placement,
                trials,
                packed_area: rectangles.iter().map(|rect| u64::from(rect.area())).sum(),
            })
        }
        None => Err(PackError::NoFeasiblePacking {
            attempted: heuristics.iter().copied().collect(),
            failures: trials
                .into_iter()
                .filter_map(|Trial { heuristic, outcome }| {
                    outcome.err().map(|err| (heuristic, err))
                })
                .collect(),
        }),
    }
}

/// The outcome of trying a single heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    pub heuristic: Heuristic,

    /// The bounding area of the placement, or why the engine gave up.
    pub outcome: Result<u64, PlacementError>,
}

/// The best packing found by [`pack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingResult {
    heuristic: Heuristic,
    placement: Placement,
    trials: Vec<Trial>,
    packed_area: u64,
}

impl PackingResult {
    /// The heuristic whose ordering produced this packing.
    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    #[inline]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    #[inline]
    pub fn positions(&self) -> &[PlacedRect] {
        self.placement.items()
    }

    pub fn position_of(&self, id: Id) -> Option<(u32, u32)> {
        self.placement.position_of(id)
    }

    pub fn bounding_size(&self) -> (u64, u64) {
        self.placement.bounding_size()
    }

    pub fn bounding_area(&self) -> u64 {
        self.placement.bounding_area()
    }

    /// Every heuristic that was tried, in canonical order.
    #[inline]
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// Heuristics whose placement failed, along with the reason.
    pub fn skipped(&self) -> impl Iterator<Item = (Heuristic, &PlacementError)> {
        self.trials.iter().filter_map(|trial| match &trial.outcome {
            Ok(_) => None,
            Err(err) => Some((trial.heuristic, err)),
        })
    }

    /// Fraction of the bounding area covered by rectangles, from 0 to 1.
    pub fn occupancy(&self) -> f64 {
        let bounding_area = self.bounding_area();

        if bounding_area == 0 {
            return 0.0;
        }

        self.packed_area as f64 / bounding_area as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("Expected exactly one heuristic, but the selector had bits {bits:#010b}")]
    InvalidHeuristicArgument { bits: u8 },

    #[error("No heuristics were selected, so there is nothing to try")]
    EmptySelector,

    #[error("No heuristic produced a packing (tried: {attempted})")]
    NoFeasiblePacking {
        attempted: HeuristicSelector,
        failures: Vec<(Heuristic, PlacementError)>,
    },
}
