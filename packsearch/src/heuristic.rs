use std::{
    convert::TryFrom,
    fmt,
    iter::FromIterator,
    ops::{BitOr, BitOrAssign},
    str::FromStr,
};

use thiserror::Error;

use crate::search::PackError;

/// A single rule for ranking rectangles before they're handed to a placement
/// engine. Rectangles with a larger key are placed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Area,
    Perimeter,
    BiggerSide,
    Width,
    Height,
    PathologicalMultiplier,
}

// Decomposition order and cross-heuristic tie-breaking both follow this table.
// Reordering it changes which heuristic wins a tie.
static CANONICAL: [(u8, Heuristic); 6] = [
    (1 << 0, Heuristic::Area),
    (1 << 1, Heuristic::Perimeter),
    (1 << 2, Heuristic::BiggerSide),
    (1 << 3, Heuristic::Width),
    (1 << 4, Heuristic::Height),
    (1 << 5, Heuristic::PathologicalMultiplier),
];

impl Heuristic {
    /// Every heuristic, in canonical order.
    pub fn all() -> impl Iterator<Item = Heuristic> {
        CANONICAL.iter().map(|&(_, heuristic)| heuristic)
    }

    fn bit(self) -> u8 {
        CANONICAL
            .iter()
            .find(|&&(_, heuristic)| heuristic == self)
            .map_or(0, |&(bit, _)| bit)
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Area => "area",
            Heuristic::Perimeter => "perimeter",
            Heuristic::BiggerSide => "bigger-side",
            Heuristic::Width => "width",
            Heuristic::Height => "height",
            Heuristic::PathologicalMultiplier => "pathological",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(value: &str) -> Result<Heuristic, Self::Err> {
        match value {
            "area" => Ok(Heuristic::Area),
            "perimeter" => Ok(Heuristic::Perimeter),
            "bigger-side" => Ok(Heuristic::BiggerSide),
            "width" => Ok(Heuristic::Width),
            "height" => Ok(Heuristic::Height),
            "pathological" => Ok(Heuristic::PathologicalMultiplier),

            _ => Err(ParseHeuristicError {
                value: value.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Invalid heuristic '{value}'. Valid options are 'area', 'perimeter', \
     'bigger-side', 'width', 'height' and 'pathological'."
)]
pub struct ParseHeuristicError {
    value: String,
}

/// A set of heuristics to try during one packing search.
///
/// Selectors are built by combining heuristics with `|`, or by collecting an
/// iterator of heuristics. The order heuristics are added in is irrelevant:
/// [`decompose`](#method.decompose) always yields them in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HeuristicSelector(u8);

impl HeuristicSelector {
    pub const EMPTY: HeuristicSelector = HeuristicSelector(0);

    /// Tries every heuristic and keeps the best packing.
    pub const ALL: HeuristicSelector = HeuristicSelector(0b11_1111);

    pub fn contains(self, heuristic: Heuristic) -> bool {
        self.0 & heuristic.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Lists the heuristics in this selector in canonical order.
    ///
    /// An empty selector yields an empty list.
    pub fn decompose(self) -> Vec<Heuristic> {
        CANONICAL
            .iter()
            .filter(|&&(bit, _)| self.0 & bit != 0)
            .map(|&(_, heuristic)| heuristic)
            .collect()
    }
}

/// Free-standing form of [`HeuristicSelector::decompose`].
pub fn decompose(selector: HeuristicSelector) -> Vec<Heuristic> {
    selector.decompose()
}

impl From<Heuristic> for HeuristicSelector {
    fn from(heuristic: Heuristic) -> Self {
        HeuristicSelector(heuristic.bit())
    }
}

impl BitOr for HeuristicSelector {
    type Output = HeuristicSelector;

    fn bitor(self, rhs: HeuristicSelector) -> HeuristicSelector {
        HeuristicSelector(self.0 | rhs.0)
    }
}

impl BitOr<Heuristic> for HeuristicSelector {
    type Output = HeuristicSelector;

    fn bitor(self, rhs: Heuristic) -> HeuristicSelector {
        self | HeuristicSelector::from(rhs)
    }
}

impl BitOr for Heuristic {
    type Output = HeuristicSelector;

    fn bitor(self, rhs: Heuristic) -> HeuristicSelector {
        HeuristicSelector::from(self) | rhs
    }
}

impl BitOrAssign<Heuristic> for HeuristicSelector {
    fn bitor_assign(&mut self, rhs: Heuristic) {
        *self = *self | rhs;
    }
}

impl FromIterator<Heuristic> for HeuristicSelector {
    fn from_iter<I: IntoIterator<Item = Heuristic>>(iter: I) -> Self {
        let mut selector = HeuristicSelector::EMPTY;
        for heuristic in iter {
            selector |= heuristic;
        }
        selector
    }
}

/// Narrows a selector down to the single heuristic it names. Fails if the
/// selector has zero or more than one heuristic set.
impl TryFrom<HeuristicSelector> for Heuristic {
    type Error = PackError;

    fn try_from(selector: HeuristicSelector) -> Result<Self, Self::Error> {
        match selector.decompose().as_slice() {
            [single] => Ok(*single),
            _ => Err(PackError::InvalidHeuristicArgument {
                bits: selector.bits(),
            }),
        }
    }
}

impl fmt::Display for HeuristicSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.decompose().into_iter().map(Heuristic::name).collect();

        if names.is_empty() {
            f.write_str("(none)")
        } else {
            f.write_str(&names.join(" | "))
        }
    }
}
