//! Packsearch picks the order to feed rectangles to a packer in. It was built
//! for texture atlases: the same set of images packs noticeably tighter or
//! looser depending on which ones are placed first.
//!
//! A search takes a [`HeuristicSelector`][HeuristicSelector], a set of ranking
//! rules like "biggest area first" or "widest first". Each heuristic ranks a
//! copy of the input, a [`PlacementEngine`][PlacementEngine] places that
//! ordering, and the placement with the smallest bounding area wins. Ties go
//! to whichever heuristic comes first in this order: area, perimeter, bigger
//! side, width, height, pathological multiplier.
//!
//! Packsearch ships one engine, [`AnchorPacker`][AnchorPacker]. Anything that
//! implements `PlacementEngine`, including a plain function, can be used
//! instead.
//!
//! ## Example
//! ```
//! use packsearch::{pack, AnchorPacker, Heuristic, HeuristicSelector, Rectangle};
//!
//! // First, transform the rectangles you want to pack into the Packsearch
//! // Rectangle type.
//! let rectangles = vec![
//!     Rectangle::new((128, 64)).unwrap(),
//!     Rectangle::new((64, 64)).unwrap(),
//!     Rectangle::new((1, 300)).unwrap(),
//! ];
//!
//! // Construct an engine and configure it with your constraints.
//! let engine = AnchorPacker::new().max_size((512, 512));
//!
//! // Try every heuristic and keep the best result.
//! let result = pack(&rectangles, HeuristicSelector::ALL, &engine).unwrap();
//!
//! // Or only a couple of them.
//! let narrowed = pack(&rectangles, Heuristic::Width | Heuristic::Height, &engine).unwrap();
//!
//! assert!(result.bounding_area() <= narrowed.bounding_area());
//! ```
//!
//! With the `parallel` feature enabled, `pack_parallel` runs the trials on the
//! rayon thread pool and returns the same result as `pack`.
//!
//! [HeuristicSelector]: struct.HeuristicSelector.html
//! [PlacementEngine]: trait.PlacementEngine.html
//! [AnchorPacker]: struct.AnchorPacker.html

mod engine;
mod geometry;
mod heuristic;
mod id;
mod metric;
mod packer;
mod rank;
mod search;
mod types;

pub use engine::*;
pub use heuristic::*;
pub use id::*;
pub use metric::*;
pub use packer::*;
pub use rank::*;
pub use search::*;
pub use types::*;
