mod pack;
mod rank;

pub use pack::*;
pub use rank::*;
