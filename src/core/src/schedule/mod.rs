mod audit;
mod entry;
mod game_day;
pub mod generators;
mod random;
mod registry;

pub use audit::*;
pub use entry::*;
pub use game_day::*;
pub use random::*;
pub use registry::*;
