mod clock;
mod processors;
mod progression;
mod services;

pub use clock::*;
pub use processors::*;
pub use progression::*;
pub use services::*;
