pub mod clock;
pub mod constants;
pub mod damping;
pub mod frame;
pub mod hold;
pub mod sinks;
pub mod state;

pub use clock::*;
pub use constants::*;
pub use damping::*;
pub use frame::*;
pub use hold::*;
pub use sinks::*;
pub use state::*;
