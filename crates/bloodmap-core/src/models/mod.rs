//! Domain models.

mod candidate;
mod dosing;
mod labs;
mod observation;
mod triage;

pub use candidate::*;
pub use dosing::*;
pub use labs::*;
pub use observation::*;
pub use triage::*;
