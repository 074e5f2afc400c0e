pub mod lookup;
pub mod performance;

pub use performance::{resolve_participant, PlayerPerformance};
