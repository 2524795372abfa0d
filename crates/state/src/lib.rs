pub mod cycle;

pub use cycle::{next_index, CycleState, StateError};
