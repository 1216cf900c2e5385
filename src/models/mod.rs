pub mod task;
pub mod time;

pub use task::*;
