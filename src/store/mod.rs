pub mod clock;
pub mod task_store;
pub mod views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use task_store::{Listener, SharedTaskStore, SubscriptionId, TaskStore};
