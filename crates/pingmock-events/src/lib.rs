pub mod bus;
pub mod clock;
pub mod store;
pub mod types;

pub use crate::bus::EventBus;
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::store::EventStore;
pub use crate::types::Event;
