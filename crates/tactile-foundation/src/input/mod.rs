pub mod dispatcher;
pub mod gestures;
pub mod types;

pub use dispatcher::ContactDispatcher;
pub use types::{ContactError, ContactEvent, ContactPhase, ContactSample, PointerId};

pub mod prelude {
    pub use super::types::{ContactError, ContactEvent, ContactPhase, ContactSample, PointerId};
}
