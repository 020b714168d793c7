pub mod drag;
pub mod fling;
pub mod scroll;
pub mod tap;

pub use drag::DragGesture;
pub use fling::FlingGesture;
pub use scroll::ScrollGesture;
pub use tap::TapGesture;
