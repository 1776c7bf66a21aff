pub mod gesture;
pub mod viewport;

pub use gesture::{GestureController, SurfaceId};
pub use viewport::Viewport;
