pub mod gesture;
pub mod session;

pub use gesture::{ChartCommand, Gesture, GestureState};
pub use session::SessionPhase;
