pub mod controller;
pub mod lifecycle;
pub mod session;

pub use controller::{IntakeController, SubmitReport};
pub use lifecycle::{Lifecycle, LifecycleState};
pub use session::FormSession;
