pub mod counter;
pub mod presenter;
pub mod validator;

pub use counter::CharCounter;
pub use presenter::{ErrorPresenter, StatusLine};
pub use validator::{elapsed_since, FieldValidator};
