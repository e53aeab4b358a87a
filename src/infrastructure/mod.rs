pub mod clock;
pub mod page;
pub mod transport;

pub use clock::{Clock, ManualClock, SystemClock};
pub use page::{CounterView, Focus, FormPage, FormTarget, MemoryPage, StatusState};
pub use transport::{HttpTransport, Transport};
