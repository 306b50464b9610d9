mod call;
mod runnable;
pub(crate) mod state;
mod sync;

pub use call::Call;
pub use runnable::Runnable;
pub use sync::{Slot, Task};
