//! Global Tokio runtime for delayed tasks
//!
//! egui drives the UI thread and has no async executor of its own, so timers run on a
//! static multi-threaded runtime and report back through the app event channel.
//!
//! Usage:
//! ```rust,no_run
//! use desktop::utils::runtime::TOKIO_RT;
//!
//! TOKIO_RT.spawn(async move {
//!     tokio::time::sleep(std::time::Duration::from_millis(2000)).await;
//!     // post an AppEvent back to the UI thread
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for wallet connect timers")
});
