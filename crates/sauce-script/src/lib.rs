//! Sauce Script - RON loader for action definitions
//!
//! Declares actions in RON instead of code:
//!
//! ```ron
//! (
//!     prefix: "todos/",
//!     actions: {
//!         "addTodo": ["text", { "done": false }],
//!         "setFilter": { "filter": "all" },
//!         "clearDone": (),
//!     },
//! )
//! ```
//!
//! Each value is a field declaration as understood by
//! `sauce_core::ExtraProps`. Hand-written creators are registered on the
//! [`Loader`] and take precedence over the file.

mod error;
mod loader;

pub use error::{Error, Result};
pub use loader::{ActionFile, Loader};
