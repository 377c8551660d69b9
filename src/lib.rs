//! RAII-style scoped callbacks.
//!
//! A [`ScopeGuard`] owns a callback and the value it will be called with,
//! and fires the callback at most once when it is released: dropped at the
//! end of its scope, explicitly [consumed], or [cancelled] without firing.
//! Because release runs on every exit path (normal return, early return,
//! unwind), guards are a convenient way to attach cleanup to a scope:
//!
//! ```
//! use scoped_callback::guard;
//!
//! let file = guard(std::path::PathBuf::from("state.tmp"), |path| {
//!     let _ = std::fs::remove_file(path);
//! });
//!
//! // ... work with *file ...
//! # drop(file);
//! ```
//!
//! Guards deliberately refuse serde serialization and deserialization in
//! both directions: a guard reconstructed from untrusted bytes would hand
//! the release path an attacker-chosen callback.
//!
//! [consumed]: ScopeGuard::consume
//! [cancelled]: ScopeGuard::cancel

mod abort;
mod error;
mod guard;
mod persist;

pub use abort::ignore_user_abort;
pub use error::{Error, Result};
pub use guard::{guard, ScopeGuard};
