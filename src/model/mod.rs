//! Brokerage entities consumed by the linkage engine.
//!
//! These mirror the records the back-office REST API returns. The engine
//! treats every list as read-only input; only [`Form`] is rewritten, and
//! only through the reducer in [`crate::linkage`].

mod agent;
mod form;
mod property;
mod user;

pub use agent::{Agent, Manager};
pub use form::{Form, FormEvent, FormField, LoadingFlags};
pub use property::Property;
pub use user::{CurrentUser, Role};
