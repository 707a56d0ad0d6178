//! # Storage Module
//!
//! Seams to the external collaborators that hold Billed's data:
//!
//! - **Bills collection**: `get` all bills, `add` one bill
//! - **File storage**: `put` a proof image and resolve its download URL
//! - **Session store**: the browser's key/value storage holding the user
//!
//! The browser implementations live in the frontend crate. The in-memory
//! implementations here back demo mode and unit tests.

pub mod traits;
pub mod memory;
pub mod fixtures;

pub use traits::*;
pub use memory::{InMemoryBillStore, InMemoryFileStorage, InMemorySessionStore};
