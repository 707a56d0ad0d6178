//! # Billed Domain
//!
//! Contains all non-UI logic for the Billed expense report front-end.
//!
//! - **Domain**: the new bill flow (file gating, record assembly, submission),
//!   the bills listing read path, session access, routing rules
//! - **Storage**: the seams to the external document store and session store,
//!   plus in-memory implementations used for demo mode and tests
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! Domain Layer (NewBillService, BillsService, SessionService)
//!     ↓
//! Storage Layer (BillStorage, FileStorage, SessionStore)
//! ```
//!
//! Everything here runs on a single-threaded event loop. Async traits are
//! declared `?Send` and shared state uses `Rc<RefCell<_>>`.

pub mod domain;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

pub use domain::*;
pub use storage::*;
