//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - Resolution failures are absorbed into `None`; only the star feed and
//!   storage report errors

mod bookmark_store;
mod forge;

pub use bookmark_store::{BookmarkStore, StoreError};
pub use forge::{ForgeClientPort, ForgePortError, ForgePortResult};
