//! # creg-core — Foundational Types for the Civic Registry Stack
//!
//! This crate is the bedrock of the Civic Registry Stack. It defines the
//! domain primitives shared by every registry: opaque principal and property
//! identifiers, the processing-height counter that license validity is
//! measured against, and the error taxonomy every mutating operation reports
//! through. Every other crate in the workspace depends on `creg-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Principal`, `PropertyId`,
//!    `Height` — all newtypes. No bare strings or integers in public
//!    registry signatures, so a property identifier cannot be passed where
//!    a principal is expected.
//!
//! 2. **Identity is opaque and externally supplied.** The runtime
//!    establishes who the caller is; this crate only compares principals
//!    for equality. There is no constructor that derives a principal from
//!    anything else.
//!
//! 3. **Height is an abstract counter, not a clock.** Expiration is
//!    measured in elapsed processing steps supplied by the environment.
//!    Nothing in this crate reads wall-clock time.
//!
//! 4. **Stable error codes.** `RegistryError` variants carry fixed numeric
//!    codes (100, 101) that downstream consumers may rely on.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `creg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod height;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use error::RegistryError;
pub use height::Height;
pub use identity::{Principal, PropertyId};
