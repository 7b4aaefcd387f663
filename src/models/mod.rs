//! Domain models for the fleet rental service.
//!
//! # Core Concepts
//!
//! ## Persisted Entities
//!
//! - [`Car`]: A rentable vehicle. Its `available` flag flips when rented.
//! - [`CarCategory`]: A pricing bucket referencing a set of cars that share a
//!   per-day rate.
//! - [`Customer`]: The renting party. Immutable for this system's purposes.
//!
//! ## Derived Records
//!
//! - [`RentalReceipt`]: The transient result of a successful rent operation.
//!   Returned to the caller, never persisted.
//!
//! All entities serialize as camelCase JSON, matching both the on-disk store
//! files and the HTTP payloads. Equality is field-wise (value semantics).

mod car;
mod category;
mod customer;
mod receipt;

pub use car::*;
pub use category::*;
pub use customer::*;
pub use receipt::*;
