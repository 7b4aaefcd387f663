//! Fleet rental: a small car-rental quoting and booking service.
//!
//! The [`service::RentalService`] carries the business rules (availability
//! selection, age-banded pricing, the rent mutation); [`api`] exposes them
//! over HTTP; [`store`] persists entity collections as JSON files; [`seed`]
//! generates fixtures.

pub mod api;
pub mod models;
pub mod seed;
pub mod service;
pub mod store;
