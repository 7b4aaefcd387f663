//! Rental orchestration: availability selection, pricing, and the rent
//! mutation. This is the only layer carrying business rules; the HTTP
//! handlers translate payloads in and responses out, and the store adapter
//! is a dumb load/save collection.

pub mod pricing;

use std::sync::Arc;

use chrono::{Duration, Utc};
use thiserror::Error;

use crate::models::{Car, CarCategory, Customer, RentalReceipt};
use crate::store::{Store, StoreError};

/// Typed failures raised by [`RentalService`].
///
/// The service never formats user-facing responses or logs for the client;
/// the handler layer maps these onto status codes and bodies.
#[derive(Debug, Error)]
pub enum RentalError {
    /// A required input is missing or out of range.
    #[error("{0}")]
    Validation(String),
    /// No car in the category is available to rent.
    #[error("no cars available")]
    NoAvailability,
    /// Underlying store read/write failure. Propagated, never retried.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Orchestrates car selection, pricing, and availability mutation over an
/// injected car store.
#[derive(Clone)]
pub struct RentalService {
    cars: Arc<dyn Store<Car>>,
}

impl RentalService {
    pub fn new(cars: Arc<dyn Store<Car>>) -> Self {
        Self { cars }
    }

    /// The first car, in store enumeration order, that belongs to the
    /// category and is available. Read-only; returns `None` both when no
    /// category id matches and when every matching car is taken.
    pub async fn get_available_car(
        &self,
        category: &CarCategory,
    ) -> Result<Option<Car>, RentalError> {
        let cars = self.cars.load().await?;
        Ok(cars
            .into_iter()
            .find(|car| car.available && category.car_ids.contains(&car.id)))
    }

    /// The numeric rental amount: per-day rate times duration times the
    /// customer's age-band factor. Callers wanting the presentation form
    /// use [`calculate_final_price`].
    ///
    /// [`calculate_final_price`]: RentalService::calculate_final_price
    pub fn calculate_amount(
        &self,
        customer: &Customer,
        category: &CarCategory,
        number_of_days: u32,
    ) -> Result<f64, RentalError> {
        if number_of_days == 0 {
            return Err(RentalError::Validation(
                "numberOfDays must be a positive integer".to_string(),
            ));
        }
        if category.price <= 0.0 {
            return Err(RentalError::Validation(
                "carCategory price must be positive".to_string(),
            ));
        }
        let factor = pricing::age_factor(customer.age).ok_or_else(|| {
            RentalError::Validation(format!("no tariff band for age {}", customer.age))
        })?;

        Ok(category.price * f64::from(number_of_days) * factor)
    }

    /// [`calculate_amount`] formatted as Brazilian Real (`R$ 1.234,56`).
    /// The returned string is final; callers must not re-parse it.
    ///
    /// [`calculate_amount`]: RentalService::calculate_amount
    pub fn calculate_final_price(
        &self,
        customer: &Customer,
        category: &CarCategory,
        number_of_days: u32,
    ) -> Result<String, RentalError> {
        self.calculate_amount(customer, category, number_of_days)
            .map(pricing::format_brl)
    }

    /// Rents the first available car in the category.
    ///
    /// Selects, prices, flips the car's `available` flag, persists the car
    /// store, and returns a receipt due `number_of_days` calendar days from
    /// now (UTC). Exactly one car is mutated. Not idempotent: a second call
    /// takes the next car, or fails with [`RentalError::NoAvailability`].
    ///
    /// There is no rollback if the save fails after selection, and no lock
    /// is held across load and save; correctness is guaranteed for a single
    /// writer only.
    pub async fn rent(
        &self,
        customer: &Customer,
        category: &CarCategory,
        number_of_days: u32,
    ) -> Result<RentalReceipt, RentalError> {
        let mut cars = self.cars.load().await?;
        let selected = cars
            .iter_mut()
            .find(|car| car.available && category.car_ids.contains(&car.id))
            .ok_or(RentalError::NoAvailability)?;

        // Price before persisting so a validation failure leaves the store
        // untouched.
        let amount = self.calculate_final_price(customer, category, number_of_days)?;

        selected.available = false;
        let car = selected.clone();
        self.cars.save(&cars).await?;

        let due_date = Utc::now() + Duration::days(i64::from(number_of_days));

        Ok(RentalReceipt {
            customer: customer.clone(),
            car,
            amount,
            due_date,
        })
    }
}
