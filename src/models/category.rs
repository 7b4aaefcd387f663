use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pricing and grouping bucket for cars.
///
/// Every id in `car_ids` is expected to reference an existing [`Car`] in the
/// car store; the list may be empty (a category with no cars). `price` is the
/// per-day base rate before any surcharge.
///
/// [`Car`]: crate::models::Car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCategory {
    pub id: Uuid,
    pub name: String,
    /// Ordered membership set of car ids belonging to this category.
    pub car_ids: Vec<Uuid>,
    /// Per-day base rate.
    pub price: f64,
}
