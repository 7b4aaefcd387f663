use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rentable vehicle.
///
/// Cars are created at seed time and persisted indefinitely. The only
/// runtime mutation is the `available` flag, which flips to `false` when
/// the car is selected by a rent operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    pub name: String,
    /// Whether the car can currently be rented. Defaults to `true` when
    /// absent from a raw record.
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default = "default_true")]
    pub gas_available: bool,
    pub release_year: i32,
}

fn default_true() -> bool {
    true
}
