use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The renting party.
///
/// `age` drives the surcharge band applied during pricing; customers outside
/// every band cannot be quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub age: u8,
}
