use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Car, Customer};

/// The transient result of a successful rent operation.
///
/// Built by [`RentalService::rent`] and handed back to the caller; never
/// persisted. `car` is the post-mutation snapshot (`available` already
/// flipped to `false`), and `amount` is the final price formatted as
/// Brazilian Real. Callers must not re-parse `amount` for arithmetic.
///
/// [`RentalService::rent`]: crate::service::RentalService::rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalReceipt {
    pub customer: Customer,
    pub car: Car,
    pub amount: String,
    pub due_date: DateTime<Utc>,
}
