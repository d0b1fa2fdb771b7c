//! Sale log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// One unit sold through the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub product_id: ProductId,
    /// Unit price at the time of the sale.
    pub price: Price,
    pub sold_at: DateTime<Utc>,
}
