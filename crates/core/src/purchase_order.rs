//! Purchase order status values and the transitions between them.
//!
//! ```text
//! Pending ──approve──> Approved   (terminal)
//!    │
//!    └────cancel────> Cancelled  (terminal)
//! ```
//!
//! Approval is unconditional: a cancelled order can still be approved.
//! Cancellation is refused only for approved orders; cancelling an order
//! that is already cancelled is a no-op that succeeds.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Message returned when an approved order is cancelled.
pub const CANCEL_APPROVED_MESSAGE: &str = "Approved orders cannot be cancelled.";

/// Lifecycle status of a purchase order, stored as its display name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PurchaseOrderStatus {
    #[default]
    Pending,
    Approved,
    Cancelled,
}

impl PurchaseOrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [PurchaseOrderStatus; 3] = [Self::Pending, Self::Approved, Self::Cancelled];

    /// The value persisted in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether no further transition is exposed from this status.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Status after an approve request. Always succeeds.
    pub fn approve(self) -> PurchaseOrderStatus {
        Self::Approved
    }

    /// Status after a cancel request.
    ///
    /// Fails with [`CoreError::Conflict`] when the order is already approved.
    pub fn cancel(self) -> Result<PurchaseOrderStatus, CoreError> {
        match self {
            Self::Approved => Err(CoreError::Conflict(CANCEL_APPROVED_MESSAGE.to_string())),
            Self::Pending | Self::Cancelled => Ok(Self::Cancelled),
        }
    }
}

impl fmt::Display for PurchaseOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PurchaseOrderStatus {
    type Err = CoreError;

    /// Exact, case-sensitive match on the stored name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown purchase order status '{s}'")))
    }
}

impl TryFrom<String> for PurchaseOrderStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
