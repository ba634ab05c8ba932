//! # Domain Models
//!
//! Values produced and consumed by [`crate::LunchMoney`] operations.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ResultObject`] | One decoded JSON object with keyed and named-field access |
//! | [`DateWindow`] | Optional date bounds defaulting to the trailing 30 days |
//! | [`NewTransaction`] | Typed payload for bulk transaction inserts |
//! | [`TransactionUpdate`] | Outcome of updating (or splitting) a transaction |

mod date_window;
mod result_object;
pub(crate) mod value;

use serde::{Deserialize, Serialize};

pub use date_window::{format_date, format_month_start, today, DateWindow, DEFAULT_WINDOW_DAYS};
pub use result_object::ResultObject;
pub use value::is_truthy;

/// Outcome of `PUT transactions/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    pub updated: bool,
    /// Ids of the child transactions created when the update split the original.
    pub split: Vec<i64>,
}

/// Transaction accepted by `POST transactions`.
///
/// Only `date` and `amount` are required by the API; unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Decimal amount as text, e.g. `"-12.50"`.
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

impl NewTransaction {
    pub fn new(date: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            ..Self::default()
        }
    }

    pub fn payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = Some(payee.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
