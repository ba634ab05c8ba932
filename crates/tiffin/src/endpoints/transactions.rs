use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::{ApiRequest, LunchMoney};
use crate::domain::value::{required_field, required_id_list, to_id, to_id_list};
use crate::domain::{format_date, today, DateWindow, ResultObject, TransactionUpdate};
use crate::error::ClientError;
use crate::params::Params;

impl LunchMoney {
    /// Transactions between `window.start` and `window.end`.
    ///
    /// Missing bounds default to the 30 days ending today.
    pub async fn transactions(
        &self,
        window: DateWindow,
        extra: Params,
    ) -> Result<Vec<ResultObject>, ClientError> {
        let (start, end) = window.resolve(today());
        let params = Params::new()
            .with("start_date", format_date(start)?)
            .with("end_date", format_date(end)?)
            .merge(extra);
        let body = self
            .query(ApiRequest::get("transactions").params(params))
            .await?;
        Self::objectify(body, Some("transactions"))
    }

    /// One transaction by id. With `debit_as_negative`, expenses come back
    /// as negative amounts and credits as positive ones.
    pub async fn transaction(
        &self,
        transaction_id: i64,
        debit_as_negative: bool,
        extra: Params,
    ) -> Result<ResultObject, ClientError> {
        let params = Params::new()
            .with("debit_as_negative", debit_as_negative)
            .merge(extra);
        let body = self
            .query(ApiRequest::get(format!("transactions/{transaction_id}")).params(params))
            .await?;
        Self::objectify_one(body)
    }

    /// Insert many transactions at once and return the new ids.
    ///
    /// Each transaction needs at least `date` and `amount`; see
    /// [`crate::NewTransaction`] for a typed payload.
    pub async fn create_transactions<T: Serialize>(
        &self,
        transactions: &[T],
        extra: Params,
    ) -> Result<Vec<i64>, ClientError> {
        let params = Params::new()
            .with_serialized("transactions", &transactions)?
            .merge(extra);
        let body = self
            .query(ApiRequest::post("transactions").params(params))
            .await?;
        required_id_list(&body, "ids")
    }

    /// Group two or more transactions and return the id of the group.
    pub async fn create_transaction_group(
        &self,
        date: &str,
        payee: &str,
        transactions: &[i64],
        extra: Params,
    ) -> Result<i64, ClientError> {
        let params = Params::new()
            .with("date", date)
            .with("payee", payee)
            .with("transactions", transactions.to_vec())
            .merge(extra);
        let body = self
            .query(ApiRequest::post("transactions/group").params(params))
            .await?;
        to_id(&body).ok_or_else(|| ClientError::unexpected_shape("a transaction group id", &body))
    }

    /// Update a transaction's fields. Passing `split` in `extra` splits it
    /// into children, whose ids are returned in [`TransactionUpdate::split`].
    pub async fn update_transaction(
        &self,
        transaction_id: i64,
        fields: Map<String, Value>,
        extra: Params,
    ) -> Result<TransactionUpdate, ClientError> {
        let params = Params::new()
            .with("transaction", Value::Object(fields))
            .merge(extra);
        let body = self
            .query(ApiRequest::put(format!("transactions/{transaction_id}")).params(params))
            .await?;

        let updated = required_field(&body, "updated")?
            .as_bool()
            .ok_or_else(|| ClientError::unexpected_shape("boolean 'updated'", &body))?;
        let split = match body.get("split") {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => to_id_list(value)
                .ok_or_else(|| ClientError::unexpected_shape("integer list 'split'", &body))?,
        };

        Ok(TransactionUpdate { updated, split })
    }

    /// Dissolve a transaction group. The member transactions are kept; their
    /// ids are returned.
    pub async fn delete_group(
        &self,
        group_id: i64,
        extra: Params,
    ) -> Result<Vec<i64>, ClientError> {
        let request = ApiRequest::delete(format!("transactions/group/{group_id}")).params(extra);
        let body = self.query(request).await?;
        required_id_list(&body, "transactions")
    }
}
