use time::Date;

use crate::client::{ApiRequest, LunchMoney};
use crate::domain::{format_date, format_month_start, is_truthy, today, DateWindow, ResultObject};
use crate::error::ClientError;
use crate::params::Params;

impl LunchMoney {
    /// Budget rows per category, aggregated over the window.
    ///
    /// Missing bounds default to the 30 days ending today.
    pub async fn budgets(
        &self,
        window: DateWindow,
        extra: Params,
    ) -> Result<Vec<ResultObject>, ClientError> {
        let (start, end) = window.resolve(today());
        let params = Params::new()
            .with("start_date", format_date(start)?)
            .with("end_date", format_date(end)?)
            .merge(extra);
        let body = self.query(ApiRequest::get("budgets").params(params)).await?;
        Self::objectify(body, None)
    }

    /// Set the budget for a category in the month containing `month`.
    ///
    /// Returns the parent group's updated budget when `category_id` is a
    /// sub-category, `None` otherwise.
    pub async fn upsert_budget(
        &self,
        month: Date,
        category_id: i64,
        amount: f64,
        extra: Params,
    ) -> Result<Option<ResultObject>, ClientError> {
        let params = Params::new()
            .with("start_date", format_month_start(month)?)
            .with("category_id", category_id)
            .with("amount", amount)
            .merge(extra);
        let body = self.query(ApiRequest::put("budgets").params(params)).await?;

        match body.get("category_group") {
            Some(group) if is_truthy(group) => Self::objectify_one(group.clone()).map(Some),
            _ => Ok(None),
        }
    }

    /// Unset a category's budget for the month containing `month`.
    pub async fn delete_budget(
        &self,
        category_id: i64,
        month: Date,
        extra: Params,
    ) -> Result<bool, ClientError> {
        let params = Params::new()
            .with("start_date", format_month_start(month)?)
            .with("category_id", category_id.to_string())
            .merge(extra);
        let body = self
            .query(ApiRequest::delete("budgets").params(params))
            .await?;
        Ok(is_truthy(&body))
    }
}
