use crate::client::{ApiRequest, LunchMoney};
use crate::domain::ResultObject;
use crate::error::ClientError;
use crate::params::Params;

impl LunchMoney {
    pub async fn tags(&self, extra: Params) -> Result<Vec<ResultObject>, ClientError> {
        let body = self.query(ApiRequest::get("tags").params(extra)).await?;
        Self::objectify(body, None)
    }

    /// Recurring expenses expected in a period (pass `start_date` in `extra`
    /// to pick the month). An expense billed several times in the period is
    /// listed once per expected billing date.
    pub async fn recurring_expenses(
        &self,
        extra: Params,
    ) -> Result<Vec<ResultObject>, ClientError> {
        let body = self
            .query(ApiRequest::get("recurring_expenses").params(extra))
            .await?;
        Self::objectify(body, None)
    }
}
