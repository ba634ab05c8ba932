use crate::client::{ApiRequest, LunchMoney};
use crate::domain::ResultObject;
use crate::error::ClientError;
use crate::params::Params;

impl LunchMoney {
    /// The account owner behind the API key.
    pub async fn me(&self, extra: Params) -> Result<ResultObject, ClientError> {
        let body = self.query(ApiRequest::get("me").params(extra)).await?;
        Self::objectify_one(body)
    }
}
