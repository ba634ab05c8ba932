use crate::client::{ApiRequest, LunchMoney};
use crate::domain::ResultObject;
use crate::error::ClientError;
use crate::params::Params;

impl LunchMoney {
    /// Manually-managed assets.
    pub async fn assets(&self, extra: Params) -> Result<Vec<ResultObject>, ClientError> {
        let body = self.query(ApiRequest::get("assets").params(extra)).await?;
        Self::objectify(body, Some("assets"))
    }

    /// Create a manually-managed asset. `type_name` is the API's asset type,
    /// e.g. `"cash"` or `"credit"`.
    pub async fn create_asset(
        &self,
        type_name: &str,
        balance: f64,
        extra: Params,
    ) -> Result<ResultObject, ClientError> {
        let params = Params::new()
            .with("type_name", type_name)
            .with("balance", balance)
            .merge(extra);
        let body = self.query(ApiRequest::post("assets").params(params)).await?;
        Self::objectify_one(body)
    }

    pub async fn update_asset(
        &self,
        asset_id: i64,
        extra: Params,
    ) -> Result<ResultObject, ClientError> {
        let body = self
            .query(ApiRequest::put(format!("assets/{asset_id}")).params(extra))
            .await?;
        Self::objectify_one(body)
    }

    /// Accounts linked through Plaid. One linked bank may contribute
    /// several accounts.
    pub async fn plaid_accounts(&self, extra: Params) -> Result<Vec<ResultObject>, ClientError> {
        let body = self
            .query(ApiRequest::get("plaid_accounts").params(extra))
            .await?;
        Self::objectify(body, Some("plaid_accounts"))
    }

    /// Crypto balances from both synced and manual accounts.
    pub async fn crypto(&self, extra: Params) -> Result<Vec<ResultObject>, ClientError> {
        let body = self.query(ApiRequest::get("crypto").params(extra)).await?;
        Self::objectify(body, Some("crypto"))
    }

    /// Update a manually-managed crypto balance.
    pub async fn update_crypto(
        &self,
        crypto_id: i64,
        extra: Params,
    ) -> Result<ResultObject, ClientError> {
        let body = self
            .query(ApiRequest::put(format!("crypto/manual/{crypto_id}")).params(extra))
            .await?;
        Self::objectify_one(body)
    }
}
