use crate::client::{ApiRequest, LunchMoney};
use crate::domain::value::required_id;
use crate::domain::{is_truthy, ResultObject};
use crate::error::ClientError;
use crate::params::Params;

impl LunchMoney {
    /// All categories on the account.
    pub async fn categories(&self, extra: Params) -> Result<Vec<ResultObject>, ClientError> {
        let body = self.query(ApiRequest::get("categories").params(extra)).await?;
        Self::objectify(body, Some("categories"))
    }

    /// A single category, including its children when it is a group.
    pub async fn category(
        &self,
        category_id: i64,
        extra: Params,
    ) -> Result<ResultObject, ClientError> {
        let body = self
            .query(ApiRequest::get(format!("categories/{category_id}")).params(extra))
            .await?;
        Self::objectify_one(body)
    }

    /// Create a category and return its id. `name` must be 1-40 characters.
    pub async fn create_category(
        &self,
        name: impl Into<String>,
        extra: Params,
    ) -> Result<i64, ClientError> {
        let params = Params::new().with("name", name.into()).merge(extra);
        let body = self
            .query(ApiRequest::post("categories").params(params))
            .await?;
        required_id(&body, "category_id")
    }

    pub async fn update_category(
        &self,
        category_id: i64,
        extra: Params,
    ) -> Result<bool, ClientError> {
        let body = self
            .query(ApiRequest::put(format!("categories/{category_id}")).params(extra))
            .await?;
        Ok(is_truthy(&body))
    }

    /// Delete a category. The API refuses while budgets or rules depend on it
    /// unless `force` is passed in `extra`.
    pub async fn delete_category(
        &self,
        category_id: i64,
        extra: Params,
    ) -> Result<bool, ClientError> {
        let path = match extra.get("force").map(is_truthy) {
            Some(true) => format!("categories/{category_id}/force"),
            _ => format!("categories/{category_id}"),
        };
        let params: Params = extra
            .into_inner()
            .into_iter()
            .filter(|(key, _)| key != "force")
            .collect();
        let body = self.query(ApiRequest::delete(path).params(params)).await?;
        Ok(is_truthy(&body))
    }
}
