//! Client for the remote product API.

use kelontong_products::{Product, ProductCreateInput, ProductId};
use reqwest::{RequestBuilder, Url};

use crate::error::{StoreError, messages};

/// Thin client over the storefront's product endpoints:
///
/// - `GET  {base}/products`
/// - `GET  {base}/products/{id}`
/// - `POST {base}/products`
///
/// Any non-2xx status is a failure.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            token: None,
        }
    }

    pub fn with_token(http: reqwest::Client, base_url: Url, token: String) -> Self {
        Self {
            http,
            base_url,
            token: Some(token),
        }
    }

    /// Fetch the full product list.
    pub async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let url = self.endpoint(&["products"]);
        tracing::debug!(%url, "fetching product list");

        let resp = self.authorize(self.http.get(url)).send().await?;
        if !resp.status().is_success() {
            return Err(StoreError::rejected(
                resp.status().as_u16(),
                messages::PRODUCTS_API_FAILED,
            ));
        }

        Ok(resp.json().await?)
    }

    /// Fetch a single product by identifier.
    ///
    /// Identifiers that cannot be one path segment fail before any request.
    pub async fn get_product(&self, id: &str) -> Result<Product, StoreError> {
        let id = ProductId::parse(id)?;
        let url = self.endpoint(&["products", id.as_str()]);
        tracing::debug!(%url, "fetching product");

        let resp = self.authorize(self.http.get(url)).send().await?;
        if !resp.status().is_success() {
            return Err(StoreError::rejected(
                resp.status().as_u16(),
                messages::FETCH_PRODUCT_FAILED,
            ));
        }

        Ok(resp.json().await?)
    }

    /// Create a product; the API assigns the identifier and echoes the result.
    pub async fn create_product(&self, input: &ProductCreateInput) -> Result<Product, StoreError> {
        let url = self.endpoint(&["products"]);
        tracing::debug!(%url, sku = %input.sku, "creating product");

        let resp = self.authorize(self.http.post(url).json(input)).send().await?;
        if !resp.status().is_success() {
            return Err(StoreError::rejected(
                resp.status().as_u16(),
                messages::CREATE_FAILED,
            ));
        }

        Ok(resp.json().await?)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Append path segments to the base URL, percent-encoding each one.
    /// `.` and `..` are dropped by normalization; callers reject them first.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Only fails for cannot-be-a-base URLs; config only accepts http(s).
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use kelontong_core::DomainError;

    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn endpoint_appends_to_base_path() {
        let api = client("http://localhost:3000/api");
        assert_eq!(
            api.endpoint(&["products"]).as_str(),
            "http://localhost:3000/api/products"
        );
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let api = client("http://localhost:3000/api/");
        assert_eq!(
            api.endpoint(&["products", "42"]).as_str(),
            "http://localhost:3000/api/products/42"
        );
    }

    #[test]
    fn endpoint_encodes_ids_as_one_segment() {
        let api = client("http://shop.test");
        assert_eq!(
            api.endpoint(&["products", "a/b c"]).as_str(),
            "http://shop.test/products/a%2Fb%20c"
        );
        assert_eq!(
            api.endpoint(&["products", "..."]).as_str(),
            "http://shop.test/products/..."
        );
    }

    #[tokio::test]
    async fn get_product_rejects_dot_segments_without_a_request() {
        // Discard port; a request would fail with a network error instead.
        let api = client("http://127.0.0.1:9/api");
        for id in [".", "..", ""] {
            let err = api.get_product(id).await.unwrap_err();
            assert!(
                matches!(err, StoreError::Domain(DomainError::InvalidId(_))),
                "{id:?} gave {err:?}"
            );
        }
    }
}
