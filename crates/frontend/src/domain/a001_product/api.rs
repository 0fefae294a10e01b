use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::{NewProduct, Product, ProductId, ProductRecord};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::{ApiConfig, ApiError};

/// Products REST API
///
/// Futures are not `Send`: requests run on the browser's single thread.
#[async_trait(?Send)]
pub trait ProductApi {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ApiError>;

    /// `POST /products`
    async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError>;

    /// `PUT /products/{id}` with the full product as body
    async fn update_product(&self, product: &Product) -> Result<(), ApiError>;

    /// `DELETE /products/{id}`
    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError>;
}

/// [`ProductApi`] over `fetch`
#[derive(Clone, Debug)]
pub struct HttpProductApi {
    config: ApiConfig,
}

impl HttpProductApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        let response = Request::get(&self.config.products_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::Request)?;
        ensure_ok(&response)?;

        response
            .json::<Vec<ProductRecord>>()
            .await
            .map_err(ApiError::Decode)
    }

    async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        let response = Request::post(&self.config.products_url())
            .json(product)
            .map_err(ApiError::Encode)?
            .send()
            .await
            .map_err(ApiError::Request)?;
        ensure_ok(&response)
    }

    async fn update_product(&self, product: &Product) -> Result<(), ApiError> {
        let response = Request::put(&self.config.product_url(&product.id))
            .json(product)
            .map_err(ApiError::Encode)?
            .send()
            .await
            .map_err(ApiError::Request)?;
        ensure_ok(&response)
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let response = Request::delete(&self.config.product_url(id))
            .send()
            .await
            .map_err(ApiError::Request)?;
        ensure_ok(&response)
    }
}
