use crate::{ClientResult, HttpClient};
use store_shared::models::{FreightQuote, FreightRequest};

impl HttpClient {
    /// Distance from the tenant's store to the customer
    pub async fn calculate_freight(&self, request: &FreightRequest) -> ClientResult<FreightQuote> {
        self.post_query("calcular-frete", request).await
    }
}
