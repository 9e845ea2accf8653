use crate::http::multipart_form;
use crate::{ClientResult, HttpClient};
use reqwest::Method;
use store_shared::models::{FileUpload, MessageResponse, Product};

impl HttpClient {
    pub async fn list_products(&self, tenant_id: &str) -> ClientResult<Vec<Product>> {
        self.get(&format!("products/{tenant_id}")).await
    }

    /// Replace the tenant's catalog with the rows of a spreadsheet
    pub async fn upload_products(
        &self,
        tenant_id: &str,
        sheet: &FileUpload,
    ) -> ClientResult<MessageResponse> {
        let form = multipart_form(Vec::new(), vec![("file", sheet)])?;
        let response: MessageResponse = self
            .multipart_query(
                Method::POST,
                "upload-products",
                &[("tenant_id", tenant_id)],
                form,
            )
            .await?;
        tracing::info!(tenant_id, message = %response.message, "Product sheet imported");
        Ok(response)
    }
}
