use crate::{ClientResult, HttpClient};
use store_shared::models::{ProductOption, ProductOptionCreate, ProductOptionUpdate};

impl HttpClient {
    pub async fn list_options(&self, tenant_id: &str) -> ClientResult<Vec<ProductOption>> {
        self.get(&format!("opcionais/{tenant_id}")).await
    }

    pub async fn create_option(
        &self,
        tenant_id: &str,
        option: &ProductOptionCreate,
    ) -> ClientResult<ProductOption> {
        self.post(&format!("opcionais/{tenant_id}"), option).await
    }

    pub async fn update_option(
        &self,
        tenant_id: &str,
        option_id: i64,
        update: &ProductOptionUpdate,
    ) -> ClientResult<ProductOption> {
        self.put(&format!("opcionais/{tenant_id}/{option_id}"), update)
            .await
    }

    pub async fn delete_option(&self, tenant_id: &str, option_id: i64) -> ClientResult<()> {
        let _: serde_json::Value = self
            .delete(&format!("opcionais/{tenant_id}/{option_id}"))
            .await?;
        Ok(())
    }
}
