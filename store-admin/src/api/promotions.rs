use crate::{ClientResult, HttpClient};
use store_shared::models::{Promotion, PromotionCreate, PromotionUpdate};

impl HttpClient {
    pub async fn list_promotions(&self, tenant_id: &str) -> ClientResult<Vec<Promotion>> {
        self.get(&format!("promocoes/{tenant_id}")).await
    }

    pub async fn create_promotion(
        &self,
        tenant_id: &str,
        promotion: &PromotionCreate,
    ) -> ClientResult<Promotion> {
        let created: Promotion = self
            .post(&format!("promocoes/{tenant_id}"), promotion)
            .await?;
        tracing::info!(tenant_id, promotion_id = created.id_promocao, "Promotion created");
        Ok(created)
    }

    pub async fn update_promotion(
        &self,
        tenant_id: &str,
        promotion_id: i64,
        update: &PromotionUpdate,
    ) -> ClientResult<Promotion> {
        let updated: Promotion = self
            .put(&format!("promocoes/{tenant_id}/{promotion_id}"), update)
            .await?;
        tracing::info!(tenant_id, promotion_id, "Promotion updated");
        Ok(updated)
    }

    pub async fn delete_promotion(&self, tenant_id: &str, promotion_id: i64) -> ClientResult<()> {
        let _: serde_json::Value = self
            .delete(&format!("promocoes/{tenant_id}/{promotion_id}"))
            .await?;
        tracing::info!(tenant_id, promotion_id, "Promotion deleted");
        Ok(())
    }
}
