use crate::http::multipart_form;
use crate::{ClientResult, HttpClient};
use reqwest::Method;
use store_shared::models::{FileUpload, Tenant, TenantCreate, TenantStatus, TenantUpdate};

impl HttpClient {
    pub async fn list_tenants(&self) -> ClientResult<Vec<Tenant>> {
        self.get("tenants/").await
    }

    pub async fn get_tenant(&self, tenant_id: &str) -> ClientResult<Tenant> {
        self.get(&format!("tenants/{tenant_id}")).await
    }

    /// Register a store with its description file and product sheet
    pub async fn create_tenant(&self, tenant: &TenantCreate) -> ClientResult<Tenant> {
        let form = multipart_form(tenant.form_fields(), tenant.files())?;
        let created: Tenant = self.multipart(Method::POST, "tenants/", form).await?;
        tracing::info!(tenant_id = %created.tenant_id, "Tenant created");
        Ok(created)
    }

    pub async fn update_tenant(&self, tenant_id: &str, update: &TenantUpdate) -> ClientResult<Tenant> {
        let form = multipart_form(update.form_fields(), update.files())?;
        self.multipart(Method::PUT, &format!("tenants/{tenant_id}"), form)
            .await
    }

    /// Store description text (`loja.txt`) as uploaded
    pub async fn download_store_description(&self, tenant_id: &str) -> ClientResult<String> {
        self.get_text(&format!("tenants/{tenant_id}/loja_txt")).await
    }

    /// Replace only the menu image
    pub async fn upload_menu_image(&self, tenant_id: &str, image: FileUpload) -> ClientResult<Tenant> {
        self.update_tenant(tenant_id, &TenantUpdate::menu_image(image))
            .await
    }

    pub async fn set_tenant_active(&self, tenant_id: &str, is_active: bool) -> ClientResult<Tenant> {
        let tenant: Tenant = self
            .put(
                &format!("tenants/{tenant_id}/toggle-status"),
                &TenantStatus { is_active },
            )
            .await?;
        tracing::info!(tenant_id, is_active, "Tenant status changed");
        Ok(tenant)
    }

    pub async fn delete_tenant(&self, tenant_id: &str) -> ClientResult<()> {
        let _: serde_json::Value = self.delete(&format!("tenants/{tenant_id}")).await?;
        tracing::info!(tenant_id, "Tenant deleted");
        Ok(())
    }
}
