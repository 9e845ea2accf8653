//! Tenant (store) Model

use super::FileUpload;
use serde::{Deserialize, Serialize};

/// Tenant entity (loja)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tenant {
    pub id: i64,
    /// Instance key, used as the tenant id in every other endpoint
    pub tenant_id: String,
    pub nome_loja: String,
    /// Store description fed to the assistant
    #[serde(default)]
    pub config_ai: Option<String>,
    #[serde(default)]
    pub evolution_api_key: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Personality name
    #[serde(default)]
    pub id_pronpt: Option<String>,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    /// Stored as text by the backend
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub menu_image_url: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Tenant {
    /// Whether the store has coordinates usable for freight
    pub fn has_coordinates(&self) -> bool {
        let parses = |v: &Option<String>| v.as_deref().is_some_and(|s| s.trim().parse::<f64>().is_ok());
        parses(&self.latitude) && parses(&self.longitude)
    }
}

/// Create tenant payload (sent as multipart form)
#[derive(Debug, Clone)]
pub struct TenantCreate {
    pub tenant_id: String,
    pub nome_loja: String,
    pub ia_personality: String,
    pub ai_prompt_description: String,
    pub endereco: String,
    pub cep: String,
    pub latitude: f64,
    pub longitude: f64,
    pub freight_config: Option<String>,
    /// Store description text file
    pub loja_txt: FileUpload,
    /// Product spreadsheet
    pub produtos_excel: FileUpload,
    pub menu_image: Option<FileUpload>,
}

impl TenantCreate {
    /// Text fields of the multipart form, in submission order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("tenant_id", self.tenant_id.clone()),
            ("nome_loja", self.nome_loja.clone()),
            ("ia_personality", self.ia_personality.clone()),
            ("ai_prompt_description", self.ai_prompt_description.clone()),
            ("endereco", self.endereco.clone()),
            ("cep", self.cep.clone()),
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
        ];
        if let Some(freight) = &self.freight_config {
            fields.push(("freight_config", freight.clone()));
        }
        fields
    }

    /// File parts of the multipart form
    pub fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        let mut files = vec![("loja_txt", &self.loja_txt), ("produtos_excel", &self.produtos_excel)];
        if let Some(image) = &self.menu_image {
            files.push(("menu_image", image));
        }
        files
    }
}

/// Update tenant payload (sent as multipart form, unset fields are omitted)
#[derive(Debug, Clone, Default)]
pub struct TenantUpdate {
    pub nome_loja: Option<String>,
    pub ia_personality: Option<String>,
    pub ai_prompt_description: Option<String>,
    pub endereco: Option<String>,
    pub cep: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub url: Option<String>,
    pub is_active: Option<bool>,
    pub freight_config: Option<String>,
    pub loja_txt: Option<FileUpload>,
    pub menu_image: Option<FileUpload>,
}

impl TenantUpdate {
    /// Update that only replaces the menu image
    pub fn menu_image(image: FileUpload) -> Self {
        Self {
            menu_image: Some(image),
            ..Default::default()
        }
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("nome_loja", &self.nome_loja),
            ("ia_personality", &self.ia_personality),
            ("ai_prompt_description", &self.ai_prompt_description),
            ("endereco", &self.endereco),
            ("cep", &self.cep),
            ("url", &self.url),
            ("freight_config", &self.freight_config),
        ];
        let mut fields: Vec<(&'static str, String)> = text
            .into_iter()
            .filter_map(|(name, value)| value.clone().map(|v| (name, v)))
            .collect();
        if let Some(lat) = self.latitude {
            fields.push(("latitude", lat.to_string()));
        }
        if let Some(lng) = self.longitude {
            fields.push(("longitude", lng.to_string()));
        }
        if let Some(active) = self.is_active {
            fields.push(("is_active", active.to_string()));
        }
        fields
    }

    pub fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        let mut files = Vec::new();
        if let Some(txt) = &self.loja_txt {
            files.push(("loja_txt", txt));
        }
        if let Some(image) = &self.menu_image {
            files.push(("menu_image", image));
        }
        files
    }
}

/// Toggle status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantStatus {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tenant_defaults() {
        let tenant: Tenant = serde_json::from_value(json!({
            "id": 1,
            "tenant_id": "pizzaria",
            "nome_loja": "Pizzaria do Zé",
            "latitude": "-23.55",
            "longitude": "-46.63"
        }))
        .unwrap();

        assert!(tenant.is_active);
        assert!(tenant.has_coordinates());
        assert_eq!(tenant.menu_image_url, None);
    }

    #[test]
    fn test_missing_coordinates() {
        let tenant: Tenant = serde_json::from_value(json!({
            "id": 2,
            "tenant_id": "x",
            "nome_loja": "X",
            "latitude": ""
        }))
        .unwrap();
        assert!(!tenant.has_coordinates());
    }

    #[test]
    fn test_update_form_omits_unset() {
        let update = TenantUpdate {
            nome_loja: Some("Nova".to_string()),
            is_active: Some(false),
            ..Default::default()
        };
        assert_eq!(
            update.form_fields(),
            vec![("nome_loja", "Nova".to_string()), ("is_active", "false".to_string())]
        );
        assert!(update.files().is_empty());
    }

    #[test]
    fn test_menu_image_update_has_single_file() {
        let update = TenantUpdate::menu_image(FileUpload::new("menu.png", vec![1, 2, 3]));
        assert!(update.form_fields().is_empty());
        let files = update.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "menu_image");
    }
}
