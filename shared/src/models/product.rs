//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity, imported from the tenant's spreadsheet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Display price as written in the sheet
    pub price: String,
    pub retrieval_key: String,
    pub tenant_id: String,
    #[serde(default)]
    pub publico_alvo: Option<String>,
    #[serde(default)]
    pub principais_funcionalidades: Option<String>,
    #[serde(default)]
    pub limitacoes_observacoes: Option<String>,
    #[serde(default)]
    pub produto_promocao: Option<bool>,
    #[serde(default)]
    pub preco_promotions: Option<String>,
    #[serde(default)]
    pub combo_product: Option<String>,
}

/// Backend acknowledgement message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}
