//! Product Option Model (opcional / adicional)

use serde::{Deserialize, Serialize};

/// Product option entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductOption {
    pub id_opcional: i64,
    pub tenant_id: String,
    pub nome_opcional: String,
    /// Free-form grouping, e.g. "Adicional"
    #[serde(default)]
    pub tipo_opcional: Option<String>,
    #[serde(default)]
    pub preco_adicional: f64,
}

/// Create option payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductOptionCreate {
    pub nome_opcional: String,
    pub tipo_opcional: Option<String>,
    pub preco_adicional: f64,
}

/// Update option payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductOptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_opcional: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_opcional: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preco_adicional: Option<f64>,
}
