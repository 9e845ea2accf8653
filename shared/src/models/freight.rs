//! Freight distance Model

use serde::{Deserialize, Deserializer, Serialize};

/// Freight request: customer coordinates for a tenant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FreightRequest {
    pub tenant_id: String,
    pub cliente_lat: f64,
    pub cliente_lng: f64,
}

/// Freight quote returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FreightQuote {
    pub distancia_km: f64,
    pub origem: FreightOrigin,
    pub destino: Coordinates,
}

/// Store location (coordinates stored as text on the tenant)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FreightOrigin {
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default, deserialize_with = "loose_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "loose_f64")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Accept a number, a numeric string, or null
fn loose_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Number(f64),
        Text(String),
    }

    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Loose::Number(n)) => Ok(Some(n)),
        Some(Loose::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid coordinate: {s}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quote_with_text_origin() {
        let quote: FreightQuote = serde_json::from_value(json!({
            "distancia_km": 4.2,
            "origem": {"endereco": "Rua A, 1", "latitude": "-23.5", "longitude": "-46.6"},
            "destino": {"latitude": -23.6, "longitude": -46.7}
        }))
        .unwrap();

        assert_eq!(quote.origem.latitude, Some(-23.5));
        assert_eq!(quote.origem.longitude, Some(-46.6));
        assert_eq!(quote.destino.latitude, -23.6);
    }

    #[test]
    fn test_quote_with_null_origin() {
        let quote: FreightQuote = serde_json::from_value(json!({
            "distancia_km": 1.0,
            "origem": {"endereco": null, "latitude": null, "longitude": 10},
            "destino": {"latitude": 0.0, "longitude": 0.0}
        }))
        .unwrap();

        assert_eq!(quote.origem.latitude, None);
        assert_eq!(quote.origem.longitude, Some(10.0));
    }
}
