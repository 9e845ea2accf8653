//! Store Admin CLI
//!
//! Logs in and prints every tenant with its promotions.
//!
//! Usage: `store-admin [subtotal]`. Promotions that apply to an order of
//! `subtotal` placed now are marked with `*`.

use anyhow::Context;
use store_admin::{ClientConfig, ClientError, logger};
use store_shared::AppError;
use store_shared::models::Promotion;
use store_shared::rule::{OrderContext, applicable_promotions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    logger::init_logger(config.log_level.as_deref(), config.log_dir.as_deref());

    let subtotal: f64 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Invalid subtotal: {arg}"))?,
        None => 0.0,
    };

    let client = config.build_http_client()?;
    if !client.is_authenticated() {
        let password = std::env::var("ADMIN_PASSWORD")
            .context("ADMIN_PASSWORD must be set when STORE_ADMIN_TOKEN is not")?;
        client
            .login(&password)
            .await
            .map_err(|e| report("Login", e))?;
    }

    tracing::info!(base_url = %client.base_url(), "Listing tenants");
    let tenants = client
        .list_tenants()
        .await
        .map_err(|e| report("Listing tenants", e))?;

    for tenant in tenants {
        let status = if tenant.is_active { "active" } else { "inactive" };
        println!("{} ({}) [{status}]", tenant.nome_loja, tenant.tenant_id);

        let promotions = client
            .list_promotions(&tenant.tenant_id)
            .await
            .map_err(|e| report(&format!("Listing promotions of {}", tenant.tenant_id), e))?;
        print_promotions(&promotions, subtotal);
    }

    Ok(())
}

/// Log a failed call with its error code and hand it on as an `AppError`
fn report(action: &str, err: ClientError) -> anyhow::Error {
    let err = AppError::from(err);
    tracing::error!(
        code = %err.code,
        kind = err.code.message(),
        details = ?err.details,
        "{action} failed: {err}"
    );
    anyhow::Error::new(err).context(format!("{action} failed"))
}

fn print_promotions(promotions: &[Promotion], subtotal: f64) {
    let today = OrderContext::now(subtotal);
    let applicable: Vec<i64> = applicable_promotions(promotions, &today)
        .iter()
        .map(|p| p.id_promocao)
        .collect();

    for promotion in promotions {
        let condition = match promotion.condition() {
            Ok(Some(c)) => c.to_value().to_string(),
            Ok(None) => "-".to_string(),
            Err(e) => invalid_rule(e),
        };
        let action = match promotion.action() {
            Ok(Some(a)) => a.to_value().to_string(),
            Ok(None) => "-".to_string(),
            Err(e) => invalid_rule(e),
        };
        let marker = if applicable.contains(&promotion.id_promocao) {
            "*"
        } else {
            " "
        };
        println!(
            "  {marker} #{} {}  if {condition} then {action}",
            promotion.id_promocao, promotion.nome_promocao
        );
    }
}

fn invalid_rule(err: AppError) -> String {
    tracing::warn!(code = %err.code, details = ?err.details, "{err}");
    format!("invalid ({err})")
}
