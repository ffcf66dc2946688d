//! Headless entry point: connects to the back-office API and loads the
//! first page of every resource list, reporting results through tracing.

use std::time::Duration;

use anyhow::Context;
use client::{
    ApiClient, PaymentsClient, PermissionsClient, ProductsClient, ResourceApi, RolesClient,
};
use console::config::Config;
use console::context::ListContext;
use console::list::ListController;
use console::logging::init_logging;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        api = %config.api.base_url,
        "Starting Back Office console"
    );

    let api = ApiClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.request_timeout_secs),
    )
    .context("Failed to build API client")?;

    report(PaymentsClient::new(api.clone())).await;
    report(ProductsClient::new(api.clone())).await;
    report(PermissionsClient::new(api.clone())).await;
    report(RolesClient::new(api)).await;

    Ok(())
}

/// Loads the first page of one resource list and logs the outcome.
async fn report<R>(client: R)
where
    R: ResourceApi,
    R::Filter: Default,
{
    let mut list = ListController::new(client, ListContext::default());
    list.load().await;

    match list.error() {
        Some(error) => info!(
            resource = list.resource_name(),
            error = error,
            "list load failed"
        ),
        None => info!(
            resource = list.resource_name(),
            items = list.items().len(),
            total_pages = list.pagination().map(|p| p.total_pages).unwrap_or(0),
            "list loaded"
        ),
    }
}
