mod cli;
mod consts;
mod settings;

pub mod contract;
pub mod publisher;

pub use cli::Args;
pub use settings::{ApiSettings, Settings, SourceSettings};

use anyhow::Context;
use contract::LoadOptions;
use publisher::{HttpApiClient, Publisher, Summary};

/// Loads the contracts file and publishes every contract in it.
///
/// Fails before any request is sent if the contracts file cannot be loaded.
/// Failed registry calls do not fail the run; they are reported in the
/// returned [`Summary`].
pub async fn run(settings: &Settings) -> anyhow::Result<Summary> {
    let contracts = contract::load(
        &settings.source.path,
        &LoadOptions::from(&settings.source),
    )
    .await
    .context("loading contracts")?;

    let client = HttpApiClient::try_new(&settings.api)?;
    log::info!(
        "publishing {} contracts to {}",
        contracts.len(),
        client.endpoint()
    );
    let summary = Publisher::new(client).publish_all(&contracts).await;

    if summary.has_failures() {
        log::warn!("{summary}");
        for report in summary.incomplete() {
            let failed = report
                .failures()
                .map(|(kind, _)| kind.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            log::warn!(
                "contract '{}' is partially published, failed calls: {failed}",
                report.contract_name
            );
        }
    } else {
        log::info!("{summary}");
    }

    Ok(summary)
}
