use std::sync::Arc;

use anyhow::Context;

use dromed_infra::{CsvFileSource, Settings};
use dromed_inventory::{ReportAssembler, RestockPolicy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dromed_observability::init();

    let settings = Settings::from_env().context("failed to read DROMED_* settings")?;
    tracing::info!(data_file = %settings.data_file.display(), "serving inventory sheet");

    let source = Arc::new(CsvFileSource::new(&settings.data_file));
    let assembler = ReportAssembler::new(settings.thresholds, RestockPolicy::default());
    let app = dromed_api::app::build_app(source, assembler);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
