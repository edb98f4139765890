use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use parser_factura::application::services::InvoiceService;
use parser_factura::infrastructure::llm::ProviderFactory;
use parser_factura::infrastructure::observability::{TracingConfig, init_tracing};
use parser_factura::infrastructure::text_processing::PdfAdapter;
use parser_factura::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.json,
    ));

    // A misconfigured provider must stop the process before it binds.
    let provider = ProviderFactory::create(&settings.ai).context("Failed to initialize AI provider")?;
    tracing::info!(provider = provider.name(), "AI client initialized");

    let invoice_service = Arc::new(InvoiceService::new(Arc::new(PdfAdapter::new()), provider));

    let state = AppState {
        invoice_service,
        cors: settings.cors.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Invoice endpoint available at http://{}/procesar-factura", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
