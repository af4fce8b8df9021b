use tracing_subscriber::EnvFilter;

use stratus::Stratus;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Install a subscriber so the engine's fetch/cache traces are
    //    visible; control verbosity with RUST_LOG (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 2. Provider name from the command line, defaulting to AWS. Lookup is
    //    case-insensitive; unknown names come back as error reports.
    let name = std::env::args().nth(1).unwrap_or_else(|| "aws".to_string());

    let stratus = Stratus::builder().build()?;
    let report = stratus.get_provider_status(&name).await;

    if let Some(message) = &report.error {
        println!("{}: {message}", report.provider);
    } else {
        println!("{} - {}", report.provider, report.overall);
        for service in &report.services {
            println!("  [{:?}] {} ({})", service.status, service.name, service.region);
        }
        if let Some(note) = &report.note {
            println!("  note: {note}");
        }
    }

    // 3. A second lookup inside the freshness window is served from cache;
    //    watch the traces to see the difference.
    let _ = stratus.get_provider_status(&name).await;

    stratus.shutdown();
    Ok(())
}
