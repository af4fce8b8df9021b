use stratus::{ProviderId, Stratus};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the aggregator with the default roster and configuration.
    let stratus = Stratus::builder().build()?;

    // 2. Fan out to every provider; cache misses resolve concurrently.
    println!("Checking provider status...");
    let all = stratus.get_all().await;

    // 3. Render one line per provider, in roster order.
    for provider in ProviderId::ALL {
        let report = &all[&provider];
        match &report.error {
            Some(message) => println!("{:<30} could not verify: {message}", report.provider),
            None => {
                let suffix = if report.note.is_some() { " (assumed)" } else { "" };
                println!(
                    "{:<30} {} - {} services{suffix}",
                    report.provider,
                    report.overall,
                    report.services.len(),
                );
            }
        }
    }

    // 4. Release the pooled connection.
    stratus.shutdown();
    Ok(())
}
