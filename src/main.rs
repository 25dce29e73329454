use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use stock_change_tui::{
    api::MarketData,
    app::{App, Dashboard},
    config::Args,
    logging,
    models::DashboardRequest,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();
    logging::init(&args.log_file)?;

    info!(provider = args.provider.to_str(), "starting");

    let dashboard = Dashboard::new(MarketData::new(args.provider));

    if args.json {
        let (request, notice) = DashboardRequest::from_inputs(&args.symbols, &args.lookback);
        let mut report = dashboard.run(&request).await;
        if let Some(notice) = notice {
            report.prepend_notice(notice);
        }
        let json = serde_json::to_string_pretty(&report)
            .with_context(|| "Failed to serialize report")?;
        println!("{}", json);
        return Ok(());
    }

    let mut app = App::new(dashboard, &args.symbols, &args.lookback);
    app.run().await?;

    Ok(())
}
