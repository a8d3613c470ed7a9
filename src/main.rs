use clap::Parser;
use weather_proxy::utils::logger;
use weather_proxy::{check_settings, CliConfig, ProxyService, ReqwestUpstream};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 日誌寫到 stderr，stdout 只留回應
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting weather-proxy CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = config.settings()?;
    match check_settings(&settings) {
        Ok(None) => {}
        Ok(Some(warning)) => tracing::warn!("⚠️  {} (/weather will answer 500)", warning),
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }

    let event = config.event()?;
    let service = ProxyService::new(settings, ReqwestUpstream::new()?);
    let response = service.handle(event).await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.status_code >= 500 {
        std::process::exit(1);
    }

    Ok(())
}
