use clap::Parser;
use small_qa::clients::{HfTableQaClient, HfTranslationClient};
use small_qa::config::{CliConfig, ServiceConfig};
use small_qa::core::QaService;
use small_qa::server;
use small_qa::utils::{logger, validation::Validate};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting small-qa service");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入配置：有配置檔用配置檔，否則從環境變數組出預設配置
    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 單一 reqwest Client，兩個上游客戶端共用連線池
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.upstream.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout));
    }
    let http_client = builder.build()?;

    let translator = HfTranslationClient::new(
        http_client.clone(),
        config.upstream.translation_endpoint.clone(),
        config.upstream.api_token.clone(),
    );
    let answerer = HfTableQaClient::new(
        http_client,
        config.upstream.table_qa_endpoint.clone(),
        config.upstream.api_token.clone(),
    );
    let service = Arc::new(QaService::new(translator, answerer));

    let routes = server::routes(service, PathBuf::from(&config.server.index_path));

    let port = config.server.port;
    tracing::info!("🚀 Server starting on port {}", port);
    tracing::info!("Landing page: http://localhost:{}/", port);
    tracing::info!("QA endpoint: POST http://localhost:{}/jawab", port);

    warp::serve(routes).run(([0, 0, 0, 0], port)).await;

    Ok(())
}

fn load_config(cli: &CliConfig) -> small_qa::Result<ServiceConfig> {
    match &cli.config {
        Some(path) => ServiceConfig::from_file(path),
        None => ServiceConfig::from_env(),
    }
}
