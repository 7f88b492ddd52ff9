pub mod service_config;

use clap::Parser;

pub use service_config::{ServerConfig, ServiceConfig, UpstreamConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-qa")]
#[command(about = "A small table question answering service over CSV data")]
pub struct CliConfig {
    /// TOML 配置檔路徑；未指定時從環境變數讀取
    #[arg(long)]
    pub config: Option<String>,

    /// 覆寫配置中的監聽 port
    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON (for container deployments)")]
    pub log_json: bool,
}
