pub mod clients;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use clients::{HfTableQaClient, HfTranslationClient};
pub use config::{CliConfig, ServiceConfig};
pub use core::{QaOutcome, QaService, Table};
pub use utils::error::{QaError, Result};
