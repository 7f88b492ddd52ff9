pub mod tableqa;
pub mod translation;

pub use tableqa::HfTableQaClient;
pub use translation::HfTranslationClient;
