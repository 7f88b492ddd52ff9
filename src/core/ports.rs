use crate::core::answer::AnswerResult;
use crate::core::table::Table;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String>;
}

#[async_trait]
pub trait TableAnswerer: Send + Sync {
    async fn ask(&self, table: &Table, query: &str) -> Result<AnswerResult>;
}
