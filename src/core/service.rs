use crate::core::answer::{render_answer, AnswerResult};
use crate::core::ports::{TableAnswerer, Translator};
use crate::core::table::Table;
use crate::utils::error::Result;

/// 單次問答的最終結果
#[derive(Debug, Clone)]
pub struct QaOutcome {
    pub answer: String,
    pub coordinates: Vec<(usize, usize)>,
    pub cells: Vec<String>,
    pub aggregator: String,
}

/// 問答服務：解析 CSV → 翻譯問題 → 呼叫 Table-QA → 整理答案
pub struct QaService<T: Translator, A: TableAnswerer> {
    translator: T,
    answerer: A,
}

impl<T: Translator, A: TableAnswerer> QaService<T, A> {
    pub fn new(translator: T, answerer: A) -> Self {
        Self {
            translator,
            answerer,
        }
    }

    /// 任一步驟失敗即中止，不回傳部分結果
    pub async fn answer(&self, csv_text: &str, ask: &str) -> Result<QaOutcome> {
        let table = Table::from_csv(csv_text)?;
        tracing::debug!(
            "📋 Parsed table: {} columns, {} rows",
            table.column_count(),
            table.row_count()
        );

        let translated_query = self.translator.translate(ask).await?;
        tracing::debug!("🌐 Translated query: {}", translated_query);

        let result = self.answerer.ask(&table, &translated_query).await?;
        tracing::debug!(
            "📡 Table QA answered with aggregator '{}' over {} cells",
            result.aggregator,
            result.cells.len()
        );

        Ok(Self::into_outcome(result))
    }

    fn into_outcome(result: AnswerResult) -> QaOutcome {
        let answer = render_answer(&result);
        QaOutcome {
            answer,
            coordinates: result.coordinates,
            cells: result.cells,
            aggregator: result.aggregator,
        }
    }
}
