use serde::{Deserialize, Serialize};

/// Table-QA 端點回傳的結構化答案
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerResult {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub coordinates: Vec<(usize, usize)>,
    #[serde(default)]
    pub cells: Vec<String>,
    #[serde(default)]
    pub aggregator: String,
}

/// 根據 aggregator 將答案 cells 整理成最終答案文字。
/// SUM 時把每個 cell 當浮點數加總，無法解析的 cell 記錄後略過。
pub fn render_answer(result: &AnswerResult) -> String {
    if result.aggregator == "SUM" {
        let mut total = 0.0f64;
        for cell in &result.cells {
            match cell.trim().parse::<f64>() {
                Ok(value) => total += value,
                Err(e) => {
                    tracing::warn!("🔶 Skipping non-numeric cell {:?} in SUM: {}", cell, e);
                }
            }
        }
        format!("{:.6}", total)
    } else {
        format!("AI Model Response: \n[{}]", result.cells.join(" "))
    }
}
