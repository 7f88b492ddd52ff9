use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 以欄位為單位的表格：header 名稱對應該欄所有列的值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    pub columns: HashMap<String, Vec<String>>,
}

impl Table {
    /// 從 CSV 字串建立表格，第一列視為 header
    pub fn from_csv(data: &str) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(data.as_bytes());

        // 空輸入回傳空表格，不視為錯誤
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Ok(Table::default());
        }

        let mut columns: HashMap<String, Vec<String>> = headers
            .iter()
            .map(|header| (header.clone(), Vec::new()))
            .collect();

        for record in reader.records() {
            let record = record?;
            for (i, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(i) {
                    if let Some(column) = columns.get_mut(header) {
                        column.push(value.to_string());
                    }
                }
            }
        }

        Ok(Table { columns })
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.values().next().map(Vec::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_csv_columns_match_headers() {
        let csv_text = "name,age\nAlice,30\nBob,25";
        let table = Table::from_csv(csv_text).unwrap();

        assert_eq!(table.column_count(), 2);
        assert_eq!(
            table.columns.get("name").unwrap(),
            &vec!["Alice".to_string(), "Bob".to_string()]
        );
        assert_eq!(
            table.columns.get("age").unwrap(),
            &vec!["30".to_string(), "25".to_string()]
        );
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_from_csv_preserves_row_order() {
        let csv_text = "id\n3\n1\n2";
        let table = Table::from_csv(csv_text).unwrap();

        assert_eq!(
            table.columns.get("id").unwrap(),
            &vec!["3".to_string(), "1".to_string(), "2".to_string()]
        );
    }

    #[test]
    fn test_from_csv_empty_input() {
        let table = Table::from_csv("").unwrap();
        assert!(table.columns.is_empty());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_from_csv_header_only() {
        let table = Table::from_csv("name,age").unwrap();

        assert_eq!(table.column_count(), 2);
        assert!(table.columns.get("name").unwrap().is_empty());
        assert!(table.columns.get("age").unwrap().is_empty());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_from_csv_ragged_rows_fail() {
        let csv_text = "name,age\nAlice,30\nBob";
        assert!(Table::from_csv(csv_text).is_err());
    }

    #[test]
    fn test_from_csv_quoted_fields() {
        let csv_text = "name,note\n\"Alice, A.\",\"said \"\"hi\"\"\"";
        let table = Table::from_csv(csv_text).unwrap();

        assert_eq!(
            table.columns.get("name").unwrap(),
            &vec!["Alice, A.".to_string()]
        );
        assert_eq!(
            table.columns.get("note").unwrap(),
            &vec!["said \"hi\"".to_string()]
        );
    }

    #[test]
    fn test_table_serializes_as_column_map() {
        let csv_text = "name\nAlice";
        let table = Table::from_csv(csv_text).unwrap();
        let json = serde_json::to_value(&table).unwrap();

        assert_eq!(json, serde_json::json!({"name": ["Alice"]}));
    }
}
