pub mod answer;
pub mod ports;
pub mod service;
pub mod table;

pub use answer::{render_answer, AnswerResult};
pub use ports::{TableAnswerer, Translator};
pub use service::{QaOutcome, QaService};
pub use table::Table;
