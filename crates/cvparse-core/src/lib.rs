pub mod backend;
pub mod llm;

pub use backend::{BackendError, PageBlocks, PdfBackend, TextBlock};
pub use llm::{LlmClient, LlmConfig, LlmError};
