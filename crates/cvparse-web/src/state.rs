use cvparse_core::LlmConfig;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub llm_config: LlmConfig,
}
