use crate::llm::TextGenerator;
use crate::stt::SpeechToText;
use std::sync::Arc;

/// Shared application state for HTTP handlers
///
/// The two upstream clients are injected here rather than constructed as
/// process globals, so tests can swap in doubles.
#[derive(Clone)]
pub struct AppState {
    pub stt: Arc<dyn SpeechToText>,
    pub llm: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(stt: Arc<dyn SpeechToText>, llm: Arc<dyn TextGenerator>) -> Self {
        Self { stt, llm }
    }
}
