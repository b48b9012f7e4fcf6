pub mod config;
pub mod http;
pub mod llm;
pub mod stt;
pub mod summary;

pub use config::Config;
pub use http::{create_router, AppState};
pub use llm::{LlmError, OpenAiChat, TextGenerator};
pub use stt::{OpenAiStt, SpeechToText, SttError, Transcription, TranscriptSegment};
pub use summary::{SummaryType, PROMPT_SPECS};
