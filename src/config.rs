use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
    pub static_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiConfig {
    pub api_base: String,
    pub whisper_model: String,
    pub chat_model: String,
    pub temperature: f32,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Read the OpenAI credential from the process environment.
    ///
    /// A missing key is not a startup failure: each request that needs it
    /// reports a 500 instead, so the service can come up without credentials.
    pub fn api_key_from_env() -> Option<String> {
        std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
    }
}
