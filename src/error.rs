use std::io;

pub type GtransResult<T> = Result<T, GtransError>;

#[derive(Debug, thiserror::Error)]
pub enum GtransError {
    /// Missing API key, unresolvable target language, or unusable endpoint settings.
    #[error("{0}")]
    ConfigurationMissing(String),
    /// Any failure talking to the detection/translation API.
    #[error("fail to call {api} API: {detail}")]
    UpstreamFailure { api: &'static str, detail: String },
    /// Reading the input text failed.
    #[error(transparent)]
    InputFailure(io::Error),
    #[error("invalid target language {0:?} (expected a language code such as en, ja, zh-TW)")]
    InvalidLanguage(String),
    #[error("failed to write output: {0}")]
    OutputFailure(#[source] io::Error),
    #[error("failed to open browser: {0}")]
    BrowserFailure(#[source] io::Error),
}

impl GtransError {
    pub fn upstream(api: &'static str, err: anyhow::Error) -> Self {
        GtransError::UpstreamFailure {
            api,
            detail: format!("{err:#}"),
        }
    }
}
