pub const API_KEY_ENV: &str = "GOOGLE_TRANSLATE_API_KEY";
pub const TARGET_LANG_ENV: &str = "GOOGLE_TRANSLATE_LANG";
pub const SECOND_LANG_ENV: &str = "GOOGLE_TRANSLATE_SECOND_LANG";
pub const API_BASE_URL_ENV: &str = "GTRANS_API_BASE_URL";

/// Locale variables consulted for the target language, in POSIX precedence order.
pub const LOCALE_ENVS: [&str; 3] = ["LANGUAGE", "LC_ALL", "LANG"];

pub const DEFAULT_API_BASE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Read-only view of the environment.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;

    /// Like [`Env::var`], but trimmed and with empty values treated as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Explicit target language (`--to`); empty means auto-detect.
    pub target: Option<String>,
    /// Open Google Translate in the browser instead of printing.
    pub open: bool,
    /// Positional input words.
    pub words: Vec<String>,
}

/// Environment-derived settings, read once at startup.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub api_key: Option<String>,
    pub second_lang: Option<String>,
    pub api_base_url: String,
}

impl RuntimeConfig {
    pub fn from_env(env: &impl Env) -> Self {
        Self {
            api_key: env.non_empty(API_KEY_ENV),
            second_lang: env.non_empty(SECOND_LANG_ENV),
            api_base_url: env
                .non_empty(API_BASE_URL_ENV)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}
