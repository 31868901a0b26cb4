use std::io::{Read, Write};

use tracing::debug;

use crate::client::{GoogleTranslateClient, Translator};
use crate::config::{API_KEY_ENV, Env, RuntimeConfig, Settings};
use crate::error::{GtransError, GtransResult};
use crate::output::{BrowserLauncher, open_in_browser, write_translation};
use crate::resolve::{normalize_lang_code, resolve_target_lang};
use crate::switch::apply_second_language;

/// Whether the input text has to come from stdin (the words join to nothing).
pub fn reads_stdin(words: &[String]) -> bool {
    words.join(" ").is_empty()
}

/// Input text: positional words joined by spaces, or all of `input` when they join to nothing.
pub fn read_input(words: &[String], mut input: impl Read) -> GtransResult<String> {
    if !reads_stdin(words) {
        return Ok(words.join(" "));
    }
    let mut buf = String::new();
    input
        .read_to_string(&mut buf)
        .map_err(GtransError::InputFailure)?;
    Ok(buf)
}

/// One full invocation: resolve the target, read the input, then translate or open the browser.
pub async fn run(
    settings: &Settings,
    env: &impl Env,
    input: impl Read,
    out: &mut impl Write,
    browser: &impl BrowserLauncher,
) -> GtransResult<()> {
    let target = resolve_target_lang(settings.target.as_deref(), env)?;
    let text = read_input(&settings.words, input)?;
    debug!(target_lang = %target, chars = text.chars().count(), "input ready");

    if settings.open {
        return open_in_browser(browser, &target, &text);
    }

    let config = RuntimeConfig::from_env(env);
    let Some(api_key) = config.api_key.as_deref() else {
        return Err(GtransError::ConfigurationMissing(format!(
            "{API_KEY_ENV} is not set"
        )));
    };
    let client = GoogleTranslateClient::new(api_key, &config.api_base_url)?;
    translate_text(&client, &text, target, config.second_lang.as_deref(), out).await
}

pub async fn translate_text<T: Translator>(
    client: &T,
    text: &str,
    target: String,
    second_lang: Option<&str>,
    out: &mut impl Write,
) -> GtransResult<()> {
    let target = apply_second_language(client, text, target, second_lang).await?;
    let target = normalize_lang_code(&target)?;
    let translated = client.translate(text, &target).await?;
    write_translation(out, &translated)
}
