use tracing::info;

use crate::client::Translator;
use crate::error::GtransResult;

/// Pick the final target given the detected source language.
///
/// Text already written in the target language is sent to the second language instead, so
/// piping output back through the tool alternates between the two. Codes compare exactly.
pub fn switch_target<'a>(detected: &str, target: &'a str, second: &'a str) -> &'a str {
    if detected == target { second } else { target }
}

/// Apply the second-language switch. Detection only runs when a second language is set.
pub async fn apply_second_language<T: Translator>(
    client: &T,
    text: &str,
    target: String,
    second: Option<&str>,
) -> GtransResult<String> {
    let Some(second) = second.filter(|s| !s.is_empty()) else {
        return Ok(target);
    };

    let detected = client.detect(text).await?;
    let chosen = switch_target(&detected, &target, second);
    if chosen != target {
        info!(
            detected = %detected,
            from = %target,
            to = chosen,
            "input already in target language, switching to second language"
        );
    }
    Ok(chosen.to_string())
}
