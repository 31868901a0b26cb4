use tracing::debug;

use crate::config::{Env, LOCALE_ENVS, TARGET_LANG_ENV};
use crate::error::{GtransError, GtransResult};
use crate::locale::lang_code_from_locale;

const MAX_LANG_CODE_LEN: usize = 35;

/// Resolve the language to translate into.
///
/// Precedence: explicit `--to`, then `GOOGLE_TRANSLATE_LANG`, then the first locale variable
/// (`LANGUAGE`, `LC_ALL`, `LANG`) that yields a language code.
pub fn resolve_target_lang(explicit: Option<&str>, env: &impl Env) -> GtransResult<String> {
    if let Some(lang) = explicit
        && !lang.is_empty()
    {
        debug!(target_lang = lang, "using explicit target language");
        return Ok(lang.to_string());
    }

    if let Some(lang) = env.non_empty(TARGET_LANG_ENV) {
        debug!(target_lang = %lang, "using {TARGET_LANG_ENV}");
        return Ok(lang);
    }

    for name in LOCALE_ENVS {
        let Some(locale) = env.var(name) else {
            continue;
        };
        if let Some(lang) = lang_code_from_locale(&locale) {
            debug!(target_lang = %lang, env = name, "derived target language from locale");
            return Ok(lang);
        }
    }

    Err(GtransError::ConfigurationMissing(format!(
        "cannot detect language. Please export $LANG or ${TARGET_LANG_ENV} (e.g. en, ja)"
    )))
}

/// Check that `code` looks like a language tag and return it with `-` separators.
///
/// Subtags may be separated by `-` or `_` (`pt_BR` becomes `pt-BR`); each must be non-empty
/// ASCII alphanumerics.
pub fn normalize_lang_code(code: &str) -> GtransResult<String> {
    let well_formed = !code.is_empty()
        && code.len() <= MAX_LANG_CODE_LEN
        && code
            .split(['-', '_'])
            .all(|sub| !sub.is_empty() && sub.chars().all(|c| c.is_ascii_alphanumeric()));
    if well_formed {
        Ok(code.replace('_', "-"))
    } else {
        Err(GtransError::InvalidLanguage(code.to_string()))
    }
}
