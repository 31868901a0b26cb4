/// Derive a translation language code from a POSIX locale such as `en_US.UTF-8`.
///
/// Chinese locales map onto the script-specific codes the API expects: mainland China and
/// Singapore use Simplified (`zh-CN`), Taiwan and Hong Kong use Traditional (`zh-TW`).
/// Any other locale yields whatever precedes the first `_`; a locale without `_` yields
/// nothing.
pub fn lang_code_from_locale(locale: &str) -> Option<String> {
    if locale.starts_with("zh_CN") || locale.starts_with("zh_SG") {
        return Some("zh-CN".to_string());
    }
    if locale.starts_with("zh_TW") || locale.starts_with("zh_HK") {
        return Some("zh-TW".to_string());
    }

    let (lang, _) = locale.split_once('_')?;
    if lang.is_empty() {
        return None;
    }
    Some(lang.to_string())
}
