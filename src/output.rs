use std::io::Write;

use tracing::debug;
use url::form_urlencoded;

use crate::error::{GtransError, GtransResult};

const WEB_UI_BASE: &str = "https://translate.google.com/";

/// Opens URLs outside the process.
pub trait BrowserLauncher {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Uses the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        webbrowser::open(url)
    }
}

/// Google Translate web UI URL with the source language left on auto-detect.
pub fn web_translate_url(target: &str, text: &str) -> String {
    let query: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("{WEB_UI_BASE}#auto/{target}/{query}")
}

pub fn open_in_browser(
    launcher: &impl BrowserLauncher,
    target: &str,
    text: &str,
) -> GtransResult<()> {
    let url = web_translate_url(target, text);
    debug!(target_lang = target, "opening Google Translate in browser");
    launcher.open(&url).map_err(GtransError::BrowserFailure)
}

/// Write the translation followed by a newline.
pub fn write_translation(out: &mut impl Write, translated: &str) -> GtransResult<()> {
    writeln!(out, "{translated}")
        .and_then(|()| out.flush())
        .map_err(GtransError::OutputFailure)
}
