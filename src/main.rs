mod app;
mod client;
mod config;
mod error;
mod locale;
mod logging;
mod output;
mod resolve;
mod switch;
#[cfg(test)]
mod test_support;

use std::ffi::OsString;

use clap::Parser;
use owo_colors::OwoColorize;

use crate::config::{ProcessEnv, Settings};
use crate::error::GtransResult;
use crate::output::SystemBrowser;

const USAGE_NOTES: &str = "\
gtrans translates input text specified by argument or STDIN using Google Translate.
Source language will be automatically detected.

Environment:
  GOOGLE_TRANSLATE_API_KEY       Google Translate API key (required)
  GOOGLE_TRANSLATE_LANG          default target language (e.g. en, ja, ...)
  GOOGLE_TRANSLATE_SECOND_LANG   second language (e.g. en, ja, ...)
  GTRANS_API_BASE_URL            API endpoint override

Without --to or GOOGLE_TRANSLATE_LANG the target language is taken from
LANGUAGE, LC_ALL or LANG. If you set both GOOGLE_TRANSLATE_LANG and
GOOGLE_TRANSLATE_SECOND_LANG, gtrans automatically switches the target
language when the input is already in the target language.

Example:
  $ gtrans \"Golang is awesome\"
  Golangは素晴らしいです
  $ gtrans \"Golangは素晴らしいです\"
  Golang is great
  $ gtrans \"Golangは素晴らしいです\" | gtrans | gtrans | gtrans ...";

#[derive(Parser, Debug)]
#[command(name = "gtrans", version)]
#[command(about = "Translate text with Google Translate", long_about = None)]
#[command(after_help = USAGE_NOTES)]
struct Cli {
    /// Target language (e.g. en, ja, zh-TW); overrides auto-detection
    #[arg(short = 't', long = "to", value_name = "LANG")]
    to: Option<String>,
    /// Open Google Translate in the browser instead of writing the result to stdout
    #[arg(long)]
    open: bool,
    /// Text to translate; read from stdin when omitted
    #[arg(value_name = "TEXT", trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

impl Cli {
    fn into_settings(self) -> Settings {
        Settings {
            target: self.to,
            open: self.open,
            words: self.text,
        }
    }
}

/// Accept the single-dash `-to` / `-open` spellings alongside the clap forms.
///
/// Only the leading flags are rewritten: once the first input word (or `--`) shows up, the rest
/// of the command line is input text and passes through untouched.
fn normalize_legacy_flags(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args = args.into_iter();
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    while let Some(arg) = args.next() {
        let Some(flag) = arg.to_str() else {
            out.push(arg);
            break;
        };
        match flag {
            "--" => {
                out.push(arg);
                break;
            }
            "-to" | "--to" | "-t" => {
                out.push(OsString::from("--to"));
                out.extend(args.next());
            }
            "-open" => out.push(OsString::from("--open")),
            s if s.starts_with("-to=") => out.push(OsString::from(format!("-{s}"))),
            s if s.starts_with('-') && s.len() > 1 => out.push(arg),
            _ => {
                out.push(arg);
                break;
            }
        }
    }
    out.extend(args);
    out
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));
    logging::init_tracing();

    if let Err(err) = real_main(cli).await {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }
}

async fn real_main(cli: Cli) -> GtransResult<()> {
    let settings = cli.into_settings();
    if app::reads_stdin(&settings.words) && atty::is(atty::Stream::Stdin) {
        eprintln!(
            "{}",
            "Reading text from stdin (press Ctrl-D to finish)...".dimmed()
        );
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    app::run(
        &settings,
        &ProcessEnv,
        stdin.lock(),
        &mut stdout,
        &SystemBrowser,
    )
    .await
}
