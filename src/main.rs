// SPDX-License-Identifier: MPL-2.0
use clara_ai::app::{self, paths, Flags};

const HELP: &str = "\
CLARA-AI: illustrated mnemonics for medical topics

USAGE:
  clara_ai [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
      --lang <ID>         UI language (for example en-US, fr)
      --config-dir <DIR>  Directory holding settings.toml
      --i18n-dir <DIR>    Directory with .ftl files overriding the bundled ones

ENVIRONMENT:
  GEMINI_API_KEY          API key of the image service (name configurable)
  CLARA_AI_CONFIG_DIR     Same as --config-dir
  RUST_LOG                Log filter (default: clara_ai=info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("clara_ai=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
