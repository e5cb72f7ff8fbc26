// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use story_deck::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
story-deck: a page-by-page love story

USAGE:
  story-deck [OPTIONS]

OPTIONS:
  --lang <bcp47>        UI language (e.g. en-US, fr)
  --config-dir <dir>    Directory holding settings.toml and story.toml
  --story <file>        Story file to present instead of the configured one
  --images <dir>        Directory the gallery images are read from
  --verbose             Log navigation and timer events
  -h, --help            Print this help

KEYS:
  Right / Space         Next page or photo
  Left                  Previous page or photo

ENVIRONMENT:
  STORY_DECK_CONFIG_DIR Config directory when --config-dir is not given
  RUST_LOG              Log filter, overrides --verbose
";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
    verbose: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        verbose: args.contains("--verbose"),
        config_dir: args.opt_value_from_str("--config-dir")?,
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
            story_path: args.opt_value_from_str::<_, PathBuf>("--story")?,
            images_dir: args.opt_value_from_str::<_, PathBuf>("--images")?,
        },
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments: {remaining:?}");
    }

    Ok(Some(parsed))
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let default_filter = if args.verbose {
        "story_deck=debug"
    } else {
        "story_deck=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    paths::init_cli_overrides(args.config_dir);

    app::run(args.flags)
}
