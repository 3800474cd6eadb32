// SPDX-License-Identifier: MPL-2.0
use iced_tiles::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
iced_tiles - arrange images in a reorderable grid

USAGE:
  iced_tiles [OPTIONS] [IMAGE_DIR]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --columns <N>         Number of grid columns
  --spacing <PX>        Gap between tiles
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn parse_args() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        columns: args.opt_value_from_str("--columns")?,
        spacing: args.opt_value_from_str("--spacing")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        image_dir: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    })
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_args() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    app::run(flags)
}
