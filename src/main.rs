// SPDX-License-Identifier: MPL-2.0
use card_gallery::app::{self, Flags};
use pico_args;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("card_gallery=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        api_url: args.opt_value_from_str("--api-url").unwrap(),
    };

    app::run(flags)
}
