// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").ok().flatten(),
        open_index: args.opt_value_from_str("--open").ok().flatten(),
        page_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
