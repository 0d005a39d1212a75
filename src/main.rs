// SPDX-License-Identifier: MPL-2.0

use iced_behaviors::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_path: args.opt_value_from_str("--config").unwrap_or(None),
    };

    app::run(flags)
}
