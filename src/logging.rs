//! Logger setup for the `hreg` binary.
//!
//! Library code only talks to the `log` facade; the binary installs
//! `env_logger`. `RUST_LOG` takes precedence, otherwise `-v` flags pick the level.

use std::io::Write;

use env_logger::{Builder, Env};

pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // A logger may already be installed (e.g. when `run` is called twice in-process).
    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let level = record.level();
            let style = buf.default_level_style(level);
            writeln!(buf, "[{style}{level}{style:#} {}] {}", record.target(), record.args())
        })
        .try_init();
}
