use std::io::Write;

use env_logger::{Builder, Env};

/// `RUST_LOG` selects the level, `info` when unset. Lines carry the module
/// that logged them so SQL traces are easy to tell apart from CLI output.
fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn main() {
    init_logging();

    if let Err(err) = clvdb::cli::run() {
        log::debug!("exiting with {}", err.code());
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
