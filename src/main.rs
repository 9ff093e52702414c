use std::fs::File;
use std::io;

use anyhow::Context;
use clap::Parser;
use garden_core::Garden;
use harmonic_garden::cli::Args;
use harmonic_garden::{frame, render};

/// Logs would corrupt the drawing, so they go to `--log-file` when given.
/// Without a file, logging stays off unless `RUST_LOG` asks for it.
fn init_logging(args: &Args) -> anyhow::Result<()> {
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    let mut builder = env_logger::Builder::from_default_env();
    match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            if !rust_log_set {
                builder.filter_level(log::LevelFilter::Info);
            }
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if !rust_log_set => return Ok(()),
        None => {}
    }
    builder.try_init().context("installing logger")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let settings = args.to_settings();
    let garden = Garden::new(settings).context("building garden")?;

    // Leave the terminal usable if anything below panics
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        _ = render::restore_terminal(&mut io::stdout());
        default_hook(info);
    }));

    let mut out = io::stdout();
    if let Err(e) = render::enter_terminal(&mut out) {
        _ = render::restore_terminal(&mut out);
        return Err(e).context("entering raw mode");
    }
    let res = frame::run(&mut out, garden);
    let restored = render::restore_terminal(&mut out).context("restoring terminal");
    if let Err(e) = &res {
        log::error!("[frame] {:?}", e);
    }
    res.and(restored)
}
