//! Renders the built-in icon set into `public/icons`.
//!
//! Per-icon `Generated <name>.png` lines are `info` log records, so a
//! `RUST_LOG` stricter than `info` (e.g. `warn`) hides them. `Done!` is
//! always printed.

use std::{io::Write, process::ExitCode};

use icon_raster::IconRaster;

const ICONS_DIR: &str = "public/icons";

fn run() -> icon_raster::Result<()> {
    let report = IconRaster::builder(ICONS_DIR).build()?;
    log::debug!("{} icons written to {ICONS_DIR}", report.rendered.len());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    println!("Done!");
    ExitCode::SUCCESS
}
