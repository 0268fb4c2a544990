#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use mapty::{cli, script, snapshot, utils};

#[macro_use]
extern crate mapty;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let config = cli.map_config();
    dlog!(
        "mode=replay script={} zoom={} json={}",
        cli.script.display(),
        config.zoom,
        cli.json
    );

    let events = script::load_script(&cli.script)?;
    let app = script::replay(&events, config);

    if cli.json {
        let snap = snapshot::Snapshot::of(&app);
        let out = serde_json::to_string_pretty(&snap).context("encoding session snapshot")?;
        println!("{out}");
        return Ok(());
    }

    print!("{}", app.list().markup());
    for (i, (at, popup)) in app.map().markers.iter().enumerate() {
        println!(
            "marker\t{}\t{at}\t{}\t{}",
            i + 1,
            popup.options.class_name,
            popup.content
        );
    }
    if let Some((center, zoom)) = app.map().current_view() {
        println!("view\t{center}\tzoom={zoom}");
    }

    Ok(())
}
