//! Render histogram props JSON to markup on stdout.
//!
//! Usage: `cargo run --example render_props -- props.json [style.json]`
//! Reads props from stdin when no path is given.

use std::io::Read;

use histogram_canvas::{HistogramCanvas, HistogramStyle};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let props = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let style = match args.next() {
        Some(path) => HistogramStyle::from_json(&std::fs::read_to_string(path)?)?,
        None => HistogramStyle::default(),
    };

    let canvas = HistogramCanvas::builder().style(style).build();
    let tree = canvas.render_json(&props)?;
    println!("{}", tree.to_markup());
    Ok(())
}
