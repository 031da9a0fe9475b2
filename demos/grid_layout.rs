//! Prints the HTML of every showcase layout.
//!
//! ```text
//! cargo run --example grid-layout
//! cargo run --example grid-layout -- --justify center --align end --flow "row dense"
//! GRIDLAYOUT_LOG=grid.log cargo run --example grid-layout
//! ```

use std::env;
use std::error::Error;
use std::str::FromStr;

use clap::Parser;
use gridlayout_rs::gridlayout::log_init::init_logger;
use gridlayout_rs::prelude::*;
use gridlayout_rs::showcase::{self, Showcase};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "grid-layout",
    about = "Print the HTML of every showcase grid layout"
)]
struct Cli {
    /// justify-items of the alignment layout
    #[arg(long, default_value = "stretch", value_parser = ItemAlignment::from_str)]
    justify: ItemAlignment,

    /// align-items of the alignment layout
    #[arg(long, default_value = "stretch", value_parser = ItemAlignment::from_str)]
    align: ItemAlignment,

    /// grid-auto-flow of the auto-flow layout ("row", "column", "row dense", "column dense")
    #[arg(long, default_value = "row", value_parser = AutoFlow::from_str)]
    flow: AutoFlow,
}

fn print_showcase(showcase: &Showcase) {
    println!("<!-- {}: {} -->", showcase.title, showcase.description);
    println!("{}", showcase.to_html());
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    if let Ok(path) = env::var("GRIDLAYOUT_LOG") {
        init_logger(path, LevelFilter::Debug)?;
    }
    log::info!("rendering showcase with {cli:?}");

    let showcases = [
        showcase::basic()?,
        showcase::column_templates()?,
        showcase::template_areas()?,
        showcase::alignment(cli.justify, cli.align)?,
        showcase::positioning()?,
        showcase::auto_flow(cli.flow)?,
        showcase::responsive()?,
    ];
    for showcase in &showcases {
        print_showcase(showcase);
    }
    Ok(())
}
