//! Prints one layout per theme variant, with the inline styles it derives.

use std::env;
use std::error::Error;

use gridlayout_rs::gridlayout::log_init::init_logger;
use gridlayout_rs::prelude::*;
use gridlayout_rs::showcase;
use log::LevelFilter;

const VARIANTS: [GridLayoutVariant; 10] = [
    GridLayoutVariant::LumoMargin,
    GridLayoutVariant::LumoPadding,
    GridLayoutVariant::LumoSpacingXs,
    GridLayoutVariant::LumoSpacingS,
    GridLayoutVariant::LumoSpacing,
    GridLayoutVariant::LumoSpacingL,
    GridLayoutVariant::LumoSpacingXl,
    GridLayoutVariant::AuraMargin,
    GridLayoutVariant::AuraPadding,
    GridLayoutVariant::AuraSpacing,
];

fn main() -> Result<(), Box<dyn Error>> {
    if let Ok(path) = env::var("GRIDLAYOUT_LOG") {
        init_logger(path, LevelFilter::Debug)?;
    }

    for variant in VARIANTS {
        let showcase = showcase::theme_variant(variant)?;
        let element = showcase.layout.root_element();
        println!("<!-- {variant:?}: {} -->", element.css_text());
        println!("{}", showcase.to_html());
        println!();
    }
    Ok(())
}
