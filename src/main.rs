use std::process::exit;

use env_logger::Target;
use errors::report;
use log::error;

use crate::{
    actions::{investigation::investigate, run_context::StdoutContext},
    kinds::kind_loader::KindLoader,
};

mod actions;
mod kinds;
mod parser;
#[cfg(test)]
mod tests;

const DECLARATIONS: &str = include_str!("../std/static_demo.kind");
const DECLARATIONS_FILE: &str = "std/static_demo.kind";

fn main() {
    env_logger::builder().target(Target::Stderr).init();

    let mut cl = KindLoader::new();
    let r = cl
        .load_string(DECLARATIONS, DECLARATIONS_FILE)
        .and_then(|_| investigate(&cl, &mut StdoutContext));
    if let Err(e) = r {
        let mut sources = cl.sources().clone();
        sources
            .entry(DECLARATIONS_FILE.to_owned())
            .or_insert_with(|| DECLARATIONS.to_owned());
        if let Err(io) = report(e, &sources) {
            error!("failed to render diagnostic: {}", io);
        }
        exit(1);
    }
}
