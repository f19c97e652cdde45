use std::{collections::HashMap, fmt::Debug, io};

use ariadne::FnCache;

use crate::Error;

pub const NATIVE_SOURCE: &str = "Error originated from native context";

fn provider(
    x: &str,
    sources: &HashMap<String, String>,
) -> Result<String, Box<dyn Debug + 'static>> {
    if x == "<internal>" || x == "<native>" {
        Ok(NATIVE_SOURCE.to_owned())
    } else if let Some(source) = sources.get(x) {
        Ok(source.clone())
    } else {
        std::fs::read_to_string(x).map_err(|x| Box::new(x) as Box<dyn Debug + 'static>)
    }
}

/// Renders `e` on stderr. Spans are resolved against `sources` first and the
/// filesystem second.
pub fn report(e: Error, sources: &HashMap<String, String>) -> io::Result<()> {
    e.finish()
        .eprint(FnCache::new(|x: &String| provider(x, sources)))
}
