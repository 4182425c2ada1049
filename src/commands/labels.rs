use anyhow::Result;
use secondbrain_core::label::LABELS;

use crate::render::Render;

pub fn run() -> Result<()> {
    for label in &LABELS {
        println!("{}", label.render());
    }
    Ok(())
}
