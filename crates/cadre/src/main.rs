use std::env;
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context as _, Error};
use cadre::{FrameSnapshot, LoadedScene, Scene};
use log::info;

const DEFAULT_SCENE: &str = "crates/cadre/scenes/dashboard.json";

pub fn main() -> Result<(), Error> {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_SCENE.to_owned());
    let source = fs::read_to_string(&path).with_context(|| format!("reading scene {path}"))?;
    let scene: Scene =
        serde_json::from_str(&source).with_context(|| format!("parsing scene {path}"))?;
    let mut loaded = LoadedScene::build(&scene).context("building scene")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "== {} ==", scene.root.name)?;
    print_listing(&mut out, &loaded.snapshot()?)?;

    for (step, mutation) in scene.mutations.iter().enumerate() {
        let changed = loaded
            .apply(mutation)
            .with_context(|| format!("applying mutation {step}"))?;
        let listing = loaded.snapshot()?;
        let tree = loaded.tree();
        writeln!(
            out,
            "\n== step {step}: {mutation:?} (changed: {changed}, recomputed: {}) ==",
            tree.nodes_recomputed_last()
        )?;
        print_listing(&mut out, &listing)?;
    }

    let tree = loaded.tree();
    info!(
        "passes={} recomputed_total={}",
        tree.passes_total(),
        tree.nodes_recomputed_total()
    );
    Ok(())
}

fn print_listing(out: &mut impl io::Write, listing: &[FrameSnapshot]) -> io::Result<()> {
    for entry in listing {
        let rect = entry.rect;
        writeln!(
            out,
            "{:indent$}{} x={} y={} w={} h={}",
            "",
            entry.name,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            indent = entry.depth * 2
        )?;
    }
    Ok(())
}
