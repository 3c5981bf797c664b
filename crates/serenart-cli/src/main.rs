//! SerenArt session replayer.
//!
//! Replays a recorded JSON drawing session through a `DrawingSurface`,
//! exports the flattened image, and stores it as a PNG.
//!
//! ```text
//! serenart-replay <session.json> [output-dir] [--config canvas.json] [--base image.png]
//! ```

mod session;

use anyhow::{Context, Result, bail};
use serenart_core::CanvasConfig;
use serenart_editor::{DrawingStore, DrawingSurface, ShortcutAction, ShortcutMap};
use session::Session;
use std::path::PathBuf;

struct Args {
    session: PathBuf,
    out_dir: PathBuf,
    config: Option<PathBuf>,
    base: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut config: Option<PathBuf> = None;
    let mut base: Option<PathBuf> = None;

    let mut iter = std::env::args_os().skip(1);
    while let Some(arg) = iter.next() {
        match arg.to_str() {
            Some("--config") => config = Some(iter.next().context("--config needs a path")?.into()),
            Some("--base") => base = Some(iter.next().context("--base needs a path")?.into()),
            Some("-h" | "--help") => {
                println!("usage: serenart-replay <session.json> [output-dir] [--config canvas.json] [--base image.png]");
                std::process::exit(0);
            }
            _ => positional.push(PathBuf::from(&arg)),
        }
    }

    let mut positional = positional.into_iter();
    let Some(session) = positional.next() else {
        bail!("missing session file; see --help");
    };
    let out_dir = positional.next().unwrap_or_else(|| PathBuf::from("."));
    if let Some(extra) = positional.next() {
        bail!("unexpected argument {}", extra.display());
    }

    Ok(Args {
        session,
        out_dir,
        config,
        base,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            CanvasConfig::from_json(&text)?
        }
        None => CanvasConfig::default(),
    };

    let text = std::fs::read_to_string(&args.session)
        .with_context(|| format!("reading session {}", args.session.display()))?;
    let session = Session::from_json(&text)
        .with_context(|| format!("parsing session {}", args.session.display()))?;

    let mut canvas = DrawingSurface::with_size(config, session.width, session.height);
    if let Some(path) = &args.base {
        let bytes = std::fs::read(path).with_context(|| format!("reading image {}", path.display()))?;
        canvas.load_image(serenart_render::decode_png(&bytes)?);
    }

    let store = DrawingStore::new(&args.out_dir);
    let mut pending = Vec::new();

    for action in &session.actions {
        match session::apply(&mut canvas, action) {
            Some(ShortcutAction::Save) => {
                // Snapshot now; later actions keep editing the canvas meanwhile.
                pending.push(store.save_in_background(canvas.export_image()?));
            }
            Some(ShortcutAction::ShowHelp) => log::info!("shortcuts:\n{}", ShortcutMap::help_text()),
            _ => {}
        }
    }

    if canvas.is_stroking() {
        log::warn!("session ended mid-stroke; the open stroke is discarded");
        canvas.pointer_cancel();
    }

    log::info!(
        "replayed {} actions: {} strokes, {} undone",
        session.actions.len(),
        canvas.history().len(),
        canvas.history().redo_buffer().len()
    );

    if pending.is_empty() {
        let path = store.save(&canvas.export_image()?)?;
        println!("{}", path.display());
    }
    for handle in pending {
        println!("{}", handle.wait()?.display());
    }

    Ok(())
}
