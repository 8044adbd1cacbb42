//! Headless demo: render the demo frame for a number of frames and write
//! the result to a PNG.

use std::fs;
use std::process;

use log::{error, info};

use softraster::{save_png, Arena, Canvas, RenderConfig, Result, Scene};

fn run(cfg: &RenderConfig) -> Result<()> {
    let mut arena = Arena::new(cfg.arena_capacity)?;
    let pixels = arena.alloc_pixels(cfg.pixel_count())?;
    {
        let mut canvas = Canvas::with_stride(arena.pixels_mut(pixels)?, cfg.width, cfg.height, cfg.stride())?;
        canvas.set_line_mode(cfg.line_mode);

        let mut scene = Scene::default();
        for _ in 0..cfg.frames {
            scene.draw(&mut canvas, cfg.frame_dt)?;
        }
        info!("rendered {} frames, sprite at {:?}", cfg.frames, scene.sprite.rect);

        if let Some(dir) = cfg.output.parent() {
            fs::create_dir_all(dir)?;
        }
        save_png(&canvas, &cfg.output, cfg.export_options())?;
    }
    arena.free();
    Ok(())
}

fn main() {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = RenderConfig::default();
    info!("canvas {}x{} ({:?})", cfg.width, cfg.height, cfg.line_mode);
    if let Err(e) = run(&cfg) {
        error!("{}", e);
        process::exit(1);
    }
}
