// Copyright 2020 TwoCookingMice

use cannele::core::error::Result;
use cannele::core::settings::RenderSettings;
use cannele::io::exr_utils;
use cannele::renderers::renderer::Renderer;
use cannele::renderers::simple::SimpleRenderer;
use cannele::scenes;

use std::env;
use std::time::Instant;

fn run(args: Vec<String>) -> Result<()> {
    let settings = RenderSettings::from_args(args.into_iter().skip(1))?;
    let scene = scenes::cornell_box(settings.width, settings.height)?;
    let renderer = SimpleRenderer::new(settings.build_integrator(), settings.spp, settings.seed);
    let start = Instant::now();
    let image = renderer.render(&scene)?;
    log::info!("Render finished in {:.2}s.", start.elapsed().as_secs_f32());

    exr_utils::write_exr_to_file(&image, &settings.output)?;
    log::info!("Wrote {}.", settings.output.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| String::from("cannele"));
    if let Err(err) = run(args) {
        log::error!("{}", err);
        eprintln!("{}", RenderSettings::usage(&program));
        std::process::exit(1);
    }
}
