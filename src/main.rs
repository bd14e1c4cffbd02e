mod engine;
mod utils;

fn main() {
    utils::logger::init();

    let cli = engine::cli::Cli::parse();

    if let Err(e) = run(&cli) {
        tracing::error!("fatal: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &engine::cli::Cli) -> engine::EngineResult<()> {
    let points = cli.load_points()?;
    let config = cli.load_config()?;

    let animation = engine::animation::AnimationEngine::new(points, config);
    let renderer = engine::graphics::Renderer::new();

    engine::Windowing::run_app(animation, renderer)
}
