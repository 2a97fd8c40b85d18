//! The `hexisle` binary: build an island, animate it headlessly and export it.

use clap::Parser;
use hexisle_app::AppError;
use hexisle_app::game_loop::GameLoop;
use hexisle_app::platform::PlatformDirs;
use hexisle_app::repl::{run_interactive, simulate};
use hexisle_config::{CliArgs, Config};
use hexisle_scene::Session;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(args) {
        error!("{e}");
        eprintln!("hexisle: {e}");
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), AppError> {
    let dirs = match &args.config {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    hexisle_log::init_logging(
        Some(&dirs.log_dir),
        config.debug.log_to_file || cfg!(debug_assertions),
        Some(&config),
    );
    info!("Config directory: {}", dirs.config_dir.display());

    let out_dir = config.export.output_dir.clone();
    let frames = config.export.frames;
    let mut session = Session::new(config)?;
    let mut game_loop = GameLoop::new();

    let wraps = simulate(&mut session, &mut game_loop, frames);
    info!(
        "Simulated {frames} frames ({:.2}s), {wraps} clouds wrapped",
        game_loop.total_sim_time()
    );
    info!("{}", session.stats_line());

    let files = session.export(&out_dir)?;
    info!("Wrote {}", files.summary.display());

    if args.interactive {
        let stdin = std::io::stdin();
        run_interactive(
            &mut session,
            &mut game_loop,
            stdin.lock(),
            std::io::stdout(),
            &out_dir,
        )?;
    }
    Ok(())
}
