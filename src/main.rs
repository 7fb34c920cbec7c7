use clap::Parser;
use downscale::{run_error, BatchRunner, Cli, ResizeSpec};
use log::LevelFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let spec = ResizeSpec::new(cli.width, cli.height);
    let runner = BatchRunner::new(spec, cli.output);

    // Per-image failures are reported inside the run and leave exit code 0;
    // only run-level errors reach here.
    if let Err(err) = runner.run(&cli.source) {
        println!("{}", run_error(err));
        std::process::exit(1);
    }
}
