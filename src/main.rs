// src/main.rs

use argh::FromArgs;
use log::{error, info};
use std::error::Error;
use std::path::PathBuf;

use boat_track_render::pipeline::{analyze_run, render_run};
use boat_track_render::{crate_version, RunConfig, RunMode};

#[derive(FromArgs, Debug)]
/// Plot pose, trajectory and tracking error of one boat control run.
struct Args {
    /// directory holding params.txt, pose_rob.txt and the reference log
    #[argh(positional)]
    run_dir: PathBuf,
    /// run mode: standard (control_target.txt reference) or sailboat (pose_vsb.txt reference and waypoints)
    #[argh(option, short = 'm', default = "RunMode::Standard")]
    mode: RunMode,
    /// directory the PNG figures are written to
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if !args.output_dir.is_dir() {
        return Err(format!("Output directory {:?} does not exist", args.output_dir).into());
    }
    let config = RunConfig::new(args.run_dir, args.mode).with_output_dir(args.output_dir);

    let analysis = analyze_run(&config)?;
    render_run(&analysis, &config)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    info!("boat_track_render {}", crate_version());

    if let Err(e) = run(args) {
        error!("{e}");
        std::process::exit(1);
    }
    info!("Done.");
}

// src/main.rs
