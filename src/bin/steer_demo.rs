//! Spherical Steering Demo
//!
//! This binary runs a fixed-timestep loop in which a mover steers an object
//! through spherical space toward a target, and prints the object's track.
//!
//! Usage:
//!   cargo run --bin steer_demo -- --target 0 2 6 --steps 2000
//!   cargo run --bin steer_demo -- --target-spherical 8 1.0 0.5 --config motion.json

use clap::{ArgAction, Parser};
use log::{debug, info};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use spherical_motion::{MotionConfig, SphericalCoord, SphericalMotion, SphericalMover};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Spherical Steering Demo
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Steers an object toward a target using spherical-direction forces",
    long_about = None
)]
struct Args {
    /// JSON motion config (damping, accelerations, max speed, world offset)
    #[arg(short, long)]
    config: Option<String>,

    /// Cartesian target position relative to the world offset
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    target: Option<Vec<f32>>,

    /// Spherical target position relative to the world offset
    #[arg(
        long,
        num_args = 3,
        value_names = ["R", "POLAR", "ELEVATION"],
        allow_negative_numbers = true,
        conflicts_with = "target"
    )]
    target_spherical: Option<Vec<f32>>,

    /// Cartesian starting position
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    start: Option<Vec<f32>>,

    /// Seed for the random target used when no target is given
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of simulation steps
    #[arg(short = 'n', long, default_value_t = 1000)]
    steps: usize,

    /// Time step in seconds
    #[arg(long, default_value_t = 0.02)]
    dt: f32,

    /// Print a track line every this many steps
    #[arg(long, default_value_t = 50)]
    report_every: usize,

    /// Display detailed debugging information
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Builds a Vector3 from a parsed three-value argument
fn triple(values: &[f32]) -> Vector3<f32> {
    Vector3::new(values[0], values[1], values[2])
}

/// Picks the spherical target from the arguments, or a random one
fn resolve_target(args: &Args) -> SphericalCoord {
    if let Some(values) = &args.target_spherical {
        SphericalCoord::new(values[0], values[1], values[2])
    } else if let Some(values) = &args.target {
        SphericalCoord::from_cartesian_vector(triple(values))
    } else {
        let mut rng = StdRng::seed_from_u64(args.seed);
        SphericalCoord::new(
            rng.gen_range(2.0..10.0),
            rng.gen_range(0.0..std::f32::consts::TAU),
            rng.gen_range(-1.2..1.2),
        )
    }
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if !(args.dt.is_finite() && args.dt > 0.0) {
        return Err(format!("--dt must be a positive number, got {}", args.dt).into());
    }

    let config = match &args.config {
        Some(path) => {
            info!("Loading motion config from {}", path);
            MotionConfig::from_json_file(path)?
        }
        None => MotionConfig::default(),
    };
    debug!("Motion config: {:?}", config);

    let start = args.start.as_deref().map(triple).unwrap_or_else(|| Vector3::new(5.0, 0.0, 0.0));
    let target = resolve_target(&args);
    let mover = SphericalMover::new(target.to_cartesian(), target);
    let mut motion = SphericalMotion::new(config, start);

    print_section_header("Setup");
    println!("Start (cartesian): {:?}", start);
    println!("Start (spherical): {}", motion.spherical_position());
    println!("Target (spherical): {}", target);
    println!("Target (cartesian): {:?}", target.to_cartesian());

    let markers = mover.markers(&motion);
    debug!("Target markers: {:?}", markers);

    print_section_header("Track");
    println!(
        "{:>8} {:>10} {:>10} {:>10} {:>12}",
        "Step", "X", "Y", "Z", "Distance"
    );

    let report_every = args.report_every.max(1);
    for step in 1..=args.steps {
        mover.steer_spherical(&mut motion);
        let world = motion.step(args.dt);

        if step % report_every == 0 || step == args.steps {
            let distance = motion.spherical_position().distance_to(&target);
            println!(
                "{:>8} {:>10.4} {:>10.4} {:>10.4} {:>12.5}",
                step, world.x, world.y, world.z, distance
            );
        }
    }

    let final_distance = motion.spherical_position().distance_to(&target);
    print_section_header("Result");
    println!("Final position (spherical): {}", motion.spherical_position());
    println!("Final distance to target: {:.5}", final_distance);
    info!(
        "Simulated {} steps ({:.2}s)",
        args.steps,
        args.steps as f32 * args.dt
    );

    Ok(())
}
