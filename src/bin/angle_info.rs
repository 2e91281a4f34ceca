//! Packed Angle Inspection Tool
//!
//! This binary encodes an angle given as radians, degrees, or a (sine, cosine)
//! pair, and prints its packed word together with the values decoded from it.
//! It can also dump the word to a file or inspect a previously saved word.
//!
//! Usage:
//!   cargo run --bin angle_info -- 1.25
//!   cargo run --bin angle_info -- --degrees -135
//!   cargo run --bin angle_info -- 3 4 --save angle.bin
//!   cargo run --bin angle_info -- --load angle.bin

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{debug, error};
use packed_angle::{AngleError, PackedAngle, Result};

/// Packed Angle Inspection Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Encodes an angle into its packed f64 word and shows what it decodes to",
    long_about = None
)]
struct Args {
    /// Read the single value as degrees instead of radians
    #[arg(short, long, action = ArgAction::SetTrue)]
    degrees: bool,

    /// Inspect the 8-byte word stored in this file instead of encoding values
    #[arg(short, long, conflicts_with = "values")]
    load: Option<PathBuf>,

    /// Write the encoded word to this file
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// One angle (radians, or degrees with --degrees) or a sine, cosine pair
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{:>10}: {}", name, value);
}

/// Builds the angle the arguments describe
fn angle_from_args(args: &Args) -> Result<PackedAngle> {
    if let Some(path) = &args.load {
        debug!("loading packed word from {}", path.display());
        return PackedAngle::load(path);
    }

    match args.values.as_slice() {
        [degrees] if args.degrees => Ok(PackedAngle::from_degrees(*degrees)),
        components => PackedAngle::from_components(components),
    }
}

/// Prints the encoded word and everything decoded from it
fn describe(angle: PackedAngle) {
    println!("\nPacked word:");
    println!("-------------------------------------------------------");
    print_named_value("quadrant", angle.quadrant());
    print_named_value("bits", format!("{:#018x}", angle.to_bits()));
    print_named_value("word", format!("{:e}", f64::from_bits(angle.to_bits())));

    println!("\nDecoded:");
    println!("-------------------------------------------------------");
    print_named_value("radians", angle.radians());
    print_named_value("degrees", angle);

    println!("\nTrigonometry:");
    println!("-------------------------------------------------------");
    let (sin, cos) = angle.sin_cos();
    print_named_value("sin", sin);
    print_named_value("cos", cos);
    print_named_value("tan", angle.tan());
    print_named_value("cot", angle.cot());
    print_named_value("sec", angle.sec());
    print_named_value("csc", angle.csc());
}

fn run(args: &Args) -> Result<()> {
    let angle = angle_from_args(args)?;
    describe(angle);

    if let Some(path) = &args.save {
        angle.save(path)?;
        println!("\nSaved {} bytes to {}", PackedAngle::size_bytes(), path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    debug!("{:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AngleError::InvalidArity { found }) => {
            error!("expected 1 or 2 values, got {}", found);
            eprintln!("Error: pass one angle or a sine, cosine pair (got {} values)", found);
            ExitCode::from(2)
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
