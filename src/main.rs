mod deploy;
mod deploy_stats;
mod favcopy;
mod listing;

use crate::deploy::deploy;
use crate::favcopy::CopyMode;
use clap::Parser;
use std::process;

#[derive(Parser)]
#[command(about = "Copies a site's favicon files into its public directory", long_about = None)]
#[clap(author, version)]
struct Args {
	/// Project root folder holding the original icon files
	#[arg(short, long, default_value = ".")]
	source: String,

	/// Output folder receiving the copies (must already exist)
	#[arg(short, long, default_value = "public")]
	destination: String,

	/// Copy raw bytes only instead of preserving file metadata
	#[arg(long)]
	raw: bool,
}

fn main() {
	println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
	println!();

	let args = Args::parse();
	let mode = if args.raw {
		CopyMode::Raw
	} else {
		CopyMode::PreserveMetadata
	};

	match deploy(&args.source, &args.destination, mode) {
		Ok(_) => (),
		Err(e) => {
			eprintln!("\nDeploy failed: {}", e);
			process::exit(1);
		}
	}
}
