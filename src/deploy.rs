use crate::deploy_stats::DeployStats;
use crate::favcopy::{CopyMode, copy_file, streaming_copy};
use crate::listing::print_listing;
use std::io;
use std::path::Path;

/// The favicon set every site build is expected to ship.
pub const FAVICON_FILES: [&str; 5] = [
	"apple-touch-icon.png",
	"favicon-96x96.png",
	"favicon.svg",
	"web-app-manifest-192x192.png",
	"web-app-manifest-512x512.png",
];

/// Copies each favicon that exists under `source` into `destination`, then
/// prints the destination listing and a summary.
///
/// A missing or unreadable icon is reported and skipped; a destination that
/// cannot be listed is fatal.
pub fn deploy(source: &str, destination: &str, mode: CopyMode) -> io::Result<DeployStats> {
	let source_root = Path::new(source);
	let dest_root = Path::new(destination);
	let mut stats = DeployStats::new();

	for filename in FAVICON_FILES {
		let src = source_root.join(filename);
		let dst = dest_root.join(filename);

		if !src.exists() {
			println!(
				"Warning: {} not found in {}",
				filename,
				source_root.display()
			);
			stats.add_missing();
			continue;
		}

		let copied = match mode {
			CopyMode::PreserveMetadata => copy_file::copy_with_metadata(&src, &dst),
			CopyMode::Raw => streaming_copy::copy_bytes(&src, &dst),
		}
		.and_then(|bytes| Ok((bytes, dst.metadata()?.len())));

		match copied {
			Ok((src_bytes, dst_bytes)) => {
				println!(
					"Copied {} ({} bytes -> {} bytes)",
					filename, src_bytes, dst_bytes
				);
				stats.add_copied(src_bytes);
			}
			Err(e) => {
				eprintln!("Failed to copy {}: {}", filename, e);
				stats.add_failed();
			}
		}
	}

	print_listing(dest_root)?;
	stats.print_summary();

	Ok(stats)
}
