use std::fs;
use std::io;
use std::path::Path;

/// Regular files in `dir`, sorted by name, with their byte sizes.
/// Subdirectories, symlinks and special files are left out.
pub fn list_directory(dir: &Path) -> io::Result<Vec<(String, u64)>> {
	let mut entries = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		if !entry.file_type()?.is_file() {
			continue;
		}
		let size = entry.metadata()?.len();
		entries.push((entry.file_name().to_string_lossy().into_owned(), size));
	}

	entries.sort();
	Ok(entries)
}

pub fn print_listing(dir: &Path) -> io::Result<()> {
	println!("\n{} directory contents:", dir.display());
	for (name, size) in list_directory(dir)? {
		println!("  {} ({} bytes)", name, size);
	}
	Ok(())
}
