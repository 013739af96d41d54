use std::fs;
use std::io;
use std::path::Path;

/// Copies an icon and carries over its permissions and modification time,
/// so the published file matches the original. Returns the bytes copied.
pub fn copy_with_metadata(src: &Path, dst: &Path) -> io::Result<u64> {
	let bytes = fs::copy(src, dst)?;
	copy_file_metadata(src, dst)?;
	Ok(bytes)
}

fn copy_file_metadata(src: &Path, dst: &Path) -> io::Result<()> {
	let src_metadata = fs::metadata(src)?;

	#[cfg(unix)]
	{
		let permissions = src_metadata.permissions();
		fs::set_permissions(dst, permissions)?;
	}

	let mtime = filetime::FileTime::from_last_modification_time(&src_metadata);
	filetime::set_file_mtime(dst, mtime)?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	#[test]
	fn copies_contents_and_reports_size() -> io::Result<()> {
		let dir = TempDir::new()?;
		let src = dir.path().join("favicon.svg");
		let dst = dir.path().join("copy.svg");
		fs::write(&src, b"<svg/>")?;

		let bytes = copy_with_metadata(&src, &dst)?;

		assert_eq!(bytes, 6);
		assert_eq!(fs::read(&dst)?, b"<svg/>");
		Ok(())
	}

	#[test]
	fn preserves_modification_time() -> io::Result<()> {
		let dir = TempDir::new()?;
		let src = dir.path().join("apple-touch-icon.png");
		let dst = dir.path().join("copy.png");
		fs::write(&src, b"png bytes")?;

		// Push the source mtime into the past so a fresh copy would differ.
		let past = filetime::FileTime::from_unix_time(1_000_000_000, 0);
		filetime::set_file_mtime(&src, past)?;

		copy_with_metadata(&src, &dst)?;

		let dst_mtime =
			filetime::FileTime::from_last_modification_time(&fs::metadata(&dst)?);
		assert_eq!(dst_mtime, past);
		Ok(())
	}

	#[test]
	fn missing_source_is_an_error() {
		let dir = TempDir::new().unwrap();
		let src = dir.path().join("nope.png");
		let dst = dir.path().join("copy.png");
		assert!(copy_with_metadata(&src, &dst).is_err());
	}
}
