use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

const CHUNK_SIZE: usize = 64 * 1024; // 64KB per chunk

/// Manual byte-for-byte copy of the file contents. No metadata is carried
/// over; the destination gets fresh timestamps. Returns the bytes written.
pub fn copy_bytes(src: &Path, dst: &Path) -> io::Result<u64> {
	let mut src_file = File::open(src)?;
	let mut dst_file = File::create(dst)?;
	let mut buffer = vec![0u8; CHUNK_SIZE];
	let mut total: u64 = 0;

	loop {
		let bytes_read = src_file.read(&mut buffer)?;
		if bytes_read == 0 {
			break; // EOF
		}
		dst_file.write_all(&buffer[..bytes_read])?;
		total += bytes_read as u64;
	}

	Ok(total)
}
