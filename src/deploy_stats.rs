use bytesize::ByteSize;
use std::time::Instant;

/// Counters for a single deploy run. The tool is strictly sequential, so
/// plain fields are enough.
pub struct DeployStats {
	start_time: Instant,
	files_copied: usize,
	files_missing: usize,
	files_failed: usize,
	bytes_copied: u64,
}

impl DeployStats {
	pub fn new() -> Self {
		DeployStats {
			start_time: Instant::now(),
			files_copied: 0,
			files_missing: 0,
			files_failed: 0,
			bytes_copied: 0,
		}
	}

	pub fn add_copied(&mut self, bytes: u64) {
		self.files_copied += 1;
		self.bytes_copied += bytes;
	}

	pub fn add_missing(&mut self) {
		self.files_missing += 1;
	}

	pub fn add_failed(&mut self) {
		self.files_failed += 1;
	}

	pub fn files_copied(&self) -> usize {
		self.files_copied
	}

	pub fn files_missing(&self) -> usize {
		self.files_missing
	}

	pub fn files_failed(&self) -> usize {
		self.files_failed
	}

	pub fn bytes_copied(&self) -> u64 {
		self.bytes_copied
	}

	pub fn print_summary(&self) {
		let total = self.files_copied + self.files_missing + self.files_failed;
		println!();
		println!(
			"Deployed {} of {} icons ({}), {} missing, {} failed",
			self.files_copied,
			total,
			ByteSize(self.bytes_copied),
			self.files_missing,
			self.files_failed
		);

		let total_seconds = self.start_time.elapsed().as_secs();
		let minutes = total_seconds / 60;
		let seconds = total_seconds % 60;
		if minutes > 0 {
			println!("Completed in {} mins {} seconds", minutes, seconds);
		} else {
			println!("Completed in {} seconds", seconds);
		}
	}
}
