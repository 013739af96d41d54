pub mod copy_file;
pub mod streaming_copy;

/// Which copy primitive to use for each icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyMode {
	/// `fs::copy` plus permissions and modification time.
	PreserveMetadata,
	/// Manual chunked read/write of the file contents only.
	Raw,
}
