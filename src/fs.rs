//! Small filesystem read helpers with `~` expansion and symlink
//! resolution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, trace};

fn expand_home(path: &Path) -> PathBuf {
	let Some(s) = path.to_str() else {
		return path.to_path_buf();
	};
	let Some(rest) = s.strip_prefix('~') else {
		return path.to_path_buf();
	};
	let home = std::env::var("HOME").unwrap_or_default();
	PathBuf::from(format!("{home}{rest}"))
}

/// Expands `~` and resolves symlinks, falling back to the expanded
/// path when resolution fails.
fn normalize(path: &Path) -> PathBuf {
	let path = expand_home(path);
	fs::canonicalize(&path).unwrap_or(path)
}

/// Checks if the given file exists.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
	match fs::metadata(normalize(path.as_ref())) {
		Ok(_) => true,
		Err(e) if e.kind() == io::ErrorKind::NotFound => false,
		Err(e) => {
			// Schrodinger: the file may or may not exist
			error!("could not stat {:?}: {}", path.as_ref(), e);
			false
		}
	}
}

/// Reads the whole file and returns the content.
pub fn read_file(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
	let path = normalize(path.as_ref());
	trace!("reading file {:?}", path);
	fs::read(path)
}

/// Tries `dir/filename` for every passed directory and returns the
/// first readable file together with the directory it was found in.
pub fn read_file_from_locations(
	filename: impl AsRef<Path>,
	locations: &[impl AsRef<Path>],
) -> Option<(Vec<u8>, PathBuf)> {
	for dir in locations {
		let dir = expand_home(dir.as_ref());
		let path = dir.join(filename.as_ref());
		debug!("trying to read {:?}", path);
		if let Ok(data) = read_file(&path) {
			return Some((data, dir));
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs::File;
	use std::io::Write;

	#[test]
	fn exists_and_read() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("conf.yaml");
		File::create(&path)
			.unwrap()
			.write_all(b"timeout: 5s")
			.unwrap();

		assert!(file_exists(&path));
		assert!(!file_exists(dir.path().join("missing")));
		assert_eq!(read_file(&path).unwrap(), b"timeout: 5s");
	}

	#[test]
	fn first_location_wins() {
		let first = tempfile::tempdir().unwrap();
		let second = tempfile::tempdir().unwrap();
		File::create(second.path().join("conf"))
			.unwrap()
			.write_all(b"second")
			.unwrap();

		let locations = [first.path(), second.path()];
		let (data, dir) = read_file_from_locations("conf", &locations).unwrap();
		assert_eq!(data, b"second");
		assert_eq!(dir, second.path());

		assert!(read_file_from_locations("other", &locations).is_none());
	}

	#[test]
	fn home_expansion() {
		let dir = tempfile::tempdir().unwrap();
		std::env::set_var("HOME", dir.path());
		File::create(dir.path().join("inhome"))
			.unwrap()
			.write_all(b"x")
			.unwrap();

		assert!(file_exists("~/inhome"));
		assert_eq!(read_file("~/inhome").unwrap(), b"x");
	}
}
