//! Random string generation backed by the operating system's random
//! source.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RandomError {
	#[error("system random source failed: {0}")]
	Source(#[from] rand::Error),
}

/// Returns a random string of exactly `n` characters from the url
/// safe base64 alphabet.
pub fn random_string(n: usize) -> Result<String, RandomError> {
	// base64 expands by 4/3, round the byte count up
	let byte_len = (n * 3).div_ceil(4);
	let mut bytes = vec![0u8; byte_len];
	OsRng.try_fill_bytes(&mut bytes)?;

	let mut s = URL_SAFE_NO_PAD.encode(&bytes);
	s.truncate(n);
	Ok(s)
}
