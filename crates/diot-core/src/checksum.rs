//! SHA-256 digests of written report files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{ConvertError, Result};

const BUFFER_SIZE: usize = 65536;

/// Hex-encoded SHA-256 of a file's bytes.
pub fn file_sha256(path: &Path) -> Result<String> {
    let checksum_error = |source| ConvertError::Checksum {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(checksum_error)?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    loop {
        let read = reader.read(&mut buffer).map_err(checksum_error)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    let digest = hex::encode(hasher.finalize());
    debug!(path = %path.display(), sha256 = %digest, "computed digest");
    Ok(digest)
}
