use std::path::Path;

use gdark_common::PatchError;
use sha2::{Digest, Sha256};

/// Lower-case hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Digest from a `.sha256` sidecar: `<hex>` or `<hex>  <file name>`.
pub fn parse_sidecar(text: &str) -> Option<String> {
    let digest = text.split_whitespace().next()?;
    (digest.len() == 64 && digest.chars().all(|c| c.is_ascii_hexdigit()))
        .then(|| digest.to_ascii_lowercase())
}

/// Fail with [`PatchError::Integrity`] unless `bytes` hash to `expected`.
pub fn verify(path: &Path, bytes: &[u8], expected: &str) -> Result<(), PatchError> {
    let actual = sha256_hex(bytes);
    if actual.eq_ignore_ascii_case(expected.trim()) {
        Ok(())
    } else {
        Err(PatchError::Integrity {
            path: path.to_path_buf(),
            expected: expected.trim().to_ascii_lowercase(),
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn known_digest() {
        assert_eq!(sha256_hex(b"abc"), ABC);
    }

    #[test]
    fn sidecar_formats() {
        assert_eq!(parse_sidecar(ABC).as_deref(), Some(ABC));
        assert_eq!(
            parse_sidecar(&format!("{}  flatlaf-2.5.jar\n", ABC.to_uppercase())).as_deref(),
            Some(ABC)
        );
        assert_eq!(parse_sidecar(""), None);
        assert_eq!(parse_sidecar("not-a-digest"), None);
    }

    #[test]
    fn verify_accepts_any_case() {
        assert!(verify(Path::new("x.jar"), b"abc", &ABC.to_uppercase()).is_ok());
    }

    #[test]
    fn verify_reports_both_digests() {
        let err = verify(Path::new("x.jar"), b"abd", ABC).unwrap_err();
        match err {
            PatchError::Integrity {
                path,
                expected,
                actual,
            } => {
                assert_eq!(path, Path::new("x.jar"));
                assert_eq!(expected, ABC);
                assert_ne!(actual, ABC);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
