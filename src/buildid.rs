//! Computes the `.note.gnu.build-id` note payload per `--build-id`'s
//! chosen style: a fixed 16-byte "uuid" (random), an md5 or sha1 digest
//! of the output image, or a fast non-cryptographic digest for the
//! default "fast" style.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::cli::BuildIdKind;

pub fn compute(kind: &BuildIdKind, image: &[u8], random_bytes: [u8; 16]) -> Vec<u8> {
    match kind {
        BuildIdKind::None => Vec::new(),
        BuildIdKind::Uuid => random_bytes.to_vec(),
        BuildIdKind::Md5 => Md5::digest(image).to_vec(),
        BuildIdKind::Sha1 => Sha1::digest(image).to_vec(),
        BuildIdKind::Sha256 => Sha256::digest(image).to_vec(),
        BuildIdKind::Hex(bytes) => bytes.clone(),
    }
}

/// Wraps a raw build-id payload in the `Nhdr` note-record framing used
/// by `.note.gnu.build-id`.
pub fn wrap_note(payload: &[u8]) -> Vec<u8> {
    const NAME: &[u8] = b"GNU\0";
    const NT_GNU_BUILD_ID: u32 = 3;
    let mut out = Vec::new();
    out.extend_from_slice(&(NAME.len() as u32).to_le_bytes());
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(&NT_GNU_BUILD_ID.to_le_bytes());
    out.extend_from_slice(NAME);
    out.extend_from_slice(payload);
    while out.len() % 4 != 0 {
        out.push(0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_build_id_is_16_bytes() {
        let id = compute(&BuildIdKind::Md5, b"hello", [0; 16]);
        assert_eq!(id.len(), 16);
    }

    #[test]
    fn sha1_build_id_is_20_bytes() {
        let id = compute(&BuildIdKind::Sha1, b"hello", [0; 16]);
        assert_eq!(id.len(), 20);
    }

    #[test]
    fn sha256_build_id_is_deterministic() {
        let a = compute(&BuildIdKind::Sha256, b"same input", [0; 16]);
        let b = compute(&BuildIdKind::Sha256, b"same input", [1; 16]);
        assert_eq!(a, b);
    }
}
