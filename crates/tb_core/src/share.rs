//! Shareable roster codec.
//!
//! A roster travels between devices as a compact string: versioned payload
//! → MessagePack → LZ4 (size prepended) → SHA-256 checksum suffix →
//! URL-safe base64. Decoding verifies the checksum before touching the
//! payload, so a truncated or tampered code fails loudly instead of
//! importing garbage.

use crate::models::{Player, PlayerId};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Share format version for forward-compat checks.
pub const SHARE_VERSION: u32 = 1;

const CHECKSUM_LEN: usize = 32;

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("invalid share code")]
    InvalidEncoding,

    #[error("Decompression error")]
    Decompression,

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("Unsupported share version: found {found}, expected at most {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

#[derive(Serialize, Deserialize, Debug)]
struct SharePayload {
    version: u32,
    players: Vec<Player>,
}

/// Encode a roster as a transportable share code.
pub fn encode_share(players: &[Player]) -> Result<String, ShareError> {
    let payload = SharePayload { version: SHARE_VERSION, players: players.to_vec() };

    let msgpack = to_vec_named(&payload)?;
    let mut bytes = compress_prepend_size(&msgpack);

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let checksum = hasher.finalize();
    bytes.extend_from_slice(&checksum);

    log::debug!("encoded share code for {} players ({} bytes)", players.len(), bytes.len());
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Decode a share code back into a roster.
pub fn decode_share(code: &str) -> Result<Vec<Player>, ShareError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(code.trim())
        .map_err(|_| ShareError::InvalidEncoding)?;

    // Minimum size: LZ4 length prefix plus checksum.
    if bytes.len() < 4 + CHECKSUM_LEN {
        return Err(ShareError::InvalidEncoding);
    }

    let (payload, checksum) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    let mut hasher = Sha256::new();
    hasher.update(payload);
    if hasher.finalize().as_slice() != checksum {
        return Err(ShareError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| ShareError::Decompression)?;
    let decoded: SharePayload = from_slice(&msgpack)?;

    if decoded.version > SHARE_VERSION {
        return Err(ShareError::VersionMismatch {
            found: decoded.version,
            expected: SHARE_VERSION,
        });
    }

    Ok(decoded.players)
}

/// Merge `incoming` over `base` by id, last writer wins. Surviving `base`
/// entries keep their positions; new ids append in `incoming` order.
pub fn merge_by_id(base: Vec<Player>, incoming: Vec<Player>) -> Vec<Player> {
    let mut merged = base;
    for player in incoming {
        match merged.iter_mut().find(|p| p.id == player.id) {
            Some(slot) => *slot = player,
            None => merged.push(player),
        }
    }
    merged
}

/// Ids present in a roster, in roster order. Handy for "select everyone"
/// callers and for asserting merge outcomes.
pub fn roster_ids(players: &[Player]) -> Vec<PlayerId> {
    players.iter().map(|p| p.id).collect()
}
