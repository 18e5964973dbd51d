//! Identifier codec shared by every service.
//!
//! Identifiers cross the wire as the UTF-8 bytes of the canonical
//! 8-4-4-4-12 UUID string, so they stay readable in transit logs. Rows
//! store them as 16 bytes in the time-first layout (time_hi, time_mid,
//! time_low, then the trailing 8 bytes unchanged), bit-compatible with
//! data migrated from the original binary(16) columns.
//!
//! No other module parses or reorders identifiers. Both representations
//! round-trip exactly.

use uuid::Uuid;

use crate::error::RococoError;

/// Parse the wire form of an identifier.
///
/// Fails with `InvalidArgument` on anything that is not the UTF-8 canonical
/// string form of a UUID.
pub fn decode(wire: &[u8]) -> Result<Uuid, RococoError> {
    let text = std::str::from_utf8(wire)
        .map_err(|_| RococoError::InvalidArgument("id is not valid UTF-8".into()))?;
    Uuid::try_parse(text)
        .map_err(|_| RococoError::InvalidArgument(format!("malformed id: {text}")))
}

/// Serialize an identifier to its wire form.
pub fn encode(id: Uuid) -> Vec<u8> {
    id.to_string().into_bytes()
}

/// Reorder an identifier into the 16-byte time-first storage layout.
pub fn to_storage(id: Uuid) -> [u8; 16] {
    let b = id.as_bytes();
    [
        b[6], b[7], b[4], b[5], b[0], b[1], b[2], b[3], b[8], b[9], b[10], b[11], b[12], b[13],
        b[14], b[15],
    ]
}

/// Recover an identifier from the time-first storage layout.
///
/// A stored id of the wrong length is data corruption, not caller error,
/// so it surfaces as `Internal`.
pub fn from_storage(stored: &[u8]) -> Result<Uuid, RococoError> {
    let s: &[u8; 16] = stored.try_into().map_err(|_| {
        RococoError::Internal(anyhow::anyhow!(
            "stored id has {} bytes, expected 16",
            stored.len()
        ))
    })?;
    Ok(Uuid::from_bytes([
        s[4], s[5], s[6], s[7], s[2], s[3], s[0], s[1], s[8], s[9], s[10], s[11], s[12], s[13],
        s[14], s[15],
    ]))
}
