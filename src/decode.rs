//! Reading identifiers back into their parts.
//!
//! An identifier does not say which alphabet wrote it, so every function
//! here takes the [`Order`] it was generated with.

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

use crate::alphabet::{Order, BASE, ID_LEN, SUFFIX_LEN, TIMESTAMP_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("identifier must be 20 bytes, got {len}")]
    InvalidLength { len: usize },

    #[error("invalid character {ch:?} at position {position} for {order} identifier")]
    InvalidChar {
        ch: char,
        position: usize,
        order: Order,
    },
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// The two halves of an identifier as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Milliseconds since the epoch, modulo `63^8`.
    pub timestamp_ms: u64,
    /// Suffix digits, index 0 least significant, matching
    /// [`GeneratorState::last_random_digits`](crate::GeneratorState).
    pub suffix: [u8; SUFFIX_LEN],
}

pub fn decode(id: &str, order: Order) -> Result<Decoded> {
    let bytes = id.as_bytes();
    if bytes.len() != ID_LEN {
        return Err(DecodeError::InvalidLength { len: bytes.len() });
    }

    let mut digits = [0u8; ID_LEN];
    for (position, (&symbol, slot)) in bytes.iter().zip(digits.iter_mut()).enumerate() {
        *slot = order.digit(symbol).ok_or_else(|| DecodeError::InvalidChar {
            // Every earlier byte was ASCII, so `position` is a char boundary.
            ch: id
                .get(position..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(symbol as char),
            position,
            order,
        })?;
    }

    let timestamp_ms = digits[..TIMESTAMP_LEN]
        .iter()
        .fold(0u64, |acc, &d| acc * BASE as u64 + d as u64);

    let mut suffix = [0u8; SUFFIX_LEN];
    for (i, digit) in suffix.iter_mut().enumerate() {
        *digit = digits[ID_LEN - 1 - i];
    }

    Ok(Decoded {
        timestamp_ms,
        suffix,
    })
}

pub fn timestamp_ms(id: &str, order: Order) -> Result<u64> {
    Ok(decode(id, order)?.timestamp_ms)
}

pub fn timestamp(id: &str, order: Order) -> Result<DateTime<Utc>> {
    // Decoded values stay below 63^8 ms, far inside chrono's range.
    let timestamp_ms = timestamp_ms(id, order)? as i64;
    Ok(DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(timestamp_ms))
}

pub fn is_valid(id: &str, order: Order) -> bool {
    decode(id, order).is_ok()
}
