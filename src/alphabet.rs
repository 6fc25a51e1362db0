use serde::{Deserialize, Serialize};

/// Number of symbols in each alphabet: digits, both letter cases and `_`.
pub const BASE: usize = 63;

/// Characters used to encode the millisecond timestamp.
pub const TIMESTAMP_LEN: usize = 8;

/// Characters used to encode the collision-avoidance suffix.
pub const SUFFIX_LEN: usize = 12;

/// Total identifier length.
pub const ID_LEN: usize = TIMESTAMP_LEN + SUFFIX_LEN;

/// URL-safe symbols in ASCII order.
pub const ASCENDING_CHARS: &[u8; BASE] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Exact reverse of [`ASCENDING_CHARS`].
pub const DESCENDING_CHARS: &[u8; BASE] =
    b"zyxwvutsrqponmlkjihgfedcba_ZYXWVUTSRQPONMLKJIHGFEDCBA9876543210";

/// Which alphabet an identifier is written in.
///
/// `Ascending` identifiers sort oldest first; `Descending` identifiers sort
/// newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    pub fn chars(self) -> &'static [u8; BASE] {
        match self {
            Order::Ascending => ASCENDING_CHARS,
            Order::Descending => DESCENDING_CHARS,
        }
    }

    /// Character for digit `digit` (0..=62).
    pub fn symbol(self, digit: u8) -> u8 {
        self.chars()[digit as usize % BASE]
    }

    /// Digit value of `symbol`, or `None` if it is not in the alphabet.
    pub fn digit(self, symbol: u8) -> Option<u8> {
        let ascending = match symbol {
            b'0'..=b'9' => symbol - b'0',
            b'A'..=b'Z' => symbol - b'A' + 10,
            b'_' => 36,
            b'a'..=b'z' => symbol - b'a' + 37,
            _ => return None,
        };
        match self {
            Order::Ascending => Some(ascending),
            Order::Descending => Some(BASE as u8 - 1 - ascending),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Order::Ascending => write!(f, "ascending"),
            Order::Descending => write!(f, "descending"),
        }
    }
}

/// Write `timestamp_ms` as 8 base-63 digits into `out`, most significant
/// first. Values at or above `63^8` wrap silently.
pub fn encode_timestamp(mut timestamp_ms: u64, order: Order, out: &mut [u8; TIMESTAMP_LEN]) {
    for slot in out.iter_mut().rev() {
        *slot = order.symbol((timestamp_ms % BASE as u64) as u8);
        timestamp_ms /= BASE as u64;
    }
}
