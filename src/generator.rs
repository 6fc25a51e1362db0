use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

use crate::alphabet::{encode_timestamp, Order, BASE, ID_LEN, SUFFIX_LEN, TIMESTAMP_LEN};
use crate::clock::{Clock, SystemClock};
use crate::config::{GeneratorConfig, SuffixPolicy};

/// Snapshot of what a generator remembers between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorState {
    /// Millisecond of the most recent call, `None` before the first one.
    pub last_timestamp_ms: Option<u64>,
    /// Suffix digits of the most recent identifier. Index 0 is the least
    /// significant digit and becomes the final character.
    pub last_random_digits: [u8; SUFFIX_LEN],
}

struct Inner {
    state: GeneratorState,
    rng: StdRng,
}

/// Produces 20-character, lexicographically sortable identifiers.
///
/// Each identifier is an 8-character timestamp followed by a 12-character
/// suffix. Calls that share a millisecond reuse the previous suffix plus one,
/// so identifiers from one generator never repeat and stay in call order.
pub struct Generator<C: Clock = SystemClock> {
    inner: Mutex<Inner>,
    clock: C,
    suffix_policy: SuffixPolicy,
}

impl Generator<SystemClock> {
    /// Wall-clock generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_config(&GeneratorConfig::default(), SystemClock)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_config(&GeneratorConfig::seeded(seed), SystemClock)
    }
}

impl Default for Generator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Generator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::from_config(&GeneratorConfig::default(), clock)
    }

    pub fn from_config(config: &GeneratorConfig, clock: C) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let last_random_digits = random_digits(&mut rng);

        debug!(
            seeded = config.seed.is_some(),
            suffix_policy = ?config.suffix_policy,
            "created identifier generator"
        );

        Self {
            inner: Mutex::new(Inner {
                state: GeneratorState {
                    last_timestamp_ms: None,
                    last_random_digits,
                },
                rng,
            }),
            clock,
            suffix_policy: config.suffix_policy,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn suffix_policy(&self) -> SuffixPolicy {
        self.suffix_policy
    }

    pub fn state(&self) -> GeneratorState {
        self.lock().state
    }

    pub fn ascending(&self) -> String {
        self.generate(Order::Ascending)
    }

    pub fn descending(&self) -> String {
        self.generate(Order::Descending)
    }

    pub fn ascending_from(&self, timestamp_ms: u64) -> String {
        self.generate_from(timestamp_ms, Order::Ascending)
    }

    pub fn descending_from(&self, timestamp_ms: u64) -> String {
        self.generate_from(timestamp_ms, Order::Descending)
    }

    /// Identifier for the clock's current millisecond.
    pub fn generate(&self, order: Order) -> String {
        // Read under the lock so timestamps follow lock order.
        self.generate_with(order, || self.clock.now_ms())
    }

    /// Identifier for `timestamp_ms`, which the caller may back- or post-date.
    pub fn generate_from(&self, timestamp_ms: u64, order: Order) -> String {
        self.generate_with(order, || timestamp_ms)
    }

    fn generate_with(&self, order: Order, timestamp_ms: impl FnOnce() -> u64) -> String {
        let mut id = [0u8; ID_LEN];

        let timestamp_ms = {
            let mut inner = self.lock();
            let Inner { state, rng } = &mut *inner;
            let timestamp_ms = timestamp_ms();

            if state.last_timestamp_ms == Some(timestamp_ms) {
                if increment(&mut state.last_random_digits) {
                    warn!(
                        timestamp_ms,
                        "suffix counter wrapped, identifiers in this millisecond are out of order"
                    );
                }
            } else if self.suffix_policy == SuffixPolicy::Reseed {
                state.last_random_digits = random_digits(rng);
            }
            state.last_timestamp_ms = Some(timestamp_ms);

            for (i, &digit) in state.last_random_digits.iter().enumerate() {
                id[ID_LEN - 1 - i] = order.symbol(digit);
            }
            timestamp_ms
        };

        let mut prefix = [0u8; TIMESTAMP_LEN];
        encode_timestamp(timestamp_ms, order, &mut prefix);
        id[..TIMESTAMP_LEN].copy_from_slice(&prefix);

        id.iter().map(|&b| b as char).collect()
    }

    // State is plain data and never left half-written; poisoning is ignored.
    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn random_digits(rng: &mut StdRng) -> [u8; SUFFIX_LEN] {
    let mut digits = [0u8; SUFFIX_LEN];
    for digit in digits.iter_mut() {
        *digit = rng.random_range(0..BASE as u8);
    }
    digits
}

/// Add one to the suffix, least significant digit first. Returns `true` when
/// the carry ran off the top and the suffix wrapped to all zeros.
fn increment(digits: &mut [u8; SUFFIX_LEN]) -> bool {
    for digit in digits.iter_mut() {
        *digit += 1;
        if (*digit as usize) < BASE {
            return false;
        }
        *digit = 0;
    }
    true
}
