//! Doctor id generation.

use chrono::{DateTime, Utc};
use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// `doctor-<unix-millis>-<9 random base36 chars>`, stamped with `now`.
#[must_use]
pub fn generate_doctor_id<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect();
    format!("doctor-{}-{suffix}", now.timestamp_millis())
}

/// A fresh id using the current time and the thread-local RNG.
#[must_use]
pub fn new_doctor_id() -> String {
    generate_doctor_id(Utc::now(), &mut rand::rng())
}
