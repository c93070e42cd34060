/*!
Log-likelihoods for Phred+33 base quality codes.

The tables are computed by the build script and cover the Illumina
1.8 range, `'!'` (Q0) through `'J'` (Q41). Codes outside that range are
clamped to the nearest end of it rather than rejected.
*/

use crate::error::{Error, Result};

#[allow(unused_imports)]
use log::{debug, trace};

include!(concat!(env!("OUT_DIR"), "/quality_table.rs"));

pub const MIN_BASE_QUALITY: u8 = b'!';
pub const MAX_BASE_QUALITY: u8 = b'J';

const MAX_QUAL_INDEX: usize = (MAX_BASE_QUALITY - MIN_BASE_QUALITY) as usize;

// absorbs rounding in ln/pow so exact table values map back to their code
const INDEX_TOLERANCE: f64 = 1e-9;

#[inline]
fn qual_index(quality: u8) -> usize {
    if quality < MIN_BASE_QUALITY {
        trace!(
            "base quality {} below supported range, using {}",
            quality,
            MIN_BASE_QUALITY as char
        );
        0
    } else if quality > MAX_BASE_QUALITY {
        trace!(
            "base quality {} above supported range, using {}",
            quality,
            MAX_BASE_QUALITY as char
        );
        MAX_QUAL_INDEX
    } else {
        (quality - MIN_BASE_QUALITY) as usize
    }
}

/// Log-likelihood that a base with the given quality code should have
/// been a different base.
#[inline]
pub fn log_prob_error(quality: u8) -> f64 {
    LOG_ERROR_TABLE[qual_index(quality)]
}

/// Log-likelihood that a base with the given quality code was
/// observed without error.
#[inline]
pub fn log_prob_correct(quality: u8) -> f64 {
    LOG_CORRECT_TABLE[qual_index(quality)]
}

/// Map an error log-likelihood back to a quality code: the highest
/// supported code whose error log-likelihood is at least
/// `log_prob_error`, clamped to the supported range.
pub fn closest_code(log_prob_error: f64) -> u8 {
    let ln_3 = -LOG_ERROR_TABLE[0];
    let raw = (-10.0 * (log_prob_error + ln_3) / std::f64::consts::LN_10
        + INDEX_TOLERANCE)
        .floor();

    let index = if raw.is_nan() || raw < 0.0 {
        trace!("log error probability {} clamped to minimum", log_prob_error);
        0
    } else if raw > MAX_QUAL_INDEX as f64 {
        trace!("log error probability {} clamped to maximum", log_prob_error);
        MAX_QUAL_INDEX
    } else {
        raw as usize
    };

    MIN_BASE_QUALITY + index as u8
}

/// Combine several equal-length quality strings into one, averaging
/// the error probability at each position.
pub fn average_qualities(qualities: &[&[u8]]) -> Result<Vec<u8>> {
    let len = match qualities.first() {
        Some(first) => first.len(),
        None => return Ok(Vec::new()),
    };

    if let Some(other) = qualities.iter().find(|q| q.len() != len) {
        return Err(Error::QualityLengthMismatch {
            expected: len,
            found: other.len(),
        });
    }

    let count = qualities.len() as f64;

    let averaged = (0..len)
        .map(|pos| {
            let total: f64 = qualities
                .iter()
                .map(|q| log_prob_error(q[pos]).exp())
                .sum();
            closest_code((total / count).ln())
        })
        .collect();

    Ok(averaged)
}
