//! Exchange rate assignment
//!
//! New transactions get a pseudo-market rate before the edit form is shown.
//! The rate is drawn uniformly from the 4-dp ticks of an inclusive band, so
//! every value is exactly representable and both band ends are reachable.
//!
//! # Example
//! ```
//! use forex_management::rate::{assign_exchange_rate, RateBand, RngSource};
//! use forex_management::doctype::TransactionRecord;
//! use forex_management::types::TransactionType;
//! use rust_decimal::Decimal;
//!
//! let band = RateBand::default();
//! let mut source = RngSource::seeded(7);
//! let record = TransactionRecord::new("Abebe", "US Dollar (USD)", TransactionType::Buy, Decimal::from(100));
//!
//! let record = assign_exchange_rate(record, &band, &mut source);
//! let rate = record.exchange_rate.unwrap();
//! assert!(band.contains(rate));
//! assert_eq!(rate.scale(), 4);
//! ```

use crate::doctype::TransactionRecord;
use crate::error::{ForexError, Result};
use crate::types::{Rate, RATE_SCALE};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// Ticks per unit at 4 dp
const TICKS_PER_UNIT: i64 = 10_000;

/// Source of randomness for rate generation
pub trait RateSource {
    /// Pick an integer tick uniformly from `low..=high`
    fn pick_tick(&mut self, low: i64, high: i64) -> i64;
}

impl<S: RateSource + ?Sized> RateSource for Box<S> {
    fn pick_tick(&mut self, low: i64, high: i64) -> i64 {
        (**self).pick_tick(low, high)
    }
}

/// Adapts any `rand` generator into a [`RateSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local generator, for production use
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Deterministic generator for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RateSource for RngSource<R> {
    fn pick_tick(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }
}

/// Inclusive band of acceptable rates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateBand {
    low: Rate,
    high: Rate,
    /// First and last 4-dp tick inside the band
    ticks: (i64, i64),
}

impl RateBand {
    /// Create a band. Requires `low < high` with at least one 4-dp tick
    /// between them.
    pub fn new(low: Rate, high: Rate) -> Result<Self> {
        let invalid = |reason: &str| ForexError::InvalidRateBand {
            low: low.to_string(),
            high: high.to_string(),
            reason: reason.to_string(),
        };

        if low.is_sign_negative() || low.is_zero() {
            return Err(invalid("rates must be positive"));
        }
        if low >= high {
            return Err(invalid("low must be below high"));
        }

        let scale = Decimal::from(TICKS_PER_UNIT);
        let first = low.checked_mul(scale).and_then(|v| v.ceil().to_i64());
        let last = high.checked_mul(scale).and_then(|v| v.floor().to_i64());
        let ticks = match (first, last) {
            (Some(first), Some(last)) if first <= last => (first, last),
            (Some(_), Some(_)) => return Err(invalid("band contains no 4-dp value")),
            _ => return Err(invalid("band out of range")),
        };

        Ok(Self { low, high, ticks })
    }

    pub fn low(&self) -> Rate {
        self.low
    }

    pub fn high(&self) -> Rate {
        self.high
    }

    /// Whether `rate` lies inside the band, ends included
    pub fn contains(&self, rate: Rate) -> bool {
        self.low <= rate && rate <= self.high
    }

    /// Number of distinct values `sample` can return
    pub fn tick_count(&self) -> u64 {
        (self.ticks.1 - self.ticks.0) as u64 + 1
    }

    /// Draw a rate with exactly 4 decimal places
    pub fn sample(&self, source: &mut dyn RateSource) -> Rate {
        let (first, last) = self.ticks;
        let tick = source.pick_tick(first, last).clamp(first, last);
        Decimal::new(tick, RATE_SCALE)
    }
}

impl Default for RateBand {
    fn default() -> Self {
        Self {
            low: Decimal::new(135_0000, RATE_SCALE),
            high: Decimal::new(137_0000, RATE_SCALE),
            ticks: (135_0000, 137_0000),
        }
    }
}

impl fmt::Display for RateBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Return `record` with a freshly drawn exchange rate.
///
/// Any existing rate is ignored. Nothing is persisted.
pub fn assign_exchange_rate(
    mut record: TransactionRecord,
    band: &RateBand,
    source: &mut dyn RateSource,
) -> TransactionRecord {
    let rate = band.sample(source);
    log::debug!(
        "Assigned exchange rate {} to transaction {} (band {})",
        rate,
        record.draft_id,
        band
    );
    record.exchange_rate = Some(rate);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Always returns the lowest or highest tick
    struct Edge {
        high: bool,
    }

    impl RateSource for Edge {
        fn pick_tick(&mut self, low: i64, high: i64) -> i64 {
            if self.high {
                high
            } else {
                low
            }
        }
    }

    struct OutOfRange;

    impl RateSource for OutOfRange {
        fn pick_tick(&mut self, _low: i64, high: i64) -> i64 {
            high + 1_000_000
        }
    }

    #[test]
    fn test_default_band() {
        let band = RateBand::default();
        assert_eq!(band.low(), dec("135"));
        assert_eq!(band.high(), dec("137"));
        assert_eq!(band.to_string(), "[135.0000, 137.0000]");
    }

    #[test]
    fn test_band_validation() {
        assert!(RateBand::new(dec("137"), dec("135")).is_err());
        assert!(RateBand::new(dec("135"), dec("135")).is_err());
        assert!(RateBand::new(dec("0"), dec("1")).is_err());
        assert!(RateBand::new(dec("-1"), dec("1")).is_err());
        assert!(matches!(
            RateBand::new(dec("1.00001"), dec("1.00009")),
            Err(ForexError::InvalidRateBand { .. })
        ));
        assert!(RateBand::new(dec("1.00001"), dec("1.0001")).is_ok());
    }

    #[test]
    fn test_tick_count() {
        assert_eq!(RateBand::default().tick_count(), 20_001);
        assert_eq!(RateBand::new(dec("1.0001"), dec("1.0002")).unwrap().tick_count(), 2);
    }

    #[test]
    fn test_sample_band_edges() {
        let band = RateBand::default();

        let low = band.sample(&mut Edge { high: false });
        let high = band.sample(&mut Edge { high: true });

        assert_eq!(low.to_string(), "135.0000");
        assert_eq!(high.to_string(), "137.0000");
    }

    #[test]
    fn test_sample_rounds_inward() {
        let band = RateBand::new(dec("1.00005"), dec("1.00025")).unwrap();

        assert_eq!(band.sample(&mut Edge { high: false }), dec("1.0001"));
        assert_eq!(band.sample(&mut Edge { high: true }), dec("1.0002"));
    }

    #[test]
    fn test_sample_clamps_misbehaving_source() {
        let band = RateBand::default();
        assert_eq!(band.sample(&mut OutOfRange), dec("137"));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let band = RateBand::default();
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);

        for _ in 0..50 {
            assert_eq!(band.sample(&mut a), band.sample(&mut b));
        }
    }

    #[test]
    fn test_assign_overwrites_existing_rate() {
        let mut record =
            TransactionRecord::new("Abebe", "US Dollar (USD)", TransactionType::Buy, dec("100"));
        record.exchange_rate = Some(dec("1.5"));

        let record = assign_exchange_rate(record, &RateBand::default(), &mut Edge { high: false });

        assert_eq!(record.exchange_rate, Some(dec("135.0000")));
        assert!(record.is_new());
    }
}
