//! # Synthetic Date Sampler

use chrono::{Days, NaiveDate};
use datechipper::normalize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::errors::{DataResult, DatasetError};
use crate::formats::{DisplayFormat, FORMAT_CHOICES};

/// A generated dataset example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePair {
    /// Human-readable rendering; lowercase, commas stripped.
    pub human: String,

    /// Machine-readable ISO calendar form, `YYYY-MM-DD`.
    pub machine: String,
}

/// Render one (human, machine) pair for a date and display format.
///
/// ## Returns
/// The pair, or `None` when the format/date combination has no valid
/// rendering; callers skip such samples.
pub fn render_pair(
    date: NaiveDate,
    format: DisplayFormat,
) -> Option<DatePair> {
    let human = normalize(&format.render(date)?);
    let machine = date.to_string();
    Some(DatePair { human, machine })
}

/// Options for [`DateSampler`].
#[derive(Debug, Clone)]
pub struct DateSamplerOptions {
    /// Seed for the sampler's private random source.
    pub seed: u64,

    /// First year dates are sampled from.
    pub min_year: i32,

    /// Last year dates are sampled from.
    pub max_year: i32,
}

impl Default for DateSamplerOptions {
    fn default() -> Self {
        Self {
            seed: 12345,
            min_year: 1970,
            max_year: 2025,
        }
    }
}

impl DateSamplerOptions {
    /// Create options with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Sets the sampled year range, inclusive on both ends.
    pub fn with_year_range(
        self,
        min_year: i32,
        max_year: i32,
    ) -> Self {
        Self {
            min_year,
            max_year,
            ..self
        }
    }

    /// Initializes a [`DateSampler`] from these options.
    ///
    /// ## Returns
    /// A new `DateSampler`, or an error for an empty or unrepresentable
    /// year range.
    pub fn init(self) -> DataResult<DateSampler> {
        let range_err = || DatasetError::YearRange {
            min_year: self.min_year,
            max_year: self.max_year,
        };

        if self.min_year > self.max_year {
            return Err(range_err());
        }

        let first = NaiveDate::from_ymd_opt(self.min_year, 1, 1).ok_or_else(range_err)?;
        let last = NaiveDate::from_ymd_opt(self.max_year, 12, 31).ok_or_else(range_err)?;
        let span_days = (last - first).num_days() as u64;

        Ok(DateSampler {
            rng: StdRng::seed_from_u64(self.seed),
            first,
            span_days,
        })
    }
}

/// Draws random (date, format) combinations and renders them as pairs.
///
/// The random source is owned and explicitly seeded; two samplers built
/// from the same options produce identical streams. There is no
/// process-global random state.
#[derive(Debug)]
pub struct DateSampler {
    rng: StdRng,
    first: NaiveDate,
    span_days: u64,
}

impl DateSampler {
    /// Sample a date uniformly from the configured range.
    pub fn sample_date(&mut self) -> NaiveDate {
        use rand::Rng;

        let offset = self.rng.random_range(0..=self.span_days);
        // Offsets are bounded by the checked range construction.
        self.first
            .checked_add_days(Days::new(offset))
            .unwrap_or(self.first)
    }

    /// Sample a display format from the weighted choice table.
    pub fn sample_format(&mut self) -> DisplayFormat {
        // The table is a non-empty static; choose cannot fail.
        *FORMAT_CHOICES.choose(&mut self.rng).unwrap_or(&FORMAT_CHOICES[0])
    }

    /// One generation attempt.
    ///
    /// ## Returns
    /// A rendered pair, or `None` when the drawn format/date combination
    /// has no valid rendering; the attempt is skipped, not an error.
    pub fn next_pair(&mut self) -> Option<DatePair> {
        let date = self.sample_date();
        let format = self.sample_format();
        render_pair(date, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pair_normalizes() {
        let date = NaiveDate::from_ymd_opt(1998, 5, 9).unwrap();

        let pair = render_pair(date, DisplayFormat::Full).unwrap();
        assert_eq!(pair.human, "saturday may 9 1998");
        assert_eq!(pair.machine, "1998-05-09");
    }

    #[test]
    fn test_sampler_is_deterministic() {
        let mut a = DateSamplerOptions::new(7).init().unwrap();
        let mut b = DateSamplerOptions::new(7).init().unwrap();

        for _ in 0..64 {
            assert_eq!(a.next_pair(), b.next_pair());
        }
    }

    #[test]
    fn test_seed_changes_the_stream() {
        let mut a = DateSamplerOptions::new(1).init().unwrap();
        let mut b = DateSamplerOptions::new(2).init().unwrap();

        let stream_a: Vec<_> = (0..32).filter_map(|_| a.next_pair()).collect();
        let stream_b: Vec<_> = (0..32).filter_map(|_| b.next_pair()).collect();
        assert_ne!(stream_a, stream_b);
    }

    #[test]
    fn test_dates_stay_in_range() {
        let mut sampler = DateSamplerOptions::new(99)
            .with_year_range(1990, 1991)
            .init()
            .unwrap();

        for _ in 0..256 {
            let date = sampler.sample_date();
            assert!((1990..=1991).contains(&chrono::Datelike::year(&date)));
        }
    }

    #[test]
    fn test_empty_range_is_rejected() {
        assert!(matches!(
            DateSamplerOptions::new(0).with_year_range(2000, 1990).init(),
            Err(DatasetError::YearRange { .. })
        ));
    }
}
