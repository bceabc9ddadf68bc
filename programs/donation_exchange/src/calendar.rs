/**
 * Civil Calendar
 *
 * Unix timestamp -> proleptic Gregorian (year, month, day).
 * Used to bucket subsidy claims into civil months.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use crate::math::{add, div, div_with, modulo, mul, sub, MathError};
use crate::SECONDS_PER_DAY;

/// Days from 0000-03-01 to 1970-01-01
const EPOCH_SHIFT_DAYS: u64 = 719_468;
/// Days in a 400-year Gregorian era
const DAYS_PER_ERA: u64 = 146_097;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CivilDate {
    pub year: u64,
    /// 1..=12
    pub month: u8,
    /// 1..=31
    pub day: u8,
}

/// Month-granularity stamp. Ordered by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CivilMonth {
    pub year: u64,
    pub month: u8,
}

impl CivilDate {
    pub fn month(&self) -> CivilMonth {
        CivilMonth {
            year: self.year,
            month: self.month,
        }
    }
}

/// Decompose a Unix timestamp (seconds) into its civil date.
/// Timestamps before the epoch are clamped to 1970-01-01.
pub fn civil_date(timestamp: i64) -> Result<CivilDate, MathError> {
    let seconds = timestamp.max(0) as u64;
    let days = div_with(seconds, SECONDS_PER_DAY, "seconds per day")?;

    // Shift to an era starting on March 1st so the leap day falls last.
    let z = add(days, EPOCH_SHIFT_DAYS)?;
    let era = div(z, DAYS_PER_ERA)?;
    let doe = modulo(z, DAYS_PER_ERA)?; // [0, 146096]

    // year of era, [0, 399]
    let yoe = div(
        sub(add(sub(doe, div(doe, 1_460)?)?, div(doe, 36_524)?)?, div(doe, 146_096)?)?,
        365,
    )?;
    // day of year counted from March 1st, [0, 365]
    let doy = sub(
        doe,
        sub(add(mul(365, yoe)?, div(yoe, 4)?)?, div(yoe, 100)?)?,
    )?;
    // month counted from March, [0, 11]
    let mp = div(add(mul(5, doy)?, 2)?, 153)?;

    let day = add(sub(doy, div(add(mul(153, mp)?, 2)?, 5)?)?, 1)?;
    let month = if mp < 10 { add(mp, 3)? } else { sub(mp, 9)? };

    let mut year = add(yoe, mul(era, 400)?)?;
    if month <= 2 {
        year = add(year, 1)?;
    }

    Ok(CivilDate {
        year,
        month: month as u8,
        day: day as u8,
    })
}

pub fn civil_month(timestamp: i64) -> Result<CivilMonth, MathError> {
    Ok(civil_date(timestamp)?.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u64, month: u8, day: u8) -> CivilDate {
        CivilDate { year, month, day }
    }

    #[test]
    fn epoch_zero_is_january_1970() {
        assert_eq!(civil_date(0).unwrap(), date(1970, 1, 1));
        assert_eq!(civil_date(SECONDS_PER_DAY as i64 - 1).unwrap(), date(1970, 1, 1));
        assert_eq!(civil_date(SECONDS_PER_DAY as i64).unwrap(), date(1970, 1, 2));
    }

    #[test]
    fn negative_timestamps_clamp_to_epoch() {
        assert_eq!(civil_date(-1).unwrap(), date(1970, 1, 1));
        assert_eq!(civil_date(i64::MIN).unwrap(), date(1970, 1, 1));
    }

    #[test]
    fn known_dates() {
        assert_eq!(civil_date(1_609_804_800).unwrap(), date(2021, 1, 5));
        assert_eq!(civil_date(1_612_051_200).unwrap(), date(2021, 1, 31));
        assert_eq!(civil_date(1_612_137_600).unwrap(), date(2021, 2, 1));
        assert_eq!(civil_date(1_615_766_400).unwrap(), date(2021, 3, 15));
        assert_eq!(civil_date(1_640_908_800).unwrap(), date(2021, 12, 31));
        assert_eq!(civil_date(1_640_995_200).unwrap(), date(2022, 1, 1));
    }

    #[test]
    fn leap_days_and_century_years() {
        assert_eq!(civil_date(1_582_934_400).unwrap(), date(2020, 2, 29));
        assert_eq!(civil_date(951_782_400).unwrap(), date(2000, 2, 29));
        // 2100 is not a leap year: Feb 28th is followed by Mar 1st
        assert_eq!(civil_date(4_107_542_400).unwrap(), date(2100, 3, 1));
        assert_eq!(
            civil_date(4_107_542_400 - SECONDS_PER_DAY as i64).unwrap(),
            date(2100, 2, 28)
        );
    }

    #[test]
    fn same_month_regardless_of_day() {
        let early = civil_month(1_609_804_800).unwrap(); // 2021-01-05
        let late = civil_month(1_612_051_200 + 86_399).unwrap(); // 2021-01-31 23:59:59
        assert_eq!(early, late);
        assert_eq!(early, CivilMonth { year: 2021, month: 1 });
    }

    #[test]
    fn month_boundary_splits() {
        let jan = civil_month(1_612_051_200).unwrap(); // 2021-01-31
        let feb = civil_month(1_612_137_600).unwrap(); // 2021-02-01
        assert_ne!(jan, feb);
        assert!(jan < feb);
    }

    #[test]
    fn months_order_across_years() {
        let dec = civil_month(1_640_908_800).unwrap(); // 2021-12
        let jan = civil_month(1_640_995_200).unwrap(); // 2022-01
        assert!(dec < jan);
        assert!(civil_month(0).unwrap() < dec);
    }

    #[test]
    fn every_day_of_2021_is_a_valid_date() {
        let start = 1_609_459_200i64; // 2021-01-01
        let mut previous = civil_date(start).unwrap();
        assert_eq!(previous, date(2021, 1, 1));
        for d in 1..365 {
            let current = civil_date(start + d * SECONDS_PER_DAY as i64).unwrap();
            assert!(current > previous);
            assert!((1..=12).contains(&current.month));
            assert!((1..=31).contains(&current.day));
            previous = current;
        }
        assert_eq!(previous, date(2021, 12, 31));
    }

    #[test]
    fn far_future_does_not_overflow() {
        let far = civil_date(i64::MAX).unwrap();
        assert!(far.year > 292_000_000_000);
    }
}
