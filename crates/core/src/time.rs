//! Pure timezone conversion for naive timestamps.
//!
//! Persisted `created_on` values carry no zone information and are written in
//! UTC, while callers supply wall-clock timestamps in their configured zone.
//! Range comparisons against the store are only correct after converting the
//! caller's bounds through these helpers. The source zone is always an
//! explicit parameter; nothing here reads process-global zone state.

use chrono::{Duration, LocalResult, NaiveDateTime, TimeZone, Timelike};

/// Convert a wall-clock timestamp in `zone` to the equivalent naive UTC
/// timestamp.
///
/// DST edge cases are resolved deterministically:
/// - an ambiguous wall-clock time (clocks rolled back) maps to the earlier of
///   the two instants;
/// - a non-existent wall-clock time (clocks sprang forward) is slid forward
///   across the transition, assuming the usual one-hour gap.
pub fn local_to_utc<Z: TimeZone>(local: NaiveDateTime, zone: &Z) -> NaiveDateTime {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(instant) => instant.naive_utc(),
        LocalResult::Ambiguous(earliest, _) => earliest.naive_utc(),
        LocalResult::None => {
            let slid = local + Duration::hours(1);
            zone.from_local_datetime(&slid)
                .earliest()
                .map_or(slid, |instant| instant.naive_utc())
        }
    }
}

/// Convert a naive UTC timestamp back to wall-clock time in `zone`.
pub fn utc_to_local<Z: TimeZone>(utc: NaiveDateTime, zone: &Z) -> NaiveDateTime {
    zone.from_utc_datetime(&utc).naive_local()
}

/// Drop sub-millisecond precision from a timestamp.
///
/// The store keeps `created_on` at millisecond resolution; truncating before
/// writes keeps inclusive range comparisons exact on read.
#[must_use]
pub fn truncate_to_millis(value: NaiveDateTime) -> NaiveDateTime {
    let nanos = value.nanosecond();
    value
        .with_nanosecond(nanos - nanos % 1_000_000)
        .unwrap_or(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Offset};

    use super::*;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    /// A zone with central-European 2022 DST rules: UTC+1, switching to UTC+2
    /// between 2022-03-27 02:00 and 2022-10-30 03:00 local time.
    #[derive(Debug, Clone, Copy)]
    struct Cet2022;

    impl Cet2022 {
        fn winter() -> FixedOffset {
            FixedOffset::east_opt(3600).unwrap()
        }

        fn summer() -> FixedOffset {
            FixedOffset::east_opt(2 * 3600).unwrap()
        }
    }

    impl TimeZone for Cet2022 {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            Self
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let gap_start = dt(2022, 3, 27, 2, 0, 0);
            let gap_end = dt(2022, 3, 27, 3, 0, 0);
            let fold_start = dt(2022, 10, 30, 2, 0, 0);
            let fold_end = dt(2022, 10, 30, 3, 0, 0);

            if (gap_start..gap_end).contains(local) {
                LocalResult::None
            } else if (fold_start..fold_end).contains(local) {
                LocalResult::Ambiguous(Self::summer(), Self::winter())
            } else if (gap_end..fold_start).contains(local) {
                LocalResult::Single(Self::summer())
            } else {
                LocalResult::Single(Self::winter())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            let summer_start = dt(2022, 3, 27, 1, 0, 0);
            let summer_end = dt(2022, 10, 30, 1, 0, 0);
            if (summer_start..summer_end).contains(utc) {
                Self::summer()
            } else {
                Self::winter()
            }
        }
    }

    #[test]
    fn converts_fixed_offset_to_utc() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = dt(2022, 6, 15, 12, 0, 0);
        assert_eq!(local_to_utc(local, &zone), dt(2022, 6, 15, 10, 0, 0));
    }

    #[test]
    fn utc_zone_is_identity() {
        let local = dt(2022, 6, 15, 12, 0, 0);
        assert_eq!(local_to_utc(local, &chrono::Utc), local);
        assert_eq!(utc_to_local(local, &chrono::Utc), local);
    }

    #[test]
    fn round_trips_through_local() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = dt(2022, 1, 10, 23, 45, 1);
        assert_eq!(utc_to_local(local_to_utc(local, &zone), &zone), local);
    }

    #[test]
    fn ambiguous_wall_clock_maps_to_earlier_instant() {
        // 02:30 occurs twice on 2022-10-30; the summer (+02:00) reading
        // comes first, so 02:30 local resolves to 00:30 UTC.
        let local = dt(2022, 10, 30, 2, 30, 0);
        assert_eq!(local_to_utc(local, &Cet2022), dt(2022, 10, 30, 0, 30, 0));
    }

    #[test]
    fn gap_wall_clock_slides_forward() {
        // 02:30 never occurs on 2022-03-27; it slides to 03:30 summer time,
        // which is 01:30 UTC.
        let local = dt(2022, 3, 27, 2, 30, 0);
        assert_eq!(local_to_utc(local, &Cet2022), dt(2022, 3, 27, 1, 30, 0));
    }

    #[test]
    fn truncates_to_millisecond_precision() {
        let value = dt(2022, 6, 15, 12, 34, 56)
            .with_nanosecond(123_456_789)
            .unwrap();
        let truncated = truncate_to_millis(value);
        assert_eq!(truncated.nanosecond(), 123_000_000);
        assert_eq!(truncate_to_millis(truncated), truncated);
    }

    #[test]
    fn offsets_are_what_the_fixture_says() {
        assert_eq!(Cet2022.offset_from_utc_datetime(&dt(2022, 1, 1, 0, 0, 0)).fix(), Cet2022::winter());
        assert_eq!(Cet2022.offset_from_utc_datetime(&dt(2022, 7, 1, 0, 0, 0)).fix(), Cet2022::summer());
    }
}
