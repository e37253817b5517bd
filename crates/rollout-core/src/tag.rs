use std::fmt;

use chrono::{NaiveDateTime, SubsecRound};

use crate::clock::Clock;

const TAG_FORMAT: &str = "v%Y%m%d-%H%M%S";
const TAG_LEN: usize = "vYYYYMMDD-HHMMSS".len();

/// Time-derived release identifier of the form `v<YYYYMMDD>-<HHMMSS>`.
///
/// Tags have second granularity, so two releases started within the same
/// second get the same tag. Ordering follows the embedded instant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseTag {
    instant: NaiveDateTime,
    text: String,
}

impl ReleaseTag {
    /// Tag for the given instant, truncated to whole seconds.
    pub fn at(instant: NaiveDateTime) -> Self {
        let instant = instant.trunc_subsecs(0);
        Self {
            text: instant.format(TAG_FORMAT).to_string(),
            instant,
        }
    }

    /// Tag for the clock's current instant.
    pub fn generate(clock: &impl Clock) -> Self {
        Self::at(clock.now())
    }

    /// Parse a previously generated tag, e.g. one read back from a cluster.
    pub fn parse(input: &str) -> crate::Result<Self> {
        if !has_tag_shape(input) {
            return Err(crate::Error::InvalidTag(input.to_owned()));
        }
        let instant = NaiveDateTime::parse_from_str(input, TAG_FORMAT)
            .map_err(|_| crate::Error::InvalidTag(input.to_owned()))?;
        Ok(Self {
            instant,
            text: input.to_owned(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.instant
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn has_tag_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == TAG_LEN
        && bytes[0] == b'v'
        && bytes[9] == b'-'
        && bytes[1..9].iter().all(u8::is_ascii_digit)
        && bytes[10..].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn formats_date_and_time() {
        let tag = ReleaseTag::at(instant(2024, 5, 20, 14, 30, 0));
        assert_eq!(tag.as_str(), "v20240520-143000");
    }

    #[test]
    fn pads_single_digit_fields() {
        let tag = ReleaseTag::at(instant(2025, 1, 2, 3, 4, 5));
        assert_eq!(tag.to_string(), "v20250102-030405");
    }

    #[test]
    fn drops_subsecond_precision() {
        let base = instant(2024, 5, 20, 14, 30, 0);
        let later = base + chrono::Duration::milliseconds(999);
        assert_eq!(ReleaseTag::at(base), ReleaseTag::at(later));
    }

    #[test]
    fn generate_reads_clock() {
        let clock = FixedClock(instant(2024, 12, 31, 23, 59, 59));
        assert_eq!(ReleaseTag::generate(&clock).as_str(), "v20241231-235959");
    }

    #[test]
    fn parse_accepts_generated_tag() {
        let tag = ReleaseTag::parse("v20240520-143000").unwrap();
        assert_eq!(tag.timestamp(), instant(2024, 5, 20, 14, 30, 0));
    }

    #[test]
    fn parse_rejects_malformed_tags() {
        for bad in [
            "",
            "latest",
            "20240520-143000",
            "v20240520143000",
            "v2024052-1430001",
            "v20240520-14300",
            "v20240520-1430000",
            "V20240520-143000",
            "v2024O520-143000",
        ] {
            assert!(ReleaseTag::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert!(ReleaseTag::parse("v20241332-143000").is_err());
        assert!(ReleaseTag::parse("v20240520-256000").is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_instant() -> impl Strategy<Value = NaiveDateTime> {
            // 1970-01-01 .. 9999-12-31, second resolution plus sub-second noise
            (0i64..253_402_300_799, 0u32..1_000_000_000).prop_map(|(secs, nanos)| {
                chrono::DateTime::from_timestamp(secs, nanos)
                    .unwrap()
                    .naive_utc()
            })
        }

        proptest! {
            #[test]
            fn tag_has_fixed_shape(t in any_instant()) {
                let tag = ReleaseTag::at(t);
                prop_assert!(has_tag_shape(tag.as_str()), "bad shape: {}", tag);
            }

            #[test]
            fn tag_round_trips_its_instant(t in any_instant()) {
                let tag = ReleaseTag::at(t);
                let parsed = ReleaseTag::parse(tag.as_str()).unwrap();
                prop_assert_eq!(parsed.timestamp(), t.trunc_subsecs(0));
            }

            #[test]
            fn tags_never_go_backwards(a in any_instant(), b in any_instant()) {
                let (early, late) = if a <= b { (a, b) } else { (b, a) };
                let (early, late) = (ReleaseTag::at(early), ReleaseTag::at(late));
                prop_assert!(early <= late);
                prop_assert!(early.as_str() <= late.as_str());
            }

            #[test]
            fn a_second_apart_means_distinct(t in any_instant(), gap in 1i64..86_400) {
                let later = t + chrono::Duration::seconds(gap);
                prop_assert_ne!(ReleaseTag::at(t), ReleaseTag::at(later));
            }
        }
    }
}
