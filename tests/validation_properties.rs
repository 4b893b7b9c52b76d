//! Property tests for the channel setters that validate their input.

use proptest::prelude::*;
use rssgen::{Channel, ValidationError};

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn image(width: u32, height: u32) -> Result<Channel, ValidationError> {
    Channel::new().image_with("http://x/logo.png", "Logo", "http://x", width, height, None)
}

proptest! {
    #[test]
    fn image_accepts_all_valid_sizes(width in 1u32..=144, height in 1u32..=400) {
        prop_assert!(image(width, height).is_ok());
    }

    #[test]
    fn image_rejects_wide_sizes(width in 145u32..=u32::MAX, height in 1u32..=400) {
        prop_assert_eq!(image(width, height).unwrap_err(), ValidationError::ImageWidthOutOfRange(width));
    }

    #[test]
    fn image_rejects_tall_sizes(width in 1u32..=144, height in 401u32..=u32::MAX) {
        prop_assert_eq!(image(width, height).unwrap_err(), ValidationError::ImageHeightOutOfRange(height));
    }

    #[test]
    fn skip_hours_rejects_any_out_of_range_value(
        mut hours in prop::collection::vec(0i32..=23, 0..10),
        bad in prop_oneof![i32::MIN..=-1, 24i32..=i32::MAX],
        position in any::<prop::sample::Index>(),
    ) {
        let at = position.index(hours.len() + 1);
        hours.insert(at, bad);
        prop_assert_eq!(
            Channel::new().skip_hours(hours).unwrap_err(),
            ValidationError::SkipHourOutOfRange(bad)
        );
    }

    #[test]
    fn skip_hours_stores_first_occurrences(hours in prop::collection::vec(0u8..=23, 0..40)) {
        let channel = Channel::new().skip_hours(hours.iter().map(|&h| i32::from(h))).unwrap();

        let mut expected: Vec<u8> = Vec::new();
        for hour in hours {
            if !expected.contains(&hour) {
                expected.push(hour);
            }
        }
        prop_assert_eq!(channel.skipped_hours(), expected.as_slice());
    }

    #[test]
    fn skip_days_rejects_non_weekdays(
        days in prop::collection::vec(prop::sample::select(WEEKDAYS.to_vec()), 0..5),
        bad in "[a-zA-Z]{0,12}",
    ) {
        prop_assume!(!WEEKDAYS.contains(&bad.as_str()));

        let mut input: Vec<String> = days.into_iter().map(String::from).collect();
        input.push(bad.clone());
        prop_assert_eq!(
            Channel::new().skip_days(input).unwrap_err(),
            ValidationError::InvalidSkipDay(bad)
        );
    }

    #[test]
    fn skip_days_accepts_weekday_lists(days in prop::collection::vec(prop::sample::select(WEEKDAYS.to_vec()), 0..20)) {
        let channel = Channel::new().skip_days(&days).unwrap();
        prop_assert!(channel.skipped_days().len() <= 7);
        prop_assert!(channel.skipped_days().len() <= days.len());
    }
}

#[test]
fn test_skip_hours_duplicate_example() {
    let channel = Channel::new().skip_hours([1, 1, 2]).unwrap();
    assert_eq!(channel.skipped_hours(), &[1, 2]);
}

#[test]
fn test_skip_hours_negative_example() {
    assert_eq!(
        Channel::new().skip_hours([-1]).unwrap_err(),
        ValidationError::SkipHourOutOfRange(-1)
    );
}

#[test]
fn test_image_boundary_examples() {
    for (width, height) in [(0, 31), (145, 31), (88, 0), (88, 401)] {
        assert!(image(width, height).is_err(), "{}x{} should be rejected", width, height);
    }
}
