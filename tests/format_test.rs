use pomodoro_clock::format_time;
use regex::Regex;

#[test]
fn test_format_time_shape() {
    let shape = Regex::new(r"^\d{2,}:\d{2}$").unwrap();

    let samples = (0..7200).chain([86_399, 359_999, 360_000, u64::from(u32::MAX)]);
    for seconds in samples {
        let formatted = format_time(seconds);
        assert!(shape.is_match(&formatted), "{} -> {}", seconds, formatted);
        assert_eq!(formatted, format_time(seconds));

        let (minutes, secs) = formatted.split_once(':').unwrap();
        assert_eq!(minutes.parse::<u64>().unwrap(), seconds / 60);
        assert_eq!(secs.parse::<u64>().unwrap(), seconds % 60);
    }
}

#[test]
fn test_minutes_are_not_folded_into_hours() {
    assert_eq!(format_time(3600), "60:00");
    assert_eq!(format_time(3661), "61:01");
    assert_eq!(format_time(6000), "100:00");
}
