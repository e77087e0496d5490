#![no_main]
use libfuzzer_sys::fuzz_target;
use release_support::{compute_end_of_life, is_supported, CalendarDate, EolPolicy, SupportWindow};

/// Fuzz lenient date parsing and the EOL arithmetic built on it.
///
/// The first four bytes pick a support window length; the rest is parsed as
/// a date. Any input must resolve to a valid or invalid date without
/// panicking under both policies, including windows far past chrono's range.
fuzz_target!(|data: &[u8]| {
    let (months, text) = match data {
        [a, b, c, d, rest @ ..] => (u32::from_le_bytes([*a, *b, *c, *d]), rest),
        _ => (18, data),
    };
    if let Ok(s) = std::str::from_utf8(text) {
        let date = CalendarDate::parse(s);
        let eol = compute_end_of_life(&date, None);
        let _ = is_supported(&eol, chrono::Utc::now());
        for policy in [EolPolicy::ThirtyDayMonths, EolPolicy::CalendarMonths] {
            let eol = SupportWindow::new(policy, months).end_of_life(&date, None);
            let _ = is_supported(&eol, chrono::Utc::now());
        }
    }
});
