/// Reformats a Thai phone number as it is typed: `081`, `081-234`,
/// `081-234-5678`. Anything beyond ten digits is cut off.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => {
            let tail_end = digits.len().min(10);
            format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..tail_end])
        }
    }
}

/// Full years between a birth date and `today`, both as (year, month, day).
/// Month and day decide whether this year's birthday has passed.
pub fn calculate_age(birth: (i32, u32, u32), today: (i32, u32, u32)) -> u32 {
    let (by, bm, bd) = birth;
    let (ty, tm, td) = today;
    let mut age = ty - by;
    if tm < bm || (tm == bm && td < bd) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Parses the `YYYY-MM-DD` head of a date input value.
pub fn parse_iso_date(raw: &str) -> Option<(i32, u32, u32)> {
    let mut parts = raw.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day_part = parts.next()?;
    let day = day_part.get(..2).unwrap_or(day_part).parse().ok()?;
    Some((year, month, day))
}

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Renders an ISO date in long Thai form with the Buddhist year,
/// e.g. `10 พฤษภาคม 2555`. Unparseable input comes back unchanged.
pub fn thai_long_date(raw: &str) -> String {
    let formatted = parse_iso_date(raw).and_then(|(year, month, day)| {
        let month_name = THAI_MONTHS.get(month.checked_sub(1)? as usize)?;
        Some(format!("{} {} {}", day, month_name, year + 543))
    });
    formatted.unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_groups_as_3_3_4() {
        assert_eq!(format_phone("0"), "0");
        assert_eq!(format_phone("081"), "081");
        assert_eq!(format_phone("0812"), "081-2");
        assert_eq!(format_phone("081234"), "081-234");
        assert_eq!(format_phone("0812345"), "081-234-5");
        assert_eq!(format_phone("0812345678"), "081-234-5678");
    }

    #[test]
    fn test_phone_strips_old_dashes_before_regrouping() {
        assert_eq!(format_phone("081-234-5678"), "081-234-5678");
        assert_eq!(format_phone("081 234 5678"), "081-234-5678");
    }

    #[test]
    fn test_phone_drops_digits_past_ten() {
        assert_eq!(format_phone("08123456789999"), "081-234-5678");
    }

    #[test]
    fn test_age_counts_completed_years_only() {
        assert_eq!(calculate_age((2012, 5, 10), (2026, 5, 10)), 14);
        assert_eq!(calculate_age((2012, 5, 10), (2026, 5, 9)), 13);
        assert_eq!(calculate_age((2012, 5, 10), (2026, 4, 30)), 13);
        assert_eq!(calculate_age((2012, 5, 10), (2026, 6, 1)), 14);
    }

    #[test]
    fn test_age_never_goes_negative() {
        assert_eq!(calculate_age((2030, 1, 1), (2026, 1, 1)), 0);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2012-05-10"), Some((2012, 5, 10)));
        assert_eq!(parse_iso_date("2012-05-10T08:00:00Z"), Some((2012, 5, 10)));
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("12/05/2010"), None);
    }

    #[test]
    fn test_thai_long_date_uses_buddhist_year() {
        assert_eq!(thai_long_date("2012-05-10"), "10 พฤษภาคม 2555");
        assert_eq!(thai_long_date("2026-01-15T09:30:00Z"), "15 มกราคม 2569");
    }

    #[test]
    fn test_thai_long_date_passes_junk_through() {
        assert_eq!(thai_long_date("junk"), "junk");
        assert_eq!(thai_long_date("2024-13-01"), "2024-13-01");
    }
}
