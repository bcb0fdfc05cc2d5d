//! Gregorian calendar arithmetic on integer Julian Day Numbers.

/// Julian Day Number of 2000-01-01 (Gregorian).
pub const JDN_2000_01_01: i64 = 2_451_545;

pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a Gregorian month, 0 for months outside 1..=12.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

pub const fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    day >= 1 && day <= days_in_month(year, month)
}

/// Gregorian date to Julian Day Number (proleptic, integer).
pub fn gregorian_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Julian Day Number to Gregorian (year, month, day).
pub fn jdn_to_gregorian(jdn: i64) -> (i32, u8, u8) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000() {
        assert_eq!(gregorian_to_jdn(2000, 1, 1), JDN_2000_01_01);
        assert_eq!(jdn_to_gregorian(JDN_2000_01_01), (2000, 1, 1));
    }

    #[test]
    fn known_dates() {
        assert_eq!(gregorian_to_jdn(1990, 5, 15), 2_448_027);
        assert_eq!(gregorian_to_jdn(1949, 10, 1), 2_433_191);
    }

    #[test]
    fn roundtrip_across_leap_day() {
        let jdn = gregorian_to_jdn(2024, 2, 28);
        assert_eq!(jdn_to_gregorian(jdn + 1), (2024, 2, 29));
        assert_eq!(jdn_to_gregorian(jdn + 2), (2024, 3, 1));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(1996));
        assert!(!is_valid_date(1900, 2, 29));
        assert!(is_valid_date(2000, 2, 29));
        assert!(!is_valid_date(2023, 13, 1));
        assert!(!is_valid_date(2023, 4, 31));
    }
}
