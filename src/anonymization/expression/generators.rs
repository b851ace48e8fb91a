//! Synthetic value generators backing the smart expressions
//!
//! Each generator documents its defaults; arguments beyond what a generator
//! understands are ignored, mirroring the tolerant argument handling of the
//! expression parser.

use super::Arg;
use chrono::{Datelike, Duration, Utc};
use fake::faker::address::en::CityName;
use fake::faker::currency::en::CurrencyCode;
use fake::faker::internet::en::{FreeEmailProvider, IPv4};
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;

const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

const VOWELS: &[u8] = b"aeiou";
const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// ISO-3166-1 alpha-2 / alpha-3 code pairs used by `iso2` and `iso3`
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("US", "USA"),
    ("DE", "DEU"),
    ("FR", "FRA"),
    ("GB", "GBR"),
    ("ES", "ESP"),
    ("IT", "ITA"),
    ("NL", "NLD"),
    ("AT", "AUT"),
    ("CH", "CHE"),
    ("PL", "POL"),
    ("SE", "SWE"),
    ("NO", "NOR"),
    ("DK", "DNK"),
    ("FI", "FIN"),
    ("BE", "BEL"),
    ("PT", "PRT"),
    ("IE", "IRL"),
    ("CA", "CAN"),
    ("AU", "AUS"),
    ("JP", "JPN"),
];

/// Countries supported by the `iban` generator with their all-numeric
/// BBAN lengths
const IBAN_COUNTRIES: &[(&str, usize)] = &[
    ("DE", 18),
    ("AT", 16),
    ("BE", 12),
    ("CH", 17),
    ("ES", 20),
    ("FR", 23),
    ("PL", 24),
];

/// Static Lorem Ipsum text
pub fn lorem_ipsum() -> String {
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
     Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua."
        .to_string()
}

/// Random city name
pub fn random_city() -> String {
    CityName().fake()
}

/// Random ISO-3166-1 alpha-2 country code (e.g. "US", "DE")
pub fn random_iso2() -> String {
    pick_country().0.to_string()
}

/// Random ISO-3166-1 alpha-3 country code (e.g. "USA", "DEU")
pub fn random_iso3() -> String {
    pick_country().1.to_string()
}

fn pick_country() -> (&'static str, &'static str) {
    *COUNTRY_CODES
        .choose(&mut rand::thread_rng())
        .unwrap_or(&("US", "USA"))
}

/// Random date within a year range, formatted with token substitution
///
/// Defaults: years 2000-2030, format `YYYY-MM-DD`. The first two integer
/// arguments override the year range (a reversed range is normalized), a
/// third string argument overrides the format. Days are capped at 28 so any
/// month is valid.
pub fn random_date(args: &[Arg]) -> String {
    let (mut start_year, mut end_year) = (2000i64, 2030i64);

    if args.len() >= 2 {
        if let (Arg::Int(start), Arg::Int(end)) = (&args[0], &args[1]) {
            start_year = *start;
            end_year = *end;
        } else {
            tracing::warn!("Invalid year parameters detected. Using default range 2000-2030.");
        }
    }

    let format = match args.get(2) {
        Some(Arg::Str(f)) if !f.trim().is_empty() => f.trim().to_string(),
        _ => DEFAULT_DATE_FORMAT.to_string(),
    };

    let (lo, hi) = if start_year <= end_year {
        (start_year, end_year)
    } else {
        (end_year, start_year)
    };

    let mut rng = rand::thread_rng();
    let year = rng.gen_range(lo..=hi);
    let month: u32 = rng.gen_range(1..=12);
    let day: u32 = rng.gen_range(1..=28);

    format_date_tokens(&format, year, month, day)
}

/// Random date up to `max_years` in the future (default 5)
pub fn random_future_date(args: &[Arg]) -> String {
    let (max_years, format) = years_and_format(args);
    let mut rng = rand::thread_rng();
    let date = Utc::now().date_naive() + Duration::days(rng.gen_range(1..=max_years * 365));
    format_date_tokens(&format, i64::from(date.year()), date.month(), date.day())
}

/// Random date up to `max_years` in the past (default 5)
pub fn random_past_date(args: &[Arg]) -> String {
    let (max_years, format) = years_and_format(args);
    let mut rng = rand::thread_rng();
    let date = Utc::now().date_naive() - Duration::days(rng.gen_range(1..=max_years * 365));
    format_date_tokens(&format, i64::from(date.year()), date.month(), date.day())
}

fn years_and_format(args: &[Arg]) -> (i64, String) {
    // capped so the day offset stays within what chrono can represent
    let max_years = match args.first() {
        Some(Arg::Int(n)) if *n > 0 => (*n).min(1000),
        _ => 5,
    };
    let format = match args.get(1) {
        Some(Arg::Str(f)) if !f.trim().is_empty() => f.trim().to_string(),
        _ => DEFAULT_DATE_FORMAT.to_string(),
    };
    (max_years, format)
}

/// Literal token substitution: YYYY, MM, DD (first occurrence each)
fn format_date_tokens(format: &str, year: i64, month: u32, day: u32) -> String {
    format
        .replacen("YYYY", &year.to_string(), 1)
        .replacen("MM", &format!("{month:02}"), 1)
        .replacen("DD", &format!("{day:02}"), 1)
}

/// Random integer, default range 1-1000
pub fn random_number(args: &[Arg]) -> String {
    let (mut min, mut max) = (1i64, 1000i64);

    if args.len() >= 2 {
        if let (Arg::Int(a), Arg::Int(b)) = (&args[0], &args[1]) {
            min = *a;
            max = *b;
        }
    }

    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(lo..=hi).to_string()
}

/// Random phone number in international style, e.g. `+4915512345678`
pub fn random_phone_number() -> String {
    const DIAL_CODES: &[&str] = &["1", "33", "44", "49", "81"];
    let mut rng = rand::thread_rng();
    let code = DIAL_CODES.choose(&mut rng).unwrap_or(&"49");

    let mut digits = String::with_capacity(10);
    digits.push(char::from(b'1' + rng.gen_range(0..9)));
    for _ in 1..10 {
        digits.push(char::from(b'0' + rng.gen_range(0..10)));
    }

    format!("+{code}{digits}")
}

/// Pronounceable random string, default length 8, first letter capitalized
///
/// Alternates vowels and consonants so the result reads like a word. Backs
/// the `word`, `id`, `token`, `key` and `value` expressions.
pub fn readable_random_string(args: &[Arg]) -> String {
    let length = match args.first() {
        Some(Arg::Int(n)) if *n > 0 => *n as usize,
        _ => 8,
    };

    let mut rng = rand::thread_rng();
    let word = readable_chars(&mut rng, length);

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => word,
    }
}

fn readable_chars(rng: &mut impl Rng, length: usize) -> String {
    let mut result = String::with_capacity(length);
    let mut use_vowel = rng.gen_bool(0.5);

    for _ in 0..length {
        let pool = if use_vowel { VOWELS } else { CONSONANTS };
        result.push(pool[rng.gen_range(0..pool.len())] as char);
        use_vowel = !use_vowel;
    }

    result
}

/// Random IPv4 address
pub fn random_ipv4() -> String {
    IPv4().fake()
}

/// Random email address; an argument containing a `.` selects the provider
pub fn random_email(args: &[Arg]) -> String {
    let provider = match args.first() {
        Some(Arg::Str(s)) if s.contains('.') => s.clone(),
        _ => FreeEmailProvider().fake(),
    };

    let mut rng = rand::thread_rng();
    let first = readable_chars(&mut rng, 5);
    let last = readable_chars(&mut rng, 7);
    format!("{first}.{last}@{provider}")
}

/// Random ISO-4217 currency code (e.g. "USD", "EUR")
pub fn random_currency() -> String {
    CurrencyCode().fake()
}

/// Random price with two decimals, default range 1-1000
///
/// A 3-letter string argument (first, or third after a range) appends a
/// currency code: `12.99 USD`.
pub fn random_price(args: &[Arg]) -> String {
    let (mut min, mut max) = (1i64, 1000i64);

    if args.len() >= 2 {
        if let (Arg::Int(a), Arg::Int(b)) = (&args[0], &args[1]) {
            min = *a;
            max = *b;
        }
    }

    let mut currency = None;
    if let Some(Arg::Str(s)) = args.first() {
        if s.len() == 3 {
            currency = Some(s.to_uppercase());
        }
    } else if args.len() == 3 {
        if let Some(Arg::Str(s)) = args.get(2) {
            if s.len() == 3 {
                currency = Some(s.to_uppercase());
            }
        }
    }

    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let cents = rand::thread_rng().gen_range(lo * 100..=hi * 100);
    let price = format!("{:.2}", cents as f64 / 100.0);

    match currency {
        Some(code) => format!("{price} {code}"),
        None => price,
    }
}

/// Luhn-valid credit card number, brand defaults to Visa
///
/// Supported brands: `Visa`, `Mastercard`, `Amex` / `American Express`,
/// `Discover`. An unrecognized brand yields a generic 16-digit number.
pub fn credit_card_number(args: &[Arg]) -> String {
    let brand = match args.first() {
        Some(Arg::Str(s)) => s.trim().to_lowercase(),
        _ => "visa".to_string(),
    };

    let mut rng = rand::thread_rng();
    let (prefix, total_len) = match brand.as_str() {
        "visa" => ("4".to_string(), 16),
        "mastercard" => (format!("5{}", rng.gen_range(1..=5)), 16),
        "amex" | "american express" => {
            let second = if rng.gen_bool(0.5) { '4' } else { '7' };
            (format!("3{second}"), 15)
        }
        "discover" => ("6011".to_string(), 16),
        _ => (String::new(), 16),
    };

    let mut digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
    if digits.is_empty() {
        digits.push(rng.gen_range(1..=9));
    }
    while digits.len() < total_len - 1 {
        digits.push(rng.gen_range(0..=9));
    }
    digits.push(luhn_check_digit(&digits));

    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// Luhn check digit for the given payload digits
fn luhn_check_digit(digits: &[u8]) -> u8 {
    let mut sum = 0u32;
    // the check digit position counts as position 0, so the rightmost
    // payload digit gets doubled
    for (i, &d) in digits.iter().rev().enumerate() {
        let mut value = u32::from(d);
        if i % 2 == 0 {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
    }
    ((10 - (sum % 10)) % 10) as u8
}

/// 3-digit card verification code, zero-padded
pub fn cvc() -> String {
    format!("{:03}", rand::thread_rng().gen_range(0..=999))
}

/// IBAN with valid mod-97 check digits
///
/// A 2-letter country argument selects the country when supported;
/// otherwise a random supported country is used.
pub fn iban(args: &[Arg]) -> String {
    let requested = match args.first() {
        Some(Arg::Str(s)) if s.len() == 2 => Some(s.to_uppercase()),
        _ => None,
    };

    let mut rng = rand::thread_rng();
    let (country, bban_len) = requested
        .and_then(|cc| {
            IBAN_COUNTRIES
                .iter()
                .find(|(country, _)| *country == cc)
                .copied()
        })
        .or_else(|| IBAN_COUNTRIES.choose(&mut rng).copied())
        .unwrap_or(("DE", 18));

    let mut bban = String::with_capacity(bban_len);
    for _ in 0..bban_len {
        bban.push(char::from(b'0' + rng.gen_range(0..10)));
    }

    let check = iban_check_digits(country, &bban);
    format!("{country}{check:02}{bban}")
}

/// Computes the two check digits so the full IBAN satisfies mod-97
fn iban_check_digits(country: &str, bban: &str) -> u32 {
    let rearranged = format!("{bban}{country}00");
    let mut remainder: u32 = 0;

    for ch in rearranged.chars() {
        if let Some(digit) = ch.to_digit(10) {
            remainder = (remainder * 10 + digit) % 97;
        } else {
            let value = u32::from(ch.to_ascii_uppercase() as u8 - b'A') + 10;
            remainder = (remainder * 100 + value) % 97;
        }
    }

    98 - remainder
}
