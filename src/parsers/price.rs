use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_DOT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\.\d+$")
        .expect("Invalid leading-dot price regex")
});

/// The site prints sub-unit prices without the leading zero (".5").
pub fn fix_price_format(price: &str) -> String {
    if LEADING_DOT_REGEX.is_match(price) {
        format!("0{}", price)
    } else {
        price.to_string()
    }
}

/// Parse a price that may carry thousands separators. Fullwidth digits,
/// point and sign are read as their ASCII forms.
pub fn parse_price_value(price: &str) -> Option<f64> {
    price
        .chars()
        .filter(|c| *c != ',')
        .map(to_ascii_numeral)
        .collect::<String>()
        .trim()
        .parse::<f64>()
        .ok()
}

fn to_ascii_numeral(c: char) -> char {
    match c {
        '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
        '．' => '.',
        '－' => '-',
        '＋' => '+',
        _ => c,
    }
}

/// Positive, finite and numeric.
pub fn is_valid_price(price: &str) -> bool {
    parse_price_value(price)
        .map(|value| value.is_finite() && value > 0.0)
        .unwrap_or(false)
}
