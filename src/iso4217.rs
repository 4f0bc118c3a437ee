// 💱 Currency Code Table - ISO 4217 alphabetic codes
// Static, read-only; consulted by the `cu` rule

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// ISO 4217 alphabetic codes: active currencies, fund codes and the
/// `X..` supranational, precious metal and testing codes.
pub const CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN",
    "BAM", "BBD", "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV",
    "BRL", "BSD", "BTN", "BWP", "BYN", "BZD",
    "CAD", "CDF", "CHE", "CHF", "CHW", "CLF", "CLP", "CNY", "COP", "COU",
    "CRC", "CUC", "CUP", "CVE", "CZK",
    "DJF", "DKK", "DOP", "DZD",
    "EGP", "ERN", "ETB", "EUR",
    "FJD", "FKP",
    "GBP", "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD",
    "HKD", "HNL", "HTG", "HUF",
    "IDR", "ILS", "INR", "IQD", "IRR", "ISK",
    "JMD", "JOD", "JPY",
    "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD", "KYD", "KZT",
    "LAK", "LBP", "LKR", "LRD", "LSL", "LYD",
    "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR",
    "MWK", "MXN", "MXV", "MYR", "MZN",
    "NAD", "NGN", "NIO", "NOK", "NPR", "NZD",
    "OMR",
    "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG",
    "QAR",
    "RON", "RSD", "RUB", "RWF",
    "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLE", "SLL", "SOS",
    "SRD", "SSP", "STN", "SVC", "SYP", "SZL",
    "THB", "TJS", "TMT", "TND", "TOP", "TRY", "TTD", "TWD", "TZS",
    "UAH", "UGX", "USD", "USN", "UYI", "UYU", "UYW", "UZS",
    "VED", "VES", "VND", "VUV",
    "WST",
    "XAF", "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XCG", "XDR",
    "XOF", "XPD", "XPF", "XPT", "XSU", "XTS", "XUA", "XXX",
    "YER",
    "ZAR", "ZMW", "ZWG", "ZWL",
];

static CODE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| CODES.iter().copied().collect());

/// Whether `code` is an ISO 4217 alphabetic code (case-sensitive)
pub fn is_currency_code(code: &str) -> bool {
    CODE_SET.contains(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_codes_present() {
        for code in ["USD", "EUR", "GBP", "JPY", "CNY", "MXN", "CAD", "CHF"] {
            assert!(is_currency_code(code), "{} should be a currency code", code);
        }
    }

    #[test]
    fn test_unknown_and_lowercase_rejected() {
        assert!(!is_currency_code("ZZZ"));
        assert!(!is_currency_code("eur"));
        assert!(!is_currency_code(""));
        assert!(!is_currency_code("EURO"));
    }

    #[test]
    fn test_codes_are_three_uppercase_letters() {
        for code in CODES {
            assert_eq!(code.len(), 3, "{}", code);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{}", code);
        }
    }

    #[test]
    fn test_no_duplicates() {
        assert_eq!(CODE_SET.len(), CODES.len());
    }
}
