// 🏷️ Value Rules - Rules as Data
// Reusable predicates shared by the field catalog: bounded strings, patterns,
// enumerations, flags, non-negative numerics, client ids, IPs, currency codes

use crate::iso4217;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::net::Ipv6Addr;
use uuid::{Uuid, Variant};

// ============================================================================
// PATTERNS
// ============================================================================

// domain | localhost | ipv4 | ipv6, then an optional port
const HOST: &str = concat!(
    r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]+[A-Z0-9]\.?)",
    r"|localhost",
    r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}",
    r"|\[?[A-F0-9]*:[A-F0-9:]+\]?)",
    r"(?::\d+)?",
);

// empty, a bare slash, or anything without whitespace starting with / or ?
const PATH: &str = r"(?:/?|[/?]\S+)";

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in validation pattern must compile")
}

static TRACKING_ID_RE: Lazy<Regex> = Lazy::new(|| compile(r"^(UA|YT|MO)-\d{4,10}-\d{1,4}$"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)^(?:[a-z0-9.\-]*)://{}{}$", HOST, PATH)));

static HOST_RE: Lazy<Regex> = Lazy::new(|| compile(&format!("(?i)^{}$", HOST)));

static PATH_RE: Lazy<Regex> = Lazy::new(|| compile(&format!("^{}$", PATH)));

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)^[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}$")
});

static IPV4_RE: Lazy<Regex> = Lazy::new(|| {
    compile(r"^(25[0-5]|2[0-4][0-9]|[0-1]?[0-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|[0-1]?[0-9]?[0-9])){3}$")
});

/// Named regular expressions a [`Rule::Pattern`] can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// `UA|YT|MO-<4..10 digits>-<1..4 digits>`
    TrackingId,
    /// `scheme://host[:port][/path]`
    Url,
    /// Host with optional port, no scheme or path
    Host,
    /// Document path, leading slash optional when empty
    Path,
}

impl Pattern {
    pub fn regex(&self) -> &'static Regex {
        match self {
            Pattern::TrackingId => &*TRACKING_ID_RE,
            Pattern::Url => &*URL_RE,
            Pattern::Host => &*HOST_RE,
            Pattern::Path => &*PATH_RE,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex().is_match(text)
    }
}

// ============================================================================
// RULE DEFINITION
// ============================================================================

/// The contract a parameter value must satisfy.
///
/// Every variant is total over [`Value`]: anything of the wrong JSON type,
/// including `null`, fails the check instead of being coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    /// String of at most `max_len` characters
    Text { max_len: usize },
    /// String matching `pattern`, and at most `max_len` characters when bounded
    Pattern { pattern: Pattern, max_len: Option<usize> },
    /// One of a fixed set of strings
    OneOf { values: &'static [&'static str] },
    /// Numerically `0` or `1`
    Flag,
    /// `""`, `0` or `1`
    FlagOrEmpty,
    /// Non-negative integer
    Integer,
    /// Non-negative integer or float
    Currency,
    /// Dashed, RFC 4122 version 4 UUID
    ClientId,
    /// IPv4 dotted quad or IPv6 address
    IpAddress,
    /// ISO 4217 alphabetic code
    CurrencyCode,
}

impl Rule {
    pub const fn text(max_len: usize) -> Self {
        Rule::Text { max_len }
    }

    pub const fn pattern(pattern: Pattern) -> Self {
        Rule::Pattern { pattern, max_len: None }
    }

    pub const fn bounded_pattern(pattern: Pattern, max_len: usize) -> Self {
        Rule::Pattern { pattern, max_len: Some(max_len) }
    }

    pub const fn one_of(values: &'static [&'static str]) -> Self {
        Rule::OneOf { values }
    }

    /// Check `value` against this rule
    pub fn check(&self, value: &Value) -> bool {
        match *self {
            Rule::Text { max_len } => value.as_str().is_some_and(|s| within(s, max_len)),
            Rule::Pattern { pattern, max_len } => match value.as_str() {
                Some(s) => max_len.map_or(true, |max| within(s, max)) && pattern.is_match(s),
                None => false,
            },
            Rule::OneOf { values } => value.as_str().is_some_and(|s| values.contains(&s)),
            Rule::Flag => is_flag(value),
            Rule::FlagOrEmpty => value.as_str() == Some("") || is_flag(value),
            Rule::Integer => is_non_negative_integer(value),
            Rule::Currency => is_currency_amount(value),
            Rule::ClientId => value.as_str().is_some_and(is_uuid_v4),
            Rule::IpAddress => value.as_str().is_some_and(is_ip_address),
            Rule::CurrencyCode => value.as_str().is_some_and(iso4217::is_currency_code),
        }
    }
}

// ============================================================================
// PRIMITIVE PREDICATES
// ============================================================================

/// Length in characters, not bytes
fn within(text: &str, max_len: usize) -> bool {
    text.chars().count() <= max_len
}

/// `true`, `false`, or a number equal to 0 or 1 (`1.0` included)
pub fn is_flag(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0 || f == 1.0),
        _ => false,
    }
}

/// JSON integer >= 0; floats and numeric strings are rejected
pub fn is_non_negative_integer(value: &Value) -> bool {
    value.as_u64().is_some()
}

/// JSON number >= 0, integer or float
pub fn is_currency_amount(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n >= 0.0)
}

/// The regex fixes the dashed layout; parsing fixes variant and version.
pub fn is_uuid_v4(text: &str) -> bool {
    if !UUID_RE.is_match(text) {
        return false;
    }
    match Uuid::parse_str(text) {
        Ok(uuid) => uuid.get_variant() == Variant::RFC4122 && uuid.get_version_num() == 4,
        Err(_) => false,
    }
}

pub fn is_ip_address(text: &str) -> bool {
    IPV4_RE.is_match(text) || text.parse::<Ipv6Addr>().is_ok()
}

// ============================================================================
// TESTS
// ============================================================================
