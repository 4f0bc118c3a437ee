// 🏛️ Field Catalog - one rule per Measurement Protocol parameter
// Each field gets a const FieldRule plus `is_<key>` / `validate_<key>` functions

use crate::error::{ValidationError, ValidationResult};
use crate::rules::{Pattern, Rule};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// FIELD RULE
// ============================================================================

/// Validation contract for a single wire-format parameter.
///
/// `key` is the parameter name (`"tid"`, `"dl"`). Indexed families use a
/// placeholder for each index, e.g. `"pr[n]qt"` covers `pr1qt`, `pr2qt`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    pub key: &'static str,
    pub name: &'static str,
    pub rule: Rule,
}

impl FieldRule {
    pub const fn new(key: &'static str, name: &'static str, rule: Rule) -> Self {
        FieldRule { key, name, rule }
    }

    pub fn is_valid(&self, value: &Value) -> bool {
        self.rule.check(value)
    }

    /// Fixed message reported when a value is rejected
    pub fn message(&self) -> String {
        format!("Enter a valid '{}' ({}).", self.key, self.name)
    }

    pub fn validate(&self, value: &Value) -> ValidationResult {
        self.validate_as(self.key, value)
    }

    /// Validate, reporting the failure under `field` (a concrete wire key)
    pub fn validate_as(&self, field: &str, value: &Value) -> ValidationResult {
        if self.is_valid(value) {
            return Ok(());
        }
        tracing::debug!(field, rule = self.key, "rejected parameter value");
        Err(ValidationError::new(field, self.message()))
    }
}

// ============================================================================
// ENUMERATED VALUES
// ============================================================================

pub const SESSION_CONTROLS: &[&str] = &["start", "end"];

pub const HIT_TYPES: &[&str] = &[
    "pageview",
    "screenview",
    "event",
    "transaction",
    "item",
    "social",
    "exception",
    "timing",
];

pub const PRODUCT_ACTIONS: &[&str] = &[
    "detail",
    "click",
    "add",
    "remove",
    "checkout",
    "checkout_option",
    "purchase",
    "refund",
];

// ============================================================================
// CATALOG
// ============================================================================

macro_rules! field_rules {
    ($( $rule_const:ident : $is_fn:ident, $validate_fn:ident => ($key:literal, $name:literal, $rule:expr); )+) => {
        $(
            pub const $rule_const: FieldRule = FieldRule::new($key, $name, $rule);

            #[doc = concat!("Whether `value` is a valid `", $key, "` (", $name, ").")]
            pub fn $is_fn(value: &Value) -> bool {
                $rule_const.is_valid(value)
            }

            #[doc = concat!("Fails with a [`ValidationError`] unless `value` is a valid `", $key, "`.")]
            pub fn $validate_fn(value: &Value) -> ValidationResult {
                $rule_const.validate(value)
            }
        )+

        /// Every rule in the catalog, in protocol reference order
        pub const ALL_RULES: &[FieldRule] = &[$($rule_const),+];
    };
}

field_rules! {
    // General
    TRACKING_ID: is_tid, validate_tid => ("tid", "Tracking ID / Web Property ID", Rule::pattern(Pattern::TrackingId));
    ANONYMIZE_IP: is_aip, validate_aip => ("aip", "Anonymize IP", Rule::FlagOrEmpty);
    QUEUE_TIME: is_qt, validate_qt => ("qt", "Queue Time", Rule::Integer);

    // User and session
    CLIENT_ID: is_cid, validate_cid => ("cid", "Client ID", Rule::ClientId);
    SESSION_CONTROL: is_sc, validate_sc => ("sc", "Session Control", Rule::one_of(SESSION_CONTROLS));
    IP_OVERRIDE: is_uip, validate_uip => ("uip", "IP Override", Rule::IpAddress);

    // Traffic sources
    DOCUMENT_REFERRER: is_dr, validate_dr => ("dr", "Document Referrer", Rule::bounded_pattern(Pattern::Url, 2048));
    CAMPAIGN_NAME: is_cn, validate_cn => ("cn", "Campaign Name", Rule::text(100));
    CAMPAIGN_SOURCE: is_cs, validate_cs => ("cs", "Campaign Source", Rule::text(100));
    CAMPAIGN_MEDIUM: is_cm, validate_cm => ("cm", "Campaign Medium", Rule::text(50));
    CAMPAIGN_KEYWORD: is_ck, validate_ck => ("ck", "Campaign Keyword", Rule::text(500));
    CAMPAIGN_CONTENT: is_cc, validate_cc => ("cc", "Campaign Content", Rule::text(500));
    CAMPAIGN_ID: is_ci, validate_ci => ("ci", "Campaign ID", Rule::text(100));

    // System info
    SCREEN_RESOLUTION: is_sr, validate_sr => ("sr", "Screen Resolution", Rule::text(20));
    VIEWPORT_SIZE: is_vp, validate_vp => ("vp", "Viewport size", Rule::text(20));
    DOCUMENT_ENCODING: is_de, validate_de => ("de", "Document Encoding", Rule::text(20));
    SCREEN_COLORS: is_sd, validate_sd => ("sd", "Screen Colors", Rule::text(20));
    USER_LANGUAGE: is_ul, validate_ul => ("ul", "User Language", Rule::text(20));
    JAVA_ENABLED: is_je, validate_je => ("je", "Java Enabled", Rule::Flag);
    FLASH_VERSION: is_fl, validate_fl => ("fl", "Flash Version", Rule::text(20));

    // Hit
    HIT_TYPE: is_t, validate_t => ("t", "Hit type", Rule::one_of(HIT_TYPES));
    NON_INTERACTION_HIT: is_ni, validate_ni => ("ni", "Non-Interaction Hit", Rule::Flag);

    // Content information
    DOCUMENT_LOCATION: is_dl, validate_dl => ("dl", "Document location URL", Rule::bounded_pattern(Pattern::Url, 2048));
    DOCUMENT_HOST_NAME: is_dh, validate_dh => ("dh", "Document Host Name", Rule::bounded_pattern(Pattern::Host, 100));
    DOCUMENT_PATH: is_dp, validate_dp => ("dp", "Document Path", Rule::bounded_pattern(Pattern::Path, 2048));
    DOCUMENT_TITLE: is_dt, validate_dt => ("dt", "Document Title", Rule::text(1500));
    SCREEN_NAME: is_cd, validate_cd => ("cd", "Screen Name", Rule::text(2048));

    // App tracking
    APPLICATION_NAME: is_an, validate_an => ("an", "Application Name", Rule::text(150));
    APPLICATION_ID: is_aid, validate_aid => ("aid", "Application ID", Rule::text(150));
    APPLICATION_VERSION: is_av, validate_av => ("av", "Application Version", Rule::text(100));
    APPLICATION_INSTALLER_ID: is_aiid, validate_aiid => ("aiid", "Application Installer ID", Rule::text(150));

    // Event tracking
    EVENT_CATEGORY: is_ec, validate_ec => ("ec", "Event Category", Rule::text(150));
    EVENT_ACTION: is_ea, validate_ea => ("ea", "Event Action", Rule::text(500));
    EVENT_LABEL: is_el, validate_el => ("el", "Event Label", Rule::text(500));
    EVENT_VALUE: is_ev, validate_ev => ("ev", "Event Value", Rule::Integer);

    // E-commerce
    TRANSACTION_ID: is_ti, validate_ti => ("ti", "Transaction ID", Rule::text(500));
    TRANSACTION_AFFILIATION: is_ta, validate_ta => ("ta", "Transaction Affiliation", Rule::text(500));
    TRANSACTION_REVENUE: is_tr, validate_tr => ("tr", "Transaction Revenue", Rule::Currency);
    TRANSACTION_SHIPPING: is_ts, validate_ts => ("ts", "Transaction Shipping", Rule::Currency);
    TRANSACTION_TAX: is_tt, validate_tt => ("tt", "Transaction Tax", Rule::Currency);
    ITEM_NAME: is_in, validate_in => ("in", "Item Name", Rule::text(500));
    ITEM_PRICE: is_ip, validate_ip => ("ip", "Item Price", Rule::Currency);
    ITEM_QUANTITY: is_iq, validate_iq => ("iq", "Item Quantity", Rule::Integer);
    ITEM_CODE: is_ic, validate_ic => ("ic", "Item Code", Rule::text(500));
    ITEM_CATEGORY: is_iv, validate_iv => ("iv", "Item Category", Rule::text(500));
    CURRENCY_CODE: is_cu, validate_cu => ("cu", "Currency Code", Rule::CurrencyCode);

    // Enhanced e-commerce
    PRODUCT_PRICE: is_prpr, validate_prpr => ("pr[n]pr", "Product Price", Rule::Currency);
    PRODUCT_QUANTITY: is_prqt, validate_prqt => ("pr[n]qt", "Product Quantity", Rule::Integer);
    PRODUCT_POSITION: is_prps, validate_prps => ("pr[n]ps", "Product Position", Rule::Integer);
    PRODUCT_CUSTOM_METRIC: is_prcm, validate_prcm => ("pr[n]cm[n]", "Product Custom Metric", Rule::Integer);
    PRODUCT_ACTION: is_pa, validate_pa => ("pa", "Product Action", Rule::one_of(PRODUCT_ACTIONS));
    CHECKOUT_STEP: is_cos, validate_cos => ("cos", "Checkout Step", Rule::Integer);
    PRODUCT_IMPRESSION_POSITION: is_ilpips, validate_ilpips => ("il[n]pi[n]ps", "Product Impression Position", Rule::Integer);
    PRODUCT_IMPRESSION_PRICE: is_ilpipr, validate_ilpipr => ("il[n]pi[n]pr", "Product Impression Price", Rule::Currency);
    PRODUCT_IMPRESSION_CUSTOM_METRIC: is_ilpicm, validate_ilpicm => ("il[n]pi[n]cm[n]", "Product Impression Custom Metric", Rule::Integer);

    // Social interactions
    SOCIAL_NETWORK: is_sn, validate_sn => ("sn", "Social Network", Rule::text(50));
    SOCIAL_ACTION: is_sa, validate_sa => ("sa", "Social Action", Rule::text(50));
    SOCIAL_ACTION_TARGET: is_st, validate_st => ("st", "Social Action Target", Rule::text(2048));

    // Timing
    USER_TIMING_CATEGORY: is_utc, validate_utc => ("utc", "User timing category", Rule::text(150));
    USER_TIMING_VARIABLE_NAME: is_utv, validate_utv => ("utv", "User timing variable name", Rule::text(500));
    USER_TIMING_TIME: is_utt, validate_utt => ("utt", "User timing time", Rule::Integer);
    USER_TIMING_LABEL: is_utl, validate_utl => ("utl", "User timing label", Rule::text(500));
    PAGE_LOAD_TIME: is_plt, validate_plt => ("plt", "Page Load Time", Rule::Integer);
    DNS_TIME: is_dns, validate_dns => ("dns", "DNS Time", Rule::Integer);
    PAGE_DOWNLOAD_TIME: is_pdt, validate_pdt => ("pdt", "Page Download Time", Rule::Integer);
    REDIRECT_RESPONSE_TIME: is_rrt, validate_rrt => ("rrt", "Redirect Response Time", Rule::Integer);
    TCP_CONNECT_TIME: is_tcp, validate_tcp => ("tcp", "TCP Connect Time", Rule::Integer);
    SERVER_RESPONSE_TIME: is_srt, validate_srt => ("srt", "Server Response Time", Rule::Integer);

    // Exceptions
    EXCEPTION_DESCRIPTION: is_exd, validate_exd => ("exd", "Exception Description", Rule::text(150));
    EXCEPTION_FATAL: is_exf, validate_exf => ("exf", "Is Exception Fatal?", Rule::Flag);

    // Custom dimensions / metrics
    CUSTOM_DIMENSION: is_cd_n, validate_cd_n => ("cd[n]", "Custom Dimension", Rule::text(150));
    CUSTOM_METRIC: is_cm_n, validate_cm_n => ("cm[n]", "Custom Metric", Rule::Integer);

    // Content experiments
    EXPERIMENT_ID: is_xid, validate_xid => ("xid", "Experiment ID", Rule::text(40));
}

// ============================================================================
// TESTS
// ============================================================================
