//! Record-level decoding through the serde adapters.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::json;

use wirefold_lenient::{decode_defaulted, with, CaseSet, DefaultPolicy, FromRaw, RawValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Free,
    Plus,
    Unknown,
}

impl CaseSet for Tier {
    fn cases() -> &'static [Self] {
        &[Tier::Free, Tier::Plus, Tier::Unknown]
    }
}

impl FromRaw for Tier {
    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw.as_text()? {
            "free" => Some(Tier::Free),
            "plus" => Some(Tier::Plus),
            _ => None,
        }
    }
}

fn unknown_tier() -> Tier {
    Tier::Unknown
}

fn tier_or_unknown<'de, D>(deserializer: D) -> Result<Tier, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawValue::deserialize(deserializer)?;
    Ok(decode_defaulted(&raw, &DefaultPolicy::last_case()))
}

#[derive(Debug, Deserialize)]
struct Member {
    id: i64,
    #[serde(default, with = "with::loose_bool")]
    verified: bool,
    #[serde(default, with = "with::loose_bool_opt")]
    promoted: Option<bool>,
    #[serde(default = "Utc::now", with = "with::epoch_seconds")]
    created_at: DateTime<Utc>,
    #[serde(default, with = "with::epoch_seconds_opt")]
    deleted_at: Option<DateTime<Utc>>,
    #[serde(with = "with::date_ymd")]
    birthday: NaiveDate,
    #[serde(default = "unknown_tier", deserialize_with = "tier_or_unknown")]
    tier: Tier,
}

fn instant(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("valid instant")
}

#[test]
fn clean_record_decodes_as_written() {
    let member: Member = serde_json::from_value(json!({
        "id": 11,
        "verified": true,
        "promoted": false,
        "created_at": 1_700_000_000,
        "deleted_at": 1_700_000_100,
        "birthday": "1990-06-15",
        "tier": "plus",
    }))
    .expect("clean record");
    assert_eq!(member.id, 11);
    assert!(member.verified);
    assert_eq!(member.promoted, Some(false));
    assert_eq!(member.created_at, instant(1_700_000_000));
    assert_eq!(member.deleted_at, Some(instant(1_700_000_100)));
    assert_eq!(
        member.birthday,
        NaiveDate::from_ymd_opt(1990, 6, 15).expect("valid date")
    );
    assert_eq!(member.tier, Tier::Plus);
}

#[test]
fn drifted_record_decodes_with_tolerance() {
    let member: Member = serde_json::from_value(json!({
        "id": 12,
        "verified": "YES",
        "created_at": 1_700_000_000_000i64,
        "deleted_at": "pending",
        "birthday": "1990-06-15",
        "tier": "gold",
    }))
    .expect("drifted record still decodes");
    assert!(member.verified);
    assert_eq!(member.promoted, None, "missing optional stays None");
    assert_eq!(member.created_at, instant(1_700_000_000), "millis reduced");
    assert_eq!(member.deleted_at, None, "mismatched optional stays None");
    assert_eq!(member.tier, Tier::Unknown, "unknown case falls back");
}

#[test]
fn wrapped_timestamp_decodes_like_bare_integer() {
    let member: Member = serde_json::from_value(json!({
        "id": 13,
        "created_at": {"value": 1_700_000_000_000i64},
        "birthday": "2001-01-01",
    }))
    .expect("wrapped timestamp");
    assert_eq!(member.created_at, instant(1_700_000_000));
}

#[test]
fn missing_timestamp_defaults_to_decode_time() {
    let before = Utc::now();
    let member: Member = serde_json::from_value(json!({
        "id": 14,
        "birthday": "2001-01-01",
    }))
    .expect("missing timestamp");
    assert!(member.created_at >= before);
}

#[test]
fn malformed_birthday_fails_the_record() {
    let result: Result<Member, _> = serde_json::from_value(json!({
        "id": 15,
        "birthday": "1990-06-31",
    }));
    assert!(result.is_err(), "fixed-format violation must propagate");
}

#[test]
fn missing_birthday_fails_the_record() {
    let result: Result<Member, _> = serde_json::from_value(json!({"id": 16}));
    assert!(result.is_err(), "contractual field has no default");
}
