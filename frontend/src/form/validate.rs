//! Per-step validation rules for the onboarding dialog.
//!
//! Every validator is a pure function of the field record (and the current
//! time, for the date-of-birth checks). An empty map means the step is valid.
//! Each field carries at most one message; when several checks target the
//! same field the one evaluated last wins.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config;
use crate::form::fields::{Field, SubscriptionFields};
use crate::form::state::Step;

pub type ValidationErrors = BTreeMap<Field, String>;

pub const ADULT_AGE: i32 = 18;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));
static PAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid PAN pattern"));
static PIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("valid PIN pattern"));
static POSTAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4,8}$").expect("valid postal pattern"));

pub fn validate(step: Step, fields: &SubscriptionFields, now: DateTime<Utc>) -> ValidationErrors {
    match step {
        Step::Personal => validate_personal(fields, now),
        Step::Contact => validate_contact(fields),
        Step::Kyc => validate_kyc(fields),
        Step::Plan => validate_plan(fields),
    }
}

pub fn validate_personal(fields: &SubscriptionFields, now: DateTime<Utc>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if fields.full_name.trim().chars().count() < 3 {
        errors.insert(Field::FullName, "Enter your full name (min 3 chars).".to_string());
    }
    if !is_email(&fields.email) {
        errors.insert(Field::Email, "Enter a valid email (e.g., name@host.com).".to_string());
    }
    if !is_past_date(&fields.dob, now) {
        errors.insert(Field::Dob, "Select a valid past date.".to_string());
    } else if !is_adult(&fields.dob, now) {
        errors.insert(Field::Dob, "You must be at least 18 years old.".to_string());
    }
    errors
}

pub fn validate_contact(fields: &SubscriptionFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let digits = digits_only(&fields.phone);
    if !(7..=15).contains(&digits.len()) {
        errors.insert(Field::Phone, "Enter a valid phone number (digits only).".to_string());
    }
    if fields.address.trim().chars().count() < 5 {
        errors.insert(Field::Address, "Enter your full address.".to_string());
    }
    if fields.city.is_empty() {
        errors.insert(Field::City, "Enter your city.".to_string());
    }
    if !is_pincode(&fields.pincode, &fields.country_code) {
        let message = if is_india(&fields.country_code) {
            "Enter a valid 6-digit PIN."
        } else {
            "Enter a valid postal code."
        };
        errors.insert(Field::Pincode, message.to_string());
    }
    errors
}

pub fn validate_kyc(fields: &SubscriptionFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if !is_pan(&fields.pan, &fields.country_code) {
        let message = if is_india(&fields.country_code) {
            "Enter a valid PAN (e.g., ABCDE1234F)."
        } else {
            "Enter a valid ID."
        };
        errors.insert(Field::Pan, message.to_string());
    }
    errors
}

pub fn validate_plan(fields: &SubscriptionFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if fields.cycle_key.as_deref().map_or(true, str::is_empty) {
        errors.insert(Field::CycleKey, "Choose a billing cycle.".to_string());
    }
    if !fields.consent {
        errors.insert(Field::Consent, "Please accept the disclaimers to proceed.".to_string());
    }
    errors
}

/// Loose "has the user filled this step in" check that gates the Continue
/// buttons. It does not replace `validate`.
pub fn is_step_filled(step: Step, fields: &SubscriptionFields) -> bool {
    let filled = |value: &str| !value.trim().is_empty();
    match step {
        Step::Personal => filled(&fields.full_name) && filled(&fields.email) && filled(&fields.dob),
        Step::Contact => {
            filled(&fields.phone) && filled(&fields.address) && filled(&fields.city) && filled(&fields.pincode)
        }
        Step::Kyc => {
            let min = if is_india(&fields.country_code) { 10 } else { 8 };
            fields.pan.trim().chars().count() >= min
        }
        Step::Plan => fields.cycle_key.as_deref().map_or(false, |c| !c.is_empty()) && fields.consent,
    }
}

fn is_india(country_code: &str) -> bool {
    country_code == config::INDIA_COUNTRY_CODE
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn parse_dob(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn is_past_date(value: &str, now: DateTime<Utc>) -> bool {
    match parse_dob(value).and_then(|date| date.and_hms_opt(0, 0, 0)) {
        Some(midnight) => midnight.and_utc() < now,
        None => false,
    }
}

pub fn is_adult(value: &str, now: DateTime<Utc>) -> bool {
    parse_dob(value).map_or(false, |birth| age_on(birth, now.date_naive()) >= ADULT_AGE)
}

/// Whole years between `birth` and `today`. The birthday is counted from the
/// birth month/day in today's year; 29 February rolls over to 1 March in
/// non-leap years.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let birthday = NaiveDate::from_ymd_opt(today.year(), birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(today.year(), 3, 1))
        .unwrap_or(today);
    let years = today.year() - birth.year();
    if today < birthday {
        years - 1
    } else {
        years
    }
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn is_pincode(value: &str, country_code: &str) -> bool {
    if is_india(country_code) {
        PIN_RE.is_match(value)
    } else {
        POSTAL_RE.is_match(value)
    }
}

pub fn is_pan(value: &str, country_code: &str) -> bool {
    if is_india(country_code) {
        PAN_RE.is_match(&value.to_uppercase())
    } else {
        // placeholder rule for non-Indian tax ids
        value.trim().chars().count() >= 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn name_length_counts_characters() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let mut fields = SubscriptionFields::default();
        fields.full_name = "😀😀".to_string();
        assert!(validate_personal(&fields, now).contains_key(&Field::FullName));
        fields.full_name = " Zoë ".to_string();
        assert!(!validate_personal(&fields, now).contains_key(&Field::FullName));
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn personal(full_name: &str, email: &str, dob: &str) -> SubscriptionFields {
        SubscriptionFields {
            full_name: full_name.to_string(),
            email: email.to_string(),
            dob: dob.to_string(),
            ..SubscriptionFields::default()
        }
    }

    #[test]
    fn short_names_are_rejected() {
        let now = noon(2024, 6, 1);
        for name in ["", "Al", "  Jo  ", "\tX\n"] {
            let errors = validate_personal(&personal(name, "a@b.co", "1990-01-01"), now);
            assert!(errors.contains_key(&Field::FullName), "{name:?} should fail");
        }
        let errors = validate_personal(&personal(" Ann ", "a@b.co", "1990-01-01"), now);
        assert!(errors.is_empty());
    }

    #[test]
    fn email_needs_at_and_dot() {
        assert!(is_email("jane@x.com"));
        assert!(!is_email("jane@x"));
        assert!(!is_email("jane.x.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn dob_must_be_a_real_past_date() {
        let now = noon(2024, 6, 1);
        let errors = validate_personal(&personal("Jane Doe", "jane@x.com", "not-a-date"), now);
        assert_eq!(errors.get(&Field::Dob).map(String::as_str), Some("Select a valid past date."));

        let errors = validate_personal(&personal("Jane Doe", "jane@x.com", "2030-01-01"), now);
        assert_eq!(errors.get(&Field::Dob).map(String::as_str), Some("Select a valid past date."));

        let errors = validate_personal(&personal("Jane Doe", "jane@x.com", ""), now);
        assert!(errors.contains_key(&Field::Dob));
    }

    #[test]
    fn eighteenth_birthday_boundary() {
        let now = noon(2024, 6, 15);
        let day_before = validate_personal(&personal("Jane Doe", "jane@x.com", "2006-06-16"), now);
        assert_eq!(
            day_before.get(&Field::Dob).map(String::as_str),
            Some("You must be at least 18 years old.")
        );

        let on_birthday = validate_personal(&personal("Jane Doe", "jane@x.com", "2006-06-15"), now);
        assert!(on_birthday.is_empty());

        let day_after = validate_personal(&personal("Jane Doe", "jane@x.com", "2006-06-14"), now);
        assert!(day_after.is_empty());
    }

    #[test]
    fn leap_day_birthday_rolls_to_march() {
        let birth = NaiveDate::from_ymd_opt(2004, 2, 29).unwrap();
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2022, 2, 28).unwrap()), 17);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()), 18);
    }

    #[test]
    fn phone_counts_digits_after_stripping() {
        let mut fields = SubscriptionFields::default();
        fields.phone = "+91 98765-43210".to_string();
        assert!(!validate_contact(&fields).contains_key(&Field::Phone));

        fields.phone = "12-34-56".to_string();
        assert!(validate_contact(&fields).contains_key(&Field::Phone));

        fields.phone = "1".repeat(16);
        assert!(validate_contact(&fields).contains_key(&Field::Phone));
    }

    #[test]
    fn pincode_depends_on_country() {
        assert!(is_pincode("560093", "+91"));
        assert!(!is_pincode("56009", "+91"));
        assert!(is_pincode("1234", "+1"));
        assert!(!is_pincode("12", "+1"));
        assert!(!is_pincode("123456789", "+1"));
    }

    #[test]
    fn pincode_message_follows_country() {
        let mut fields = SubscriptionFields::default();
        assert_eq!(
            validate_contact(&fields).get(&Field::Pincode).map(String::as_str),
            Some("Enter a valid 6-digit PIN.")
        );
        fields.country_code = "+44".to_string();
        assert_eq!(
            validate_contact(&fields).get(&Field::Pincode).map(String::as_str),
            Some("Enter a valid postal code.")
        );
    }

    #[test]
    fn complete_contact_step_passes() {
        let fields = SubscriptionFields {
            phone: "9876543210".to_string(),
            address: "904 Varthur Road".to_string(),
            city: "Bengaluru".to_string(),
            pincode: "560093".to_string(),
            ..SubscriptionFields::default()
        };
        assert!(validate_contact(&fields).is_empty());
    }

    #[test]
    fn pan_rules() {
        assert!(is_pan("ABCDE1234F", "+91"));
        assert!(is_pan("abcde1234f", "+91"));
        assert!(!is_pan("ABCDE123F", "+91"));
        assert!(is_pan("X1234567", "+1"));
        assert!(!is_pan("  X123  ", "+1"));
    }

    #[test]
    fn kyc_validation_is_repeatable() {
        let fields = SubscriptionFields {
            pan: "ABCDE123F".to_string(),
            ..SubscriptionFields::default()
        };
        let first = validate_kyc(&fields);
        let second = validate_kyc(&fields);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn plan_needs_cycle_and_consent() {
        let mut fields = SubscriptionFields::default();
        let errors = validate_plan(&fields);
        assert!(errors.contains_key(&Field::CycleKey));
        assert!(errors.contains_key(&Field::Consent));

        fields.cycle_key = Some(String::new());
        fields.consent = true;
        let errors = validate_plan(&fields);
        assert!(errors.contains_key(&Field::CycleKey));
        assert!(!errors.contains_key(&Field::Consent));

        fields.cycle_key = Some("yearly".to_string());
        assert!(validate_plan(&fields).is_empty());
    }

    #[test]
    fn filled_checks_are_looser_than_validation() {
        let fields = SubscriptionFields {
            full_name: "Jo".to_string(),
            email: "nope".to_string(),
            dob: "2000-01-01".to_string(),
            ..SubscriptionFields::default()
        };
        assert!(is_step_filled(Step::Personal, &fields));
        assert!(!validate_personal(&fields, noon(2024, 1, 1)).is_empty());
        assert!(!is_step_filled(Step::Contact, &fields));
    }

    #[test]
    fn filled_kyc_length_depends_on_country() {
        let mut fields = SubscriptionFields {
            pan: "ABCDE123".to_string(),
            ..SubscriptionFields::default()
        };
        assert!(!is_step_filled(Step::Kyc, &fields));
        fields.country_code = "+1".to_string();
        assert!(is_step_filled(Step::Kyc, &fields));
    }
}
