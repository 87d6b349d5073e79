use serde::{Deserialize, Serialize};

use crate::config;

/// Everything the onboarding dialog collects, across all four steps.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionFields {
    pub full_name: String,
    pub email: String,
    pub dob: String, // yyyy-mm-dd
    pub country_code: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub pan: String,
    pub consent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_key: Option<String>,
}

impl Default for SubscriptionFields {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            dob: String::new(),
            country_code: config::DEFAULT_COUNTRY_CODE.to_string(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            pincode: String::new(),
            pan: String::new(),
            consent: false,
            plan_key: None,
            cycle_key: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Dob,
    CountryCode,
    Phone,
    Address,
    City,
    Pincode,
    Pan,
    Consent,
    PlanKey,
    CycleKey,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choice(Option<String>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        FieldValue::Choice(value)
    }
}

impl SubscriptionFields {
    /// Writes one value into its field. Returns false (and leaves the record
    /// untouched) when the value's shape does not fit the field.
    pub fn set(&mut self, field: Field, value: FieldValue) -> bool {
        match (field, value) {
            (Field::Consent, FieldValue::Flag(flag)) => {
                self.consent = flag;
                true
            }
            (Field::PlanKey, FieldValue::Choice(choice)) => {
                self.plan_key = choice;
                true
            }
            (Field::PlanKey, FieldValue::Text(text)) => {
                self.plan_key = Some(text);
                true
            }
            (Field::CycleKey, FieldValue::Choice(choice)) => {
                self.cycle_key = choice;
                true
            }
            (Field::CycleKey, FieldValue::Text(text)) => {
                self.cycle_key = Some(text);
                true
            }
            (Field::Consent, _) | (Field::PlanKey, _) | (Field::CycleKey, _) => false,
            (text_field, FieldValue::Text(text)) => {
                if let Some(slot) = self.text_mut(text_field) {
                    *slot = text;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FullName => Some(&mut self.full_name),
            Field::Email => Some(&mut self.email),
            Field::Dob => Some(&mut self.dob),
            Field::CountryCode => Some(&mut self.country_code),
            Field::Phone => Some(&mut self.phone),
            Field::Address => Some(&mut self.address),
            Field::City => Some(&mut self.city),
            Field::Pincode => Some(&mut self.pincode),
            Field::Pan => Some(&mut self.pan),
            Field::Consent | Field::PlanKey | Field::CycleKey => None,
        }
    }

    /// Overlays every value present in `patch`, keeping the rest.
    pub fn merge(&mut self, patch: FieldsPatch) {
        let FieldsPatch {
            full_name,
            email,
            dob,
            country_code,
            phone,
            address,
            city,
            pincode,
            pan,
            consent,
            plan_key,
            cycle_key,
        } = patch;

        let text_updates = [
            (Field::FullName, full_name),
            (Field::Email, email),
            (Field::Dob, dob),
            (Field::CountryCode, country_code),
            (Field::Phone, phone),
            (Field::Address, address),
            (Field::City, city),
            (Field::Pincode, pincode),
            (Field::Pan, pan),
        ];
        for (field, value) in text_updates {
            if let Some(value) = value {
                self.set(field, FieldValue::Text(value));
            }
        }
        if let Some(consent) = consent {
            self.consent = consent;
        }
        if plan_key.is_some() {
            self.plan_key = plan_key;
        }
        if cycle_key.is_some() {
            self.cycle_key = cycle_key;
        }
    }
}

/// Partial field set, as handed to `init` by whoever opens the dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldsPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub dob: Option<String>,
    pub country_code: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub pan: Option<String>,
    pub consent: Option<bool>,
    pub plan_key: Option<String>,
    pub cycle_key: Option<String>,
}

impl FieldsPatch {
    pub fn plan(plan_key: impl Into<String>, cycle_key: impl Into<String>) -> Self {
        Self {
            plan_key: Some(plan_key.into()),
            cycle_key: Some(cycle_key.into()),
            ..Self::default()
        }
    }
}
