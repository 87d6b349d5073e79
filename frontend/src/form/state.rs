use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::fields::{Field, FieldValue, FieldsPatch, SubscriptionFields};
use crate::form::validate::ValidationErrors;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Personal,
    Contact,
    Kyc,
    Plan,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Personal, Step::Contact, Step::Kyc, Step::Plan];

    pub fn index(self) -> usize {
        match self {
            Step::Personal => 0,
            Step::Contact => 1,
            Step::Kyc => 2,
            Step::Plan => 3,
        }
    }

    /// The step after this one; `None` on the last step.
    pub fn next(self) -> Option<Step> {
        Step::ALL.get(self.index() + 1).copied()
    }

    pub fn key(self) -> &'static str {
        match self {
            Step::Personal => "personal",
            Step::Contact => "contact",
            Step::Kyc => "kyc",
            Step::Plan => "plan",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Personal => "Personal Info",
            Step::Contact => "Contact",
            Step::Kyc => "Kyc",
            Step::Plan => "Plan",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Step::Personal => "Name, email & date of birth",
            Step::Contact => "Phone & communication",
            Step::Kyc => "PAN & Investment details",
            Step::Plan => "Choose subscription",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    InProgress,
    Completed,
    Submitted,
}

/// One flag per step; serialized as a `step -> bool` map.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StepFlags {
    pub personal: bool,
    pub contact: bool,
    pub kyc: bool,
    pub plan: bool,
}

impl StepFlags {
    pub fn get(&self, step: Step) -> bool {
        match step {
            Step::Personal => self.personal,
            Step::Contact => self.contact,
            Step::Kyc => self.kyc,
            Step::Plan => self.plan,
        }
    }

    pub fn set(&mut self, step: Step, value: bool) {
        match step {
            Step::Personal => self.personal = value,
            Step::Contact => self.contact = value,
            Step::Kyc => self.kyc = value,
            Step::Plan => self.plan = value,
        }
    }

    pub fn count(&self) -> usize {
        Step::ALL.iter().filter(|step| self.get(**step)).count()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub fields: SubscriptionFields,
    pub step: Step,
    pub completed: StepFlags,
    #[serde(default)]
    pub errors: ValidationErrors,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Init(FieldsPatch),
    UpdateField { field: Field, value: FieldValue },
    SetErrors(ValidationErrors),
    ClearError(Field),
    SetStep(Step),
    SetCompleted { step: Step, value: bool },
    SetStatus(Status),
    Submitted { at: DateTime<Utc> },
}

impl FormState {
    /// Applies one action. No I/O, no clock reads: everything time-dependent
    /// arrives inside the action.
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Init(patch) => {
                self.fields.merge(patch);
                // reopening after a purchase starts a new one
                if self.status == Status::Submitted {
                    self.status = Status::Idle;
                }
            }
            Action::UpdateField { field, value } => {
                if !self.fields.set(field, value) {
                    log::warn!("Ignoring value of the wrong kind for {:?}", field);
                }
            }
            Action::SetErrors(errors) => {
                self.errors = errors;
            }
            Action::ClearError(field) => {
                self.errors.remove(&field);
            }
            Action::SetStep(step) => {
                self.step = step;
            }
            Action::SetCompleted { step, value } => {
                self.completed.set(step, value);
            }
            Action::SetStatus(status) => {
                self.status = status;
            }
            Action::Submitted { at } => {
                self.status = Status::Submitted;
                self.submitted_at = Some(at);
            }
        }
        self
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// `(completed steps, total steps)`
    pub fn progress(&self) -> (usize, usize) {
        (self.completed.count(), Step::ALL.len())
    }

    pub fn progress_percent(&self) -> f64 {
        let (done, total) = self.progress();
        done as f64 / total as f64 * 100.0
    }

    pub fn is_submitted(&self) -> bool {
        self.status == Status::Submitted
    }
}
