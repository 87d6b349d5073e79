//! The per-session subscription store.
//!
//! `SubscriptionStore` owns the `FormState` for one visit to the onboarding
//! dialog. Every operation is turned into `Action`s, folded through
//! `FormState::reduce`, and followed by a single save attempt. Storage
//! failures are logged and otherwise ignored, so the form keeps working from
//! memory when localStorage is missing or full.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::form::fields::{Field, FieldValue, FieldsPatch};
use crate::form::state::{Action, FormState, Status, Step};
use crate::form::storage::FormStorage;
use crate::form::validate;

pub type Clock = fn() -> DateTime<Utc>;

pub struct SubscriptionStore {
    state: FormState,
    storage: Box<dyn FormStorage>,
    clock: Clock,
    revision: u64,
}

impl SubscriptionStore {
    /// Rehydrates from `storage`, or starts fresh when nothing usable is stored.
    pub fn open(storage: impl FormStorage + 'static) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => {
                debug!("Restored subscription form at step {:?}", state.step);
                state
            }
            Ok(None) => FormState::default(),
            Err(e) => {
                warn!("Discarding stored subscription form: {}", e);
                FormState::default()
            }
        };
        Self {
            state,
            storage: Box::new(storage),
            clock: Utc::now,
            revision: 0,
        }
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Bumped on every dispatch; lets the UI tell cheaply that something moved.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn dispatch(&mut self, actions: impl IntoIterator<Item = Action>) {
        let mut state = std::mem::take(&mut self.state);
        for action in actions {
            state = state.reduce(action);
        }
        self.state = state;
        self.revision += 1;
        self.on_change();
    }

    fn on_change(&self) {
        if let Err(e) = self.storage.save(&self.state) {
            warn!("Could not persist subscription form: {}", e);
        }
    }

    pub fn init(&mut self, patch: FieldsPatch) {
        if self.state.is_submitted() {
            info!("Starting a new subscription after the one submitted at {:?}", self.state.submitted_at);
        }
        self.dispatch([Action::Init(patch)]);
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.dispatch([
            Action::UpdateField { field, value: value.into() },
            Action::ClearError(field),
        ]);
    }

    pub fn set_step(&mut self, step: Step) {
        debug!("Jumping to step {}", step.key());
        self.dispatch([Action::SetStep(step)]);
    }

    pub fn validate_step(&mut self, step: Step) -> bool {
        let errors = validate::validate(step, &self.state.fields, (self.clock)());
        let ok = errors.is_empty();
        let mut actions = vec![
            Action::SetErrors(errors),
            Action::SetCompleted { step, value: ok },
        ];
        if !ok {
            actions.push(Action::SetStatus(Status::InProgress));
        }
        self.dispatch(actions);
        ok
    }

    pub fn go_next_from(&mut self, step: Step) -> bool {
        if !self.validate_step(step) {
            return false;
        }
        if let Some(next) = step.next() {
            debug!("Advancing from {} to {}", step.key(), next.key());
            self.dispatch([Action::SetStep(next)]);
        }
        true
    }

    /// Re-validates every step in order; marks the form submitted only when
    /// all of them pass. The error map left behind is the plan step's.
    pub fn submit(&mut self) -> bool {
        let mut all_ok = true;
        for step in Step::ALL {
            all_ok &= self.validate_step(step);
        }
        if all_ok {
            let at = (self.clock)();
            self.dispatch([Action::Submitted { at }]);
            info!("Subscription submitted for plan {:?}", self.state.fields.plan_key);
        }
        all_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::storage::{MemoryFormStorage, StorageError};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn store(storage: &MemoryFormStorage) -> SubscriptionStore {
        SubscriptionStore::open(storage.clone()).with_clock(fixed_now)
    }

    fn fill_everything(store: &mut SubscriptionStore) {
        store.update_field(Field::FullName, "Jane Doe");
        store.update_field(Field::Email, "jane@x.com");
        store.update_field(Field::Dob, "2000-01-01");
        store.update_field(Field::Phone, "98765 43210");
        store.update_field(Field::Address, "904 Varthur Road");
        store.update_field(Field::City, "Bengaluru");
        store.update_field(Field::Pincode, "560093");
        store.update_field(Field::Pan, "abcde1234f");
        store.update_field(Field::CycleKey, "yearly");
        store.update_field(Field::Consent, true);
    }

    struct BrokenStorage;

    impl FormStorage for BrokenStorage {
        fn load(&self) -> Result<Option<FormState>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&self, _state: &FormState) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }
    }

    #[test]
    fn personal_step_advances_to_contact() {
        let storage = MemoryFormStorage::default();
        let mut store = SubscriptionStore::open(storage);
        store.update_field(Field::FullName, "Jane Doe");
        store.update_field(Field::Email, "jane@x.com");
        store.update_field(Field::Dob, "2000-01-01");

        assert!(store.go_next_from(Step::Personal));
        assert_eq!(store.state().step, Step::Contact);
        assert!(store.state().completed.personal);
        assert!(store.state().errors.is_empty());
    }

    #[test]
    fn short_name_blocks_personal_step() {
        let storage = MemoryFormStorage::default();
        let mut store = store(&storage);
        store.update_field(Field::FullName, " Jo ");
        store.update_field(Field::Email, "jane@x.com");
        store.update_field(Field::Dob, "2000-01-01");

        assert!(!store.go_next_from(Step::Personal));
        assert_eq!(store.state().step, Step::Personal);
        assert!(!store.state().completed.personal);
        assert!(store.state().error(Field::FullName).is_some());
        assert_eq!(store.state().status, Status::InProgress);
    }

    #[test]
    fn updating_a_field_clears_only_its_error() {
        let storage = MemoryFormStorage::default();
        let mut store = store(&storage);
        assert!(!store.validate_step(Step::Personal));
        assert!(store.state().error(Field::Email).is_some());

        store.update_field(Field::Email, "still wrong");
        assert!(store.state().error(Field::Email).is_none());
        assert!(store.state().error(Field::FullName).is_some());
    }

    #[test]
    fn validating_a_step_replaces_other_steps_errors() {
        let storage = MemoryFormStorage::default();
        let mut store = store(&storage);
        store.validate_step(Step::Personal);
        store.validate_step(Step::Kyc);

        let fields: Vec<Field> = store.state().errors.keys().copied().collect();
        assert_eq!(fields, vec![Field::Pan]);
    }

    #[test]
    fn kyc_validation_twice_gives_same_errors() {
        let storage = MemoryFormStorage::default();
        let mut store = store(&storage);
        store.update_field(Field::Pan, "ABCDE123F");
        store.validate_step(Step::Kyc);
        let first = store.state().errors.clone();
        store.validate_step(Step::Kyc);
        assert_eq!(store.state().errors, first);
    }

    #[test]
    fn plan_step_without_cycle_or_consent_does_not_submit() {
        let storage = MemoryFormStorage::default();
        let mut store = store(&storage);
        store.set_step(Step::Plan);

        assert!(!store.go_next_from(Step::Plan));
        assert_ne!(store.state().status, Status::Submitted);

        store.update_field(Field::CycleKey, "yearly");
        assert!(!store.go_next_from(Step::Plan));
        assert!(store.state().error(Field::Consent).is_some());
        assert_ne!(store.state().status, Status::Submitted);
    }

    #[test]
    fn valid_plan_step_stays_on_plan() {
        let storage = MemoryFormStorage::default();
        let mut store = store(&storage);
        store.set_step(Step::Plan);
        store.update_field(Field::CycleKey, "quarterly");
        store.update_field(Field::Consent, true);

        assert!(store.go_next_from(Step::Plan));
        assert_eq!(store.state().step, Step::Plan);
        assert!(store.state().completed.plan);
    }

    #[test]
    fn set_step_jumps_without_validating() {
        let storage = MemoryFormStorage::default();
        let mut store = store(&storage);
        store.set_step(Step::Kyc);
        assert_eq!(store.state().step, Step::Kyc);
        assert!(store.state().errors.is_empty());
        assert_eq!(store.state().status, Status::Idle);

        store.set_step(Step::Personal);
        assert_eq!(store.state().step, Step::Personal);
    }

    #[test]
    fn submit_requires_every_step() {
        let storage = MemoryFormStorage::default();
        let mut store = store(&storage);
        fill_everything(&mut store);
        store.update_field(Field::Dob, "2010-01-01");

        assert!(!store.submit());
        assert_eq!(store.state().status, Status::InProgress);
        assert!(store.state().submitted_at.is_none());
        assert!(!store.state().completed.personal);
        assert!(store.state().completed.plan);
        // only the plan step's (empty) errors are left
        assert!(store.state().errors.is_empty());
    }

    #[test]
    fn submit_marks_submitted_with_timestamp() {
        let storage = MemoryFormStorage::default();
        let mut store = store(&storage);
        fill_everything(&mut store);

        assert!(store.submit());
        assert_eq!(store.state().status, Status::Submitted);
        assert_eq!(store.state().submitted_at, Some(fixed_now()));
        assert_eq!(store.state().progress(), (4, 4));
    }

    #[test]
    fn init_merges_plan_selection() {
        let storage = MemoryFormStorage::default();
        let mut store = store(&storage);
        store.update_field(Field::FullName, "Jane Doe");
        store.init(FieldsPatch::plan("prime", "halfYearly"));

        let fields = &store.state().fields;
        assert_eq!(fields.full_name, "Jane Doe");
        assert_eq!(fields.plan_key.as_deref(), Some("prime"));
        assert_eq!(fields.cycle_key.as_deref(), Some("halfYearly"));
    }

    #[test]
    fn reopening_restores_the_same_state() {
        let storage = MemoryFormStorage::default();
        let mut first = store(&storage);
        fill_everything(&mut first);
        first.go_next_from(Step::Personal);
        first.validate_step(Step::Kyc);
        first.submit();

        let second = store(&storage);
        assert_eq!(second.state(), first.state());
    }

    #[test]
    fn reopening_for_another_plan_after_submit_allows_a_new_purchase() {
        let storage = MemoryFormStorage::default();
        let mut first = store(&storage);
        fill_everything(&mut first);
        assert!(first.submit());

        let mut second = store(&storage);
        assert!(second.state().is_submitted());
        second.init(FieldsPatch::plan("other", "quarterly"));
        assert!(!second.state().is_submitted());
        assert_eq!(second.state().fields.plan_key.as_deref(), Some("other"));

        assert!(second.submit());
        assert!(second.state().is_submitted());
        let saved = storage.load().unwrap().unwrap();
        assert_eq!(saved.fields.cycle_key.as_deref(), Some("quarterly"));
    }

    #[test]
    fn corrupt_storage_falls_back_to_defaults() {
        let storage = MemoryFormStorage::with_raw("{\"fields\": 42}");
        let store = store(&storage);
        assert_eq!(store.state(), &FormState::default());
    }

    #[test]
    fn broken_storage_keeps_working_in_memory() {
        let mut store = SubscriptionStore::open(BrokenStorage).with_clock(fixed_now);
        store.update_field(Field::FullName, "Jane Doe");
        store.update_field(Field::Email, "jane@x.com");
        store.update_field(Field::Dob, "2000-01-01");

        assert!(store.go_next_from(Step::Personal));
        assert_eq!(store.state().step, Step::Contact);
    }

    #[test]
    fn every_operation_is_persisted() {
        let storage = MemoryFormStorage::default();
        let mut store = store(&storage);
        assert!(storage.raw().is_none());

        store.set_step(Step::Contact);
        let saved = storage.load().unwrap().unwrap();
        assert_eq!(saved.step, Step::Contact);
        assert_eq!(store.revision(), 1);
    }
}
