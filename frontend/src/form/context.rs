use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::form::fields::{Field, FieldValue, FieldsPatch};
use crate::form::state::{FormState, Step};
use crate::form::storage::LocalFormStorage;
use crate::form::store::SubscriptionStore;

/// What components get from `use_subscription`: a snapshot-on-demand of the
/// form plus the store operations. Each operation re-renders the provider.
#[derive(Clone)]
pub struct SubscriptionHandle {
    store: Rc<RefCell<SubscriptionStore>>,
    revision: u64,
    refresh: Callback<()>,
}

impl PartialEq for SubscriptionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.revision == other.revision
    }
}

impl SubscriptionHandle {
    pub fn state(&self) -> FormState {
        self.store.borrow().state().clone()
    }

    fn run<T>(&self, op: impl FnOnce(&mut SubscriptionStore) -> T) -> T {
        let out = op(&mut *self.store.borrow_mut());
        self.refresh.emit(());
        out
    }

    pub fn init(&self, patch: FieldsPatch) {
        self.run(|store| store.init(patch))
    }

    pub fn update_field(&self, field: Field, value: impl Into<FieldValue>) {
        let value = value.into();
        self.run(|store| store.update_field(field, value))
    }

    pub fn set_step(&self, step: Step) {
        self.run(|store| store.set_step(step))
    }

    pub fn validate_step(&self, step: Step) -> bool {
        self.run(|store| store.validate_step(step))
    }

    pub fn go_next_from(&self, step: Step) -> bool {
        self.run(|store| store.go_next_from(step))
    }

    pub fn submit(&self) -> bool {
        self.run(|store| store.submit())
    }
}

#[derive(Properties, PartialEq)]
pub struct SubscriptionProviderProps {
    pub children: Children,
}

/// Owns the one `SubscriptionStore` for this page load.
#[function_component(SubscriptionProvider)]
pub fn subscription_provider(props: &SubscriptionProviderProps) -> Html {
    let store = use_mut_ref(|| SubscriptionStore::open(LocalFormStorage));
    let force_update = use_force_update();

    let refresh = Callback::from(move |_: ()| force_update.force_update());
    let handle = SubscriptionHandle {
        revision: store.borrow().revision(),
        store: store.clone(),
        refresh,
    };

    html! {
        <ContextProvider<SubscriptionHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<SubscriptionHandle>>
    }
}

/// Panics outside `SubscriptionProvider`: that is a wiring bug, not user input.
#[hook]
pub fn use_subscription() -> SubscriptionHandle {
    require_provider(use_context::<SubscriptionHandle>())
}

fn require_provider(context: Option<SubscriptionHandle>) -> SubscriptionHandle {
    context.expect("use_subscription must be used within SubscriptionProvider")
}
