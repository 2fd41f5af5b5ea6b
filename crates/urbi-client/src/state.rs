//! Application store wiring.

use std::ops::Deref;
use std::rc::Rc;

use urbi_core::{AppAction, AppState};
use yew::prelude::*;

use crate::services::actions;

/// `AppState` behind a Yew reducer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    state: AppState,
}

impl Store {
    /// Initial store, signed in when a session was saved.
    fn restored() -> Self {
        Self {
            state: AppState::default().reduce(actions::restore_session().into()),
        }
    }
}

impl Deref for Store {
    type Target = AppState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Reducible for Store {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = self.state.reduce(action);
        if state == self.state {
            return self;
        }
        Rc::new(Self { state })
    }
}

/// Context type for the application store.
pub type StoreContext = UseReducerHandle<Store>;

/// Props for the StoreProvider component.
#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    pub children: Html,
}

/// Provides the application store to all descendants.
#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let store = use_reducer(Store::restored);

    html! {
        <ContextProvider<StoreContext> context={store}>
            { props.children.clone() }
        </ContextProvider<StoreContext>>
    }
}

/// Returns the application store.
#[hook]
pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("StoreContext not found")
}
