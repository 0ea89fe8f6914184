//! Single state container with reducer-driven transitions.
//!
//! State is never mutated in place by callers: they dispatch an action and the
//! store swaps in whatever the reducer returns.

mod auth;

pub use auth::auth_reducer;
pub use auth::AuthAction;
pub use auth::AuthState;

use std::fmt::Debug;

/// Pure transition function from a state and an action to the next state.
pub type Reducer<S, A> = fn(&S, &A) -> S;

type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Holds the current state and applies dispatched actions through a reducer.
pub struct Store<S, A> {
    state: S,
    reducer: Reducer<S, A>,
    subscribers: Vec<Subscriber<S>>,
}

impl<S, A: Debug> Store<S, A> {
    /// Creates a store with an initial state.
    pub fn new(initial: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state: initial,
            reducer,
            subscribers: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Applies `action` and notifies subscribers with the new state.
    pub fn dispatch(&mut self, action: A) {
        log::debug!("Dispatch {:?}", action);
        self.state = (self.reducer)(&self.state, &action);
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }

    /// Registers a callback run after every dispatch.
    pub fn subscribe(&mut self, f: impl Fn(&S) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(f));
    }
}

impl<S: Default, A: Debug> Store<S, A> {
    /// Creates a store starting from `S::default()`.
    pub fn with_default(reducer: Reducer<S, A>) -> Self {
        Self::new(S::default(), reducer)
    }
}

/// Store holding the authentication flags.
pub type AuthStore = Store<AuthState, AuthAction>;

impl AuthStore {
    /// Creates an auth store in its initial state.
    pub fn auth() -> Self {
        Self::with_default(auth_reducer)
    }
}

impl<S: Debug, A> Debug for Store<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
