//! Shared reactive state, provided once by `App` and read via [`use_app`].
//!
//! DESIGN
//! ======
//! The booking state machines are plain structs from the `booking` crate held
//! in `RwSignal`s. The session is passed around explicitly in [`AppContext`]
//! instead of living in a global.

pub mod actions;

use booking::{ApiClient, Catalog, Id, Identity, SeatEngine, SessionStore};
use leptos::prelude::*;

use crate::net::transport::GlooTransport;
use crate::util::storage::LocalStorage;

pub type Api = ApiClient<GlooTransport>;

#[derive(Clone, Debug)]
pub struct AppContext {
    pub api: Api,
    pub session: RwSignal<SessionStore<LocalStorage>>,
    pub catalog: RwSignal<Catalog>,
    pub seats: RwSignal<SeatEngine>,
}

impl AppContext {
    /// Build the context, loading any persisted identity from `storage`.
    pub fn new(api: Api, storage: LocalStorage) -> Self {
        Self {
            api,
            session: RwSignal::new(SessionStore::load(storage)),
            catalog: RwSignal::new(Catalog::default()),
            seats: RwSignal::new(SeatEngine::new()),
        }
    }

    pub fn identity_untracked(&self) -> Option<Identity> {
        self.session.with_untracked(|session| session.current().cloned())
    }

    /// Current identity id, tracked.
    pub fn me(&self) -> Option<Id> {
        self.session.with(|session| session.current().map(|identity| identity.id.clone()))
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
