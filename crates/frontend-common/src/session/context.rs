//! Session context provider and hooks

use crate::notify::CallbackNotifier;
use crate::storage::BrowserStorage;
use liveconf_client::{ClientError, HttpAuthApi, LiveConfigClient, SessionState, SessionStore};
use liveconf_core::ApiSettings;
use std::ops::Deref;
use std::rc::Rc;
use tokio::sync::{oneshot, watch};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Session store wired to the browser
pub type BrowserSession = SessionStore<HttpAuthApi, BrowserStorage, CallbackNotifier>;

/// Cheaply clonable handle to the page's session store
#[derive(Clone)]
pub struct SharedSession {
    store: Rc<BrowserSession>,
    api: Rc<ApiSettings>,
}

impl SharedSession {
    pub fn new(store: BrowserSession, api: ApiSettings) -> Self {
        Self {
            store: Rc::new(store),
            api: Rc::new(api),
        }
    }

    /// Live config endpoints authenticated with the current token
    pub fn live_config(&self) -> Result<LiveConfigClient, ClientError> {
        Ok(self.store.authenticated_client(&self.api)?.live_config())
    }
}

impl Deref for SharedSession {
    type Target = BrowserSession;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl PartialEq for SharedSession {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

/// Value published to components below [`SessionProvider`]
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: SharedSession,
    pub state: SessionState,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub session: SharedSession,
    pub children: Children,
}

/// Publishes the session to its children and re-renders them on every change
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_state(|| props.session.state());

    {
        let state = state.clone();
        use_effect_with(props.session.clone(), move |session| {
            let mut updates = session.subscribe();
            session.restore();
            state.set(updates.borrow_and_update().clone());

            // Dropping `stop` on unmount ends the listener
            let (stop, stopped) = oneshot::channel::<()>();
            spawn_local(forward_session_updates(updates, stopped, move |snapshot| {
                state.set(snapshot);
            }));

            move || drop(stop)
        });
    }

    let context = SessionContext {
        session: props.session.clone(),
        state: (*state).clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hand every published snapshot to `apply` until the store goes away or
/// `stopped` resolves
pub(crate) async fn forward_session_updates(
    mut updates: watch::Receiver<SessionState>,
    mut stopped: oneshot::Receiver<()>,
    apply: impl Fn(SessionState),
) {
    loop {
        tokio::select! {
            biased;
            _ = &mut stopped => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                apply(updates.borrow_and_update().clone());
            }
        }
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the current session state
#[hook]
pub fn use_session_state() -> SessionState {
    use_session().state
}

/// Hook to check if a token is held
#[hook]
pub fn use_is_authenticated() -> bool {
    use_session().state.token.is_some()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[tokio::test]
    async fn forwarding_stops_on_unmount_while_store_lives() {
        let (publisher, updates) = watch::channel(SessionState::default());
        let (stop, stopped) = oneshot::channel::<()>();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let listener = tokio::spawn(forward_session_updates(updates, stopped, move |snapshot| {
            sink.lock().unwrap().push(snapshot.token);
        }));

        publisher.send_modify(|state| state.token = Some("abc".into()));
        tokio::task::yield_now().await;
        drop(stop);

        tokio::time::timeout(Duration::from_secs(1), listener)
            .await
            .expect("listener should exit once stopped")
            .unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![Some("abc".to_string())]);
        assert_eq!(publisher.receiver_count(), 0);
    }

    #[tokio::test]
    async fn forwarding_stops_when_store_is_dropped() {
        let (publisher, updates) = watch::channel(SessionState::default());
        let (_stop, stopped) = oneshot::channel::<()>();

        let listener = tokio::spawn(forward_session_updates(updates, stopped, |_| {}));
        drop(publisher);

        tokio::time::timeout(Duration::from_secs(1), listener)
            .await
            .expect("listener should exit once the store is gone")
            .unwrap();
    }
}
