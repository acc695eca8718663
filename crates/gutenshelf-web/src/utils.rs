use std::sync::atomic::{AtomicUsize, Ordering};

use futures::{
    future::{abortable, AbortHandle},
    Future,
};
use futures_signals::signal::{Mutable, Signal};
use gloo_timers::future::TimeoutFuture;
use gutenshelf_lib::{
    error::{Error, Result},
    storage::KeyValueStore,
    DEFAULT_API_URL,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Storage, Window};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static LOCAL_STORAGE: Storage = WINDOW.with(|w| w.local_storage().unwrap_throw().unwrap_throw());
    static API_URL: std::cell::RefCell<String> = std::cell::RefCell::new(DEFAULT_API_URL.to_string());
}

pub struct AsyncState {
    id: usize,
    handle: AbortHandle,
}

impl AsyncState {
    fn new(handle: AbortHandle) -> Self {
        static ID: AtomicUsize = AtomicUsize::new(0);
        let id = ID.fetch_add(1, Ordering::SeqCst);

        Self { id, handle }
    }
}

/// Runs at most one future at a time.
///
/// Starting a load aborts the one still in flight, so a slow response to an
/// older request can never overwrite a newer one.
pub struct AsyncLoader {
    loading: Mutable<Option<AsyncState>>,
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading: Mutable::new(None),
        }
    }

    pub fn replace(&self, value: Option<AsyncState>) {
        let mut loading = self.loading.lock_mut();
        if let Some(state) = loading.as_mut() {
            state.handle.abort();
        }
        *loading = value;
    }

    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (fut, handle) = abortable(fut);

        let state = AsyncState::new(handle);
        let id = state.id;

        self.replace(Some(state));

        let loading = self.loading.clone();

        spawn_local(async move {
            match fut.await {
                Ok(()) => {
                    let mut loading = loading.lock_mut();

                    if let Some(current_id) = loading.as_ref().map(|x| x.id) {
                        if current_id == id {
                            *loading = None;
                        }
                    }
                }
                Err(_) => {
                    debug!("load {} superseded", id);
                }
            }
        });
    }

    /// Like [`AsyncLoader::load`], but waits `delay_ms` first so a burst of
    /// calls only lets the last one through.
    pub fn load_debounced<F>(&self, delay_ms: u32, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        self.load(async move {
            TimeoutFuture::new(delay_ms).await;
            fut.await;
        })
    }

    /// True while a load is outstanding, whatever way it ends
    pub fn is_loading(&self) -> impl Signal<Item = bool> + use<> {
        self.loading.signal_ref(|x| x.is_some())
    }
}

/// `window.localStorage` as a key-value store
#[derive(Clone)]
pub struct BrowserStorage(Storage);

impl BrowserStorage {
    pub fn local() -> Self {
        Self(local_storage())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.0.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("error reading {} from storage: {:?}", key, e);
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("error set {}: {:?}", key, e)))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.0
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("error remove {}: {:?}", key, e)))
    }
}

pub fn initialize_urls() {
    if let Ok(val) = js_sys::eval("window.__GUTENSHELF_API__") {
        if let Some(api_url) = val.as_string() {
            info!("using catalog at {}", api_url);
            API_URL.with(|s| *s.borrow_mut() = api_url);
        }
    }
}

pub fn api_url() -> String {
    API_URL.with(|v| v.borrow().clone())
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

pub fn local_storage() -> Storage {
    LOCAL_STORAGE.with(|s| s.clone())
}
