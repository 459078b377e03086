//! `HashLocation` backed by `window.location` and the `hashchange` event.

use contracts::shared::location::{fragment_of_url, FragmentListener, HashLocation, ListenerId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HashChangeEvent;

const HASHCHANGE: &str = "hashchange";

type HashChangeClosure = Closure<dyn FnMut(HashChangeEvent)>;

/// Handle to the page URL. Clones share one listener registry, which keeps
/// every attached closure alive until it is unsubscribed.
#[derive(Clone, Default)]
pub struct BrowserLocation {
    listeners: Rc<RefCell<HashMap<ListenerId, HashChangeClosure>>>,
    next_id: Rc<Cell<u64>>,
}

impl HashLocation for BrowserLocation {
    fn fragment(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    fn set_fragment(&self, target: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_hash(target) {
            log::error!("failed to set location hash to '{}': {:?}", target, err);
        }
    }

    fn subscribe(&self, listener: FragmentListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let Some(window) = web_sys::window() else {
            log::warn!("no window, {:?} not attached", id);
            return id;
        };

        // The event carries the URL it changed to, so each delivery sees its
        // own fragment even when several changes queue up in one turn.
        let closure = Closure::wrap(Box::new(move |event: HashChangeEvent| {
            listener(fragment_of_url(&event.new_url()));
        }) as Box<dyn FnMut(_)>);

        match window.add_event_listener_with_callback(HASHCHANGE, closure.as_ref().unchecked_ref()) {
            Ok(()) => {
                self.listeners.borrow_mut().insert(id, closure);
            }
            Err(err) => log::error!("failed to attach hashchange listener: {:?}", err),
        }
        id
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        let Some(closure) = self.listeners.borrow_mut().remove(&id) else {
            return false;
        };
        if let Some(window) = web_sys::window() {
            if let Err(err) = window
                .remove_event_listener_with_callback(HASHCHANGE, closure.as_ref().unchecked_ref())
            {
                log::error!("failed to detach hashchange listener: {:?}", err);
            }
        }
        true
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}
