//! URL fragment access and the hash router built on top of it.
//!
//! `HashLocation` is the seam between the router and the platform. The browser
//! implementation lives in the frontend crate; `MemoryLocation` keeps the
//! fragment in memory and holds change events back until `dispatch_pending`
//! runs, the same way the browser delivers `hashchange` on a later turn of the
//! event loop.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

/// Handle returned by [`HashLocation::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Change callback. Receives the new raw fragment, `#` included.
pub type FragmentListener = Box<dyn Fn(&str)>;

/// Single shared URL fragment with change notification.
pub trait HashLocation {
    /// Raw fragment with the leading `#`; empty when the URL has none.
    fn fragment(&self) -> String;

    /// Replace the fragment. Takes effect immediately, listeners are notified later.
    fn set_fragment(&self, target: &str);

    fn subscribe(&self, listener: FragmentListener) -> ListenerId;

    /// Returns `false` if `id` is not (or no longer) subscribed.
    fn unsubscribe(&self, id: ListenerId) -> bool;

    fn listener_count(&self) -> usize;
}

/// Strip the leading `#` from a raw fragment, falling back to `default_route`
/// when nothing is left.
pub fn route_from_fragment(fragment: &str, default_route: &str) -> String {
    let route = fragment.strip_prefix('#').unwrap_or(fragment);
    if route.is_empty() {
        default_route.to_string()
    } else {
        route.to_string()
    }
}

/// Fragment part of a full URL, `#` included. Empty when there is none.
///
/// Example: `"https://mkw.example/#blog"` -> `"#blog"`
pub fn fragment_of_url(url: &str) -> &str {
    match url.find('#') {
        Some(idx) => &url[idx..],
        None => "",
    }
}

/// Current page identifier derived from a [`HashLocation`].
#[derive(Clone)]
pub struct HashRouter<L: HashLocation> {
    location: L,
    default_route: String,
}

impl<L> HashRouter<L>
where
    L: HashLocation + Clone + 'static,
{
    pub fn new(location: L, default_route: impl Into<String>) -> Self {
        Self {
            location,
            default_route: default_route.into(),
        }
    }

    pub fn default_route(&self) -> &str {
        &self.default_route
    }

    /// Current route, or the default route when the fragment is empty.
    pub fn current(&self) -> String {
        route_from_fragment(&self.location.fragment(), &self.default_route)
    }

    /// Point the fragment at `target`. Any string is accepted.
    ///
    /// Observers see the new route only once the change event is delivered.
    pub fn navigate(&self, target: &str) {
        self.location.set_fragment(target);
    }

    /// Call `on_change` with the resolved route after every fragment change.
    ///
    /// The listener stays attached until the returned guard is dropped or
    /// detached.
    pub fn watch<F>(&self, on_change: F) -> RouteSubscription<L>
    where
        F: Fn(String) + 'static,
    {
        let default_route = self.default_route.clone();
        let id = self.location.subscribe(Box::new(move |fragment| {
            on_change(route_from_fragment(fragment, &default_route))
        }));
        RouteSubscription {
            location: self.location.clone(),
            id: Some(id),
        }
    }
}

/// Attached fragment listener. Unsubscribes exactly once, on `detach` or drop.
#[must_use = "dropping the subscription detaches the listener"]
pub struct RouteSubscription<L: HashLocation> {
    location: L,
    id: Option<ListenerId>,
}

impl<L: HashLocation> RouteSubscription<L> {
    /// Returns `true` only for the call that actually removed the listener.
    pub fn detach(&mut self) -> bool {
        match self.id.take() {
            Some(id) => self.location.unsubscribe(id),
            None => false,
        }
    }
}

impl<L: HashLocation> Drop for RouteSubscription<L> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// In-memory [`HashLocation`].
///
/// Cloning shares the same fragment and listener set.
#[derive(Clone, Default)]
pub struct MemoryLocation {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Default)]
struct MemoryInner {
    fragment: String,
    listeners: BTreeMap<ListenerId, Rc<dyn Fn(&str)>>,
    next_id: u64,
    pending: VecDeque<String>,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Location that starts at `fragment` (as if loaded with it), no event queued.
    pub fn with_fragment(fragment: &str) -> Self {
        let location = Self::new();
        location.inner.borrow_mut().fragment = normalize_fragment(fragment);
        location
    }

    pub fn pending_events(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Deliver the change events queued so far, oldest first, to every
    /// listener attached when the event starts. A listener removed by an
    /// earlier listener of the same event is skipped, and events raised while
    /// delivering wait for the next call. Returns the number of events delivered.
    pub fn dispatch_pending(&self) -> usize {
        let batch = std::mem::take(&mut self.inner.borrow_mut().pending);
        let delivered = batch.len();
        for fragment in batch {
            let ids: Vec<ListenerId> = self.inner.borrow().listeners.keys().copied().collect();
            for id in ids {
                let listener = self.inner.borrow().listeners.get(&id).cloned();
                if let Some(listener) = listener {
                    listener(&fragment);
                }
            }
        }
        delivered
    }
}

impl HashLocation for MemoryLocation {
    fn fragment(&self) -> String {
        self.inner.borrow().fragment.clone()
    }

    fn set_fragment(&self, target: &str) {
        let next = normalize_fragment(target);
        let mut inner = self.inner.borrow_mut();
        // Browsers fire no hashchange when the fragment is unchanged.
        if inner.fragment != next {
            inner.fragment = next.clone();
            inner.pending.push_back(next);
        }
    }

    fn subscribe(&self, listener: FragmentListener) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.insert(id, Rc::from(listener));
        id
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().listeners.remove(&id).is_some()
    }

    fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Mirror of the `location.hash` setter: one leading `#` is optional and an
/// empty value clears the fragment.
fn normalize_fragment(target: &str) -> String {
    let bare = target.strip_prefix('#').unwrap_or(target);
    if bare.is_empty() {
        String::new()
    } else {
        format!("#{}", bare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |route: String| sink.borrow_mut().push(route))
    }

    #[test]
    fn test_route_from_fragment() {
        assert_eq!(route_from_fragment("#blog", "home"), "blog");
        assert_eq!(route_from_fragment("blog", "home"), "blog");
        assert_eq!(route_from_fragment("", "home"), "home");
        assert_eq!(route_from_fragment("#", "home"), "home");
        // only the first delimiter is stripped
        assert_eq!(route_from_fragment("##x", "home"), "#x");
    }

    #[test]
    fn test_fragment_of_url() {
        assert_eq!(fragment_of_url("https://mkw.example/#blog"), "#blog");
        assert_eq!(fragment_of_url("https://mkw.example/"), "");
        assert_eq!(fragment_of_url("https://mkw.example/#"), "#");
        assert_eq!(fragment_of_url("https://mkw.example/#a#b"), "#a#b");
    }

    #[test]
    fn test_empty_fragment_uses_default_route() {
        let router = HashRouter::new(MemoryLocation::new(), "home");
        assert_eq!(router.current(), "home");
    }

    #[test]
    fn test_initial_fragment_wins_over_default() {
        let router = HashRouter::new(MemoryLocation::with_fragment("#sales"), "home");
        assert_eq!(router.current(), "sales");
    }

    #[test]
    fn test_navigate_round_trip_after_notification() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone(), "home");
        let (seen, on_change) = recorder();
        let _sub = router.watch(on_change);

        for target in ["blog", "sales", "contact", "not-a-page", "Mixed_Case.1", "home"] {
            router.navigate(target);
            assert!(seen.borrow().last().map(String::as_str) != Some(target));

            assert_eq!(location.dispatch_pending(), 1);
            assert_eq!(seen.borrow().last().map(String::as_str), Some(target));
            assert_eq!(router.current(), target);
        }
    }

    #[test]
    fn test_navigate_updates_fragment_before_notification() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone(), "home");
        let (seen, on_change) = recorder();
        let _sub = router.watch(on_change);

        router.navigate("blog");

        assert_eq!(location.fragment(), "#blog");
        assert!(seen.borrow().is_empty());
        assert_eq!(location.pending_events(), 1);
    }

    #[test]
    fn test_notifications_arrive_once_each_in_order() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone(), "home");
        let (seen, on_change) = recorder();
        let _sub = router.watch(on_change);

        router.navigate("blog");
        router.navigate("sales");
        router.navigate("contact");
        assert_eq!(location.dispatch_pending(), 3);
        assert_eq!(location.dispatch_pending(), 0);

        assert_eq!(*seen.borrow(), vec!["blog", "sales", "contact"]);
    }

    #[test]
    fn test_same_fragment_raises_no_event() {
        let location = MemoryLocation::with_fragment("#blog");
        let router = HashRouter::new(location.clone(), "home");

        router.navigate("blog");
        router.navigate("#blog");

        assert_eq!(location.pending_events(), 0);
    }

    #[test]
    fn test_navigate_accepts_leading_hash_and_empty_target() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone(), "home");
        let (seen, on_change) = recorder();
        let _sub = router.watch(on_change);

        router.navigate("#contact");
        router.navigate("");
        location.dispatch_pending();

        assert_eq!(*seen.borrow(), vec!["contact", "home"]);
        assert_eq!(location.fragment(), "");
    }

    #[test]
    fn test_every_observer_is_notified() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone(), "home");
        let (first, on_first) = recorder();
        let (second, on_second) = recorder();
        let _a = router.watch(on_first);
        let _b = router.watch(on_second);

        router.navigate("blog");
        location.dispatch_pending();

        assert_eq!(*first.borrow(), vec!["blog"]);
        assert_eq!(*second.borrow(), vec!["blog"]);
    }

    #[test]
    fn test_mount_unmount_leaves_no_listeners() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone(), "home");
        let n = 25;

        for _ in 0..n {
            let sub = router.watch(|_| {});
            assert_eq!(location.listener_count(), 1);
            drop(sub);
        }
        assert_eq!(location.listener_count(), 0);

        let mounted: Vec<_> = (0..n).map(|_| router.watch(|_| {})).collect();
        assert_eq!(location.listener_count(), n);
        drop(mounted);
        assert_eq!(location.listener_count(), 0);
    }

    #[test]
    fn test_detach_is_exactly_once() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone(), "home");
        let mut sub = router.watch(|_| {});
        let _other = router.watch(|_| {});
        assert_eq!(location.listener_count(), 2);

        assert!(sub.detach());
        assert!(!sub.detach());
        assert_eq!(location.listener_count(), 1);
        drop(sub);
        assert_eq!(location.listener_count(), 1);
    }

    #[test]
    fn test_listener_detached_mid_event_is_not_called() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone(), "home");
        let doomed: Rc<RefCell<Option<RouteSubscription<MemoryLocation>>>> =
            Rc::new(RefCell::new(None));

        // Subscribed first, so it runs first for every event.
        let teardown = doomed.clone();
        let _first = router.watch(move |_| {
            teardown.borrow_mut().take();
        });
        let (seen, on_change) = recorder();
        *doomed.borrow_mut() = Some(router.watch(on_change));
        assert_eq!(location.listener_count(), 2);

        router.navigate("blog");
        location.dispatch_pending();

        assert!(seen.borrow().is_empty());
        assert_eq!(location.listener_count(), 1);
    }

    #[test]
    fn test_listener_added_mid_event_waits_for_next_event() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone(), "home");
        let late: Rc<RefCell<Vec<RouteSubscription<MemoryLocation>>>> =
            Rc::new(RefCell::new(Vec::new()));
        let (seen, on_change) = recorder();
        let on_change = Rc::new(on_change);

        let spawner = router.clone();
        let store = late.clone();
        let _first = router.watch(move |_| {
            if store.borrow().is_empty() {
                let sink = on_change.clone();
                let sub = spawner.watch(move |route| (*sink)(route));
                store.borrow_mut().push(sub);
            }
        });

        router.navigate("blog");
        location.dispatch_pending();
        assert!(seen.borrow().is_empty());

        router.navigate("sales");
        location.dispatch_pending();
        assert_eq!(*seen.borrow(), vec!["sales"]);
    }

    #[test]
    fn test_detached_observer_misses_later_changes() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone(), "home");
        let (seen, on_change) = recorder();
        let sub = router.watch(on_change);

        router.navigate("blog");
        location.dispatch_pending();
        drop(sub);
        router.navigate("sales");
        location.dispatch_pending();

        assert_eq!(*seen.borrow(), vec!["blog"]);
        assert_eq!(router.current(), "sales");
    }

    #[test]
    fn test_navigation_from_listener_waits_for_next_turn() {
        let location = MemoryLocation::new();
        let router = HashRouter::new(location.clone(), "home");
        let calls = Rc::new(Cell::new(0));

        let redirect = router.clone();
        let counter = calls.clone();
        let _sub = router.watch(move |route| {
            counter.set(counter.get() + 1);
            if route == "old-blog" {
                redirect.navigate("blog");
            }
        });

        router.navigate("old-blog");
        assert_eq!(location.dispatch_pending(), 1);
        assert_eq!(calls.get(), 1);
        assert_eq!(location.pending_events(), 1);

        assert_eq!(location.dispatch_pending(), 1);
        assert_eq!(calls.get(), 2);
        assert_eq!(router.current(), "blog");
    }
}
