use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use super::geometry::{self, Rect, RootMargin};

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser rejected the observation: {0}")]
    Rejected(String),
}

impl From<JsValue> for ObserveError {
    fn from(value: JsValue) -> Self {
        ObserveError::Rejected(format!("{:?}", value))
    }
}

/// Releases an observation when dropped.
#[must_use = "dropping a subscription stops the observation"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Reports whether a target lies within the margin-adjusted viewport.
///
/// `on_change` receives `true`/`false` as the target enters and leaves; the first report
/// may arrive synchronously or on a later tick depending on the implementation.
pub trait VisibilityObserver<T: ?Sized> {
    fn observe(
        &self,
        target: &T,
        margin: RootMargin,
        on_change: Callback<bool>,
    ) -> Result<Subscription, ObserveError>;
}

/// Browser `IntersectionObserver`, one per observed element.
pub struct IntersectionWatcher;

impl VisibilityObserver<Element> for IntersectionWatcher {
    fn observe(
        &self,
        target: &Element,
        margin: RootMargin,
        on_change: Callback<bool>,
    ) -> Result<Subscription, ObserveError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change.emit(entry.is_intersecting());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut init = IntersectionObserverInit::new();
        init.set_root_margin(&margin.to_string());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

/// Fallback for browsers without `IntersectionObserver`: window scroll/resize listeners
/// plus `getBoundingClientRect`.
pub struct ScrollWatcher;

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

impl VisibilityObserver<Element> for ScrollWatcher {
    fn observe(
        &self,
        target: &Element,
        margin: RootMargin,
        on_change: Callback<bool>,
    ) -> Result<Subscription, ObserveError> {
        let window = web_sys::window().ok_or(ObserveError::NoWindow)?;
        let target = target.clone();
        let window_clone = window.clone();
        let last = Rc::new(Cell::new(None::<bool>));

        let listener = Closure::wrap(Box::new(move || {
            let width = window_clone.inner_width().ok().and_then(|w| w.as_f64());
            let height = window_clone.inner_height().ok().and_then(|h| h.as_f64());
            let (Some(width), Some(height)) = (width, height) else {
                return;
            };
            let bounds = target.get_bounding_client_rect();
            let rect = Rect::new(bounds.top(), bounds.left(), bounds.bottom(), bounds.right());
            let visible = geometry::intersects(&rect, &Rect::from_size(width, height), &margin);
            if last.replace(Some(visible)) != Some(visible) {
                on_change.emit(visible);
            }
        }) as Box<dyn FnMut()>);

        for event in SCROLL_EVENTS {
            window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        }

        // Initial check
        listener.as_ref().unchecked_ref::<Function>().call0(&JsValue::NULL)?;

        Ok(Subscription::new(move || {
            for event in SCROLL_EVENTS {
                let _ = window
                    .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
            drop(listener);
        }))
    }
}

/// Default observer: `IntersectionObserver` where available, scroll listeners otherwise.
pub struct BrowserVisibility;

impl VisibilityObserver<Element> for BrowserVisibility {
    fn observe(
        &self,
        target: &Element,
        margin: RootMargin,
        on_change: Callback<bool>,
    ) -> Result<Subscription, ObserveError> {
        IntersectionWatcher
            .observe(target, margin, on_change.clone())
            .or_else(|err| {
                debug!("IntersectionObserver unavailable ({}), using scroll listener", err);
                ScrollWatcher.observe(target, margin, on_change)
            })
    }
}

/// Observation that ends at the first `true` report.
///
/// `on_visible` fires once; the underlying subscription is released right after,
/// including when the observer reports synchronously from inside `observe`.
pub struct OnceVisible {
    subscription: Rc<RefCell<Option<Subscription>>>,
}

impl OnceVisible {
    pub fn observe<T, O>(
        observer: &O,
        target: &T,
        margin: RootMargin,
        on_visible: Callback<()>,
    ) -> Result<Self, ObserveError>
    where
        T: ?Sized,
        O: VisibilityObserver<T> + ?Sized,
    {
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let fired = Rc::new(Cell::new(false));

        let on_change = {
            let slot = slot.clone();
            let fired = fired.clone();
            Callback::from(move |visible: bool| {
                if !visible || fired.replace(true) {
                    return;
                }
                on_visible.emit(());
                let released = slot.borrow_mut().take();
                drop(released);
            })
        };

        let subscription = observer.observe(target, margin, on_change)?;
        if !fired.get() {
            *slot.borrow_mut() = Some(subscription);
        }
        Ok(Self { subscription: slot })
    }

    pub fn is_active(&self) -> bool {
        self.subscription.borrow().is_some()
    }
}

impl Drop for OnceVisible {
    fn drop(&mut self) {
        // The subscription's callback holds the slot; clearing it breaks the cycle.
        let released = self.subscription.borrow_mut().take();
        drop(released);
    }
}

/// Observer handed to reveal wrappers through a Yew context.
#[derive(Clone)]
pub struct SharedObserver(pub Rc<dyn VisibilityObserver<Element>>);

impl Default for SharedObserver {
    fn default() -> Self {
        Self(Rc::new(BrowserVisibility))
    }
}

impl PartialEq for SharedObserver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::timeline::{RevealConfig, RevealState, RevealTimeline, Visual};

    /// Geometry-driven stand-in for the browser: targets are rectangles in page
    /// coordinates and `scroll_to` moves the viewport.
    #[derive(Default)]
    struct FakeViewport {
        watchers: Rc<RefCell<Vec<Watcher>>>,
        next_id: Cell<usize>,
        height: f64,
    }

    struct Watcher {
        id: usize,
        target: Rect,
        margin: RootMargin,
        on_change: Callback<bool>,
        last: Option<bool>,
    }

    impl FakeViewport {
        fn new(height: f64) -> Self {
            Self { height, ..Self::default() }
        }

        fn scroll_to(&self, y: f64) {
            let viewport = Rect::new(y, 0.0, y + self.height, 1200.0);
            let mut pending = Vec::new();
            for watcher in self.watchers.borrow_mut().iter_mut() {
                let visible = geometry::intersects(&watcher.target, &viewport, &watcher.margin);
                if watcher.last.replace(visible) != Some(visible) {
                    pending.push((watcher.on_change.clone(), visible));
                }
            }
            for (on_change, visible) in pending {
                on_change.emit(visible);
            }
        }

        fn active(&self) -> usize {
            self.watchers.borrow().len()
        }
    }

    impl VisibilityObserver<Rect> for FakeViewport {
        fn observe(
            &self,
            target: &Rect,
            margin: RootMargin,
            on_change: Callback<bool>,
        ) -> Result<Subscription, ObserveError> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.watchers.borrow_mut().push(Watcher {
                id,
                target: *target,
                margin,
                on_change,
                last: None,
            });
            let watchers = self.watchers.clone();
            Ok(Subscription::new(move || {
                watchers.borrow_mut().retain(|w| w.id != id);
            }))
        }
    }

    /// A reveal wrapper reduced to its latch and its observation, driven by a fake clock.
    struct Wrapper {
        timeline: Rc<RefCell<RevealTimeline>>,
        watch: Option<OnceVisible>,
    }

    fn mount(
        viewport: &FakeViewport,
        target: Rect,
        delay: f64,
        clock: &Rc<Cell<f64>>,
    ) -> Wrapper {
        let timeline = Rc::new(RefCell::new(RevealTimeline::new(
            RevealConfig::default().with_delay_secs(delay),
        )));
        let on_visible = {
            let timeline = timeline.clone();
            let clock = clock.clone();
            Callback::from(move |()| {
                timeline.borrow_mut().observe(true, clock.get());
            })
        };
        let margin = timeline.borrow().config().margin;
        let watch = OnceVisible::observe(viewport, &target, margin, on_visible).ok();
        Wrapper { timeline, watch }
    }

    fn block_at(top: f64) -> Rect {
        Rect::new(top, 0.0, top + 200.0, 600.0)
    }

    #[test]
    fn scrolling_back_and_forth_triggers_once() {
        let viewport = FakeViewport::new(800.0);
        let clock = Rc::new(Cell::new(0.0));
        let wrapper = mount(&viewport, block_at(1500.0), 0.0, &clock);

        for (t, y) in [(100.0, 0.0), (200.0, 700.0), (300.0, 0.0), (400.0, 900.0), (500.0, 0.0)] {
            clock.set(t);
            viewport.scroll_to(y);
        }

        assert_eq!(wrapper.timeline.borrow().state(), RevealState::Triggered { at: 200.0 });
        assert_eq!(wrapper.timeline.borrow().visual_at(5000.0), Visual::SHOWN);
    }

    #[test]
    fn wrappers_trigger_independently() {
        let viewport = FakeViewport::new(800.0);
        let clock = Rc::new(Cell::new(0.0));
        let near = mount(&viewport, block_at(500.0), 0.0, &clock);
        let far = mount(&viewport, block_at(3000.0), 0.3, &clock);

        clock.set(50.0);
        viewport.scroll_to(0.0);

        assert!(matches!(near.timeline.borrow().state(), RevealState::Triggered { .. }));
        assert_eq!(far.timeline.borrow().state(), RevealState::NotTriggered);
        assert_eq!(far.timeline.borrow().visual_at(10_000.0), Visual::HIDDEN);
    }

    #[test]
    fn lead_margin_triggers_before_element_is_on_screen() {
        let viewport = FakeViewport::new(800.0);
        let clock = Rc::new(Cell::new(0.0));
        let just_inside = mount(&viewport, block_at(890.0), 0.0, &clock);
        let just_outside = mount(&viewport, block_at(910.0), 0.0, &clock);

        viewport.scroll_to(0.0);
        assert!(matches!(just_inside.timeline.borrow().state(), RevealState::Triggered { .. }));
        assert_eq!(just_outside.timeline.borrow().state(), RevealState::NotTriggered);

        viewport.scroll_to(20.0);
        assert!(matches!(just_outside.timeline.borrow().state(), RevealState::Triggered { .. }));
    }

    #[test]
    fn dropping_subscription_releases_observation() {
        let viewport = FakeViewport::new(800.0);
        let clock = Rc::new(Cell::new(0.0));
        let mut first = mount(&viewport, block_at(2000.0), 0.0, &clock);
        let second = mount(&viewport, block_at(2000.0), 0.0, &clock);
        assert_eq!(viewport.active(), 2);

        drop(first.watch.take());
        assert_eq!(viewport.active(), 1);

        viewport.scroll_to(1900.0);
        assert_eq!(first.timeline.borrow().state(), RevealState::NotTriggered);
        assert!(matches!(second.timeline.borrow().state(), RevealState::Triggered { .. }));
        assert_eq!(viewport.active(), 0);
    }

    #[test]
    fn observation_ends_at_first_visible_report() {
        let viewport = FakeViewport::new(800.0);
        let reports = Rc::new(Cell::new(0));
        let on_visible = {
            let reports = reports.clone();
            Callback::from(move |()| reports.set(reports.get() + 1))
        };
        let watch = OnceVisible::observe(
            &viewport,
            &block_at(1500.0),
            RootMargin::vertical(100.0),
            on_visible,
        )
        .unwrap();

        viewport.scroll_to(0.0);
        assert!(watch.is_active());
        assert_eq!(viewport.active(), 1);

        viewport.scroll_to(700.0);
        assert_eq!(reports.get(), 1);
        assert!(!watch.is_active());
        assert_eq!(viewport.active(), 0);

        for y in [0.0, 800.0, 0.0, 1500.0] {
            viewport.scroll_to(y);
        }
        assert_eq!(reports.get(), 1);
    }

    /// Reports the target visible from inside `observe`, before a subscription exists.
    struct AlreadyVisible {
        released: Rc<Cell<u32>>,
    }

    impl VisibilityObserver<()> for AlreadyVisible {
        fn observe(
            &self,
            _: &(),
            _: RootMargin,
            on_change: Callback<bool>,
        ) -> Result<Subscription, ObserveError> {
            on_change.emit(true);
            on_change.emit(true);
            let released = self.released.clone();
            Ok(Subscription::new(move || released.set(released.get() + 1)))
        }
    }

    #[test]
    fn synchronous_first_report_releases_immediately() {
        let observer = AlreadyVisible { released: Rc::default() };
        let reports = Rc::new(Cell::new(0));
        let on_visible = {
            let reports = reports.clone();
            Callback::from(move |()| reports.set(reports.get() + 1))
        };

        let watch = OnceVisible::observe(&observer, &(), RootMargin::default(), on_visible).unwrap();
        assert_eq!(reports.get(), 1);
        assert_eq!(observer.released.get(), 1);
        assert!(!watch.is_active());

        drop(watch);
        assert_eq!(observer.released.get(), 1);
    }

    #[test]
    fn dropping_watch_before_trigger_releases_observation() {
        let viewport = FakeViewport::new(800.0);
        let watch = OnceVisible::observe(
            &viewport,
            &block_at(5000.0),
            RootMargin::default(),
            Callback::from(|()| {}),
        )
        .unwrap();
        assert_eq!(viewport.active(), 1);
        drop(watch);
        assert_eq!(viewport.active(), 0);
    }

    #[test]
    fn subscription_release_runs_once() {
        let released = Rc::new(Cell::new(0));
        let subscription = {
            let released = released.clone();
            Subscription::new(move || released.set(released.get() + 1))
        };
        assert_eq!(released.get(), 0);
        drop(subscription);
        assert_eq!(released.get(), 1);
    }
}
