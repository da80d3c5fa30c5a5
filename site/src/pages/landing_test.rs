use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use super::*;
use crate::state::landing::ViewportMode;

/// Scripted window: metrics are set by the test and events are fired by hand.
#[derive(Clone, Default)]
struct FakeWindow {
    width: Rc<Cell<Option<f64>>>,
    scroll_y: Rc<Cell<Option<f64>>>,
    handlers: Rc<RefCell<Vec<(u64, WindowEvent, Rc<dyn Fn()>)>>>,
    live: Arc<Mutex<Vec<u64>>>,
    next_id: Rc<Cell<u64>>,
}

struct FakeSubscription {
    id: u64,
    live: Arc<Mutex<Vec<u64>>>,
}

impl Subscription for FakeSubscription {
    fn remove(self) {
        self.live.lock().unwrap().retain(|id| *id != self.id);
    }
}

impl FakeWindow {
    fn live_count(&self) -> usize {
        self.live.lock().unwrap().len()
    }

    fn fire(&self, event: WindowEvent) {
        let live = self.live.lock().unwrap().clone();
        let handlers: Vec<_> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(id, ev, _)| *ev == event && live.contains(id))
            .map(|(_, _, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            handler();
        }
    }

    fn resize_to(&self, width: f64) {
        self.width.set(Some(width));
        self.fire(WindowEvent::Resize);
    }

    fn scroll_to(&self, scroll_y: f64) {
        self.scroll_y.set(Some(scroll_y));
        self.fire(WindowEvent::Scroll);
    }
}

impl WindowEvents for FakeWindow {
    type Subscription = FakeSubscription;

    fn width(&self) -> Option<f64> {
        self.width.get()
    }

    fn scroll_y(&self) -> Option<f64> {
        self.scroll_y.get()
    }

    fn subscribe(&self, event: WindowEvent, handler: impl Fn() + 'static) -> FakeSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.handlers.borrow_mut().push((id, event, Rc::new(handler)));
        self.live.lock().unwrap().push(id);
        FakeSubscription { id, live: Arc::clone(&self.live) }
    }
}

#[test]
fn classify_viewport_uses_current_width() {
    let window = FakeWindow::default();
    Owner::new().with(|| {
        let state = RwSignal::new(LandingState::default());

        classify_viewport(&window, state);
        assert_eq!(state.get_untracked().viewport, ViewportMode::Desktop);

        window.width.set(Some(640.0));
        classify_viewport(&window, state);
        assert_eq!(state.get_untracked().viewport, ViewportMode::Mobile);
    });
}

#[test]
fn subscribe_window_registers_one_listener_per_event() {
    let window = FakeWindow::default();
    Owner::new().with(|| {
        let state = RwSignal::new(LandingState::default());
        let subscriptions = subscribe_window(&window, state);
        assert_eq!(window.live_count(), 2);

        subscriptions.remove();
        assert_eq!(window.live_count(), 0);
    });
}

#[test]
fn resize_then_scroll_flow_through_handlers() {
    let window = FakeWindow::default();
    Owner::new().with(|| {
        let state = RwSignal::new(LandingState::default());
        let _subscriptions = subscribe_window(&window, state);

        window.scroll_to(100.0);
        assert_eq!(state.get_untracked().headline_transform().css(), "translateY(20px)");

        window.resize_to(500.0);
        window.scroll_to(900.0);
        let snapshot = state.get_untracked();
        assert_eq!(snapshot.viewport, ViewportMode::Mobile);
        assert!((snapshot.scroll_y - 100.0).abs() < 1e-9);
        assert_eq!(snapshot.headline_transform().css(), "none");

        window.resize_to(1200.0);
        window.scroll_to(50.0);
        assert_eq!(state.get_untracked().headline_transform().css(), "translateY(10px)");
    });
}

#[test]
fn unreadable_metrics_leave_state_alone() {
    let window = FakeWindow::default();
    Owner::new().with(|| {
        let state = RwSignal::new(LandingState::default());
        let _subscriptions = subscribe_window(&window, state);

        window.fire(WindowEvent::Resize);
        window.fire(WindowEvent::Scroll);
        assert_eq!(state.get_untracked(), LandingState::default());
    });
}

#[test]
fn owner_cleanup_removes_window_listeners() {
    let window = FakeWindow::default();
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(LandingState::default());
        watch_window(&window, state);
    });
    assert_eq!(window.live_count(), 2);

    owner.cleanup();
    assert_eq!(window.live_count(), 0);

    // Events after teardown reach no handler.
    window.resize_to(400.0);
    window.scroll_to(250.0);
}

#[test]
fn remounting_does_not_accumulate_listeners() {
    let window = FakeWindow::default();
    for _ in 0..3 {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(LandingState::default());
            watch_window(&window, state);
        });
        assert_eq!(window.live_count(), 2);
        owner.cleanup();
    }
    assert_eq!(window.live_count(), 0);
}
