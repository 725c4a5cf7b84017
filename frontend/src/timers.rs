use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use greeting_shared::timers::{TimerId, Timers};
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

#[allow(dead_code)]
enum Handle {
    Once(Timeout),
    Repeating(Interval),
}

/// gloo-backed [`Timers`]: every timer owns a gloo handle, and dropping
/// this value cancels whatever is still pending.
///
/// Events are handed to `sink` from a microtask rather than from inside
/// the timer closure, so handlers are free to schedule or cancel timers
/// (including the one that just fired).
pub struct BrowserTimers<E> {
    next_id: u64,
    handles: HashMap<TimerId, Handle>,
    fired: Rc<RefCell<Vec<TimerId>>>,
    sink: Callback<E>,
}

impl<E: Clone + 'static> BrowserTimers<E> {
    pub fn new(sink: Callback<E>) -> Self {
        Self {
            next_id: 0,
            handles: HashMap::new(),
            fired: Rc::new(RefCell::new(Vec::new())),
            sink,
        }
    }

    fn allocate(&mut self) -> TimerId {
        // Finished one-shot timers only need their handles released.
        for id in self.fired.borrow_mut().drain(..) {
            self.handles.remove(&id);
        }
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn deliver(sink: &Callback<E>, event: E) {
        let sink = sink.clone();
        spawn_local(async move {
            sink.emit(event);
        });
    }
}

impl<E: Clone + 'static> Timers<E> for BrowserTimers<E> {
    fn after(&mut self, delay_ms: u32, event: E) -> TimerId {
        let id = self.allocate();
        let sink = self.sink.clone();
        let fired = self.fired.clone();
        let timeout = Timeout::new(delay_ms, move || {
            fired.borrow_mut().push(id);
            Self::deliver(&sink, event);
        });
        self.handles.insert(id, Handle::Once(timeout));
        id
    }

    fn every(&mut self, period_ms: u32, event: E) -> TimerId {
        let id = self.allocate();
        let sink = self.sink.clone();
        let interval = Interval::new(period_ms, move || {
            Self::deliver(&sink, event.clone());
        });
        self.handles.insert(id, Handle::Repeating(interval));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        // Dropping a gloo handle clears the browser timer.
        self.handles.remove(&id);
    }
}
