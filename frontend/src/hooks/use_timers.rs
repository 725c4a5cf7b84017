use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::timers::BrowserTimers;

pub type TimersHandle<E> = Rc<RefCell<Option<BrowserTimers<E>>>>;

/// Browser timers owned by the calling component. Every fired event is
/// passed to `handler` together with the timers so it can schedule more.
/// Everything pending is cancelled on unmount.
#[hook]
pub fn use_timers<E, F>(handler: F) -> TimersHandle<E>
where
    E: Clone + 'static,
    F: Fn(E, &mut BrowserTimers<E>) + 'static,
{
    let handle: TimersHandle<E> = use_mut_ref(|| None);

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            let sink = {
                let handle = handle.clone();
                Callback::from(move |event: E| {
                    if let Some(timers) = handle.borrow_mut().as_mut() {
                        handler(event, timers);
                    }
                })
            };
            *handle.borrow_mut() = Some(BrowserTimers::new(sink));

            move || {
                handle.borrow_mut().take();
            }
        });
    }

    handle
}

/// Runs `f` with the component's timers, if they are live.
pub fn with_timers<E, R>(
    handle: &TimersHandle<E>,
    f: impl FnOnce(&mut BrowserTimers<E>) -> R,
) -> Option<R>
where
    E: Clone + 'static,
{
    handle.borrow_mut().as_mut().map(f)
}
