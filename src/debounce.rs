use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;

pub(crate) fn debounce<T, F>(callback: F, delay_ms: u32) -> impl Fn(T)
where
    T: 'static,
    F: Fn(T) + 'static,
{
    let callback = Rc::new(callback);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move |value: T| {
        let callback = callback.clone();
        let slot = pending.clone();
        let timeout = Timeout::new(delay_ms, move || {
            let _ = slot.borrow_mut().take();
            callback(value);
        });
        *pending.borrow_mut() = Some(timeout);
    }
}
