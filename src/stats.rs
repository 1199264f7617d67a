use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use web_sys::{Document, Element};

use showreel_core::motion::{CounterTween, COUNT_TICK_MS};

use crate::dom;
use crate::observe::EnterObserver;

const OBSERVER_THRESHOLD: f64 = 0.5;

pub struct StatsCounter {
    _observer: Option<EnterObserver>,
}

pub fn install(document: &Document) -> StatsCounter {
    let observer = EnterObserver::new(OBSERVER_THRESHOLD, None, |target, observer| {
        observer.unobserve(target);
        start_tween(target.clone());
    });
    if let Some(observer) = observer.as_ref() {
        for stat in dom::elements(document, ".stat-number") {
            observer.observe(&stat);
        }
    }
    StatsCounter {
        _observer: observer,
    }
}

fn start_tween(element: Element) {
    let Some(target) = element
        .get_attribute("data-target")
        .and_then(|raw| raw.trim().parse::<u32>().ok())
    else {
        return;
    };
    let tween = Rc::new(RefCell::new(CounterTween::new(target)));
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let interval = Interval::new(COUNT_TICK_MS, {
        let tween = Rc::clone(&tween);
        let handle = Rc::clone(&handle);
        move || {
            let value = tween.borrow_mut().tick();
            element.set_text_content(Some(&value.to_string()));
            if tween.borrow().is_done() {
                // dropping the handle stops the interval
                handle.borrow_mut().take();
            }
        }
    });
    *handle.borrow_mut() = Some(interval);
}
