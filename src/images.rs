use gloo::events::EventListener;
use web_sys::Document;

use crate::dom;
use crate::observe::EnterObserver;

pub struct ImageHandling {
    _lazy: Option<EnterObserver>,
    _listeners: Vec<EventListener>,
}

pub fn install(document: &Document) -> ImageHandling {
    let mut listeners = Vec::new();
    for image in dom::elements(document, "img") {
        dom::force_visible(&image);
        dom::set_style(&image, "transition", "opacity 0.5s ease");

        let loaded = image.clone();
        listeners.push(EventListener::new(&image, "load", move |_| {
            dom::force_visible(&loaded);
        }));
        let failed = image.clone();
        listeners.push(EventListener::new(&image, "error", move |_| {
            let src = failed.get_attribute("src").unwrap_or_default();
            gloo::console::log!("image failed to load:", src);
        }));
    }

    let lazy = EnterObserver::new(0.0, None, |target, observer| {
        let Some(src) = target.get_attribute("data-src") else {
            return;
        };
        let _ = target.set_attribute("src", &src);
        let _ = target.remove_attribute("data-src");
        observer.unobserve(target);
    });
    if let Some(lazy) = lazy.as_ref() {
        for image in dom::elements(document, "img[data-src]") {
            lazy.observe(&image);
        }
    }

    ImageHandling {
        _lazy: lazy,
        _listeners: listeners,
    }
}
