use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element, Window};

use crate::notify::NotifyHost;
use crate::{contact, dom, effects, gallery, images, links, nav, reveal, stats};

const OVERLAY_HIDE_DELAY_MS: u32 = 200;
const OVERLAY_REMOVE_DELAY_MS: u32 = 300;

const FORCED_VISIBLE_BLOCKS: &str = "\
    .about-content, .work-grid, .contact-content, .about-text, \
    .about-stats, .work-filter, .contact-info, .contact-form";

struct LoadingScreen {
    element: Element,
    load_listener: RefCell<Option<EventListener>>,
    hide_timer: RefCell<Option<Timeout>>,
    remove_timer: RefCell<Option<Timeout>>,
}

impl LoadingScreen {
    fn install(window: &Window, document: &Document) -> Option<Rc<Self>> {
        let body = document.body()?;
        let element = document.create_element("div").ok()?;
        element.set_class_name("loading");
        element.set_inner_html(r#"<div class="loading-spinner"></div>"#);
        body.append_child(&element).ok()?;

        let screen = Rc::new(Self {
            element,
            load_listener: RefCell::new(None),
            hide_timer: RefCell::new(None),
            remove_timer: RefCell::new(None),
        });
        if document.ready_state() == "complete" {
            // the wasm module can come up after the load event already fired
            screen.schedule_dismiss();
        } else {
            let handle = Rc::clone(&screen);
            *screen.load_listener.borrow_mut() =
                Some(EventListener::new(window, "load", move |_| {
                    handle.schedule_dismiss();
                }));
        }
        Some(screen)
    }

    fn schedule_dismiss(self: &Rc<Self>) {
        let screen = Rc::clone(self);
        *self.hide_timer.borrow_mut() = Some(Timeout::new(OVERLAY_HIDE_DELAY_MS, move || {
            let _ = screen.element.class_list().add_1("hidden");
            let overlay = screen.element.clone();
            *screen.remove_timer.borrow_mut() =
                Some(Timeout::new(OVERLAY_REMOVE_DELAY_MS, move || {
                    overlay.remove();
                }));
        }));
    }
}

// everything the page keeps alive for its lifetime
struct SiteHandles {
    _notify: Rc<NotifyHost>,
    _loading: Option<Rc<LoadingScreen>>,
    _nav: Rc<nav::NavController>,
    _reveal: Rc<reveal::RevealAnimator>,
    _stats: stats::StatsCounter,
    _gallery: Rc<gallery::GalleryController>,
    _contact: Option<Rc<contact::ContactForm>>,
    _links: links::ContactLinks,
    _effects: effects::AmbientEffects,
    _images: images::ImageHandling,
}

thread_local! {
    static SITE: RefCell<Option<SiteHandles>> = RefCell::new(None);
}

pub fn run() {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().expect("window available");
        let document = window.document().expect("document available");

        if let Ok(history) = window.history() {
            let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
        }
        window.scroll_to_with_x_and_y(0.0, 0.0);
        crate::storage::purge_stale_keys();
        enforce_visibility(&document);

        let config = Rc::new(crate::config::SiteConfig::load(&window));
        let notify = NotifyHost::new(document.clone());
        let handles = SiteHandles {
            _loading: LoadingScreen::install(&window, &document),
            _nav: nav::install(&window, &document),
            _reveal: reveal::install(&window, &document),
            _stats: stats::install(&document),
            _gallery: gallery::install(&document, &config),
            _contact: contact::install(&document, &notify, &config),
            _links: links::install(&document, &window, &notify, &config),
            _effects: effects::install(&document, &config),
            _images: images::install(&document),
            _notify: notify,
        };
        SITE.with(|slot| {
            *slot.borrow_mut() = Some(handles);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("showreel only runs on wasm32 targets");
    }
}

// the page has to read fine even if no animation ever fires, so anything
// the reveal styles could leave transparent is forced to its at-rest state
fn enforce_visibility(document: &Document) {
    for section in dom::elements(document, "section") {
        dom::force_visible(&section);
        for block in dom::descendants(&section, FORCED_VISIBLE_BLOCKS) {
            dom::force_visible(&block);
            dom::set_style(&block, "transform", "none");
        }
    }
    for element in dom::elements(document, "p, h1, h2, h3, h4, span, div") {
        let Some(style) = dom::style(&element) else {
            continue;
        };
        let opacity = style.get_property_value("opacity").unwrap_or_default();
        let visibility = style.get_property_value("visibility").unwrap_or_default();
        if opacity == "0" || visibility == "hidden" {
            dom::force_visible(&element);
        }
    }
}
