use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;

pub const HEADER_OFFSET_PX: f64 = 70.0;
pub const RAISED_SCROLL_Y: f64 = 100.0;

const RAISED_BACKGROUND: &str = "rgba(10, 10, 10, 0.3)";
const RAISED_SHADOW: &str = "0 8px 32px rgba(0, 0, 0, 0.4)";
const REST_BACKGROUND: &str = "rgba(10, 10, 10, 0.2)";
const REST_SHADOW: &str = "0 8px 32px rgba(0, 0, 0, 0.3)";

pub struct NavController {
    window: Window,
    document: Document,
    hamburger: Option<Element>,
    menu: Option<Element>,
    navbar: Option<Element>,
    listeners: RefCell<Vec<EventListener>>,
}

pub fn install(window: &Window, document: &Document) -> Rc<NavController> {
    let controller = Rc::new(NavController {
        window: window.clone(),
        document: document.clone(),
        hamburger: document.query_selector(".hamburger").ok().flatten(),
        menu: document.query_selector(".nav-menu").ok().flatten(),
        navbar: document.query_selector(".navbar").ok().flatten(),
        listeners: RefCell::new(Vec::new()),
    });
    controller.install_listeners();
    controller
}

impl NavController {
    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = self.listeners.borrow_mut();

        if let Some(hamburger) = self.hamburger.as_ref() {
            let nav = Rc::clone(self);
            listeners.push(EventListener::new(hamburger, "click", move |_| {
                nav.toggle_menu();
            }));
        }

        for link in dom::elements(&self.document, ".nav-link") {
            let nav = Rc::clone(self);
            let link_element = link.clone();
            listeners.push(EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event| {
                    event.prevent_default();
                    nav.close_menu();
                    if let Some(target) = link_element.get_attribute("href") {
                        nav.scroll_to_section(&target);
                    }
                },
            ));
        }

        let nav = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "scroll", move |_| {
            nav.restyle_navbar();
        }));
    }

    fn toggle_menu(&self) {
        if let Some(hamburger) = self.hamburger.as_ref() {
            let _ = hamburger.class_list().toggle("active");
        }
        if let Some(menu) = self.menu.as_ref() {
            let _ = menu.class_list().toggle("active");
        }
    }

    fn close_menu(&self) {
        if let Some(hamburger) = self.hamburger.as_ref() {
            let _ = hamburger.class_list().remove_1("active");
        }
        if let Some(menu) = self.menu.as_ref() {
            let _ = menu.class_list().remove_1("active");
        }
    }

    fn scroll_to_section(&self, fragment: &str) {
        if !fragment.starts_with('#') {
            return;
        }
        let Ok(Some(section)) = self.document.query_selector(fragment) else {
            return;
        };
        let Some(section) = section.dyn_ref::<HtmlElement>().cloned() else {
            return;
        };
        let top = f64::from(section.offset_top()) - HEADER_OFFSET_PX;
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn restyle_navbar(&self) {
        let Some(navbar) = self.navbar.as_ref() else {
            return;
        };
        let scrolled = self.window.scroll_y().unwrap_or(0.0);
        if scrolled > RAISED_SCROLL_Y {
            dom::set_style(navbar, "background", RAISED_BACKGROUND);
            dom::set_style(navbar, "box-shadow", RAISED_SHADOW);
        } else {
            dom::set_style(navbar, "background", REST_BACKGROUND);
            dom::set_style(navbar, "box-shadow", REST_SHADOW);
        }
    }
}
