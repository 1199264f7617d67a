use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::dom;

pub const SLIDE_IN_DELAY_MS: u32 = 100;
pub const HOLD_MS: u32 = 5_000;
pub const SLIDE_OUT_MS: u32 = 300;

const BASE_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
    padding: 15px 20px; border-radius: 10px; color: #ffffff; \
    font-weight: 500; z-index: 10000; transform: translateX(100%); \
    transition: transform 0.3s ease; max-width: 300px; \
    word-wrap: break-word;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn class_suffix(self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            NoticeKind::Success => "linear-gradient(135deg, #4CAF50, #45a049)",
            NoticeKind::Error => "linear-gradient(135deg, #f44336, #d32f2f)",
            NoticeKind::Info => "linear-gradient(135deg, #2196F3, #1976D2)",
        }
    }
}

struct Banner {
    element: Element,
    _slide_in: Timeout,
    _dismiss: Timeout,
    // set once the slide-out starts
    remove: Option<Timeout>,
}

impl Drop for Banner {
    fn drop(&mut self) {
        self.element.remove();
    }
}

// one banner at a time; showing a new one drops the old banner and its timers
pub struct NotifyHost {
    document: Document,
    current: RefCell<Option<Banner>>,
}

impl NotifyHost {
    pub fn new(document: Document) -> Rc<Self> {
        Rc::new(Self {
            document,
            current: RefCell::new(None),
        })
    }

    pub fn show(self: &Rc<Self>, message: &str, kind: NoticeKind) {
        let Some(body) = self.document.body() else {
            return;
        };
        self.current.borrow_mut().take();
        let Ok(element) = self.document.create_element("div") else {
            return;
        };
        element.set_class_name(&format!("notification notification-{}", kind.class_suffix()));
        element.set_text_content(Some(message));
        let _ = element.set_attribute(
            "style",
            &format!("{BASE_STYLE} background: {};", kind.background()),
        );
        let _ = body.append_child(&element);

        let slide_in = Timeout::new(SLIDE_IN_DELAY_MS, {
            let element = element.clone();
            move || {
                dom::set_style(&element, "transform", "translateX(0)");
            }
        });
        let dismiss = Timeout::new(HOLD_MS, {
            let host = Rc::clone(self);
            move || {
                host.dismiss_current();
            }
        });
        *self.current.borrow_mut() = Some(Banner {
            element,
            _slide_in: slide_in,
            _dismiss: dismiss,
            remove: None,
        });
    }

    pub fn dismiss_current(self: &Rc<Self>) {
        let mut slot = self.current.borrow_mut();
        let Some(banner) = slot.as_mut() else {
            return;
        };
        dom::set_style(&banner.element, "transform", "translateX(100%)");
        let host = Rc::clone(self);
        banner.remove = Some(Timeout::new(SLIDE_OUT_MS, move || {
            host.current.borrow_mut().take();
        }));
    }

    pub fn is_showing(&self) -> bool {
        self.current.borrow().is_some()
    }
}
