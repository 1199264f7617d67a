use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, HtmlTextAreaElement, Window};

use showreel_core::links::{telegram_url, whatsapp_url};

use crate::config::SiteConfig;
use crate::dom;
use crate::notify::{NoticeKind, NotifyHost};

const FLASH_MS: u32 = 200;

const FLASH_BACKGROUND: &str = "rgba(255, 255, 255, 0.2)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Modern,
    Fallback,
}

enum ContactAction {
    CopyEmail(String),
    WhatsApp,
    Telegram,
}

pub struct ContactLinks {
    _listeners: Vec<EventListener>,
}

pub fn install(
    document: &Document,
    window: &Window,
    notify: &Rc<NotifyHost>,
    config: &Rc<SiteConfig>,
) -> ContactLinks {
    let mut listeners = Vec::new();
    for item in dom::elements(document, ".contact-item") {
        let Some(action) = classify(&item) else {
            dom::set_style(&item, "cursor", "default");
            continue;
        };
        let _ = item.class_list().add_1("clickable");
        let flash_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let card = item.clone();
        let window = window.clone();
        let notify = Rc::clone(notify);
        let config = Rc::clone(config);
        listeners.push(EventListener::new(&item, "click", move |_| {
            match &action {
                ContactAction::CopyEmail(address) => {
                    copy_text(&window, address);
                    notify.show(
                        &format!("{address} copied to clipboard!"),
                        NoticeKind::Success,
                    );
                }
                ContactAction::WhatsApp => {
                    open_in_new_tab(&whatsapp_url(&config.whatsapp_number, &config.intro_message));
                    notify.show("Opening WhatsApp...", NoticeKind::Info);
                }
                ContactAction::Telegram => {
                    open_in_new_tab(&telegram_url(
                        &config.telegram_username,
                        &config.intro_message,
                    ));
                    notify.show("Opening Telegram...", NoticeKind::Info);
                }
            }
            flash(&card, &flash_timer);
        }));
    }
    ContactLinks {
        _listeners: listeners,
    }
}

fn classify(item: &Element) -> Option<ContactAction> {
    let title = item
        .query_selector("h4")
        .ok()
        .flatten()
        .and_then(|heading| heading.text_content())?;
    let value = item
        .query_selector("p")
        .ok()
        .flatten()
        .and_then(|detail| detail.text_content())?;
    match title.trim() {
        "Email" => Some(ContactAction::CopyEmail(value.trim().to_string())),
        "WhatsApp" => Some(ContactAction::WhatsApp),
        "Telegram" => Some(ContactAction::Telegram),
        _ => None,
    }
}

fn flash(item: &Element, timer: &Rc<RefCell<Option<Timeout>>>) {
    let previous_background = dom::style(item)
        .and_then(|style| style.get_property_value("background").ok())
        .unwrap_or_default();
    dom::set_style(item, "background", FLASH_BACKGROUND);
    dom::set_style(item, "transform", "scale(1.02)");
    let card = item.clone();
    *timer.borrow_mut() = Some(Timeout::new(FLASH_MS, move || {
        dom::set_style(&card, "background", &previous_background);
        dom::set_style(&card, "transform", "scale(1)");
    }));
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

pub fn clipboard_available(window: &Window) -> bool {
    if !window.is_secure_context() {
        return false;
    }
    let navigator = window.navigator();
    js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("clipboard")).unwrap_or(false)
}

// the modern path falls back to the legacy one only if its promise rejects
pub fn copy_text(window: &Window, text: &str) -> CopyPath {
    if clipboard_available(window) {
        let promise = window.navigator().clipboard().write_text(text);
        let text = text.to_string();
        spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                gloo::console::warn!("clipboard write rejected, using fallback");
                fallback_copy(&text);
            }
        });
        CopyPath::Modern
    } else {
        fallback_copy(text);
        CopyPath::Fallback
    }
}

fn fallback_copy(text: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(element) = document.create_element("textarea") else {
        return;
    };
    let Ok(area) = element.dyn_into::<HtmlTextAreaElement>() else {
        return;
    };
    area.set_value(text);
    let _ = area.set_attribute(
        "style",
        "position: fixed; left: -999999px; top: -999999px;",
    );
    let _ = body.append_child(&area);
    let _ = area.focus();
    area.select();
    if document
        .unchecked_ref::<web_sys::HtmlDocument>()
        .exec_command("copy")
        .is_err()
    {
        gloo::console::error!("failed to copy text");
    }
    area.remove();
}
