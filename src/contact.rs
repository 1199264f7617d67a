use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Request,
    RequestInit, Response,
};

use showreel_core::{ContactPayload, RelayRequest, RELAY_ENDPOINT};

use crate::config::SiteConfig;
use crate::dom;
use crate::notify::{NoticeKind, NotifyHost};

const VALIDATION_NOTICE: &str = "Please fill in all required fields.";
const SENT_NOTICE: &str = "Message sent successfully! I'll get back to you soon.";
const FAILED_NOTICE: &str = "Failed to send message. Please try again.";

const LABEL_FOCUS_COLOR: &str = "#ffffff";
const LABEL_REST_COLOR: &str = "#cccccc";

pub struct ContactForm {
    form: HtmlFormElement,
    notify: Rc<NotifyHost>,
    config: Rc<SiteConfig>,
    sending: Cell<bool>,
    listeners: RefCell<Vec<EventListener>>,
}

pub fn install(
    document: &Document,
    notify: &Rc<NotifyHost>,
    config: &Rc<SiteConfig>,
) -> Option<Rc<ContactForm>> {
    let form = document
        .get_element_by_id("contactForm")?
        .dyn_into::<HtmlFormElement>()
        .ok()?;
    let controller = Rc::new(ContactForm {
        form,
        notify: Rc::clone(notify),
        config: Rc::clone(config),
        sending: Cell::new(false),
        listeners: RefCell::new(Vec::new()),
    });
    controller.install_listeners();
    Some(controller)
}

impl ContactForm {
    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = self.listeners.borrow_mut();

        let controller = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.form,
            "submit",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event| {
                event.prevent_default();
                controller.submit();
            },
        ));

        // label color feedback while a field is focused or holds text
        for group in dom::descendants(&self.form, ".form-group") {
            let Ok(Some(field)) = group.query_selector("input, textarea") else {
                continue;
            };
            let Ok(Some(label)) = group.query_selector("label") else {
                continue;
            };
            let focus_label = label.clone();
            listeners.push(EventListener::new(&field, "focus", move |_| {
                dom::set_style(&focus_label, "color", LABEL_FOCUS_COLOR);
            }));
            let blur_label = label.clone();
            let blur_field = field.clone();
            listeners.push(EventListener::new(&field, "blur", move |_| {
                if field_text(&blur_field).is_empty() {
                    dom::set_style(&blur_label, "color", LABEL_REST_COLOR);
                }
            }));
        }
    }

    fn submit(self: &Rc<Self>) {
        if self.sending.get() {
            return;
        }
        let payload = ContactPayload::trimmed(
            &self.field_value("[name='name']"),
            &self.field_value("[name='contact']"),
            &self.field_value("[name='message']"),
        );
        if payload.validate().is_err() {
            self.notify.show(VALIDATION_NOTICE, NoticeKind::Error);
            return;
        }
        let request = RelayRequest::new(
            &self.config.relay_service_id,
            &self.config.relay_template_id,
            &self.config.relay_public_key,
            &payload,
        );
        let Some(body) = request.to_json() else {
            self.notify.show(FAILED_NOTICE, NoticeKind::Error);
            return;
        };

        self.sending.set(true);
        let button = self
            .form
            .query_selector("button[type='submit']")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok());
        let original_text = button
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default();
        if let Some(button) = button.as_ref() {
            button.set_text_content(Some("Sending..."));
            button.set_disabled(true);
        }

        let controller = Rc::clone(self);
        spawn_local(async move {
            match send_relay(body).await {
                Ok(()) => {
                    controller.notify.show(SENT_NOTICE, NoticeKind::Success);
                    controller.form.reset();
                }
                Err(err) => {
                    gloo::console::warn!("relay send failed", err);
                    controller.notify.show(FAILED_NOTICE, NoticeKind::Error);
                }
            }
            if let Some(button) = button.as_ref() {
                button.set_text_content(Some(&original_text));
                button.set_disabled(false);
            }
            controller.sending.set(false);
        });
    }

    fn field_value(&self, selector: &str) -> String {
        let Ok(Some(element)) = self.form.query_selector(selector) else {
            return String::new();
        };
        field_text(&element)
    }
}

fn field_text(element: &web_sys::Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

async fn send_relay(body: String) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(RELAY_ENDPOINT, &init)?;
    request.headers().set("Content-Type", "application/json")?;
    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response.dyn_into()?;
    if response.ok() {
        Ok(())
    } else {
        Err(JsValue::from_str(&format!(
            "relay responded with status {}",
            response.status()
        )))
    }
}
