use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::config::{DeviceClass, SiteConfig};
use crate::dom;

const PARTICLE_COUNT: usize = 50;

const PARTICLE_KEYFRAMES: &str = "\
@keyframes float-particle {\n\
  0% { transform: translateY(100vh) rotate(0deg); opacity: 0; }\n\
  10% { opacity: 1; }\n\
  90% { opacity: 1; }\n\
  100% { transform: translateY(-100px) rotate(360deg); opacity: 0; }\n\
}\n";

const CURSOR_STYLE: &str = "position: fixed; width: 20px; height: 20px; \
    background: rgba(255, 255, 255, 0.5); border-radius: 50%; \
    pointer-events: none; z-index: 9999; transition: transform 0.1s ease; \
    mix-blend-mode: difference;";

const CONTAINER_STYLE: &str = "position: fixed; top: 0; left: 0; \
    width: 100%; height: 100%; pointer-events: none; z-index: 1; \
    overflow: hidden;";

pub struct AmbientEffects {
    _listeners: Vec<EventListener>,
}

pub fn install(document: &Document, config: &SiteConfig) -> AmbientEffects {
    inject_keyframes(document);
    spawn_particles(document);
    let mut listeners = Vec::new();
    if config.device == DeviceClass::Desktop {
        install_cursor(document, &mut listeners);
    }
    AmbientEffects {
        _listeners: listeners,
    }
}

fn inject_keyframes(document: &Document) {
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(PARTICLE_KEYFRAMES));
    let _ = head.append_child(&style);
}

fn spawn_particles(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(container) = document.create_element("div") else {
        return;
    };
    container.set_class_name("particle-container");
    let _ = container.set_attribute("style", CONTAINER_STYLE);
    let _ = body.append_child(&container);
    for _ in 0..PARTICLE_COUNT {
        let Ok(particle) = document.create_element("div") else {
            continue;
        };
        particle.set_class_name("particle");
        let duration = 15.0 + js_sys::Math::random() * 15.0;
        let left = js_sys::Math::random() * 100.0;
        let top = js_sys::Math::random() * 100.0;
        let _ = particle.set_attribute(
            "style",
            &format!(
                "position: absolute; width: 2px; height: 2px; \
                 background: rgba(255, 255, 255, 0.3); border-radius: 50%; \
                 animation: float-particle {duration}s linear infinite; \
                 left: {left}%; top: {top}%;"
            ),
        );
        let _ = container.append_child(&particle);
    }
}

fn install_cursor(document: &Document, listeners: &mut Vec<EventListener>) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(cursor) = document.create_element("div") else {
        return;
    };
    cursor.set_class_name("custom-cursor");
    let _ = cursor.set_attribute("style", CURSOR_STYLE);
    let _ = body.append_child(&cursor);

    let tracked = cursor.clone();
    listeners.push(EventListener::new(document, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        dom::set_style(&tracked, "left", &format!("{}px", event.client_x() - 10));
        dom::set_style(&tracked, "top", &format!("{}px", event.client_y() - 10));
    }));

    for target in dom::elements(document, "a, button, .work-item, .skill-tag") {
        let grown = cursor.clone();
        listeners.push(EventListener::new(&target, "mouseenter", move |_| {
            dom::set_style(&grown, "transform", "scale(2)");
            dom::set_style(&grown, "background", "rgba(255, 255, 255, 0.8)");
        }));
        let shrunk = cursor.clone();
        listeners.push(EventListener::new(&target, "mouseleave", move |_| {
            dom::set_style(&shrunk, "transform", "scale(1)");
            dom::set_style(&shrunk, "background", "rgba(255, 255, 255, 0.5)");
        }));
    }

    hide_over_embeds(document, &cursor, listeners);
}

// the dot reads badly over live video frames
fn hide_over_embeds(document: &Document, cursor: &Element, listeners: &mut Vec<EventListener>) {
    for card in dom::elements(document, ".work-item[data-category*='general']") {
        let hidden = cursor.clone();
        listeners.push(EventListener::new(&card, "mouseenter", move |_| {
            dom::set_style(&hidden, "display", "none");
        }));
        let shown = cursor.clone();
        listeners.push(EventListener::new(&card, "mouseleave", move |_| {
            dom::set_style(&shown, "display", "block");
        }));
    }
}
