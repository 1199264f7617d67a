use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{Document, Element, Window};

use showreel_core::motion;

use crate::dom;
use crate::observe::EnterObserver;

const OBSERVER_THRESHOLD: f64 = 0.1;
const OBSERVER_MARGIN: &str = "0px 0px -50px 0px";

const REVEAL_CSS: &str = "\
.reveal { opacity: 0; transform: translateY(50px); transition: all 0.8s ease; }\n\
.reveal.active { opacity: 1; transform: translateY(0); }\n";

pub struct RevealAnimator {
    window: Window,
    reveal_targets: Vec<Element>,
    shapes: Vec<Element>,
    hero_background: Option<Element>,
    pending_scroll: Cell<Option<f64>>,
    frame_handle: RefCell<Option<AnimationFrame>>,
    _observer: Option<EnterObserver>,
    listeners: RefCell<Vec<EventListener>>,
}

pub fn install(window: &Window, document: &Document) -> Rc<RevealAnimator> {
    inject_reveal_style(document);
    assign_slide_classes(document);

    let observer = EnterObserver::new(
        OBSERVER_THRESHOLD,
        Some(OBSERVER_MARGIN),
        |target, _observer| {
            let _ = target.class_list().add_1("visible");
        },
    );
    for element in dom::elements(document, ".fade-in, .slide-in-left, .slide-in-right") {
        // a missing observer must degrade to a static, readable page
        dom::set_style(&element, "opacity", "1");
        dom::set_style(&element, "transform", "none");
        if let Some(observer) = observer.as_ref() {
            observer.observe(&element);
        }
    }

    let animator = Rc::new(RevealAnimator {
        window: window.clone(),
        reveal_targets: dom::elements(document, ".reveal"),
        shapes: dom::elements(document, ".shape"),
        hero_background: document.query_selector(".hero-background").ok().flatten(),
        pending_scroll: Cell::new(None),
        frame_handle: RefCell::new(None),
        _observer: observer,
        listeners: RefCell::new(Vec::new()),
    });

    let scroll_target = Rc::clone(&animator);
    animator
        .listeners
        .borrow_mut()
        .push(EventListener::new(window, "scroll", move |_| {
            let scrolled = scroll_target.window.page_y_offset().unwrap_or(0.0);
            scroll_target.queue_scroll_pass(scrolled);
        }));
    animator
}

impl RevealAnimator {
    fn queue_scroll_pass(self: &Rc<Self>, scroll_y: f64) {
        self.pending_scroll.set(Some(scroll_y));
        if self.frame_handle.borrow().is_some() {
            return;
        }
        let animator = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            animator.frame_handle.borrow_mut().take();
            if let Some(scroll_y) = animator.pending_scroll.take() {
                animator.apply_scroll(scroll_y);
            }
        });
        *self.frame_handle.borrow_mut() = Some(handle);
    }

    fn apply_scroll(&self, scroll_y: f64) {
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        for element in &self.reveal_targets {
            let top = element.get_bounding_client_rect().top();
            if motion::reveal_ready(top, viewport_height) {
                let _ = element.class_list().add_1("active");
            }
        }
        for (index, shape) in self.shapes.iter().enumerate() {
            dom::set_style(shape, "transform", &motion::shape_transform(index, scroll_y));
        }
        if let Some(hero) = self.hero_background.as_ref() {
            let offset = motion::hero_offset(scroll_y);
            dom::set_style(hero, "transform", &format!("translateY({offset}px)"));
        }
    }
}

fn inject_reveal_style(document: &Document) {
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(REVEAL_CSS));
    let _ = head.append_child(&style);
}

fn assign_slide_classes(document: &Document) {
    for (index, section) in dom::elements(document, "section").iter().enumerate() {
        if index == 0 {
            continue;
        }
        let blocks = dom::descendants(section, ".about-content, .work-grid, .contact-content");
        for (block_index, block) in blocks.iter().enumerate() {
            dom::force_visible(block);
            dom::set_style(block, "transform", "none");
            let class = if block_index % 2 == 0 {
                "slide-in-left"
            } else {
                "slide-in-right"
            };
            let _ = block.class_list().add_1(class);
        }
    }
}
