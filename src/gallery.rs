use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlIFrameElement};

use showreel_core::{
    volume_command, DeferredVideo, FilterState, ItemTransition, PlaybackParams, VolumeRetry,
    HIDE_COLLAPSE_DELAY_MS, SHOW_FADE_DELAY_MS,
};

use crate::config::SiteConfig;
use crate::dom;

struct WorkItem {
    root: Element,
    tags: String,
    container: Option<Element>,
    deferred: Option<DeferredVideo>,
    embed: RefCell<Option<HtmlIFrameElement>>,
    // at most one pending fade step per item; replacing it cancels the
    // previous one, so a rapid double-switch cannot fire a stale collapse
    transition: RefCell<Option<Timeout>>,
    volume_retry: RefCell<Option<Timeout>>,
    load_listener: RefCell<Option<EventListener>>,
}

pub struct GalleryController {
    document: Document,
    config: Rc<SiteConfig>,
    buttons: Vec<Element>,
    items: Vec<Rc<WorkItem>>,
    state: RefCell<FilterState>,
    listeners: RefCell<Vec<EventListener>>,
}

pub fn install(document: &Document, config: &Rc<SiteConfig>) -> Rc<GalleryController> {
    let items = dom::elements(document, ".work-item")
        .into_iter()
        .map(|root| Rc::new(capture_item(root)))
        .collect();
    let controller = Rc::new(GalleryController {
        document: document.clone(),
        config: Rc::clone(config),
        buttons: dom::elements(document, ".filter-btn"),
        items,
        state: RefCell::new(FilterState::new(&config.default_category)),
        listeners: RefCell::new(Vec::new()),
    });
    controller.install_listeners();
    let default_category = config.default_category.clone();
    controller.apply_filter(&default_category);
    controller
}

fn capture_item(root: Element) -> WorkItem {
    let tags = root.get_attribute("data-category").unwrap_or_default();
    let container = root.query_selector(".video-container").ok().flatten();
    let deferred = container.as_ref().and_then(|container| {
        let frame = container.query_selector("iframe").ok().flatten()?;
        let descriptor = DeferredVideo {
            src: frame.get_attribute("src").unwrap_or_default(),
            title: frame.get_attribute("title").unwrap_or_default(),
            allow: frame.get_attribute("allow").unwrap_or_default(),
            allowfullscreen: frame.has_attribute("allowfullscreen"),
        };
        frame.remove();
        Some(descriptor)
    });
    WorkItem {
        root,
        tags,
        container,
        deferred,
        embed: RefCell::new(None),
        transition: RefCell::new(None),
        volume_retry: RefCell::new(None),
        load_listener: RefCell::new(None),
    }
}

impl GalleryController {
    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = self.listeners.borrow_mut();
        for button in &self.buttons {
            let gallery = Rc::clone(self);
            let button_element = button.clone();
            listeners.push(EventListener::new(button, "click", move |_| {
                let Some(category) = button_element.get_attribute("data-filter") else {
                    return;
                };
                gallery.apply_filter(&category);
            }));
        }
    }

    pub fn apply_filter(self: &Rc<Self>, category: &str) {
        self.state.borrow_mut().switch(category);
        for button in &self.buttons {
            let _ = button.class_list().remove_1("active");
            if button.get_attribute("data-filter").as_deref() == Some(category) {
                let _ = button.class_list().add_1("active");
            }
        }
        let transitions: Vec<ItemTransition> = {
            let state = self.state.borrow();
            self.items
                .iter()
                .map(|item| state.transition_for(&item.tags))
                .collect()
        };
        for (item, transition) in self.items.iter().zip(transitions) {
            match transition {
                ItemTransition::Show => self.show_item(item),
                ItemTransition::Hide => self.hide_item(item),
            }
        }
    }

    pub fn active_category(&self) -> String {
        self.state.borrow().active().to_string()
    }

    fn show_item(&self, item: &Rc<WorkItem>) {
        dom::set_style(&item.root, "display", "block");
        if item.embed.borrow().is_none() {
            self.attach_embed(item);
        }
        let slot = Rc::clone(item);
        *item.transition.borrow_mut() = Some(Timeout::new(SHOW_FADE_DELAY_MS, move || {
            dom::set_style(&slot.root, "opacity", "1");
            dom::set_style(&slot.root, "transform", "translateY(0)");
        }));
    }

    fn hide_item(&self, item: &Rc<WorkItem>) {
        dom::set_style(&item.root, "opacity", "0");
        dom::set_style(&item.root, "transform", "translateY(20px)");
        let slot = Rc::clone(item);
        *item.transition.borrow_mut() = Some(Timeout::new(HIDE_COLLAPSE_DELAY_MS, move || {
            dom::set_style(&slot.root, "display", "none");
            detach_embed(&slot);
        }));
    }

    fn attach_embed(&self, item: &Rc<WorkItem>) {
        let Some(container) = item.container.as_ref() else {
            return;
        };
        let Some(deferred) = item.deferred.as_ref() else {
            return;
        };
        let params = PlaybackParams {
            autoplay: self.config.autoplay_allowed(),
            origin: self.config.page_origin.clone(),
        };
        // an unusable captured source means no embed, silently
        let Some(src) = deferred.player_src(&params) else {
            return;
        };
        let Ok(element) = self.document.create_element("iframe") else {
            return;
        };
        let Ok(frame) = element.dyn_into::<HtmlIFrameElement>() else {
            return;
        };
        let _ = frame.set_attribute("src", &src);
        let _ = frame.set_attribute("loading", "lazy");
        let _ = frame.set_attribute("frameborder", "0");
        if !deferred.title.is_empty() {
            let _ = frame.set_attribute("title", &deferred.title);
        }
        if !deferred.allow.is_empty() {
            let _ = frame.set_attribute("allow", &deferred.allow);
        }
        if deferred.allowfullscreen {
            let _ = frame.set_attribute("allowfullscreen", "");
        }
        dom::set_style(container, "opacity", "0.8");
        let volume = self
            .config
            .autoplay_allowed()
            .then_some(self.config.player_volume);
        let listener = EventListener::new(&frame, "load", {
            let slot = Rc::clone(item);
            let container = container.clone();
            move |_| {
                dom::set_style(&container, "opacity", "1");
                if let Some(level) = volume {
                    start_volume_task(&slot, level);
                }
            }
        });
        *item.load_listener.borrow_mut() = Some(listener);
        let _ = container.append_child(&frame);
        *item.embed.borrow_mut() = Some(frame);
    }
}

fn detach_embed(item: &WorkItem) {
    item.volume_retry.borrow_mut().take();
    item.load_listener.borrow_mut().take();
    if let Some(frame) = item.embed.borrow_mut().take() {
        frame.remove();
    }
}

fn start_volume_task(item: &Rc<WorkItem>, level: u32) {
    let Some(command) = volume_command(level) else {
        return;
    };
    schedule_volume_retry(item, Rc::new(command), VolumeRetry::new());
}

fn schedule_volume_retry(item: &Rc<WorkItem>, command: Rc<String>, mut retry: VolumeRetry) {
    let Some(delay) = retry.next_delay() else {
        item.volume_retry.borrow_mut().take();
        return;
    };
    let slot = Rc::clone(item);
    let timer = Timeout::new(delay, move || {
        if !post_player_command(&slot, &command) {
            slot.volume_retry.borrow_mut().take();
            return;
        }
        schedule_volume_retry(&slot, command, retry);
    });
    *item.volume_retry.borrow_mut() = Some(timer);
}

// false once the embed is gone, which ends the retry chain
fn post_player_command(item: &Rc<WorkItem>, command: &str) -> bool {
    let embed = item.embed.borrow();
    let Some(frame) = embed.as_ref() else {
        return false;
    };
    let Some(target) = frame.content_window() else {
        return true;
    };
    let _ = target.post_message(&JsValue::from_str(command), "*");
    true
}
