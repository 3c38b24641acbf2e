//! Browser implementations of the page effects, plus DOM patching.
//!
//! Every handle here owns the JS resources it registers and releases them
//! on drop, so dropping a mounted page leaves no listeners or observers
//! behind.

use royale_core::html::{
    ACTION_ATTR, LINK_ACTIVE_CLASS, MENU_TOGGLE_SELECTOR, MOBILE_PANEL_SELECTOR,
    NAV_ELEVATED_CLASS, NAV_LINK_ATTR, NAV_LINK_SELECTOR, NAV_SELECTOR, menu_glyph,
};
use royale_core::{EffectError, FragmentStore, ScrollLock, ShellUpdate};
use royale_protocol::{ObservationBatch, ObserverConfig, PageView, SectionId, SectionObservation};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Locks page scrolling through `overflow: hidden` on `<body>`, restoring
/// whatever inline value was there before.
pub struct BodyScrollLock {
    body: Option<HtmlElement>,
    previous: Option<String>,
}

impl BodyScrollLock {
    pub fn new(document: &Document) -> Self {
        Self {
            body: document.body(),
            previous: None,
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&mut self) {
        let Some(body) = &self.body else { return };
        let style = body.style();
        if self.previous.is_none() {
            self.previous = Some(style.get_property_value("overflow").unwrap_or_default());
        }
        if let Err(e) = style.set_property("overflow", "hidden") {
            warn(&format!("royale: scroll lock failed: {}", js_message(&e)));
        }
    }

    fn unlock(&mut self) {
        let Some(body) = &self.body else { return };
        let Some(previous) = self.previous.take() else {
            return;
        };
        let style = body.style();
        let result = if previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &previous)
        };
        if let Err(e) = result {
            warn(&format!("royale: scroll unlock failed: {}", js_message(&e)));
        }
    }
}

/// `location.hash`, rewritten through `history.replaceState`.
pub struct LocationFragmentStore {
    window: Window,
}

impl LocationFragmentStore {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FragmentStore for LocationFragmentStore {
    fn current(&self) -> Result<String, EffectError> {
        let hash = self
            .window
            .location()
            .hash()
            .map_err(|e| EffectError::new("location.hash", js_message(&e)))?;
        Ok(hash.trim_start_matches('#').to_string())
    }

    fn replace(&mut self, fragment: &str) -> Result<(), EffectError> {
        let history = self
            .window
            .history()
            .map_err(|e| EffectError::new("history", js_message(&e)))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{fragment}")))
            .map_err(|e| EffectError::new("history.replaceState", js_message(&e)))
    }
}

/// An event listener that is removed again on drop.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An `IntersectionObserver` over the page sections. Disconnects on drop.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionObserver {
    pub fn new(
        config: &ObserverConfig,
        mut handler: impl FnMut(ObservationBatch) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: ObservationBatch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| to_observation(&entry))
                    .collect();
                handler(batch);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&config.root_margin.to_string());
        let thresholds: js_sys::Array = config
            .thresholds
            .iter()
            .map(|t| JsValue::from_f64(*t))
            .collect();
        init.set_threshold(&thresholds);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn to_observation(entry: &IntersectionObserverEntry) -> Option<SectionObservation> {
    // Entries for elements that are not sections are ignored.
    let id = entry.target().id().parse::<SectionId>().ok()?;
    Some(SectionObservation::new(
        id,
        entry.bounding_client_rect().top(),
        entry.intersection_ratio(),
        entry.is_intersecting(),
    ))
}

/// The element carrying `data-action` that an event was dispatched from.
pub fn action_target(event: &Event) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(&format!("[{ACTION_ATTR}]")).ok().flatten()
}

pub fn nav_link_id(element: &Element) -> Option<SectionId> {
    element.get_attribute(NAV_LINK_ATTR)?.parse().ok()
}

fn for_each_match(document: &Document, selector: &str, mut f: impl FnMut(Element)) {
    let Ok(list) = document.query_selector_all(selector) else {
        return;
    };
    for idx in 0..list.length() {
        if let Some(element) = list.item(idx).and_then(|node| node.dyn_into::<Element>().ok()) {
            f(element);
        }
    }
}

/// Patch the rendered page to match `view`. Only the parts flagged in
/// `update` are touched.
pub fn apply_view(document: &Document, view: &PageView, update: ShellUpdate) {
    if update.elevation {
        if let Ok(Some(nav)) = document.query_selector(NAV_SELECTOR) {
            let _ = nav
                .class_list()
                .toggle_with_force(NAV_ELEVATED_CLASS, view.elevated);
        }
    }

    if update.active {
        for_each_match(document, NAV_LINK_SELECTOR, |link| {
            let current = nav_link_id(&link)
                .is_some_and(|id| view.nav.iter().any(|l| l.id == id && l.current));
            let _ = link.class_list().toggle_with_force(LINK_ACTIVE_CLASS, current);
            let _ = if current {
                link.set_attribute("aria-current", "page")
            } else {
                link.remove_attribute("aria-current")
            };
        });
    }

    if update.menu {
        for_each_match(document, MOBILE_PANEL_SELECTOR, |panel| {
            let _ = if view.menu_open {
                panel.remove_attribute("hidden")
            } else {
                panel.set_attribute("hidden", "")
            };
        });
        for_each_match(document, MENU_TOGGLE_SELECTOR, |button| {
            let _ = button.set_attribute("aria-label", &view.menu_button_label);
            let _ = button.set_attribute("aria-expanded", &view.menu_open.to_string());
            button.set_text_content(Some(menu_glyph(view.menu_open)));
        });
    }
}
