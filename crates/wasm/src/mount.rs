use std::cell::RefCell;
use std::rc::Rc;

use royale_core::content::PAGE;
use royale_core::html::{ACTION_ATTR, ROOT_ID, action, render_body};
use royale_core::{PageShell, ShellUpdate, SiteConfig};
use royale_protocol::{PageView, SectionId};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::dom::{
    BodyScrollLock, EventListener, LocationFragmentStore, SectionObserver, action_target,
    apply_view, nav_link_id, warn,
};

type Shell = PageShell<BodyScrollLock, LocationFragmentStore>;

/// A page rendered into the document with its listeners attached.
pub struct MountedPage {
    // Dropped before `shell`, so no callback can observe a torn-down shell.
    _scroll: EventListener,
    _clicks: EventListener,
    _observer: Option<SectionObserver>,
    shell: Rc<RefCell<Shell>>,
}

impl MountedPage {
    pub fn mount(config: &SiteConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let root = mount_root(&document)?;
        root.set_inner_html(&render_body(&PageView::new(false, false, None), &PAGE));

        let located: Vec<(SectionId, Element)> = SectionId::ALL
            .into_iter()
            .filter_map(|id| document.get_element_by_id(id.as_str()).map(|el| (id, el)))
            .collect();
        let ids: Vec<SectionId> = located.iter().map(|(id, _)| *id).collect();

        let shell = Rc::new(RefCell::new(PageShell::new(
            config,
            &ids,
            BodyScrollLock::new(&document),
            LocationFragmentStore::new(window.clone()),
        )));

        // A reload may restore a scrolled position.
        with_shell(&shell, &document, |shell| {
            shell.on_scroll(window.scroll_y().unwrap_or(0.0))
        });

        let scroll = {
            let shell = Rc::clone(&shell);
            let document = document.clone();
            let scroll_window = window.clone();
            EventListener::new(&window, "scroll", move |_: Event| {
                let offset = scroll_window.scroll_y().unwrap_or(0.0);
                with_shell(&shell, &document, |shell| shell.on_scroll(offset));
            })?
        };

        let clicks = {
            let shell = Rc::clone(&shell);
            let click_document = document.clone();
            EventListener::new(&document, "click", move |event: Event| {
                let Some(element) = action_target(&event) else {
                    return;
                };
                let requested = element.get_attribute(ACTION_ATTR);
                with_shell(&shell, &click_document, |shell| match requested.as_deref() {
                    Some(action::TOGGLE_MENU) => shell.toggle_menu(),
                    Some(action::SELECT_NAV) => match nav_link_id(&element) {
                        Some(id) => shell.select_nav(id),
                        None => shell.close_menu(),
                    },
                    Some(action::ENTER) => shell.enter(),
                    _ => ShellUpdate::default(),
                });
            })?
        };

        let observer = if located.is_empty() {
            warn("royale: no sections found, section tracking disabled");
            None
        } else {
            let shell = Rc::clone(&shell);
            let observer_document = document.clone();
            let observer = SectionObserver::new(&config.observer, move |batch| {
                with_shell(&shell, &observer_document, |shell| {
                    shell.on_observations(&batch)
                });
            })?;
            for (_, element) in &located {
                observer.observe(element);
            }
            Some(observer)
        };

        web_sys::console::log_1(
            &format!("royale: mounted, tracking {} sections", located.len()).into(),
        );

        Ok(Self {
            _scroll: scroll,
            _clicks: clicks,
            _observer: observer,
            shell,
        })
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.shell.try_borrow().ok().and_then(|shell| shell.active())
    }
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        if let Ok(mut shell) = self.shell.try_borrow_mut() {
            shell.teardown();
        }
    }
}

fn mount_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(root) = document.get_element_by_id(ROOT_ID) {
        return Ok(root);
    }
    document
        .body()
        .map(Element::from)
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

/// Run an event against the shell and patch the DOM with what changed.
/// Events that arrive while the shell is busy are dropped.
fn with_shell(
    shell: &Rc<RefCell<Shell>>,
    document: &Document,
    event: impl FnOnce(&mut Shell) -> ShellUpdate,
) {
    let Ok(mut shell) = shell.try_borrow_mut() else {
        return;
    };
    let update = event(&mut *shell);
    if !update.is_empty() {
        apply_view(document, &shell.view(), update);
    }
}
