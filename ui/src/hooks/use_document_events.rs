//=============================================================================
// File: src/hooks/use_document_events.rs
//=============================================================================

// Document-level `click` and `contextmenu` listeners for the user menu.
// The listeners are attached once, when the component is first rendered,
// and removed exactly once, when it is dropped.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(all(not(target_arch = "wasm32"), feature = "dioxus-desktop", not(test)))]
pub use self::desktop::*;

#[cfg(all(not(target_arch = "wasm32"), any(test, not(feature = "dioxus-desktop"))))]
pub use self::headless::*;

/// # WebAssembly (WASM) Implementation
/// Listens on the browser `document` with `gloo-events`. Each
/// `EventListener` removes itself from the document when dropped.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::prelude::*;
    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;
    use web_sys::Node;

    use crate::hooks::node_ref::MenuTargets;
    use crate::hooks::node_ref::NodeRef;
    use crate::menu_visibility::DocumentEvent;
    use crate::menu_visibility::TargetHits;

    struct DocumentListeners {
        _click: EventListener,
        _context_menu: EventListener,
    }

    pub fn use_document_events<F>(targets: MenuTargets, on_event: F)
    where
        F: FnMut(DocumentEvent) + Clone + 'static,
    {
        let listeners = use_hook(move || Rc::new(RefCell::new(attach(targets, on_event))));

        use_drop(move || {
            listeners.borrow_mut().take();
        });
    }

    fn attach<F>(targets: MenuTargets, on_event: F) -> Option<DocumentListeners>
    where
        F: FnMut(DocumentEvent) + Clone + 'static,
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            dioxus_logger::tracing::warn!("no document; user menu listeners not attached");
            return None;
        };

        let mut on_click = on_event.clone();
        let click = EventListener::new(&document, "click", move |event| {
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok());
            on_click(DocumentEvent::Click(TargetHits {
                trigger: hit(&targets.trigger, target.as_ref()),
                menu: hit(&targets.menu, target.as_ref()),
            }));
        });

        let mut on_context_menu = on_event;
        let context_menu = EventListener::new(&document, "contextmenu", move |_| {
            on_context_menu(DocumentEvent::ContextMenu);
        });

        Some(DocumentListeners {
            _click: click,
            _context_menu: context_menu,
        })
    }

    /// `None` if the handle's node is not in the document.
    fn hit(handle: &NodeRef, target: Option<&Node>) -> Option<bool> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(handle.id())?;
        // `contains` is true for the node itself as well as its descendants
        Some(target.is_some_and(|t| element.contains(Some(t))))
    }
}

/// # Desktop Implementation
/// The webview's DOM is only reachable through JavaScript, so the listeners
/// are installed by an `eval` bridge that posts each event back as JSON.
/// They are registered under an `AbortController` keyed by the menu id and
/// aborted on unmount.
#[cfg(all(not(target_arch = "wasm32"), feature = "dioxus-desktop", not(test)))]
mod desktop {
    use dioxus::prelude::*;
    use serde_json::json;

    use crate::hooks::node_ref::MenuTargets;
    use crate::menu_visibility::DocumentEvent;

    const ATTACH_JS: &str = r#"
        const { key, trigger, menu } = await dioxus.recv();
        const hit = (id, target) => {
            const el = document.getElementById(id);
            return el ? el.contains(target) : null;
        };
        const controller = new AbortController();
        window.__userMenuListeners = window.__userMenuListeners || new Map();
        window.__userMenuListeners.set(key, controller);
        document.addEventListener("click", (e) => {
            dioxus.send({ kind: "click", trigger: hit(trigger, e.target), menu: hit(menu, e.target) });
        }, { signal: controller.signal });
        document.addEventListener("contextmenu", () => {
            dioxus.send({ kind: "contextmenu" });
        }, { signal: controller.signal });
    "#;

    pub fn use_document_events<F>(targets: MenuTargets, on_event: F)
    where
        F: FnMut(DocumentEvent) + Clone + 'static,
    {
        let key = targets.menu.id().to_string();

        use_future(move || {
            let targets = targets.clone();
            let mut on_event = on_event.clone();
            async move {
                let mut bridge = document::eval(ATTACH_JS);
                let setup = json!({
                    "key": targets.menu.id(),
                    "trigger": targets.trigger.id(),
                    "menu": targets.menu.id(),
                });
                if let Err(e) = bridge.send(setup) {
                    dioxus_logger::tracing::warn!("user menu listeners not attached: {e}");
                    return;
                }
                loop {
                    match bridge.recv::<DocumentEvent>().await {
                        Ok(event) => on_event(event),
                        Err(e) => {
                            dioxus_logger::tracing::warn!("user menu listener bridge closed: {e}");
                            break;
                        }
                    }
                }
            }
        });

        use_drop(move || {
            let key = json!(key);
            document::eval(&format!(
                "const c = window.__userMenuListeners?.get({key}); \
                 if (c) {{ c.abort(); window.__userMenuListeners.delete({key}); }}"
            ));
        });
    }
}

/// # Headless Implementation
/// Without a DOM (server rendering, unit tests on any platform feature) the
/// listeners subscribe to an in-process document that hosts can dispatch into.
#[cfg(all(not(target_arch = "wasm32"), any(test, not(feature = "dioxus-desktop"))))]
mod headless {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::prelude::*;

    use crate::hooks::listener_set::Listener;
    use crate::hooks::listener_set::ListenerSet;
    use crate::hooks::node_ref::MenuTargets;
    use crate::menu_visibility::DocumentEvent;

    thread_local! {
        static HEADLESS_DOCUMENT: ListenerSet<DocumentEvent> = ListenerSet::new();
    }

    /// The document headless menus listen on.
    pub fn headless_document() -> ListenerSet<DocumentEvent> {
        HEADLESS_DOCUMENT.with(|document| document.clone())
    }

    /// There are no nodes to hit-test against; hosts dispatch pre-resolved hits.
    pub fn use_document_events<F>(_targets: MenuTargets, mut on_event: F)
    where
        F: FnMut(DocumentEvent) + Clone + 'static,
    {
        let listener: Rc<RefCell<Option<Listener<DocumentEvent>>>> = use_hook(move || {
            let listener = headless_document().listen(move |event| on_event(*event));
            Rc::new(RefCell::new(Some(listener)))
        });

        use_drop(move || {
            listener.borrow_mut().take();
        });
    }
}
