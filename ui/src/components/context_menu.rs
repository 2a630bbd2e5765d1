// ui/src/components/context_menu.rs
#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use crate::menu_actions::MenuAction;
use crate::menu_actions::MenuCommand;

#[derive(Props, PartialEq, Clone)]
pub struct ContextMenuProps {
    /// Element id of the popover, so callers can hit-test against it.
    pub id: String,
    pub visible: bool,
    pub actions: Vec<MenuAction>,
    /// Called with the command of the chosen entry.
    pub on_select: EventHandler<MenuCommand>,
    /// Called when the popover asks to be closed.
    pub on_hide: EventHandler<()>,
    #[props(optional)]
    pub style: Option<String>,
}

/// Reports the chosen command, then asks to be hidden.
fn choose(command: MenuCommand, on_select: EventHandler<MenuCommand>, on_hide: EventHandler<()>) {
    on_select.call(command);
    on_hide.call(());
}

fn handle_key(key: &Key, on_hide: EventHandler<()>) {
    if *key == Key::Escape {
        on_hide.call(());
    }
}

/// A generic popover listing labelled actions.
///
/// Choosing an entry reports its command and then asks to be hidden. The
/// list takes keyboard focus whenever it is shown, so Escape closes it.
pub fn ContextMenu(props: ContextMenuProps) -> Element {
    let on_select = props.on_select;
    let on_hide = props.on_hide;
    let visible = props.visible;
    let display = if visible { "block" } else { "none" };
    let id = props.id;
    let extra_style = props.style.unwrap_or_default();
    let actions = props.actions;

    let mut list = use_signal(|| None::<Rc<MountedData>>);

    use_effect(use_reactive((&visible,), move |(visible,)| {
        if !visible {
            return;
        }
        if let Some(list) = list.peek().clone() {
            spawn(async move {
                list.set_focus(true).await.ok();
            });
        }
    }));

    rsx! {
        ul {
            id: "{id}",
            role: "menu",
            tabindex: "-1",
            hidden: !visible,
            style: "
                display: {display};
                list-style: none;
                min-width: 10rem;
                margin: 0;
                padding: 0.25rem 0;
                z-index: 10;
                background-color: var(--pico-card-background-color, #fff);
                border: 1px solid var(--pico-card-border-color, #d8dde3);
                border-radius: var(--pico-border-radius, 0.25rem);
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
                {extra_style}
            ",
            onmounted: move |mounted| list.set(Some(mounted.data.clone())),
            onkeydown: move |evt| handle_key(&evt.key(), on_hide),
            {
                actions.into_iter().map(|action| {
                    let command = action.command;
                    rsx! {
                        li {
                            key: "{action.label}",
                            role: "menuitem",
                            style: "padding: 0.4rem 1rem; cursor: pointer; white-space: nowrap;",
                            onclick: move |_| choose(command.clone(), on_select, on_hide),
                            "{action.label}"
                        }
                    }
                })
            }
        }
    }
}
