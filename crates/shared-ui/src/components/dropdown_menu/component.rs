use dioxus::prelude::*;
use dioxus_primitives::dropdown_menu as prim;

#[component]
pub fn DropdownMenu(mut props: prim::DropdownMenuProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-menu", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DropdownMenu { ..props }
    }
}

#[component]
pub fn DropdownMenuTrigger(mut props: prim::DropdownMenuTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-menu-trigger", None, false));

    rsx! {
        prim::DropdownMenuTrigger { ..props }
    }
}

#[component]
pub fn DropdownMenuContent(mut props: prim::DropdownMenuContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-menu-content", None, false));

    rsx! {
        prim::DropdownMenuContent { ..props }
    }
}

#[component]
pub fn DropdownMenuItem<T: Clone + PartialEq + 'static>(
    mut props: prim::DropdownMenuItemProps<T>,
) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-menu-item", None, false));

    rsx! {
        prim::DropdownMenuItem { ..props }
    }
}

/// Non-interactive heading inside a menu, e.g. the signed-in user's name.
#[component]
pub fn DropdownMenuLabel(children: Element) -> Element {
    rsx! {
        div { class: "cl-menu-label", {children} }
    }
}

#[component]
pub fn DropdownMenuSeparator() -> Element {
    rsx! {
        div { class: "cl-menu-separator", role: "separator" }
    }
}
