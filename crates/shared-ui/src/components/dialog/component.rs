use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as confirm;
use dioxus_primitives::dialog as prim;

#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("cl-dialog".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-dialog-description", None, false));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

/// Right-aligned button row at the bottom of a dialog.
#[component]
pub fn DialogActions(children: Element) -> Element {
    rsx! {
        div { class: "cl-dialog-actions", {children} }
    }
}

// Confirmation variant: modal, no dismiss on outside click.

#[component]
pub fn AlertDialogRoot(mut props: confirm::AlertDialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        confirm::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: confirm::AlertDialogContentProps) -> Element {
    props
        .class
        .get_or_insert_with(|| "cl-dialog cl-dialog-confirm".to_string());

    rsx! {
        confirm::AlertDialogContent { ..props }
    }
}

#[component]
pub fn AlertDialogTitle(mut props: confirm::AlertDialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-dialog-title", None, false));

    rsx! {
        confirm::AlertDialogTitle { ..props }
    }
}

#[component]
pub fn AlertDialogDescription(mut props: confirm::AlertDialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-dialog-description", None, false));

    rsx! {
        confirm::AlertDialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogActions(mut props: confirm::AlertDialogActionsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-dialog-actions", None, false));

    rsx! {
        confirm::AlertDialogActions { ..props }
    }
}

#[component]
pub fn AlertDialogAction(mut props: confirm::AlertDialogActionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-dialog-confirm-action", None, false));

    rsx! {
        confirm::AlertDialogAction { ..props }
    }
}

#[component]
pub fn AlertDialogCancel(mut props: confirm::AlertDialogCancelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "cl-dialog-cancel", None, false));

    rsx! {
        confirm::AlertDialogCancel { ..props }
    }
}

/// Yes/no confirmation for destructive actions.
#[component]
pub fn ConfirmDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            open,
            on_open_change: move |value: bool| on_open_change.call(value),
            AlertDialogContent {
                AlertDialogTitle { "{title}" }
                AlertDialogDescription { "{message}" }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
