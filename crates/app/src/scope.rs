use client::ViewScope;
use dioxus::prelude::*;

/// A cancellation scope tied to the calling component. Fetches wrapped in
/// [`ViewScope::run`] resolve to `None` once the view unmounts.
pub fn use_view_scope() -> ViewScope {
    let scope = use_hook(ViewScope::new);
    use_drop({
        let scope = scope.clone();
        move || scope.cancel()
    });
    scope
}
