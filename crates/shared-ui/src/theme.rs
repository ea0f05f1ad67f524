use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{KeyValueStore, Listeners, SubscriptionId, THEME_KEY};

/// The six built-in presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKey {
    #[default]
    Default,
    Dark,
    Ocean,
    Forest,
    Sunset,
    Royal,
}

/// All presets in display order.
pub const ALL_THEMES: [ThemeKey; 6] = [
    ThemeKey::Default,
    ThemeKey::Dark,
    ThemeKey::Ocean,
    ThemeKey::Forest,
    ThemeKey::Sunset,
    ThemeKey::Royal,
];

impl ThemeKey {
    /// Key used for storage and select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKey::Default => "default",
            ThemeKey::Dark => "dark",
            ThemeKey::Ocean => "ocean",
            ThemeKey::Forest => "forest",
            ThemeKey::Sunset => "sunset",
            ThemeKey::Royal => "royal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeKey::Default => "Default Blue",
            ThemeKey::Dark => "Dark Mode",
            ThemeKey::Ocean => "Ocean Breeze",
            ThemeKey::Forest => "Forest Green",
            ThemeKey::Sunset => "Sunset Orange",
            ThemeKey::Royal => "Royal Purple",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ALL_THEMES.into_iter().find(|key| key.as_str() == s)
    }

    /// Parse a key, falling back to [`ThemeKey::Default`].
    pub fn from_key_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            ThemeKey::Default => &DEFAULT_PALETTE,
            ThemeKey::Dark => &DARK_PALETTE,
            ThemeKey::Ocean => &OCEAN_PALETTE,
            ThemeKey::Forest => &FOREST_PALETTE,
            ThemeKey::Sunset => &SUNSET_PALETTE,
            ThemeKey::Royal => &ROYAL_PALETTE,
        }
    }
}

/// Color tokens of one preset. Values are CSS colors or gradients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub background_gradient: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub navbar_background: &'static str,
    pub navbar_text: &'static str,
    pub card_background: &'static str,
    pub card_border: &'static str,
    pub stat_primary: &'static str,
    pub stat_success: &'static str,
    pub stat_warning: &'static str,
    pub stat_info: &'static str,
    pub header_gradient: &'static str,
}

static DEFAULT_PALETTE: Palette = Palette {
    primary: "#2563eb",
    secondary: "#64748b",
    background: "#f8fafc",
    background_gradient: "linear-gradient(135deg, #f8fafc 0%, #e2e8f0 100%)",
    text_primary: "#0f172a",
    text_secondary: "#475569",
    navbar_background: "#1e3a8a",
    navbar_text: "#ffffff",
    card_background: "#ffffff",
    card_border: "#e2e8f0",
    stat_primary: "linear-gradient(135deg, #3b82f6 0%, #1d4ed8 100%)",
    stat_success: "linear-gradient(135deg, #22c55e 0%, #15803d 100%)",
    stat_warning: "linear-gradient(135deg, #f59e0b 0%, #b45309 100%)",
    stat_info: "linear-gradient(135deg, #06b6d4 0%, #0e7490 100%)",
    header_gradient: "linear-gradient(135deg, #1e3a8a 0%, #2563eb 100%)",
};

static DARK_PALETTE: Palette = Palette {
    primary: "#60a5fa",
    secondary: "#94a3b8",
    background: "#0f172a",
    background_gradient: "linear-gradient(135deg, #0f172a 0%, #1e293b 100%)",
    text_primary: "#f1f5f9",
    text_secondary: "#94a3b8",
    navbar_background: "#020617",
    navbar_text: "#e2e8f0",
    card_background: "#1e293b",
    card_border: "#334155",
    stat_primary: "linear-gradient(135deg, #1e40af 0%, #1e3a8a 100%)",
    stat_success: "linear-gradient(135deg, #166534 0%, #14532d 100%)",
    stat_warning: "linear-gradient(135deg, #92400e 0%, #78350f 100%)",
    stat_info: "linear-gradient(135deg, #155e75 0%, #164e63 100%)",
    header_gradient: "linear-gradient(135deg, #020617 0%, #1e293b 100%)",
};

static OCEAN_PALETTE: Palette = Palette {
    primary: "#0891b2",
    secondary: "#0e7490",
    background: "#ecfeff",
    background_gradient: "linear-gradient(135deg, #ecfeff 0%, #cffafe 100%)",
    text_primary: "#083344",
    text_secondary: "#155e75",
    navbar_background: "#0e7490",
    navbar_text: "#ffffff",
    card_background: "#ffffff",
    card_border: "#a5f3fc",
    stat_primary: "linear-gradient(135deg, #06b6d4 0%, #0891b2 100%)",
    stat_success: "linear-gradient(135deg, #14b8a6 0%, #0f766e 100%)",
    stat_warning: "linear-gradient(135deg, #38bdf8 0%, #0284c7 100%)",
    stat_info: "linear-gradient(135deg, #22d3ee 0%, #0e7490 100%)",
    header_gradient: "linear-gradient(135deg, #0e7490 0%, #06b6d4 100%)",
};

static FOREST_PALETTE: Palette = Palette {
    primary: "#15803d",
    secondary: "#4d7c0f",
    background: "#f0fdf4",
    background_gradient: "linear-gradient(135deg, #f0fdf4 0%, #dcfce7 100%)",
    text_primary: "#052e16",
    text_secondary: "#3f6212",
    navbar_background: "#14532d",
    navbar_text: "#f0fdf4",
    card_background: "#ffffff",
    card_border: "#bbf7d0",
    stat_primary: "linear-gradient(135deg, #22c55e 0%, #15803d 100%)",
    stat_success: "linear-gradient(135deg, #84cc16 0%, #4d7c0f 100%)",
    stat_warning: "linear-gradient(135deg, #eab308 0%, #a16207 100%)",
    stat_info: "linear-gradient(135deg, #10b981 0%, #047857 100%)",
    header_gradient: "linear-gradient(135deg, #14532d 0%, #15803d 100%)",
};

static SUNSET_PALETTE: Palette = Palette {
    primary: "#ea580c",
    secondary: "#be123c",
    background: "#fff7ed",
    background_gradient: "linear-gradient(135deg, #fff7ed 0%, #ffedd5 100%)",
    text_primary: "#431407",
    text_secondary: "#9a3412",
    navbar_background: "#9a3412",
    navbar_text: "#fff7ed",
    card_background: "#ffffff",
    card_border: "#fed7aa",
    stat_primary: "linear-gradient(135deg, #f97316 0%, #c2410c 100%)",
    stat_success: "linear-gradient(135deg, #f59e0b 0%, #b45309 100%)",
    stat_warning: "linear-gradient(135deg, #f43f5e 0%, #be123c 100%)",
    stat_info: "linear-gradient(135deg, #fb923c 0%, #ea580c 100%)",
    header_gradient: "linear-gradient(135deg, #9a3412 0%, #f97316 100%)",
};

static ROYAL_PALETTE: Palette = Palette {
    primary: "#7c3aed",
    secondary: "#a21caf",
    background: "#faf5ff",
    background_gradient: "linear-gradient(135deg, #faf5ff 0%, #f3e8ff 100%)",
    text_primary: "#2e1065",
    text_secondary: "#6b21a8",
    navbar_background: "#4c1d95",
    navbar_text: "#faf5ff",
    card_background: "#ffffff",
    card_border: "#e9d5ff",
    stat_primary: "linear-gradient(135deg, #8b5cf6 0%, #6d28d9 100%)",
    stat_success: "linear-gradient(135deg, #d946ef 0%, #a21caf 100%)",
    stat_warning: "linear-gradient(135deg, #f472b6 0%, #be185d 100%)",
    stat_info: "linear-gradient(135deg, #818cf8 0%, #4338ca 100%)",
    header_gradient: "linear-gradient(135deg, #4c1d95 0%, #7c3aed 100%)",
};

/// Entry of the theme picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub key: ThemeKey,
    pub name: &'static str,
}

const fn descriptor(key: ThemeKey, name: &'static str) -> ThemeDescriptor {
    ThemeDescriptor { key, name }
}

static THEME_DESCRIPTORS: [ThemeDescriptor; 6] = [
    descriptor(ThemeKey::Default, "Default Blue"),
    descriptor(ThemeKey::Dark, "Dark Mode"),
    descriptor(ThemeKey::Ocean, "Ocean Breeze"),
    descriptor(ThemeKey::Forest, "Forest Green"),
    descriptor(ThemeKey::Sunset, "Sunset Orange"),
    descriptor(ThemeKey::Royal, "Royal Purple"),
];

/// The fixed list of selectable presets. Does not depend on the current one.
pub fn get_available_themes() -> &'static [ThemeDescriptor] {
    &THEME_DESCRIPTORS
}

/// Style object derived from a palette. Regenerated in full on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStyle {
    vars: Vec<(&'static str, &'static str)>,
}

impl ThemeStyle {
    pub fn from_palette(p: &'static Palette) -> Self {
        Self {
            vars: vec![
                ("--cl-primary", p.primary),
                ("--cl-secondary", p.secondary),
                ("--cl-bg", p.background),
                ("--cl-bg-gradient", p.background_gradient),
                ("--cl-text", p.text_primary),
                ("--cl-text-muted", p.text_secondary),
                ("--cl-navbar-bg", p.navbar_background),
                ("--cl-navbar-text", p.navbar_text),
                ("--cl-card-bg", p.card_background),
                ("--cl-card-border", p.card_border),
                ("--cl-stat-primary", p.stat_primary),
                ("--cl-stat-success", p.stat_success),
                ("--cl-stat-warning", p.stat_warning),
                ("--cl-stat-info", p.stat_info),
                ("--cl-header-gradient", p.header_gradient),
            ],
        }
    }

    /// Value of one custom property, e.g. `var("--cl-primary")`.
    pub fn var(&self, name: &str) -> Option<&'static str> {
        self.vars.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }

    /// Inline `style` attribute declaring every token as a CSS variable.
    pub fn css_variables(&self) -> String {
        self.vars
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What listeners receive after a theme change.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSnapshot {
    pub key: ThemeKey,
    pub style: ThemeStyle,
}

impl ThemeSnapshot {
    fn of(key: ThemeKey) -> Self {
        Self {
            key,
            style: ThemeStyle::from_palette(key.palette()),
        }
    }
}

/// Owned theme state. Clones share the same selection and listeners.
#[derive(Clone)]
pub struct ThemeStore {
    storage: Rc<dyn KeyValueStore>,
    current: Rc<Cell<ThemeKey>>,
    listeners: Listeners<ThemeSnapshot>,
}

impl ThemeStore {
    /// Rehydrate from storage; missing or unknown keys select `default`.
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self::with_fallback(storage, ThemeKey::Default)
    }

    /// Like [`ThemeStore::new`] with a configurable fallback preset.
    pub fn with_fallback(storage: Rc<dyn KeyValueStore>, fallback: ThemeKey) -> Self {
        let current = match storage.get(THEME_KEY) {
            Some(raw) => ThemeKey::parse(&raw).unwrap_or_else(|| {
                tracing::debug!(stored = %raw, "ignoring unknown persisted theme");
                fallback
            }),
            None => fallback,
        };
        Self {
            storage,
            current: Rc::new(Cell::new(current)),
            listeners: Listeners::new(),
        }
    }

    pub fn current(&self) -> ThemeKey {
        self.current.get()
    }

    pub fn style(&self) -> ThemeStyle {
        ThemeStyle::from_palette(self.current().palette())
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot::of(self.current())
    }

    /// Select and persist a preset. Unknown keys leave everything as is
    /// and return `false`.
    pub fn change_theme(&self, key: &str) -> bool {
        let Some(next) = ThemeKey::parse(key) else {
            tracing::warn!(key, "unknown theme key");
            return false;
        };
        self.current.set(next);
        self.storage.set(THEME_KEY, next.as_str());
        tracing::info!(theme = next.as_str(), "theme changed");
        self.listeners.notify(&ThemeSnapshot::of(next));
        true
    }

    pub fn subscribe(&self, callback: impl Fn(&ThemeSnapshot) + 'static) -> SubscriptionId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.unsubscribe(id);
    }
}

/// Theme handle provided as context at the application root.
#[derive(Clone)]
pub struct ThemeContext {
    pub store: ThemeStore,
    pub snapshot: Signal<ThemeSnapshot>,
}

impl ThemeContext {
    pub fn current(&self) -> ThemeKey {
        self.snapshot.read().key
    }

    pub fn change_theme(&self, key: &str) -> bool {
        self.store.change_theme(key)
    }
}

/// Provide `store` to the tree and mirror its snapshots into a signal.
pub fn use_theme_provider(store: ThemeStore) -> ThemeContext {
    let store = use_hook(move || store);
    let snapshot = use_signal(|| store.snapshot());

    let subscription = use_hook({
        let store = store.clone();
        move || {
            store.subscribe(move |next| {
                let mut mirror = snapshot;
                mirror.set(next.clone());
            })
        }
    });
    use_drop({
        let store = store.clone();
        move || store.unsubscribe(subscription)
    });

    use_context_provider(|| ThemeContext { store, snapshot })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Root element that exposes the current palette as CSS variables.
#[component]
pub fn ThemeRoot(children: Element) -> Element {
    let theme = use_theme();
    let snapshot = theme.snapshot.read().clone();
    let style = snapshot.style.css_variables();

    rsx! {
        div {
            class: "theme-root",
            "data-theme": snapshot.key.as_str(),
            style: "{style}",
            {children}
        }
    }
}
