use leptos::prelude::*;
use tracing::error;

use crate::core::services::{apply_theme, LocalStorage, Theme, ThemeSettings};

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn set(&self, theme: Theme) {
        self.set_theme.set(theme);
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }
}

/// Loads the stored theme and keeps the document classes and local storage in sync with it.
pub fn provide_theme(storage_key: String) -> ThemeContext {
    let settings = ThemeSettings::with_key(LocalStorage, storage_key);
    let (theme, set_theme) = signal(settings.load());

    Effect::new(move |_| {
        let current = theme.get();
        apply_theme(current);
        if let Err(e) = settings.save(current) {
            error!("Failed to persist theme: {}", e);
        }
    });

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext; call provide_theme() in App")
}
