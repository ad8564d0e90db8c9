use yew::prelude::*;

use crate::hooks::use_theme::{use_theme, Theme, ThemeContext};

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the light/dark setting and wraps the app in the matching class
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(Theme::default);

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <div class={classes!("app", theme.css_class())}>
                {props.children.clone()}
            </div>
        </ContextProvider<ThemeContext>>
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let ThemeContext { theme, toggle } = use_theme();
    let onclick = Callback::from(move |_: MouseEvent| toggle.emit(()));

    html! {
        <button
            type="button"
            class="theme-toggle"
            aria-label={theme.toggle_label()}
            title={theme.toggle_label()}
            {onclick}
        >
            {theme.toggle_icon()}
        </button>
    }
}
