use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum MessageKind {
    Error,
    Success,
}

#[derive(Properties, PartialEq)]
pub struct FormMessageProps {
    pub kind: MessageKind,
    /// Nothing is rendered when absent
    pub message: Option<String>,
}

/// Screen-wide banner for remote errors and confirmations
#[function_component(FormMessage)]
pub fn form_message(props: &FormMessageProps) -> Html {
    let Some(message) = props.message.as_ref() else {
        return html! {};
    };

    let kind_class = match props.kind {
        MessageKind::Error => "error",
        MessageKind::Success => "success",
    };

    html! {
        <div class={classes!("form-message", kind_class)} role="alert">
            {message}
        </div>
    }
}
