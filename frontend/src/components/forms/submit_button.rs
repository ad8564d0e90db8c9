use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub loading_label: AttrValue,
    pub loading: bool,
}

/// Submit button that disables itself and shows a spinner while a request is
/// outstanding
#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button
            type="submit"
            class={classes!("btn", "btn-primary", "btn-block", props.loading.then_some("is-loading"))}
            disabled={props.loading}
        >
            {if props.loading {
                html! {
                    <>
                        <span class="spinner" aria-hidden="true"></span>
                        {props.loading_label.clone()}
                    </>
                }
            } else {
                html! { {props.label.clone()} }
            }}
        </button>
    }
}
