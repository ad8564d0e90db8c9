use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub autocomplete: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    /// Extra content rendered under the input, e.g. password rules
    #[prop_or_default]
    pub children: Html,
}

/// Labelled input with its inline validation message
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                class={classes!("form-input", props.error.is_some().then_some("has-error"))}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                value={props.value.clone()}
                {oninput}
                disabled={props.disabled}
                required=true
            />
            {props.children.clone()}
            {if let Some(error) = props.error.as_ref() {
                html! { <p class="field-error">{error}</p> }
            } else { html! {} }}
        </div>
    }
}
