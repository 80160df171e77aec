use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub left_icon: Option<Html>,
    #[prop_or_default]
    pub right_icon: Option<Html>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let ButtonProps { title, id, class, left_icon, right_icon, onclick } = props;

    html! {
        <button id={id.clone()} class={classes!("btn", class.clone())} onclick={onclick.clone()}>
            { left_icon.clone().unwrap_or_else(|| html! {}) }
            <span class="btn-label">
                <div>{ title.clone() }</div>
            </span>
            { right_icon.clone().unwrap_or_else(|| html! {}) }
        </button>
    }
}

pub const BUTTON_CSS: &str = r#"
    .btn {
        position: relative;
        z-index: 10;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.25rem;
        width: fit-content;
        cursor: pointer;
        overflow: hidden;
        border: none;
        border-radius: 9999px;
        background: #f0f2fa;
        padding: 0.75rem 1.75rem;
        color: #000;
    }
    .btn-label {
        position: relative;
        display: inline-flex;
        overflow: hidden;
        font-family: 'general', sans-serif;
        font-size: 0.75rem;
        text-transform: uppercase;
    }
    .btn .icon {
        flex-shrink: 0;
    }
"#;
