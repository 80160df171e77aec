use yew::prelude::*;

use crate::animation::hooks::use_scroll_trigger;
use crate::components::animated_title::AnimatedTitle;
use crate::components::button::Button;
use crate::config;

pub const SECTION_ID: &str = "contact";

#[derive(Properties, PartialEq)]
pub struct ImageClipBoxProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub clip_class: Classes,
}

#[function_component(ImageClipBox)]
pub fn image_clip_box(props: &ImageClipBoxProps) -> Html {
    html! {
        <div class={props.clip_class.clone()}>
            <img src={config::asset(&props.src)} alt="" />
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let panel = use_node_ref();
    let reveal = use_scroll_trigger(panel.clone(), "top 80%", "bottom top", "play none none reverse");

    html! {
        <div id={SECTION_ID} class="contact">
            <div
                ref={panel}
                class={classes!("contact-panel", reveal.is_played().then_some("contact-panel--revealed"))}
            >
                <div class="contact-images contact-images--left">
                    <ImageClipBox src="img/contact-1.webp" clip_class={classes!("contact-clip-path-1")} />
                    <ImageClipBox src="img/contact-2.webp" clip_class={classes!("contact-clip-path-2")} />
                </div>

                <div class="contact-images contact-images--swordman">
                    <ImageClipBox src="img/swordman-partial.webp" clip_class={classes!("sword-man-partial")} />
                    <ImageClipBox src="img/swordman.webp" clip_class={classes!("sword-man-clip-path")} />
                </div>

                <div class="contact-copy">
                    <p class="contact-eyebrow">{"Join Zentry"}</p>
                    <AnimatedTitle
                        title="let's b<b>u</b>ild the <br /> new era of <br /> g<b>a</b>ming t<b>o</b>gether."
                        container_class={classes!("contact-title", "special-font")}
                    />
                    <Button title="contact us" class={classes!("contact-button")} />
                </div>
            </div>
        </div>
    }
}

pub const CONTACT_CSS: &str = r#"
    .contact {
        margin: 5rem 0;
        min-height: 24rem;
        width: 100vw;
        padding: 0 2.5rem;
    }
    .contact-panel {
        position: relative;
        border-radius: 0.5rem;
        background: #000;
        padding: 6rem 0;
        color: #f0f2fa;
        overflow: hidden;
        opacity: 0;
        transform: translateY(4rem) scale(0.98);
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }
    .contact-panel--revealed {
        opacity: 1;
        transform: translateY(0) scale(1);
    }
    .contact-images {
        position: absolute;
        height: 100%;
        overflow: hidden;
    }
    .contact-images--left {
        left: -5rem;
        top: 0;
        display: none;
        width: 18rem;
    }
    .contact-images--swordman {
        left: 5rem;
        top: -10rem;
        width: 15rem;
    }
    .contact-images img {
        width: 100%;
        height: auto;
    }
    .contact-clip-path-1 {
        clip-path: polygon(25% 0%, 74% 0, 69% 64%, 34% 73%);
    }
    .contact-clip-path-2 {
        clip-path: polygon(29% 15%, 85% 30%, 50% 100%, 10% 64%);
        transform: translateY(15rem);
    }
    .sword-man-partial {
        position: absolute;
    }
    .sword-man-clip-path {
        clip-path: polygon(16% 0, 89% 15%, 75% 100%, 0 97%);
    }
    .contact-copy {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
    }
    .contact-eyebrow {
        margin-bottom: 2.5rem;
        font-family: 'general', sans-serif;
        font-size: 10px;
        text-transform: uppercase;
    }
    .contact-title.animated-title {
        width: 100%;
        font-size: 2.5rem;
        line-height: 0.9;
    }
    .contact-button {
        margin-top: 2.5rem;
        cursor: pointer;
    }
    @media (min-width: 640px) {
        .contact-images--left {
            display: block;
        }
    }
    @media (min-width: 768px) {
        .contact-images--swordman {
            width: 20rem;
        }
        .contact-title.animated-title {
            font-size: 6rem;
        }
    }
    @media (min-width: 1024px) {
        .contact-images--left {
            left: 5rem;
            width: 24rem;
        }
        .contact-images--swordman {
            left: auto;
            right: 2.5rem;
            top: 50%;
            width: 20rem;
        }
    }
"#;
