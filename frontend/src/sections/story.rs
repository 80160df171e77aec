use yew::prelude::*;

use crate::animation::hooks::use_pointer_tilt;
use crate::components::animated_title::AnimatedTitle;
use crate::components::button::Button;
use crate::config;

pub const SECTION_ID: &str = "prologue";

// ±10° at the image edges.
const STORY_MAX_TILT_DEG: f64 = 20.0;
const STORY_PERSPECTIVE_PX: u32 = 500;

#[function_component(Story)]
pub fn story() -> Html {
    let image = use_node_ref();
    let pointer = use_pointer_tilt(image.clone(), STORY_MAX_TILT_DEG);
    let image_style = format!(
        "transform: {};",
        pointer.tilt.to_css(STORY_PERSPECTIVE_PX, 1.0)
    );

    html! {
        <section id={SECTION_ID} class="story">
            <div class="story-inner">
                <p class="story-eyebrow">{"the multiversal ip world"}</p>

                <div class="story-stage">
                    <AnimatedTitle
                        title="the st<b>o</b>ry of <br /> a hidden real<b>m</b>"
                        container_class={classes!("story-title")}
                    />

                    <div class="story-img-container">
                        <div class="story-img-mask">
                            <div class="story-img-content">
                                <img
                                    ref={image}
                                    src={config::asset("img/entrance.webp")}
                                    alt="entrance"
                                    class="story-img"
                                    style={image_style}
                                    onmousemove={pointer.onmousemove}
                                    onmouseleave={pointer.onmouseleave}
                                />
                            </div>
                        </div>
                    </div>
                </div>

                <div class="story-copy">
                    <div class="story-copy__inner">
                        <p>
                            {"Where realms converge, lies Zentry and the boundless pillar. Discover its secrets and shape your fate amidst infinite opportunities."}
                        </p>
                        <Button
                            id="realm-btn"
                            title="discover prologue"
                            class={classes!("story-button")}
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

pub const STORY_CSS: &str = r#"
    .story {
        min-height: 100dvh;
        width: 100vw;
        background: #000;
        color: #f0f2fa;
    }
    .story-inner {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 2.5rem 0 6rem;
    }
    .story-eyebrow {
        font-family: 'general', sans-serif;
        font-size: 0.875rem;
        text-transform: uppercase;
    }
    .story-stage {
        position: relative;
        width: 100%;
        height: 100dvh;
    }
    .story-title.animated-title {
        position: relative;
        z-index: 10;
        margin-top: 1.25rem;
        pointer-events: none;
        mix-blend-mode: difference;
    }
    .story-img-container {
        position: relative;
        height: 90vh;
        width: 100%;
    }
    .story-img-mask {
        position: absolute;
        left: 0;
        top: 0;
        width: 100%;
        height: 100%;
        overflow: hidden;
        clip-path: polygon(4% 0, 83% 21%, 100% 73%, 0% 100%);
    }
    .story-img-content {
        position: absolute;
        top: -10%;
        left: 0;
        width: 100%;
        height: 100%;
        transform: translate3d(0, 0, 0) rotateX(0) rotateY(0) rotateZ(0) scale(1);
    }
    .story-img {
        width: 100%;
        height: 100%;
        object-fit: contain;
        transition: transform 0.3s ease-in-out;
    }
    .story-copy {
        margin-top: -20rem;
        display: flex;
        width: 100%;
        justify-content: center;
    }
    .story-copy__inner {
        position: relative;
        display: flex;
        height: 100%;
        width: fit-content;
        flex-direction: column;
        align-items: center;
    }
    .story-copy__inner p {
        margin-top: 0.75rem;
        max-width: 24rem;
        text-align: center;
        font-family: 'circular-web', sans-serif;
        color: #dfdff0;
    }
    .story-button {
        margin-top: 1.25rem;
    }
    @media (min-width: 768px) {
        .story-eyebrow {
            font-size: 10px;
        }
        .story-copy {
            margin-top: -16rem;
            justify-content: flex-end;
            padding-right: 10rem;
        }
        .story-copy__inner {
            align-items: flex-start;
        }
        .story-copy__inner p {
            text-align: left;
        }
    }
"#;
