use yew::prelude::*;

use crate::animation::hooks::{use_pointer_tilt, use_scroll_trigger};
use crate::components::animated_title::render_markup;
use crate::components::icons;
use crate::config;

pub const SECTION_ID: &str = "vault";

const BENTO_MAX_TILT_DEG: f64 = 5.0;
const BENTO_PERSPECTIVE_PX: u32 = 700;
const BENTO_SCALE: f64 = 0.95;

pub struct Feature {
    pub video: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub class: &'static str,
}

pub const LEAD_FEATURE: Feature = Feature {
    video: "videos/feature-1.mp4",
    title: "radia<b>n</b>t",
    description: "A cross-platform metagame app, turning your activities across Web2 and Web3 games into a rewarding adventure.",
    class: "bento-tilt--lead",
};

pub const GRID_FEATURES: [Feature; 3] = [
    Feature {
        video: "videos/feature-2.mp4",
        title: "zig<b>m</b>a",
        description: "An anime and gaming-inspired NFT collection - the IP primed for expansion.",
        class: "bento-tilt--tall",
    },
    Feature {
        video: "videos/feature-3.mp4",
        title: "n<b>e</b>xus",
        description: "A gamified social hub, adding a new dimension of play to social interaction for Web3 communities.",
        class: "bento-tilt--wide",
    },
    Feature {
        video: "videos/feature-4.mp4",
        title: "az<b>u</b>l",
        description: "A cross-world AI Agent - elevating your gameplay to be more fun and productive.",
        class: "bento-tilt--wide-offset",
    },
];

#[derive(Properties, PartialEq)]
pub struct BentoTiltProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Card wrapper that leans toward the pointer and slides in when reached.
#[function_component(BentoTilt)]
pub fn bento_tilt(props: &BentoTiltProps) -> Html {
    let node = use_node_ref();
    let reveal = use_scroll_trigger(node.clone(), "top 90%", "bottom top", "play none none reverse");
    let pointer = use_pointer_tilt(node.clone(), BENTO_MAX_TILT_DEG);

    let style = if pointer.tilt.is_flat() {
        String::new()
    } else {
        format!(
            "transform: {};",
            pointer.tilt.to_css(BENTO_PERSPECTIVE_PX, BENTO_SCALE)
        )
    };

    html! {
        <div
            ref={node}
            class={classes!("bento-tilt", props.class.clone(), reveal.is_played().then_some("bento-tilt--revealed"))}
            onmousemove={pointer.onmousemove}
            onmouseleave={pointer.onmouseleave}
        >
            <div class="bento-tilt__inner" style={style}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BentoCardProps {
    pub video: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
}

#[function_component(BentoCard)]
pub fn bento_card(props: &BentoCardProps) -> Html {
    html! {
        <div class="bento-card">
            <video
                src={config::asset(&props.video)}
                loop=true
                muted=true
                autoplay=true
                class="bento-card__video"
            />
            <div class="bento-card__content">
                <h1 class="bento-title special-font">{ render_markup(&props.title) }</h1>
                {
                    match &props.description {
                        Some(description) => html! {
                            <p class="bento-card__description">{ description.clone() }</p>
                        },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}

fn feature_card(feature: &Feature) -> Html {
    html! {
        <BentoTilt class={classes!(feature.class)}>
            <BentoCard
                video={feature.video}
                title={feature.title}
                description={feature.description}
            />
        </BentoTilt>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id={SECTION_ID} class="features">
            <div class="features-container">
                <div class="features-intro">
                    <p class="features-eyebrow">{"Into the Metagame Layer"}</p>
                    <p class="features-lede">
                        {"Immerse yourself in a rich and ever-expanding universe where a vibrant array of products converge into an interconnected overlay experience on your world."}
                    </p>
                </div>

                { feature_card(&LEAD_FEATURE) }

                <div class="features-grid">
                    { for GRID_FEATURES.iter().map(feature_card) }

                    <BentoTilt class={classes!("bento-tilt--small")}>
                        <div class="bento-coming-soon">
                            <h1 class="bento-title special-font">
                                { render_markup("M<b>o</b>re co<b>m</b>ing s<b>o</b>on.") }
                            </h1>
                            <span class="bento-coming-soon__arrow">{ icons::location_arrow() }</span>
                        </div>
                    </BentoTilt>

                    <BentoTilt class={classes!("bento-tilt--small")}>
                        <video
                            src={config::asset("videos/feature-5.mp4")}
                            loop=true
                            muted=true
                            autoplay=true
                            class="bento-fill"
                        />
                    </BentoTilt>
                </div>
            </div>
        </section>
    }
}

pub const FEATURES_CSS: &str = r#"
    .features {
        background: #000;
        padding-bottom: 13rem;
    }
    .features-container {
        margin: 0 auto;
        padding: 0 0.75rem;
    }
    .features-intro {
        padding: 8rem 1.25rem;
    }
    .features-eyebrow {
        font-family: 'circular-web', sans-serif;
        font-size: 1.125rem;
        color: #f0f2fa;
    }
    .features-lede {
        max-width: 28rem;
        font-family: 'circular-web', sans-serif;
        font-size: 1.125rem;
        color: #f0f2fa;
        opacity: 0.5;
    }
    .bento-tilt {
        position: relative;
        overflow: hidden;
        border-radius: 0.375rem;
        opacity: 0;
        transform: translateY(3rem);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .bento-tilt--revealed {
        opacity: 1;
        transform: translateY(0);
    }
    .bento-tilt__inner {
        width: 100%;
        height: 100%;
        transition: transform 0.3s ease-out;
    }
    .bento-tilt--lead {
        margin-bottom: 1.75rem;
        height: 24rem;
        width: 100%;
        border: 1px solid rgba(255, 255, 255, 0.2);
    }
    .features-grid {
        display: grid;
        height: 135vh;
        width: 100%;
        grid-template-columns: repeat(2, 1fr);
        grid-template-rows: repeat(3, 1fr);
        gap: 1.75rem;
    }
    .bento-tilt--tall {
        grid-column: span 2;
        grid-row: span 1;
    }
    .bento-tilt--wide,
    .bento-tilt--wide-offset {
        grid-column: span 2;
        grid-row: span 1;
    }
    .bento-tilt--small {
        grid-column: span 1;
        grid-row: span 1;
    }
    .bento-card {
        position: relative;
        width: 100%;
        height: 100%;
    }
    .bento-card__video,
    .bento-fill {
        position: absolute;
        left: 0;
        top: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        object-position: center;
    }
    .bento-card__content {
        position: relative;
        z-index: 10;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        width: 100%;
        height: 100%;
        padding: 1.25rem;
        color: #f0f2fa;
    }
    .bento-title {
        font-family: 'zentry', sans-serif;
        font-size: 4rem;
        font-weight: 900;
        text-transform: uppercase;
        margin: 0;
    }
    .bento-card__description {
        margin-top: 0.75rem;
        max-width: 16rem;
        font-size: 0.75rem;
    }
    .bento-coming-soon {
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        width: 100%;
        height: 100%;
        padding: 1.25rem;
        background: #5724ff;
    }
    .bento-coming-soon .bento-title {
        max-width: 16rem;
        color: #000;
    }
    .bento-coming-soon__arrow {
        align-self: flex-end;
        margin: 1.25rem;
        transform: scale(5);
    }
    @media (min-width: 768px) {
        .features-container {
            padding: 0 2.5rem;
        }
        .features-intro {
            padding: 8rem 0;
        }
        .features-lede {
            font-size: 1.125rem;
        }
        .bento-tilt--lead {
            height: 65vh;
        }
        .bento-title {
            font-size: 6rem;
        }
        .bento-card__description {
            font-size: 1rem;
        }
        .bento-tilt--tall {
            grid-column: span 1;
            grid-row: span 2;
        }
        .bento-tilt--wide {
            grid-column: span 1;
            grid-row: span 1;
        }
        .bento-tilt--wide-offset {
            grid-column: span 1;
            grid-row: span 1;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animated_title::split_title;

    #[test]
    fn every_feature_has_a_single_word_title() {
        for feature in std::iter::once(&LEAD_FEATURE).chain(GRID_FEATURES.iter()) {
            let lines = split_title(feature.title);
            assert_eq!(lines.len(), 1, "{}", feature.title);
            assert_eq!(lines[0].words.len(), 1, "{}", feature.title);
            assert!(feature.video.starts_with("videos/"));
        }
    }
}
