use yew::prelude::*;

use crate::animation::easing::POWER2_IN_OUT_CSS;
use crate::animation::hooks::use_scroll_trigger;
use crate::animation::tween::Stagger;
use crate::config;

const LINE_BREAK: &str = "<br />";
const LINE_BREAK_VARIANTS: [&str; 2] = ["<br/>", "<br>"];
const BOLD_OPEN: &str = "<b>";
const BOLD_CLOSE: &str = "</b>";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleWord {
    pub segments: Vec<Segment>,
}

impl TitleWord {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleLine {
    pub words: Vec<TitleWord>,
}

/// The title as one plain sentence, for assistive tech.
pub fn plain_text(lines: &[TitleLine]) -> String {
    lines
        .iter()
        .flat_map(|line| line.words.iter().map(TitleWord::text))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a title into lines on `<br />` and into words on whitespace.
///
/// `<b>`/`</b>` mark emphasised letters; an unclosed `<b>` carries over into
/// the following words. Empty words and empty lines are dropped.
pub fn split_title(title: &str) -> Vec<TitleLine> {
    let mut normalized = title.to_string();
    for variant in LINE_BREAK_VARIANTS {
        normalized = normalized.replace(variant, LINE_BREAK);
    }

    let mut bold = false;
    normalized
        .split(LINE_BREAK)
        .map(|line| TitleLine {
            words: line
                .split_whitespace()
                .map(|word| parse_word(word, &mut bold))
                .filter(|word| !word.segments.is_empty())
                .collect(),
        })
        .filter(|line| !line.words.is_empty())
        .collect()
}

fn parse_word(word: &str, bold: &mut bool) -> TitleWord {
    let mut segments: Vec<Segment> = Vec::new();
    let mut rest = word;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix(BOLD_OPEN) {
            *bold = true;
            rest = after;
            continue;
        }
        if let Some(after) = rest.strip_prefix(BOLD_CLOSE) {
            *bold = false;
            rest = after;
            continue;
        }

        let end = [rest.find(BOLD_OPEN), rest.find(BOLD_CLOSE)]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(rest.len());
        let text = &rest[..end];
        match segments.last_mut() {
            Some(last) if last.bold == *bold => last.text.push_str(text),
            _ => segments.push(Segment { text: text.to_string(), bold: *bold }),
        }
        rest = &rest[end..];
    }

    TitleWord { segments }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub container_class: Classes,
}

#[function_component(AnimatedTitle)]
pub fn animated_title(props: &AnimatedTitleProps) -> Html {
    let container = use_node_ref();
    let state = use_scroll_trigger(
        container.clone(),
        "100 bottom",
        "center bottom",
        "play none none reverse",
    );
    let lines = use_memo(|title| split_title(title), props.title.clone());

    let revealed = state.is_played();
    let stagger = Stagger { each_secs: config::WORD_STAGGER_SECS };
    let word_count: usize = lines.iter().map(|line| line.words.len()).sum();
    let label = plain_text(&lines);

    let mut offset = 0;
    let rendered: Html = lines
        .iter()
        .map(|line| {
            let first = offset;
            offset += line.words.len();
            html! {
                <div class="animated-title__line">
                    { for line.words.iter().enumerate().map(|(i, word)| {
                        let index = first + i;
                        let delay = if revealed {
                            stagger.delay(index)
                        } else {
                            stagger.delay_reversed(index, word_count)
                        };
                        render_word(word, delay)
                    }) }
                </div>
            }
        })
        .collect();

    html! {
        <div
            ref={container}
            aria-label={label}
            class={classes!(
                "animated-title",
                props.container_class.clone(),
                revealed.then_some("animated-title--revealed"),
            )}
        >
            { rendered }
        </div>
    }
}

fn render_word(word: &TitleWord, delay_secs: f64) -> Html {
    html! {
        <span class="animated-word" style={format!("transition-delay: {:.2}s;", delay_secs)}>
            { render_segments(word) }
        </span>
    }
}

fn render_segments(word: &TitleWord) -> Html {
    word.segments
        .iter()
        .map(|segment| {
            if segment.bold {
                html! { <b>{ segment.text.clone() }</b> }
            } else {
                html! { { segment.text.clone() } }
            }
        })
        .collect()
}

/// Renders title markup statically: words joined by spaces, lines by `<br />`.
pub fn render_markup(text: &str) -> Html {
    split_title(text)
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let words: Html = line
                .words
                .iter()
                .enumerate()
                .map(|(j, word)| {
                    html! {
                        <>
                            { if j > 0 { html! { {" "} } } else { html! {} } }
                            { render_segments(word) }
                        </>
                    }
                })
                .collect();
            html! {
                <>
                    { if i > 0 { html! { <br /> } } else { html! {} } }
                    { words }
                </>
            }
        })
        .collect()
}

pub fn animated_title_css() -> String {
    format!(
        r#"
    .animated-title {{
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
        font-family: 'zentry', sans-serif;
        font-size: 4rem;
        text-transform: uppercase;
        line-height: 0.8;
        color: #fff;
    }}
    .animated-title__line {{
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 0.5rem;
        max-width: 100%;
        padding: 0 2.5rem;
    }}
    .animated-word {{
        font-weight: 900;
        opacity: 0;
        transform: translate3d(10px, 51px, -60px) rotateY(60deg) rotateX(-40deg);
        transform-origin: 50% 50% -150px;
        transition: opacity 0.5s {ease}, transform 0.5s {ease};
    }}
    .animated-word b {{
        font-family: 'zentry', sans-serif;
        font-feature-settings: "ss01" on;
    }}
    .animated-title--revealed .animated-word {{
        opacity: 1;
        transform: translate3d(0, 0, 0) rotateY(0deg) rotateX(0deg);
    }}
    @media (min-width: 768px) {{
        .animated-title {{
            font-size: 6rem;
        }}
        .animated-title__line {{
            gap: 0.75rem;
        }}
    }}
"#,
        ease = POWER2_IN_OUT_CSS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABOUT_TITLE: &str =
        "  Disc<b>o</b>ver The World's\n      <br /> l<b>a</b>rgest shared <b>a</b>dventure";

    fn strip(title: &str) -> String {
        title
            .replace(LINE_BREAK, "")
            .replace("<br/>", "")
            .replace("<br>", "")
            .replace(BOLD_OPEN, "")
            .replace(BOLD_CLOSE, "")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    #[test]
    fn one_span_per_word_across_lines() {
        let lines = split_title(ABOUT_TITLE);
        let words: Vec<Vec<String>> = lines
            .iter()
            .map(|line| line.words.iter().map(TitleWord::text).collect())
            .collect();
        assert_eq!(
            words,
            vec![
                vec!["Discover", "The", "World's"],
                vec!["largest", "shared", "adventure"],
            ]
        );
    }

    #[test]
    fn no_characters_lost_or_duplicated() {
        for title in [
            ABOUT_TITLE,
            "the st<b>o</b>ry of <br /> a hidden real<b>m</b>",
            "let's b<b>u</b>ild the <br/> new era of <br> g<b>a</b>ming t<b>o</b>gether.",
        ] {
            let joined: String = split_title(title)
                .iter()
                .flat_map(|line| line.words.iter().map(TitleWord::text))
                .collect();
            assert_eq!(joined, strip(title));
        }
    }

    #[test]
    fn plain_text_joins_words_with_single_spaces() {
        assert_eq!(
            plain_text(&split_title(ABOUT_TITLE)),
            "Discover The World's largest shared adventure"
        );
    }

    #[test]
    fn bold_markers_become_segments() {
        let lines = split_title("Disc<b>o</b>ver");
        assert_eq!(
            lines[0].words[0].segments,
            vec![
                Segment { text: "Disc".into(), bold: false },
                Segment { text: "o".into(), bold: true },
                Segment { text: "ver".into(), bold: false },
            ]
        );
    }

    #[test]
    fn unclosed_bold_carries_into_next_word() {
        let lines = split_title("<b>big bold</b> plain");
        let bold: Vec<bool> = lines[0]
            .words
            .iter()
            .map(|word| word.segments.iter().all(|s| s.bold))
            .collect();
        assert_eq!(bold, vec![true, true, false]);
    }

    #[test]
    fn markup_only_words_and_blank_lines_are_dropped() {
        let lines = split_title("one <b></b> two <br />   <br /> three");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].words.len(), 2);
        assert_eq!(lines[1].words[0].text(), "three");
    }
}
