//! Scroll triggers: where an animation starts and ends relative to the
//! viewport, and what happens when the reader scrolls across those points.
//!
//! Positions are written as `"<element> <viewport>"`, e.g. `"100 bottom"`
//! fires when the point 100px below the element's top edge meets the bottom
//! of the viewport. An end may also be `"+=800"`, i.e. 800px of scrolling
//! after the start.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TriggerParseError {
    #[error("empty trigger position")]
    Empty,
    #[error("expected `<element> <viewport>`, got `{0}`")]
    Arity(String),
    #[error("unknown position keyword `{0}`")]
    UnknownKeyword(String),
    #[error("invalid offset `{0}`")]
    BadNumber(String),
    #[error("expected four toggle actions, got {0}")]
    ActionCount(usize),
    #[error("unknown toggle action `{0}`")]
    UnknownAction(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
    Px(f64),
    Percent(f64),
}

impl Anchor {
    /// Offset of this anchor from the top of a box `extent` pixels tall.
    pub fn offset(self, extent: f64) -> f64 {
        match self {
            Anchor::Top => 0.0,
            Anchor::Center => extent / 2.0,
            Anchor::Bottom => extent,
            Anchor::Px(px) => px,
            Anchor::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl FromStr for Anchor {
    type Err = TriggerParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "top" => return Ok(Anchor::Top),
            "center" => return Ok(Anchor::Center),
            "bottom" => return Ok(Anchor::Bottom),
            _ => {}
        }

        let number = |raw: &str| {
            raw.parse::<f64>()
                .map_err(|_| TriggerParseError::BadNumber(token.to_string()))
        };
        if let Some(pct) = token.strip_suffix('%') {
            return number(pct).map(Anchor::Percent);
        }
        let px = token.strip_suffix("px").unwrap_or(token);
        if px.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.') {
            number(px).map(Anchor::Px)
        } else {
            Err(TriggerParseError::UnknownKeyword(token.to_string()))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPoint {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl TriggerPoint {
    /// How far the page has scrolled past this point; negative before it.
    pub fn distance(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        self.viewport.offset(viewport_height) - (element_top + self.element.offset(element_height))
    }
}

impl FromStr for TriggerPoint {
    type Err = TriggerParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(TriggerParseError::Empty),
            [element, viewport] => Ok(TriggerPoint {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(TriggerParseError::Arity(raw.trim().to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerEnd {
    Point(TriggerPoint),
    Relative(f64),
}

impl FromStr for TriggerEnd {
    type Err = TriggerParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().strip_prefix("+=") {
            Some(px) => {
                let px = px.trim().trim_end_matches("px");
                px.parse::<f64>()
                    .map(TriggerEnd::Relative)
                    .map_err(|_| TriggerParseError::BadNumber(raw.trim().to_string()))
            }
            None => raw.parse().map(TriggerEnd::Point),
        }
    }
}

/// Where the reader is relative to a trigger's range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Before,
    Active,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerSample {
    pub progress: f64,
    pub region: Region,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub start: TriggerPoint,
    pub end: TriggerEnd,
}

impl ScrollTrigger {
    pub fn parse(start: &str, end: &str) -> Result<Self, TriggerParseError> {
        Ok(ScrollTrigger {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Samples the trigger from the element's bounding rect.
    ///
    /// Scrolling moves both points by the same amount, so the range length is
    /// constant. An empty or inverted range behaves as a step at the start.
    pub fn sample(&self, element_top: f64, element_height: f64, viewport_height: f64) -> TriggerSample {
        let passed = self.start.distance(element_top, element_height, viewport_height);
        let length = match self.end {
            TriggerEnd::Point(end) => {
                passed - end.distance(element_top, element_height, viewport_height)
            }
            TriggerEnd::Relative(px) => px,
        };

        if passed < 0.0 {
            return TriggerSample { progress: 0.0, region: Region::Before };
        }
        if length <= 0.0 || passed >= length {
            return TriggerSample { progress: 1.0, region: Region::After };
        }
        TriggerSample {
            progress: passed / length,
            region: Region::Active,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Play,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for Action {
    type Err = TriggerParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw {
            "play" => Action::Play,
            "reverse" => Action::Reverse,
            "restart" => Action::Restart,
            "reset" => Action::Reset,
            "complete" => Action::Complete,
            "none" => Action::None,
            other => return Err(TriggerParseError::UnknownAction(other.to_string())),
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerState {
    #[default]
    Idle,
    Played,
    Reversed,
}

impl TriggerState {
    pub fn is_played(self) -> bool {
        self == TriggerState::Played
    }
}

/// What to do on enter, leave, enter-back and leave-back, in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_leave: Action,
    pub on_enter_back: Action,
    pub on_leave_back: Action,
}

impl Default for ToggleActions {
    fn default() -> Self {
        ToggleActions {
            on_enter: Action::Play,
            on_leave: Action::None,
            on_enter_back: Action::None,
            on_leave_back: Action::None,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = TriggerParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let actions = raw
            .split_whitespace()
            .map(str::parse::<Action>)
            .collect::<Result<Vec<Action>, _>>()?;
        match actions.as_slice() {
            &[on_enter, on_leave, on_enter_back, on_leave_back] => Ok(ToggleActions {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            other => Err(TriggerParseError::ActionCount(other.len())),
        }
    }
}

impl ToggleActions {
    /// Applies the callbacks crossed when moving from one region to another.
    /// A jump straight over the range fires both crossings.
    pub fn transition(&self, state: TriggerState, from: Region, to: Region) -> TriggerState {
        let crossed = match (from, to) {
            (Region::Before, Region::Active) => vec![self.on_enter],
            (Region::Before, Region::After) => vec![self.on_enter, self.on_leave],
            (Region::Active, Region::After) => vec![self.on_leave],
            (Region::Active, Region::Before) => vec![self.on_leave_back],
            (Region::After, Region::Active) => vec![self.on_enter_back],
            (Region::After, Region::Before) => vec![self.on_enter_back, self.on_leave_back],
            _ => vec![],
        };
        crossed.into_iter().fold(state, apply)
    }
}

fn apply(state: TriggerState, action: Action) -> TriggerState {
    match action {
        Action::Play | Action::Restart | Action::Complete => TriggerState::Played,
        Action::Reverse => TriggerState::Reversed,
        Action::Reset => TriggerState::Idle,
        Action::None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keyword_and_pixel_positions() {
        let point: TriggerPoint = "100 bottom".parse().unwrap();
        assert_eq!(point.element, Anchor::Px(100.0));
        assert_eq!(point.viewport, Anchor::Bottom);

        let point: TriggerPoint = "center 25%".parse().unwrap();
        assert_eq!(point.element, Anchor::Center);
        assert_eq!(point.viewport, Anchor::Percent(25.0));

        assert_eq!("+=800".parse::<TriggerEnd>().unwrap(), TriggerEnd::Relative(800.0));
    }

    #[test]
    fn rejects_malformed_positions() {
        assert_eq!("".parse::<TriggerPoint>(), Err(TriggerParseError::Empty));
        assert_eq!(
            "middle bottom".parse::<TriggerPoint>(),
            Err(TriggerParseError::UnknownKeyword("middle".into()))
        );
        assert_eq!(
            "top".parse::<TriggerPoint>(),
            Err(TriggerParseError::Arity("top".into()))
        );
        assert_eq!(
            "+=far".parse::<TriggerEnd>(),
            Err(TriggerParseError::BadNumber("+=far".into()))
        );
        assert_eq!(
            "play none".parse::<ToggleActions>(),
            Err(TriggerParseError::ActionCount(2))
        );
        assert_eq!(
            "play none none rewind".parse::<ToggleActions>(),
            Err(TriggerParseError::UnknownAction("rewind".into()))
        );
    }

    #[test]
    fn progress_follows_the_element_through_the_viewport() {
        // "center center" -> "+=800": the element center meets the viewport center
        // when its top sits at 0 for a full-height element.
        let trigger = ScrollTrigger::parse("center center", "+=800").unwrap();
        let vh = 1000.0;

        let before = trigger.sample(10.0, vh, vh);
        assert_eq!(before.region, Region::Before);
        assert_eq!(before.progress, 0.0);

        let halfway = trigger.sample(-400.0, vh, vh);
        assert_eq!(halfway.region, Region::Active);
        assert!((halfway.progress - 0.5).abs() < 1e-9);

        let past = trigger.sample(-900.0, vh, vh);
        assert_eq!(past.region, Region::After);
        assert_eq!(past.progress, 1.0);
    }

    #[test]
    fn point_to_point_range_uses_both_edges() {
        let trigger = ScrollTrigger::parse("center center", "bottom center").unwrap();
        // Element 800 tall, viewport 800: range is half the element height.
        let sample = trigger.sample(-200.0, 800.0, 800.0);
        assert_eq!(sample.region, Region::Active);
        assert!((sample.progress - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_range_is_a_step_at_the_start() {
        // Short titles: "100 bottom" lies below "center bottom".
        let trigger = ScrollTrigger::parse("100 bottom", "center bottom").unwrap();
        assert_eq!(trigger.sample(950.0, 120.0, 1000.0).region, Region::Before);
        assert_eq!(trigger.sample(890.0, 120.0, 1000.0).region, Region::After);
    }

    #[test]
    fn play_none_none_reverse_reveals_and_hides() {
        let actions: ToggleActions = "play none none reverse".parse().unwrap();
        let mut state = TriggerState::Idle;

        state = actions.transition(state, Region::Before, Region::Active);
        assert_eq!(state, TriggerState::Played);

        // Leaving forward and coming back keep it played.
        state = actions.transition(state, Region::Active, Region::After);
        assert_eq!(state, TriggerState::Played);
        state = actions.transition(state, Region::After, Region::Active);
        assert_eq!(state, TriggerState::Played);

        state = actions.transition(state, Region::Active, Region::Before);
        assert_eq!(state, TriggerState::Reversed);

        // Jumping over the whole range still plays.
        state = actions.transition(state, Region::Before, Region::After);
        assert_eq!(state, TriggerState::Played);
        state = actions.transition(state, Region::After, Region::Before);
        assert_eq!(state, TriggerState::Reversed);
    }

    #[test]
    fn staying_in_a_region_changes_nothing() {
        let actions = ToggleActions::default();
        assert_eq!(
            actions.transition(TriggerState::Idle, Region::Before, Region::Before),
            TriggerState::Idle
        );
    }
}
