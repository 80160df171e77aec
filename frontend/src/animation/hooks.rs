use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use super::tilt::Tilt;
use super::trigger::{Region, ScrollTrigger, ToggleActions, TriggerParseError, TriggerState};
use super::tween::Scrub;

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];
const SCRUB_FRAME_MS: u32 = 16;

struct Measurement {
    top: f64,
    height: f64,
    viewport: f64,
}

fn measure(node: &NodeRef) -> Option<Measurement> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    let viewport = web_sys::window()?.inner_height().ok()?.as_f64()?;
    Some(Measurement {
        top: rect.top(),
        height: rect.height(),
        viewport,
    })
}

/// Runs `handler` now and on every scroll/resize until the returned
/// destructor is called.
fn listen_scroll(handler: impl Fn() + 'static) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        warn!("No window available, scroll animations disabled");
        return Box::new(|| ());
    };

    let callback = Closure::<dyn Fn()>::new(handler);
    for event in SCROLL_EVENTS {
        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!("Failed to listen for {}: {:?}", event, err);
        }
    }

    // Initial check
    if let Err(err) = callback
        .as_ref()
        .unchecked_ref::<web_sys::js_sys::Function>()
        .call0(&JsValue::NULL)
    {
        warn!("Initial scroll check failed: {:?}", err);
    }

    Box::new(move || {
        for event in SCROLL_EVENTS {
            let _ = window
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    })
}

fn parse_trigger(
    start: &str,
    end: &str,
    actions: &str,
) -> Result<(ScrollTrigger, ToggleActions), TriggerParseError> {
    Ok((ScrollTrigger::parse(start, end)?, actions.parse()?))
}

/// Plays/reverses according to `actions` as the node crosses `start`/`end`.
///
/// A trigger that fails to parse leaves the content shown instead of stuck
/// in its hidden initial state.
#[hook]
pub fn use_scroll_trigger(
    node: NodeRef,
    start: &'static str,
    end: &'static str,
    actions: &'static str,
) -> TriggerState {
    let state = use_state_eq(TriggerState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match parse_trigger(start, end, actions) {
                    Ok((trigger, actions)) => {
                        let region = Rc::new(Cell::new(Region::Before));
                        let current = Rc::new(Cell::new(TriggerState::Idle));
                        listen_scroll(move || {
                            let Some(m) = measure(&node) else {
                                return;
                            };
                            let sample = trigger.sample(m.top, m.height, m.viewport);
                            let next = actions.transition(current.get(), region.get(), sample.region);
                            region.set(sample.region);
                            if next != current.get() {
                                debug!("Trigger {} -> {}: {:?}", start, end, next);
                                current.set(next);
                                state.set(next);
                            }
                        })
                    }
                    Err(err) => {
                        error!("Invalid scroll trigger `{}` -> `{}`: {}", start, end, err);
                        state.set(TriggerState::Played);
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    *state
}

fn schedule_scrub(
    scrub: Rc<RefCell<Scrub>>,
    progress: UseStateHandle<f64>,
    running: Rc<Cell<bool>>,
    alive: Rc<Cell<bool>>,
) {
    Timeout::new(SCRUB_FRAME_MS, move || {
        if !alive.get() {
            running.set(false);
            return;
        }
        let (value, settled) = {
            let mut scrub = scrub.borrow_mut();
            scrub.advance(SCRUB_FRAME_MS as f64 / 1000.0);
            (scrub.current(), scrub.is_settled())
        };
        progress.set(value);
        if settled {
            running.set(false);
        } else {
            schedule_scrub(scrub, progress, running, alive);
        }
    })
    .forget();
}

/// Progress in `[0, 1]` through the `start`..`end` range, smoothed over
/// `lag_secs` (zero follows the scrollbar exactly).
#[hook]
pub fn use_scroll_progress(
    node: NodeRef,
    start: AttrValue,
    end: AttrValue,
    lag_secs: f64,
) -> f64 {
    let progress = use_state_eq(|| 0.0);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let destructor: Box<dyn FnOnce()> = match ScrollTrigger::parse(&start, &end) {
                    Ok(trigger) => {
                        let scrub = Rc::new(RefCell::new(Scrub::new(lag_secs)));
                        let running = Rc::new(Cell::new(false));
                        let alive = alive.clone();
                        listen_scroll(move || {
                            let Some(m) = measure(&node) else {
                                return;
                            };
                            let target = trigger.sample(m.top, m.height, m.viewport).progress;
                            scrub.borrow_mut().set_target(target);
                            let (current, settled) = {
                                let scrub = scrub.borrow();
                                (scrub.current(), scrub.is_settled())
                            };
                            if settled {
                                progress.set(current);
                            } else if !running.get() {
                                running.set(true);
                                schedule_scrub(
                                    scrub.clone(),
                                    progress.clone(),
                                    running.clone(),
                                    alive.clone(),
                                );
                            }
                        })
                    }
                    Err(err) => {
                        error!("Invalid scroll range `{}` -> `{}`: {}", start, end, err);
                        Box::new(|| ())
                    }
                };
                move || {
                    alive.set(false);
                    destructor();
                }
            },
            (),
        );
    }

    *progress
}

pub struct PointerTilt {
    pub tilt: Tilt,
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

/// Tilts `node` toward the pointer; flattens again when it leaves.
///
/// The box is read from `node` itself: the event's current target is the
/// app root, where Yew delegates its listeners.
#[hook]
pub fn use_pointer_tilt(node: NodeRef, max_deg: f64) -> PointerTilt {
    let tilt = use_state_eq(Tilt::default);

    let onmousemove = {
        let tilt = tilt.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            tilt.set(Tilt::from_pointer(
                event.client_x() as f64,
                event.client_y() as f64,
                (rect.left(), rect.top(), rect.width(), rect.height()),
                max_deg,
            ));
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::default()))
    };

    PointerTilt {
        tilt: *tilt,
        onmousemove,
        onmouseleave,
    }
}
