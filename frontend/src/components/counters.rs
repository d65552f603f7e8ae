use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{COUNTER_DURATION_MS, HERO_VISIBLE_THRESHOLD};
use crate::motion::easing::{counter_value, parse_target, progress, HeroTrigger};
use crate::motion::frame_loop::{FrameControl, FrameLoop};

type HeroCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub target: i64,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub stats: Vec<Stat>,
    pub children: Children,
}

/// The page hero. Its `data-counter` figures count up the first time the
/// hero is at least partly on screen, and never again after that.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero_ref = use_node_ref();

    {
        let hero_ref = hero_ref.clone();
        use_effect_with_deps(
            move |_| {
                let running: Rc<RefCell<Vec<FrameLoop>>> = Rc::default();
                let watcher = watch_hero(&hero_ref, running.clone());

                move || {
                    if let Some((observer, _callback)) = watcher {
                        observer.disconnect();
                    }
                    for frame_loop in running.borrow().iter() {
                        frame_loop.stop();
                    }
                }
            },
            (),
        );
    }

    html! {
        <header id="inicio" class="hero" ref={hero_ref}>
            <div class="hero__content">
                { for props.children.iter() }
            </div>
            <ul class="hero__stats">
                { for props.stats.iter().map(|stat| html! {
                    <li class="stat">
                        // Text is owned by the counter animation, not by the vdom.
                        <strong class="stat__value" data-counter={stat.target.to_string()}></strong>
                        <span class="stat__suffix">{stat.suffix}</span>
                        <p class="stat__label">{stat.label}</p>
                    </li>
                }) }
            </ul>
        </header>
    }
}

/// Arms the one-shot visibility watcher. Returns `None` when there is no
/// hero or nothing to count, in which case the stats just stay static.
///
/// The trigger compares the intersection ratio, not just `isIntersecting`,
/// so a hero taller than `1 / HERO_VISIBLE_THRESHOLD` viewports (about 2.86)
/// never reaches it and its counters stay at 0.
fn watch_hero(
    hero_ref: &NodeRef,
    running: Rc<RefCell<Vec<FrameLoop>>>,
) -> Option<(IntersectionObserver, HeroCallback)> {
    let hero = hero_ref.cast::<Element>()?;
    let counters = counter_elements(&hero);
    if counters.is_empty() {
        debug!("Hero has no counters");
        return None;
    }
    for counter in &counters {
        counter.set_text_content(Some("0"));
    }

    let mut trigger = HeroTrigger::new(HERO_VISIBLE_THRESHOLD);
    let callback: HeroCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter(|entry| entry.is_intersecting())
            .map(|entry| entry.intersection_ratio())
            .fold(0.0_f64, f64::max);
        if !trigger.observe(visible) {
            return;
        }

        info!("Hero visible, starting {} counters", counters.len());
        observer.disconnect();
        running
            .borrow_mut()
            .extend(counters.iter().cloned().map(animate_counter));
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(HERO_VISIBLE_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(&hero);
    Some((observer, callback))
}

fn counter_elements(hero: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = hero.query_selector_all("[data-counter]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Counts one element from 0 to its `data-counter` value. The first frame
/// is time zero.
fn animate_counter(element: HtmlElement) -> FrameLoop {
    let target = parse_target(element.get_attribute("data-counter").as_deref());
    let mut started_at: Option<f64> = None;

    FrameLoop::start(move |now| {
        let start = *started_at.get_or_insert(now);
        let p = progress(now - start, COUNTER_DURATION_MS);
        element.set_text_content(Some(&counter_value(target, p).to_string()));
        if p < 1.0 {
            FrameControl::Continue
        } else {
            FrameControl::Finish
        }
    })
}
