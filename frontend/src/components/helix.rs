use log::info;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::motion::frame_loop::{FrameControl, FrameLoop};
use crate::motion::helix::{displayed_items, HelixFrame};
use crate::motion::preference::MotionPreference;

#[derive(Clone, PartialEq)]
pub struct Ally {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct AlliesHelixProps {
    pub allies: Vec<Ally>,
}

/// Partner logos spiralling down a double helix. With reduced motion the
/// items are left where the stylesheet puts them.
#[function_component(AlliesHelix)]
pub fn allies_helix(props: &AlliesHelixProps) -> Html {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    let viewport_ref = use_node_ref();
    let items = displayed_items(&props.allies, motion.allows_animation());

    {
        let viewport_ref = viewport_ref.clone();
        use_effect_with_deps(
            move |(motion, count): &(MotionPreference, usize)| {
                let animation = match viewport_ref.cast::<HtmlElement>() {
                    Some(_) if !motion.allows_animation() => {
                        info!("Helix disabled: reduced motion");
                        None
                    }
                    Some(viewport) if *count > 0 => Some(animate(viewport)),
                    _ => None,
                };
                move || {
                    if let Some(animation) = animation {
                        animation.stop();
                    }
                }
            },
            (motion, items.len()),
        );
    }

    html! {
        <div class="helix" data-helix="">
            <div class={classes!("helix__viewport", motion.reduced.then(|| "is-static"))} ref={viewport_ref}>
                { for items.iter().map(|ally| html! {
                    <div class="helix__item">
                        <img src={ally.logo} alt={ally.name} loading="lazy" />
                    </div>
                }) }
            </div>
        </div>
    }
}

fn helix_items(viewport: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = viewport.query_selector_all(".helix__item") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Re-places every item each frame. Runs until stopped.
fn animate(viewport: HtmlElement) -> FrameLoop {
    let items = helix_items(&viewport);
    info!("Helix animating {} items", items.len());

    FrameLoop::start(move |now_ms| {
        let frame = HelixFrame::new(
            now_ms / 1000.0,
            f64::from(viewport.client_height()),
            f64::from(viewport.client_width()),
            items.len(),
        );
        for (i, item) in items.iter().enumerate() {
            let placement = frame.place(i);
            let style = item.style();
            let _ = style.set_property("transform", &placement.transform_css());
            let _ = style.set_property("opacity", &placement.opacity_css());
            let _ = style.set_property("z-index", &placement.z_index_css());
            let _ = style.set_property("filter", &placement.filter_css());
        }
        FrameControl::Continue
    })
}
