use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config::QUOTE_AUTOPLAY_MS;
use crate::state::quote_cursor::{QuoteCursor, QuoteStep};

#[derive(Clone, PartialEq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct QuoteCarouselProps {
    pub quotes: Vec<Quote>,
}

/// Testimonials, one at a time. Prev/next move the cursor; autoplay keeps
/// its own nine second cadence and is not reset by manual clicks.
#[function_component(QuoteCarousel)]
pub fn quote_carousel(props: &QuoteCarouselProps) -> Html {
    let len = props.quotes.len();
    let cursor = use_reducer(move || QuoteCursor::new(len));

    {
        let cursor = cursor.clone();
        use_effect_with_deps(
            move |len: &usize| {
                let autoplay = (*len > 0).then(|| {
                    debug!("Quote autoplay every {} ms", QUOTE_AUTOPLAY_MS);
                    Interval::new(QUOTE_AUTOPLAY_MS, move || cursor.dispatch(QuoteStep::Next))
                });
                move || drop(autoplay)
            },
            len,
        );
    }

    let on_step = |step: QuoteStep| {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.dispatch(step))
    };

    html! {
        <div class="quotes">
            <div class="quotes__track">
                { for props.quotes.iter().enumerate().map(|(i, quote)| html! {
                    <blockquote class={classes!("quote", cursor.is_active(i).then(|| "is-active"))}>
                        <p class="quote__text">{quote.text}</p>
                        <footer class="quote__author">
                            <strong>{quote.author}</strong>
                            <span>{quote.role}</span>
                        </footer>
                    </blockquote>
                }) }
            </div>
            <div class="quotes__controls">
                <button type="button" class="quotes__btn" data-quote="prev" aria-label="Anterior" onclick={on_step(QuoteStep::Prev)}>
                    {"←"}
                </button>
                <button type="button" class="quotes__btn" data-quote="next" aria-label="Siguiente" onclick={on_step(QuoteStep::Next)}>
                    {"→"}
                </button>
            </div>
        </div>
    }
}
