use yew::prelude::*;

const LINKS: &[(&str, &str)] = &[
    ("#nosotros", "Nosotros"),
    ("#aliados", "Aliados"),
    ("#testimonios", "Testimonios"),
    ("#contacto", "Contacto"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    // Following an in-page link should not leave the mobile menu covering
    // the section it jumped to.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class="nav">
            <a href="#inicio" class="nav__logo">{"Nomad Genetics"}</a>
            <button
                class="nav__toggle"
                type="button"
                aria-label="Abrir menú"
                aria-controls="navMenu"
                aria-expanded={(*menu_open).to_string()}
                onclick={toggle_menu}
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <div id="navMenu" class={classes!("nav__menu", (*menu_open).then(|| "is-open"))}>
                { for LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} class="nav__link" onclick={close_menu.clone()}>{*label}</a>
                }) }
            </div>
        </nav>
    }
}
