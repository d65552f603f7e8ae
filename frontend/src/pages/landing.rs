use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::counters::{Hero, Stat};
use crate::components::embed_modal::EmbedModal;
use crate::components::helix::{AlliesHelix, Ally};
use crate::components::quotes::{Quote, QuoteCarousel};

const CATALOG_URL: &str = "https://catalogo.nomadgenetics.com/";
const ADVISOR_URL: &str = "https://asesor.nomadgenetics.com/";
const REPRESENTATIVES_URL: &str = "https://representantes.nomadgenetics.com/";

fn stats() -> Vec<Stat> {
    vec![
        Stat { target: 12, suffix: "+", label: "años de selección genética" },
        Stat { target: 350, suffix: "+", label: "productores atendidos" },
        Stat { target: 18, suffix: "", label: "regiones con representante" },
    ]
}

fn allies() -> Vec<Ally> {
    vec![
        Ally { name: "AgroSur", logo: "/assets/aliados/agrosur.svg" },
        Ally { name: "Campo Vivo", logo: "/assets/aliados/campo-vivo.svg" },
        Ally { name: "GenLab", logo: "/assets/aliados/genlab.svg" },
        Ally { name: "Hato Norte", logo: "/assets/aliados/hato-norte.svg" },
        Ally { name: "Pradera", logo: "/assets/aliados/pradera.svg" },
    ]
}

fn quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "Desde que trabajamos con Nomad la fertilidad del hato subió de forma constante.",
            author: "Lucía Herrera",
            role: "Ganadera, Santander",
        },
        Quote {
            text: "El asesor nos ayudó a escoger los toros correctos para nuestro clima.",
            author: "Andrés Molina",
            role: "Productor lechero, Nariño",
        },
        Quote {
            text: "Entrega puntual y seguimiento real después de la compra.",
            author: "Camila Rojas",
            role: "Veterinaria, Meta",
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <main class="landing">
                <Hero stats={stats()}>
                    <h1 class="hero__title">{"Genética que se adapta a tu tierra"}</h1>
                    <p class="hero__lead">
                        {"Seleccionamos y distribuimos material genético bovino probado en condiciones reales de trópico."}
                    </p>
                    <div class="hero__cta">
                        <a href="#contacto" class="btn">{"Hablemos"}</a>
                        <a href={CATALOG_URL} class="btn btn--ghost" data-modal-url={CATALOG_URL} data-modal-title="Catálogo">
                            {"Ver catálogo"}
                        </a>
                    </div>
                </Hero>

                <section id="nosotros" class="section about">
                    <h2>{"Nosotros"}</h2>
                    <p>
                        {"Acompañamos a cada productor desde la elección del reproductor hasta el resultado en campo. "}
                        <a href={ADVISOR_URL} data-modal-url={ADVISOR_URL}>{"Habla con un asesor"}</a>
                        {" o "}
                        <a href={REPRESENTATIVES_URL} data-modal-url={REPRESENTATIVES_URL} data-modal-title="Representantes">
                            {"encuentra tu representante"}
                        </a>
                        {"."}
                    </p>
                </section>

                <section id="aliados" class="section allies">
                    <h2>{"Aliados"}</h2>
                    <AlliesHelix allies={allies()} />
                </section>

                <section id="testimonios" class="section testimonials">
                    <h2>{"Testimonios"}</h2>
                    <QuoteCarousel quotes={quotes()} />
                </section>

                <section id="contacto" class="section contact">
                    <h2>{"Contacto"}</h2>
                    <ContactForm />
                </section>
            </main>
            <EmbedModal />
        </>
    }
}
