use crate::shared::i18n::{use_locale, TextKey};
use crate::shared::icons::icon;
use contracts::enums::GccCountry;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="page home">
            <section class="home__hero">
                <h1 class="home__headline">{move || locale.t(TextKey::HomeHeadline)}</h1>
                <p class="home__intro">{move || locale.t(TextKey::HomeIntro)}</p>
            </section>

            <div class="home__cards">
                <A href="/report" attr:class="card home__card">
                    <span class="home__card-icon">{icon("plus-circle")}</span>
                    <h2>{move || locale.t(TextKey::NavNewClaim)}</h2>
                    <p>{move || locale.t(TextKey::HomeNewClaimBody)}</p>
                </A>
                <A href="/track" attr:class="card home__card">
                    <span class="home__card-icon">{icon("search")}</span>
                    <h2>{move || locale.t(TextKey::NavTrackClaim)}</h2>
                    <p>{move || locale.t(TextKey::HomeTrackBody)}</p>
                </A>
            </div>

            <section class="home__countries">
                <h3>{move || locale.t(TextKey::SupportedCountries)}</h3>
                <ul>
                    {GccCountry::all().into_iter().map(|country| view! {
                        <li>
                            <span class="home__country-code">{country.code()}</span>
                            {country.display_name()}
                        </li>
                    }).collect_view()}
                </ul>
            </section>
        </div>
    }
}
