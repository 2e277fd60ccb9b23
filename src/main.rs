mod api;
mod config;
mod countdown;
mod rsvp_card;
mod state;

use chrono::NaiveDate;
use gloo::console::{log, warn};
use yew::prelude::*;

use crate::config::ApiConfig;
use crate::countdown::Countdown;
use crate::rsvp_card::RsvpCard;

const COUPLE: &str = "Randel & Gem";
const WEDDING_YMD: (i32, u32, u32) = (2026, 1, 30);
const WEDDING_DATE_LABEL: &str = "January 30, 2026";
const CITY: &str = "Tagaytay";

struct ScheduleItem {
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
}

const SCHEDULE: &[ScheduleItem] = &[
    ScheduleItem {
        icon: "⛪",
        title: "Church Ceremony",
        detail: "Our Lady of Lourdes, Tagaytay · 1:30 PM",
    },
    ScheduleItem {
        icon: "🌿",
        title: "Reception",
        detail: "Farm Hills Garden, Tagaytay · 4:00 PM",
    },
    ScheduleItem {
        icon: "📅",
        title: "Date",
        detail: WEDDING_DATE_LABEL,
    },
];

fn load_api_config() -> ApiConfig {
    let cfg = ApiConfig::resolve();
    log!(format!("RSVP API base: {}", cfg.base_url()));
    if !cfg.is_secure() {
        warn!("RSVP API base is not HTTPS; guest codes will travel in clear text");
    }
    cfg
}

#[function_component(App)]
fn app() -> Html {
    let api = use_state(load_api_config);
    let countdown = use_state(|| {
        let (y, m, d) = WEDDING_YMD;
        NaiveDate::from_ymd_opt(y, m, d).and_then(Countdown::until)
    });

    html! {
      <main>
        <section class="hero">
          <div class="wrap">
            <span class="tag">{ "Save the Date" }</span>
            <h1 class="h1 script">{ COUPLE }</h1>
            <p class="sub">
              { format!("Join us as we celebrate our wedding in beautiful {CITY} on {WEDDING_DATE_LABEL}.") }
            </p>
            if let Some(c) = *countdown {
              <div class="pill">{ c.banner() }</div>
            }
            <nav class="btns">
              <a class="btn-primary" href="#details">{ "View Details" }</a>
              <a class="btn-ghost" href="#rsvp">{ "RSVP" }</a>
            </nav>
          </div>
        </section>

        <section id="details" class="wrap">
          <h2 class="h2">{ "The Celebration" }</h2>
          <p class="muted">
            { "We can't wait to share this special day with our family and friends. Please find the schedule below and RSVP when you're ready." }
          </p>
          <ul class="schedule">
            { for SCHEDULE.iter().map(|item| html! {
                <li class="card schedule-item">
                  <div class="icon">{ item.icon }</div>
                  <div>
                    <p class="title">{ item.title }</p>
                    <p class="muted small">{ item.detail }</p>
                  </div>
                </li>
            }) }
          </ul>
        </section>

        <section id="rsvp" class="wrap">
          <RsvpCard api={(*api).clone()} />
        </section>

        <footer class="footer">
          <p class="script">{ COUPLE }</p>
          <p class="muted small">{ format!("{WEDDING_DATE_LABEL} · {CITY}") }</p>
        </footer>
      </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
