pub mod admin;
mod charts;
pub mod officer;

use crate::nav::use_navigation;
use charts::{ActivityTimeline, ApplicationTrend, CountryDonut};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdGlobe, LdTrendingUp};
use dioxus_free_icons::Icon;
use shared_types::dashboard::{quick_actions, recent_activity, stat_cards, welcome_message};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    StatCard,
};

/// Dashboard for the applicant, and the fallback for any role whose
/// dedicated portal is not selected. Cards and activity follow the role.
#[component]
pub fn DefaultDashboard() -> Element {
    let mut nav = use_navigation();
    let role = nav.role();
    let actions = quick_actions(role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader { title: "Dashboard", subtitle: welcome_message(role) }

        div { class: "stat-grid",
            for card in stat_cards(role) {
                StatCard {
                    key: "{card.title}",
                    title: card.title,
                    value: card.value,
                    description: card.description,
                    trend: card.trend.to_string(),
                    icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 16, height: 16 } },
                }
            }
        }

        div { class: "chart-grid",
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 }
                        "Application Statistics"
                    }
                    CardDescription { "Monthly application trends and status breakdown" }
                }
                CardContent { ApplicationTrend {} }
            }
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdGlobe> { icon: LdGlobe, width: 18, height: 18 }
                        "Country Analytics"
                    }
                    CardDescription { "Applications by country of origin" }
                }
                CardContent { CountryDonut {} }
            }
        }

        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                    "Recent Activity"
                }
                CardDescription { "Latest updates and system activities" }
            }
            CardContent {
                ActivityTimeline { activities: recent_activity(role).to_vec() }
            }
        }

        if !actions.is_empty() {
            Card {
                CardHeader {
                    CardTitle { "Quick Actions" }
                    CardDescription { "Common tasks and shortcuts" }
                }
                CardContent { class: "quick-actions",
                    for (i, action) in actions.into_iter().enumerate() {
                        Button {
                            key: "{action.label}",
                            variant: if i == 0 { ButtonVariant::Primary } else { ButtonVariant::Outline },
                            onclick: move |_| nav.navigate(action.target),
                            "{action.label}"
                        }
                    }
                }
            }
        }
    }
}
