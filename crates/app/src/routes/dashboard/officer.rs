use super::charts::ApplicationTrend;
use crate::status_tone;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCheck, LdEye, LdFileText, LdGlobe, LdPlane, LdSearch, LdShield, LdTrendingUp, LdUserCheck,
    LdX,
};
use dioxus_free_icons::Icon;
use shared_types::dashboard::{
    destination_total, search_evisas, PendingReview, DESTINATIONS, OFFICER_HEADER_STATS,
    OFFICER_TABS, PENDING_REVIEWS, VISA_ON_ARRIVAL,
};
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, ProgressBar, SelectField, TabContent, TabList,
    TabTrigger, Tabs, TextField, ToastOptions,
};

/// Officer portal: review queue, visa-on-arrival catalogue, e-visa lookup
/// and analytics, filtered by immigration destination.
#[component]
pub fn OfficerDashboard() -> Element {
    let mut destination = use_signal(|| "all".to_string());

    let selected = destination();
    let total = destination_total(&selected);
    let destination_label = DESTINATIONS
        .iter()
        .find(|d| d.code == selected)
        .map(|d| d.name)
        .unwrap_or("All Countries");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        section { class: "portal-hero",
            div { class: "portal-hero-top",
                div { class: "portal-hero-title",
                    span { class: "portal-hero-mark",
                        Icon::<LdShield> { icon: LdShield, width: 32, height: 32 }
                    }
                    div {
                        h1 { "Officer Dashboard" }
                        p { "Immigration Control Center" }
                    }
                }
                div { class: "portal-hero-figure",
                    span { class: "portal-hero-figure-value", "{total}" }
                    span { class: "portal-hero-figure-label", "Applications \u{b7} {destination_label}" }
                }
            }

            div { class: "portal-hero-filter",
                Icon::<LdGlobe> { icon: LdGlobe, width: 18, height: 18 }
                SelectField {
                    label: "Immigration Destination",
                    value: selected.clone(),
                    onchange: move |e: FormEvent| destination.set(e.value()),
                    option { value: "all", "All Countries" }
                    for country in DESTINATIONS {
                        option { key: "{country.code}", value: country.code,
                            "{country.name} ({country.applications})"
                        }
                    }
                }
            }

            div { class: "portal-hero-stats",
                for (label, value) in OFFICER_HEADER_STATS {
                    div { key: "{label}", class: "portal-hero-stat",
                        span { class: "portal-hero-stat-label", "{label}" }
                        span { class: "portal-hero-stat-value", "{value}" }
                    }
                }
            }
        }

        Tabs { default_value: OFFICER_TABS[0].0, horizontal: true,
            TabList {
                for (index, (value, label)) in OFFICER_TABS.into_iter().enumerate() {
                    TabTrigger { key: "{value}", value, index, "{label}" }
                }
            }
            TabContent { value: OFFICER_TABS[0].0, index: 0usize, PendingQueue {} }
            TabContent { value: OFFICER_TABS[1].0, index: 1usize, VisaOnArrivalList {} }
            TabContent { value: OFFICER_TABS[2].0, index: 2usize, EVisaChecker {} }
            TabContent { value: OFFICER_TABS[3].0, index: 3usize, OfficerAnalytics {} }
        }
    }
}

#[component]
fn PendingQueue() -> Element {
    let toast = use_toast();
    let mut decided = use_signal(Vec::<&'static str>::new);

    let open: Vec<PendingReview> = PENDING_REVIEWS
        .into_iter()
        .filter(|r| !decided.read().contains(&r.id))
        .collect();

    let mut decide = move |review: PendingReview, approved: bool| {
        decided.write().push(review.id);
        tracing::info!(application = review.id, approved, "review decided");
        if approved {
            toast.success(format!("{} approved", review.id), ToastOptions::new());
        } else {
            toast.error(format!("{} rejected", review.id), ToastOptions::new());
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                    "Pending Applications Review"
                }
                CardDescription { "Applications requiring your immediate attention" }
            }
            CardContent {
                if open.is_empty() {
                    p { class: "empty-note", "The review queue is clear." }
                }
                div { class: "review-list",
                    for review in open {
                        div { key: "{review.id}", class: "review-item",
                            span { class: "review-icon",
                                Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                            }
                            div { class: "review-body",
                                h3 { "{review.applicant}" }
                                div { class: "review-meta",
                                    span { "{review.country}" }
                                    span { "{review.kind}" }
                                    span { "{review.submitted}" }
                                }
                                div { class: "review-tags",
                                    if review.visa_on_arrival {
                                        Badge { tone: BadgeTone::Outline, "Visa on Arrival" }
                                    }
                                    if review.e_visa {
                                        Badge { tone: BadgeTone::Outline, "E-Visa" }
                                    }
                                }
                            }
                            div { class: "review-actions",
                                Badge { tone: status_tone::priority(review.priority), "{review.priority.label()}" }
                                Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                                    aria_label: "View application",
                                    Icon::<LdEye> { icon: LdEye, width: 14, height: 14 }
                                }
                                Button { variant: ButtonVariant::Success, size: ButtonSize::Small,
                                    aria_label: "Approve",
                                    onclick: move |_| decide(review, true),
                                    Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                                }
                                Button { variant: ButtonVariant::Destructive, size: ButtonSize::Small,
                                    aria_label: "Reject",
                                    onclick: move |_| decide(review, false),
                                    Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VisaOnArrivalList() -> Element {
    let toast = use_toast();

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdPlane> { icon: LdPlane, width: 18, height: 18 }
                    "Visa on Arrival Management"
                }
                CardDescription { "Countries offering visa on arrival services" }
            }
            CardContent {
                div { class: "tile-grid",
                    for entry in VISA_ON_ARRIVAL {
                        div { key: "{entry.country}", class: "tile",
                            div { class: "tile-head",
                                div {
                                    h3 { "{entry.country}" }
                                    p { "Visa on Arrival Available" }
                                }
                                Badge { tone: BadgeTone::Success, "Active" }
                            }
                            dl { class: "tile-facts",
                                dt { "Duration:" }
                                dd { "{entry.duration}" }
                                dt { "Fee:" }
                                dd { "{entry.fee}" }
                            }
                            Button {
                                size: ButtonSize::Small,
                                onclick: move |_| {
                                    toast.info(
                                        format!("Processing visa on arrival for {}", entry.country),
                                        ToastOptions::new(),
                                    );
                                },
                                "Process"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EVisaChecker() -> Element {
    let mut term = use_signal(String::new);
    let results = search_evisas(&term());

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdGlobe> { icon: LdGlobe, width: 18, height: 18 }
                    "E-Visa Application Checker"
                }
                CardDescription { "Verify and manage electronic visa applications" }
            }
            CardContent {
                div { class: "search-row",
                    Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                    TextField {
                        placeholder: "Search by E-Visa ID, passport number, or name...",
                        value: term(),
                        on_input: move |e: FormEvent| term.set(e.value()),
                    }
                }
                if results.is_empty() {
                    p { class: "empty-note", "No e-visa matches \"{term}\"." }
                }
                div { class: "review-list",
                    for evisa in results {
                        div { key: "{evisa.id}", class: "review-item",
                            span { class: "review-icon review-icon-accent",
                                Icon::<LdGlobe> { icon: LdGlobe, width: 18, height: 18 }
                            }
                            div { class: "review-body",
                                h3 { "{evisa.applicant}" }
                                div { class: "review-meta",
                                    span { "{evisa.id}" }
                                    span { "{evisa.destination}" }
                                    span { "{evisa.kind}" }
                                    span { "Valid until: {evisa.valid_until}" }
                                }
                            }
                            div { class: "review-actions",
                                Badge { tone: status_tone::application(evisa.status), "{evisa.status.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OfficerAnalytics() -> Element {
    let busiest = DESTINATIONS
        .iter()
        .map(|d| d.applications)
        .max()
        .unwrap_or(1)
        .max(1);

    rsx! {
        div { class: "chart-grid",
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 }
                        "Processing Statistics"
                    }
                }
                CardContent { ApplicationTrend {} }
            }
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdGlobe> { icon: LdGlobe, width: 18, height: 18 }
                        "Country Distribution"
                    }
                }
                CardContent {
                    div { class: "meter-list",
                        for country in DESTINATIONS {
                            div { key: "{country.code}", class: "meter-row",
                                div { class: "meter-head",
                                    span { "{country.name}" }
                                    span { class: "meter-value", "{country.applications}" }
                                }
                                ProgressBar {
                                    value: f64::from(country.applications) / f64::from(busiest) * 100.0,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
