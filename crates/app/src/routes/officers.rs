use crate::download::open_external;
use crate::format_helpers::format_date_human;
use crate::status_tone;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCheck, LdClock, LdMail, LdMapPin, LdPhone, LdSettings, LdUserPlus, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::officer::{roster, Officer, RosterSummary};
use shared_ui::{
    use_toast, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, InitialsAvatar,
    PageHeader, StatCard, ToastOptions,
};

/// Officer roster for administrators. Other roles never reach this
/// component; the shell wraps it in a role gate.
#[component]
pub fn Officers() -> Element {
    let toast = use_toast();
    let officers = use_hook(roster);
    let summary = RosterSummary::of(&officers);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./officers.css") }

        PageHeader {
            title: "Officers Management",
            subtitle: "Manage immigration officers and their assignments",
            Button {
                variant: ButtonVariant::Success,
                onclick: move |_| {
                    toast.info("Officer invitation form opened".to_string(), ToastOptions::new());
                },
                Icon::<LdUserPlus> { icon: LdUserPlus, width: 16, height: 16 }
                "Add Officer"
            }
        }

        div { class: "roster-stats",
            StatCard {
                title: "Total Officers",
                value: "{summary.total}",
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
            }
            StatCard {
                title: "Active Now",
                value: "{summary.active}",
                icon: rsx! { Icon::<LdCheck> { icon: LdCheck, width: 18, height: 18 } },
            }
            StatCard {
                title: "Total Cases",
                value: "{summary.assigned}",
                icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
            }
            StatCard {
                title: "Completed",
                value: "{summary.completed}",
                icon: rsx! { Icon::<LdCheck> { icon: LdCheck, width: 18, height: 18 } },
            }
        }

        div { class: "roster",
            for officer in officers.iter() {
                OfficerCard { key: "{officer.id}", officer: officer.clone() }
            }
        }
    }
}

#[component]
fn OfficerCard(officer: Officer) -> Element {
    let toast = use_toast();
    let settings_name = officer.name.clone();
    let mailto = format!("mailto:{}", officer.email);

    rsx! {
        Card { class: "officer-card",
            CardContent { class: "officer-row",
                InitialsAvatar { initials: officer.initials(), large: true }
                div { class: "officer-info",
                    h3 { "{officer.name}" }
                    p { class: "officer-department", "{officer.department}" }
                    div { class: "officer-contact",
                        span {
                            Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                            "{officer.email}"
                        }
                        span {
                            Icon::<LdPhone> { icon: LdPhone, width: 14, height: 14 }
                            "{officer.phone}"
                        }
                        span {
                            Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                            "{officer.location}"
                        }
                    }
                    p { class: "officer-joined", "Joined {format_date_human(&officer.join_date)}" }
                }
                div { class: "officer-figures",
                    div { class: "officer-figure officer-figure-assigned",
                        span { class: "officer-figure-value", "{officer.assigned_cases}" }
                        span { "Assigned" }
                    }
                    div { class: "officer-figure officer-figure-completed",
                        span { class: "officer-figure-value", "{officer.completed_cases}" }
                        span { "Completed" }
                    }
                }
                div { class: "officer-side",
                    Badge { tone: status_tone::officer(officer.status), "{officer.status.label()}" }
                    div { class: "officer-buttons",
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                            aria_label: "Officer settings",
                            onclick: move |_| {
                                toast.info(format!("Managing assignments for {settings_name}"), ToastOptions::new());
                            },
                            Icon::<LdSettings> { icon: LdSettings, width: 14, height: 14 }
                        }
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                            aria_label: "Email officer",
                            onclick: move |_| open_external(&mailto),
                            Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                        }
                    }
                }
            }
        }
    }
}
