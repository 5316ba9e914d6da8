use crate::download::open_external;
use crate::nav::use_navigation;
use crate::simulate::use_simulated_task;
use crate::status_tone;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdMapPin, LdPlus, LdUser, LdVideo};
use dioxus_free_icons::Icon;
use shared_types::appointment::{
    directions_url, fixtures, meeting_url, page_subtitle, Appointment, AppointmentMode,
};
use shared_types::{FeatureFlags, SimulatedOp};
use shared_ui::{
    use_toast, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, ToastOptions,
};

#[component]
pub fn Appointments() -> Element {
    let nav = use_navigation();
    let toast = use_toast();
    let appointments = use_hook(fixtures);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./appointments.css") }

        PageHeader { title: "Appointments", subtitle: page_subtitle(nav.role()),
            Button {
                variant: ButtonVariant::Success,
                onclick: move |_| {
                    toast.info("Appointment request sent to the scheduling team".to_string(), ToastOptions::new());
                },
                Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                "Schedule Appointment"
            }
        }

        div { class: "appointment-list",
            for appointment in appointments.iter() {
                AppointmentCard { key: "{appointment.id}", appointment: appointment.clone() }
            }
        }

        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                    "Calendar View"
                }
                CardDescription { "Monthly overview of all appointments" }
            }
            CardContent {
                ol { class: "agenda",
                    for appointment in appointments.iter() {
                        li { key: "{appointment.id}", class: "agenda-item",
                            span { class: "agenda-date", "{appointment.date}" }
                            span { class: "agenda-time", "{appointment.time}" }
                            span { class: "agenda-title", "{appointment.title}" }
                            Badge { tone: status_tone::appointment(appointment.status), "{appointment.status.label()}" }
                        }
                    }
                }
            }
        }
    }
}

/// One appointment with its own reschedule and join tasks, so a pending
/// action on one card leaves the others usable.
#[component]
fn AppointmentCard(appointment: Appointment) -> Element {
    let flags: FeatureFlags = use_context();
    let toast = use_toast();
    let reschedule = use_simulated_task(SimulatedOp::Reschedule);
    let join = use_simulated_task(SimulatedOp::JoinMeeting);

    let id = appointment.id;
    let title = appointment.title.clone();
    let location = appointment.location.clone();
    let is_virtual = appointment.mode == AppointmentMode::Virtual;

    rsx! {
        Card { class: "appointment-card",
            CardHeader {
                div { class: "appointment-head",
                    div {
                        CardTitle {
                            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                            "{appointment.title}"
                        }
                        CardDescription {
                            Icon::<LdUser> { icon: LdUser, width: 14, height: 14 }
                            "{appointment.applicant} \u{b7} {appointment.purpose}"
                        }
                    }
                    Badge { tone: status_tone::appointment(appointment.status), "{appointment.status.label()}" }
                }
            }
            CardContent { class: "appointment-body",
                div { class: "appointment-fact appointment-fact-time",
                    Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                    div {
                        p { class: "appointment-fact-main", "{appointment.date}" }
                        p { class: "appointment-fact-sub", "{appointment.time}" }
                    }
                }
                div { class: "appointment-fact appointment-fact-place",
                    if is_virtual {
                        Icon::<LdVideo> { icon: LdVideo, width: 16, height: 16 }
                    } else {
                        Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                    }
                    div {
                        p { class: "appointment-fact-main", "{appointment.location}" }
                        p { class: "appointment-fact-sub", "{appointment.mode.label()}" }
                    }
                }
                div { class: "appointment-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        busy: reschedule.is_pending(),
                        busy_label: "Rescheduling...",
                        onclick: move |_| {
                            let title = title.clone();
                            reschedule.run(move || {
                                tracing::info!(appointment = id, "appointment rescheduled");
                                toast.success(format!("{title} rescheduled"), ToastOptions::new());
                            });
                        },
                        "Reschedule"
                    }
                    if is_virtual && flags.virtual_meetings {
                        Button {
                            variant: ButtonVariant::Success,
                            size: ButtonSize::Small,
                            busy: join.is_pending(),
                            busy_label: "Joining...",
                            onclick: move |_| join.run(move || open_external(&meeting_url(id))),
                            Icon::<LdVideo> { icon: LdVideo, width: 14, height: 14 }
                            "Join"
                        }
                    } else if !is_virtual {
                        Button {
                            size: ButtonSize::Small,
                            onclick: move |_| open_external(&directions_url(&location)),
                            Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                            "Directions"
                        }
                    }
                }
            }
        }
    }
}
