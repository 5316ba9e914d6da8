//! Lightweight CSS charts for the dashboards. Bars and the donut are sized
//! with inline styles computed from the fixture data.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBell, LdCalendar, LdCheck, LdClock, LdFileText, LdMail, LdUpload, LdUserPlus,
};
use dioxus_free_icons::Icon;
use shared_types::dashboard::{
    bar_percent, Activity, ActivityKind, CountryShare, COUNTRY_SHARE, MONTHLY_STATS,
};

const SLICE_COLORS: [&str; 5] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"];

/// `conic-gradient` for a donut with one slice per share, in order.
pub fn donut_gradient(shares: &[CountryShare]) -> String {
    let mut start = 0u32;
    let stops: Vec<String> = shares
        .iter()
        .enumerate()
        .map(|(i, share)| {
            let end = (start + u32::from(share.percent)).min(100);
            let stop = format!(
                "{} {}% {}%",
                SLICE_COLORS[i % SLICE_COLORS.len()],
                start,
                end
            );
            start = end;
            stop
        })
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

/// Colour key for an activity icon.
pub fn activity_tone(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Upload
        | ActivityKind::Review
        | ActivityKind::System => "success",
        ActivityKind::Status | ActivityKind::Assignment | ActivityKind::User => "info",
        ActivityKind::Appointment | ActivityKind::Interview | ActivityKind::Maintenance => "accent",
        ActivityKind::Message | ActivityKind::Request => "warning",
        ActivityKind::Alert => "danger",
    }
}

/// Grouped monthly bars: applications, approved, rejected.
#[component]
pub fn ApplicationTrend() -> Element {
    rsx! {
        div { class: "trend-chart",
            div { class: "trend-bars",
                for stat in MONTHLY_STATS {
                    div { key: "{stat.month}", class: "trend-month",
                        div { class: "trend-group",
                            div {
                                class: "trend-bar trend-bar-applications",
                                style: "height: {bar_percent(stat.applications)}%",
                                title: "Applications: {stat.applications}",
                            }
                            div {
                                class: "trend-bar trend-bar-approved",
                                style: "height: {bar_percent(stat.approved)}%",
                                title: "Approved: {stat.approved}",
                            }
                            div {
                                class: "trend-bar trend-bar-rejected",
                                style: "height: {bar_percent(stat.rejected)}%",
                                title: "Rejected: {stat.rejected}",
                            }
                        }
                        span { class: "trend-label", "{stat.month}" }
                    }
                }
            }
            div { class: "chart-legend",
                span { class: "legend-item legend-applications", "Applications" }
                span { class: "legend-item legend-approved", "Approved" }
                span { class: "legend-item legend-rejected", "Rejected" }
            }
        }
    }
}

#[component]
pub fn CountryDonut() -> Element {
    let gradient = donut_gradient(&COUNTRY_SHARE);
    let slices = COUNTRY_SHARE.into_iter().zip(SLICE_COLORS.into_iter().cycle());

    rsx! {
        div { class: "donut-chart",
            div { class: "donut", style: "background: {gradient}",
                div { class: "donut-hole" }
            }
            ul { class: "donut-legend",
                for (share, color) in slices {
                    li { key: "{share.name}",
                        span { class: "donut-swatch", style: "background: {color}" }
                        span { class: "donut-name", "{share.name}" }
                        span { class: "donut-value", "{share.percent}%" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ActivityTimeline(activities: Vec<Activity>) -> Element {
    rsx! {
        ul { class: "activity-list",
            for activity in activities {
                li { key: "{activity.title}", class: "activity-item",
                    span { class: "activity-icon", "data-tone": activity_tone(activity.kind),
                        ActivityIcon { kind: activity.kind }
                    }
                    div { class: "activity-body",
                        div { class: "activity-head",
                            span { class: "activity-title", "{activity.title}" }
                            span { class: "activity-time", "{activity.time}" }
                        }
                        p { class: "activity-description", "{activity.description}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ActivityIcon(kind: ActivityKind) -> Element {
    match kind {
        ActivityKind::Upload => rsx! { Icon::<LdUpload> { icon: LdUpload, width: 16, height: 16 } },
        ActivityKind::Status | ActivityKind::Request => {
            rsx! { Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 } }
        }
        ActivityKind::Appointment | ActivityKind::Interview => {
            rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 } }
        }
        ActivityKind::Message => rsx! { Icon::<LdMail> { icon: LdMail, width: 16, height: 16 } },
        ActivityKind::Review | ActivityKind::System => {
            rsx! { Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 } }
        }
        ActivityKind::Assignment => rsx! { Icon::<LdActivity> { icon: LdActivity, width: 16, height: 16 } },
        ActivityKind::User => rsx! { Icon::<LdUserPlus> { icon: LdUserPlus, width: 16, height: 16 } },
        ActivityKind::Alert => rsx! { Icon::<LdBell> { icon: LdBell, width: 16, height: 16 } },
        ActivityKind::Maintenance => rsx! { Icon::<LdClock> { icon: LdClock, width: 16, height: 16 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn donut_slices_are_contiguous() {
        let gradient = donut_gradient(&COUNTRY_SHARE);
        assert_eq!(
            gradient,
            "conic-gradient(#3b82f6 0% 35%, #10b981 35% 60%, #f59e0b 60% 80%, #ef4444 80% 92%, #8b5cf6 92% 100%)"
        );
    }

    #[test]
    fn donut_caps_at_full_circle() {
        let shares = [
            CountryShare { name: "A", percent: 80 },
            CountryShare { name: "B", percent: 40 },
        ];
        assert_eq!(donut_gradient(&shares), "conic-gradient(#3b82f6 0% 80%, #10b981 80% 100%)");
    }

    #[test]
    fn alerts_render_as_danger() {
        assert_eq!(activity_tone(ActivityKind::Alert), "danger");
        assert_eq!(activity_tone(ActivityKind::Upload), "success");
    }
}
