use crate::download::save_text_file;
use crate::format_helpers::{format_count, percent_of};
use crate::simulate::use_simulated_task;
use crate::status_tone;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBell, LdCalendar, LdClock, LdCrown, LdDatabase, LdDownload, LdFileText, LdGlobe,
    LdPlane, LdRefreshCw, LdSettings, LdTrendingUp, LdUserPlus, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::dashboard::{
    region, Region, TimeRange, VisaService, ADMIN_QUICK_ACTIONS, ADMIN_TABS, ARRIVAL_SERVICES,
    E_VISA_SERVICES, GLOBAL_STATS, OFFICER_PERFORMANCE, REGIONS, SYSTEM_ALERTS, SYSTEM_HEALTH,
    SYSTEM_LOGS, TOP_COUNTRIES,
};
use shared_types::SimulatedOp;
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, ProgressBar, SelectField, TabContent, TabList, TabTrigger, Tabs,
    ToastOptions,
};

const EXPORT_FILE_NAME: &str = "immigration-overview-report.txt";

/// Plain-text overview for the "Export Reports" action.
pub fn overview_report(region: Region, range: TimeRange) -> String {
    let mut lines = vec![
        "IMMIGRATION OVERVIEW REPORT".to_string(),
        format!("Region: {}", region.name),
        format!("Period: {}", range.label()),
        String::new(),
        format!("Applications: {}", format_count(u64::from(region.applications))),
        format!("Active officers: {}", GLOBAL_STATS.active_officers),
        format!("Approval rate: {}%", GLOBAL_STATS.approval_rate),
        format!("Average processing: {}", GLOBAL_STATS.avg_processing),
        format!("Pending reviews: {}", format_count(u64::from(GLOBAL_STATS.pending_reviews))),
        String::new(),
        "Top destinations:".to_string(),
    ];
    lines.extend(TOP_COUNTRIES.iter().map(|c| {
        format!(
            "  {} - {} applications ({})",
            c.country,
            format_count(u64::from(c.applications)),
            c.growth
        )
    }));
    lines.join("\n")
}

/// Admin control center: global figures filtered by region and period,
/// with overview, officers, countries, visa services and system tabs.
#[component]
pub fn AdminDashboard() -> Element {
    let mut region_code = use_signal(|| REGIONS[0].code.to_string());
    let mut range = use_signal(TimeRange::default);

    let selected = region(&region_code());
    let period = range();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        section { class: "portal-hero portal-hero-admin",
            div { class: "portal-hero-top",
                div { class: "portal-hero-title",
                    span { class: "portal-hero-mark",
                        Icon::<LdCrown> { icon: LdCrown, width: 32, height: 32 }
                    }
                    div {
                        h1 { "Admin Control Center" }
                        p { "Global Immigration Management System" }
                    }
                }
                div { class: "portal-hero-figure",
                    span { class: "portal-hero-figure-value", "{GLOBAL_STATS.system_uptime}%" }
                    span { class: "portal-hero-figure-label", "System Uptime" }
                }
            }

            div { class: "portal-hero-filter",
                Icon::<LdGlobe> { icon: LdGlobe, width: 18, height: 18 }
                SelectField {
                    label: "Region",
                    value: selected.code,
                    onchange: move |e: FormEvent| region_code.set(e.value()),
                    for entry in REGIONS {
                        option { key: "{entry.code}", value: entry.code,
                            "{entry.name} ({format_count(u64::from(entry.applications))})"
                        }
                    }
                }
                Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                SelectField {
                    label: "Period",
                    value: period.as_str(),
                    onchange: move |e: FormEvent| range.set(TimeRange::parse(&e.value())),
                    for choice in TimeRange::ALL {
                        option { key: "{choice.as_str()}", value: choice.as_str(), "{choice.label()}" }
                    }
                }
            }

            div { class: "portal-hero-stats",
                HeroStat {
                    label: "Total Applications",
                    value: format_count(u64::from(selected.applications)),
                    note: format!("+{} today", GLOBAL_STATS.daily_applications),
                    Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                }
                HeroStat {
                    label: "Active Officers",
                    value: GLOBAL_STATS.active_officers.to_string(),
                    note: "Across all regions",
                    Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                }
                HeroStat {
                    label: "Approval Rate",
                    value: format!("{}%", GLOBAL_STATS.approval_rate),
                    note: format!("Last {}", period.label()),
                    Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 16, height: 16 }
                }
                HeroStat {
                    label: "Avg. Processing",
                    value: GLOBAL_STATS.avg_processing,
                    note: "System-wide",
                    Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                }
            }
        }

        Tabs { default_value: ADMIN_TABS[0].0, horizontal: true,
            TabList {
                for (index, (value, label)) in ADMIN_TABS.into_iter().enumerate() {
                    TabTrigger { key: "{value}", value, index, "{label}" }
                }
            }
            TabContent { value: ADMIN_TABS[0].0, index: 0usize,
                Overview { region: selected, range: period }
            }
            TabContent { value: ADMIN_TABS[1].0, index: 1usize, OfficerManagement {} }
            TabContent { value: ADMIN_TABS[2].0, index: 2usize, CountryStatistics {} }
            TabContent { value: ADMIN_TABS[3].0, index: 3usize, VisaServices {} }
            TabContent { value: ADMIN_TABS[4].0, index: 4usize, SystemStatus {} }
        }
    }
}

#[component]
fn HeroStat(label: String, value: String, note: String, children: Element) -> Element {
    rsx! {
        div { class: "portal-hero-stat",
            span { class: "portal-hero-stat-label", {children} "{label}" }
            span { class: "portal-hero-stat-value", "{value}" }
            span { class: "portal-hero-stat-note", "{note}" }
        }
    }
}

#[component]
fn Overview(region: Region, range: TimeRange) -> Element {
    let toast = use_toast();
    let export = use_simulated_task(SimulatedOp::GenerateReport);

    let run_action = move |action: &'static str| {
        if action == "Export Reports" {
            export.run(move || {
                save_text_file(EXPORT_FILE_NAME, &overview_report(region, range));
                toast.success("Report exported".to_string(), ToastOptions::new());
            });
        } else {
            tracing::info!(action, "admin quick action");
            toast.info(format!("{action} started"), ToastOptions::new());
        }
    };

    rsx! {
        div { class: "overview-grid",
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 }
                        "Top Destination Countries"
                    }
                }
                CardContent {
                    ul { class: "rank-list",
                        for country in TOP_COUNTRIES {
                            li { key: "{country.country}", class: "rank-item",
                                div {
                                    div { class: "rank-name", "{country.country}" }
                                    div { class: "rank-detail",
                                        "{format_count(u64::from(country.applications))} applications"
                                    }
                                }
                                Badge { tone: BadgeTone::Success, "{country.growth}" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                        "System Alerts"
                    }
                }
                CardContent {
                    ul { class: "alert-list",
                        for alert in SYSTEM_ALERTS {
                            li { key: "{alert.title}", class: "alert-item",
                                "data-tone": status_tone::alert(alert.level).as_str(),
                                div { class: "alert-title", "{alert.title}" }
                                div { class: "alert-message", "{alert.message}" }
                                div { class: "alert-time", "{alert.time}" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                        "Quick Actions"
                    }
                }
                CardContent { class: "action-stack",
                    for (i, action) in ADMIN_QUICK_ACTIONS.into_iter().enumerate() {
                        Button {
                            key: "{action}",
                            variant: if i == 0 { ButtonVariant::Primary } else { ButtonVariant::Outline },
                            busy: action == "Export Reports" && export.is_pending(),
                            busy_label: "Exporting...",
                            onclick: move |_| run_action(action),
                            QuickActionIcon { index: i }
                            "{action}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuickActionIcon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdUserPlus> { icon: LdUserPlus, width: 16, height: 16 } },
        1 => rsx! { Icon::<LdDatabase> { icon: LdDatabase, width: 16, height: 16 } },
        2 => rsx! { Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 } },
        _ => rsx! { Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 16, height: 16 } },
    }
}

#[component]
fn OfficerManagement() -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                    "Officer Management"
                }
                CardDescription { "Manage immigration officers across all regions" }
            }
            CardContent {
                div { class: "review-list",
                    for officer in OFFICER_PERFORMANCE {
                        div { key: "{officer.name}", class: "review-item",
                            span { class: "review-icon",
                                Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                            }
                            div { class: "review-body",
                                h3 { "{officer.name}" }
                                div { class: "review-meta",
                                    span { "{officer.region}" }
                                    span { "{officer.cases_assigned} cases" }
                                    span { "{officer.completion_rate}% completion" }
                                    span { "{officer.avg_processing} avg" }
                                }
                            }
                            div { class: "review-actions",
                                Badge { tone: status_tone::officer(officer.status), "{officer.status.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CountryStatistics() -> Element {
    let global = REGIONS[0].applications;
    let busiest = TOP_COUNTRIES
        .iter()
        .map(|c| c.applications)
        .max()
        .unwrap_or(1)
        .max(1);

    rsx! {
        div { class: "chart-grid",
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdGlobe> { icon: LdGlobe, width: 18, height: 18 }
                        "Country Statistics"
                    }
                }
                CardContent {
                    div { class: "meter-list",
                        for country in TOP_COUNTRIES {
                            div { key: "{country.country}", class: "meter-row",
                                div { class: "meter-head",
                                    span { "{country.country}" }
                                    span { class: "meter-value", "{format_count(u64::from(country.applications))}" }
                                }
                                ProgressBar {
                                    value: f64::from(country.applications) / f64::from(busiest) * 100.0,
                                }
                            }
                        }
                    }
                }
            }
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 }
                        "Regional Performance"
                    }
                }
                CardContent {
                    div { class: "meter-list",
                        for entry in REGIONS.into_iter().skip(1) {
                            div { key: "{entry.code}", class: "meter-row",
                                div { class: "meter-head",
                                    span { "{entry.name}" }
                                    span { class: "meter-value",
                                        "{percent_of(u64::from(entry.applications), u64::from(global))}% of global"
                                    }
                                }
                                ProgressBar {
                                    value: f64::from(percent_of(u64::from(entry.applications), u64::from(global))),
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
fn VisaServices() -> Element {
    rsx! {
        div { class: "chart-grid",
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdPlane> { icon: LdPlane, width: 18, height: 18 }
                        "Visa on Arrival Services"
                    }
                    CardDescription { "Manage visa on arrival for different countries" }
                }
                CardContent {
                    for service in ARRIVAL_SERVICES {
                        ServiceTile { key: "{service.name}", service }
                    }
                }
            }
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdGlobe> { icon: LdGlobe, width: 18, height: 18 }
                        "E-Visa Management"
                    }
                    CardDescription { "Electronic visa application system" }
                }
                CardContent {
                    for service in E_VISA_SERVICES {
                        ServiceTile { key: "{service.name}", service }
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceTile(service: VisaService) -> Element {
    let tone = if service.status == "Active" {
        BadgeTone::Success
    } else {
        BadgeTone::Info
    };

    rsx! {
        div { class: "service-tile",
            div { class: "service-head",
                span { class: "service-name", "{service.name}" }
                Badge { tone, "{service.status}" }
            }
            div { class: "service-detail", "{service.detail}" }
            ProgressBar { value: f64::from(service.rate) }
            div { class: "service-rate", "{service.rate}% {service.rate_label}" }
        }
    }
}

#[component]
fn SystemStatus() -> Element {
    rsx! {
        div { class: "chart-grid",
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdDatabase> { icon: LdDatabase, width: 18, height: 18 }
                        "System Health"
                    }
                }
                CardContent {
                    div { class: "meter-list",
                        for metric in SYSTEM_HEALTH {
                            div { key: "{metric.label}", class: "meter-row",
                                div { class: "meter-head",
                                    span { "{metric.label}" }
                                    span { class: "meter-value", "{metric.percent}%" }
                                }
                                ProgressBar { value: metric.percent }
                            }
                        }
                    }
                }
            }
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 }
                        "System Logs"
                    }
                }
                CardContent {
                    ul { class: "log-list",
                        for (level, message) in SYSTEM_LOGS {
                            li { key: "{message}", class: "log-item",
                                "data-tone": status_tone::alert(level).as_str(),
                                "{message}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_names_region_and_period() {
        let report = overview_report(region("europe"), TimeRange::Quarter);
        assert!(report.starts_with("IMMIGRATION OVERVIEW REPORT\n"));
        assert!(report.contains("Region: Europe"));
        assert!(report.contains("Period: 90 Days"));
        assert!(report.contains("Applications: 4,567"));
    }

    #[test]
    fn report_lists_every_top_country() {
        let report = overview_report(region("global"), TimeRange::default());
        for country in TOP_COUNTRIES {
            assert!(report.contains(country.country), "{}", country.country);
        }
        assert!(report.contains("United States - 2,456 applications (+12%)"));
    }
}
