use crate::download::save_text_file;
use crate::simulate::use_simulated_task;
use crate::status_tone;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdClock, LdDownload, LdFileText, LdMail, LdMapPin, LdMessageSquare, LdPhone, LdUser,
};
use dioxus_free_icons::Icon;
use shared_types::application::{
    detail_report, report_file_name, Application, ApplicationDetail, SubmittedDocumentStatus,
};
use shared_types::SimulatedOp;
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardHeader, CardTitle, DialogContent, DialogDescription, DialogRoot, DialogTitle, TabContent,
    TabList, TabTrigger, Tabs, ToastOptions,
};

fn document_tone(status: SubmittedDocumentStatus) -> BadgeTone {
    match status {
        SubmittedDocumentStatus::Verified => BadgeTone::Success,
        SubmittedDocumentStatus::Pending => BadgeTone::Warning,
        SubmittedDocumentStatus::Missing => BadgeTone::Neutral,
    }
}

/// Full record for one application, with a generated text report.
#[component]
pub fn ApplicationDetailDialog(app: Application, open: bool, on_close: EventHandler) -> Element {
    let toast = use_toast();
    let report = use_simulated_task(SimulatedOp::GenerateReport);
    let detail = ApplicationDetail::for_application(&app);

    let report_detail = detail.clone();
    let download = move |_| {
        let detail = report_detail.clone();
        report.run(move || {
            let now = chrono::Local::now().naive_local();
            save_text_file(
                &report_file_name(&detail.application),
                &detail_report(&detail, now),
            );
            toast.success("Application report downloaded".to_string(), ToastOptions::new());
        });
    };

    let overview = [
        ("Application ID", app.id.clone()),
        ("Application Type", app.kind.clone()),
        ("Submission Date", app.submitted.clone()),
        ("Last Updated", app.last_update.clone()),
        ("Current Status", app.status.label().to_string()),
        ("Assigned Officer", app.officer.clone()),
        ("Priority", detail.priority.clone()),
        ("Estimated Processing Time", detail.estimated_processing.clone()),
    ];
    let last_event = detail.timeline.len().saturating_sub(1);

    rsx! {
        DialogRoot {
            open,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                div { class: "application-dialog",
                    DialogTitle {
                        Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
                        "Application Details - {app.id}"
                    }
                    DialogDescription { "Complete information and status for this immigration application" }

                    div { class: "application-summary",
                        div {
                            h3 { "{app.kind}" }
                            p { "Application ID: {app.id}" }
                        }
                        Badge { tone: status_tone::application(app.status), "{app.status.label()}" }
                        Button {
                            busy: report.is_pending(),
                            busy_label: "Generating...",
                            onclick: download,
                            Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                            "Download Report"
                        }
                    }

                    Tabs { default_value: "overview", horizontal: true,
                        TabList {
                            TabTrigger { value: "overview", index: 0usize, "Overview" }
                            TabTrigger { value: "personal", index: 1usize, "Personal Info" }
                            TabTrigger { value: "documents", index: 2usize, "Documents" }
                            TabTrigger { value: "timeline", index: 3usize, "Timeline" }
                        }

                        TabContent { value: "overview", index: 0usize,
                            div { class: "detail-grid",
                                Card {
                                    CardHeader { CardTitle { "Application Information" } }
                                    CardContent {
                                        dl { class: "detail-list",
                                            for (label, value) in overview {
                                                div { key: "{label}", class: "detail-row",
                                                    dt { "{label}:" }
                                                    dd { "{value}" }
                                                }
                                            }
                                        }
                                    }
                                }
                                Card {
                                    CardHeader { CardTitle { "Quick Stats" } }
                                    CardContent { class: "detail-stats",
                                        div { class: "detail-stat detail-stat-success",
                                            span { class: "detail-stat-value", "{detail.verified_documents()}" }
                                            span { "Verified Docs" }
                                        }
                                        div { class: "detail-stat detail-stat-info",
                                            span { class: "detail-stat-value", "{detail.timeline.len()}" }
                                            span { "Timeline Events" }
                                        }
                                    }
                                }
                            }
                        }

                        TabContent { value: "personal", index: 1usize,
                            Card {
                                CardHeader {
                                    CardTitle {
                                        Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                                        "Personal Information"
                                    }
                                }
                                CardContent { class: "personal-grid",
                                    for (label, value) in detail.personal.rows() {
                                        div { key: "{label}", class: "personal-field",
                                            span { class: "personal-label", "{label}" }
                                            div { class: "personal-value",
                                                {match label {
                                                    "Email" => rsx! { Icon::<LdMail> { icon: LdMail, width: 14, height: 14 } },
                                                    "Phone" => rsx! { Icon::<LdPhone> { icon: LdPhone, width: 14, height: 14 } },
                                                    "Address" => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 } },
                                                    _ => rsx! {},
                                                }}
                                                "{value}"
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        TabContent { value: "documents", index: 2usize,
                            Card {
                                CardHeader { CardTitle { "Document Status" } }
                                CardContent {
                                    ul { class: "submitted-documents",
                                        for doc in detail.documents.iter() {
                                            li { key: "{doc.name}",
                                                Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                                                div { class: "submitted-document-name",
                                                    h4 { "{doc.name}" }
                                                    if let Some(date) = &doc.upload_date {
                                                        p { "Uploaded: {date}" }
                                                    }
                                                }
                                                Badge { tone: document_tone(doc.status), "{doc.status.as_str()}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        TabContent { value: "timeline", index: 3usize,
                            Card {
                                CardHeader {
                                    CardTitle {
                                        Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                                        "Application Timeline"
                                    }
                                }
                                CardContent {
                                    ol { class: "timeline",
                                        for (i, event) in detail.timeline.iter().enumerate() {
                                            li {
                                                key: "{event.event}",
                                                class: "timeline-event",
                                                "data-done": if event.completed { "true" } else { "false" },
                                                "data-last": if i == last_event { "true" } else { "false" },
                                                span { class: "timeline-dot" }
                                                div { class: "timeline-body",
                                                    div { class: "timeline-head",
                                                        h4 { "{event.event}" }
                                                        span { "{event.date} {event.time}" }
                                                    }
                                                    p { "{event.description}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "application-help",
                        div {
                            h3 { "Need Help?" }
                            p { "Contact our support team for assistance with your application" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: move |_| {
                                toast.info("Message sent to the assigned officer".to_string(), ToastOptions::new());
                            },
                            Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 14, height: 14 }
                            "Contact Officer"
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
    fn missing_documents_read_as_neutral() {
        assert_eq!(document_tone(SubmittedDocumentStatus::Missing), BadgeTone::Neutral);
        assert_eq!(document_tone(SubmittedDocumentStatus::Verified), BadgeTone::Success);
    }
}
