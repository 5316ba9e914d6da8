use crate::download::save_text_file;
use crate::format_helpers::format_date_human;
use crate::nav::use_navigation;
use crate::notify;
use crate::simulate::use_simulated_task;
use crate::status_tone;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdEye, LdFileText, LdUpload};
use dioxus_free_icons::Icon;
use shared_types::document::{
    completion_percentage, count_by_status, download_content, download_file_name, fixtures,
    page_subtitle, Document, DocumentStatus,
};
use shared_types::{FeatureFlags, Role, SimulatedOp};
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, PageHeader, ProgressBar, ToastOptions,
};

const UPLOAD_HINT: &str = "Supported formats: PDF, JPEG, PNG (Max size: 10MB)";

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[component]
pub fn Documents() -> Element {
    let nav = use_navigation();
    let role = nav.role();
    let flags: FeatureFlags = use_context();
    let toast = use_toast();
    let upload = use_simulated_task(SimulatedOp::Upload);
    let documents = use_signal(fixtures);

    let docs = documents.read().clone();
    let completion = completion_percentage(&docs);
    let applicant = role == Role::Applicant;

    let upload_new = move |_| {
        upload.run(move || {
            tracing::info!("new document uploaded");
            toast.success("Document uploaded for review".to_string(), ToastOptions::new());
            notify::send_if_enabled(&flags, "Upload complete", "Your document was submitted for review.");
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./documents.css") }

        PageHeader { title: "Documents", subtitle: page_subtitle(role),
            if applicant {
                Button {
                    busy: upload.is_pending(),
                    busy_label: "Uploading...",
                    onclick: upload_new,
                    Icon::<LdUpload> { icon: LdUpload, width: 16, height: 16 }
                    "Upload Document"
                }
            }
        }

        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                    "Document Completion"
                }
                CardDescription { "Track your document submission progress" }
            }
            CardContent { class: "completion",
                div { class: "completion-head",
                    span { "Overall Progress" }
                    span { class: "completion-value", "{completion}%" }
                }
                ProgressBar { value: f64::from(completion), label: "Document completion" }
                div { class: "status-counts",
                    for status in DocumentStatus::ALL {
                        div { key: "{status.label()}", class: "status-count", "data-status": status.label(),
                            span { class: "status-count-value", "{count_by_status(&docs, status)}" }
                            span { class: "status-count-label", "{status.label()}" }
                        }
                    }
                }
            }
        }

        div { class: "document-list",
            for doc in docs.iter() {
                DocumentCard { key: "{doc.id}", document: doc.clone(), documents }
            }
        }

        if applicant {
            Card { class: "upload-area",
                CardContent {
                    span { class: "upload-area-icon",
                        Icon::<LdUpload> { icon: LdUpload, width: 28, height: 28 }
                    }
                    h3 { "Drop files here or click to upload" }
                    p { "{UPLOAD_HINT}" }
                    Button {
                        busy: upload.is_pending(),
                        busy_label: "Uploading...",
                        onclick: upload_new,
                        "Choose Files"
                    }
                }
            }
        }
    }
}

#[component]
fn DocumentCard(document: Document, documents: Signal<Vec<Document>>) -> Element {
    let nav = use_navigation();
    let flags: FeatureFlags = use_context();
    let toast = use_toast();
    let upload = use_simulated_task(SimulatedOp::Upload);
    let download = use_simulated_task(SimulatedOp::Download);

    let id = document.id;
    let can_upload = document.can_upload(nav.role());
    let can_download = document.has_file() && flags.document_downloads;
    let preview_name = document.name.clone();
    let download_doc = document.clone();

    rsx! {
        Card { class: "document-card",
            CardContent { class: "document-row",
                span { class: "document-icon",
                    Icon::<LdFileText> { icon: LdFileText, width: 22, height: 22 }
                }
                div { class: "document-info",
                    h3 {
                        "{document.name}"
                        if document.required {
                            Badge { tone: BadgeTone::Outline, "Required" }
                        }
                    }
                    div { class: "document-meta",
                        span { "Type: {document.category}" }
                        if let Some(date) = &document.upload_date {
                            span { "Uploaded: {format_date_human(date)}" }
                        }
                        if let (Some(size), Some(format)) = (&document.size, &document.format) {
                            span { "{size} ({format})" }
                        }
                    }
                    if let Some(reason) = &document.rejection_reason {
                        p { class: "document-rejection", "Rejection reason: {reason}" }
                    }
                }
                div { class: "document-actions",
                    Badge { tone: status_tone::document(document.status), "{document.status.label()}" }
                    if document.has_file() {
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                            aria_label: "Preview document",
                            onclick: move |_| {
                                toast.info(format!("Opening preview of {preview_name}"), ToastOptions::new());
                            },
                            Icon::<LdEye> { icon: LdEye, width: 14, height: 14 }
                        }
                    }
                    if can_download {
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                            aria_label: "Download document",
                            busy: download.is_pending(),
                            onclick: move |_| {
                                let doc = download_doc.clone();
                                download.run(move || {
                                    let now = chrono::Local::now().naive_local();
                                    save_text_file(&download_file_name(&doc.name), &download_content(&doc, now));
                                });
                            },
                            Icon::<LdDownload> { icon: LdDownload, width: 14, height: 14 }
                        }
                    }
                    if can_upload {
                        Button { variant: ButtonVariant::Success, size: ButtonSize::Small,
                            busy: upload.is_pending(),
                            busy_label: "Uploading...",
                            onclick: move |_| {
                                upload.run(move || {
                                    let mut documents = documents;
                                    if let Some(doc) = documents.write().iter_mut().find(|d| d.id == id) {
                                        doc.resubmit(&today());
                                        tracing::info!(document = id, name = %doc.name, "document resubmitted");
                                    }
                                    toast.success("Document uploaded for review".to_string(), ToastOptions::new());
                                    notify::send_if_enabled(&flags, "Upload complete", "Your document was submitted for review.");
                                });
                            },
                            Icon::<LdUpload> { icon: LdUpload, width: 14, height: 14 }
                            "Upload"
                        }
                    }
                }
            }
        }
    }
}
