mod detail_dialog;

use crate::download::save_text_file;
use crate::nav::use_navigation;
use crate::status_tone;
use detail_dialog::ApplicationDetailDialog;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdEye, LdFileText, LdPencil, LdPlus, LdSearch};
use dioxus_free_icons::Icon;
use shared_types::application::{
    can_create_application, can_edit_application, detail_report, filter_applications, fixtures,
    page_subtitle, report_file_name, shows_people_columns, Application, ApplicationDetail,
    StatusFilter,
};
use shared_ui::{
    use_toast, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, PageHeader, SelectField, TextField,
    ToastOptions,
};

#[component]
pub fn Applications() -> Element {
    let nav = use_navigation();
    let role = nav.role();
    let toast = use_toast();

    let applications = use_hook(fixtures);
    let mut search = use_signal(String::new);
    let mut filter = use_signal(StatusFilter::default);
    let mut selected = use_signal(|| None::<Application>);
    let mut dialog_open = use_signal(|| false);

    let rows: Vec<Application> = filter_applications(&applications, &search(), filter())
        .into_iter()
        .cloned()
        .collect();
    let people = shows_people_columns(role);
    let editable = can_edit_application(role);
    let columns = if people { 8 } else { 6 };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./applications.css") }

        PageHeader { title: "Applications", subtitle: page_subtitle(role),
            if can_create_application(role) {
                Button {
                    onclick: move |_| {
                        tracing::info!("new application started");
                        toast.info("A new application draft has been started".to_string(), ToastOptions::new());
                    },
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "New Application"
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Search & Filter" }
            }
            CardContent { class: "filter-row",
                div { class: "filter-search",
                    Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                    TextField {
                        placeholder: "Search applications...",
                        value: search(),
                        on_input: move |e: FormEvent| search.set(e.value()),
                    }
                }
                SelectField {
                    value: filter().as_str(),
                    onchange: move |e: FormEvent| filter.set(StatusFilter::parse(&e.value())),
                    for choice in StatusFilter::OPTIONS {
                        option { key: "{choice.as_str()}", value: choice.as_str(), "{choice.label()}" }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                    "Applications List"
                }
                CardDescription { "{rows.len()} applications found" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Application ID" }
                        DataTableColumn { "Type" }
                        if people {
                            DataTableColumn { "Applicant" }
                        }
                        DataTableColumn { "Country" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Submitted" }
                        if people {
                            DataTableColumn { "Officer" }
                        }
                        DataTableColumn { align_end: true, "Actions" }
                    }
                    DataTableBody {
                        if rows.is_empty() {
                            DataTableEmpty { colspan: columns, message: "No applications match the current filters." }
                        }
                        for app in rows {
                            ApplicationRow {
                                key: "{app.id}",
                                app: app.clone(),
                                people,
                                editable,
                                on_view: move |app: Application| {
                                    selected.set(Some(app));
                                    dialog_open.set(true);
                                },
                            }
                        }
                    }
                }
            }
        }

        if let Some(app) = selected() {
            ApplicationDetailDialog {
                app,
                open: dialog_open(),
                on_close: move |_| dialog_open.set(false),
            }
        }
    }
}

#[component]
fn ApplicationRow(
    app: Application,
    people: bool,
    editable: bool,
    on_view: EventHandler<Application>,
) -> Element {
    let toast = use_toast();
    let view_app = app.clone();
    let edit_id = app.id.clone();
    let download_app = app.clone();

    rsx! {
        DataTableRow {
            DataTableCell { strong { "{app.id}" } }
            DataTableCell { "{app.kind}" }
            if people {
                DataTableCell { "{app.applicant}" }
            }
            DataTableCell { "{app.country}" }
            DataTableCell {
                Badge { tone: status_tone::application(app.status), "{app.status.label()}" }
            }
            DataTableCell { "{app.submitted}" }
            if people {
                DataTableCell { "{app.officer}" }
            }
            DataTableCell { align_end: true,
                div { class: "row-actions",
                    Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                        aria_label: "View application",
                        onclick: move |_| on_view.call(view_app.clone()),
                        Icon::<LdEye> { icon: LdEye, width: 14, height: 14 }
                    }
                    if editable {
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                            aria_label: "Edit application",
                            onclick: move |_| {
                                tracing::info!(application = %edit_id, "edit requested");
                                toast.info(format!("Editing {edit_id}"), ToastOptions::new());
                            },
                            Icon::<LdPencil> { icon: LdPencil, width: 14, height: 14 }
                        }
                    }
                    Button { variant: ButtonVariant::Outline, size: ButtonSize::Small,
                        aria_label: "Download application",
                        onclick: move |_| {
                            let detail = ApplicationDetail::for_application(&download_app);
                            let now = chrono::Local::now().naive_local();
                            save_text_file(&report_file_name(&download_app), &detail_report(&detail, now));
                        },
                        Icon::<LdDownload> { icon: LdDownload, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
