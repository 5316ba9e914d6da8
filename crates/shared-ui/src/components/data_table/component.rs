use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table { {children} }
        }
    }
}

/// Wraps `th` cells in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(
    #[props(default)] align_end: bool,
    children: Element,
) -> Element {
    rsx! {
        th { class: if align_end { "align-end" } else { "" }, {children} }
    }
}

/// Row that becomes hoverable and clickable when given a handler.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(
    #[props(default)] align_end: bool,
    children: Element,
) -> Element {
    rsx! {
        td { class: if align_end { "align-end" } else { "" }, {children} }
    }
}

/// Single full-width row shown when a filtered table has no rows.
#[component]
pub fn DataTableEmpty(colspan: usize, message: String) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn empty_row_spans_all_columns() {
        let html = render(|| {
            rsx! {
                DataTable {
                    DataTableBody {
                        DataTableEmpty { colspan: 6, message: "No applications found" }
                    }
                }
            }
        });
        assert!(html.contains("colspan=\"6\""));
        assert!(html.contains("No applications found"));
    }

    #[test]
    fn row_without_handler_is_not_clickable() {
        let html = render(|| {
            rsx! {
                DataTable {
                    DataTableBody {
                        DataTableRow { DataTableCell { "APP-001" } }
                    }
                }
            }
        });
        assert!(html.contains("APP-001"));
        assert!(!html.contains("clickable"));
    }
}
