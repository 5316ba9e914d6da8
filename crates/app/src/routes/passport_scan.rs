use crate::download::save_text_file;
use crate::simulate::sleep_ms;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCamera, LdCheck, LdClock, LdDownload, LdEye, LdFileText, LdFingerprint, LdInfo,
    LdRefreshCw, LdScan, LdShield, LdUpload, LdUser,
};
use dioxus_free_icons::Icon;
use shared_types::passport::{
    verification_report, BiometricStep, ExtractedPassport, PassportScan as ScanState, ScanStep,
    StepStatus, REPORT_FILE_NAME,
};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageHeader, ProgressBar, ToastOptions,
};
use tracing::{debug, info};

const REQUIREMENTS: [&str; 4] = [
    "Clear, high-resolution image (min 300 DPI)",
    "All text must be clearly visible",
    "No glare or shadows on the document",
    "Supported formats: JPG, PNG, PDF",
];

fn status_attr(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Upcoming => "upcoming",
        StepStatus::Current => "current",
        StepStatus::Done => "done",
    }
}

/// Passport upload, timed extraction, two biometric checks and a
/// downloadable verification report.
#[component]
pub fn PassportScan() -> Element {
    let scan = use_signal(ScanState::default);
    let current = scan();

    // The tick loop belongs to the page scope, not to the upload stage.
    let start = move |_: ()| {
        let mut scan = scan;
        if !scan.write().start() {
            return;
        }
        let timing = &crate::config().timing;
        let (tick_ms, step) = (timing.scan_tick_ms, timing.scan_step);
        info!(tick_ms, step, "passport scan started");
        spawn(async move {
            loop {
                sleep_ms(tick_ms).await;
                let done = scan.write().tick(step);
                debug!(progress = scan.peek().progress, "scan tick");
                if done {
                    info!("passport scan extracted");
                    break;
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./passport_scan.css") }

        PageHeader {
            title: "Passport & Biometric Verification",
            subtitle: "Secure document scanning and biometric verification for your immigration application",
        }

        Card {
            CardContent {
                ol { class: "scan-steps",
                    for step in ScanStep::ALL {
                        li {
                            key: "{step.label()}",
                            class: "scan-step",
                            "data-status": status_attr(current.step_status(step)),
                            span { class: "scan-step-icon", StepIcon { step } }
                            span { class: "scan-step-label", "{step.label()}" }
                        }
                    }
                }
            }
        }

        {match current.step {
            ScanStep::Upload => rsx! { UploadStage { on_start: start } },
            ScanStep::Scanning => rsx! { ScanningStage { progress: current.progress } },
            ScanStep::Biometric => rsx! { BiometricStage { scan } },
            ScanStep::Complete => rsx! { CompleteStage { scan } },
        }}
    }
}

#[component]
fn StepIcon(step: ScanStep) -> Element {
    match step {
        ScanStep::Upload => rsx! { Icon::<LdUpload> { icon: LdUpload, width: 16, height: 16 } },
        ScanStep::Scanning => rsx! { Icon::<LdScan> { icon: LdScan, width: 16, height: 16 } },
        ScanStep::Biometric => rsx! { Icon::<LdFingerprint> { icon: LdFingerprint, width: 16, height: 16 } },
        ScanStep::Complete => rsx! { Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 } },
    }
}

#[component]
fn UploadStage(on_start: EventHandler) -> Element {
    let toast = use_toast();

    rsx! {
        div { class: "scan-grid",
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdCamera> { icon: LdCamera, width: 18, height: 18 }
                        "Passport Upload"
                    }
                    CardDescription { "Upload a clear photo of your passport's main page" }
                }
                CardContent {
                    div { class: "scan-dropzone",
                        span { class: "scan-badge",
                            Icon::<LdCamera> { icon: LdCamera, width: 28, height: 28 }
                        }
                        h3 { "Upload Passport Photo" }
                        p { "Drag and drop your passport image here, or click to browse" }
                        div { class: "scan-buttons",
                            Button { onclick: move |_| on_start.call(()),
                                Icon::<LdUpload> { icon: LdUpload, width: 16, height: 16 }
                                "Choose File"
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    toast.info("Camera capture is not available on this device".to_string(), ToastOptions::new());
                                },
                                Icon::<LdCamera> { icon: LdCamera, width: 16, height: 16 }
                                "Take Photo"
                            }
                        }
                    }
                    h4 { class: "scan-subheading", "Requirements:" }
                    ul { class: "scan-checklist",
                        for requirement in REQUIREMENTS {
                            li { key: "{requirement}",
                                Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                                "{requirement}"
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                        "Security & Privacy"
                    }
                    CardDescription { "Your documents are protected with enterprise-grade security" }
                }
                CardContent { class: "scan-notes",
                    div { class: "scan-note", "data-tone": "success",
                        Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                        div {
                            h4 { "End-to-End Encryption" }
                            p { "All documents are encrypted during upload and storage" }
                        }
                    }
                    div { class: "scan-note", "data-tone": "info",
                        Icon::<LdEye> { icon: LdEye, width: 18, height: 18 }
                        div {
                            h4 { "Privacy Protected" }
                            p { "Only authorized officers can access your documents" }
                        }
                    }
                    div { class: "scan-note", "data-tone": "accent",
                        Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                        div {
                            h4 { "Automatic Deletion" }
                            p { "Documents are automatically deleted after processing" }
                        }
                    }
                    div { class: "scan-note", "data-tone": "warning",
                        Icon::<LdInfo> { icon: LdInfo, width: 18, height: 18 }
                        div {
                            h4 { "Important Notice" }
                            p { "Ensure your passport is valid for at least 6 months from your intended travel date" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ScanningStage(progress: u8) -> Element {
    rsx! {
        Card {
            CardHeader { class: "scan-centered",
                CardTitle {
                    Icon::<LdScan> { icon: LdScan, width: 18, height: 18 }
                    "Scanning Passport"
                }
                CardDescription { "Extracting information from your passport..." }
            }
            CardContent { class: "scan-progress",
                div { class: "scan-frame",
                    Icon::<LdScan> { icon: LdScan, width: 48, height: 48 }
                    p { "Analyzing document..." }
                }
                div { class: "scan-progress-head",
                    span { "Scanning Progress" }
                    span { "{progress}%" }
                }
                ProgressBar { value: f64::from(progress), label: "Scanning progress" }
                div { class: "scan-checks",
                    div { class: "scan-check",
                        Icon::<LdFileText> { icon: LdFileText, width: 22, height: 22 }
                        p { "Text Recognition" }
                    }
                    div { class: "scan-check",
                        Icon::<LdShield> { icon: LdShield, width: 22, height: 22 }
                        p { "Security Features" }
                    }
                    div { class: "scan-check",
                        Icon::<LdUser> { icon: LdUser, width: 22, height: 22 }
                        p { "Photo Analysis" }
                    }
                    div { class: "scan-check",
                        Icon::<LdCheck> { icon: LdCheck, width: 22, height: 22 }
                        p { "Validation" }
                    }
                }
            }
        }
    }
}

#[component]
fn BiometricStage(scan: Signal<ScanState>) -> Element {
    let extracted = use_hook(ExtractedPassport::sample);
    let biometric = scan().biometric;

    let next = move |_| {
        let mut scan = scan;
        scan.write().advance_biometric();
        info!(biometric = ?scan.peek().biometric, "biometric step passed");
    };

    rsx! {
        div { class: "scan-grid",
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdFingerprint> { icon: LdFingerprint, width: 18, height: 18 }
                        "Biometric Verification"
                    }
                    CardDescription { "Complete biometric verification to secure your identity" }
                }
                CardContent { class: "biometric",
                    {match biometric {
                        BiometricStep::Fingerprint => rsx! {
                            span { class: "biometric-mark biometric-fingerprint",
                                Icon::<LdFingerprint> { icon: LdFingerprint, width: 56, height: 56 }
                            }
                            h3 { "Fingerprint Scan" }
                            p { "Place your finger on the scanner or use your device's fingerprint sensor" }
                            Button { onclick: next,
                                Icon::<LdFingerprint> { icon: LdFingerprint, width: 16, height: 16 }
                                "Start Fingerprint Scan"
                            }
                        },
                        BiometricStep::Face => rsx! {
                            span { class: "biometric-mark biometric-face",
                                Icon::<LdEye> { icon: LdEye, width: 56, height: 56 }
                            }
                            h3 { "Facial Recognition" }
                            p { "Look directly at the camera for facial verification" }
                            Button { onclick: next,
                                Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                "Start Face Scan"
                            }
                        },
                        BiometricStep::Complete => rsx! {},
                    }}
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                        "Extracted Information"
                    }
                    CardDescription { "Verify the information extracted from your passport" }
                }
                CardContent {
                    dl { class: "extracted",
                        for (label, value) in extracted.fields() {
                            div { key: "{label}", class: "extracted-row",
                                dt { "{label}:" }
                                dd { "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CompleteStage(scan: Signal<ScanState>) -> Element {
    let toast = use_toast();

    rsx! {
        Card {
            CardHeader { class: "scan-centered",
                span { class: "scan-badge scan-badge-success",
                    Icon::<LdCheck> { icon: LdCheck, width: 28, height: 28 }
                }
                CardTitle { "Verification Complete!" }
                CardDescription { "Your passport and biometric data have been successfully verified" }
            }
            CardContent {
                div { class: "scan-results",
                    div { class: "scan-result", "data-tone": "success",
                        Icon::<LdCheck> { icon: LdCheck, width: 28, height: 28 }
                        h3 { "Document Verified" }
                        p { "Passport authenticated" }
                    }
                    div { class: "scan-result", "data-tone": "info",
                        Icon::<LdFingerprint> { icon: LdFingerprint, width: 28, height: 28 }
                        h3 { "Biometric Match" }
                        p { "Identity confirmed" }
                    }
                    div { class: "scan-result", "data-tone": "accent",
                        Icon::<LdShield> { icon: LdShield, width: 28, height: 28 }
                        h3 { "Security Passed" }
                        p { "All checks complete" }
                    }
                }
                div { class: "scan-buttons",
                    Button {
                        variant: ButtonVariant::Success,
                        onclick: move |_| {
                            let now = chrono::Local::now().naive_local();
                            save_text_file(REPORT_FILE_NAME, &verification_report(&ExtractedPassport::sample(), now));
                            toast.success("Verification report downloaded".to_string(), ToastOptions::new());
                        },
                        Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                        "Download Report"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            let mut scan = scan;
                            scan.write().reset();
                            info!("passport scan reset");
                        },
                        Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 16, height: 16 }
                        "Scan Another Document"
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
    fn indicator_marks_earlier_steps_done() {
        let mut scan = ScanState::default();
        scan.start();
        assert_eq!(status_attr(scan.step_status(ScanStep::Upload)), "done");
        assert_eq!(status_attr(scan.step_status(ScanStep::Scanning)), "current");
        assert_eq!(status_attr(scan.step_status(ScanStep::Complete)), "upcoming");
    }
}
