use super::FieldErrors;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUser;
use dioxus_free_icons::Icon;
use shared_types::settings::ProfileSettings;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    TextField, ToastOptions,
};
use tracing::info;

/// Profile card: name, email and phone, validated on save.
#[component]
pub fn ProfileSection(profile: Signal<ProfileSettings>, field_errors: Signal<FieldErrors>) -> Element {
    let toast = use_toast();
    let mut profile = profile;
    let mut field_errors = field_errors;
    let current = profile.read().clone();
    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        Card {
            CardHeader {
                CardTitle { class: "settings-card-title",
                    Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                    "Profile Information"
                }
                CardDescription { "Update your personal details" }
            }
            CardContent { class: "settings-stack",
                TextField {
                    label: "Full Name",
                    value: current.name,
                    error: error_for("name"),
                    on_input: move |e: FormEvent| profile.write().name = e.value(),
                }
                TextField {
                    label: "Email Address",
                    input_type: "email",
                    value: current.email,
                    error: error_for("email"),
                    on_input: move |e: FormEvent| profile.write().email = e.value(),
                }
                TextField {
                    label: "Phone Number",
                    input_type: "tel",
                    value: current.phone,
                    error: error_for("phone"),
                    on_input: move |e: FormEvent| profile.write().phone = e.value(),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        let result = profile.read().check();
                        match result {
                            Ok(()) => {
                                field_errors.set(FieldErrors::new());
                                info!("profile saved");
                                toast.success("Profile updated successfully".to_string(), ToastOptions::new());
                            }
                            Err(e) => {
                                toast.error(e.friendly_message(), ToastOptions::new());
                                field_errors.set(e.field_errors);
                            }
                        }
                    },
                    "Save Profile"
                }
            }
        }
    }
}
