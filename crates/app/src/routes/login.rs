use crate::nav::use_navigation;
use crate::simulate::use_simulated_task;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowRight, LdEye, LdEyeOff, LdFileCheck, LdFingerprint, LdGlobe, LdScan, LdShield, LdStar,
    LdUser, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{FeatureFlags, Role, SimulatedOp, ALL_ROLES};
use shared_ui::{
    Button, ButtonVariant, ButtonSize, Card, CardContent, CardDescription, CardHeader, CardTitle,
    TabContent, TabList, TabTrigger, Tabs, TextField,
};

const FEATURES: [(&str, &str); 4] = [
    (
        "Application Management",
        "Submit and track your immigration applications in real-time",
    ),
    (
        "Secure Document Upload",
        "Upload your documents with bank-level security encryption",
    ),
    (
        "Expert Support",
        "Get assistance from certified immigration officers",
    ),
    (
        "Global Coverage",
        "Supporting immigration processes for 150+ countries",
    ),
];

const STATS: [(&str, &str); 4] = [
    ("50K+", "Applications Processed"),
    ("98%", "Success Rate"),
    ("150+", "Countries Supported"),
    ("7 Days", "Average Processing Time"),
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    rating: usize,
}

const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Work Visa Applicant",
        content: "The process was so smooth and transparent. I could track every step of my application.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Student Visa",
        content: "Amazing support team and user-friendly interface. Highly recommended!",
        rating: 5,
    },
];

/// Sign-in screen shown while the session is unauthenticated.
///
/// Any attempt succeeds after the configured delay. The selected role is
/// applied when the delay completes, immediately before the session opens.
#[component]
pub fn Login() -> Element {
    let mut nav = use_navigation();
    let flags: FeatureFlags = use_context();
    let task = use_simulated_task(SimulatedOp::Login);

    let mut email = use_signal(|| "demo@immigration.gov".to_string());
    let mut password = use_signal(|| "demo123".to_string());
    let mut show_password = use_signal(|| false);
    let mut selected_role = use_signal(|| Role::Applicant);

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut register_email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut country = use_signal(String::new);
    let mut register_password = use_signal(String::new);

    let sign_in_as = move |role: Role| {
        task.run(move || {
            nav.set_role(role);
            nav.login();
        });
    };

    let pending = task.is_pending();
    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            section { class: "login-hero",
                p { class: "login-kicker",
                    "Immigration Management System - "
                    span { class: "login-kicker-accent", "India" }
                }
                h1 { class: "login-headline",
                    "Your Gateway to"
                    span { class: "login-headline-accent", "Global Immigration" }
                }
                p { class: "login-lead",
                    "Streamline your immigration journey with our advanced digital platform. From application submission to biometric verification, we've got you covered."
                }

                div { class: "login-features",
                    for (index, (title, description)) in FEATURES.into_iter().enumerate() {
                        div { key: "{title}", class: "login-feature",
                            div { class: "login-feature-icon",
                                {match index {
                                    0 => rsx! { Icon::<LdFileCheck> { icon: LdFileCheck, width: 20, height: 20 } },
                                    1 => rsx! { Icon::<LdShield> { icon: LdShield, width: 20, height: 20 } },
                                    2 => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                                    _ => rsx! { Icon::<LdGlobe> { icon: LdGlobe, width: 20, height: 20 } },
                                }}
                            }
                            div {
                                h3 { "{title}" }
                                p { "{description}" }
                            }
                        }
                    }
                }

                div { class: "login-stats",
                    for (value, label) in STATS {
                        div { key: "{label}", class: "login-stat",
                            div { class: "login-stat-value", "{value}" }
                            div { class: "login-stat-label", "{label}" }
                        }
                    }
                }

                div { class: "login-testimonials",
                    for testimonial in TESTIMONIALS.iter() {
                        div { key: "{testimonial.name}", class: "login-testimonial",
                            div { class: "login-stars",
                                for star in 0..testimonial.rating {
                                    Icon::<LdStar> { key: "{star}", icon: LdStar, width: 16, height: 16 }
                                }
                            }
                            p { "\u{201c}{testimonial.content}\u{201d}" }
                            div { class: "login-testimonial-author",
                                strong { "{testimonial.name}" }
                                span { " - {testimonial.role}" }
                            }
                        }
                    }
                }
            }

            section { class: "login-panel",
                Card { class: "login-card",
                    CardHeader {
                        div { class: "login-card-mark",
                            Icon::<LdShield> { icon: LdShield, width: 32, height: 32 }
                        }
                        CardTitle { "Welcome Back" }
                        CardDescription { "Sign in to access your immigration portal" }
                    }
                    CardContent {
                        Tabs { default_value: "login", horizontal: true,
                            TabList {
                                TabTrigger { value: "login", index: 0usize, "Sign In" }
                                TabTrigger { value: "register", index: 1usize, "Sign Up" }
                            }

                            TabContent { value: "login", index: 0usize,
                                div { class: "login-form",
                                    TextField {
                                        label: "Email Address",
                                        input_type: "email",
                                        placeholder: "Enter your email",
                                        value: email(),
                                        on_input: move |e: FormEvent| email.set(e.value()),
                                    }
                                    div { class: "login-password",
                                        TextField {
                                            label: "Password",
                                            input_type: password_type,
                                            placeholder: "Enter your password",
                                            value: password(),
                                            on_input: move |e: FormEvent| password.set(e.value()),
                                        }
                                        PasswordToggle { shown: show_password(), on_toggle: move |_| show_password.toggle() }
                                    }

                                    div { class: "login-role-picker",
                                        span { class: "login-role-label", "Login as:" }
                                        div { class: "login-role-options",
                                            for role in ALL_ROLES {
                                                Button {
                                                    key: "{role}",
                                                    variant: if selected_role() == role { ButtonVariant::Primary } else { ButtonVariant::Outline },
                                                    size: ButtonSize::Small,
                                                    onclick: move |_| selected_role.set(role),
                                                    RoleIcon { role }
                                                    "{role.display_name()}"
                                                }
                                            }
                                        }
                                    }

                                    Button {
                                        class: "login-submit",
                                        busy: pending,
                                        busy_label: "Signing In...",
                                        onclick: move |_| sign_in_as(selected_role()),
                                        "Sign In"
                                        Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 }
                                    }
                                    Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small, class: "login-forgot",
                                        "Forgot your password?"
                                    }
                                }
                            }

                            TabContent { value: "register", index: 1usize,
                                div { class: "login-form",
                                    div { class: "login-name-row",
                                        TextField {
                                            label: "First Name",
                                            placeholder: "John",
                                            value: first_name(),
                                            on_input: move |e: FormEvent| first_name.set(e.value()),
                                        }
                                        TextField {
                                            label: "Last Name",
                                            placeholder: "Doe",
                                            value: last_name(),
                                            on_input: move |e: FormEvent| last_name.set(e.value()),
                                        }
                                    }
                                    TextField {
                                        label: "Email Address",
                                        input_type: "email",
                                        placeholder: "Enter your email",
                                        value: register_email(),
                                        on_input: move |e: FormEvent| register_email.set(e.value()),
                                    }
                                    TextField {
                                        label: "Phone Number",
                                        input_type: "tel",
                                        placeholder: "+1 (555) 123-4567",
                                        value: phone(),
                                        on_input: move |e: FormEvent| phone.set(e.value()),
                                    }
                                    TextField {
                                        label: "Country",
                                        placeholder: "Select your country",
                                        value: country(),
                                        on_input: move |e: FormEvent| country.set(e.value()),
                                    }
                                    div { class: "login-password",
                                        TextField {
                                            label: "Password",
                                            input_type: password_type,
                                            placeholder: "Create a strong password",
                                            value: register_password(),
                                            on_input: move |e: FormEvent| register_password.set(e.value()),
                                        }
                                        PasswordToggle { shown: show_password(), on_toggle: move |_| show_password.toggle() }
                                    }
                                    Button {
                                        class: "login-submit",
                                        variant: ButtonVariant::Success,
                                        busy: pending,
                                        busy_label: "Creating Account...",
                                        onclick: move |_| sign_in_as(Role::Applicant),
                                        Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 }
                                        "Create Account"
                                    }
                                }
                            }
                        }

                        if flags.biometric_login {
                            div { class: "login-biometric",
                                span { class: "login-biometric-label", "Or continue with" }
                                div { class: "login-biometric-options",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        disabled: pending,
                                        onclick: move |_| sign_in_as(selected_role()),
                                        Icon::<LdFingerprint> { icon: LdFingerprint, width: 16, height: 16 }
                                        "Fingerprint"
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        disabled: pending,
                                        onclick: move |_| sign_in_as(selected_role()),
                                        Icon::<LdScan> { icon: LdScan, width: 16, height: 16 }
                                        "Face ID"
                                    }
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
fn PasswordToggle(shown: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "login-password-toggle",
            aria_label: if shown { "Hide password" } else { "Show password" },
            onclick: move |e| on_toggle.call(e),
            if shown {
                Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
            } else {
                Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
            }
        }
    }
}

#[component]
fn RoleIcon(role: Role) -> Element {
    match role {
        Role::Applicant => rsx! { Icon::<LdUser> { icon: LdUser, width: 12, height: 12 } },
        Role::Officer => rsx! { Icon::<LdShield> { icon: LdShield, width: 12, height: 12 } },
        Role::Admin => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 12, height: 12 } },
    }
}
