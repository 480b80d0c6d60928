use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{IconRef, LoginRequest, PortalConfig, Role, SIGN_IN_ROLES};
use shared_ui::{
    toast_message, use_toast, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, FieldError, FormSelect, Input, Label, ToastOptions,
};

use crate::icons::NavIcon;
use crate::routes::Route;
use crate::session::use_session;

/// Sign-in page. Any complete form is accepted; the chosen user type
/// becomes the session role.
#[component]
pub fn Login() -> Element {
    let portal: PortalConfig = use_context();
    let mut session = use_session();
    let toast = use_toast();

    let mut role_tag = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let portal_name = portal.branding.name.clone();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();

        let request = LoginRequest {
            role: Role::from_str_or_default(&role_tag.read()),
            email: email.read().trim().to_string(),
            password: password(),
        };

        match request.check() {
            Ok(()) => {
                field_errors.set(HashMap::new());
                session.sign_in(request.role, request.email);
                toast.success(
                    toast_message("Login Successful", &format!("Welcome to {portal_name}")),
                    ToastOptions::new(),
                );
                navigator().push(Route::Dashboard {});
            }
            Err(err) => {
                tracing::info!(fields = err.field_errors.len(), "sign-in rejected");
                toast.error(toast_message("Error", &err.friendly_message()), ToastOptions::new());
                field_errors.set(err.field_errors);
            }
        }
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-column",
                div { class: "auth-brand",
                    span { class: "auth-brand-icon", NavIcon { icon: IconRef::Shield, size: 32 } }
                    h1 { "{portal.branding.name}" }
                    p { "{portal.branding.subtitle}" }
                }

                Card { class: "auth-card",
                    CardHeader {
                        CardTitle { "Sign In" }
                        CardDescription { "Enter your credentials to access the portal" }
                    }
                    CardContent {
                        form { class: "auth-form", onsubmit: handle_login,
                            div { class: "auth-field",
                                Label { html_for: "user_type", "User Type" }
                                FormSelect {
                                    id: "user_type",
                                    value: role_tag(),
                                    placeholder: "Select user type",
                                    on_change: move |e: FormEvent| role_tag.set(e.value()),
                                    for role in SIGN_IN_ROLES.iter().copied() {
                                        option { key: "{role}", value: role.as_str(), {role.display_name()} }
                                    }
                                }
                                FieldError { message: error_for("role") }
                            }

                            div { class: "auth-field",
                                Label { html_for: "email", "Email" }
                                Input {
                                    id: "email",
                                    input_type: "email",
                                    placeholder: "Enter your email",
                                    value: email(),
                                    on_input: move |e: FormEvent| email.set(e.value()),
                                }
                                FieldError { message: error_for("email") }
                            }

                            div { class: "auth-field",
                                Label { html_for: "password", "Password" }
                                Input {
                                    id: "password",
                                    input_type: "password",
                                    placeholder: "Enter your password",
                                    value: password(),
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                }
                                FieldError { message: error_for("password") }
                            }

                            Button { button_type: "submit", class: "auth-submit", "Sign In" }

                            div { class: "auth-help",
                                Button { variant: ButtonVariant::Link, "Forgot Password?" }
                                p { "Need help? Contact DISH Support" }
                            }
                        }
                    }
                }

                p { class: "auth-footer", "{portal.branding.footer}" }
            }
        }
    }
}
