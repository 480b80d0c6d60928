use dioxus::prelude::*;
use shared_types::{resolve, NavigationEntry, Role};

/// Who the portal is rendering for. Sign-in only picks a role; nothing is
/// authenticated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub role: Signal<Role>,
    pub email: Signal<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            role: Signal::new(Role::Guest),
            email: Signal::new(String::new()),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        (self.role)().is_recognized()
    }

    pub fn sign_in(&mut self, role: Role, email: String) {
        tracing::info!(role = %role.as_str(), "session role set");
        self.role.set(role);
        self.email.set(email);
    }

    pub fn sign_out(&mut self) {
        tracing::info!(
            role = %(self.role)().as_str(),
            "signed out, navigation back to baseline"
        );
        self.role.set(Role::Guest);
        self.email.set(String::new());
    }

    /// Name line of the header's user block.
    pub fn user_label(&self) -> String {
        user_label(&self.email.read(), (self.role)())
    }
}

/// The sign-in email, or the role's display name when there is none.
fn user_label(email: &str, role: Role) -> String {
    if email.is_empty() {
        role.display_name().to_string()
    } else {
        email.to_string()
    }
}

/// Hook to access the session.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Navigation entries for the current session role. A `Guest` session
/// resolves to the baseline list.
pub fn use_navigation() -> &'static [NavigationEntry] {
    resolve((use_session().role)())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_label_prefers_the_sign_in_email() {
        assert_eq!(user_label("officer@dish.gov.in", Role::Inspector), "officer@dish.gov.in");
    }

    #[test]
    fn user_label_falls_back_to_role_name() {
        assert_eq!(user_label("", Role::Admin), "DISH Admin");
        assert_eq!(user_label("", Role::Guest), "Guest");
    }

    #[component]
    fn SessionRoot() -> Element {
        use_context_provider(SessionState::new);
        rsx! { NavLabels {} }
    }

    #[component]
    fn NavLabels() -> Element {
        let labels: Vec<&str> = use_navigation().iter().map(|e| e.label).collect();
        let joined = labels.join(",");
        rsx! { span { "{joined}" } }
    }

    #[test]
    fn fresh_session_renders_baseline_navigation() {
        let html = dioxus_ssr::render_element(rsx! { SessionRoot {} });
        assert_eq!(html, "<span>Dashboard</span>");
    }
}
