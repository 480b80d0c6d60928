#[cfg(test)]
mod common;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod header_title_tests;

#[cfg(test)]
mod role_tests;

#[cfg(test)]
mod quick_action_tests;

#[cfg(test)]
mod login_form_tests;

#[cfg(test)]
mod registration_form_tests;

#[cfg(test)]
mod schedule_form_tests;

#[cfg(test)]
mod config_tests;
