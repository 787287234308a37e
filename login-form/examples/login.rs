//! Login Example
//!
//! Drives a headless login form through a few typing sessions and prints
//! what a host would render after each event.
//!
//! Reads the form config from the platform config dir if present and logs
//! to the platform cache dir.

use log::LevelFilter;
use login_form::prelude::*;
use login_form::{logging, paths};

fn render(form: &LoginForm) {
    for (label, input) in [("email", form.email()), ("password", form.password())] {
        let error = if input.error_visible() {
            input.error().unwrap_or_default()
        } else {
            String::new()
        };
        let state = format!("{:?}", input.state());
        println!("  {:<9} {:<10} {}", label, state, error);
    }
    let submit = if form.submit_control().is_enabled() {
        "enabled"
    } else {
        "disabled"
    };
    println!("  submit    {}", submit);
}

fn main() {
    let log_path = paths::log_file().unwrap_or_else(|| "login.log".into());
    if let Err(e) = logging::init_file_logger(&log_path, LevelFilter::Debug) {
        eprintln!("Error: {}", e);
    }

    let config = match paths::config_file() {
        Some(path) => FormConfig::load_or_default(path),
        None => Ok(FormConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let mut form = match LoginForm::new(&config) {
        Ok(form) => form,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!("page loaded");
    form.mount();
    render(&form);

    let sessions = [
        ("a@b.c", "ab"),
        ("a@b.c", "abc"),
        ("not-an-email", "abcdef"),
    ];
    for (email, password) in sessions {
        println!("typed {:?} / {} chars", email, password.chars().count());
        form.email().set_value(email);
        form.on_email_input();
        form.password().set_value(password);
        form.on_password_input();
        render(&form);

        match form.on_submit_attempt() {
            SubmitDecision::Allow(credentials) => println!("  submit -> {:?}", credentials),
            SubmitDecision::Block => println!("  submit -> blocked"),
        }
    }

    form.reset();
    println!("reset");
    render(&form);
}
