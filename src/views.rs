//! View rendering: named minijinja templates compiled into the binary,
//! mapping a serializable context to an HTML document.

use anyhow::{Context, Result};
use minijinja::Environment;
use serde::Serialize;

pub const HOME_MESSAGE: &str = "Welcome to the Hospital Management System!";

pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("home", include_str!("../templates/home.html"))
            .context("failed to compile home template")?;
        env.add_template("patients", include_str!("../templates/patients.html"))
            .context("failed to compile patients template")?;
        env.add_template("providers", include_str!("../templates/providers.html"))
            .context("failed to compile providers template")?;
        Ok(Self { env })
    }

    /// Render a named template with the given context.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        let tmpl = self
            .env
            .get_template(name)
            .with_context(|| format!("unknown template {name}"))?;
        tmpl.render(ctx)
            .with_context(|| format!("failed to render template {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Patient, Provider};
    use minijinja::context;

    fn patient(id: i32, first: &str, last: &str) -> Patient {
        Patient {
            patient_id: id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(1984, 7, 2),
            gender: Some("F".to_string()),
            language: None,
        }
    }

    #[test]
    fn home_contains_welcome_message() {
        let views = Views::new().unwrap();
        let html = views
            .render("home", context! { message => HOME_MESSAGE })
            .unwrap();
        assert!(html.contains(HOME_MESSAGE));
    }

    #[test]
    fn patients_renders_every_row() {
        let views = Views::new().unwrap();
        let results = vec![patient(1, "Johanna", "Reyes"), patient(2, "Jose", "Mora")];
        let html = views.render("patients", context! { results }).unwrap();
        assert!(html.contains("Johanna"));
        assert!(html.contains("Reyes"));
        assert!(html.contains("Jose"));
        assert!(html.contains("1984-07-02"));
    }

    #[test]
    fn patients_renders_empty_result_set() {
        let views = Views::new().unwrap();
        let results: Vec<Patient> = Vec::new();
        let html = views.render("patients", context! { results }).unwrap();
        assert!(html.contains("<table"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn providers_renders_specialty_column() {
        let views = Views::new().unwrap();
        let results = vec![Provider {
            provider_id: 7,
            first_name: "Alice".to_string(),
            last_name: "Nguyen".to_string(),
            provider_specialty: "Cardiology".to_string(),
            email_address: Some("alice@example.com".to_string()),
            phone_number: None,
            date_joined: None,
        }];
        let html = views.render("providers", context! { results }).unwrap();
        assert!(html.contains("Cardiology"));
        assert!(html.contains("alice@example.com"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let views = Views::new().unwrap();
        let results = vec![patient(1, "Johanna", "Reyes")];
        let a = views.render("patients", context! { results => results.clone() }).unwrap();
        let b = views.render("patients", context! { results }).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_template_is_an_error() {
        let views = Views::new().unwrap();
        assert!(views.render("nope", context! {}).is_err());
    }
}
