// ABOUTME: Registration page with client-side constraints declared on each input
// ABOUTME: UI only: the form has no action and nothing on the server accepts submissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

use super::layout::{link, logo, page};
use crate::config::site::ImageConfig;
use crate::constants::{registration, routes};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

/// A text-like input on the registration form
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    /// `id` and `name` attribute
    pub name: &'static str,
    pub label: &'static str,
    /// HTML input type
    pub input_type: &'static str,
    pub required: bool,
    pub min_length: Option<u32>,
    pub placeholder: &'static str,
    /// Helper text under the input
    pub hint: Option<&'static str>,
}

/// Inputs in display order
pub const REGISTRATION_FIELDS: &[FormField] = &[
    FormField {
        name: "name",
        label: "Name",
        input_type: "text",
        required: true,
        min_length: None,
        placeholder: "John Doe",
        hint: None,
    },
    FormField {
        name: "email",
        label: "Email",
        input_type: "email",
        required: true,
        min_length: None,
        placeholder: "you@example.com",
        hint: None,
    },
    FormField {
        name: "password",
        label: "Password",
        input_type: "password",
        required: true,
        min_length: Some(registration::MIN_PASSWORD_LENGTH),
        placeholder: "••••••••",
        hint: Some("Must be at least 8 characters"),
    },
    FormField {
        name: "confirmPassword",
        label: "Confirm Password",
        input_type: "password",
        required: true,
        min_length: None,
        placeholder: "••••••••",
        hint: None,
    },
];

/// Name of the terms-of-service checkbox
pub const TERMS_FIELD: &str = "terms";

impl FormField {
    fn render(&self) -> String {
        let name = encode_double_quoted_attribute(self.name);
        let mut input = format!(
            r#"<input id="{name}" type="{}" name="{name}" placeholder="{}""#,
            self.input_type,
            encode_double_quoted_attribute(self.placeholder),
        );
        if self.required {
            input.push_str(" required");
        }
        if let Some(min) = self.min_length {
            let _ = write!(input, r#" minlength="{min}""#);
        }
        input.push('>');

        let hint = self
            .hint
            .map(|h| format!(r#"<p class="hint">{}</p>"#, encode_text(h)))
            .unwrap_or_default();

        format!(
            r#"                <div class="field">
                    <label for="{name}">{}</label>
                    {input}
                    {hint}
                </div>
"#,
            encode_text(self.label),
        )
    }
}

fn terms_checkbox() -> String {
    format!(
        r#"                <div class="checkbox">
                    <input id="{TERMS_FIELD}" type="checkbox" name="{TERMS_FIELD}" required>
                    <label for="{TERMS_FIELD}">I agree to the {terms} and {privacy}</label>
                </div>
"#,
        terms = link(routes::TERMS, "link", "Terms of Service"),
        privacy = link(routes::PRIVACY, "link", "Privacy Policy"),
    )
}

/// Render the registration page
#[must_use]
pub fn render(images: &ImageConfig) -> String {
    let fields: String = REGISTRATION_FIELDS.iter().map(FormField::render).collect();

    let body = format!(
        r#"        <div class="column">
            <div class="center">
                {logo}
                <h2>Create an account</h2>
                <p class="muted">Start tracking your fitness journey</p>
            </div>
            <div class="card">
                <form>
{fields}{terms}                <button type="submit" class="button primary">Create Account</button>
                </form>
                <p class="center subtle">Already have an account? {sign_in}</p>
            </div>
            <p class="center">{home}</p>
        </div>"#,
        logo = logo(images, true),
        terms = terms_checkbox(),
        sign_in = link(routes::LOGIN, "link", "Sign in"),
        home = link(routes::HOME, "subtle", "← Back to home"),
    );
    page("Create an account - Gym Journal", &body)
}
