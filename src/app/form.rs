use std::sync::OnceLock;

use regex::Regex;

use crate::api::SignupRequest;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Activity,
}

/// Selection control of the signup form. Index 0 is always the placeholder,
/// whose value is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySelect {
    options: Vec<String>,
    selected: usize,
}

impl ActivitySelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the options with `names`, in order. The control is rebuilt,
    /// so the placeholder is selected again.
    pub fn replace_options<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.options = names.into_iter().map(str::to_string).collect();
        self.selected = 0;
    }

    /// Number of entries including the placeholder.
    pub fn option_count(&self) -> usize {
        self.options.len() + 1
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    pub fn selected_value(&self) -> &str {
        self.selected_name().unwrap_or("")
    }

    pub fn select_by_name(&mut self, name: &str) -> bool {
        match self.options.iter().position(|o| o == name) {
            Some(i) => {
                self.selected = i + 1;
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.option_count();
    }

    pub fn select_prev(&mut self) {
        self.selected = if self.selected == 0 {
            self.option_count() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingEmail,
    InvalidEmail,
    MissingActivity,
}

impl FormError {
    pub fn hint(&self) -> &'static str {
        match self {
            FormError::MissingEmail => "Please enter your email.",
            FormError::InvalidEmail => "Please enter a valid email address.",
            FormError::MissingActivity => "Please select an activity.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub active_field: FormField,
    pub validation: Option<FormError>,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            active_field: FormField::Email,
            validation: None,
        }
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Email => FormField::Activity,
            FormField::Activity => FormField::Email,
        };
    }

    pub fn prev_field(&mut self) {
        self.next_field();
    }

    /// Checks the required fields and builds the request to send.
    pub fn build_request(&self, select: &ActivitySelect) -> Result<SignupRequest, FormError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        let activity = select.selected_name().ok_or(FormError::MissingActivity)?;

        Ok(SignupRequest {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.validation = None;
        self.active_field = FormField::Email;
    }
}

fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let pattern = EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+$").expect("invalid email regex")
    });
    pattern.is_match(email)
}
