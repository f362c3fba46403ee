//! Credential form state.

use route53_scanner_provider::ScanCredentials;

/// The three form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    AccessKeyId,
    SecretAccessKey,
    Region,
}

impl FormField {
    /// Focus order, wrapping at the end.
    pub fn next(self) -> Self {
        match self {
            Self::AccessKeyId => Self::SecretAccessKey,
            Self::SecretAccessKey => Self::Region,
            Self::Region => Self::AccessKeyId,
        }
    }

    /// Focus order, wrapping at the start.
    pub fn prev(self) -> Self {
        match self {
            Self::AccessKeyId => Self::Region,
            Self::SecretAccessKey => Self::AccessKeyId,
            Self::Region => Self::SecretAccessKey,
        }
    }
}

/// Credential form state.
///
/// The region is a fixed single-option selector, so text editing only
/// applies to the two key fields.
pub struct FormState {
    /// Current field values.
    pub credentials: ScanCredentials,

    /// Which field has focus.
    pub focus: FormField,

    /// Whether the secret key renders in the clear.
    pub show_secrets: bool,

    /// Inline validation error, shown under the fields.
    pub error: Option<String>,
}

impl FormState {
    /// Empty form with the default region and focus on the first field.
    pub fn new() -> Self {
        Self {
            credentials: ScanCredentials::empty(),
            focus: FormField::AccessKeyId,
            show_secrets: false,
            error: None,
        }
    }

    /// Moves focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Toggles secret-key visibility.
    pub fn toggle_secrets(&mut self) {
        self.show_secrets = !self.show_secrets;
    }

    /// Types a character into the focused field. The region selector does
    /// not accept text.
    pub fn input(&mut self, ch: char) {
        match self.focus {
            FormField::AccessKeyId => self.credentials.access_key_id.push(ch),
            FormField::SecretAccessKey => self.credentials.secret_access_key.push(ch),
            FormField::Region => return,
        }
        self.error = None;
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::AccessKeyId => {
                self.credentials.access_key_id.pop();
            }
            FormField::SecretAccessKey => {
                self.credentials.secret_access_key.pop();
            }
            FormField::Region => {}
        }
    }

    /// Validates the form and hands back a value copy of the credentials.
    ///
    /// Empty fields reject the submission with an inline error instead.
    pub fn submit(&mut self) -> Option<ScanCredentials> {
        if self.credentials.is_complete() {
            self.error = None;
            Some(self.credentials.clone())
        } else {
            self.error = Some("Please fill in all fields".to_string());
            None
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use route53_scanner_provider::ScanCredentials;

    use super::*;

    fn filled_form() -> FormState {
        let mut form = FormState::new();
        form.focus = FormField::AccessKeyId;
        for ch in "AKIAEXAMPLE".chars() {
            form.input(ch);
        }
        form.focus = FormField::SecretAccessKey;
        for ch in "secret".chars() {
            form.input(ch);
        }
        form
    }

    #[test]
    fn focus_cycles_forward_and_back() {
        let mut form = FormState::new();
        assert_eq!(form.focus, FormField::AccessKeyId);
        form.focus_next();
        assert_eq!(form.focus, FormField::SecretAccessKey);
        form.focus_next();
        assert_eq!(form.focus, FormField::Region);
        form.focus_next();
        assert_eq!(form.focus, FormField::AccessKeyId);
        form.focus_prev();
        assert_eq!(form.focus, FormField::Region);
    }

    #[test]
    fn input_edits_focused_field_only() {
        let mut form = FormState::new();
        form.input('A');
        form.focus_next();
        form.input('s');
        assert_eq!(form.credentials.access_key_id, "A");
        assert_eq!(form.credentials.secret_access_key, "s");
    }

    #[test]
    fn region_rejects_text_input() {
        let mut form = FormState::new();
        form.focus = FormField::Region;
        form.input('x');
        form.backspace();
        assert_eq!(form.credentials.region, ScanCredentials::DEFAULT_REGION);
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut form = filled_form();
        form.focus = FormField::AccessKeyId;
        form.backspace();
        assert_eq!(form.credentials.access_key_id, "AKIAEXAMPL");
    }

    #[test]
    fn submit_returns_value_copy_when_complete() {
        let mut form = filled_form();
        let credentials = form.submit().unwrap();
        assert_eq!(credentials.access_key_id, "AKIAEXAMPLE");
        assert_eq!(credentials.secret_access_key, "secret");
        assert_eq!(credentials.region, ScanCredentials::DEFAULT_REGION);
        assert!(form.error.is_none());

        // the form keeps its own values
        assert_eq!(form.credentials, credentials);
    }

    #[test]
    fn submit_rejects_empty_fields_with_inline_error() {
        let mut form = FormState::new();
        assert!(form.submit().is_none());
        assert_eq!(form.error.as_deref(), Some("Please fill in all fields"));
    }

    #[test]
    fn typing_clears_inline_error() {
        let mut form = FormState::new();
        let _ = form.submit();
        assert!(form.error.is_some());
        form.input('A');
        assert!(form.error.is_none());
    }

    #[test]
    fn toggle_secrets_flips() {
        let mut form = FormState::new();
        assert!(!form.show_secrets);
        form.toggle_secrets();
        assert!(form.show_secrets);
        form.toggle_secrets();
        assert!(!form.show_secrets);
    }
}
