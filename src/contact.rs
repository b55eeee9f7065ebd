//! Client-side contact form. Submissions never leave the page.

use crate::content::FORM_ACK_MESSAGE;
use crate::foundation::error::{PageError, PageResult};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Local acknowledgment shown after a submission.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Acknowledgment {
    /// 1-based submission counter within the page view.
    pub seq: u32,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SubmitOutcome {
    /// The host's default navigation was suppressed.
    pub default_prevented: bool,
    pub ack: Acknowledgment,
}

impl ContactForm {
    /// Checks the browser would run before firing submit: name and email are required, and
    /// email must look like `local@domain`.
    pub fn validate(&self) -> PageResult<()> {
        if self.name.trim().is_empty() {
            return Err(PageError::validation("name is required"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(PageError::validation("email is required"));
        }
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
            _ => {
                return Err(PageError::validation(format!(
                    "'{email}' is not a valid email address"
                )));
            }
        }
        Ok(())
    }
}

/// Submission counter for one page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDesk {
    acknowledged: u32,
}

impl ContactDesk {
    pub fn submit(&mut self, form: &ContactForm) -> PageResult<SubmitOutcome> {
        form.validate()?;
        self.acknowledged += 1;
        tracing::debug!(seq = self.acknowledged, "contact form acknowledged");
        Ok(SubmitOutcome {
            default_prevented: true,
            ack: Acknowledgment {
                seq: self.acknowledged,
                message: FORM_ACK_MESSAGE,
            },
        })
    }

    pub fn acknowledged(&self) -> u32 {
        self.acknowledged
    }
}

#[cfg(test)]
#[path = "../tests/unit/contact.rs"]
mod tests;
