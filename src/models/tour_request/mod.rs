// Tour request module
// Parent form that consumes calendar selections and gates submission

use crate::models::booking::Selection;
use thiserror::Error;

/// Reasons a tour request cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourRequestError {
    #[error("Pick a day and a time period before requesting a tour")]
    MissingSelection,
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Enter a valid email address")]
    InvalidEmail,
}

/// A validated request ready to hand to the booking endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourRequest {
    pub name: String,
    pub email: String,
    pub message: Option<String>,
    pub slot: Selection,
}

/// Editable form state. `selection` mirrors the latest `on_select` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourRequestForm {
    pub name: String,
    pub email: String,
    pub message: String,
    selection: Option<Selection>,
}

impl TourRequestForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the calendar's latest confirmed slot.
    pub fn on_select(&mut self, selection: Selection) {
        self.selection = Some(selection);
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Submit stays disabled until a slot is confirmed and contact details are present.
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), TourRequestError> {
        if self.selection.is_none() {
            return Err(TourRequestError::MissingSelection);
        }
        if self.name.trim().is_empty() {
            return Err(TourRequestError::EmptyName);
        }
        if !is_plausible_email(&self.email) {
            return Err(TourRequestError::InvalidEmail);
        }
        Ok(())
    }

    /// Build the request and reset the form for the next visitor.
    pub fn submit(&mut self) -> Result<TourRequest, TourRequestError> {
        self.validate()?;
        let slot = self.selection.ok_or(TourRequestError::MissingSelection)?;
        let message = self.message.trim();
        let request = TourRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
            slot,
        };
        self.reset();
        Ok(request)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
