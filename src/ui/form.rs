//! Field helpers shared by every form.
//!
//! A field that already has a value (from a command-line flag) is used as is;
//! otherwise the prompter is asked. Required text left blank is not rejected
//! here: the DTO's validation rules report it with the field's own message.

use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use tutordesk_core::{AppError, ErrorKind};
use tutordesk_models::{Branch, PaymentType, SessionStatus, SubscriptionStatus, YearTarget};
use validator::Validate;

use crate::ui::prompt::Prompter;

/// An enum the user picks from a list.
pub trait Choice: Copy + PartialEq + 'static {
    fn options() -> &'static [Self];
    fn label(self) -> &'static str;
}

macro_rules! impl_choice {
    ($($ty:ty),+) => {
        $(
            impl Choice for $ty {
                fn options() -> &'static [Self] {
                    <$ty>::ALL
                }

                fn label(self) -> &'static str {
                    <$ty>::label(self)
                }
            }
        )+
    };
}

impl_choice!(YearTarget, Branch, SessionStatus, PaymentType, SubscriptionStatus);

const NONE_OPTION: &str = "بدون";

pub struct FormInput<'a> {
    prompter: &'a mut dyn Prompter,
}

impl<'a> FormInput<'a> {
    pub fn new(prompter: &'a mut dyn Prompter) -> Self {
        Self { prompter }
    }

    pub fn text(&mut self, label: &str, value: Option<String>) -> Result<String, AppError> {
        match value {
            Some(v) => Ok(v.trim().to_string()),
            None => Ok(self.prompter.text(label, None)?.trim().to_string()),
        }
    }

    pub fn optional_text(
        &mut self,
        label: &str,
        value: Option<String>,
    ) -> Result<Option<String>, AppError> {
        match value {
            Some(v) => Ok(Some(v.trim().to_string()).filter(|v| !v.is_empty())),
            None => self.prompter.optional_text(label),
        }
    }

    pub fn number<T: FromStr>(&mut self, label: &str, value: Option<T>) -> Result<T, AppError> {
        match value {
            Some(v) => Ok(v),
            None => {
                let raw = self.prompter.text(label, None)?;
                parse_field(label, &raw)
            }
        }
    }

    pub fn optional_number<T: FromStr>(
        &mut self,
        label: &str,
        value: Option<T>,
    ) -> Result<Option<T>, AppError> {
        if value.is_some() {
            return Ok(value);
        }
        match self.prompter.optional_text(label)? {
            Some(raw) => parse_field(label, &raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn timestamp(
        &mut self,
        label: &str,
        value: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, AppError> {
        if let Some(v) = value {
            return Ok(v);
        }
        let raw = self.prompter.text(label, None)?;
        parse_datetime(&raw).ok_or_else(|| invalid(label))
    }

    pub fn choose<E: Choice>(
        &mut self,
        label: &str,
        value: Option<E>,
        default: E,
    ) -> Result<E, AppError> {
        if let Some(v) = value {
            return Ok(v);
        }
        let options = E::options();
        let labels: Vec<&str> = options.iter().map(|o| o.label()).collect();
        let start = options.iter().position(|o| *o == default).unwrap_or(0);
        let idx = self.prompter.select(label, &labels, start)?;
        options.get(idx).copied().ok_or_else(|| invalid(label))
    }

    /// Like [`choose`](Self::choose) with an extra leading "none" entry.
    pub fn choose_optional<E: Choice>(
        &mut self,
        label: &str,
        value: Option<E>,
    ) -> Result<Option<E>, AppError> {
        if value.is_some() {
            return Ok(value);
        }
        let options = E::options();
        let labels: Vec<&str> = std::iter::once(NONE_OPTION)
            .chain(options.iter().map(|o| o.label()))
            .collect();
        match self.prompter.select(label, &labels, 0)? {
            0 => Ok(None),
            idx => options.get(idx - 1).copied().map(Some).ok_or_else(|| invalid(label)),
        }
    }

    pub fn choose_many<E: Choice>(&mut self, label: &str, value: Vec<E>) -> Result<Vec<E>, AppError> {
        if !value.is_empty() {
            return Ok(value);
        }
        let options = E::options();
        let labels: Vec<&str> = options.iter().map(|o| o.label()).collect();
        self.prompter
            .multi_select(label, &labels)?
            .into_iter()
            .map(|idx| options.get(idx).copied().ok_or_else(|| invalid(label)))
            .collect()
    }
}

/// Runs the DTO's validation rules.
pub fn validated<D: Validate>(dto: D) -> Result<D, AppError> {
    dto.validate().map_err(|e| AppError::validation(&e))?;
    Ok(dto)
}

fn invalid(label: &str) -> AppError {
    AppError::new(ErrorKind::Validation, anyhow!("invalid value for {}", label))
        .with_user_message(format!("قيمة غير صالحة في حقل {}", label))
}

fn parse_field<T: FromStr>(label: &str, raw: &str) -> Result<T, AppError> {
    raw.trim().parse().map_err(|_| invalid(label))
}

/// Accepts the backend's timestamp formats plus `YYYY-MM-DD HH:MM`.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    tutordesk_core::serde::parse_timestamp(raw).or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
            .ok()
            .map(|dt| dt.and_utc())
    })
}
