// src/models/onboarding.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{config::WIZARD_TOTAL_STEPS, data, error::AppError, models::profile::UserProfile};

/// DTO for wizard step 1 (basic information).
#[derive(Debug, Deserialize, Validate)]
pub struct Step1Input {
    #[validate(length(max = 100), custom(function = validate_trimmed_name))]
    pub name: String,
}

/// A name consisting only of whitespace does not count as filled in.
fn validate_trimmed_name(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        return Err(validator::ValidationError::new("name_cannot_be_blank"));
    }
    Ok(())
}

/// DTO for wizard step 2 (date of birth and region).
#[derive(Debug, Deserialize, Validate)]
pub struct Step2Input {
    #[validate(custom(function = validate_iso_date))]
    pub date_of_birth: String,
    #[validate(custom(function = validate_region_code))]
    pub state: String,
}

fn validate_iso_date(value: &str) -> Result<(), validator::ValidationError> {
    if chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err(validator::ValidationError::new("invalid_date"));
    }
    Ok(())
}

/// The select element of the original form only offered known regions; a
/// typed API has to enforce the same set.
fn validate_region_code(code: &str) -> Result<(), validator::ValidationError> {
    if data::region_name(code).is_none() {
        return Err(validator::ValidationError::new("unknown_region_code"));
    }
    Ok(())
}

/// DTO for wizard step 3 (existing document flags). All optional.
#[derive(Debug, Default, Deserialize)]
pub struct Step3Input {
    #[serde(default)]
    pub has_aadhaar: bool,
    #[serde(default)]
    pub has_pan: bool,
    #[serde(default)]
    pub has_voter_id: bool,
}

/// Collected form buffer. Values survive back-navigation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WizardForm {
    pub name: String,
    pub date_of_birth: String,
    pub state: String,
    pub has_aadhaar: bool,
    pub has_pan: bool,
    pub has_voter_id: bool,
}

/// The three-step onboarding state machine.
///
/// Step inputs are validated before they are applied, so a committed step is
/// always a valid one; submitting an invalid step never advances. The wizard
/// emits the completed profile but does not persist it; persistence is the
/// caller's responsibility.
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    step: u8,
    form: WizardForm,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self {
            step: 1,
            form: WizardForm::default(),
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn total_steps(&self) -> u8 {
        WIZARD_TOTAL_STEPS
    }

    pub fn form(&self) -> &WizardForm {
        &self.form
    }

    /// "Previous" is disabled on the first step.
    pub fn can_go_previous(&self) -> bool {
        self.step > 1
    }

    /// Label of the forward action; switches on the final step.
    pub fn action_label(&self) -> &'static str {
        if self.step == WIZARD_TOTAL_STEPS {
            "Complete"
        } else {
            "Next"
        }
    }

    fn expect_step(&self, step: u8) -> Result<(), AppError> {
        if self.step != step {
            return Err(AppError::Conflict(format!(
                "Wizard is on step {}, not step {}",
                self.step, step
            )));
        }
        Ok(())
    }

    /// Applies step 1 and advances. The input must already be validated.
    pub fn submit_step1(&mut self, input: Step1Input) -> Result<(), AppError> {
        self.expect_step(1)?;
        self.form.name = input.name;
        self.step = 2;
        Ok(())
    }

    /// Applies step 2 and advances.
    pub fn submit_step2(&mut self, input: Step2Input) -> Result<(), AppError> {
        self.expect_step(2)?;
        self.form.date_of_birth = input.date_of_birth;
        self.form.state = input.state;
        self.step = 3;
        Ok(())
    }

    /// Applies the final step and emits the completed profile.
    pub fn submit_step3(&mut self, input: Step3Input) -> Result<UserProfile, AppError> {
        self.expect_step(3)?;
        self.form.has_aadhaar = input.has_aadhaar;
        self.form.has_pan = input.has_pan;
        self.form.has_voter_id = input.has_voter_id;

        Ok(UserProfile {
            name: self.form.name.clone(),
            date_of_birth: self.form.date_of_birth.clone(),
            state: self.form.state.clone(),
            has_aadhaar: self.form.has_aadhaar,
            has_pan: self.form.has_pan,
            has_voter_id: self.form.has_voter_id,
            completed_onboarding: true,
        })
    }

    pub fn previous(&mut self) -> Result<u8, AppError> {
        if !self.can_go_previous() {
            return Err(AppError::Conflict("Already on the first step".to_string()));
        }
        self.step -= 1;
        Ok(self.step)
    }
}
