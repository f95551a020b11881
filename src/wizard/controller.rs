// ============================================================================
// WIZARD CONTROLLER - Bounded step index, gated progression, one submission
// ============================================================================

use std::marker::PhantomData;

use crate::errors::{FormError, ValidationError};
use crate::wizard::fields::{FieldValue, FormFields};

/// Static description of one multi-step form
pub trait WizardFlow {
    const NAME: &'static str;
    const TOTAL_STEPS: usize;

    fn initial_fields() -> FormFields;

    fn step_label(step: usize) -> &'static str;

    /// Inputs rendered on `step` for the current field values
    fn visible_fields(step: usize, fields: &FormFields) -> Vec<&'static str>;

    /// Subset of the visible inputs carrying a `required` check
    fn required_fields(step: usize, fields: &FormFields) -> Vec<&'static str>;

    /// Fixed option lists for select-style inputs
    fn choices() -> Vec<(&'static str, Vec<String>)> {
        Vec::new()
    }

    /// Gate for leaving `step` forward
    fn validate_step(_step: usize, _fields: &FormFields) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Checks on the data the submission request needs
    fn validate_submission(_fields: &FormFields) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

pub struct Wizard<F: WizardFlow> {
    step: usize,
    fields: FormFields,
    submission: SubmissionState,
    flow: PhantomData<F>,
}

impl<F: WizardFlow> Wizard<F> {
    pub fn new() -> Self {
        Self {
            step: 1,
            fields: F::initial_fields(),
            submission: SubmissionState::Idle,
            flow: PhantomData,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        F::TOTAL_STEPS
    }

    pub fn is_final_step(&self) -> bool {
        self.step == F::TOTAL_STEPS
    }

    pub fn step_label(&self) -> &'static str {
        F::step_label(self.step)
    }

    pub fn step_labels(&self) -> Vec<&'static str> {
        (1..=F::TOTAL_STEPS).map(F::step_label).collect()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.fields.set(name, value);
    }

    pub fn visible_fields(&self) -> Vec<&'static str> {
        F::visible_fields(self.step, &self.fields)
    }

    pub fn choices(&self) -> Vec<(&'static str, Vec<String>)> {
        F::choices()
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Advance one step if the current step validates. Stays put on
    /// failure and at the last step.
    pub fn go_next(&mut self) -> Result<usize, ValidationError> {
        if let Err(e) = F::validate_step(self.step, &self.fields) {
            log::warn!("⚠️ [{}] Step {} blocked: {}", F::NAME, self.step, e);
            return Err(e);
        }
        if self.step < F::TOTAL_STEPS {
            self.step += 1;
            log::debug!("➡️ [{}] Step {}/{}", F::NAME, self.step, F::TOTAL_STEPS);
        }
        Ok(self.step)
    }

    /// Go back one step; never validated, clamped at 1
    pub fn go_back(&mut self) -> usize {
        if self.step > 1 {
            self.step -= 1;
            log::debug!("⬅️ [{}] Step {}/{}", F::NAME, self.step, F::TOTAL_STEPS);
        }
        self.step
    }

    /// Required inputs on the current step, for the renderer
    pub fn required_fields(&self) -> Vec<&'static str> {
        F::required_fields(self.step, &self.fields)
    }

    /// Enter `Submitting` and hand out the fields for the request.
    /// Required inputs of every step are checked, earlier steps first.
    /// Validation problems are returned without touching the submission
    /// state, so no request is ever made for invalid input.
    pub fn begin_submit(&mut self) -> Result<FormFields, FormError> {
        if !self.is_final_step() {
            return Err(FormError::NotOnFinalStep);
        }
        if self.submission == SubmissionState::Submitting {
            return Err(FormError::AlreadySubmitting);
        }

        let missing = (1..=F::TOTAL_STEPS)
            .flat_map(|step| F::required_fields(step, &self.fields))
            .find(|name| !self.fields.is_filled(name));
        if let Some(name) = missing {
            log::warn!("⚠️ [{}] Missing required field: {}", F::NAME, name);
            return Err(ValidationError::MissingField(name).into());
        }
        if let Err(e) = F::validate_submission(&self.fields) {
            log::warn!("⚠️ [{}] Submission blocked: {}", F::NAME, e);
            return Err(e.into());
        }

        log::info!("📤 [{}] Submitting", F::NAME);
        self.submission = SubmissionState::Submitting;
        Ok(self.fields.clone())
    }

    /// Record the outcome of the request started by `begin_submit`.
    /// The step index is left alone so a failed form can be edited and
    /// resubmitted.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.submission = match outcome {
            Ok(()) => {
                log::info!("✅ [{}] Submission succeeded", F::NAME);
                SubmissionState::Succeeded
            }
            Err(message) => {
                log::error!("❌ [{}] Submission failed: {}", F::NAME, message);
                SubmissionState::Failed(message)
            }
        };
    }
}

impl<F: WizardFlow> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}
