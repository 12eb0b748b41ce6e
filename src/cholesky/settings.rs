use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
    /// An unrecognized dense backend name
    #[error("Unknown dense backend \"{0}\"")]
    UnknownBackend(String),
}

/// Settings for an [`AdaptiveCholesky`](crate::cholesky::AdaptiveCholesky) factor.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CholeskySettings<T: FloatT> {
    ///fraction of the pre-step size below which a deleted point is
    ///moved to the front of the factor rather than to the back
    #[builder(default = "(0.1).as_T()")]
    pub coarsening_threshold: T,

    ///dense backend for full decompositions and inverses ("auto", "native" or "lapack")
    #[builder(default = r#""auto".to_string()"#)]
    pub dense_backend: String,

    ///log step summaries and timings
    #[builder(default = "false")]
    pub verbose: bool,
}

impl<T> Default for CholeskySettings<T>
where
    T: FloatT,
{
    fn default() -> CholeskySettings<T> {
        CholeskySettings {
            coarsening_threshold: (0.1).as_T(),
            dense_backend: "auto".to_string(),
            verbose: false,
        }
    }
}

impl<T> CholeskySettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid, i.e. that the backend name
    /// is recognized and the threshold lies in `[0,1]`.  It does not
    /// check that the chosen backend is compiled in.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_coarsening_threshold(self.coarsening_threshold)?;
        validate_dense_backend(&self.dense_backend)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for CholeskySettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        CholeskySettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> CholeskySettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(threshold) = self.coarsening_threshold {
            validate_coarsening_threshold(threshold)?;
        }
        if let Some(ref dense_backend) = self.dense_backend {
            validate_dense_backend(dense_backend)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_coarsening_threshold<T: FloatT>(threshold: T) -> Result<(), SettingsError> {
    // also rejects NaN
    if threshold >= T::zero() && threshold <= T::one() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("coarsening_threshold"))
    }
}

fn validate_dense_backend(dense_backend: &str) -> Result<(), SettingsError> {
    match dense_backend {
        "auto" | "native" | "lapack" => Ok(()),
        _ => Err(SettingsError::UnknownBackend(dense_backend.to_string())),
    }
}

#[test]
fn test_settings_validate() {
    let settings = CholeskySettingsBuilder::<f64>::default()
        .coarsening_threshold(0.25)
        .build()
        .unwrap();
    assert_eq!(settings.coarsening_threshold, 0.25);
    assert_eq!(settings.dense_backend, "auto");
    assert!(!settings.verbose);

    // builder defaults agree with Default
    let settings = CholeskySettingsBuilder::<f64>::default().build().unwrap();
    assert_eq!(settings, CholeskySettings::default());

    assert!(CholeskySettingsBuilder::<f64>::default()
        .coarsening_threshold(1.5)
        .build()
        .is_err());

    assert!(CholeskySettingsBuilder::<f64>::default()
        .coarsening_threshold(f64::NAN)
        .build()
        .is_err());

    assert!(CholeskySettingsBuilder::<f64>::default()
        .dense_backend("cusolver".to_string())
        .build()
        .is_err());

    // direct mutation bypasses the builder but is caught by validate
    let mut settings = CholeskySettings::<f64>::default();
    settings.dense_backend = "cholmod".to_string();
    assert_eq!(
        settings.validate(),
        Err(SettingsError::UnknownBackend("cholmod".to_string()))
    );
}
