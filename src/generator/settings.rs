use super::SettingsError;
use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Parameter record for the downstream solve routine.
///
/// The generator does not solve anything itself; it hands this record,
/// together with the problem data and cone structure, to whatever
/// operator-splitting solver consumes the instance.  Defaults follow the
/// values conventionally used for randomly generated feasible test
/// problems.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveSettings<T: FloatT> {
    ///maximum number of iterations
    #[builder(default = "2500")]
    pub max_iters: u32,

    ///convergence tolerance
    #[builder(default = "(1e-3).as_T()")]
    pub eps: T,

    ///over-relaxation parameter, in (0, 2)
    #[builder(default = "(1.8).as_T()")]
    pub alpha: T,

    ///scaling of the equality constraint block of the iteration
    #[builder(default = "(1e-3).as_T()")]
    pub rho_x: T,

    ///rescaling factor applied when normalization is enabled
    #[builder(default = "(5.0).as_T()")]
    pub scale: T,

    ///tolerance decay exponent for an indirect linear subsolver,
    ///where the subsolve tolerance falls like (1/iter)^cg_rate
    #[builder(default = "(2.0).as_T()")]
    pub cg_rate: T,

    ///verbose printing
    #[builder(default = "true")]
    pub verbose: bool,

    ///heuristic data rescaling
    #[builder(default = "true")]
    pub normalize: bool,

    ///warm start from caller-supplied primal/dual guesses
    #[builder(default = "false")]
    pub warm_start: bool,
}

impl<T> Default for SolveSettings<T>
where
    T: FloatT,
{
    fn default() -> SolveSettings<T> {
        SolveSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> SolveSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings hold admissible values.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_iters == 0 {
            return Err(SettingsError::BadFieldValue("max_iters"));
        }
        validate_positive(self.eps, "eps")?;
        validate_alpha(self.alpha)?;
        validate_positive(self.rho_x, "rho_x")?;
        validate_positive(self.scale, "scale")?;
        validate_positive(self.cg_rate, "cg_rate")?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SolveSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SolveSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> SolveSettingsBuilder<T>
where
    T: FloatT,
{
    /// check that any explicitly assigned field is admissible
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(max_iters) = self.max_iters {
            if max_iters == 0 {
                return Err(SettingsError::BadFieldValue("max_iters"));
            }
        }
        if let Some(eps) = self.eps {
            validate_positive(eps, "eps")?;
        }
        if let Some(alpha) = self.alpha {
            validate_alpha(alpha)?;
        }
        if let Some(rho_x) = self.rho_x {
            validate_positive(rho_x, "rho_x")?;
        }
        if let Some(scale) = self.scale {
            validate_positive(scale, "scale")?;
        }
        if let Some(cg_rate) = self.cg_rate {
            validate_positive(cg_rate, "cg_rate")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_positive<T: FloatT>(v: T, field: &'static str) -> Result<(), SettingsError> {
    if v > T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}

// relaxation requires alpha strictly between 0 and 2
fn validate_alpha<T: FloatT>(alpha: T) -> Result<(), SettingsError> {
    if alpha > T::zero() && alpha < (2.0).as_T() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("alpha"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = SolveSettingsBuilder::<f64>::default().build().unwrap();
    assert_eq!(settings.max_iters, 2500);
    assert_eq!(settings.eps, 1e-3);
    assert_eq!(settings.alpha, 1.8);
    assert_eq!(settings.rho_x, 1e-3);
    assert_eq!(settings.scale, 5.0);
    assert_eq!(settings.cg_rate, 2.0);
    assert!(settings.verbose);
    assert!(settings.normalize);
    assert!(!settings.warm_start);

    // fail on a relaxation parameter outside (0,2)
    assert!(SolveSettingsBuilder::<f64>::default()
        .alpha(2.5)
        .build()
        .is_err());

    // fail on a zero iteration cap
    assert!(SolveSettingsBuilder::<f64>::default()
        .max_iters(0)
        .build()
        .is_err());

    // directly construct bad settings and manually check
    let settings = SolveSettings::<f64> {
        eps: 0.0,
        ..SolveSettings::default()
    };
    assert!(settings.validate().is_err());
}
