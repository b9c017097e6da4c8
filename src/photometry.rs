//! Flux and magnitude conversions
//!
//! Raw fluxes (`dn`) are calibrated against the raw flux of a zero-magnitude
//! object (`flux_mag0`). Every function returns `None` instead of a value
//! when an input is NaN or infinite, when an input is outside its domain,
//! or when the result would not be finite.

/// Flux of an AB magnitude zero object, in erg/cm²/s/Hz
pub const AB_FLUX_SCALE: f64 = 3.630_780_547_701_013e-20;

/// `2.5 / ln(10)`, the derivative scale of `-2.5·log10(x)`
const FIVE_OVER_2LOG10: f64 = 1.085_736_204_758_129_6;

/// Convert a raw flux to a calibrated flux in erg/cm²/s/Hz
///
/// Returns `None` if `flux_mag0` is not positive.
pub fn dn_to_flux(dn: f64, flux_mag0: f64) -> Option<f64> {
    if !all_finite(&[dn, flux_mag0]) || flux_mag0 <= 0.0 {
        return None;
    }
    finite(AB_FLUX_SCALE * dn / flux_mag0)
}

/// Convert a raw flux to an AB magnitude
///
/// Returns `None` if `dn` or `flux_mag0` is not positive.
pub fn dn_to_ab_mag(dn: f64, flux_mag0: f64) -> Option<f64> {
    if !all_finite(&[dn, flux_mag0]) || dn <= 0.0 || flux_mag0 <= 0.0 {
        return None;
    }
    finite(-2.5 * (dn / flux_mag0).log10())
}

/// Convert a raw flux error to an AB magnitude error
///
/// Returns `None` if `dn` or `flux_mag0` is not positive, or if either
/// standard deviation is negative.
pub fn dn_to_ab_mag_sigma(
    dn: f64,
    dn_sigma: f64,
    flux_mag0: f64,
    flux_mag0_sigma: f64,
) -> Option<f64> {
    if !all_finite(&[dn, dn_sigma, flux_mag0, flux_mag0_sigma]) {
        return None;
    }
    if dn <= 0.0 || dn_sigma < 0.0 || flux_mag0 <= 0.0 || flux_mag0_sigma < 0.0 {
        return None;
    }
    finite(FIVE_OVER_2LOG10 * (dn_sigma / dn).hypot(flux_mag0_sigma / flux_mag0))
}

/// Convert a calibrated flux in erg/cm²/s/Hz to an AB magnitude
///
/// Returns `None` if `flux` is not positive.
pub fn flux_to_ab_mag(flux: f64) -> Option<f64> {
    if !flux.is_finite() || flux <= 0.0 {
        return None;
    }
    finite(-2.5 * flux.log10() - 48.6)
}

/// Convert a calibrated flux error to an AB magnitude error
///
/// Returns `None` if `flux` is not positive or `flux_sigma` is negative.
pub fn flux_to_ab_mag_sigma(flux: f64, flux_sigma: f64) -> Option<f64> {
    if !all_finite(&[flux, flux_sigma]) || flux <= 0.0 || flux_sigma < 0.0 {
        return None;
    }
    finite(FIVE_OVER_2LOG10 * flux_sigma / flux)
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
