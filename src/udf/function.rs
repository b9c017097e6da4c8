use crate::error::{Error, Result};
use crate::udf::Value;
use crate::{geometry, photometry};
use log::trace;

/// Maximum arity of any scalar function
const MAX_ARGS: usize = 5;

/// Scalar functions callable from a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Udf {
    S2PtInCircle,
    AngSep,
    DnToFlux,
    DnToAbMag,
    DnToAbMagSigma,
    FluxToAbMag,
    FluxToAbMagSigma,
}

impl Udf {
    pub const ALL: [Udf; 7] = [
        Udf::S2PtInCircle,
        Udf::AngSep,
        Udf::DnToFlux,
        Udf::DnToAbMag,
        Udf::DnToAbMagSigma,
        Udf::FluxToAbMag,
        Udf::FluxToAbMagSigma,
    ];

    /// SQL name without prefix
    pub fn name(self) -> &'static str {
        match self {
            Udf::S2PtInCircle => "s2PtInCircle",
            Udf::AngSep => "angSep",
            Udf::DnToFlux => "dnToFlux",
            Udf::DnToAbMag => "dnToAbMag",
            Udf::DnToAbMagSigma => "dnToAbMagSigma",
            Udf::FluxToAbMag => "fluxToAbMag",
            Udf::FluxToAbMagSigma => "fluxToAbMagSigma",
        }
    }

    /// Number of arguments the function expects
    pub fn arity(self) -> usize {
        match self {
            Udf::S2PtInCircle => 5,
            Udf::AngSep | Udf::DnToAbMagSigma => 4,
            Udf::DnToFlux | Udf::DnToAbMag | Udf::FluxToAbMagSigma => 2,
            Udf::FluxToAbMag => 1,
        }
    }

    /// Look up a function by its unprefixed SQL name
    ///
    /// Function names are case-insensitive, as they are in SQL.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|udf| udf.name().eq_ignore_ascii_case(name))
    }

    /// Validate the argument count of a call before any row is evaluated
    pub fn check_args(self, count: usize) -> Result<()> {
        if count != self.arity() {
            return Err(Error::ArgumentCount {
                name: self.name(),
                expected: self.arity(),
                actual: count,
            });
        }
        Ok(())
    }

    /// Evaluate the function for one row of arguments
    ///
    /// Fails only if the number of arguments is wrong. Missing, non-numeric
    /// or out-of-range arguments produce [`Value::Null`]. Predicates return
    /// [`Value::Integer`], everything else [`Value::Real`].
    pub fn call(self, args: &[Value]) -> Result<Value> {
        self.check_args(args.len())?;

        let mut a = [None; MAX_ARGS];
        for (slot, arg) in a.iter_mut().zip(args) {
            *slot = arg.as_real();
        }

        let value: Value = match self {
            Udf::S2PtInCircle => geometry::s2_pt_in_circle(a[0], a[1], a[2], a[3], a[4]).into(),
            Udf::AngSep => geometry::ang_sep(a[0], a[1], a[2], a[3]).into(),
            Udf::DnToFlux => real(|| photometry::dn_to_flux(a[0]?, a[1]?)),
            Udf::DnToAbMag => real(|| photometry::dn_to_ab_mag(a[0]?, a[1]?)),
            Udf::DnToAbMagSigma => {
                real(|| photometry::dn_to_ab_mag_sigma(a[0]?, a[1]?, a[2]?, a[3]?))
            }
            Udf::FluxToAbMag => real(|| photometry::flux_to_ab_mag(a[0]?)),
            Udf::FluxToAbMagSigma => real(|| photometry::flux_to_ab_mag_sigma(a[0]?, a[1]?)),
        };

        if value.is_null() {
            trace!("{}: NULL result for arguments {args:?}", self.name());
        }

        Ok(value)
    }
}

fn real(f: impl FnOnce() -> Option<f64>) -> Value {
    f().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_none, assert_ok, assert_ok_eq};
    use insta::assert_compact_debug_snapshot;

    fn reals(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::Real).collect()
    }

    #[test]
    fn names_round_trip() {
        for udf in Udf::ALL {
            assert_eq!(Udf::from_name(udf.name()), Some(udf));
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Udf::from_name("S2PTINCIRCLE"), Some(Udf::S2PtInCircle));
        assert_eq!(Udf::from_name("angsep"), Some(Udf::AngSep));
        assert_none!(Udf::from_name("s2PtInBox"));
    }

    #[test]
    fn check_args() {
        assert_ok!(Udf::S2PtInCircle.check_args(5));

        let err = assert_err!(Udf::DnToAbMagSigma.check_args(3));
        assert_compact_debug_snapshot!(err, @r#"ArgumentCount { name: "dnToAbMagSigma", expected: 4, actual: 3 }"#);
        assert_eq!(
            err.to_string(),
            "dnToAbMagSigma expects exactly 4 argument(s), got 3"
        );
    }

    #[test]
    fn call_wrong_arity() {
        assert_err!(Udf::S2PtInCircle.call(&reals(&[0.0, 0.0, 0.0, 0.0])));
        assert_err!(Udf::FluxToAbMag.call(&[]));
    }

    #[test]
    fn call_s2_pt_in_circle() {
        assert_ok_eq!(
            Udf::S2PtInCircle.call(&reals(&[0.0, 0.0, 0.0, 0.0, 1.0])),
            Value::Integer(1)
        );
        assert_ok_eq!(
            Udf::S2PtInCircle.call(&reals(&[1.0, 1.0, 0.0, 0.0, 1.0])),
            Value::Integer(0)
        );
        assert_ok_eq!(
            Udf::S2PtInCircle.call(&reals(&[0.0, 0.0, 0.0, 0.0, 181.0])),
            Value::Null
        );
    }

    #[test]
    fn call_null_arguments() {
        for udf in Udf::ALL {
            for i in 0..udf.arity() {
                let mut args = vec![Value::Real(1.0); udf.arity()];
                args[i] = Value::Null;
                assert_ok_eq!(udf.call(&args), Value::Null, "{} argument {i}", udf.name());
            }
        }
    }

    #[test]
    fn call_coerces_integers_and_text() {
        let args = [
            Value::Integer(0),
            Value::from("0"),
            Value::Integer(0),
            Value::Real(0.0),
            Value::from("1.0"),
        ];
        assert_ok_eq!(Udf::S2PtInCircle.call(&args), Value::Integer(1));

        let args = [Value::from("north"), Value::Real(0.0)];
        assert_ok_eq!(Udf::DnToAbMag.call(&args), Value::Null);
    }

    #[test]
    fn call_photometry() {
        assert_ok_eq!(Udf::DnToAbMag.call(&reals(&[1e4, 1e4])), Value::Real(0.0));
        assert_ok_eq!(Udf::DnToAbMag.call(&reals(&[-1.0, 100.0])), Value::Null);
        assert_ok_eq!(
            Udf::DnToAbMagSigma.call(&reals(&[100.0, 0.0, 1e4, 0.0])),
            Value::Real(0.0)
        );
        assert_ok_eq!(Udf::FluxToAbMag.call(&reals(&[0.0])), Value::Null);
    }

    #[test]
    fn call_ang_sep() {
        assert_ok_eq!(
            Udf::AngSep.call(&reals(&[10.0, 20.0, 10.0, 20.0])),
            Value::Real(0.0)
        );
        assert_ok_eq!(
            Udf::AngSep.call(&reals(&[0.0, 95.0, 0.0, 0.0])),
            Value::Null
        );
    }
}
