use scisql::{Registry, Value};

fn real(value: Value) -> f64 {
    value.as_real().expect("expected a non-NULL result")
}

#[test]
fn magnitudes_from_raw_flux() {
    let registry = Registry::new();
    let flux_mag0 = 1e11;

    // One hundredth of the zero point flux is magnitude 5
    let mag = real(
        registry
            .call("scisql_dnToAbMag", &[Value::Real(1e9), Value::Real(flux_mag0)])
            .unwrap(),
    );
    assert!((mag - 5.0).abs() < 1e-9);

    // The calibrated flux gives the same magnitude
    let flux = real(
        registry
            .call("scisql_dnToFlux", &[Value::Real(1e9), Value::Real(flux_mag0)])
            .unwrap(),
    );
    let mag_from_flux = real(
        registry
            .call("scisql_fluxToAbMag", &[Value::Real(flux)])
            .unwrap(),
    );
    assert!((mag_from_flux - mag).abs() < 1e-9);
}

#[test]
fn sigma_agrees_between_raw_and_calibrated() {
    let registry = Registry::new();
    let (dn, dn_sigma, flux_mag0) = (2.5e8, 1.2e6, 6.3e10);

    let raw = real(
        registry
            .call(
                "scisql_dnToAbMagSigma",
                &[dn, dn_sigma, flux_mag0, 0.0].map(Value::Real),
            )
            .unwrap(),
    );

    let flux = real(registry.call("scisql_dnToFlux", &[dn, flux_mag0].map(Value::Real)).unwrap());
    let flux_sigma = real(
        registry
            .call("scisql_dnToFlux", &[dn_sigma, flux_mag0].map(Value::Real))
            .unwrap(),
    );
    let calibrated = real(
        registry
            .call(
                "scisql_fluxToAbMagSigma",
                &[flux, flux_sigma].map(Value::Real),
            )
            .unwrap(),
    );

    assert!((raw - calibrated).abs() < 1e-12);
}

#[test]
fn invalid_arguments_are_null() {
    let registry = Registry::new();
    let cases: &[(&str, &[f64])] = &[
        ("scisql_dnToFlux", &[1.0, 0.0]),
        ("scisql_dnToAbMag", &[0.0, 1.0]),
        ("scisql_dnToAbMagSigma", &[1.0, -1.0, 1.0, 1.0]),
        ("scisql_fluxToAbMag", &[f64::INFINITY]),
        ("scisql_fluxToAbMagSigma", &[1.0, f64::NAN]),
    ];

    for (name, args) in cases {
        let args: Vec<Value> = args.iter().copied().map(Value::Real).collect();
        assert_eq!(registry.call(name, &args).unwrap(), Value::Null, "{name}");
    }
}

#[test]
fn median_over_table() {
    let registry = Registry::new();
    let column = [
        Value::Real(3.0),
        Value::Null,
        Value::Integer(9),
        Value::from("1.5"),
        Value::Real(-4.0),
    ];

    let mut median = registry.median("median", 1).unwrap();
    median.clear();
    for cell in &column {
        median.add(cell.as_real()).unwrap();
    }
    assert_eq!(median.result(), Some(2.25));
}
