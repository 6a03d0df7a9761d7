//! Property tests for the conversion engine.
//!
//! Inputs are drawn from ranges every category accepts so the dispatch
//! itself can be asserted infallible; clamping and inverse behavior get
//! their own properties.

use proptest::prelude::*;
use uf_core::{Tolerances, approx_eq, catalog, convert};

/// Conversion pairs that invert each other, with the smallest input the
/// round trip accepts. (KelvinToCelsius output only re-enters
/// CelsiusToKelvin's guard for inputs of at least 273.15 K.)
const INVERSE_PAIRS: [(&str, &str, f64); 16] = [
    ("CelsiusToFahrenheit", "FahrenheitToCelsius", 0.0),
    ("FahrenheitToCelsius", "CelsiusToFahrenheit", 0.0),
    ("CelsiusToKelvin", "KelvinToCelsius", 0.0),
    ("KelvinToCelsius", "CelsiusToKelvin", 273.15),
    ("KilometersToMiles", "MilesToKilometers", 0.0),
    ("MilesToKilometers", "KilometersToMiles", 0.0),
    ("MetersToFeet", "FeetToMeters", 0.0),
    ("FeetToMeters", "MetersToFeet", 0.0),
    ("KilogramsToPounds", "PoundsToKilograms", 0.0),
    ("PoundsToKilograms", "KilogramsToPounds", 0.0),
    ("GramsToOunces", "OuncesToGrams", 0.0),
    ("OuncesToGrams", "GramsToOunces", 0.0),
    ("LitersToGallons", "GallonsToLiters", 0.0),
    ("GallonsToLiters", "LitersToGallons", 0.0),
    ("MillilitersToFluidOunces", "FluidOuncesToMilliliters", 0.0),
    ("FluidOuncesToMilliliters", "MillilitersToFluidOunces", 0.0),
];

#[test]
fn every_registered_name_dispatches() {
    for entry in catalog() {
        let result = convert(entry.name, 1.0).unwrap();
        assert!(result.is_finite(), "{} produced {}", entry.name, result);
    }
}

proptest! {
    #[test]
    fn in_range_inputs_convert_to_finite_values(
        idx in 0usize..catalog().len(),
        value in 0.0_f64..1e9,
    ) {
        let entry = &catalog()[idx];
        let result = convert(entry.name, value).unwrap();
        prop_assert!(!result.is_nan(), "{} produced NaN", entry.name);
        prop_assert!(result.is_finite(), "{} produced {}", entry.name, result);
    }

    #[test]
    fn clamping_is_idempotent_above_the_limit(
        idx in 0usize..catalog().len(),
        excess in 0.0_f64..1e9,
    ) {
        let entry = &catalog()[idx];
        prop_assert_eq!(
            convert(entry.name, 1e6 + excess).unwrap(),
            convert(entry.name, 1e6).unwrap()
        );
    }

    #[test]
    fn inverse_pairs_round_trip(
        pair_idx in 0usize..INVERSE_PAIRS.len(),
        offset in 0.0_f64..1e4,
    ) {
        let (there, back, min) = INVERSE_PAIRS[pair_idx];
        let value = min + offset;
        let converted = convert(there, value).unwrap();
        let recovered = convert(back, converted).unwrap();
        let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
        prop_assert!(
            approx_eq(recovered, value, tol),
            "{} then {}: {} came back as {}",
            there, back, value, recovered
        );
    }
}
