//! The fixed catalog of named unit conversions.
//!
//! Sixteen conversions across four categories, compiled in as a `const`
//! table. Nothing is registered, replaced, or removed at runtime; lookups
//! are exact, case-sensitive name matches.

use crate::numeric::Real;

/// Measurement category of a conversion. Fixes which input guard applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Temperature,
    Distance,
    Weight,
    Volume,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Temperature,
        Category::Distance,
        Category::Weight,
        Category::Volume,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Distance => "Distance",
            Category::Weight => "Weight",
            Category::Volume => "Volume",
        }
    }
}

/// Temperature scale a reading can be expressed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempScale {
    /// Re-express a reading on this scale in degrees Celsius.
    pub fn to_celsius(self, value: Real) -> Real {
        match self {
            TempScale::Celsius => value,
            TempScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TempScale::Kelvin => value - 273.15,
        }
    }
}

/// One registered conversion: lookup name, category, and formula.
#[derive(Debug, Clone, Copy)]
pub struct ConversionEntry {
    /// Exact-match lookup key, e.g. "CelsiusToFahrenheit".
    pub name: &'static str,
    /// Category whose input guard applies to this conversion.
    pub category: Category,
    /// Scale the absolute-zero guard reads the input on.
    /// `None` outside the temperature category.
    pub guard_scale: Option<TempScale>,
    /// Unit label for display, e.g. "°C → °F".
    pub units: &'static str,
    /// The conversion formula.
    pub apply: fn(Real) -> Real,
}

// Guard scales on the temperature entries record which scale the
// absolute-zero guard reads the input on: both Fahrenheit-named
// conversions guard on the °F reading, both Kelvin-named ones on the
// K reading.
const CATALOG: [ConversionEntry; 16] = [
    // Temperature
    ConversionEntry {
        name: "CelsiusToFahrenheit",
        category: Category::Temperature,
        guard_scale: Some(TempScale::Fahrenheit),
        units: "°C → °F",
        apply: |c| c * 9.0 / 5.0 + 32.0,
    },
    ConversionEntry {
        name: "FahrenheitToCelsius",
        category: Category::Temperature,
        guard_scale: Some(TempScale::Fahrenheit),
        units: "°F → °C",
        apply: |f| (f - 32.0) * 5.0 / 9.0,
    },
    ConversionEntry {
        name: "CelsiusToKelvin",
        category: Category::Temperature,
        guard_scale: Some(TempScale::Kelvin),
        units: "°C → K",
        apply: |c| c + 273.15,
    },
    ConversionEntry {
        name: "KelvinToCelsius",
        category: Category::Temperature,
        guard_scale: Some(TempScale::Kelvin),
        units: "K → °C",
        apply: |k| k - 273.15,
    },
    // Distance
    ConversionEntry {
        name: "KilometersToMiles",
        category: Category::Distance,
        guard_scale: None,
        units: "km → mi",
        apply: |km| km * 0.621371,
    },
    ConversionEntry {
        name: "MilesToKilometers",
        category: Category::Distance,
        guard_scale: None,
        units: "mi → km",
        apply: |mi| mi / 0.621371,
    },
    ConversionEntry {
        name: "MetersToFeet",
        category: Category::Distance,
        guard_scale: None,
        units: "m → ft",
        apply: |m| m * 3.28084,
    },
    ConversionEntry {
        name: "FeetToMeters",
        category: Category::Distance,
        guard_scale: None,
        units: "ft → m",
        apply: |ft| ft / 3.28084,
    },
    // Weight
    ConversionEntry {
        name: "KilogramsToPounds",
        category: Category::Weight,
        guard_scale: None,
        units: "kg → lb",
        apply: |kg| kg * 2.20462,
    },
    ConversionEntry {
        name: "PoundsToKilograms",
        category: Category::Weight,
        guard_scale: None,
        units: "lb → kg",
        apply: |lb| lb / 2.20462,
    },
    ConversionEntry {
        name: "GramsToOunces",
        category: Category::Weight,
        guard_scale: None,
        units: "g → oz",
        apply: |g| g * 0.035274,
    },
    ConversionEntry {
        name: "OuncesToGrams",
        category: Category::Weight,
        guard_scale: None,
        units: "oz → g",
        apply: |oz| oz / 0.035274,
    },
    // Volume
    ConversionEntry {
        name: "LitersToGallons",
        category: Category::Volume,
        guard_scale: None,
        units: "L → gal",
        apply: |l| l * 0.264172,
    },
    ConversionEntry {
        name: "GallonsToLiters",
        category: Category::Volume,
        guard_scale: None,
        units: "gal → L",
        apply: |gal| gal / 0.264172,
    },
    ConversionEntry {
        name: "MillilitersToFluidOunces",
        category: Category::Volume,
        guard_scale: None,
        units: "mL → fl oz",
        apply: |ml| ml * 0.033814,
    },
    ConversionEntry {
        name: "FluidOuncesToMilliliters",
        category: Category::Volume,
        guard_scale: None,
        units: "fl oz → mL",
        apply: |fl_oz| fl_oz / 0.033814,
    },
];

/// Every conversion the converter knows about, grouped by category.
pub fn catalog() -> &'static [ConversionEntry] {
    &CATALOG
}

/// Exact-match lookup of a conversion by name. Case-sensitive.
pub fn find_conversion(name: &str) -> Option<&'static ConversionEntry> {
    catalog().iter().find(|entry| entry.name == name)
}

/// Conversions registered under one category, in catalog order.
pub fn conversions_in(category: Category) -> impl Iterator<Item = &'static ConversionEntry> {
    catalog().iter().filter(move |entry| entry.category == category)
}
