//! Air density and the distance scaling it produces, independent of wind.
//!
//! Density comes from temperature, station pressure and humidity: the Magnus
//! form recommended by the WMO gives saturation vapor pressure, and the
//! pressure is split into dry-air and water-vapor partial pressures.
//! Station pressure already carries the altitude effect; altitude itself only
//! selects the density exponent.

/// Magnus coefficients (WMO), result in hPa.
pub const MAGNUS_A: f64 = 6.1121;
pub const MAGNUS_B: f64 = 17.502;
pub const MAGNUS_C: f64 = 240.97;

/// Specific gas constant for dry air (J/(kg·K))
pub const GAS_CONSTANT_DRY: f64 = 287.058;
/// Specific gas constant for water vapor (J/(kg·K))
pub const GAS_CONSTANT_VAPOR: f64 = 461.495;

/// Reference density the club table was measured at (kg/m³).
pub const REFERENCE_DENSITY: f64 = 1.193;

pub const DENSITY_EXPONENT_SEA: f64 = 0.7;
/// Thinner air above the threshold also means less viscous drag.
pub const DENSITY_EXPONENT_ALT: f64 = 0.5;
pub const ALTITUDE_THRESHOLD_FT: f64 = 3000.0;

pub const STANDARD_TEMPERATURE_F: f64 = 70.0;
pub const STANDARD_PRESSURE_MB: f64 = 1013.25;
pub const STANDARD_HUMIDITY_PCT: f64 = 50.0;

/// Reference carry gain by altitude (ft, factor).
pub const ALTITUDE_EFFECTS: [(f64, f64); 9] = [
    (0.0, 1.000),
    (1000.0, 1.021),
    (2000.0, 1.043),
    (3000.0, 1.065),
    (4000.0, 1.088),
    (5000.0, 1.112),
    (6000.0, 1.137),
    (7000.0, 1.163),
    (8000.0, 1.190),
];

#[inline]
pub fn fahrenheit_to_celsius(temp_f: f64) -> f64 {
    (temp_f - 32.0) * 5.0 / 9.0
}

/// Saturation vapor pressure over water [hPa] at `temp_c` [°C].
pub fn saturation_vapor_pressure(temp_c: f64) -> f64 {
    MAGNUS_A * ((MAGNUS_B * temp_c) / (temp_c + MAGNUS_C)).exp()
}

/// Actual vapor pressure [hPa] from temperature [°F] and relative humidity [%].
pub fn vapor_pressure(temp_f: f64, humidity_pct: f64) -> f64 {
    (humidity_pct / 100.0) * saturation_vapor_pressure(fahrenheit_to_celsius(temp_f))
}

/// Air density [kg/m³] from temperature [°F], station pressure [mb] and
/// relative humidity [%].
pub fn air_density(temp_f: f64, pressure_mb: f64, humidity_pct: f64) -> f64 {
    let t_kelvin = fahrenheit_to_celsius(temp_f) + 273.15;
    let p_pa = pressure_mb * 100.0;
    let e_pa = vapor_pressure(temp_f, humidity_pct) * 100.0;

    (p_pa - e_pa) / (GAS_CONSTANT_DRY * t_kelvin) + e_pa / (GAS_CONSTANT_VAPOR * t_kelvin)
}

pub fn density_exponent(altitude_ft: f64) -> f64 {
    if altitude_ft > ALTITUDE_THRESHOLD_FT {
        DENSITY_EXPONENT_ALT
    } else {
        DENSITY_EXPONENT_SEA
    }
}

/// Carry multiplier for a given density: thinner air flies farther.
pub fn density_factor(density: f64, altitude_ft: f64) -> f64 {
    (density / REFERENCE_DENSITY).powf(-density_exponent(altitude_ft))
}

/// `(density / 1.193)^-exponent` for the given conditions.
pub fn environmental_factor(temp_f: f64, pressure_mb: f64, humidity_pct: f64, altitude_ft: f64) -> f64 {
    density_factor(air_density(temp_f, pressure_mb, humidity_pct), altitude_ft)
}

/// Interpolated reference carry gain for `altitude_ft`, clamped to the table.
///
/// Display data only; the carry model sees altitude through station pressure.
pub fn altitude_carry_factor(altitude_ft: f64) -> f64 {
    let (first_alt, first_factor) = ALTITUDE_EFFECTS[0];
    let (last_alt, last_factor) = ALTITUDE_EFFECTS[ALTITUDE_EFFECTS.len() - 1];

    if altitude_ft.is_nan() || altitude_ft <= first_alt {
        return first_factor;
    }
    if altitude_ft >= last_alt {
        return last_factor;
    }

    for pair in ALTITUDE_EFFECTS.windows(2) {
        let (alt_low, factor_low) = pair[0];
        let (alt_high, factor_high) = pair[1];
        if altitude_ft <= alt_high {
            let t = (altitude_ft - alt_low) / (alt_high - alt_low);
            return factor_low + t * (factor_high - factor_low);
        }
    }
    last_factor
}
