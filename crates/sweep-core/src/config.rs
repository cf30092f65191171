// File: crates/sweep-core/src/config.rs
// Summary: Runtime configuration with semester-chart defaults; loadable from JSON.
// Notes:
// - Every section is `#[serde(default)]`, so a config file only needs the keys it overrides.

use std::path::Path;

use serde::Deserialize;

use crate::error::SweepResult;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub animation: AnimationConfig,
    pub data: DataConfig,
    pub columns: ColumnNames,
    pub audio: AudioConfig,
    pub keys: KeyBindings,
    pub labels: Labels,
    /// Theme preset name, see `theme::find`.
    pub theme: String,
}

impl SweepConfig {
    pub fn from_json_str(text: &str) -> SweepResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> SweepResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Progress added per frame.
    pub speed: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    /// Increment applied by the speed-up / slow-down keys.
    pub speed_step: f64,
    /// Frames to hold the finished curve before rolling over.
    pub pause_frames: u32,
    pub freehand_enabled: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: 0.02,
            speed_min: 0.001,
            speed_max: 0.1,
            speed_step: 0.005,
            pause_frames: 90,
            freehand_enabled: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    Synthetic,
    Imported,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub mode: DataMode,
    /// Canonical period order; also the x-axis labels.
    pub period_labels: Vec<String>,
    /// Product names drawn from in synthetic mode.
    pub categories: Vec<String>,
    /// Synthetic values are integers drawn from `[value_min, value_max)`.
    pub value_min: u32,
    pub value_max: u32,
    /// Top of the value axis.
    pub value_ceiling: f64,
    pub synthetic_start_year: i32,
    pub year_floor: i32,
    pub year_ceiling: i32,
    /// Fixed RNG seed for reproducible synthetic data.
    pub seed: Option<u64>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            mode: DataMode::Synthetic,
            period_labels: ["Ene", "Feb", "Mar", "Abr", "May", "Jun"].map(String::from).to_vec(),
            categories: [
                "Zapatos", "Laptop", "Smartphone", "Audífonos", "Camisetas", "Relojes", "Tablet", "Silla Gamer",
            ]
            .map(String::from)
            .to_vec(),
            value_min: 40,
            value_max: 95,
            value_ceiling: 100.0,
            synthetic_start_year: 2022,
            year_floor: 2016,
            year_ceiling: 2024,
            seed: None,
        }
    }
}

/// Header names of the imported CSV.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub year: String,
    pub month: String,
    pub product: String,
    pub sales: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            year: "Año".into(),
            month: "Mes".into(),
            product: "Producto".into(),
            sales: "Ventas".into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub value_low: f64,
    pub value_high: f64,
    pub freq_low: f64,
    pub freq_high: f64,
    pub peak_amplitude: f32,
    pub attack_ms: u32,
    pub decay_ms: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            value_low: 40.0,
            value_high: 95.0,
            freq_low: 200.0,
            freq_high: 1200.0,
            peak_amplitude: 0.3,
            attack_ms: 20,
            decay_ms: 200,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub toggle_freehand: char,
    pub clear_freehand: char,
    pub speed_up: char,
    pub speed_down: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self { toggle_freehand: 'F', clear_freehand: 'C', speed_up: '+', speed_down: '-' }
    }
}

/// User-facing strings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub year_prefix: String,
    pub header_period: String,
    pub header_category: String,
    pub header_value: String,
    /// Appended to every printed value ("67k").
    pub value_suffix: String,
    pub loading: String,
    pub placeholder: String,
    /// Shown with the year when a loaded file has no rows for it.
    pub no_data: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Ventas semestrales".into(),
            year_prefix: "Año".into(),
            header_period: "Mes".into(),
            header_category: "Producto".into(),
            header_value: "Ventas".into(),
            value_suffix: "k".into(),
            loading: "Cargando nuevo archivo...".into(),
            placeholder: "Carga un archivo .csv con columnas: Año, Mes, Producto, Ventas".into(),
            no_data: "Sin datos para el año".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SweepConfig::from_json_str(r#"{ "animation": { "speed": 0.05 }, "data": { "mode": "imported" } }"#)
            .expect("parse");
        assert_eq!(cfg.animation.speed, 0.05);
        assert_eq!(cfg.animation.pause_frames, 90);
        assert_eq!(cfg.data.mode, DataMode::Imported);
        assert_eq!(cfg.data.period_labels.len(), 6);
        assert_eq!(cfg.columns.year, "Año");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SweepConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, crate::SweepError::Config(_)));
    }
}
