//! TOML configuration deserialisation for simulation jobs.
//!
//! A minimal job needs nothing at all (every table has defaults matching
//! the built-in reference configuration), but a typical file looks like:
//!
//! ```toml
//! nrb_level = 0.2
//! normalise = true
//!
//! [pulses.pump]
//! wavelength_nm = 800.0
//! fwhm_fs = 15.0
//! delay_fs = -50.0
//!
//! [[mode]]
//! raman_shift_cm1 = 2917.0
//! strength = 1.0
//! dephasing_time_ps = 2.0
//! ```

use serde::Deserialize;
use vibron_core::library;
use vibron_core::types::{PulseBank, PulseSpec};

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    #[serde(default)]
    pub pulses: PulsesConfig,
    #[serde(default, rename = "mode")]
    pub modes: Vec<ModeConfig>,
    #[serde(default)]
    pub nrb_level: f64,
    #[serde(default)]
    pub normalise: bool,
    #[serde(default)]
    pub output: OutputConfig,
}

/// The three pulses. Any omitted pulse falls back to the built-in default
/// configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PulsesConfig {
    #[serde(default = "default_pump")]
    pub pump: PulseConfig,
    #[serde(default = "default_stokes")]
    pub stokes: PulseConfig,
    #[serde(default = "default_probe")]
    pub probe: PulseConfig,
}

impl Default for PulsesConfig {
    fn default() -> Self {
        Self {
            pump: default_pump(),
            stokes: default_stokes(),
            probe: default_probe(),
        }
    }
}

/// A single pulse from TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PulseConfig {
    pub wavelength_nm: f64,
    pub fwhm_fs: f64,
    #[serde(default)]
    pub delay_fs: f64,
    #[serde(default)]
    pub chirp_rate: f64,
}

impl From<PulseConfig> for PulseSpec {
    fn from(c: PulseConfig) -> Self {
        PulseSpec {
            wavelength_nm: c.wavelength_nm,
            fwhm_fs: c.fwhm_fs,
            delay_fs: c.delay_fs,
            chirp_rate: c.chirp_rate,
        }
    }
}

fn from_spec(spec: PulseSpec) -> PulseConfig {
    PulseConfig {
        wavelength_nm: spec.wavelength_nm,
        fwhm_fs: spec.fwhm_fs,
        delay_fs: spec.delay_fs,
        chirp_rate: spec.chirp_rate,
    }
}

fn default_pump() -> PulseConfig {
    from_spec(library::default_pulses().pump)
}
fn default_stokes() -> PulseConfig {
    from_spec(library::default_pulses().stokes)
}
fn default_probe() -> PulseConfig {
    from_spec(library::default_pulses().probe)
}

impl PulsesConfig {
    /// Convert to the core pulse bank.
    pub fn to_bank(&self) -> PulseBank {
        PulseBank {
            pump: self.pump.clone().into(),
            stokes: self.stokes.clone().into(),
            probe: self.probe.clone().into(),
        }
    }
}

/// A vibrational resonance from TOML. The id is optional; the runner
/// assigns sequential ids to modes that omit it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeConfig {
    pub id: Option<u64>,
    pub raman_shift_cm1: f64,
    pub strength: f64,
    pub dephasing_time_ps: f64,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save the spectra as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_spectra: bool,
    /// Whether to save the FAST-CARS interferogram as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_interferogram: bool,
    /// Whether to save the pulse intensity traces as CSV (default: false).
    #[serde(default)]
    pub save_pulses: bool,
    /// Whether to also save the full result bundle as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_spectra: true,
            save_interferogram: true,
            save_pulses: false,
            save_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_reference_defaults() {
        let job: JobConfig = toml::from_str("").unwrap();

        assert_eq!(job.pulses.pump.wavelength_nm, 800.0);
        assert_eq!(job.pulses.stokes.wavelength_nm, 1030.0);
        assert_eq!(job.pulses.probe.delay_fs, 100.0);
        assert!(job.modes.is_empty());
        assert_eq!(job.nrb_level, 0.0);
        assert!(!job.normalise);
        assert!(job.output.save_spectra);
        assert!(!job.output.save_json);
    }

    #[test]
    fn test_full_config_round_trip() {
        let toml_src = r#"
            nrb_level = 0.25
            normalise = true

            [pulses.pump]
            wavelength_nm = 790.0
            fwhm_fs = 12.0
            delay_fs = -30.0
            chirp_rate = 0.5

            [pulses.stokes]
            wavelength_nm = 1025.0
            fwhm_fs = 12.0

            [pulses.probe]
            wavelength_nm = 790.0
            fwhm_fs = 80.0
            delay_fs = 250.0

            [[mode]]
            id = 11
            raman_shift_cm1 = 2917.0
            strength = 1.0
            dephasing_time_ps = 2.0

            [[mode]]
            raman_shift_cm1 = 1306.0
            strength = 0.45
            dephasing_time_ps = 2.5

            [output]
            directory = "results"
            save_pulses = true
        "#;
        let job: JobConfig = toml::from_str(toml_src).unwrap();

        assert_eq!(job.pulses.pump.chirp_rate, 0.5);
        // Omitted fields default to zero, not to the reference pulse.
        assert_eq!(job.pulses.stokes.delay_fs, 0.0);
        assert_eq!(job.modes.len(), 2);
        assert_eq!(job.modes[0].id, Some(11));
        assert_eq!(job.modes[1].id, None);
        assert_eq!(job.output.directory, "results");
        assert!(job.output.save_pulses);
        assert!(job.output.save_interferogram);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: Result<JobConfig, _> = toml::from_str("wavelength = 800.0");
        assert!(result.is_err());
    }
}
