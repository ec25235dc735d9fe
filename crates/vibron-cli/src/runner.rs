//! Simulation runner: ties together configuration, the core pipeline, and
//! the output writers.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use vibron_compute::{ComputeBackend, CpuBackend};
use vibron_core::pipeline::Simulator;
use vibron_core::types::{OutputBundle, SimulationInput, VibrationalMode};

use crate::config::JobConfig;

/// Build the core input snapshot from a parsed job configuration.
///
/// Modes without an explicit id get sequential 1-based ids, skipping past
/// the largest id given explicitly so assignments never collide.
pub fn build_input(job: &JobConfig) -> SimulationInput {
    let mut next_id = job
        .modes
        .iter()
        .filter_map(|m| m.id)
        .max()
        .unwrap_or(0);

    let modes = job
        .modes
        .iter()
        .map(|m| {
            let id = m.id.unwrap_or_else(|| {
                next_id += 1;
                next_id
            });
            VibrationalMode {
                id,
                raman_shift_cm1: m.raman_shift_cm1,
                strength: m.strength,
                dephasing_time_ps: m.dephasing_time_ps,
            }
        })
        .collect();

    SimulationInput {
        pulses: job.pulses.to_bank(),
        modes,
        nrb_level: job.nrb_level,
        normalise: job.normalise,
    }
}

/// Run a full simulation from a parsed job configuration.
pub fn run_simulation(job: &JobConfig) -> Result<OutputBundle> {
    let input = build_input(job);

    let backend: Arc<dyn ComputeBackend> = Arc::new(CpuBackend::new());
    info!("backend: {}", backend.device_info().name);

    for (role, spec) in input.pulses.iter() {
        println!(
            "  {} pulse: λ={} nm, FWHM={} fs, delay={} fs, chirp={}",
            role, spec.wavelength_nm, spec.fwhm_fs, spec.delay_fs, spec.chirp_rate
        );
    }
    println!(
        "  {} mode(s), NRB level {}, deconvolution {}",
        input.modes.len(),
        input.nrb_level,
        if input.normalise { "on" } else { "off" }
    );

    let simulator = Simulator::new(backend);
    let bundle = simulator
        .run(&input)
        .context("Simulation rejected the input")?;

    Ok(bundle)
}

/// Write the three spectra to a CSV file with a metadata header.
pub fn write_spectra_csv(bundle: &OutputBundle, path: &Path, job: &JobConfig) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "# vibron — fs-CARS / FAST-CARS spectra")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(
        file,
        "# pump: {} nm / {} fs, stokes: {} nm / {} fs, probe: {} nm / {} fs @ {} fs",
        job.pulses.pump.wavelength_nm,
        job.pulses.pump.fwhm_fs,
        job.pulses.stokes.wavelength_nm,
        job.pulses.stokes.fwhm_fs,
        job.pulses.probe.wavelength_nm,
        job.pulses.probe.fwhm_fs,
        job.pulses.probe.delay_fs,
    )?;
    writeln!(
        file,
        "# nrb_level: {}, normalise: {}",
        job.nrb_level, job.normalise
    )?;
    writeln!(file, "#")?;
    writeln!(
        file,
        "raman_shift_cm1,cars_intensity,fast_cars_norm,excitation_profile_norm"
    )?;

    for i in 0..bundle.shift_axis_cm1.len() {
        writeln!(
            file,
            "{:.1},{:.6e},{:.6e},{:.6e}",
            bundle.shift_axis_cm1[i],
            bundle.cars_intensity[i],
            bundle.fast_cars_spectrum[i],
            bundle.excitation_profile[i],
        )?;
    }

    println!("Spectra written to: {}", path.display());
    Ok(())
}

/// Write the FAST-CARS interferogram to a CSV file.
pub fn write_interferogram_csv(bundle: &OutputBundle, path: &Path) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "# vibron — FAST-CARS interferogram (AC-coupled)")?;
    writeln!(file, "#")?;
    writeln!(file, "probe_delay_ps,signal")?;
    for (d, s) in bundle
        .fast_cars_delays_ps
        .iter()
        .zip(&bundle.fast_cars_interferogram)
    {
        writeln!(file, "{:.6},{:.6e}", d, s)?;
    }

    println!("Interferogram written to: {}", path.display());
    Ok(())
}

/// Write the subsampled pulse intensity traces to a CSV file.
pub fn write_pulses_csv(bundle: &OutputBundle, path: &Path) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "# vibron — pulse intensity envelopes (subsampled)")?;
    writeln!(file, "#")?;
    writeln!(file, "time_fs,pump,stokes,probe")?;
    for i in 0..bundle.pulse_time_fs.len() {
        writeln!(
            file,
            "{:.2},{:.6e},{:.6e},{:.6e}",
            bundle.pulse_time_fs[i],
            bundle.pump_intensity[i],
            bundle.stokes_intensity[i],
            bundle.probe_intensity[i],
        )?;
    }

    println!("Pulse traces written to: {}", path.display());
    Ok(())
}

/// Write the full result bundle to a JSON file.
pub fn write_bundle_json(bundle: &OutputBundle, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(bundle)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Bundle (JSON) written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_assigns_missing_ids_without_collision() {
        let toml_src = r#"
            [[mode]]
            raman_shift_cm1 = 2917.0
            strength = 1.0
            dephasing_time_ps = 2.0

            [[mode]]
            id = 5
            raman_shift_cm1 = 3019.0
            strength = 0.8
            dephasing_time_ps = 1.8

            [[mode]]
            raman_shift_cm1 = 1534.0
            strength = 0.35
            dephasing_time_ps = 2.5
        "#;
        let job: JobConfig = toml::from_str(toml_src).unwrap();
        let input = build_input(&job);

        let ids: Vec<u64> = input.modes.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![6, 5, 7]);
    }
}
