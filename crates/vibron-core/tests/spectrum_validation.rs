//! Integration tests: spectroscopic validation of the simulated spectra.
//!
//! A single known resonance must reappear at the right Raman shift in both
//! detection schemes, and the excitation profile must sit at the
//! pump−Stokes difference frequency.

use vibron_core::library;
use vibron_core::pipeline::Simulator;
use vibron_core::types::{SimulationInput, VibrationalMode};

/// Raman shift (cm⁻¹) at the maximum of a spectrum.
fn peak_shift(axis: &[f64], values: &[f64]) -> f64 {
    let (idx, _) = values
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(bi, bv), (i, &v)| {
            if v > bv {
                (i, v)
            } else {
                (bi, bv)
            }
        });
    axis[idx]
}

fn ch4_stretch_input() -> SimulationInput {
    SimulationInput {
        pulses: library::default_pulses(),
        modes: vec![VibrationalMode {
            id: 1,
            raman_shift_cm1: 2917.0,
            strength: 1.0,
            dephasing_time_ps: 2.0,
        }],
        nrb_level: 0.0,
        normalise: false,
    }
}

#[test]
fn test_single_mode_reappears_in_conventional_spectrum() {
    let bundle = Simulator::default().run(&ch4_stretch_input()).expect("run");

    let peak = peak_shift(&bundle.shift_axis_cm1, &bundle.cars_intensity);
    eprintln!("conventional fs-CARS peak at {} cm⁻¹", peak);
    assert!(
        (peak - 2917.0).abs() <= 2.0,
        "fs-CARS peak at {} cm⁻¹, expected within one bin of 2917",
        peak
    );
}

#[test]
fn test_single_mode_reappears_in_fast_cars_spectrum() {
    let bundle = Simulator::default().run(&ch4_stretch_input()).expect("run");

    let peak = peak_shift(&bundle.shift_axis_cm1, &bundle.fast_cars_spectrum);
    eprintln!("FAST-CARS peak at {} cm⁻¹", peak);
    assert!(
        (peak - 2917.0).abs() <= 2.0,
        "FAST-CARS peak at {} cm⁻¹, expected within one bin of 2917",
        peak
    );

    // Normalised to unit peak.
    let max = bundle
        .fast_cars_spectrum
        .iter()
        .cloned()
        .fold(0.0_f64, f64::max);
    assert_eq!(max, 1.0);
}

#[test]
fn test_excitation_profile_sits_at_the_beat_frequency() {
    let bundle = Simulator::default().run(&ch4_stretch_input()).expect("run");

    // 800 nm pump against 1030 nm Stokes beats at
    // 1e7/800 − 1e7/1030 ≈ 2791 cm⁻¹.
    let peak = peak_shift(&bundle.shift_axis_cm1, &bundle.excitation_profile);
    eprintln!("beat profile peak at {} cm⁻¹", peak);
    assert!(
        (peak - 2791.0).abs() <= 20.0,
        "beat profile peaked at {} cm⁻¹, expected near 2791",
        peak
    );

    let max = bundle
        .excitation_profile
        .iter()
        .cloned()
        .fold(0.0_f64, f64::max);
    assert_eq!(max, 1.0);

    // 15 fs pulses are bandwidth-limited to a single broad lobe: the
    // profile is substantial at the CH₄ stretch, 126 cm⁻¹ off the beat
    // centre.
    let idx_2917 = (2917.0_f64 - 500.0) as usize / 2;
    assert!(bundle.excitation_profile[idx_2917] > 0.5);
}

#[test]
fn test_deconvolution_preserves_the_peak_location() {
    let mut input = ch4_stretch_input();
    input.normalise = true;
    let bundle = Simulator::default().run(&input).expect("run");

    let peak = peak_shift(&bundle.shift_axis_cm1, &bundle.fast_cars_spectrum);
    assert!(
        (peak - 2917.0).abs() <= 4.0,
        "deconvolved FAST-CARS peak at {} cm⁻¹",
        peak
    );
}

#[test]
fn test_interferogram_rings_at_the_mode_period() {
    let bundle = Simulator::default().run(&ch4_stretch_input()).expect("run");

    // After the excitation transient the interferogram is a damped
    // oscillation at 2917 cm⁻¹ (period ≈ 11.4 fs). Verify the ringing
    // decays between 1 ps and 5 ps with T₂ = 2 ps.
    let delays = &bundle.fast_cars_delays_ps;
    let signal = &bundle.fast_cars_interferogram;

    let window_max = |centre_ps: f64| {
        delays
            .iter()
            .zip(signal.iter())
            .filter(|(&d, _)| (d - centre_ps).abs() < 0.2)
            .fold(0.0_f64, |m, (_, &v)| m.max(v.abs()))
    };

    let early = window_max(1.0);
    let late = window_max(5.0);
    eprintln!("ring amplitude: {:.3e} at 1 ps, {:.3e} at 5 ps", early, late);

    assert!(early > 0.0);
    // Amplitude ratio ≈ exp(−4 ps / 2 ps) ≈ 0.135; allow generous margins
    // for the AC offset and envelope sampling.
    let ratio = late / early;
    assert!(
        ratio > 0.02 && ratio < 0.4,
        "expected T₂-limited decay, got ratio {}",
        ratio
    );
}
