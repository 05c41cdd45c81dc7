// StrideSense Demo — Synthetic Sensor Task
//
// Stands in for the accelerometer: plays back a scripted session of movement
// phases at the sensor cadence and pushes samples into the channel for the
// classify task. Each phase is a sine wobble on top of 1 g of gravity on the
// z axis, sized so the windowed variance lands in the intended band.

use std::f32::consts::TAU;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use stridesense::config::{PHASE_DURATION_MS, SAMPLE_INTERVAL_MS};
use stridesense::Sample;

/// (label, wobble amplitude in g). Variance of a sine is ~amplitude²/2.
const PHASES: [(&str, f32); 4] = [
    ("still", 0.0),
    ("light walk", 0.35),
    ("brisk walk", 0.7),
    ("running", 1.6),
];

const WOBBLE_HZ: f32 = 5.0;

pub fn sensor_task(sample_tx: Sender<Sample>) {
    log::info!("Sensor task started ({} scripted phases)", PHASES.len());

    let interval = Duration::from_millis(SAMPLE_INTERVAL_MS);
    let samples_per_phase = (PHASE_DURATION_MS / SAMPLE_INTERVAL_MS) as usize;
    let dt = SAMPLE_INTERVAL_MS as f32 / 1000.0;

    let mut t = 0.0f32;
    for (label, amplitude) in PHASES {
        log::info!("Sensor phase: {} (amplitude {:.2} g)", label, amplitude);

        for _ in 0..samples_per_phase {
            let wobble = (TAU * WOBBLE_HZ * t).sin();
            let sample = Sample::new(
                0.3 * amplitude * wobble,
                0.0,
                1.0 + amplitude * wobble,
            );

            if sample_tx.send(sample).is_err() {
                log::warn!("Sample channel closed — exiting sensor task");
                return;
            }

            t += dt;
            thread::sleep(interval);
        }
    }

    log::info!("Script complete — sensor task done");
}
