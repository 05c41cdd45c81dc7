// StrideSense — Demo Runtime
//
// Wires the classification engine into the shape it runs in on the device:
//   - a sensor task producing acceleration samples at ~100 Hz (synthetic
//     scripted movement here, accelerometer hardware on the device),
//   - a classify task driving the shared classifier,
//   - a control task toggling the manual lock mid-run,
//   - the main thread consuming engine events the way the music/display
//     layer reacts to committed level changes.

mod tasks;

use std::sync::mpsc;
use std::thread;

use stridesense::{EngineEvent, SharedClassifier};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("StrideSense demo starting…");

    let engine = SharedClassifier::new();

    // ---- Channels ----------------------------------------------------------
    let (sample_tx, sample_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();

    // ---- Spawn tasks --------------------------------------------------------
    let sensor = thread::Builder::new()
        .name("sensor".into())
        .spawn(move || {
            tasks::sensor::sensor_task(sample_tx);
        })?;

    let classify_engine = engine.clone();
    let classify_event_tx = event_tx.clone();
    let classify = thread::Builder::new()
        .name("classify".into())
        .spawn(move || {
            tasks::classify::classify_task(sample_rx, classify_event_tx, classify_engine);
        })?;

    let control_engine = engine.clone();
    let control = thread::Builder::new()
        .name("control".into())
        .spawn(move || {
            tasks::control::control_task(control_engine, event_tx);
        })?;

    // ---- Consume engine events ---------------------------------------------
    // Ends once both event senders are gone (classify and control exited).
    while let Ok(event) = event_rx.recv() {
        match event {
            EngineEvent::LevelChanged(level, intensity) => {
                log::info!(
                    "→ switching playlist: {} (intensity {:.4})",
                    level.display_name(),
                    intensity
                );
            }
            EngineEvent::LockChanged(true) => {
                log::info!("State LOCKED at {}", engine.current_level().display_name());
            }
            EngineEvent::LockChanged(false) => {
                log::info!("State UNLOCKED");
            }
        }
    }

    for handle in [sensor, classify, control] {
        let _ = handle.join();
    }

    log::info!(
        "Demo complete — final level: {}",
        engine.current_level().display_name()
    );
    Ok(())
}
