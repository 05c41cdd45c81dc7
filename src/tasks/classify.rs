// StrideSense Demo — Classify Task
//
// Consumes samples from the sensor channel, drives the shared classifier,
// and forwards committed level changes to the consumer as engine events.

use std::sync::mpsc::{Receiver, Sender};

use stridesense::config::STATUS_LOG_EVERY;
use stridesense::{EngineEvent, Sample, SharedClassifier};

pub fn classify_task(
    sample_rx: Receiver<Sample>,
    event_tx: Sender<EngineEvent>,
    engine: SharedClassifier,
) {
    log::info!("Classify task started");

    let mut sample_count: u64 = 0;

    loop {
        let sample = match sample_rx.recv() {
            Ok(s) => s,
            Err(_) => {
                log::info!("Sensor channel closed — exiting classify task");
                return;
            }
        };

        match engine.update(sample.x, sample.y, sample.z) {
            Ok(result) => {
                if result.changed {
                    let _ = event_tx.send(EngineEvent::LevelChanged(result.level, result.intensity));
                }

                // Once-per-second status line, like the device console.
                if sample_count % STATUS_LOG_EVERY == 0 {
                    log::debug!(
                        "[{:05}] {:15} | var {:.4} | mag {:.2} g{}",
                        sample_count,
                        result.level.display_name(),
                        result.intensity,
                        result.magnitude,
                        if engine.is_locked() { " | LOCKED" } else { "" },
                    );
                }
            }
            Err(e) => {
                log::warn!("Sample rejected: {}", e);
            }
        }

        sample_count += 1;
    }
}
