// StrideSense Demo — Lock Control Task
//
// Plays the role of the physical lock button: toggles the activity lock at
// scripted times, concurrently with the classify task's update stream.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use stridesense::config::{LOCK_AT_MS, UNLOCK_AT_MS};
use stridesense::{EngineEvent, SharedClassifier};

pub fn control_task(engine: SharedClassifier, event_tx: Sender<EngineEvent>) {
    log::info!("Control task started");

    thread::sleep(Duration::from_millis(LOCK_AT_MS));
    let locked = engine.toggle_lock();
    let _ = event_tx.send(EngineEvent::LockChanged(locked));

    thread::sleep(Duration::from_millis(UNLOCK_AT_MS - LOCK_AT_MS));
    let locked = engine.toggle_lock();
    let _ = event_tx.send(EngineEvent::LockChanged(locked));

    log::info!("Control task done");
}
