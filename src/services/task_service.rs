use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::travel::{ProcessingStatus, TaskRecord};

/// Outcome of one destination's background job.
#[derive(Debug)]
pub enum DestinationOutcome {
    Success {
        activities: Vec<String>,
        restaurants: Vec<String>,
        accommodation: Vec<String>,
    },
    Failure(String),
}

/// Process-wide task registry. Records live in memory only and are lost on
/// restart; completed tasks are never evicted, so memory grows with the
/// number of submissions over the process lifetime.
#[derive(Clone, Default)]
pub struct TaskStore {
    tasks: Arc<RwLock<HashMap<String, TaskRecord>>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: TaskRecord) {
        self.tasks
            .write()
            .await
            .insert(record.task_id.clone(), record);
    }

    pub async fn get(&self, task_id: &str) -> Option<TaskRecord> {
        self.tasks.read().await.get(task_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }

    /// Write a destination's terminal outcome and refresh the batch summary
    /// in one write section, so a concurrent poller never sees the slot and
    /// the aggregate status out of sync.
    pub async fn complete_destination(
        &self,
        task_id: &str,
        index: usize,
        outcome: DestinationOutcome,
    ) {
        let mut tasks = self.tasks.write().await;
        let record = match tasks.get_mut(task_id) {
            Some(record) => record,
            None => {
                eprintln!("Task {} vanished before job completion", task_id);
                return;
            }
        };
        let slot = match record.destinations.get_mut(index) {
            Some(slot) => slot,
            None => {
                eprintln!("Task {} has no destination at index {}", task_id, index);
                return;
            }
        };

        match outcome {
            DestinationOutcome::Success {
                activities,
                restaurants,
                accommodation,
            } => {
                slot.activities = Some(activities);
                slot.restaurants = Some(restaurants);
                slot.accommodation = Some(accommodation);
                slot.processing_status = ProcessingStatus::Completed;
            }
            DestinationOutcome::Failure(error) => {
                slot.error = Some(error);
                slot.processing_status = ProcessingStatus::Failed;
            }
        }

        // Per-destination status is authoritative; the batch status is a
        // best-effort summary over the destinations seen so far.
        let total = record.destinations.len();
        let completed = record
            .destinations
            .iter()
            .filter(|d| d.processing_status == ProcessingStatus::Completed)
            .count();
        let failed = record
            .destinations
            .iter()
            .filter(|d| d.processing_status == ProcessingStatus::Failed)
            .count();

        if completed + failed == total {
            if failed == 0 {
                record.status = ProcessingStatus::Completed;
                record.message = format!("Successfully processed {} destinations", total);
            } else {
                record.status = ProcessingStatus::Failed;
                record.message = format!("{} of {} destinations failed", failed, total);
            }
        } else {
            record.message = format!("Processed {} of {} destinations", completed + failed, total);
        }
    }
}
