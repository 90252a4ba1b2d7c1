//! Delivery history shown on the dashboard.
//!
//! Prepend-only and session-lifetime: newest record first, nothing is
//! deduplicated or evicted, nothing is persisted.

use crate::model::{DeliveryRecord, DeliveryStatus};

/// Ordered delivery records, newest first.
#[derive(Debug, Default)]
pub struct DeliveryHistory {
    records: Vec<DeliveryRecord>,
}

impl DeliveryHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The history pre-populated with the two demo deliveries.
    pub fn seeded() -> Self {
        Self {
            records: vec![
                DeliveryRecord {
                    id: "1".to_string(),
                    time: "10:30 AM".to_string(),
                    carrier: "Amazon Prime".to_string(),
                    status: DeliveryStatus::Delivered,
                    package_id: "AMZ-4421".to_string(),
                },
                DeliveryRecord {
                    id: "2".to_string(),
                    time: "Yesterday".to_string(),
                    carrier: "UPS Premium".to_string(),
                    status: DeliveryStatus::Delivered,
                    package_id: "UPS-9901".to_string(),
                },
            ],
        }
    }

    /// Inserts a record at the front.
    pub fn prepend(&mut self, record: DeliveryRecord) {
        self.records.insert(0, record);
    }

    /// All records, newest first.
    pub fn list(&self) -> &[DeliveryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_history_has_the_demo_rows() {
        let history = DeliveryHistory::seeded();
        assert_eq!(history.len(), 2);
        assert_eq!(history.list()[0].package_id, "AMZ-4421");
        assert_eq!(history.list()[1].package_id, "UPS-9901");
    }

    #[test]
    fn prepend_puts_newest_first() {
        let mut history = DeliveryHistory::seeded();
        history.prepend(DeliveryRecord::simulated());
        assert_eq!(history.len(), 3);
        assert_eq!(history.list()[0].carrier, "Simulated");
        assert_eq!(history.list()[1].package_id, "AMZ-4421");
    }

    #[test]
    fn empty_history_is_empty() {
        let history = DeliveryHistory::new();
        assert!(history.is_empty());
        assert!(history.list().is_empty());
    }
}
