//! Offline support gateway with canned answers.
//!
//! Used when no API key is configured and by tests. Keyword-matched
//! replies in the product's voice, so the chat panel stays alive in a
//! demo without credentials.

use async_trait::async_trait;
use tracing::debug;

use super::{Result, SupportGateway};

/// Answers from a fixed table, no network involved.
#[derive(Debug, Default)]
pub struct CannedGateway;

impl CannedGateway {
    pub fn new() -> Self {
        Self
    }

    fn reply_for(question: &str) -> &'static str {
        let q = question.to_lowercase();
        if ["price", "cost", "buy", "reserve", "order"]
            .iter()
            .any(|k| q.contains(k))
        {
            "Porta One launches at 499 EUR with reservations open now. Early units ship \
             from our Valencia facility this quarter."
        } else if ["secure", "security", "lock", "safe", "steal"]
            .iter()
            .any(|k| q.contains(k))
        {
            "The vault is 3.5mm cold-forged carbon steel with a hardware crypto enclave. \
             The door only unlocks for a verified courier key, and every open is logged."
        } else if ["temp", "cold", "heat", "food", "climate"]
            .iter()
            .any(|k| q.contains(k))
        {
            "Passive climate control keeps the compartment near 18 degrees C, so \
             temperature-sensitive packages are fine until you get home."
        } else if ["deliver", "courier", "work", "how", "protocol"]
            .iter()
            .any(|k| q.contains(k))
        {
            "Couriers carry a one-time digital key. Porta scans it, verifies the identity \
             against your expected deliveries, opens, and re-locks once the package is \
             deposited. You can watch the whole protocol on the Lab view."
        } else {
            "Thanks for reaching out to Porta support. Ask me about pricing, security, \
             climate control, or how a delivery works."
        }
    }
}

#[async_trait]
impl SupportGateway for CannedGateway {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn ask(&self, question: &str) -> Result<String> {
        debug!("answering from the canned table");
        Ok(Self::reply_for(question).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn canned_gateway_never_fails() {
        let gateway = CannedGateway::new();
        let reply = gateway.ask("anything at all").await.unwrap();
        assert!(!reply.is_empty());
    }

    #[test]
    fn keywords_pick_the_matching_reply() {
        assert!(CannedGateway::reply_for("What does it cost?").contains("499 EUR"));
        assert!(CannedGateway::reply_for("Is my package SAFE?").contains("carbon steel"));
        assert!(CannedGateway::reply_for("groceries in the heat?").contains("climate"));
        assert!(CannedGateway::reply_for("how does delivery work").contains("digital key"));
    }

    #[test]
    fn unmatched_questions_get_the_generic_reply() {
        assert!(CannedGateway::reply_for("zzz").contains("Porta support"));
    }
}
