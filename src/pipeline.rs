//! Handler dispatch.
//!
//! The pipeline owns no vendor knowledge of its own: it extracts the trap
//! identity from the varbind blob, walks the registered handlers in order,
//! and hands the event to the first handler that claims the trap. Events no
//! handler claims pass through untouched.

use crate::cmdb::CmdbProvider;
use crate::error::Result;
use crate::event::{EnrichedEvent, RawEvent};
use crate::oid::Oid;
use crate::varbind::VarbindBlob;
use std::sync::Arc;

/// A vendor enrichment handler.
///
/// Implementations are stateless and shared; all per-event state lives in the
/// arguments. `matches` must be cheap since every registered handler sees
/// every trap, and registration order is significant where vendor OID spaces
/// overlap.
pub trait TrapHandler: Send + Sync {
    /// Short vendor label used in logs.
    fn name(&self) -> &'static str;

    /// Whether this handler claims the trap.
    fn matches(&self, trap: &Oid, blob: &VarbindBlob<'_>) -> bool;

    /// Produce the normalized incident record for a claimed trap.
    fn enrich(
        &self,
        event: &RawEvent,
        trap: &Oid,
        blob: &VarbindBlob<'_>,
        cmdb: &dyn CmdbProvider,
    ) -> Result<EnrichedEvent>;
}

/// Enrich a single event.
///
/// Returns `Ok(None)` when the event carries no parseable trap identity or
/// no handler claims the trap; the caller leaves such events untouched.
pub fn process(
    handlers: &[Arc<dyn TrapHandler>],
    event: &RawEvent,
    cmdb: &dyn CmdbProvider,
) -> Result<Option<EnrichedEvent>> {
    let blob = VarbindBlob::new(&event.additional_info);
    let Some(trap) = blob.trap_oid() else {
        tracing::debug!(
            target: "trap_enrich::pipeline",
            "no trap identity varbind, passing event through"
        );
        return Ok(None);
    };

    for handler in handlers {
        if !handler.matches(&trap, &blob) {
            continue;
        }
        tracing::debug!(
            target: "trap_enrich::pipeline",
            { handler = handler.name(), trap = %trap },
            "handler claimed trap"
        );
        let enriched = handler.enrich(event, &trap, &blob, cmdb)?;
        return Ok(Some(enriched));
    }

    tracing::debug!(
        target: "trap_enrich::pipeline",
        { trap = %trap },
        "no handler claimed trap, passing event through"
    );
    Ok(None)
}

/// Enrich a batch of events.
///
/// A failed event is logged and skipped; one malformed event never stops the
/// batch. The output preserves input order for the events that enriched.
pub fn process_all(
    handlers: &[Arc<dyn TrapHandler>],
    events: &[RawEvent],
    cmdb: &dyn CmdbProvider,
) -> Vec<EnrichedEvent> {
    let mut enriched = Vec::new();
    for (index, event) in events.iter().enumerate() {
        match process(handlers, event, cmdb) {
            Ok(Some(record)) => enriched.push(record),
            Ok(None) => {}
            Err(error) => {
                tracing::error!(
                    target: "trap_enrich::pipeline",
                    { index = index, error = %error },
                    "event enrichment failed, skipping"
                );
            }
        }
    }
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmdb::NoCmdb;
    use crate::error::Error;
    use crate::oid;
    use crate::route::Category;
    use crate::severity::Severity;
    use std::collections::BTreeMap;

    struct FixedHandler {
        prefix: Oid,
        fail: bool,
    }

    impl FixedHandler {
        fn claiming(prefix: Oid) -> Arc<dyn TrapHandler> {
            Arc::new(Self {
                prefix,
                fail: false,
            })
        }

        fn failing(prefix: Oid) -> Arc<dyn TrapHandler> {
            Arc::new(Self { prefix, fail: true })
        }
    }

    impl TrapHandler for FixedHandler {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn matches(&self, trap: &Oid, _blob: &VarbindBlob<'_>) -> bool {
            trap.starts_with(&self.prefix)
        }

        fn enrich(
            &self,
            event: &RawEvent,
            trap: &Oid,
            _blob: &VarbindBlob<'_>,
            _cmdb: &dyn CmdbProvider,
        ) -> Result<EnrichedEvent> {
            if self.fail {
                return Err(Error::invalid_oid(
                    crate::error::OidErrorKind::Empty,
                    trap.to_string(),
                ));
            }
            Ok(EnrichedEvent {
                source: "test".into(),
                node: "node".into(),
                event_type: "Test Alert".into(),
                resource: "Test".into(),
                severity: Severity::Info,
                description: trap.to_string(),
                short_description: String::new(),
                assignment_group: "team".into(),
                category: Category::General,
                subcategory: String::new(),
                vendor: "Test".into(),
                component_type: None,
                priority: 5,
                impact: None,
                urgency: None,
                correlation_id: String::new(),
                message_key: String::new(),
                attributes: BTreeMap::new(),
                snmp_varbinds: event.additional_info.clone(),
            })
        }
    }

    fn event(trap: &str) -> RawEvent {
        RawEvent::from_payload(format!("1.3.6.1.6.3.1.1.4.1.0 = {trap}\n"))
    }

    #[test]
    fn missing_trap_identity_passes_through() {
        let handlers = vec![FixedHandler::claiming(oid!(1, 3, 6))];
        let raw = RawEvent::from_payload("1.3.6.1.2.1.1.5.0 = web01\n");
        assert!(process(&handlers, &raw, &NoCmdb).unwrap().is_none());
    }

    #[test]
    fn unclaimed_trap_passes_through() {
        let handlers = vec![FixedHandler::claiming(oid!(1, 3, 6, 1, 4, 1, 232))];
        let raw = event("1.3.6.1.4.1.789.0.16");
        assert!(process(&handlers, &raw, &NoCmdb).unwrap().is_none());
    }

    #[test]
    fn first_matching_handler_wins() {
        let handlers = vec![
            FixedHandler::failing(oid!(1, 3, 6, 1, 4, 1, 789)),
            FixedHandler::claiming(oid!(1, 3, 6, 1, 4, 1)),
        ];
        // The broader second handler never sees a 789 trap.
        let raw = event("1.3.6.1.4.1.789.0.16");
        assert!(process(&handlers, &raw, &NoCmdb).is_err());

        let raw = event("1.3.6.1.4.1.232.0.1001");
        let record = process(&handlers, &raw, &NoCmdb).unwrap().unwrap();
        assert_eq!(record.description, "1.3.6.1.4.1.232.0.1001");
    }

    #[test]
    fn batch_skips_failed_events() {
        let handlers = vec![
            FixedHandler::failing(oid!(1, 3, 6, 1, 4, 1, 789)),
            FixedHandler::claiming(oid!(1, 3, 6, 1, 4, 1, 232)),
        ];
        let events = vec![
            event("1.3.6.1.4.1.232.0.1001"),
            event("1.3.6.1.4.1.789.0.16"),
            event("1.3.6.1.4.1.232.0.1014"),
        ];
        let enriched = process_all(&handlers, &events, &NoCmdb);
        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].description, "1.3.6.1.4.1.232.0.1001");
        assert_eq!(enriched[1].description, "1.3.6.1.4.1.232.0.1014");
    }
}
