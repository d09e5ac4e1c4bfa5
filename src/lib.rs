//! # trap-enrich
//!
//! SNMP trap classification and event enrichment for incident management.
//!
//! Monitoring platforms deliver SNMP traps as opaque varbind text blobs.
//! This crate turns those blobs into normalized incident records: it reads
//! the trap identity OID, classifies the trap into a vendor family, looks
//! the trap up in that vendor's catalog, normalizes the reporting hostname,
//! resolves severity (refining it from live status codes where the vendor
//! reports them), derives priority/impact/urgency, routes the event to a
//! support group, and stamps deterministic correlation keys.
//!
//! ## Supported vendor families
//!
//! - Dell iDRAC / OpenManage (enterprise 674)
//! - Dell PowerStore (674.11000.2000 / 674.10893)
//! - Dell/EMC storage arrays (1139: PowerStore, Unity, ECS)
//! - HP/HPE iLO (232 and 2320)
//! - NetApp ONTAP (789)
//!
//! ## Quick Start
//!
//! ```rust
//! use trap_enrich::cmdb::NoCmdb;
//! use trap_enrich::event::RawEvent;
//! use trap_enrich::{pipeline, vendor};
//!
//! let event = RawEvent::from_payload(
//!     "1.3.6.1.6.3.1.1.4.1.0 = 1.3.6.1.4.1.674.10892.1.0.1052\n\
//!      1.3.6.1.2.1.1.5.0 = web01-idrac\n",
//! );
//!
//! let handlers = vendor::registry();
//! let enriched = pipeline::process(&handlers, &event, &NoCmdb)
//!     .unwrap()
//!     .expect("a Dell trap is always claimed");
//! assert_eq!(enriched.node, "web01");
//! assert_eq!(enriched.priority, 1);
//! ```
//!
//! Enrichment is deterministic: the same payload always yields the same
//! record, so correlation keys are stable across runs.

pub mod catalog;
pub mod cmdb;
pub mod error;
pub mod event;
pub mod hostname;
pub mod oid;
pub mod pipeline;
pub mod route;
pub mod severity;
pub mod status;
pub mod varbind;
pub mod vendor;

pub use catalog::{Catalog, TrapDescriptor};
pub use error::{Error, Result};
pub use event::{EnrichedEvent, RawEvent};
pub use oid::Oid;
pub use pipeline::TrapHandler;
pub use route::Category;
pub use severity::Severity;
pub use varbind::VarbindBlob;
