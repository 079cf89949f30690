//! The collector façade: fans the per-target engine out across all
//! configured targets and gathers their output once every target finished.

use std::sync::Arc;

use futures_util::future::join_all;
use prometheus::proto::MetricFamily;
use tracing::error;

use crate::snmp::SnmpConnector;

pub mod convert;
pub mod descriptors;
pub mod engine;
pub mod error;
pub mod labels;

use self::descriptors::{MetricDescriptor, ScrapeMetrics, DESCRIPTORS};

/// Polls a static set of Juniper targets and republishes their interface
/// counters as labeled gauges.
pub struct JunosCollector {
    targets: Vec<String>,
    community: String,
    port: u16,
    connector: Arc<dyn SnmpConnector>,
}

impl JunosCollector {
    pub fn new(
        targets: Vec<String>,
        community: String,
        port: u16,
        connector: Arc<dyn SnmpConnector>,
    ) -> Self {
        JunosCollector {
            targets,
            community,
            port,
            connector,
        }
    }

    /// The fixed descriptor set. Independent of the target count and stable
    /// for the process lifetime.
    pub fn describe(&self) -> &'static [&'static MetricDescriptor] {
        &DESCRIPTORS
    }

    /// Polls every configured target concurrently and returns the gathered
    /// metric families.
    ///
    /// One task per target, no shared state between targets, one shared
    /// sink. The call returns once the slowest target finished; there is no
    /// overall deadline and no early abort. Every target contributes exactly
    /// one reachability sample, however badly its poll went.
    pub async fn collect(&self) -> Result<Vec<MetricFamily>, prometheus::Error> {
        let metrics = Arc::new(ScrapeMetrics::new()?);

        let tasks: Vec<_> = self
            .targets
            .iter()
            .cloned()
            .map(|target| {
                let connector = Arc::clone(&self.connector);
                let community = self.community.clone();
                let metrics = Arc::clone(&metrics);
                let port = self.port;

                tokio::spawn(async move {
                    engine::collect_target(
                        connector.as_ref(),
                        &target,
                        port,
                        &community,
                        &metrics,
                    )
                    .await;
                })
            })
            .collect();

        for result in join_all(tasks).await {
            if let Err(err) = result {
                // A panicking target task must not take down its siblings.
                error!(error = %err, "target collection task failed to join");
            }
        }

        Ok(metrics.gather())
    }
}
