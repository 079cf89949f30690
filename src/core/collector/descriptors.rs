//! Metric descriptors, the table walk plan, and the per-scrape output sink.
//!
//! The descriptor set is fixed at compile time and does not vary with the
//! target count. The sink is rebuilt for every scrape so that no value or
//! label set survives between polls.

use std::collections::HashMap;

use prometheus::{proto::MetricFamily, GaugeVec, Opts, Registry};

use super::convert::{bits_to_bytes, no_convert, ValueConverter};

/// Shape of one output metric: name, help text, and ordered label names.
#[derive(Debug)]
pub struct MetricDescriptor {
    pub name: &'static str,
    pub help: &'static str,
    pub labels: &'static [&'static str],
}

/// Labels carried by every interface gauge, in order.
static INTERFACE_LABELS: &[&str] = &["name", "description", "target"];

pub static UP_DESC: MetricDescriptor = MetricDescriptor {
    name: "junos_up",
    help: "Scrape of target was successful",
    labels: &["target"],
};

pub static RECEIVE_BYTES_DESC: MetricDescriptor = MetricDescriptor {
    name: "junos_interface_receive_bytes",
    help: "Received data in bytes",
    labels: INTERFACE_LABELS,
};

pub static RECEIVE_ERRORS_DESC: MetricDescriptor = MetricDescriptor {
    name: "junos_interface_receive_errors",
    help: "Number of errors caused by incoming packets",
    labels: INTERFACE_LABELS,
};

pub static RECEIVE_DROPS_DESC: MetricDescriptor = MetricDescriptor {
    name: "junos_interface_receive_drops",
    help: "Number of dropped incoming packets",
    labels: INTERFACE_LABELS,
};

pub static TRANSMIT_BYTES_DESC: MetricDescriptor = MetricDescriptor {
    name: "junos_interface_transmit_bytes",
    help: "Transmitted data in bytes",
    labels: INTERFACE_LABELS,
};

pub static TRANSMIT_ERRORS_DESC: MetricDescriptor = MetricDescriptor {
    name: "junos_interface_transmit_errors",
    help: "Number of errors caused by outgoing packets",
    labels: INTERFACE_LABELS,
};

pub static TRANSMIT_DROPS_DESC: MetricDescriptor = MetricDescriptor {
    name: "junos_interface_transmit_drops",
    help: "Number of dropped outgoing packets",
    labels: INTERFACE_LABELS,
};

/// The complete, static descriptor set.
pub static DESCRIPTORS: [&MetricDescriptor; 7] = [
    &UP_DESC,
    &RECEIVE_BYTES_DESC,
    &RECEIVE_ERRORS_DESC,
    &RECEIVE_DROPS_DESC,
    &TRANSMIT_BYTES_DESC,
    &TRANSMIT_ERRORS_DESC,
    &TRANSMIT_DROPS_DESC,
];

/// Interface name column of the extended interface MIB (ifName).
pub const IF_NAME_OID: &str = ".1.3.6.1.2.1.31.1.1.1.1";

/// Interface description column (ifAlias).
pub const IF_DESCRIPTION_OID: &str = ".1.3.6.1.2.1.31.1.1.1.18";

/// One counter table to walk, paired with its output metric shape and the
/// unit conversion applied to every row.
pub struct CounterTable {
    pub oid: &'static str,
    pub descriptor: &'static MetricDescriptor,
    pub convert: ValueConverter,
}

/// The six counter tables of one poll. Throughput counters arrive in bits
/// and are reported in bytes; drop and error counters are used as-is.
pub static COUNTER_TABLES: [CounterTable; 6] = [
    CounterTable {
        oid: ".1.3.6.1.2.1.2.2.1.10",
        descriptor: &RECEIVE_BYTES_DESC,
        convert: bits_to_bytes,
    },
    CounterTable {
        oid: ".1.3.6.1.2.1.2.2.1.16",
        descriptor: &TRANSMIT_BYTES_DESC,
        convert: bits_to_bytes,
    },
    CounterTable {
        oid: ".1.3.6.1.2.1.2.2.1.13",
        descriptor: &RECEIVE_DROPS_DESC,
        convert: no_convert,
    },
    CounterTable {
        oid: ".1.3.6.1.2.1.2.2.1.14",
        descriptor: &RECEIVE_ERRORS_DESC,
        convert: no_convert,
    },
    CounterTable {
        oid: ".1.3.6.1.2.1.2.2.1.19",
        descriptor: &TRANSMIT_DROPS_DESC,
        convert: no_convert,
    },
    CounterTable {
        oid: ".1.3.6.1.2.1.2.2.1.20",
        descriptor: &TRANSMIT_ERRORS_DESC,
        convert: no_convert,
    },
];

/// Output sink for one scrape.
///
/// Holds one gauge family per descriptor, registered in a registry created
/// for this scrape only. The families tolerate concurrent writes from all
/// in-flight target tasks.
pub struct ScrapeMetrics {
    registry: Registry,
    gauges: HashMap<&'static str, GaugeVec>,
}

impl ScrapeMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let mut gauges = HashMap::with_capacity(DESCRIPTORS.len());

        for desc in DESCRIPTORS {
            let gauge = GaugeVec::new(Opts::new(desc.name, desc.help), desc.labels)?;
            registry.register(Box::new(gauge.clone()))?;
            gauges.insert(desc.name, gauge);
        }

        Ok(ScrapeMetrics { registry, gauges })
    }

    /// Emits one sample for `desc` with the given ordered label values.
    ///
    /// # Errors
    ///
    /// Fails if the label value count does not match the descriptor's arity.
    pub fn emit(
        &self,
        desc: &MetricDescriptor,
        value: f64,
        label_values: &[&str],
    ) -> Result<(), prometheus::Error> {
        let gauge = self
            .gauges
            .get(desc.name)
            .ok_or_else(|| prometheus::Error::Msg(format!("unknown metric {}", desc.name)))?;

        gauge.get_metric_with_label_values(label_values)?.set(value);
        Ok(())
    }

    /// Collects everything emitted so far as wire-ready metric families.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }
}
