use crate::error::InvalidGraph;
use crate::max_flow::MaxFlow;
use log::debug;

/// Attribution of a three-tier flow (origins -> hubs -> sinks) to individual origins.
///
/// Flow is fungible at a hub, so there is no unique answer to "how much of what reached this
/// sink came from that origin". This type uses the proportional heuristic: every origin owns
/// a share of each hub equal to its fraction of the hub's inflow (from the listed origins),
/// and each hub's outflow to a sink is split among origins by those shares. Any other
/// split consistent with the aggregate in/out flows at each hub is equally valid.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowAttribution {
    origins: Vec<usize>,
    hubs: Vec<usize>,
    sinks: Vec<usize>,
    /// `shares[o][h]`: fraction of hub `h` inflow that came from origin `o`.
    shares: Vec<Vec<f64>>,
    /// `attributed[o][s]`: flow into sink `s` attributed to origin `o`.
    attributed: Vec<Vec<f64>>,
}

impl FlowAttribution {
    /// Attribute the `hubs -> sinks` flow of `flow` to `origins`.
    ///
    /// Only positive flow between the listed tiers is taken into account. A hub that receives
    /// no flow from the listed origins contributes nothing.
    pub fn compute(
        flow: &MaxFlow,
        origins: &[usize],
        hubs: &[usize],
        sinks: &[usize],
    ) -> Result<FlowAttribution, InvalidGraph> {
        let node_count = flow.node_count();
        if let Some(node) = origins
            .iter()
            .chain(hubs)
            .chain(sinks)
            .find(|node| **node >= node_count)
        {
            return Err(InvalidGraph::NodeOutOfRange {
                node: *node,
                node_count,
            });
        }

        let hub_inflow: Vec<i64> = hubs
            .iter()
            .map(|hub| origins.iter().map(|o| flow.edge_flow(*o, *hub)).sum::<i64>())
            .collect();

        let shares: Vec<Vec<f64>> = origins
            .iter()
            .map(|origin| {
                hubs.iter()
                    .zip(&hub_inflow)
                    .map(|(hub, total)| {
                        if *total > 0 {
                            flow.edge_flow(*origin, *hub) as f64 / *total as f64
                        } else {
                            0.0
                        }
                    })
                    .collect()
            })
            .collect();

        let attributed: Vec<Vec<f64>> = shares
            .iter()
            .map(|origin_shares| {
                sinks
                    .iter()
                    .map(|sink| {
                        hubs.iter()
                            .zip(origin_shares)
                            .map(|(hub, share)| flow.edge_flow(*hub, *sink) as f64 * share)
                            .sum::<f64>()
                    })
                    .collect()
            })
            .collect();

        debug!(
            "Attributed flow of {} hubs to {} origins across {} sinks.",
            hubs.len(),
            origins.len(),
            sinks.len()
        );

        Ok(FlowAttribution {
            origins: origins.to_vec(),
            hubs: hubs.to_vec(),
            sinks: sinks.to_vec(),
            shares,
            attributed,
        })
    }

    pub fn origins(&self) -> &[usize] {
        &self.origins
    }

    pub fn hubs(&self) -> &[usize] {
        &self.hubs
    }

    pub fn sinks(&self) -> &[usize] {
        &self.sinks
    }

    /// Fraction of the inflow of `hub` contributed by `origin` (both are node indices).
    /// Returns `None` if either node is not part of this attribution.
    pub fn share(&self, origin: usize, hub: usize) -> Option<f64> {
        let o = position(&self.origins, origin)?;
        let h = position(&self.hubs, hub)?;
        Some(self.shares[o][h])
    }

    /// Flow into `sink` attributed to `origin` (both are node indices).
    /// Returns `None` if either node is not part of this attribution.
    pub fn attributed(&self, origin: usize, sink: usize) -> Option<f64> {
        let o = position(&self.origins, origin)?;
        let s = position(&self.sinks, sink)?;
        Some(self.attributed[o][s])
    }

    /// Same as [`FlowAttribution::attributed`], rounded to the nearest whole unit.
    pub fn rounded(&self, origin: usize, sink: usize) -> Option<i64> {
        self.attributed(origin, sink).map(|it| it.round() as i64)
    }

    /// Total flow attributed to `origin` over all sinks.
    pub fn origin_total(&self, origin: usize) -> Option<f64> {
        let o = position(&self.origins, origin)?;
        Some(self.attributed[o].iter().sum())
    }
}

fn position(nodes: &[usize], node: usize) -> Option<usize> {
    nodes.iter().position(|it| *it == node)
}
