use crate::augmentation::csr::ResidualCsr;
use crate::network::graph::{FlowNetwork, Weather};
use num_traits::{Bounded, NumAssign};
use std::collections::VecDeque;

/// A network with a super source/sink attached, held in residual form.
///
/// The super nodes take the last two ids and connect to every source/sink
/// with effectively infinite capacity. The original network copy is kept so
/// the result of a run can be written back without the super nodes.
#[derive(Clone)]
pub struct ResidualGraph<Flow> {
    pub(crate) csr: ResidualCsr<Flow>,
    network: FlowNetwork<Flow>,
    super_source: usize,
    super_sink: usize,
    num_network_edges: usize,
}

impl<Flow> ResidualGraph<Flow>
where
    Flow: NumAssign + Ord + Copy + Bounded,
{
    /// Existing flow on the network is preserved, so a residual graph built
    /// from a max-flow network admits no augmenting path.
    pub fn from_network(network: &FlowNetwork<Flow>) -> Self {
        let super_source = network.num_nodes();
        let super_sink = super_source + 1;

        let mut edges: Vec<(usize, usize, Flow, Flow)> =
            network.edges().iter().map(|edge| (edge.from, edge.to, edge.flow, edge.capacity)).collect();
        for &source in network.sources() {
            edges.push((super_source, source, Flow::zero(), Flow::max_value()));
        }
        for &sink in network.sinks() {
            edges.push((sink, super_sink, Flow::zero(), Flow::max_value()));
        }

        Self {
            csr: ResidualCsr::build(network.num_nodes() + 2, &edges),
            network: network.clone(),
            super_source,
            super_sink,
            num_network_edges: network.num_edges(),
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.csr.num_nodes
    }

    /// Edge count of the underlying network, excluding super edges.
    #[inline]
    pub fn num_network_edges(&self) -> usize {
        self.num_network_edges
    }

    #[inline]
    pub fn super_source(&self) -> usize {
        self.super_source
    }

    #[inline]
    pub fn super_sink(&self) -> usize {
        self.super_sink
    }

    pub fn edge_ends(&self, edge_id: usize) -> (usize, usize) {
        let edge = &self.network.edges[edge_id];
        (edge.from, edge.to)
    }

    pub fn edge_labels(&self, edge_id: usize) -> (&str, &str) {
        let (u, v) = self.edge_ends(edge_id);
        (self.network.label(u), self.network.label(v))
    }

    pub fn capacity(&self, edge_id: usize) -> Flow {
        self.csr.inside_edge_list[self.csr.edge_index_to_inside_edge_index[edge_id]].upper
    }

    pub fn flow(&self, edge_id: usize) -> Flow {
        self.csr.inside_edge_list[self.csr.edge_index_to_inside_edge_index[edge_id]].flow
    }

    pub fn weather(&self, edge_id: usize) -> Weather {
        self.network.edges[edge_id].weather
    }

    pub fn increase_capacity(&mut self, edge_id: usize, delta: Flow) {
        let i = self.csr.edge_index_to_inside_edge_index[edge_id];
        self.csr.inside_edge_list[i].upper += delta;
    }

    pub fn decrease_capacity(&mut self, edge_id: usize, delta: Flow) {
        let i = self.csr.edge_index_to_inside_edge_index[edge_id];
        self.csr.inside_edge_list[i].upper -= delta;
    }

    pub(crate) fn push_flow(&mut self, inside_edge_index: usize, flow: Flow) {
        self.csr.push_flow(inside_edge_index, flow);
    }

    fn reachable_from(&self, origin: usize) -> Vec<bool> {
        let mut visited = vec![false; self.csr.num_nodes];
        let mut que = VecDeque::from([origin]);
        visited[origin] = true;

        while let Some(u) = que.pop_front() {
            for edge in self.csr.neighbors(u) {
                if !visited[edge.to] && edge.residual_capacity() > Flow::zero() {
                    visited[edge.to] = true;
                    que.push_back(edge.to);
                }
            }
        }
        visited
    }

    /// Nodes reachable from the super source by positive residual capacity.
    pub fn reachable_from_source(&self) -> Vec<bool> {
        self.reachable_from(self.super_source)
    }

    /// Forward reachability starting at the super sink. The looser sink-side
    /// set used by the min-cut candidate form.
    pub fn forward_reachable_from_sink(&self) -> Vec<bool> {
        self.reachable_from(self.super_sink)
    }

    /// Nodes from which the super sink is reachable, via reachability on the
    /// reversed residual graph.
    pub fn reverse_reachable_to_sink(&self) -> Vec<bool> {
        let mut visited = vec![false; self.csr.num_nodes];
        let mut que = VecDeque::from([self.super_sink]);
        visited[self.super_sink] = true;

        while let Some(v) = que.pop_front() {
            for edge in self.csr.neighbors(v) {
                // the paired entry runs edge.to -> v
                let paired = &self.csr.inside_edge_list[edge.rev];
                if !visited[edge.to] && paired.residual_capacity() > Flow::zero() {
                    visited[edge.to] = true;
                    que.push_back(edge.to);
                }
            }
        }
        visited
    }

    /// Writes current flows and capacities back into a copy of the network,
    /// dropping the super nodes.
    pub fn extract_network(&self) -> FlowNetwork<Flow> {
        let mut network = self.network.clone();
        for edge_id in 0..self.num_network_edges {
            let inside = &self.csr.inside_edge_list[self.csr.edge_index_to_inside_edge_index[edge_id]];
            network.edges[edge_id].flow = inside.flow;
            network.edges[edge_id].capacity = inside.upper;
        }
        network
    }
}
