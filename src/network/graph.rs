use crate::network::error::NetworkError;
use num_traits::NumAssign;
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub const SUPER_SOURCE_LABEL: &str = "source";
pub const SUPER_SINK_LABEL: &str = "sink";

/// Probabilistic degradation attributes of a single edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weather {
    pub slowing_prob: f64,
    pub slowing_factor: f64,
    pub blocking_prob: f64,
}

impl Default for Weather {
    fn default() -> Self {
        Self { slowing_prob: 0.0, slowing_factor: 1.0, blocking_prob: 0.0 }
    }
}

impl Weather {
    pub fn slowing(slowing_prob: f64, slowing_factor: f64) -> Result<Self, NetworkError> {
        for p in [slowing_prob, slowing_factor] {
            if !(0.0..=1.0).contains(&p) {
                return Err(NetworkError::InvalidProbability(p));
            }
        }
        Ok(Self { slowing_prob, slowing_factor, blocking_prob: 0.0 })
    }

    pub fn blocking(blocking_prob: f64) -> Result<Self, NetworkError> {
        if !(0.0..=1.0).contains(&blocking_prob) {
            return Err(NetworkError::InvalidProbability(blocking_prob));
        }
        Ok(Self { slowing_prob: 0.0, slowing_factor: 1.0, blocking_prob })
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub capacity: Flow,
    pub weather: Weather,
}

/// Directed multi-source/multi-sink network with per-edge weather attributes.
#[derive(Clone)]
pub struct FlowNetwork<Flow> {
    labels: Vec<String>,
    label_index: HashMap<String, usize>,
    pub(crate) edges: Vec<Edge<Flow>>,
    pub(crate) sources: BTreeSet<usize>,
    pub(crate) sinks: BTreeSet<usize>,
}

impl<Flow> Default for FlowNetwork<Flow> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Flow> FlowNetwork<Flow> {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            label_index: HashMap::new(),
            edges: Vec::new(),
            sources: BTreeSet::new(),
            sinks: BTreeSet::new(),
        }
    }
}

impl<Flow> FlowNetwork<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn add_node(&mut self, label: &str) -> Result<usize, NetworkError> {
        if label == SUPER_SOURCE_LABEL || label == SUPER_SINK_LABEL {
            return Err(NetworkError::ReservedLabel(label.to_string()));
        }
        if self.label_index.contains_key(label) {
            return Err(NetworkError::DuplicateLabel(label.to_string()));
        }

        let node = self.labels.len();
        self.labels.push(label.to_string());
        self.label_index.insert(label.to_string(), node);
        Ok(node)
    }

    pub fn node_id(&self, label: &str) -> Option<usize> {
        self.label_index.get(label).copied()
    }

    pub fn label(&self, node: usize) -> &str {
        &self.labels[node]
    }

    pub fn add_source(&mut self, node: usize) -> Result<(), NetworkError> {
        if node >= self.num_nodes() {
            return Err(NetworkError::UnknownNode(node));
        }
        if self.sinks.contains(&node) {
            return Err(NetworkError::RoleOverlap(self.labels[node].clone()));
        }
        self.sources.insert(node);
        Ok(())
    }

    pub fn add_sink(&mut self, node: usize) -> Result<(), NetworkError> {
        if node >= self.num_nodes() {
            return Err(NetworkError::UnknownNode(node));
        }
        if self.sources.contains(&node) {
            return Err(NetworkError::RoleOverlap(self.labels[node].clone()));
        }
        self.sinks.insert(node);
        Ok(())
    }

    pub fn sources(&self) -> &BTreeSet<usize> {
        &self.sources
    }

    pub fn sinks(&self) -> &BTreeSet<usize> {
        &self.sinks
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Option<usize> {
        self.add_weather_edge(from, to, capacity, Weather::default())
    }

    pub fn add_weather_edge(&mut self, from: usize, to: usize, capacity: Flow, weather: Weather) -> Option<usize> {
        if from >= self.num_nodes() || to >= self.num_nodes() {
            return None;
        }

        self.edges.push(Edge { from, to, flow: Flow::zero(), capacity, weather });
        Some(self.edges.len() - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        self.edges.get(edge_id).cloned()
    }

    pub fn edges(&self) -> &[Edge<Flow>] {
        &self.edges
    }

    pub fn set_weather(&mut self, edge_id: usize, weather: Weather) -> Option<()> {
        if edge_id >= self.edges.len() {
            return None;
        }
        self.edges[edge_id].weather = weather;
        Some(())
    }

    pub fn reset_flows(&mut self) {
        for edge in self.edges.iter_mut() {
            edge.flow = Flow::zero();
        }
    }

    /// Net flow entering the sink set.
    pub fn total_flow(&self) -> Flow {
        self.edges.iter().fold(Flow::zero(), |mut flow, edge| {
            if self.sinks.contains(&edge.to) {
                flow += edge.flow;
            } else if self.sinks.contains(&edge.from) {
                flow -= edge.flow;
            }
            flow
        })
    }

    /// Incoming flow per sink.
    pub fn sink_flows(&self) -> BTreeMap<usize, Flow> {
        let mut flows: BTreeMap<usize, Flow> = self.sinks.iter().map(|&sink| (sink, Flow::zero())).collect();
        for edge in &self.edges {
            if let Some(value) = flows.get_mut(&edge.to) {
                *value += edge.flow;
            }
        }
        flows
    }

    /// Drops zero-flow edges and then-isolated nodes, remapping node ids.
    pub fn clean(&self) -> Self {
        let mut keep = vec![false; self.num_nodes()];
        for edge in &self.edges {
            if edge.flow != Flow::zero() {
                keep[edge.from] = true;
                keep[edge.to] = true;
            }
        }

        let mut cleaned = Self::new();
        let mut remap = vec![usize::MAX; self.num_nodes()];
        for node in 0..self.num_nodes() {
            if !keep[node] {
                continue;
            }
            remap[node] = cleaned.labels.len();
            cleaned.label_index.insert(self.labels[node].clone(), cleaned.labels.len());
            cleaned.labels.push(self.labels[node].clone());
        }

        for edge in &self.edges {
            if edge.flow == Flow::zero() {
                continue;
            }
            cleaned.edges.push(Edge { from: remap[edge.from], to: remap[edge.to], ..edge.clone() });
        }

        cleaned.sources = self.sources.iter().filter(|&&node| keep[node]).map(|&node| remap[node]).collect();
        cleaned.sinks = self.sinks.iter().filter(|&&node| keep[node]).map(|&node| remap[node]).collect();
        cleaned
    }
}
