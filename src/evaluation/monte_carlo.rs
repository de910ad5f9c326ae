use crate::augmentation::incremental::maximum_flow;
use crate::network::graph::FlowNetwork;
use num_traits::{Bounded, NumAssign, NumCast};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Monte Carlo max-flow estimator. Each trial samples an independent
/// realization of the weather and solves it exactly; trials share no state
/// beyond the seeded generator.
pub struct MonteCarlo {
    rng: StdRng,
    trials: usize,
}

impl MonteCarlo {
    pub fn new(trials: usize, seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), trials }
    }

    /// Mean max flow with each edge independently slowed to
    /// `floor(capacity * slowing_factor)` with its own probability.
    pub fn slowing_max_flow<Flow>(&mut self, network: &FlowNetwork<Flow>) -> f64
    where
        Flow: NumAssign + Ord + Copy + Bounded + NumCast,
    {
        let mut total = 0.0;
        for _ in 0..self.trials {
            let mut trial = network.clone();
            for edge in trial.edges.iter_mut() {
                if self.rng.gen::<f64>() < edge.weather.slowing_prob {
                    let derated = edge.capacity.to_f64().unwrap() * edge.weather.slowing_factor;
                    edge.capacity = Flow::from(derated.trunc()).unwrap();
                }
            }
            total += maximum_flow(&trial).to_f64().unwrap();
        }
        total / self.trials as f64
    }

    /// Mean max flow with each edge independently blocked outright with its
    /// own probability.
    pub fn blocking_max_flow<Flow>(&mut self, network: &FlowNetwork<Flow>) -> f64
    where
        Flow: NumAssign + Ord + Copy + Bounded + NumCast,
    {
        let mut total = 0.0;
        for _ in 0..self.trials {
            let mut trial = network.clone();
            for edge in trial.edges.iter_mut() {
                if self.rng.gen::<f64>() < edge.weather.blocking_prob {
                    edge.capacity = Flow::zero();
                }
            }
            total += maximum_flow(&trial).to_f64().unwrap();
        }
        total / self.trials as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::graph::Weather;

    fn single_edge_network(weather: Weather) -> FlowNetwork<i64> {
        let mut network = FlowNetwork::new();
        let u = network.add_node("u").unwrap();
        let v = network.add_node("v").unwrap();
        network.add_source(u).unwrap();
        network.add_sink(v).unwrap();
        network.add_weather_edge(u, v, 10, weather).unwrap();
        network
    }

    #[test]
    fn zero_probability_reproduces_the_exact_flow() {
        let network = single_edge_network(Weather::slowing(0.0, 0.5).unwrap());
        assert_eq!(MonteCarlo::new(20, 1).slowing_max_flow(&network), 10.0);
        assert_eq!(MonteCarlo::new(20, 1).blocking_max_flow(&network), 10.0);
    }

    #[test]
    fn certain_slowing_derates_every_trial() {
        let network = single_edge_network(Weather::slowing(1.0, 0.5).unwrap());
        assert_eq!(MonteCarlo::new(20, 1).slowing_max_flow(&network), 5.0);
    }

    #[test]
    fn certain_blocking_removes_all_flow() {
        let network = single_edge_network(Weather::blocking(1.0).unwrap());
        assert_eq!(MonteCarlo::new(20, 1).blocking_max_flow(&network), 0.0);
    }

    #[test]
    fn estimates_are_reproducible_under_a_seed() {
        let network = single_edge_network(Weather::slowing(0.5, 0.5).unwrap());
        let first = MonteCarlo::new(50, 99).slowing_max_flow(&network);
        let second = MonteCarlo::new(50, 99).slowing_max_flow(&network);
        assert_eq!(first, second);
        assert!((5.0..=10.0).contains(&first));
    }
}
