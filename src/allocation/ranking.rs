use crate::augmentation::residual::ResidualGraph;
use crate::network::graph::Weather;
use num_traits::{Bounded, NumAssign, NumCast};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capacity the edge is expected to sustain under its own slowing model,
/// truncated to an integer.
pub fn expected_capacity<Flow>(capacity: Flow, weather: &Weather) -> Flow
where
    Flow: NumCast + Copy,
{
    let capacity = capacity.to_f64().unwrap();
    let expected = capacity * (1.0 - weather.slowing_prob) + capacity * weather.slowing_prob * weather.slowing_factor;
    Flow::from(expected.trunc()).unwrap()
}

/// Scores a candidate pool down to one edge. Implementations must return
/// `None` on an empty pool.
pub trait RankingHeuristic<Flow> {
    fn pick(&mut self, residual: &ResidualGraph<Flow>, candidates: &[usize]) -> Option<usize>;
}

/// Scores a candidate pool down to one edge plus the capacity bound up to
/// which a fair allocation should fund it before another edge becomes the
/// better target.
pub trait PairedRankingHeuristic<Flow> {
    fn pick(&mut self, residual: &ResidualGraph<Flow>, candidates: &[usize]) -> Option<(usize, Flow)>;
}

pub struct RandomEdge {
    rng: StdRng,
}

impl RandomEdge {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<Flow> RankingHeuristic<Flow> for RandomEdge {
    fn pick(&mut self, _residual: &ResidualGraph<Flow>, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.gen_range(0..candidates.len())])
    }
}

pub struct HighestSlowingProb;

impl<Flow> RankingHeuristic<Flow> for HighestSlowingProb
where
    Flow: NumAssign + Ord + Copy + Bounded,
{
    fn pick(&mut self, residual: &ResidualGraph<Flow>, candidates: &[usize]) -> Option<usize> {
        let mut best = None;
        let mut best_prob = -1.0;
        for &edge_id in candidates {
            let prob = residual.weather(edge_id).slowing_prob;
            if prob > best_prob {
                best_prob = prob;
                best = Some(edge_id);
            }
        }
        best
    }
}

pub struct LowestSlowingProb;

impl<Flow> RankingHeuristic<Flow> for LowestSlowingProb
where
    Flow: NumAssign + Ord + Copy + Bounded,
{
    fn pick(&mut self, residual: &ResidualGraph<Flow>, candidates: &[usize]) -> Option<usize> {
        let mut best = None;
        let mut best_prob = f64::INFINITY;
        for &edge_id in candidates {
            let prob = residual.weather(edge_id).slowing_prob;
            if prob < best_prob {
                best_prob = prob;
                best = Some(edge_id);
            }
        }
        best
    }
}

pub struct HighestExpectedValue;

impl<Flow> RankingHeuristic<Flow> for HighestExpectedValue
where
    Flow: NumAssign + Ord + Copy + Bounded + NumCast,
{
    fn pick(&mut self, residual: &ResidualGraph<Flow>, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, Flow)> = None;
        for &edge_id in candidates {
            let ev = expected_capacity(residual.capacity(edge_id), &residual.weather(edge_id));
            match best {
                Some((_, best_ev)) if best_ev >= ev => {}
                _ => best = Some((edge_id, ev)),
            }
        }
        best.map(|(edge_id, _)| edge_id)
    }
}

pub struct LowestExpectedValue;

impl<Flow> RankingHeuristic<Flow> for LowestExpectedValue
where
    Flow: NumAssign + Ord + Copy + Bounded + NumCast,
{
    fn pick(&mut self, residual: &ResidualGraph<Flow>, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, Flow)> = None;
        for &edge_id in candidates {
            let ev = expected_capacity(residual.capacity(edge_id), &residual.weather(edge_id));
            match best {
                Some((_, best_ev)) if best_ev <= ev => {}
                _ => best = Some((edge_id, ev)),
            }
        }
        best.map(|(edge_id, _)| edge_id)
    }
}

/// Lowest-capacity edge, paired with the second-lowest capacity among the
/// candidates. `Flow::max_value()` stands in when no second value exists.
pub struct MinCapacityPaired;

impl<Flow> PairedRankingHeuristic<Flow> for MinCapacityPaired
where
    Flow: NumAssign + Ord + Copy + Bounded,
{
    fn pick(&mut self, residual: &ResidualGraph<Flow>, candidates: &[usize]) -> Option<(usize, Flow)> {
        let mut first = None;
        let mut first_cap = Flow::max_value();
        let mut second_cap = Flow::max_value();
        for &edge_id in candidates {
            let cap = residual.capacity(edge_id);
            if cap < first_cap {
                second_cap = first_cap;
                first_cap = cap;
                first = Some(edge_id);
            } else if cap < second_cap {
                second_cap = cap;
            }
        }
        first.map(|edge_id| (edge_id, second_cap))
    }
}

/// Same two-value selection ranked by expected capacity instead.
pub struct MinExpectedValuePaired;

impl<Flow> PairedRankingHeuristic<Flow> for MinExpectedValuePaired
where
    Flow: NumAssign + Ord + Copy + Bounded + NumCast,
{
    fn pick(&mut self, residual: &ResidualGraph<Flow>, candidates: &[usize]) -> Option<(usize, Flow)> {
        let mut first = None;
        let mut first_ev = Flow::max_value();
        let mut second_ev = Flow::max_value();
        for &edge_id in candidates {
            let ev = expected_capacity(residual.capacity(edge_id), &residual.weather(edge_id));
            if ev < first_ev {
                second_ev = first_ev;
                first_ev = ev;
                first = Some(edge_id);
            } else if ev < second_ev {
                second_ev = ev;
            }
        }
        first.map(|edge_id| (edge_id, second_ev))
    }
}
