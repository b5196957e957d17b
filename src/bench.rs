use crate::collections::FxIndexMap;
use crate::errors::SearchError;
use crate::graph::{Graph, NodeId};
use crate::graph_algos::{Potential, dijkstra, goal_directed};

use std::fmt;
use std::time::{Duration, Instant};
use num_traits::{Num, ToPrimitive};


/// Timing and visit data for one strategy on one query
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    pub elapsed: Duration,
    pub visited: usize,
    pub cost: f64,
}

/// One timed head-to-head run of the two strategies on the same graph
#[derive(Clone, Copy, Debug)]
pub struct Comparison {
    pub dijkstra: Sample,
    pub goal_directed: Sample,
}

impl Comparison {
    /// Both strategies must settle on the same cost, compared after rounding
    /// to absorb the float noise the reweighting introduces
    pub fn agree(&self) -> bool {
        self.dijkstra.cost.round() == self.goal_directed.cost.round()
    }

    fn accumulate(&mut self, other: &Comparison) {
        self.dijkstra.elapsed += other.dijkstra.elapsed;
        self.dijkstra.visited += other.dijkstra.visited;
        self.dijkstra.cost += other.dijkstra.cost;
        self.goal_directed.elapsed += other.goal_directed.elapsed;
        self.goal_directed.visited += other.goal_directed.visited;
        self.goal_directed.cost += other.goal_directed.cost;
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dijk = &self.dijkstra;
        let goal = &self.goal_directed;

        writeln!(
            f,
            "\t| dijkstra : {:>8} micros | {:>6} visits",
            dijk.elapsed.as_micros(),
            dijk.visited
        )?;
        writeln!(
            f,
            "\t| goal dir : {:>8} micros | {:>6} visits",
            goal.elapsed.as_micros(),
            goal.visited
        )?;

        let hi = dijk.elapsed.max(goal.elapsed).as_micros();
        let lo = dijk.elapsed.min(goal.elapsed).as_micros().max(1);
        let percent = ((hi as f64 / lo as f64) * 100.0).round() as i64 - 100;

        let (who, visit_diff) = if dijk.elapsed <= goal.elapsed {
            ("dijkstra", dijk.visited as i64 - goal.visited as i64)
        } else {
            ("goal dir", goal.visited as i64 - dijk.visited as i64)
        };
        writeln!(
            f,
            "\t| {} is faster by {:>3}% ({} micros), visit difference: {}",
            who,
            percent,
            hi - lo,
            visit_diff
        )
    }
}


/// Benchmark context comparing plain and goal directed search.
///
/// An explicit object with caller-controlled lifecycle: create it at the
/// start of a measurement run, feed it named runs, read the report, discard
/// it. Consumes only the cost and visit-count outputs of the searches.
#[derive(Debug, Default)]
pub struct Benchmark {
    runs: FxIndexMap<String, Comparison>,
}

impl Benchmark {

    pub fn new() -> Self {
        Self::default()
    }

    /// Time both strategies on the same graph and record the result under
    /// `name`. Re-using a name overwrites the earlier run.
    ///
    /// Reweighting is a read-time overlay, so the plain search is unaffected
    /// by the goal directed one that follows it.
    pub fn compare<C>(
        &mut self,
        name: &str,
        graph: &Graph<C>,
        source: NodeId,
        target: NodeId,
        potential: &Potential<C>,
    ) -> Result<&Comparison, SearchError>
    where
        C: Num + Copy + PartialOrd + ToPrimitive,
    {
        let started = Instant::now();
        let plain = dijkstra(graph, source, target)?;
        let plain_elapsed = started.elapsed();

        let started = Instant::now();
        let guided = goal_directed(graph, source, target, potential)?;
        let guided_elapsed = started.elapsed();

        let comparison = Comparison {
            dijkstra: Sample {
                elapsed: plain_elapsed,
                visited: plain.visited,
                cost: plain.cost.to_f64().unwrap_or(f64::NAN),
            },
            goal_directed: Sample {
                elapsed: guided_elapsed,
                visited: guided.visited,
                cost: guided.cost.to_f64().unwrap_or(f64::NAN),
            },
        };

        self.runs.insert(name.to_string(), comparison);
        Ok(&self.runs[name])
    }

    /// The most recently recorded run
    pub fn last(&self) -> Option<(&str, &Comparison)> {
        self.runs.last().map(|(name, comparison)| (name.as_str(), comparison))
    }

    /// Sum of all recorded runs
    pub fn totals(&self) -> Option<Comparison> {
        let mut runs = self.runs.values();
        let mut total = *runs.next()?;
        for run in runs {
            total.accumulate(run);
        }
        Some(total)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Drop all recorded runs
    pub fn reset(&mut self) {
        self.runs.clear();
    }

    /// Formatted report: one block per run in insertion order, a flag for
    /// any run where the strategies disagreed, and the totals
    pub fn report(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for (name, comparison) in &self.runs {
            let _ = writeln!(out, "# {name}");
            let _ = write!(out, "{comparison}");
            if !comparison.agree() {
                let _ = writeln!(
                    out,
                    "\t| results differ: dijkstra {} vs goal directed {}",
                    comparison.dijkstra.cost, comparison.goal_directed.cost
                );
            }
        }
        if let Some(total) = self.totals() {
            let _ = writeln!(out, "# totals ({} runs)", self.runs.len());
            let _ = write!(out, "{total}");
        }
        out
    }
}
