//! Randomized test driver.
//!
//! Builds trees from a seeded key stream, re-queries every inserted key and
//! reports the tree's height together with the results of both checkers.

use log::{debug, error, info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::ConfigError;
use crate::Tree;

/// Settings for a driver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Seed of the key stream; equal seeds produce equal trees.
    pub seed: u64,
    /// Number of keys drawn per tree, duplicates included.
    pub tree_size: usize,
    /// Number of trees built.
    pub rounds: usize,
    /// Keys are drawn from `0..key_range`.
    pub key_range: i32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: 123_456,
            tree_size: 500,
            rounds: 10,
            key_range: 1_000,
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_range <= 0 {
            return Err(ConfigError::EmptyKeyRange(self.key_range));
        }
        if self.tree_size == 0 {
            return Err(ConfigError::EmptyTree);
        }
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        Ok(())
    }
}

/// Outcome of checking one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    /// Number of distinct keys in the tree.
    pub len: usize,
    pub height: usize,
    /// Whether `contains` found every key that was inserted.
    pub all_found: bool,
    pub balanced: bool,
    pub ordered: bool,
}

impl RoundReport {
    pub fn check(tree: &Tree<i32>, all_found: bool) -> Self {
        Self {
            len: tree.len(),
            height: tree.height(),
            all_found,
            balanced: tree.check_balanced(),
            ordered: tree.check_ordering(),
        }
    }

    pub fn passed(&self) -> bool {
        self.all_found && self.balanced && self.ordered
    }
}

/// Inserts `size` keys drawn from `0..key_range` and re-queries each of them.
/// Returns the tree and whether every inserted key was found.
pub fn random_tree<R: Rng>(rng: &mut R, size: usize, key_range: i32) -> (Tree<i32>, bool) {
    let mut tree = Tree::new();
    let mut content = Vec::with_capacity(size);
    for _ in 0..size {
        let key = rng.gen_range(0..key_range);
        trace!("insert {key}");
        content.push(key);
        tree.insert(key);
    }
    let all_found = content.iter().all(|key| tree.contains(key));
    (tree, all_found)
}

/// Builds a tree from the keys `0..n` in ascending order.
pub fn sequential_tree(n: i32) -> Tree<i32> {
    (0..n).collect()
}

/// Runs every configured round and returns one report per tree.
pub fn run(config: &DriverConfig) -> Result<Vec<RoundReport>, ConfigError> {
    config.validate()?;
    debug!("driver config: {config:?}");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut reports = Vec::with_capacity(config.rounds);
    for round in 0..config.rounds {
        let (tree, all_found) = random_tree(&mut rng, config.tree_size, config.key_range);
        let report = RoundReport::check(&tree, all_found);
        if report.passed() {
            info!(
                "round {round}: {} keys, height {}",
                report.len, report.height
            );
        } else {
            error!("round {round} failed: {report:?}");
            if let Err(err) = tree.verify() {
                error!("round {round}: {err}");
            }
        }
        reports.push(report);
    }
    Ok(reports)
}
