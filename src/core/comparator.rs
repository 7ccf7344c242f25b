//! Ranking of options across projection horizons.

use itertools::Itertools;

use crate::{
    core::{
        candidate::Candidate,
        globals::Globals,
        horizon::Horizon,
        projector::Projector,
        usage::SeasonalLoad,
    },
    prelude::*,
    quantity::currency::Dollars,
};

#[must_use]
pub enum Comparison<'a> {
    /// There was nothing to compare.
    NoOptions,

    Ranked(Ranking<'a>),
}

impl Comparison<'_> {
    /// Advice shown instead of the results when no options are configured.
    pub const NO_OPTIONS_ADVICE: &'static str = "Add at least one option.";
}

#[must_use]
pub struct Ranking<'a> {
    /// Snow load the projections were made with.
    pub load: SeasonalLoad,

    pub horizons: Vec<Horizon>,

    /// Options ordered by the total at the shortest horizon, cheapest first.
    pub rows: Vec<RankedOption<'a>>,
}

#[must_use]
pub struct RankedOption<'a> {
    pub candidate: &'a Candidate,

    /// Totals in the same order as [`Ranking::horizons`].
    pub totals: Vec<HorizonTotal>,
}

#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct HorizonTotal {
    pub horizon: Horizon,

    /// Total cost of ownership, rounded to whole dollars.
    pub total: Dollars,

    /// Whether no other option is cheaper over this horizon.
    pub is_minimum: bool,
}

/// Project every option over every horizon and rank the options.
///
/// Totals are rounded to whole dollars before the minimums are determined, so that options
/// that differ by a fraction of a dollar tie.
#[instrument(skip_all, fields(n_candidates = candidates.len(), n_horizons = horizons.len()))]
pub fn compare<'a>(
    candidates: &'a [Candidate],
    globals: &Globals,
    horizons: &[Horizon],
) -> Comparison<'a> {
    if candidates.is_empty() {
        warn!("no options to compare");
        return Comparison::NoOptions;
    }

    let projector = Projector::new(globals);
    let totals = candidates
        .iter()
        .map(|candidate| {
            horizons
                .iter()
                .map(|horizon| projector.project(candidate, horizon.years).total().round_to_whole())
                .collect_vec()
        })
        .collect_vec();
    let minimums = (0..horizons.len())
        .map(|index| totals.iter().map(|row| row[index]).min().unwrap_or(Dollars::ZERO))
        .collect_vec();

    let mut rows = candidates
        .iter()
        .zip(totals)
        .map(|(candidate, totals)| RankedOption {
            candidate,
            totals: horizons
                .iter()
                .zip(totals)
                .zip(&minimums)
                .map(|((horizon, total), minimum)| HorizonTotal {
                    horizon: *horizon,
                    total,
                    is_minimum: total == *minimum,
                })
                .collect(),
        })
        .collect_vec();

    // Stable sort, so that tied options keep the input order:
    if let Some(shortest) = horizons.iter().position_min() {
        rows.sort_by_key(|row| row.totals[shortest].total);
    }

    info!(n_rows = rows.len(), "ranked");
    Comparison::Ranked(Ranking { load: *projector.load(), horizons: horizons.to_vec(), rows })
}
