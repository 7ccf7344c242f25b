use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        candidate::Candidate,
        comparator::Ranking,
        globals::Globals,
        projector::Projection,
        usage::SeasonalLoad,
    },
    quantity::currency::Dollars,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

/// Summary of the assumptions the comparison was made under.
pub fn build_assumptions_table(globals: &Globals, load: &SeasonalLoad) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Area",
        "Events",
        "Snowfall",
        "Per event",
        "Load",
        "Base load",
        "Scale",
        "Electricity",
        "Fuel",
        "Inflation",
    ]);
    table.add_row(vec![
        Cell::new(globals.area),
        Cell::new(globals.events_per_season),
        Cell::new(globals.total_seasonal_snowfall),
        Cell::new(load.depth_per_event),
        Cell::new(load.tons_per_event),
        Cell::new(load.base_tons_per_event).add_attribute(Attribute::Dim),
        Cell::new(format!("{:.2}×", load.scale_factor)).add_attribute(Attribute::Bold).fg(
            if load.scale_factor > 1.0 { Color::Red } else { Color::Green },
        ),
        Cell::new(globals.electricity_price),
        Cell::new(globals.fuel_price),
        Cell::new(globals.inflation_rate),
    ]);
    table
}

/// Ranked options with the cheapest total per horizon highlighted.
pub fn build_ranking_table(ranking: &Ranking<'_>) -> Table {
    let mut table = new_table();
    let mut header = vec![Cell::new("Option")];
    header.extend(
        ranking
            .horizons
            .iter()
            .map(|horizon| Cell::new(horizon).set_alignment(CellAlignment::Right)),
    );
    table.set_header(header);

    for row in &ranking.rows {
        let mut cells = vec![Cell::new(row.candidate)];
        cells.extend(row.totals.iter().map(|total| {
            let cell = Cell::new(format!("{:.0}", total.total.0))
                .set_alignment(CellAlignment::Right);
            if total.is_minimum {
                cell.fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                cell
            }
        }));
        table.add_row(cells);
    }
    table
}

/// Year-by-year cost ledger of a single option.
pub fn build_breakdown_table(candidate: &Candidate, projection: &Projection) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Year",
        "Inflation",
        "Operating",
        "Maintenance",
        "Battery",
        "Cycles",
        "Age",
        "Cumulative",
    ]);
    table.add_row(vec![
        Cell::new(0),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(candidate.initial_cost).set_alignment(CellAlignment::Right),
    ]);
    for step in &projection.steps {
        let (cycles, age) = step.battery_wear.map_or_else(
            || (Cell::new("").add_attribute(Attribute::Dim), Cell::new("")),
            |wear| {
                (
                    Cell::new(format!("{:.0}", wear.cycles)).set_alignment(CellAlignment::Right),
                    Cell::new(wear.years_since_replacement).set_alignment(CellAlignment::Right),
                )
            },
        );
        table.add_row(vec![
            Cell::new(step.number),
            Cell::new(format!("{:.3}", step.inflation_factor)).add_attribute(Attribute::Dim),
            Cell::new(step.costs.operating).set_alignment(CellAlignment::Right),
            Cell::new(step.costs.maintenance).set_alignment(CellAlignment::Right),
            Cell::new(step.costs.replacement).set_alignment(CellAlignment::Right).fg(
                if step.costs.replacement > Dollars::ZERO { Color::Red } else { Color::Reset },
            ),
            cycles,
            age,
            Cell::new(step.cumulative).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Totals of a single projection by cost component.
pub fn build_totals_table(projection: &Projection) -> Table {
    let mut table = new_table();
    let breakdown = &projection.breakdown;
    table
        .set_header(vec!["Initial", "Operating", "Maintenance", "Battery", "Total"])
        .add_row(vec![
            Cell::new(breakdown.initial),
            Cell::new(breakdown.operating),
            Cell::new(breakdown.maintenance),
            Cell::new(breakdown.replacement),
            Cell::new(projection.total()).add_attribute(Attribute::Bold),
        ]);
    table
}
