use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use linkograph::aggregate::{LinkRef, RunTestRow};
use linkograph::catalog::LinkCatalog;
use linkograph::scoring::runs::run_test_probability;
use linkograph::session::ScoreBoard;

// Wider lattices are summarised instead of drawn.
const MAX_GRID_MOVES: usize = 40;

pub fn print_catalog_summary(catalog: &LinkCatalog) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Moves").add_attribute(Attribute::Bold),
        Cell::new(catalog.move_count()),
    ]);
    table.add_row(vec![
        Cell::new("Max diagonal").add_attribute(Attribute::Bold),
        Cell::new(catalog.max_diagonal()),
    ]);
    table.add_row(vec![
        Cell::new("Candidate links").add_attribute(Attribute::Bold),
        Cell::new(catalog.len()),
    ]);
    table.add_row(vec![
        Cell::new("Selected").add_attribute(Attribute::Bold),
        Cell::new(catalog.selected_count()).fg(Color::Cyan),
    ]);
    println!("\n{}", table);
}

/// Text linkograph: one line per diagonal, one column per first move.
pub fn print_lattice_grid(catalog: &LinkCatalog) {
    let n = catalog.move_count();
    if n < 2 {
        println!("\n(no candidate links)");
        return;
    }
    if n > MAX_GRID_MOVES {
        println!(
            "\n(lattice of {} moves is too wide to draw; showing summary only)",
            n
        );
        return;
    }

    let depth = catalog
        .pairs()
        .iter()
        .map(|p| p.diagonal_index() + 1)
        .max()
        .unwrap_or(0);
    let mut grid = vec![vec![" "; n - 1]; depth];
    for pair in catalog.pairs() {
        grid[pair.diagonal_index()][pair.move1] = if pair.selected { "●" } else { "○" };
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let mut header = vec![Cell::new("d").add_attribute(Attribute::Bold)];
    header.extend((1..n).map(|m| Cell::new(m).set_alignment(CellAlignment::Center)));
    table.set_header(header);

    for (d, row) in grid.iter().enumerate() {
        let mut cells = vec![Cell::new(d).add_attribute(Attribute::Bold)];
        cells.extend(
            row.iter()
                .map(|s| Cell::new(*s).set_alignment(CellAlignment::Center)),
        );
        table.add_row(cells);
    }
    println!("\n{}", table);
}

pub fn print_link_list(links: &[LinkRef]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Link").add_attribute(Attribute::Bold),
        Cell::new("Moves (1-based)"),
        Cell::new("Diagonal"),
    ]);

    for link in links {
        table.add_row(vec![
            Cell::new(format!("{}-{}", link.move1, link.move2)),
            Cell::new(format!("{}, {}", link.move1 + 1, link.move2 + 1)),
            Cell::new(link.move2 - link.move1 - 1).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_run_test_report(rows: &[RunTestRow]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Diagonal").add_attribute(Attribute::Bold),
        Cell::new("n1").fg(Color::Cyan),
        Cell::new("n2"),
        Cell::new("Runs"),
        Cell::new("Z"),
        Cell::new("p"),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in rows {
        let (z, p) = match run_test_probability(row.n1, row.n2, row.run_count) {
            Ok(prob) => (
                prob.z
                    .map(|z| format!("{:.3}", z))
                    .unwrap_or_else(|| "-".to_string()),
                format!("{:.3}", prob.p_value),
            ),
            Err(_) => ("-".to_string(), "-".to_string()),
        };
        table.add_row(vec![
            Cell::new(row.diagonal_index).add_attribute(Attribute::Bold),
            Cell::new(row.n1).fg(Color::Cyan),
            Cell::new(row.n2),
            Cell::new(row.run_count),
            Cell::new(z),
            Cell::new(p),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_score_report(scores: &ScoreBoard) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let creativity = scores
        .creativity
        .map(|c| format!("{:.3}", c))
        .unwrap_or_else(|| "n/a".to_string());
    table.add_row(vec![
        Cell::new("Creativity").add_attribute(Attribute::Bold),
        Cell::new(creativity).fg(Color::Green),
    ]);

    match &scores.run_test {
        Some(rt) => {
            table.add_row(vec![
                Cell::new("Probability (p)").add_attribute(Attribute::Bold),
                Cell::new(format!("{:.3}", rt.p_value)).fg(Color::Green),
            ]);
            table.add_row(vec![
                Cell::new("Total runs").add_attribute(Attribute::Bold),
                Cell::new(rt.total_run_sum),
            ]);
            table.add_row(vec![
                Cell::new("Total probability sum").add_attribute(Attribute::Bold),
                Cell::new(format!("{:.3}", rt.total_probability_sum)),
            ]);
        }
        None => {
            table.add_row(vec![
                Cell::new("Probability (p)").add_attribute(Attribute::Bold),
                Cell::new("n/a"),
            ]);
        }
    }
    println!("\n{}", table);
}
