//! Benchmarks for grid model and view patching
//!
//! Run with: cargo bench grid_operations

use table_block::messages::TableMsg;
use table_block::model::{GridModel, TableDocument};
use table_block::{Table, TableConfig};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn content(rows: usize, cols: usize) -> Vec<Vec<String>> {
    (0..rows)
        .map(|r| (0..cols).map(|c| format!("r{}c{}", r, c)).collect())
        .collect()
}

// ============================================================================
// Model operations
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn insert_row_middle(bencher: divan::Bencher, rows: usize) {
    let seed = content(rows, 8);
    bencher
        .with_inputs(|| GridModel::new(0, 0, Some(&seed)))
        .bench_local_values(|mut grid| {
            let _ = grid.insert_row(divan::black_box(rows / 2));
            grid
        });
}

#[divan::bench(args = [10, 100, 1000])]
fn delete_col_first(bencher: divan::Bencher, rows: usize) {
    let seed = content(rows, 8);
    bencher
        .with_inputs(|| GridModel::new(0, 0, Some(&seed)))
        .bench_local_values(|mut grid| {
            let _ = grid.delete_col(divan::black_box(0));
            grid
        });
}

#[divan::bench(args = [10, 100, 1000])]
fn move_row_end_to_start(bencher: divan::Bencher, rows: usize) {
    let seed = content(rows, 8);
    bencher
        .with_inputs(|| GridModel::new(0, 0, Some(&seed)))
        .bench_local_values(|mut grid| {
            let _ = grid.move_row(rows - 1, divan::black_box(0));
            grid
        });
}

#[divan::bench]
fn normalize_ragged_seed() {
    let mut seed = content(200, 10);
    for (i, row) in seed.iter_mut().enumerate() {
        row.truncate(i % 10 + 1);
    }
    divan::black_box(GridModel::normalized(&seed));
}

// ============================================================================
// View patching
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn mount_table(rows: usize) {
    let seed = content(rows, 8);
    divan::black_box(Table::new(&seed, &TableConfig::default(), false, true));
}

#[divan::bench(args = [10, 100, 1000])]
fn add_row_targeted(bencher: divan::Bencher, rows: usize) {
    let seed = content(rows, 8);
    bencher
        .with_inputs(|| Table::new(&seed, &TableConfig::default(), false, false))
        .bench_local_values(|mut table| {
            table.dispatch(TableMsg::AddRow { at: divan::black_box(1) });
            table
        });
}

#[divan::bench(args = [10, 100, 1000])]
fn cell_input(bencher: divan::Bencher, rows: usize) {
    let seed = content(rows, 8);
    bencher
        .with_inputs(|| Table::new(&seed, &TableConfig::default(), false, false))
        .bench_local_values(|mut table| {
            table.dispatch(TableMsg::CellInput {
                row: rows / 2,
                col: 3,
                text: divan::black_box("typed".to_string()),
            });
            table
        });
}

// ============================================================================
// Persistence
// ============================================================================

#[divan::bench]
fn document_to_json_100x8() {
    let doc = TableDocument::new(true, false, content(100, 8));
    divan::black_box(doc.to_json().ok());
}
