use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use routine_cli::types::{ConvertResult, RoutineSummary};
use routine_model::Flag;

pub fn print_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, not written)"),
    }
    println!("{}", summary_table(result));
}

fn summary_table(result: &ConvertResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Person"),
        header_cell("Sources"),
        header_cell("Flags"),
        header_cell("Morning"),
        header_cell("Evening"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut total_sources = 0usize;
    let mut total_morning = 0usize;
    let mut total_evening = 0usize;
    for summary in &result.routines {
        total_sources += summary.sources;
        total_morning += summary.morning;
        total_evening += summary.evening;
        table.add_row(vec![
            title_cell(&summary.title),
            count_cell(summary.sources),
            flags_cell(summary),
            count_cell(summary.morning),
            count_cell(summary.evening),
        ]);
    }
    table.add_row(vec![
        Cell::new(format!(
            "TOTAL ({} routines, {} rows)",
            result.routines.len(),
            result.record_count
        ))
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold),
        Cell::new(total_sources).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_morning).add_attribute(Attribute::Bold),
        Cell::new(total_evening).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn title_cell(title: &str) -> Cell {
    if title.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(title)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn flags_cell(summary: &RoutineSummary) -> Cell {
    if summary.flags.is_empty() {
        return dim_cell("-");
    }
    let codes: Vec<&str> = summary.flags.iter().map(Flag::code).collect();
    Cell::new(codes.join(" ")).fg(Color::Yellow)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use routine_cli::logging::{REDACTED_VALUE, log_data_enabled};
    use std::path::PathBuf;

    #[test]
    fn table_lists_each_routine_and_totals() {
        let result = ConvertResult {
            input: PathBuf::from("in.csv"),
            output: None,
            record_count: 3,
            routines: vec![
                RoutineSummary {
                    title: "Alice".to_string(),
                    sources: 2,
                    flags: vec![Flag::Alcohol, Flag::Perfume],
                    morning: 2,
                    evening: 1,
                },
                RoutineSummary {
                    title: String::new(),
                    sources: 0,
                    flags: vec![],
                    morning: 0,
                    evening: 0,
                },
            ],
        };
        let rendered = summary_table(&result).to_string();
        assert!(rendered.contains("Alice"));
        assert!(rendered.contains("A P"));
        assert!(rendered.contains("(empty)"));
        assert!(rendered.contains("TOTAL (2 routines, 3 rows)"));
        assert_eq!(result.product_count(), 3);
    }

    #[test]
    fn titles_are_shown_while_logs_redact() {
        let result = ConvertResult {
            input: PathBuf::from("in.csv"),
            output: None,
            record_count: 1,
            routines: vec![RoutineSummary {
                title: "Bob".to_string(),
                sources: 1,
                flags: vec![Flag::Sls],
                morning: 1,
                evening: 0,
            }],
        };
        assert!(!log_data_enabled());
        let rendered = summary_table(&result).to_string();
        assert!(rendered.contains("Bob"), "{rendered}");
        assert!(!rendered.contains(REDACTED_VALUE), "{rendered}");
    }
}
