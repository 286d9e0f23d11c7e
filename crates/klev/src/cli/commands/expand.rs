//! Implementation of `klev expand`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use klev_expand::{Expander, Expansion};

use crate::cli::{
    args::{ExpandCommand, join_words},
    context::CommandContext,
    output::{dim, print_json, subheader, warning},
};

/// Prints the variants a query expands to.
pub fn run(ctx: &CommandContext, cmd: &ExpandCommand) -> ExitCode {
    let query = join_words(&cmd.query);
    let max_variants = cmd
        .max_variants
        .unwrap_or(ctx.config.expand.max_variants);
    let expansion = Expander::new(max_variants).expand_detailed(&query);

    if cmd.output.json {
        if cmd.explain.explain {
            return print_json(&expansion);
        }
        return print_json(&expansion.variants);
    }

    if cmd.explain.explain {
        print_units(&expansion);
        println!("{}", subheader("Variants:"));
        for variant in &expansion.variants {
            println!("   {variant}");
        }
        if expansion.truncated {
            println!();
            println!(
                "{}",
                warning(&format!("truncated at {max_variants} variants"))
            );
        }
        return ExitCode::SUCCESS;
    }

    for variant in &expansion.variants {
        println!("{variant}");
    }
    ExitCode::SUCCESS
}

/// Prints the query segmentation as a table.
fn print_units(expansion: &Expansion) {
    println!("{}", subheader("Normalized query:"));
    println!("   {}", expansion.query);
    println!();

    println!("{}", subheader("Segments:"));
    if expansion.units.is_empty() {
        println!("   {}", dim("(none)"));
        println!();
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Segment", "Kind", "Options"]);
    for unit in &expansion.units {
        let kind = if unit.phrase { "phrase" } else { "word" };
        table.add_row(vec![
            Cell::new(&unit.text),
            Cell::new(kind),
            Cell::new(unit.options.join(", ")),
        ]);
    }
    println!("{table}");
    println!();
}
