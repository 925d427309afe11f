//! Fields command - show the extraction field schema.

use clap::Args;
use console::style;

use qex_core::quote::schema::{FieldKind, QuoteSchema};

/// Arguments for the fields command.
#[derive(Args)]
pub struct FieldsArgs {
    /// Also print the extraction rules for each field
    #[arg(long)]
    rules: bool,
}

pub fn run(args: FieldsArgs) -> anyhow::Result<()> {
    let schema = QuoteSchema::global();

    println!(
        "{} {} output columns",
        style("ℹ").blue(),
        schema.len()
    );
    println!();

    for spec in schema.specs() {
        let source = match spec.kind {
            FieldKind::Pattern if spec.default.is_empty() => {
                format!("{} rule(s)", spec.rules.len())
            }
            FieldKind::Pattern => {
                format!("{} rule(s), default {:?}", spec.rules.len(), spec.default)
            }
            FieldKind::Date => format!("{} rule(s), date-normalized", spec.rules.len()),
            FieldKind::Filename => "input filename".to_string(),
            FieldKind::Constant(value) => format!("constant {value:?}"),
        };
        println!("{:<22} {}", spec.name, style(source).dim());

        if args.rules {
            for rule in &spec.rules {
                println!("    {}", rule.as_str());
            }
        }
    }

    Ok(())
}
