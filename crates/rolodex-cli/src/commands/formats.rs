use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use rolodex_core::FieldType;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct FormatsArgs {
    /// Also print each format's compiled pattern.
    #[arg(long)]
    pub patterns: bool,
}

#[derive(Debug, Serialize)]
struct FormatItem<'a> {
    index: usize,
    fields: &'a [FieldType],
    pattern: &'a str,
}

pub fn list_formats(ctx: &Context<'_>, args: FormatsArgs) -> Result<()> {
    let catalog = ctx.classifier.catalog();

    if ctx.json {
        let items: Vec<FormatItem<'_>> = catalog
            .iter()
            .enumerate()
            .map(|(index, descriptor)| FormatItem {
                index,
                fields: descriptor.fields(),
                pattern: descriptor.pattern(),
            })
            .collect();
        return print_json(&items);
    }

    for (index, descriptor) in catalog.iter().enumerate() {
        println!("{index}: {descriptor}");
        if args.patterns {
            println!("   {}", descriptor.pattern());
        }
    }
    Ok(())
}
