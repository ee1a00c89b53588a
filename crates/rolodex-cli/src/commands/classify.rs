use crate::commands::{print_json, Context};
use crate::error::{invalid_input, unmatched};
use anyhow::Result;
use clap::Args;
use rolodex_core::{Classification, NormalizedRecord};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    pub line: String,
}

#[derive(Debug, Serialize)]
struct ClassifyReport {
    matched: bool,
    format: Option<usize>,
    record: Option<NormalizedRecord>,
}

pub fn classify(ctx: &Context<'_>, args: ClassifyArgs) -> Result<()> {
    if args.line.trim().is_empty() {
        return Err(invalid_input("line cannot be blank"));
    }

    match ctx.classifier.classify(&args.line, 0) {
        Classification::Matched { format, record } => {
            if ctx.json {
                return print_json(&ClassifyReport {
                    matched: true,
                    format: Some(format),
                    record: Some(record),
                });
            }

            let layout = ctx
                .classifier
                .catalog()
                .get(format)
                .map(|descriptor| descriptor.to_string())
                .unwrap_or_default();
            println!("format {format}: {layout}");
            for (key, value) in &record {
                println!("  {key}: {value}");
            }
            Ok(())
        }
        Classification::Unmatched { .. } => {
            if ctx.json {
                print_json(&ClassifyReport {
                    matched: false,
                    format: None,
                    record: None,
                })?;
            }
            Err(unmatched(args.line.trim()))
        }
    }
}
