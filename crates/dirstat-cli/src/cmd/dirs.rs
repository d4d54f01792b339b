use std::path::PathBuf;

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use dirstat_core::legacy::SENTINEL;

use super::Context;

#[derive(Args)]
pub struct DirArgs {
    /// Directory to inspect
    pub path: PathBuf,
}

pub fn count(args: DirArgs, ctx: &Context) -> anyhow::Result<()> {
    let result = ctx.inspector.count_directories(&args.path);
    ctx.print_number("count-dirs", &args.path.display().to_string(), result)
}

pub fn total_size(args: DirArgs, ctx: &Context) -> anyhow::Result<()> {
    let result = ctx.inspector.total_file_size(&args.path);
    ctx.print_number("total-size", &args.path.display().to_string(), result)
}

pub fn summary(args: DirArgs, ctx: &Context) -> anyhow::Result<()> {
    let summary = match ctx.inspector.summarize(&args.path) {
        Ok(s) => s,
        Err(_) if ctx.legacy => {
            println!("{SENTINEL}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Directory: {}", summary.path.display());

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Kind", "Entries"]);
        table.add_row(vec!["dir", summary.directories.to_string().as_str()]);
        table.add_row(vec!["file", summary.files.to_string().as_str()]);
        table.add_row(vec!["other", summary.others.to_string().as_str()]);
        table.add_row(vec!["unreadable", summary.skipped.to_string().as_str()]);
        println!("{table}");

        println!("  Total entries:   {}", summary.entries());
        println!("  File bytes:      {}", summary.total_bytes);
    }
    Ok(())
}
