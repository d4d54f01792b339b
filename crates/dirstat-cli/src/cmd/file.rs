use std::path::PathBuf;

use clap::Args;

use super::Context;

#[derive(Args)]
pub struct SizeArgs {
    /// Regular file to measure
    pub path: PathBuf,
}

#[derive(Args)]
pub struct SameArgs {
    pub first: PathBuf,
    pub second: PathBuf,
}

pub fn size(args: SizeArgs, ctx: &Context) -> anyhow::Result<()> {
    let result = ctx.inspector.file_size(&args.path);
    ctx.print_number("size", &args.path.display().to_string(), result)
}

pub fn same(args: SameArgs, ctx: &Context) -> anyhow::Result<()> {
    let same = ctx.inspector.same_file(&args.first, &args.second);

    if ctx.json {
        println!(
            "{}",
            serde_json::json!({
                "op": "same",
                "first": args.first.display().to_string(),
                "second": args.second.display().to_string(),
                "result": same,
            })
        );
    } else {
        println!(
            "same({}, {}): {same}",
            args.first.display(),
            args.second.display()
        );
    }
    Ok(())
}
