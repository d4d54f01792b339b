use std::path::{Path, PathBuf};

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use dirstat_core::legacy;
use dirstat_core::{Result, SamplePaths};

use super::Context;

#[derive(Args)]
pub struct DemoArgs {
    /// Sample regular file (default: per-platform)
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Sample directory (default: per-platform)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// What a demo step is expected to produce.
#[derive(Clone, Copy)]
enum Expect {
    Value,
    Failure,
    Same(bool),
}

struct Row {
    op: &'static str,
    args: String,
    result: String,
    expect: String,
}

pub fn run(args: DemoArgs, ctx: &Context) -> anyhow::Result<()> {
    let samples = SamplePaths::for_current_platform().with_overrides(args.file, args.dir);
    let (file, dir) = (samples.file.as_path(), samples.dir.as_path());
    let insp = &ctx.inspector;

    let rows = vec![
        number_row(ctx, "countDirectories", dir, insp.count_directories(dir), Expect::Value),
        number_row(ctx, "countDirectories", file, insp.count_directories(file), Expect::Failure),
        number_row(ctx, "fileSize", file, insp.file_size(file), Expect::Value),
        number_row(ctx, "fileSize", dir, insp.file_size(dir), Expect::Failure),
        number_row(ctx, "fileSizes", dir, insp.total_file_size(dir), Expect::Value),
        number_row(ctx, "fileSizes", file, insp.total_file_size(file), Expect::Failure),
        same_row(file, file, insp.same_file(file, file), Expect::Same(true)),
        same_row(dir, dir, insp.same_file(dir, dir), Expect::Same(true)),
        same_row(file, dir, insp.same_file(file, dir), Expect::Same(false)),
    ];

    if ctx.json {
        let items: Vec<_> = rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "op": r.op,
                    "args": r.args,
                    "result": r.result,
                    "expect": r.expect,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        println!("Sample file:      {}", file.display());
        println!("Sample directory: {}", dir.display());

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Operation", "Arguments", "Result", "Expect"]);
        for r in &rows {
            table.add_row(vec![r.op, r.args.as_str(), r.result.as_str(), r.expect.as_str()]);
        }
        println!("{table}");
    }
    Ok(())
}

fn number_row(
    ctx: &Context,
    op: &'static str,
    path: &Path,
    result: Result<u64>,
    expect: Expect,
) -> Row {
    let result = if ctx.legacy {
        legacy::to_sentinel(result).to_string()
    } else {
        match result {
            Ok(n) => n.to_string(),
            Err(e) => format!("error: {e}"),
        }
    };
    let expect = match expect {
        Expect::Failure if ctx.legacy => legacy::SENTINEL.to_string(),
        Expect::Failure => "error".to_string(),
        Expect::Value | Expect::Same(_) => "-".to_string(),
    };
    Row {
        op,
        args: path.display().to_string(),
        result,
        expect,
    }
}

fn same_row(a: &Path, b: &Path, same: bool, expect: Expect) -> Row {
    let expect = match expect {
        Expect::Same(want) => want.to_string(),
        Expect::Value | Expect::Failure => "-".to_string(),
    };
    Row {
        op: "isSameFile",
        args: format!("{}, {}", a.display(), b.display()),
        result: same.to_string(),
        expect,
    }
}
