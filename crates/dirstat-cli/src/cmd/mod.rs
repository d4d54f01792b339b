pub mod demo;
pub mod dirs;
pub mod file;

use dirstat_core::legacy;
use dirstat_core::{Inspector, Result};

/// Settings shared by every subcommand.
pub struct Context {
    pub inspector: Inspector,
    pub json: bool,
    pub legacy: bool,
}

impl Context {
    /// Print a numeric result for `op(arg)`.
    ///
    /// In legacy mode failures print as -1; otherwise they propagate.
    pub fn print_number(&self, op: &str, arg: &str, result: Result<u64>) -> anyhow::Result<()> {
        let value = if self.legacy {
            legacy::to_sentinel(result)
        } else {
            i64::try_from(result?).unwrap_or(i64::MAX)
        };

        if self.json {
            println!(
                "{}",
                serde_json::json!({ "op": op, "path": arg, "result": value })
            );
        } else {
            println!("{op}({arg}): {value}");
        }
        Ok(())
    }
}
