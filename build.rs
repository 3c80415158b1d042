// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds `VERGEN_GIT_SHA` and `VERGEN_GIT_COMMIT_DATE` for `ccheck version`.
//! Outside a git checkout vergen emits placeholder values instead of failing.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()?;
    Ok(())
}
