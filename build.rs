// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

/// Embed git metadata for `msgcheck version`. Outside a git checkout vergen
/// emits placeholder values instead of failing the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .git_describe(true, true, None)
        .emit()?;
    Ok(())
}
