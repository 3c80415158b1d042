// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::CheckerConfig;

/// Get the default configuration.
pub fn default_config() -> CheckerConfig {
    CheckerConfig::default()
}

/// Generate an example configuration file.
///
/// The rules listed here are the built-in rule set, spelled out.
pub fn example_config() -> &'static str {
    r#"# ccheck configuration file

[options]
# base_sha = "origin/main"
# head_sha = "HEAD"
exclude_base = true
# format = "github"

# Declaring any [[rules]] replaces the built-in rule set.

[[rules]]
kind = "required"
check = "conventional-subject"

[[rules]]
kind = "required"
check = "require-body"

[[rules]]
kind = "conditional"
condition = { author-email = "uniontech.com" }
check = { require-trailer = "Log" }

[[rules]]
kind = "fallback"
reason = "Default merge commit caused by workflow sync"
check = { subject-pattern = 'File Sync from [\w\-\.]+\/[\w\-\.]+ \(#[\d]+\)' }

[[rules]]
kind = "fallback"
reason = "Default GitHub auto merge commit message"
check = { subject-pattern = '''Merge (?:pull request #[\d]+ from [\w\-\.\/]+|branch '[\w\-\.:\/]+' into [\w\-\/])''' }
"#
}
