// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# msgcheck configuration
#
# Limits count characters (Unicode code points), not bytes.

[rules]
# Maximum length of the first line.
subject_char_limit = 50

# Maximum length of every body line. Blank lines never count.
body_char_limit = 72

# Require a blank line after the subject and before trailers
# such as Signed-off-by.
check_blank_line = false
"#
}
