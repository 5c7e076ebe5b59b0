//! Array-packing post-pass over serialized JSON text.

/// Collapse multi-line arrays in pretty-printed JSON onto one visual line.
///
/// Operates line by line: a line containing `[` suppresses line breaks until
/// a line containing `]` is seen; in between, tab characters are removed and
/// each continuation line is glued on with a single leading space. Object
/// formatting outside arrays keeps its one-key-per-line layout. Designed for
/// tab-indented output (see [`WriteOptions`]); space indentation inside
/// arrays is not stripped.
///
/// This is a purely textual heuristic with no JSON awareness beyond literal
/// bracket presence per line — a `[` or `]` inside a string value sharing a
/// line with structural brackets will confuse it.
///
/// [`WriteOptions`]: crate::io::WriteOptions
#[must_use]
pub fn pack_arrays(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut inside_array = false;

    for line in input.lines() {
        let array_start = line.contains('[');
        let array_end = line.contains(']');

        if array_start {
            inside_array = true;
        }

        let end_line = if inside_array {
            if array_start {
                out.push_str(line);
            } else {
                out.push(' ');
                out.extend(line.chars().filter(|&c| c != '\t'));
            }
            array_end
        } else {
            out.push_str(line);
            true
        };

        if end_line {
            out.push('\n');
        }
        if inside_array && array_end {
            inside_array = false;
        }
    }

    // Line iteration cannot tell whether the input ended with a newline;
    // restore the input's own trailing state.
    if !input.ends_with('\n') && out.ends_with('\n') {
        out.pop();
    }
    out
}
