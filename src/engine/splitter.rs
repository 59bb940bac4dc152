//! Statement splitting.
//!
//! Splits a raw, possibly multi-statement query string on top-level `;`
//! separators while respecting quoted literals, using a two-state scanner
//! over the raw text. An escaped quote (`''`) toggles the scanner twice and
//! therefore never changes whether a following `;` is treated as a
//! separator.
//!
//! Splitting is best-effort and never rejects input: comments are not
//! understood, and a literal left open at the end of the input is emitted
//! as-is in the final statement.

/// Split raw query text into individual statements.
///
/// Semicolons inside single-quoted literals are preserved, empty fragments
/// are dropped, and each returned statement is trimmed. A `BEGIN ... BATCH
/// ... APPLY` block is returned whole: its internal semicolons separate
/// statements inside the batch DSL, not at the top level.
///
/// Input without any top-level `;` yields exactly one statement equal to the
/// trimmed input.
pub fn split_statements(raw: &str) -> Vec<String> {
    if is_batch_block(raw) {
        return vec![raw.trim().to_string()];
    }

    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    for ch in raw.chars() {
        match ch {
            '\'' => {
                in_quote = !in_quote;
                current.push(ch);
            }
            ';' if !in_quote => {
                push_trimmed(&mut statements, &current);
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    push_trimmed(&mut statements, &current);

    statements
}

/// Check whether the whole input is a batch block.
fn is_batch_block(raw: &str) -> bool {
    let lowered = raw.trim().to_lowercase();
    lowered.starts_with("begin") && lowered.contains("batch") && lowered.contains("apply")
}

fn push_trimmed(statements: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }
}
