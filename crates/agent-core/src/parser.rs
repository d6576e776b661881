//! Response Parser
//!
//! Scans one assistant response for an action directive. The grammar is a
//! single line:
//!
//! ```text
//! Action: <name>: <argument>
//! ```
//!
//! where `<name>` is `[A-Za-z0-9_]+` and `<argument>` is the remainder of
//! the line verbatim. The grammar is small and fixed, so this is a
//! hand-written line scanner rather than a regex.

/// One parsed action directive, alive for a single loop iteration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionInvocation {
    /// Action identifier
    pub name: String,

    /// Raw argument text, everything after the second `": "`
    pub argument: String,
}

/// Extract at most one action directive from a response
///
/// Only the first matching line is used; further matches are ignored by
/// design. `None` means the model produced a final answer, which is the
/// loop's normal termination signal, not an error.
pub fn parse_action(response: &str) -> Option<ActionInvocation> {
    response.lines().find_map(parse_action_line)
}

fn parse_action_line(line: &str) -> Option<ActionInvocation> {
    let rest = line.strip_prefix("Action: ")?;
    let (name, argument) = rest.split_once(": ")?;

    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return None;
    }

    Some(ActionInvocation {
        name: name.to_string(),
        argument: argument.to_string(),
    })
}
