/// Compute effective limit with precedence: global flag -> configured default.
///
/// Zero is treated as unset.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> u32 {
    global.filter(|limit| *limit > 0).unwrap_or(fallback).max(1)
}
