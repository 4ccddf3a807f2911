// ==========================================
// Slangeprogram - table matcher primitives
// ==========================================
// One reusable scan-and-break abstraction shared by the
// hose search, the coupling search and the product-number
// lookups, instead of ad hoc loops per table.
// No state, no side effects, no I/O.
// ==========================================

/// First row satisfying the predicate, in stored table order.
/// Table order is a de facto priority order and is never re-sorted.
pub fn find_first<T>(rows: &[T], pred: impl Fn(&T) -> bool) -> Option<&T> {
    rows.iter().find(|row| pred(row))
}

/// Partial-match rule used for description fragments: the
/// fragment either prefixes the description or occurs inside it.
pub fn starts_or_contains(description: &str, fragment: &str) -> bool {
    let d = description.trim();
    d.starts_with(fragment) || d.contains(fragment)
}
