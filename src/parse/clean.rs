//! Normalization of the Mensa extractor's output.

use super::model::Line;

/// Counters whose offer never changes; they only add noise to the plan.
/// Matched by substring against the line name.
static HIDDEN_LINES: [&str; 8] = [
    "Linie 4",
    "Burgerbar",
    "Linie 6",
    "Spätausgabe",
    "[kœri]",
    "Cafeteria",
    "werkPasta",
    "werkSalate",
];

/// Name truncations for counters that carry a fixed suffix: Linie 1 and
/// Linie 2 append a slogan, the pizza counter its serving hours. Each
/// marker is matched against the line's original name and the kept length
/// is in characters.
static NAME_TRUNCATIONS: [(&str, usize); 3] = [("Linie 1", 7), ("Linie 2", 7), ("[pizza]", 11)];

/// Drops hidden lines, shortens known noisy line names and removes meals
/// without a price (informational rows such as side-dish notes).
///
/// The input is left untouched; retained lines are rebuilt. A retained
/// line stays in the output even when all of its meals were filtered away.
/// Running the function on its own output changes nothing.
pub fn clean_mensa(all_lines: &[Line]) -> Vec<Line> {
    all_lines
        .iter()
        .filter(|line| !HIDDEN_LINES.iter().any(|hidden| line.name.contains(hidden)))
        .map(clean_line)
        .collect()
}

fn clean_line(line: &Line) -> Line {
    let mut name = line.name.clone();
    for (marker, keep) in NAME_TRUNCATIONS {
        // Predicates run against the original name so one rule cannot
        // re-trigger on another rule's output.
        if line.name.contains(marker) {
            name = name.chars().take(keep).collect();
        }
    }
    let meals = line
        .meals
        .iter()
        .filter(|meal| meal.price.is_some())
        .cloned()
        .collect();
    Line { name, meals }
}
