//! Text listing of fridge contents.
//!
//! Layout:
//!
//! ```text
//! Item(s) in fridge:                  <- or "Item(s) in fridge with freshness:"
//! apple, 3 Count                      <- counts view, one line per name
//! chicken, freshness at 6             <- freshness view, one line per perishable unit
//! waterbottle, non-perishable, 1 Count
//! Total item count: 4
//! ```
//!
//! Names are listed in ascending order. With nothing tracked the header is
//! replaced by `"Empty fridge: No item found"`.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use crate::item::Item;

const EMPTY: &str = "Empty fridge: No item found";
const HEADER_COUNTS: &str = "Item(s) in fridge:";
const HEADER_FRESHNESS: &str = "Item(s) in fridge with freshness:";

pub(crate) fn render(units: &[Item], counts: &BTreeMap<String, usize>, show_freshness: bool) -> String {
    let mut out = String::new();
    write_listing(&mut out, units, counts, show_freshness)
        .expect("formatting into a String does not fail");
    out
}

fn write_listing(
    out: &mut String,
    units: &[Item],
    counts: &BTreeMap<String, usize>,
    show_freshness: bool,
) -> fmt::Result {
    if counts.is_empty() {
        writeln!(out, "{EMPTY}")?;
    } else if !show_freshness {
        writeln!(out, "{HEADER_COUNTS}")?;
        for (name, count) in counts {
            writeln!(out, "{name}, {count} Count")?;
        }
    } else {
        writeln!(out, "{HEADER_FRESHNESS}")?;
        for (name, count) in counts {
            for item in units.iter().filter(|item| item.name() == name) {
                if item.is_non_perishable() {
                    writeln!(out, "{name}, non-perishable, {count} Count")?;
                    break;
                }
                writeln!(out, "{name}, freshness at {}", item.reported_freshness())?;
            }
        }
    }

    writeln!(out, "Total item count: {}", units.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(name: &str, freshness: i64, rate: i64) -> Item {
        Item::new(name, freshness, rate).unwrap()
    }

    fn counts(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
        pairs.iter().map(|(n, c)| (n.to_string(), *c)).collect()
    }

    #[test]
    fn empty_fridge_has_fixed_body() {
        let text = render(&[], &BTreeMap::new(), true);
        assert_eq!(text, "Empty fridge: No item found\nTotal item count: 0\n");
    }

    #[test]
    fn counts_view_is_sorted_by_name() {
        let units = vec![
            unit("waterbottle", 1, 0),
            unit("chicken", 9, 3),
            unit("apple", 14, 2),
        ];
        let text = render(
            &units,
            &counts(&[("waterbottle", 1), ("chicken", 1), ("apple", 1)]),
            false,
        );
        assert_eq!(
            text,
            "Item(s) in fridge:\n\
             apple, 1 Count\n\
             chicken, 1 Count\n\
             waterbottle, 1 Count\n\
             Total item count: 3\n"
        );
    }

    #[test]
    fn freshness_view_lists_perishables_per_unit() {
        let units = vec![
            unit("chicken", 6, 3),
            unit("waterbottle", 1, 0),
            unit("chicken", 9, 3),
            unit("waterbottle", 1, 0),
        ];
        let text = render(&units, &counts(&[("chicken", 2), ("waterbottle", 2)]), true);
        assert_eq!(
            text,
            "Item(s) in fridge with freshness:\n\
             chicken, freshness at 6\n\
             chicken, freshness at 9\n\
             waterbottle, non-perishable, 2 Count\n\
             Total item count: 4\n"
        );
    }

    #[test]
    fn depleted_names_still_show_in_counts_view() {
        let text = render(&[], &counts(&[("chicken", 0)]), false);
        assert!(text.contains("chicken, 0 Count"));
        assert!(text.ends_with("Total item count: 0\n"));

        // No units means no freshness lines.
        let text = render(&[], &counts(&[("chicken", 0)]), true);
        assert!(!text.contains("chicken"));
    }
}
