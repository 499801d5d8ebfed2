use std::collections::BTreeMap;

// "dark:hover:bg-slate-800" groups under "dark:hover:bg-slate"; classes
// without a dash ("flex", "hidden") are their own group.
fn group(class: &str) -> &str { class.rsplit_once('-').map_or(class, |(prefix, _)| prefix) }

/// Merges two class lists; a class in `add` replaces one in `orig` from the
/// same group.
pub fn tailwind_merge(orig: &str, add: &str) -> String { tailwind_merge_all(&[orig, add]) }

/// Like [`tailwind_merge`] over any number of lists, later ones winning.
pub fn tailwind_merge_all(lists: &[&str]) -> String {
    let mut m: BTreeMap<&str, &str> = BTreeMap::new();
    lists
        .iter()
        .flat_map(|l| l.split_ascii_whitespace())
        .for_each(|class| {
            m.insert(group(class), class);
        });
    m.into_values().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use crate::{tailwind_merge, tailwind_merge_all};

    #[test]
    fn test_basic() {
        assert_eq!(tailwind_merge("m-1 m-2", ""), "m-2");
        assert_eq!(tailwind_merge("m-1", "m-2"), "m-2");
        assert_eq!(tailwind_merge("m-2 hover:m-3", "m-1"), "hover:m-3 m-1");
        assert_eq!(tailwind_merge("", ""), "");
    }

    #[test]
    fn test_variants_are_separate() {
        assert_eq!(
            tailwind_merge("bg-slate-100 dark:bg-slate-900", "bg-slate-50"),
            "bg-slate-50 dark:bg-slate-900"
        );
        assert_eq!(tailwind_merge("flex  p-2", "flex"), "flex p-2");
    }

    #[test]
    fn test_merge_all() {
        assert_eq!(
            tailwind_merge_all(&["p-6 rounded-lg", "p-4", "p-2 shadow"]),
            "p-2 rounded-lg shadow"
        );
    }
}
