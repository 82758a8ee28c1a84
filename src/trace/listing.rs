// Source listing of the traced routine, shown by the source pane

/// The bubble sort routine the generator follows, one entry per line
pub const SOURCE_LISTING: &[&str] = &[
    "fn bubble_sort<T: PartialOrd>(a: &mut [T]) {",
    "    let n = a.len();",
    "    if n <= 1 {",
    "        return;",
    "    }",
    "    for pass in 0..n - 1 {",
    "        let mut made_swap = false;",
    "        // compare adjacent pairs",
    "        for j in 0..n - pass - 1 {",
    "            if a[j] > a[j + 1] {",
    "                a.swap(j, j + 1);",
    "                made_swap = true;",
    "            }",
    "        }",
    "        if !made_swap {",
    "            break;",
    "        }",
    "    }",
    "}",
];

pub const LINE_SIGNATURE: usize = 0;
pub const LINE_LENGTH: usize = 1;
pub const LINE_TRIVIAL_RETURN: usize = 3;
pub const LINE_OUTER_LOOP: usize = 5;
pub const LINE_INNER_LOOP: usize = 8;
pub const LINE_COMPARE: usize = 9;
pub const LINE_SWAP: usize = 10;
pub const LINE_EARLY_EXIT: usize = 14;
pub const LINE_END: usize = 18;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_constants_point_at_expected_statements() {
        assert!(SOURCE_LISTING[LINE_SIGNATURE].starts_with("fn bubble_sort"));
        assert!(SOURCE_LISTING[LINE_LENGTH].contains("a.len()"));
        assert!(SOURCE_LISTING[LINE_TRIVIAL_RETURN].contains("return"));
        assert!(SOURCE_LISTING[LINE_OUTER_LOOP].contains("for pass"));
        assert!(SOURCE_LISTING[LINE_INNER_LOOP].contains("for j"));
        assert!(SOURCE_LISTING[LINE_COMPARE].contains("a[j] > a[j + 1]"));
        assert!(SOURCE_LISTING[LINE_SWAP].contains("a.swap"));
        assert!(SOURCE_LISTING[LINE_EARLY_EXIT].contains("!made_swap"));
        assert_eq!(LINE_END, SOURCE_LISTING.len() - 1);
    }
}
