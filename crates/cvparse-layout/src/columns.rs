//! Two-column layout detection and column-ordered text assembly.
//!
//! Resume templates very commonly put contact details and skills in a
//! narrow left column with experience on the right. A naive block-by-block
//! scan interleaves the two columns line by line; this module detects the
//! layout from the first page and, when two columns are found, emits the
//! left column in full before the right column.

use cvparse_core::{PageBlocks, TextBlock};

/// A block belongs to the left column when its right edge sits at or
/// before the horizontal midpoint of the page.
fn is_left_of_midpoint(block: &TextBlock, page_width: f32) -> bool {
    block.x1 <= page_width / 2.0
}

/// Heuristic two-column detection, computed once per document from the
/// first page only and applied to every page.
///
/// Counts non-empty blocks on each side of the midpoint and requires the
/// smaller side to hold more than half as many blocks as the larger one.
/// Full-width headers and footers land on one side of the count; the
/// ratio threshold tolerates that skew.
pub fn is_two_column_layout(pages: &[PageBlocks]) -> bool {
    let Some(first) = pages.first() else {
        return false;
    };

    let mut left_count: usize = 0;
    let mut right_count: usize = 0;
    for block in &first.blocks {
        if block.text.trim().is_empty() {
            continue;
        }
        if is_left_of_midpoint(block, first.width) {
            left_count += 1;
        } else {
            right_count += 1;
        }
    }

    let max = left_count.max(right_count);
    if max == 0 {
        return false;
    }
    let ratio = left_count.min(right_count) as f32 / max as f32;
    ratio > 0.5
}

/// Extract plain text from pre-loaded pages in human reading order.
///
/// Two-column documents yield the full left column, a newline, then the
/// full right column; everything else concatenates blocks in the order
/// the parser produced them. Whitespace-only blocks never contribute to
/// the output. Total over valid geometry: never fails.
pub fn extract_layout_aware_text(pages: &[PageBlocks]) -> String {
    if is_two_column_layout(pages) {
        let (left, right) = column_texts(pages);
        format!("{left}\n{right}").trim().to_string()
    } else {
        naive_text(pages)
    }
}

/// Block texts in source order, pages joined by newlines.
fn naive_text(pages: &[PageBlocks]) -> String {
    let mut pages_text = Vec::new();
    for page in pages {
        let blocks: Vec<&str> = page
            .blocks
            .iter()
            .filter(|b| !b.text.trim().is_empty())
            .map(|b| b.text.as_str())
            .collect();
        pages_text.push(blocks.join("\n"));
    }
    pages_text.join("\n").trim().to_string()
}

/// Partition every page's blocks into left/right accumulators with the
/// same midpoint test as classification. Blocks stay in source traversal
/// order within each column; they are deliberately not re-sorted by
/// vertical position.
fn column_texts(pages: &[PageBlocks]) -> (String, String) {
    let mut left = String::new();
    let mut right = String::new();

    for page in pages {
        for block in &page.blocks {
            let text = block.text.trim();
            if text.is_empty() {
                continue;
            }
            let column = if is_left_of_midpoint(block, page.width) {
                &mut left
            } else {
                &mut right
            };
            column.push_str(text);
            column.push('\n');
        }
    }

    (left.trim().to_string(), right.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(x0: f32, x1: f32, text: &str) -> TextBlock {
        TextBlock {
            x0,
            y0: 0.0,
            x1,
            y1: 10.0,
            text: text.to_string(),
        }
    }

    fn page(width: f32, blocks: Vec<TextBlock>) -> PageBlocks {
        PageBlocks { width, blocks }
    }

    #[test]
    fn test_all_blocks_one_side_is_single_column() {
        // Everything crosses the midpoint: nothing on the left
        let pages = vec![page(
            600.0,
            vec![
                block(10.0, 500.0, "Summary line one"),
                block(10.0, 520.0, "Summary line two"),
                block(10.0, 480.0, "Summary line three"),
            ],
        )];
        assert!(!is_two_column_layout(&pages));
        assert_eq!(
            extract_layout_aware_text(&pages),
            "Summary line one\nSummary line two\nSummary line three"
        );
    }

    #[test]
    fn test_balanced_page_is_two_column() {
        let pages = vec![page(
            600.0,
            vec![
                block(0.0, 200.0, "a"),
                block(0.0, 210.0, "b"),
                block(0.0, 220.0, "c"),
                block(0.0, 230.0, "d"),
                block(320.0, 580.0, "e"),
                block(320.0, 580.0, "f"),
                block(320.0, 580.0, "g"),
                block(320.0, 580.0, "h"),
            ],
        )];
        assert!(is_two_column_layout(&pages));
    }

    #[test]
    fn test_mild_imbalance_still_two_column() {
        // 3 left vs 2 right: ratio 0.666 clears the 0.5 bar
        let pages = vec![page(
            600.0,
            vec![
                block(0.0, 100.0, "a"),
                block(0.0, 100.0, "b"),
                block(0.0, 100.0, "c"),
                block(400.0, 580.0, "d"),
                block(400.0, 580.0, "e"),
            ],
        )];
        assert!(is_two_column_layout(&pages));
    }

    #[test]
    fn test_heavy_imbalance_is_single_column() {
        // 4 left vs 1 right: ratio 0.25
        let pages = vec![page(
            600.0,
            vec![
                block(0.0, 100.0, "a"),
                block(0.0, 100.0, "b"),
                block(0.0, 100.0, "c"),
                block(0.0, 100.0, "d"),
                block(400.0, 580.0, "e"),
            ],
        )];
        assert!(!is_two_column_layout(&pages));
        assert_eq!(extract_layout_aware_text(&pages), "a\nb\nc\nd\ne");
    }

    #[test]
    fn test_whitespace_blocks_ignored_everywhere() {
        // The three whitespace blocks on the right must not flip the
        // classification, and must not appear in the output
        let pages = vec![page(
            600.0,
            vec![
                block(0.0, 100.0, "a"),
                block(0.0, 100.0, "b"),
                block(0.0, 100.0, "c"),
                block(0.0, 100.0, "d"),
                block(400.0, 580.0, "   "),
                block(400.0, 580.0, "\n\t"),
                block(400.0, 580.0, ""),
                block(400.0, 580.0, "real"),
            ],
        )];
        assert!(!is_two_column_layout(&pages));
        assert_eq!(extract_layout_aware_text(&pages), "a\nb\nc\nd\nreal");
    }

    #[test]
    fn test_two_column_reading_order() {
        // Interleaved in source order; output must be left column first
        let pages = vec![page(
            600.0,
            vec![
                block(0.0, 250.0, "Name: Alice"),
                block(0.0, 260.0, "Email: a@x.com"),
                block(320.0, 580.0, "Skills: Go"),
                block(320.0, 590.0, "Projects: X"),
            ],
        )];
        assert!(is_two_column_layout(&pages));
        assert_eq!(
            extract_layout_aware_text(&pages),
            "Name: Alice\nEmail: a@x.com\nSkills: Go\nProjects: X"
        );
    }

    #[test]
    fn test_classification_from_first_page_only() {
        // Page 1 is balanced; page 2 is entirely right-of-midpoint but is
        // still split with the document-wide two-column decision
        let pages = vec![
            page(
                600.0,
                vec![
                    block(0.0, 250.0, "left one"),
                    block(320.0, 580.0, "right one"),
                ],
            ),
            page(600.0, vec![block(320.0, 580.0, "right two")]),
        ];
        assert!(is_two_column_layout(&pages));
        assert_eq!(
            extract_layout_aware_text(&pages),
            "left one\nright one\nright two"
        );
    }

    #[test]
    fn test_two_column_page_missing_one_side() {
        // A page with no left-side blocks contributes nothing to the left
        // accumulator, without error
        let pages = vec![
            page(
                600.0,
                vec![
                    block(0.0, 250.0, "L1"),
                    block(0.0, 250.0, "L2"),
                    block(320.0, 580.0, "R1"),
                    block(320.0, 580.0, "R2"),
                ],
            ),
            page(600.0, vec![block(0.0, 250.0, "L3")]),
        ];
        assert!(is_two_column_layout(&pages));
        assert_eq!(extract_layout_aware_text(&pages), "L1\nL2\nL3\nR1\nR2");
    }

    #[test]
    fn test_empty_page_classifies_single_column() {
        // Zero non-empty blocks: ratio defined as 0, no division error
        let pages = vec![page(600.0, vec![block(0.0, 100.0, "  \n ")])];
        assert!(!is_two_column_layout(&pages));
        assert_eq!(extract_layout_aware_text(&pages), "");
    }

    #[test]
    fn test_empty_document() {
        assert!(!is_two_column_layout(&[]));
        assert_eq!(extract_layout_aware_text(&[]), "");
    }

    #[test]
    fn test_midpoint_boundary_counts_left() {
        // Right edge exactly on the midpoint belongs to the left column
        let pages = vec![page(
            600.0,
            vec![
                block(0.0, 300.0, "on the line"),
                block(310.0, 580.0, "right"),
            ],
        )];
        assert!(is_two_column_layout(&pages));
        assert_eq!(extract_layout_aware_text(&pages), "on the line\nright");
    }

    #[test]
    fn test_block_text_trimmed_in_column_output() {
        let pages = vec![page(
            600.0,
            vec![
                block(0.0, 250.0, "  padded left  \n"),
                block(320.0, 580.0, "\nright\n"),
            ],
        )];
        assert!(is_two_column_layout(&pages));
        assert_eq!(extract_layout_aware_text(&pages), "padded left\nright");
    }
}
