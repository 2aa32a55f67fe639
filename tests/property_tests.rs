use proptest::prelude::*;
use sitemark::{lex_inline, markdown_to_node, segment_blocks};

proptest! {
    // Segmentation drops everything blank: no empty or whitespace-only
    // blocks, whatever the input.
    #[test]
    fn segmentation_never_yields_blank_blocks(doc in "[ -~\n]*") {
        for block in segment_blocks(&doc) {
            prop_assert!(!block.text.trim().is_empty());
            prop_assert_eq!(block.text, block.text.trim());
        }
    }

    // Block texts are substrings of the document in source order.
    #[test]
    fn blocks_appear_in_source_order(doc in "[ -~\n]*") {
        let mut from = 0;
        for block in segment_blocks(&doc) {
            let pos = doc[from..].find(block.text);
            prop_assert!(pos.is_some(), "block {:?} not found after {}", block.text, from);
            from += pos.unwrap() + block.text.len();
        }
    }

    // Re-serializing a tree yields the identical string: no hidden mutable
    // state in rendering.
    #[test]
    fn rendering_is_idempotent(doc in "[a-zA-Z0-9 .\n#>-]*") {
        if let Ok(root) = markdown_to_node(&doc) {
            prop_assert_eq!(root.to_html(), root.to_html());
        }
    }

    // k delimiters split into k+1 pieces: lexing succeeds with exactly one
    // span per piece when k is even, and fails when k is odd.
    #[test]
    fn delimiter_parity(pieces in prop::collection::vec("[a-z ]{0,6}", 1..8)) {
        let text = pieces.join("**");
        let delimiters = pieces.len() - 1;
        let result = lex_inline(&text);
        if delimiters % 2 == 0 {
            let spans = result.unwrap();
            prop_assert_eq!(spans.len(), pieces.len());
        } else {
            prop_assert!(result.is_err());
        }
    }
}
