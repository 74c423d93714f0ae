//! Rendering never fails, whatever the input.

use proptest::prelude::*;
use prep_render::protect::SENTINELS;
use prep_render::render;

proptest! {
    #[test]
    fn any_string_renders(source in any::<String>()) {
        let html = render(&source);
        for (_, sentinel) in SENTINELS {
            prop_assert!(!html.contains(sentinel));
        }
        prop_assert!(!html.contains("<script"));
    }

    #[test]
    fn delimiter_soup_renders(source in "[*_~`#>|\\-\\[\\]()! \n1.:]{0,80}") {
        let html = render(&source);
        prop_assert_eq!(html.trim(), html.as_str());
    }

    #[test]
    fn newlines_only_come_from_fences(source in "[a-z *#>|\\-\n]{0,80}") {
        prop_assert!(!render(&source).contains('\n'));
    }
}
