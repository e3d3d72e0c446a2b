#[cfg(test)]
mod tests {
    use crate::{Category, Section, CATEGORY_INFO, NUM_CATS};

    #[test]
    fn all_order_matches_indices() {
        for (i, cat) in Category::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
            assert_eq!(CATEGORY_INFO[i].category, *cat);
            assert_eq!(CATEGORY_INFO[i].section, cat.section());
        }
    }

    #[test]
    fn upper_section_is_exactly_the_face_categories() {
        let upper: Vec<Category> = Category::ALL
            .iter()
            .copied()
            .filter(|c| c.section() == Section::Upper)
            .collect();
        assert_eq!(upper.len(), 6);
        for (i, cat) in upper.iter().enumerate() {
            assert_eq!(cat.face_value(), Some(i as u8 + 1));
        }

        let lower_count = Category::ALL
            .iter()
            .filter(|c| c.section() == Section::Lower)
            .count();
        assert_eq!(lower_count, NUM_CATS - 6);

        for cat in Category::ALL {
            assert_eq!(cat.face_value().is_some(), cat.section() == Section::Upper);
        }
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for cat in Category::ALL {
            let parsed: Category = cat.id().parse().unwrap();
            assert_eq!(parsed, cat);
        }

        assert!("smallStrait".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Category::ThreeOfAKind).unwrap();
        assert_eq!(json, "\"threeOfAKind\"");

        let cat: Category = serde_json::from_str("\"yatzy\"").unwrap();
        assert_eq!(cat, Category::Yatzy);

        // Serde wire names agree with the metadata ids.
        for cat in Category::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.id()));
        }

        assert_eq!(serde_json::to_string(&Section::Upper).unwrap(), "\"Upper\"");
    }

    #[test]
    fn display_uses_the_display_name() {
        assert_eq!(Category::FullHouse.to_string(), "Full House");
        assert_eq!(Category::Ones.to_string(), "Ones");
    }

    #[test]
    fn descriptions_are_nonempty() {
        for info in &CATEGORY_INFO {
            assert!(!info.name.is_empty());
            assert!(!info.description.is_empty());
            assert!(!info.id.is_empty());
        }
    }
}
