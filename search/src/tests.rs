use super::*;
use common::{engine, engine_with_template, entries, fruit_entries, search};
use navsearch_core::types::{DataSet, NavOption, RawEntry};
use proptest::prelude::*;

mod common {
    use super::*;

    pub(super) fn entries(pairs: &[(&str, &str)]) -> Vec<RawEntry> {
        pairs
            .iter()
            .map(|(value, label)| RawEntry::new(*value).with_label(*label))
            .collect()
    }

    pub(super) fn fruit_entries() -> Vec<RawEntry> {
        entries(&[("/a", "Apple"), ("/b", "Banana")])
    }

    pub(super) fn engine(entries: Vec<RawEntry>) -> SearchEngine {
        let config = SearchConfig::default();
        SearchEngine::new(Index::build(entries, &config.separator), None, config)
    }

    pub(super) fn engine_with_template(entries: Vec<RawEntry>, markup: &str) -> SearchEngine {
        let config = SearchConfig::default();
        SearchEngine::new(
            Index::build(entries, &config.separator),
            Template::parse(markup),
            config,
        )
    }

    pub(super) fn search(engine: &SearchEngine, input: &str) -> SearchOutcome {
        engine.search(&SearchQuery::parse(input))
    }

    pub(super) fn option(value: &str, label: &str) -> NavOption {
        NavOption::from_entry(RawEntry::new(value).with_label(label), "\n")
    }
}

mod index {
    use super::*;

    #[test]
    fn test_build_preserves_order_and_count() {
        let index = Index::build(
            entries(&[("/c", "Cherry"), ("/a", "Apple"), ("/b", "Banana")]),
            "\n",
        );

        let values: Vec<_> = index.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["/c", "/a", "/b"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_build_keeps_duplicates() {
        let index = Index::build(entries(&[("/a", "Apple"), ("/a", "Apple")]), "\n");
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_build_empty() {
        let index = Index::build(Vec::new(), "\n");
        assert!(index.is_empty());
        assert!(index.get(0).is_none());
    }

    #[test]
    fn test_build_uses_text_when_label_absent() {
        let index = Index::build(vec![RawEntry::new("/a").with_text("Apple")], "\n");
        assert_eq!(index.get(0).unwrap().label, "Apple");
    }

    proptest! {
        #[test]
        fn prop_build_preserves_order_and_count(values in proptest::collection::vec("[a-z/]{0,8}", 0..32)) {
            let raw: Vec<RawEntry> = values.iter().map(|v| RawEntry::new(v.as_str()).with_text("t")).collect();
            let index = Index::build(raw, "\n");

            prop_assert_eq!(index.len(), values.len());
            for (option, value) in index.iter().zip(&values) {
                prop_assert_eq!(&option.value, value);
            }
        }
    }
}

mod query {
    use super::*;

    #[test]
    fn test_parse_lowercases() {
        assert_eq!(SearchQuery::parse("BaNaNa").as_str(), "banana");
    }

    #[test]
    fn test_empty_query() {
        assert!(SearchQuery::parse("").is_empty());
        assert!(!SearchQuery::parse(" ").is_empty());
    }
}

mod template {
    use super::common::option;
    use super::*;

    #[test]
    fn test_value_and_label_substitution() {
        let template = Template::parse("<b>%value%-%label%</b>").unwrap();
        assert_eq!(template.render(&option("a", "B")), "<b>a-B</b>");
    }

    #[test]
    fn test_all_occurrences_are_replaced() {
        let template = Template::parse("%value%|%value%|%label%|%label%").unwrap();
        assert_eq!(template.render(&option("a", "B")), "a|a|B|B");
    }

    #[test]
    fn test_missing_data_key_renders_empty() {
        let template = Template::parse("<i>%data.missing%</i>").unwrap();
        assert_eq!(template.render(&option("a", "B")), "<i></i>");
    }

    #[test]
    fn test_data_key_substitution() {
        let mut opt = option("/a", "Apple");
        opt.data = DataSet::from_attributes([("data-icon", "fruit"), ("data-page-title", "Home")]);

        let template =
            Template::parse(r#"<a href="%value%" class="%data.icon%">%data.page-title%</a>"#)
                .unwrap();
        assert_eq!(
            template.render(&opt),
            r#"<a href="/a" class="fruit">Home</a>"#
        );
    }

    #[test]
    fn test_multiple_data_keys_on_one_line() {
        let mut opt = option("/a", "Apple");
        opt.data.insert("x", "1");
        opt.data.insert("y", "2");

        let template = Template::parse("%data.x%-%data.y%").unwrap();
        assert_eq!(template.render(&opt), "1-2");
    }

    #[test]
    fn test_unknown_tokens_stay_literal() {
        let template = Template::parse("100% %other% %value%").unwrap();
        assert_eq!(template.render(&option("a", "B")), "100% %other% a");
        assert_eq!(template.placeholder_count(), 1);
    }

    #[test]
    fn test_unterminated_percent_is_literal() {
        let template = Template::parse("%value% 50%").unwrap();
        assert_eq!(template.render(&option("a", "B")), "a 50%");
    }

    #[test]
    fn test_blank_markup_is_no_template() {
        assert!(Template::parse("").is_none());
        assert!(Template::parse("  \n\t ").is_none());
    }

    #[test]
    fn test_markup_is_trimmed() {
        let template = Template::parse("\n  <li>%label%</li>\n").unwrap();
        assert_eq!(template.render(&option("a", "B")), "<li>B</li>");
    }

    #[test]
    fn test_substituted_values_are_escaped() {
        let template = Template::parse("<span>%label%</span>").unwrap();
        assert_eq!(
            template.render(&option("a", "Fish & <Chips>")),
            "<span>Fish &amp; &lt;Chips&gt;</span>"
        );
    }

    #[test]
    fn test_default_fragment() {
        assert_eq!(
            render_default(&option("/b", "Banana")),
            r#"<a href="/b">Banana</a>"#
        );
        assert_eq!(
            render_default(&option("/q?a=1&b=\"2\"", "Q")),
            r#"<a href="/q?a=1&amp;b=&quot;2&quot;">Q</a>"#
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("it's"), "it&#39;s");
    }
}

mod search {
    use super::*;

    #[test]
    fn test_end_to_end_default_fragment() {
        let engine = engine(fruit_entries());

        let outcome = search(&engine, "an");

        assert_eq!(
            outcome,
            SearchOutcome::Rendered(RenderedResults {
                html: r#"<a href="/b">Banana</a>"#.to_string(),
                count: 1,
            })
        );
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let engine = engine(fruit_entries());
        assert_eq!(search(&engine, "BAN").count(), 1);
        assert_eq!(search(&engine, "aPpLe").count(), 1);
    }

    #[test]
    fn test_value_is_searchable() {
        let engine = engine(fruit_entries());
        assert_eq!(search(&engine, "/a").html(), r#"<a href="/a">Apple</a>"#);
    }

    #[test]
    fn test_matches_render_in_index_order() {
        let engine = engine(entries(&[
            ("/z", "Zebra banana"),
            ("/b", "Banana"),
            ("/m", "Mango"),
        ]));

        let outcome = search(&engine, "banana");

        assert_eq!(
            outcome.html(),
            r#"<a href="/z">Zebra banana</a><a href="/b">Banana</a>"#
        );
        assert_eq!(outcome.count(), 2);
    }

    #[test]
    fn test_empty_query_clears() {
        let engine = engine(fruit_entries());
        let outcome = search(&engine, "");

        assert_eq!(outcome, SearchOutcome::Cleared);
        assert_eq!(outcome.html(), "");
    }

    #[test]
    fn test_no_match() {
        let engine = engine(fruit_entries());
        assert_eq!(search(&engine, "kiwi"), SearchOutcome::NoMatch);
    }

    #[test]
    fn test_query_does_not_span_separator() {
        let engine = engine(entries(&[("ab", "cd")]));
        assert_eq!(search(&engine, "bc"), SearchOutcome::NoMatch);
    }

    #[test]
    fn test_template_is_used_for_each_match() {
        let engine = engine_with_template(
            entries(&[("/a", "Apple"), ("/b", "Banana"), ("/p", "Papaya")]),
            "<li>%label%</li>",
        );

        assert_eq!(search(&engine, "a").html(), "<li>Apple</li><li>Banana</li><li>Papaya</li>");
    }

    #[test]
    fn test_matches_iterator() {
        let engine = engine(fruit_entries());
        let query = SearchQuery::parse("a");
        let labels: Vec<_> = engine.matches(&query).map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_search_is_repeatable() {
        let engine = engine_with_template(fruit_entries(), "<b>%value%</b>");
        assert_eq!(search(&engine, "a"), search(&engine, "a"));
    }
}

mod config {
    use super::*;
    use navsearch_core::types::SearchSettings;

    #[test]
    fn test_from_settings() {
        let settings = SearchSettings {
            separator: "|".to_string(),
            collapse_on_no_match: false,
        };
        let config = SearchConfig::from(&settings);

        assert_eq!(config.separator, "|");
        assert!(!config.collapse_on_no_match);
    }

    #[test]
    fn test_default_matches_settings_default() {
        let config = SearchConfig::default();
        assert_eq!(config.separator, "\n");
        assert!(config.collapse_on_no_match);
    }
}
