use spellwise::algorithm::Algorithm;
use spellwise::config::SuggesterConfig;
use spellwise::cost::{DEFAULT_NON_GROUP_COST, Editex};
use spellwise::distance::edit_distance;
use spellwise::suggest::{Suggester, Suggestion};

fn words(suggestions: &[Suggestion]) -> Vec<&str> {
    suggestions.iter().map(|s| s.word.as_str()).collect()
}

#[test]
fn test_levenshtein_misspelling() {
    let mut suggester = Suggester::new(Algorithm::Levenshtein);
    suggester.add_words(["spelling", "checker"]);

    let suggestions = suggester.get_suggestions("speling");
    assert_eq!(words(&suggestions), vec!["spelling"]);
    assert_eq!(suggestions[0].distance, 1.0);
}

#[test]
fn test_caverphone_one_shared_code() {
    let mut suggester = Suggester::new(Algorithm::CaverphoneOne);
    suggester.add_words(["night", "nite", "knight"]);

    assert_eq!(suggester.process("night"), "NT1111");
    assert_eq!(suggester.process("nite"), "NT1111");

    let suggestions = suggester.get_suggestions("night");
    assert_eq!(words(&suggestions), vec!["night", "nite"]);
    assert!(suggestions.iter().all(|s| s.distance == 0.0));
}

#[test]
fn test_caverphone_two_shared_code() {
    let mut suggester = Suggester::new(Algorithm::CaverphoneTwo);
    suggester.add_words(["Stephen", "Steven", "Stefan", "Thompson"]);

    let suggestions = suggester.get_suggestions("steven");
    assert!(words(&suggestions).contains(&"Stephen"));
    assert!(words(&suggestions).contains(&"Steven"));
    assert!(!words(&suggestions).contains(&"Thompson"));
}

#[test]
fn test_soundex_robert_rupert() {
    let mut suggester = Suggester::new(Algorithm::Soundex);
    suggester.add_words(["Robert", "Rupert"]);

    assert_eq!(suggester.process("Robert"), "R163");
    assert_eq!(suggester.process("Rupert"), "R163");

    let suggestions = suggester.get_suggestions("robert");
    assert!(words(&suggestions).contains(&"Rupert"));
    assert!(suggestions.iter().all(|s| s.distance == 0.0));
}

#[test]
fn test_editex_shared_classes_are_cheaper() {
    let mut suggester = Suggester::new(Algorithm::Editex);
    suggester.add_words(["sez"]);

    let suggestions = suggester.get_suggestions("ces");
    assert_eq!(words(&suggestions), vec!["sez"]);

    // c/s and s/z share a class; scored as unrelated letters the two
    // substitutions would cost twice the non-group cost
    let distance = suggestions[0].distance;
    assert!(distance <= Algorithm::Editex.default_max_distance());
    assert!(distance < 2.0 * DEFAULT_NON_GROUP_COST);
    assert_eq!(distance, edit_distance(&Editex::default(), "ces", "sez"));
}

#[test]
fn test_empty_queries_never_fail() {
    for algorithm in Algorithm::ALL {
        let mut suggester = Suggester::new(algorithm);
        suggester.add_words(["a", "ab", "hello"]);

        for query in ["", "123", "!!!", "  "] {
            let suggestions = suggester.get_suggestions(query);
            assert!(
                suggestions.windows(2).all(|w| w[0].distance <= w[1].distance),
                "{algorithm} {query:?}"
            );
        }
    }
}

#[test]
fn test_empty_query_levenshtein_counts_insertions() {
    let mut suggester = Suggester::new(Algorithm::Levenshtein);
    suggester.add_words(["a", "ab", "abc"]);

    let suggestions = suggester.get_suggestions("42");
    assert_eq!(words(&suggestions), vec!["a", "ab"]);
    assert_eq!(suggestions[1].distance, 2.0);
}

#[test]
fn test_typox_prefers_neighbouring_keys() {
    let config = SuggesterConfig::new(Algorithm::Typox).with_max_distance(1.0);
    let mut suggester = Suggester::with_config(config).unwrap();
    suggester.add_words(["hello", "jello", "pello"]);

    let suggestions = suggester.get_suggestions("gello");
    // g sits next to h; j and p are further away
    assert_eq!(words(&suggestions), vec!["hello"]);
    assert_eq!(suggestions[0].distance, 1.0);
}

#[test]
fn test_shared_key_keeps_insertion_order_in_ties() {
    let mut suggester = Suggester::new(Algorithm::Soundex);
    suggester.add_words(["Rupert", "Robert", "Ruppert"]);

    let suggestions = suggester.get_suggestions("Robert");
    assert_eq!(words(&suggestions), vec!["Rupert", "Robert", "Ruppert"]);
}
