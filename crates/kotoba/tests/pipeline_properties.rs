use std::sync::Arc;

use kotoba::{
    errors::KotobaError,
    nested,
    nested::{Container, Nested, batch, flatten, map_elements, uniquify},
    preprocess::{
        Batch,
        HorizontalPipeline,
        LowerCase,
        MapItems,
        Pipeline,
        Preprocessor,
        PreprocessorExt,
        RegexTokenizer,
        Strip,
        Transpose2D,
    },
    types::TokenId,
    vocab::{IdToToken, TokenEmbedding, TokenToId, Vocabulary, VocabularyOptions},
};
use proptest::prelude::*;

fn nested_ints() -> impl Strategy<Value = Nested<i32>> {
    any::<i32>()
        .prop_map(Nested::Leaf)
        .prop_recursive(4, 64, 6, |inner| {
            proptest::collection::vec(inner, 0..6).prop_map(Nested::Node)
        })
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn to_lower(s: String) -> String {
    s.to_lowercase()
}

fn to_stripped(s: String) -> String {
    s.trim().to_string()
}

fn add_one(x: i32) -> i32 {
    x + 1
}

fn double(x: i32) -> i32 {
    x * 2
}

proptest::proptest! {
    #![proptest_config(proptest::prelude::ProptestConfig::with_cases(256))]

    #[test]
    fn identity_map_preserves_shape(data in nested_ints()) {
        let eager = map_elements(data.clone(), |x: i32| x, false);
        prop_assert!(!eager.is_lazy());
        prop_assert_eq!(eager.materialize(), data.clone());

        let lazy = map_elements(data.clone(), |x: i32| x, true);
        prop_assert!(lazy.is_lazy());
        prop_assert_eq!(lazy.materialize(), data);
    }

    #[test]
    fn flatten_is_idempotent(data in nested_ints()) {
        let once: Vec<i32> = flatten(data).collect();
        let twice: Vec<i32> = flatten(Nested::from_leaves(once.clone())).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn batch_preserves_leaf_order(data in nested_ints(), size in 1usize..5) {
        let expected: Vec<i32> = flatten(data.clone()).collect();
        let batched = batch(data, size, false).unwrap().materialize();
        prop_assert_eq!(flatten(batched).collect::<Vec<i32>>(), expected);
    }

    #[test]
    fn uniquify_keeps_first_occurrences(values in proptest::collection::vec(0u8..16, 0..64)) {
        let unique: Vec<u8> = uniquify(values.iter().copied()).collect();

        let mut seen = Vec::new();
        for value in &values {
            if !seen.contains(value) {
                seen.push(*value);
            }
        }
        prop_assert_eq!(unique, seen);
    }
}

#[test]
fn test_uniquify_example() {
    let unique: Vec<&str> = uniquify(["a", "b", "a", "c", "b"]).collect();
    assert_eq!(unique, vec!["a", "b", "c"]);
}

#[test]
fn test_batch_example() {
    let data: Nested<i32> = nested!([1, 2, 3, 4, 5]);
    assert_eq!(
        batch(data.clone(), 2, false).unwrap().materialize(),
        nested!([[1, 2], [3, 4], [5]])
    );
    assert!(matches!(
        batch(data, 0, false),
        Err(KotobaError::InvalidBatchSize { size: 0 })
    ));
}

#[test]
fn test_vocabulary_example() {
    let vocab = Vocabulary::build(
        Nested::from_leaves(strings(&["a", "b", "a"])),
        strings(&["<PAD>"]),
        None,
    )
    .unwrap();

    assert_eq!(vocab.index_to_token(), &strings(&["<PAD>", "a", "b"])[..]);
    assert_eq!(vocab.token_to_id(&"a".to_string()), 1);
    assert_eq!(vocab.token_to_id(&"z".to_string()), 4);
    assert_eq!(vocab.id_to_token(1).map(String::as_str), Some("a"));
    assert_eq!(vocab.id_to_token(-1), None);
    assert_eq!(vocab.id_to_token(99), None);

    let coverage = vocab
        .token_coverage(Nested::from_leaves(strings(&["a", "z"])))
        .unwrap();
    assert_eq!(coverage, 0.5);
}

#[test]
fn test_pipeline_example() {
    let pipeline = Pipeline::new()
        .with_step(MapItems::new(to_lower as fn(String) -> String))
        .with_step(MapItems::new(to_stripped as fn(String) -> String));

    let data = Nested::from_leaves(strings(&["  A "]));
    let out = pipeline.transform(Container::from(data), false);
    assert!(!out.is_lazy());
    assert_eq!(out.materialize(), Nested::from_leaves(strings(&["a"])));
}

#[test]
fn test_named_text_steps_match_mapped_steps() {
    let named = Pipeline::new().with_step(LowerCase).with_step(Strip);
    let mapped = Pipeline::new()
        .with_step(MapItems::new(to_lower as fn(String) -> String))
        .with_step(MapItems::new(to_stripped as fn(String) -> String));

    let data = Nested::node([
        Nested::from_leaves(strings(&[" Hello ", "WORLD"])),
        Nested::from_leaves(strings(&["\tMixed Case\n"])),
    ]);
    assert_eq!(
        named.transform(Container::from(data.clone()), true).materialize(),
        mapped.transform(Container::from(data), false).materialize()
    );
}

#[test]
fn test_horizontal_pipeline_example() {
    let pipeline: HorizontalPipeline<i32> = HorizontalPipeline::new()
        .with_step(MapItems::new(add_one as fn(i32) -> i32))
        .with_step(MapItems::new(double as fn(i32) -> i32));

    let data: Nested<i32> = nested!([[1, 2], [3, 4], [5, 6]]);
    let out = pipeline.transform(Container::from(data), false);
    assert_eq!(out.materialize(), nested!([[2, 3], [6, 8]]));
}

#[test]
fn test_batch_then_transpose() {
    let step = Pipeline::new()
        .with_step(Batch::new(2).unwrap())
        .with_step(Transpose2D);

    let data: Nested<i32> = nested!([1, 2, 3, 4, 5]);
    let out = step.transform(Container::from(data), false);
    assert_eq!(out.materialize(), nested!([[1, 3, 5]]));
}

#[test]
fn test_export_load_roundtrip() {
    let tokenize = Pipeline::new()
        .with_step(LowerCase)
        .with_step(RegexTokenizer::word_punct().unwrap());

    let corpus = Nested::from_leaves(strings(&["The cat sat on the mat.", "A dog, a cat!"]));
    let tokens = tokenize.transform(Container::from(corpus.clone()), false);

    let options = VocabularyOptions::default()
        .with_special_tokens(strings(&["<PAD>", "<UNK>"]))
        .with_unk_index(1);
    let vocab = Vocabulary::build_with_options(tokens, &options).unwrap();

    let dir = tempdir::TempDir::new("kotoba_roundtrip").unwrap();
    let path = dir.path().join("vocab").join("tokens.txt");
    vocab.export_token_list(&path).unwrap();

    let loaded = Vocabulary::load(&path).unwrap();
    assert_eq!(loaded.index_to_token(), vocab.index_to_token());

    let loaded = Arc::new(Vocabulary::load_with_options(&path, &options).unwrap());
    assert_eq!(*loaded, vocab);

    let to_ids: TokenToId<String, Vocabulary> = TokenToId::new(loaded.clone());
    let ids: Nested<TokenId> = tokenize
        .then(to_ids)
        .transform(Container::from(corpus), false)
        .materialize();
    assert_eq!(ids, nested!([[2, 3, 4, 5, 2, 6, 7], [8, 9, 10, 8, 3, 11]]));

    let to_tokens: IdToToken<String, Vocabulary> = IdToToken::new(loaded);
    let decoded = to_tokens
        .transform(Container::from(nested!([2, 3, 99])), false)
        .materialize();
    assert_eq!(
        decoded,
        Nested::from_leaves([
            Some("the".to_string()),
            Some("cat".to_string()),
            Some("<UNK>".to_string()),
        ])
    );
}
