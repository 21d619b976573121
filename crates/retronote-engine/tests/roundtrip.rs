//! End-to-end parse/serialize behavior over realistic retrospective
//! templates.

use pretty_assertions::assert_eq;
use retronote_engine::{
    Block, BlockLevel, FormatOptions, GuideCatalog, Preset, parse, serialize, to_editable_markdown,
};
use rstest::rstest;

const FALLBACK: &str = "1234. Two Sum";

const RETRO: &str = "# 1234. Two Sum

## 접근 방법

처음에는 브루트포스로 접근했다가 시간 초과가 났다.
해시맵으로 보완해서 O(n)에 통과했다.

### 배운 점

- 해시맵 조회는 평균 O(1)
- 투 포인터는 정렬이 전제

## 제출한 코드

```rust
fn two_sum(nums: &[i32], target: i32) -> (usize, usize) {
    todo!()
}
```
";

#[test]
fn first_block_is_always_h1() {
    for input in [RETRO, "## only a section", "plain prose", "**bold line**"] {
        let blocks = parse(input, FALLBACK);
        assert_eq!(blocks[0].level, BlockLevel::H1);
    }
}

#[test]
fn korean_retro_sections_and_bodies_survive_roundtrip() {
    let blocks = parse(RETRO, FALLBACK);
    let out = serialize(&blocks);

    assert!(out.contains("## 접근 방법"));
    assert!(out.contains("### 배운 점"));
    assert!(out.contains("처음에는 브루트포스로 접근했다가 시간 초과가 났다."));
    assert!(out.contains("- 해시맵 조회는 평균 O(1)"));
    assert!(out.contains("- 투 포인터는 정렬이 전제"));
    assert!(out.contains("fn two_sum(nums: &[i32], target: i32) -> (usize, usize) {"));
}

#[rstest]
#[case::full_retro(RETRO)]
#[case::missing_title("## 접근 방법\n\n내용 한 줄\n\n### 배운 점\n\n- 항목")]
#[case::plain_prose("no structure at all")]
#[case::bold_sections("**요약**\n첫 줄\n**소감**\n둘째 줄")]
#[case::ragged_whitespace("# 1234. Two Sum\n\n\n##   접근 방법   \n내용\n\n\n")]
#[case::empty("")]
fn serialize_after_parse_is_idempotent(#[case] input: &str) {
    let first = serialize(&parse(input, FALLBACK));
    let second = serialize(&parse(&first, FALLBACK));
    assert_eq!(second, first);
}

#[test]
fn prose_without_headings_collapses_to_fallback_title() {
    let blocks = parse("아무 제목 없는 메모", FALLBACK);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].level, BlockLevel::H1);
    assert_eq!(blocks[0].title, FALLBACK);
    // The orphan prose is dropped by design.
    assert_eq!(blocks[0].content, None);
}

#[test]
fn canonical_form_snapshot() {
    let blocks = parse("##  접근 방법 \n내용 첫 줄\n\n\n**한 줄 요약**\n요약", FALLBACK);
    insta::assert_snapshot!(serialize(&blocks), @r"
    # 1234. Two Sum

    ## 접근 방법

    내용 첫 줄

    **한 줄 요약**

    요약
    ");
}

#[test]
fn numbered_view_snapshot() {
    let presets = vec![Preset {
        title: "접근 방법".to_string(),
        guide: "어떤 순서로 문제를 풀었나요?".to_string(),
        content_guide: None,
        category: "problem-solving".to_string(),
    }];
    let blocks = vec![
        Block::new(BlockLevel::H1, FALLBACK),
        Block::new(BlockLevel::H2, "접근 방법"),
        Block::new(BlockLevel::H3, "배운 점").with_content("- 항목"),
    ];
    let options = FormatOptions {
        numbering: true,
        strip_emoji: false,
        guide_questions: true,
    };
    let out = to_editable_markdown(&blocks, &options, &GuideCatalog::from_presets(&presets));
    insta::assert_snapshot!(out, @r"
    # 1234. Two Sum

    ## 1. 접근 방법

    > 어떤 순서로 문제를 풀었나요?

    ### 2. 배운 점

    - 항목
    ");
}

#[test]
fn auto_numbering_renumbers_regardless_of_existing_prefixes() {
    let blocks = vec![
        Block::new(BlockLevel::H1, FALLBACK),
        Block::new(BlockLevel::H2, "A"),
        Block::new(BlockLevel::H2, "5. B"),
        Block::new(BlockLevel::H2, "C"),
    ];
    let options = FormatOptions {
        numbering: true,
        ..Default::default()
    };
    let out = to_editable_markdown(&blocks, &options, &GuideCatalog::default());
    assert_eq!(out, "# 1234. Two Sum\n\n## 1. A\n\n## 2. B\n\n## 3. C");
}

#[test]
fn default_section_flag_survives_roundtrip() {
    let blocks = parse(RETRO, FALLBACK);
    let submitted = blocks
        .iter()
        .find(|b| b.title == "제출한 코드")
        .expect("submitted-code section");
    assert!(submitted.is_default_section);

    let reparsed = parse(&serialize(&blocks), FALLBACK);
    let submitted = reparsed
        .iter()
        .find(|b| b.title == "제출한 코드")
        .expect("submitted-code section after roundtrip");
    assert!(submitted.is_default_section);
}
