use super::*;

#[test]
fn category_choice_is_deterministic() {
    for seed in [0, 1, 42, u64::MAX] {
        assert_eq!(pick_category(seed), pick_category(seed));
        assert!(CATEGORIES.contains(&pick_category(seed)));
    }
}

#[test]
fn consecutive_seeds_spread_over_categories() {
    let seen: std::collections::HashSet<_> = (0..200).map(pick_category).collect();
    assert!(seen.len() >= 8, "only {} categories reached", seen.len());
}

#[test]
fn prompt_names_category_and_section_labels() {
    let p = build_prompt("우주의 미스터리");
    assert!(p.contains("\"우주의 미스터리\""));
    for label in ["제목:", "질문:", "A)", "D)", "정답:", "설명:"] {
        assert!(p.contains(label), "missing {label}");
    }
}
