/// Topics the generator draws from.
pub const CATEGORIES: [&str; 10] = [
    "역사의 숨은 이야기",
    "과학의 신비한 현상",
    "동물들의 놀라운 능력",
    "세계의 이상한 법률",
    "음식의 흥미로운 기원",
    "인체의 신기한 사실",
    "우주의 미스터리",
    "언어의 재미있는 특징",
    "건축물의 비밀",
    "발명품의 뒷이야기",
];

pub const SYSTEM_PROMPT: &str = "당신은 흥미롭고 교육적인 퀴즈를 만드는 전문가입니다. \
사람들이 잘 모르지만 알면 좋은 신기한 지식을 퀴즈로 만들어주세요.";

/// Category for `seed`. The same seed always yields the same category.
pub fn pick_category(seed: u64) -> &'static str {
    // splitmix64 finalizer; clock-derived seeds differ mostly in their low bits.
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^= z >> 31;
    CATEGORIES[(z % CATEGORIES.len() as u64) as usize]
}

/// Seed derived from the wall clock.
pub fn time_seed() -> u64 {
    let now = chrono::Utc::now();
    (now.timestamp() as u64).rotate_left(32) ^ u64::from(now.timestamp_subsec_nanos())
}

/// User prompt asking for one quiz in the labeled-section format the parser reads.
pub fn build_prompt(category: &str) -> String {
    format!(
        r#"다음 주제에 대해 흥미로운 퀴즈 하나를 만들어주세요: "{category}"

요구사항:
1. 대부분의 사람들이 모르는 신기하고 흥미로운 내용
2. 퀴즈 형식: 객관식 4개 선택지 (A, B, C, D)
3. 정답과 함께 상세한 설명 포함
4. YouTube 쇼츠에 적합한 짧고 임팩트 있는 내용

응답 형식:
제목: [흥미로운 제목]
질문: [퀴즈 질문]
A) [선택지 1]
B) [선택지 2]
C) [선택지 3]
D) [선택지 4]
정답: [정답 번호]
설명: [상세한 설명과 추가 정보]"#
    )
}

#[cfg(test)]
#[path = "../../tests/unit/services/prompt.rs"]
mod tests;
