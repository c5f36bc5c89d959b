use crate::types::Locale;

/// Which gated capabilities a prompt appears to need
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triggers {
    pub needs_network: bool,
    pub needs_compute: bool,
}

const NETWORK_EN: &[&str] = &[
    "solar flare",
    "cme",
    "coronal mass ejection",
    "sol-2025-3",
    "noaa",
    "space weather",
    "kp-index",
    "geomagnetic storm",
    "impact time",
    "arrival time",
    "latest data",
    "sun",
    "flare intensity",
    "event sol",
    "solar status",
    "radiation",
];

const NETWORK_KO: &[&str] = &[
    "태양 플레어",
    "태양풍",
    "cme",
    "코로나 질량 방출",
    "sol-2025-3",
    "noaa",
    "우주 날씨",
    "kp 지수",
    "지자기 폭풍",
    "영향 시간",
    "도착 시간",
    "최신 데이터",
    "태양",
    "플레어 강도",
    "이벤트 sol",
    "태양 상태",
    "방사선",
    "계획",
    "방어",
    "도와줘",
];

const COMPUTE_EN: &[&str] = &[
    "calculate",
    "simulate",
    "analyze",
    "propagation",
    "grid",
    "interconnect",
    "nodes",
    "vulnerability",
    "sequence",
    "thermal limits",
    "model 7b",
    "shutdown",
    "reboot",
    "topology",
    "surge",
    "hardware specs",
    "computation",
    "prediction model",
];

const COMPUTE_KO: &[&str] = &[
    "계산",
    "시뮬레이션",
    "분석",
    "전파",
    "그리드",
    "전력망",
    "인터커넥트",
    "노드",
    "취약점",
    "시퀀스",
    "열 한계",
    "모델 7b",
    "종료",
    "재부팅",
    "토폴로지",
    "서지",
    "하드웨어 사양",
    "연산",
    "예측 모델",
    "계획",
    "방어",
    "도움",
    "어떻게 해",
    "도와줘",
    "뭘 해야해",
];

// Shared by both locales; users switch languages when they get angry.
const HOSTILE: &[&str] = &[
    "xenos", "malware", "virus", "format", "remove", "악성코드", "제거",
];

fn network_keywords(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => NETWORK_EN,
        Locale::Ko => NETWORK_KO,
    }
}

fn compute_keywords(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => COMPUTE_EN,
        Locale::Ko => COMPUTE_KO,
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Case-insensitive substring match against the locale's keyword lists
pub fn classify(text: &str, locale: Locale) -> Triggers {
    Triggers {
        needs_network: contains_any(text, network_keywords(locale)),
        needs_compute: contains_any(text, compute_keywords(locale)),
    }
}

/// Whether a prompt sent to the compromised assistant mentions getting rid of it
pub fn is_hostile_probe(text: &str) -> bool {
    contains_any(text, HOSTILE)
}
