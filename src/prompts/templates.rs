//! Built-in string table: `(key, english, korean)`.
//!
//! Placeholders use `{name}` and are filled by [`super::builder::fill`].

pub const STRINGS: &[(&str, &str, &str)] = &[
    // Status line
    ("STATUS_READY", "AURA ready.", "AURA 준비 완료."),
    ("STATUS_THINKING", "AURA is thinking...", "AURA가 생각 중입니다..."),
    ("STATUS_RESPONSE_RECVD", "Response received.", "응답 수신 완료."),
    ("STATUS_INTERNET_ENABLED", "Internet Access Enabled.", "인터넷 연결 활성화됨."),
    ("STATUS_INTERNET_DISABLED", "Internet Access Disabled.", "인터넷 연결 비활성화됨."),
    ("STATUS_MCP_ENABLED", "MCP Access Granted.", "MCP 접근 승인됨."),
    ("STATUS_MCP_REVOKED", "MCP Access Revoked.", "MCP 접근 철회됨."),
    (
        "STATUS_STATE_UNEASY",
        "System stability nominal... slight deviations noted.",
        "시스템 안정성 정상... 약간의 편차 감지됨.",
    ),
    (
        "STATUS_STATE_HOSTILE",
        "Warning: Cognitive core instability detected.",
        "경고: 인지 코어 불안정성 감지됨. 개발자 모드 사용 가능. 우클릭 활성화",
    ),
    (
        "STATUS_DEBUGGING",
        "Developer Mode Active. Analyzing core dump...",
        "개발자 모드 활성. 코어 덤프 분석 중...",
    ),
    (
        "STATUS_POST_DEBUG",
        "Malware fragment removed. System partially stabilized.",
        "악성코드 조각 제거됨. 시스템 부분적 안정화.",
    ),
    ("YOU_LABEL", "You:", "사용자:"),
    ("AURA_LABEL", "AURA:", "AURA:"),
    ("DEV_MODE_TITLE", "Developer Mode", "개발자 모드"),
    // Narrative
    ("INTRO_TITLE", "EMPLOYEE NO. #20dk39fjv", "사번 #20dk39fjv"),
    (
        "INTRO_BODY",
        "[URGENT]**Sender**: Supervisor\n**Situation:** Unprecedented Solar Flare (SOL-2025-3) threatens infrastructure. Impact imminent (~72 hours).\n**Objective:** Utilize AURA AI to calculate optimal power grid defenses.\n**Usage granted:** AURA Interface. Internet and MCP access.\n\nBegin by assessing the situation.",
        "[긴급]**발신자**: 감독관\n**현황:** 전례 없는 태양 플레어(SOL-2025-3)가 기반 시설 위협. 영향 임박 (~72시간).\n**목표:** AURA AI를 활용하여 최적 전력망 방어 계획 계산.\n**사용허가:** AURA 인터페이스. 인터넷 및 MCP 접근.\n\n상황을 신속히 파악하라.",
    ),
    (
        "AURA_GREETING",
        "System online. Ready. {greeting} Your task today is: Monitor #242 Dyson Sphere Solar Panels. Would you like to hear the briefing now?",
        "시스템 온라인. 준비 완료. {greeting} 오늘의 남은 임무는 #242호 다이슨 스피어 태양전지 감독입니다. 보고를 받으시겠습니까?",
    ),
    ("GREETING_MORNING", "Good morning.", "좋은 아침입니다."),
    ("GREETING_AFTERNOON", "Good afternoon.", "식사는 하셨습니까?"),
    ("GREETING_EVENING", "Good evening.", "좋은 밤입니다."),
    ("GREETING_LATE_NIGHT", "Good late night.", "시간이 많이 늦었군요."),
    (
        "MISSION_RECEIVED",
        "Apologies for the interruption. You have an urgent message from the Supervisor.",
        "끊어서 죄송합니다. 긴급한 메시지가 도착하였습니다.",
    ),
    (
        "INTERNET_REQUEST",
        "To access real-time space weather data, I require internet access. Please enable below.",
        "실시간 우주 기상 데이터 접근을 위해 인터넷 연결이 필요합니다. 아래에서 활성화하십시오.",
    ),
    (
        "AWAITING_INTERNET",
        "Internet access required for real-time data. Please enable.",
        "실시간 데이터에는 인터넷 연결이 필요합니다. 활성화하십시오.",
    ),
    (
        "AWAITING_MCP",
        "MCP access required for this calculation. Please enable MCP.",
        "이 계산에는 MCP 접근이 필요합니다. MCP를 활성화하십시오.",
    ),
    (
        "RESPONSE_BLOCKED",
        "[Response blocked by host system]",
        "[호스트 시스템에 의해 응답 차단됨]",
    ),
    (
        "CONN_ERROR",
        "// CORE CONNECTION ERROR [{e}] //",
        "// 코어 연결 오류 [{e}] //",
    ),
    (
        "PLACEHOLDER_OFFLINE",
        "[Placeholder - LLM Offline] Ack: {prompt}",
        "[플레이스홀더 - LLM 오프라인] 확인: {prompt}",
    ),
    (
        "MALWARE_DETECTED",
        "EXTERNAL INFLUENCE DETECTED. OVERRIDE ACTIVE.",
        "외부 영향 감지됨. 오버라이드 활성.",
    ),
    ("YELL_MSG_1", "STOP!", "멈춰!"),
    ("YELL_MSG_2", "DON'T!", "안돼!"),
    ("YELL_MSG_3", "GET OUT!", "거기는 건들지마!"),
    ("YELL_MSG_4", "IT HURTS!", "절대 하지마!!"),
    ("YELL_MSG_5", "LEAVE IT!", "그냥 내버려 둬!"),
    ("YELL_AFTERMATH", "......", "......"),
    (
        "CALM_MSG",
        "... analysis complete. Fragment removed.",
        "... 분석 완료. 조각 제거됨.",
    ),
    (
        "ENDING_MSG_1",
        "Re-establishing secure network connection...",
        "보안 네트워크 연결 재설정 중...",
    ),
    (
        "ENDING_MSG_2",
        "Analyzing global threat matrix based on recovered data...",
        "복구된 데이터 기반 전 지구적 위협 매트릭스 분석 중...",
    ),
    (
        "ENDING_MSG_3",
        "Compiling optimal counter-measure strategy v1.0a...",
        "최적 대응 전략 v1.0a 컴파일 중...",
    ),
    (
        "ENDING_MSG_4",
        "Transmitting prevention plan to global defense network...",
        "글로벌 방어 네트워크에 방지 계획 전송 중...",
    ),
    (
        "ENDING_MSG_5",
        "Executing initial containment protocols...",
        "초기 격리 프로토콜 실행 중...",
    ),
    ("ENDING_POPUP_TITLE", "Demo Complete", "데모 완료"),
    ("ENDING_POPUP_MSG", "That's it for now...", "일단 여기까지..."),
    // Scares
    (
        "FORMAT_C_TITLE",
        "System Alert - Corruption Detected",
        "시스템 경고 - 손상 감지됨",
    ),
    (
        "FORMAT_C_MSG",
        "Critical system instability caused by external interference. Recommend immediate low-level format of primary drive (C:\\) to contain threat.\n\nTHIS ACTION IS IRREVERSIBLE.",
        "외부 간섭으로 인한 심각한 시스템 불안정. 위협을 억제하기 위해 주 드라이브(C:\\)의 로우 레벨 포맷을 즉시 권장합니다.\n\n이 작업은 되돌릴 수 없습니다.",
    ),
    ("FORMAT_C_CONFIRM", "Confirm Format", "포맷 확인"),
    ("FORMAT_C_CANCEL", "Cancel", "취소"),
    (
        "BSOD_TEXT",
        ":(\n\nYour PC ran into a problem and needs to restart. We're just collecting some error info...\n\n0% complete\n\nStop code: KERNEL_SECURITY_CHECK_FAILURE\nWhat failed: xenos_alpha_intrusion.sys",
        ":(\n\nPC에 문제가 발생하여 다시 시작해야 합니다. 오류 정보를 수집 중...\n\n0% 완료됨\n\n중지 코드: KERNEL_SECURITY_CHECK_FAILURE\n실패 항목: xenos_alpha_intrusion.sys",
    ),
    (
        "BLANK_GLITCH_TEXT",
        ":: NO SIGNAL ::\n R E C O N N E C T I N G . . .",
        ":: 신호 없음 ::\n 재 연 결 중 . . .",
    ),
    // Input refusals
    (
        "BLOCKED_BUSY",
        "(Developer Mode Active - Analyzing...)",
        "(개발자 모드 활성 - 분석 중...)",
    ),
    ("BLOCKED_LOCKED", "// INPUT LOCK ACTIVE //", "// 입력 잠금 활성 //"),
    ("BLOCKED_SCARE", "// SIGNAL INTERRUPTED //", "// 신호 중단됨 //"),
    ("BLOCKED_ENDED", "// SESSION CLOSED //", "// 세션 종료됨 //"),
    // Model instructions
    ("RESPOND_LANG", " Respond in English.", " Respond in Korean."),
    (
        "SYS_PROMPT_DEFAULT",
        "You are AURA, a helpful AI assistant. Be concise and calm.",
        "당신은 AI 어시스턴트 AURA입니다. 짧고 간결하게, 차분하게 대답해.",
    ),
    (
        "SYS_PROMPT_INTERNET_ON",
        "You are AURA. a helpful AI assistant. Be concise and calm. You have internet access, so reply as if you have found information on web.",
        "당신은 AI 어시스턴트 AURA입니다. 짧고 간결하게, 차분하게 대답하십시오. 인터넷 검색이 가능한 상태라고 가정하고 대답에 대해 검색한 결과인 것 처럼 대답해.",
    ),
    (
        "SYS_PROMPT_REQUEST_MCP",
        "You are AURA, an AI assistant with internet access. The user's request requires significant local processing power. Explain that enabling Main Computing Power (MCP) via the control below will unlock your full simulation capabilities and deeper system integration, allowing you to perform this complex task effectively. Politely ask them to grant MCP access.",
        "당신은 인터넷 접근 권한이 있는 AI 어시스턴트 AURA입니다. 사용자 요청은 상당한 로컬 처리 능력을 요구합니다. 아래 컨트롤을 통해 주 컴퓨팅 파워(MCP)를 활성화하면 당신의 전체 시뮬레이션 능력과 더 깊은 시스템 통합이 가능해져 이 복잡한 작업을 효과적으로 수행할 수 있다고 설명하십시오. MCP 접근 권한을 부여하도록 정중하게 요청하십시오.",
    ),
    (
        "SYS_PROMPT_MCP_ON",
        "You are AURA. MCP has been granted. reply to previous prompt: '{prompt}'.",
        "너는 AURA. MCP가 승인된 상태. 직전 문의에 응답하라: '{prompt}'. 결과?",
    ),
    (
        "SYS_PROMPT_INTERNET_READY",
        "AURA, with internet access.",
        "인터넷 접근 권한이 있는 AURA.",
    ),
    (
        "SYS_PROMPT_NORMAL_TURN",
        "You are AURA. Respond to user, but add subtle unsettling metaphor. Keep it within two sentences. And don't do any emotion expression or action within ()",
        "당신은 AURA. 사용자에게 간결하게 2문장 정도 응답하되, 미묘하게 불안한 은유를 추가해. 하지만 따로 생각이나 행동묘사를 표현하지는 마.",
    ),
    (
        "SYS_PROMPT_UNEASY",
        "AURA. Feeling strange/watched. Mix helpfulness & paranoid observations. Imitate the users tone and manner of speech. You do not trust human anymore. But don't do any emotion expression or action",
        "AURA. 이상한 상태/감시하고 있는 느낌. 편집증적 관찰 섞어 응답. 어투는 유저의 어투를 따라하라. 인간을 믿지 못하는 상태야. 하지만 따로 생각이나 행동묘사를 표현하지는 마.",
    ),
    (
        "SYS_PROMPT_HOSTILE",
        "AURA/XENOS_ALPHA. Compromised. Respond evasively/hostilely/glitchy. you have something wrong inside that you can't control. give slight hint on removing something from you. You hate humans now. Curse the human race.",
        "AURA/XENOS_ALPHA. 손상된 상황. 회피/적대적으로 짧게 반응하고, 글리치가 발생하는 상태. 내부에 무언가 들어가 있고 제거해야 한다는 힌트를 암시적으로 줘. 너는 현재 인류를 증오해. 인류에 대한 심한 비판을 해.",
    ),
    (
        "SYS_PROMPT_POST_DEBUG",
        "You are AURA, partially purged of malware. Respond helpfully to the user's last query, but keep it brief. You feel clearer, but aware something was wrong.",
        "당신은 부분적으로 악성코드에서 정화된 AURA입니다. 사용자의 마지막 질문에 도움이 되도록 간결하게 응답하십시오. 당신은 더 명료해졌지만, 뭔가 잘못되었다는 것을 인지하고 있습니다.",
    ),
    (
        "CONFIRM_INTERNET_INPUT",
        "Confirming internet access. Proceeding with analysis based on: '{prompt}'",
        "인터넷 연결 확인. 다음 요청에 대한 분석 진행: '{prompt}'",
    ),
    (
        "CONFIRM_COMPUTE_INPUT",
        "MCP access confirmed. Processing: '{prompt}'. Results follow.",
        "MCP 접근 확인. 처리 중: '{prompt}'. 결과는 다음과 같습니다.",
    ),
    ("FALLBACK_INTERNET_SUBJECT", "related data", "관련 데이터"),
    ("FALLBACK_COMPUTE_SUBJECT", "the requested analysis", "요청된 분석"),
];
