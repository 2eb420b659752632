//! Prompt builders for the Gemini collaborators
//!
//! Prompts are Traditional Chinese (the app targets the Taiwanese market).
//! All hard length limits (5 lookup hits, 45-character blurb, 100-character
//! report entries) live in the prompt text; the response parsers enforce the
//! caps again on our side.

/// Lookup prompt: up to 5 real company names, one per line, each optionally
/// followed by "｜產業類別" so confirmed entries can fill the industry field.
pub fn company_lookup(query: &str) -> String {
    format!(
        "請列出 5 個與關鍵字「{query}」相關的台灣知名公司或經濟部登記的公司正式名稱。\n\
         每行一個，格式為「公司名稱｜產業類別」；若不確定產業類別可只回傳公司名稱。\n\
         不要編號，不要其他說明文字。"
    )
}

/// Background blurb prompt for a confirmed company (kept under 45 characters
/// so it fits the 50-character notes field)
pub fn company_background(company: &str) -> String {
    format!(
        "請搜尋並提供台灣公司「{company}」的簡短背景介紹。\n\
         規則：\n\
         1. 字數必須嚴格控制在 45 字以內。\n\
         2. 內容需包含其主要核心業務或最新市場動態。\n\
         3. 直接回傳文字，不需要任何標題或引號。"
    )
}

/// Report prompt: 3 industry trends + 3 customer pain points, JSON output
/// constrained by the response schema sent alongside this prompt
pub fn report(company: &str, industry: &str, notes: &str) -> String {
    let background = if notes.trim().is_empty() { "無" } else { notes };
    format!(
        "你是一位專業的產業分析師。請針對位於「{industry}」產業的「{company}」進行分析。\n\
         參考背景：{background}\n\n\
         請生成 3 個目前的【產業趨勢】和 3 個該客戶面臨的【客戶痛點】。\n\n\
         規則：\n\
         1. 產業趨勢標題必須包含在【】中。\n\
         2. 內容必須具體、具備專業洞察力。\n\
         3. 每一項內容（含標題）必須在 100 字以內。\n\
         4. 請以繁體中文撰寫並回傳 JSON 格式。"
    )
}

/// Solution prompt: matches a SYSTEX offering to the report's pain points
pub fn solution(company: &str, industry: &str, pain_points: &str) -> String {
    format!(
        "針對「{company}」在{industry}產業中的痛點：{pain_points}。\n\
         請生成一個由「精誠集團 (SYSTEX)」提供的專業解決方案推薦。\n\n\
         規則：\n\
         1. 標題必須包含精誠或其解決方案品牌名。\n\
         2. 執行單位必須是精誠內部的專業部門。\n\
         3. 業務話術必須以業務代表的角度，具備極強的說服力。\n\
         4. 回傳繁體中文 JSON 格式。"
    )
}

#[cfg(test)]
#[path = "prompts_tests.rs"]
mod prompts_tests;
