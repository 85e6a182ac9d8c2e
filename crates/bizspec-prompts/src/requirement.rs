/// Append the role line and the caller's requirement.
pub fn append_preamble(prompt: &mut String, business_requirement: &str) {
    prompt.push_str("あなたは優秀なシステムアーキテクトです。\n");
    prompt.push_str("以下のビジネス要望を分析し、技術仕様に変換してください。\n\n");
    prompt.push_str("# ビジネス要望\n");
    prompt.push_str(business_requirement);
    prompt.push_str("\n\n");
}
