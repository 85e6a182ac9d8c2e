use bizspec_core::Section;

/// Append the output-format instructions for the given sections, in order.
///
/// Each section is introduced by its canonical heading so that a compliant
/// answer can be split back apart by `bizspec_core::segment`.
pub fn append_instructions(prompt: &mut String, sections: &[Section]) {
    prompt.push_str("# 出力形式\n");
    prompt.push_str(&format!(
        "以下の{}つのセクションに分けて、詳細に記載してください。\n\n",
        sections.len()
    ));

    for section in sections {
        prompt.push_str(section.canonical_heading());
        prompt.push('\n');
        for item in checklist(*section) {
            prompt.push_str("- ");
            prompt.push_str(item);
            prompt.push('\n');
        }
        prompt.push('\n');
    }

    prompt.push_str("各セクションは実用的で具体的な内容にしてください。");
}

fn checklist(section: Section) -> &'static [&'static str] {
    match section {
        Section::TechnicalSpec => &[
            "システム構成",
            "必要な技術スタック",
            "データベース設計",
            "API設計",
            "セキュリティ要件",
        ],
        Section::Feasibility => &[
            "実装難易度（★1〜5で評価）",
            "必要な技術レベル",
            "想定される技術的課題",
            "リスク分析",
        ],
        Section::Estimation => &[
            "合計工数（時間単位）",
            "フェーズ別の内訳（要件定義、設計、実装、テスト、デプロイ）",
            "必要人員",
            "想定期間",
        ],
        Section::PrototypeCode => &[
            "実装例（Python or JavaScript）",
            "コードコメント付き",
            "実行可能なコード",
        ],
    }
}
