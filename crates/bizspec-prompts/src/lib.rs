pub mod requirement;
pub mod sections;

use bizspec_core::Section;

/// Assemble the full translation prompt for a business requirement.
pub fn assemble_prompt(business_requirement: &str) -> String {
    let mut prompt = String::new();
    requirement::append_preamble(&mut prompt, business_requirement);
    sections::append_instructions(&mut prompt, Section::ALL);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_requirement_verbatim() {
        let req = "ECサイトで、カートに入れた商品の合計金額が1万円以上なら送料無料にしたい";
        let prompt = assemble_prompt(req);
        assert!(prompt.contains(req));
    }

    #[test]
    fn prompt_lists_headings_in_order() {
        let prompt = assemble_prompt("some requirement text");
        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|s| {
                prompt
                    .find(s.canonical_heading())
                    .unwrap_or_else(|| panic!("missing heading for {s:?}"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn requirement_precedes_output_format() {
        let prompt = assemble_prompt("REQ-MARKER");
        let req = prompt.find("REQ-MARKER").unwrap();
        let first_heading = prompt.find(Section::TechnicalSpec.canonical_heading()).unwrap();
        assert!(req < first_heading);
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(assemble_prompt("same input"), assemble_prompt("same input"));
    }
}
