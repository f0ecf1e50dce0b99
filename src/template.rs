//! Part-of-speech template filter

use crate::models::{ContingencyRecord, TemplateSet};
use tracing::debug;

/// Keep records whose `(pos1, pos2)` equals some template pair, in input order.
/// A record is emitted at most once no matter how many templates it matches.
pub fn filter_by_templates(
    records: &[ContingencyRecord],
    templates: &TemplateSet,
) -> Vec<ContingencyRecord> {
    let kept: Vec<ContingencyRecord> = records
        .iter()
        .filter(|r| templates.matches(r))
        .cloned()
        .collect();
    debug!(
        "Template filter kept {} of {} records ({} templates)",
        kept.len(),
        records.len(),
        templates.len()
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::record;
    use crate::models::{PosTag, Template};

    #[test]
    fn test_only_template_pairs_survive() {
        let records = vec![
            record("strong", "J", "tea", "N", [1, 0, 0, 0]),
            record("tea", "N", "quickly", "R", [1, 0, 0, 0]),
            record("drink", "V", "tea", "N", [1, 0, 0, 0]),
            record("tea", "N", "the", "D", [1, 0, 0, 0]),
        ];
        let kept = filter_by_templates(&records, &TemplateSet::default());
        let words: Vec<&str> = kept.iter().map(|r| r.word1.as_str()).collect();
        assert_eq!(words, vec!["strong", "drink"]);
        for r in &kept {
            assert!(TemplateSet::default().iter().any(|t| t.matches(r)));
        }
    }

    #[test]
    fn test_overlapping_templates_do_not_duplicate() {
        let templates = TemplateSet::new([
            Template(PosTag::Noun, PosTag::Noun),
            Template(PosTag::from("N"), PosTag::Noun),
        ]);
        let records = vec![record("tea", "N", "party", "N", [1, 0, 0, 0])];
        assert_eq!(filter_by_templates(&records, &templates).len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let records = vec![
            record("a", "N", "b", "N", [1, 0, 0, 0]),
            record("c", "J", "d", "N", [9, 0, 0, 0]),
            record("e", "V", "f", "I", [5, 0, 0, 0]),
        ];
        let kept = filter_by_templates(&records, &TemplateSet::default());
        assert_eq!(kept, records);
    }
}
