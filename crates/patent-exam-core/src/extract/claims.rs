//! Claims decomposition
//!
//! The claims section arrives as one block of text in which individual
//! claims are introduced by `<n>.` prefixes. Splitting walks the numbered
//! prefixes and takes everything up to the next prefix (or the end of the
//! section) as the claim body.

use super::patterns::FieldPatterns;

/// Result of decomposing a claims section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ClaimSplit {
    /// Normalized `"<n>. <text>"` entries in source order.
    pub(crate) claims: Vec<String>,
    /// Segments that carried no claim: text before the first numbered
    /// prefix and prefixes with an empty body.
    pub(crate) discarded_segments: usize,
}

/// Split a claims section into normalized claim entries.
pub(crate) fn split_claims(section: &str) -> ClaimSplit {
    struct Hit<'t> {
        number: &'t str,
        at: usize,
        body_from: usize,
    }

    let prefix = &FieldPatterns::get().claim_prefix;
    let hits: Vec<Hit<'_>> = prefix
        .captures_iter(section)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?;
            Some(Hit {
                number: number.as_str(),
                at: whole.start(),
                body_from: whole.end(),
            })
        })
        .collect();

    let mut split = ClaimSplit::default();

    let leading = match hits.first() {
        Some(first) => &section[..first.at],
        None => section,
    };
    if !leading.trim().is_empty() {
        split.discarded_segments += 1;
    }

    for (i, hit) in hits.iter().enumerate() {
        let body_end = hits.get(i + 1).map_or(section.len(), |next| next.at);
        let body = section[hit.body_from..body_end].trim();
        if body.is_empty() {
            split.discarded_segments += 1;
        } else {
            split.claims.push(format!("{}. {}", hit.number, body));
        }
    }

    split
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_numbered_claims() {
        let section = "\n1. 一种新型螺栓结构，其特征在于：设有防松槽。\n2. 根据权利要求1所述的螺栓结构。\n";
        let split = split_claims(section);
        assert_eq!(split.claims.len(), 2);
        assert_eq!(
            split.claims[0],
            "1. 一种新型螺栓结构，其特征在于：设有防松槽。"
        );
        assert_eq!(split.claims[1], "2. 根据权利要求1所述的螺栓结构。");
        assert_eq!(split.discarded_segments, 0);
    }

    #[test]
    fn test_multiline_claim_body() {
        let section = "1. 一种装置，\n包括底座\n和支架。\n2. 根据权利要求1所述的装置。";
        let split = split_claims(section);
        assert_eq!(split.claims.len(), 2);
        assert_eq!(split.claims[0], "1. 一种装置，\n包括底座\n和支架。");
    }

    #[test]
    fn test_unnumbered_preamble_is_discarded() {
        let section = "如下所述：\n1. 一种装置。";
        let split = split_claims(section);
        assert_eq!(split.claims, vec!["1. 一种装置。".to_string()]);
        assert_eq!(split.discarded_segments, 1);
    }

    #[test]
    fn test_empty_body_is_discarded() {
        let section = "1. \n2. 一种装置。";
        let split = split_claims(section);
        assert_eq!(split.claims, vec!["2. 一种装置。".to_string()]);
        assert_eq!(split.discarded_segments, 1);
    }

    #[test]
    fn test_no_numbered_prefix() {
        let split = split_claims("这里没有编号的权利要求。");
        assert!(split.claims.is_empty());
        assert_eq!(split.discarded_segments, 1);

        let split = split_claims("   \n  ");
        assert!(split.claims.is_empty());
        assert_eq!(split.discarded_segments, 0);
    }

    #[test]
    fn test_multi_digit_numbers_survive() {
        let section = "9. 第九项。\n10. 第十项。";
        let split = split_claims(section);
        assert_eq!(split.claims, vec!["9. 第九项。", "10. 第十项。"]);
    }

    #[test]
    fn test_renumbering_preserves_source_numbers() {
        // gaps are kept as written, not renumbered
        let section = "2. 第一条。\n5. 第二条。";
        let split = split_claims(section);
        assert_eq!(split.claims, vec!["2. 第一条。", "5. 第二条。"]);
    }
}
