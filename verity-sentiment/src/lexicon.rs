//! Crisis vocabulary matching
//!
//! A fixed set of lowercase terms empirically associated with distressing
//! news content. The thematic grouping below is documentation only; matching
//! treats the table as a flat set.
//!
//! Matching is substring-based, not word-boundary-based: "fire" matches
//! inside "firearm" as well as "wildfire". This is a known source of false
//! positives, kept for compatibility with the established labeling behavior.
//! The [`CrisisMatcher`] trait isolates the semantics so a stricter
//! word-boundary matcher can be swapped in without touching the labeler.

/// Crisis-indicator terms, lowercase.
pub const CRISIS_KEYWORDS: &[&str] = &[
    // Death / Injury / Disaster
    "kill", "killed", "kills", "dead", "death", "deaths", "injured", "injury",
    "hospitalized", "critical", "fatal", "fatalities", "casualties", "massacre",
    "tragedy", "catastrophe", "horror", "collapse", "died",
    // Violence / Crime / Abuse
    "attack", "attacked", "shot", "shooting", "gunfire", "gunman", "murder",
    "murdered", "assault", "rape", "raped", "molested", "harassment",
    "abuse", "abused", "abducted", "kidnapped", "trafficking", "crime",
    "violent", "violence", "stabbed", "acid attack", "victim",
    // War / Terrorism
    "terror", "terrorist", "bomb", "bombing", "explosion", "missile",
    "airstrike", "war", "conflict", "invasion", "clash", "hostage",
    "militia", "genocide", "extremist",
    // Natural Disaster
    "earthquake", "tsunami", "volcano", "eruption", "flood", "floods",
    "landslide", "landslides", "cyclone", "hurricane", "tornado",
    "storm", "wildfire", "fire", "burned", "scorching", "heatwave",
    // Public Health / Disease
    "outbreak", "infection", "disease", "epidemic", "pandemic",
    "virus", "covid", "ebola", "cholera", "outbreaks", "poisoned",
    // Economic / Social Crisis
    "bankruptcy", "inflation", "recession", "unemployment",
    "poverty", "homeless", "famine", "shortage", "crisis",
    // Safety Threats / Accidents
    "accident", "crash", "collision", "derailed", "plane crash",
    "train crash", "bus crash", "injuries",
    // Hate / Discrimination
    "racism", "hate crime", "lynching", "discrimination",
    "religious violence", "honor killing", "hate speech",
];

/// Check whether any crisis term occurs in the text.
///
/// Case-insensitive; no normalization beyond lowercasing. Returns false for
/// empty text.
pub fn matches_crisis(text: &str) -> bool {
    let lower = text.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|word| lower.contains(word))
}

/// Strategy seam for crisis detection.
pub trait CrisisMatcher: Send + Sync {
    fn matches(&self, text: &str) -> bool;
}

/// Default matcher with the established substring semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl CrisisMatcher for SubstringMatcher {
    fn matches(&self, text: &str) -> bool {
        matches_crisis(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_crisis_term() {
        assert!(matches_crisis("massive earthquake strikes region"));
        assert!(matches_crisis("authorities report a disease outbreak"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(matches_crisis("FLOOD warning issued"));
        assert!(matches_crisis("Earthquake Relief Underway"));
    }

    #[test]
    fn test_substring_semantics() {
        // "fire" matches inside longer words; intentional, if imprecise
        assert!(matches_crisis("new firearm legislation debated"));
        assert!(matches_crisis("wildfire season begins early"));
        // "war" matches inside "award" for the same reason
        assert!(matches_crisis("local bakery wins award"));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches_crisis("local bakery wins top prize"));
        assert!(!matches_crisis(""));
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for word in CRISIS_KEYWORDS {
            assert_eq!(*word, word.to_lowercase(), "{} is not lowercase", word);
        }
    }
}
