//! Translation prompt construction.

/// Keywords that show up disproportionately in anime and manga titles.
const ANIME_TITLE_KEYWORDS: &[&str] = &[
    "saga",
    "chronicles",
    "story",
    "adventure",
    "tale",
    "legend",
    "academy",
    "school",
    "world",
    "project",
    "blade",
    "dragon",
    "hero",
    "warrior",
    "knight",
    "princess",
    "prince",
    "king",
    "queen",
    "rebirth",
    "reincarnation",
    "isekai",
    "slayer",
    "hunter",
    "magical",
    "fantasy",
    "piece",
    "note",
    "academia",
    "titan",
    "alchemist",
    "geass",
];

/// Heuristic: is this text probably an anime title rather than prose?
///
/// Short texts with few words usually are; otherwise a keyword match
/// decides.
pub fn is_probably_anime_title(text: &str) -> bool {
    if text.len() < 50 && text.split_whitespace().count() < 8 {
        return true;
    }

    let lower = text.to_lowercase();
    ANIME_TITLE_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Builds the translation prompt.
///
/// Titles get the semantic-translation instructions; Arabic targets get
/// dialect guidance. The model is asked to answer in a fixed JSON shape
/// so the response can be parsed mechanically.
pub fn build_translation_prompt(
    text: &str,
    target_language: &str,
    source_language: Option<&str>,
    is_anime_title: Option<bool>,
) -> String {
    let is_anime_title = is_anime_title.unwrap_or_else(|| is_probably_anime_title(text));

    let mut prompt = String::from("Translate the following text");
    if let Some(source) = source_language {
        prompt.push_str(&format!(" from {source}"));
    }
    prompt.push_str(&format!(" into {target_language}.\n\n"));

    if is_anime_title {
        prompt.push_str(&format!(
            "IMPORTANT: this is an anime/manga title. Do NOT produce a phonetic \
transliteration. Translate the MEANING of the title into {target_language}, not its sounds.

Examples of correct translations:
- \"Vinland Saga\" -> \"ملحمة فينلاندا\" (the saga of Vinland, not \"فينلاند ساغا\")
- \"Attack on Titan\" -> \"هجوم العمالقة\" (the attack of the titans, not \"أتاك أون تايتن\")
- \"Death Note\" -> \"مذكرة الموت\" (the notebook of death, not \"ديث نوت\")
- \"One Piece\" -> \"القطعة الواحدة\" (the single piece, not \"ون بيس\")
- \"My Hero Academia\" -> \"أكاديميتي للأبطال\" (my academy for heroes, not \"ماي هيرو أكاديميا\")

Keep proper nouns and place names in their appropriate Arabic transcription.\n\n"
        ));
    }

    prompt.push_str(&format!("Text to translate:\n\"\"\"{text}\"\"\"\n\n"));

    let target_lower = target_language.to_lowercase();
    if target_lower == "ar" || target_lower.contains("arab") {
        prompt.push_str(
            "Specific instructions for Arabic:
1. Use Modern Standard Arabic, understandable across all Arab countries.
2. For Japanese cultural concepts with no direct equivalent, translate for essence and meaning.
3. Avoid expressions local to a single Arab country.
4. Adapt metaphors and idioms to the Arabic cultural context.\n\n",
        );
    }

    prompt.push_str(
        "Additional instructions:
1. Return only the translated text, no comments or explanations.
2. Preserve the formatting, line breaks and punctuation of the original text.
3. Answer in the following JSON format:
{
  \"translatedText\": \"the translated text here\",
  \"detectedLanguage\": \"the detected source language (if not specified)\"
}\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_a_title() {
        assert!(is_probably_anime_title("God Eater"));
    }

    #[test]
    fn long_prose_is_not_a_title() {
        let prose = "In a quiet coastal town, a young fisherman discovers that the tides \
                     have started whispering his name every evening when the lanterns burn low.";
        assert!(!is_probably_anime_title(prose));
    }

    #[test]
    fn keyword_marks_long_text_as_title() {
        let text = "the extraordinarily long retelling of the vinland saga as remembered by \
                    the oldest sailors of the northern seas and their many descendants";
        assert!(is_probably_anime_title(text));
    }

    #[test]
    fn title_prompt_carries_semantic_instructions() {
        let prompt = build_translation_prompt("Death Note", "Arabic", None, Some(true));
        assert!(prompt.contains("anime/manga title"));
        assert!(prompt.contains("مذكرة الموت"));
    }

    #[test]
    fn arabic_target_gets_dialect_guidance() {
        for target in ["Arabic", "arabic", "ar"] {
            let prompt = build_translation_prompt("Hello", target, None, Some(false));
            assert!(prompt.contains("Modern Standard Arabic"), "target {target}");
        }
    }

    #[test]
    fn non_arabic_target_skips_dialect_guidance() {
        let prompt = build_translation_prompt("Hello", "French", None, Some(false));
        assert!(!prompt.contains("Modern Standard Arabic"));
    }

    #[test]
    fn source_language_is_mentioned_when_given() {
        let prompt = build_translation_prompt("Hello", "Arabic", Some("English"), Some(false));
        assert!(prompt.starts_with("Translate the following text from English into Arabic."));
    }

    #[test]
    fn prompt_always_requests_json_contract() {
        let prompt = build_translation_prompt("Hello", "French", None, None);
        assert!(prompt.contains("\"translatedText\""));
        assert!(prompt.contains("\"detectedLanguage\""));
    }
}
