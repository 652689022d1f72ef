use crate::domain::NormalizedForm;

/// The 32 ASCII punctuation characters stripped during normalization.
pub const ASCII_PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Lowercase `text`, strip ASCII punctuation and split on whitespace.
///
/// Total over every input; the empty string yields an empty form.
pub fn normalize(text: &str) -> NormalizedForm {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    NormalizedForm::from_normalized(normalized)
}
