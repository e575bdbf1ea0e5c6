use unicode_normalization::UnicodeNormalization;

/// Lookup-key normalization applied before any index query
pub trait Preprocessor {
    // NFKC folds width variants onto the indexed key form
    fn normalize(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        let text: String = text.nfkc().collect();

        text.replace(['\n', '\r'], "").trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
