use action_shrink_catalog::CatalogError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShrinkError>;

const BUG_REPORT_BASE: &str = concat!(env!("CARGO_PKG_REPOSITORY"), "/issues/new");

#[derive(Error, Debug)]
pub enum ShrinkError {
    /// The shrunk patterns do not expand to the desired actions. Always a defect in the
    /// reduction, never a problem with the input.
    #[error("{}", validation_message(.desired_patterns, .error_match))]
    Validation {
        desired_patterns: Vec<String>,
        error_match: String,
    },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

fn bug_title(error_match: &str) -> String {
    format!("Bug: ShrinkValidationError. {error_match}")
}

fn bug_body(error_match: &str, desired_patterns: &[String]) -> String {
    format!("{error_match} while shrinking patterns {desired_patterns:?}")
}

fn bug_url(desired_patterns: &[String], error_match: &str) -> String {
    format!(
        "{BUG_REPORT_BASE}?labels=bug&title={}&body={}",
        urlencoding::encode(&bug_title(error_match)),
        urlencoding::encode(&bug_body(error_match, desired_patterns))
    )
}

fn validation_message(desired_patterns: &[String], error_match: &str) -> String {
    format!(
        "action-shrink has failed validation and this is a bug.\n{error_match}\nPlease file a bug at {}",
        bug_url(desired_patterns, error_match)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_offender_and_links_issue() {
        let err = ShrinkError::Validation {
            desired_patterns: vec!["s3:GetObject".to_string()],
            error_match: "Undesired action: s3:DeleteObject".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("action-shrink has failed validation and this is a bug."));
        assert!(message.contains("Undesired action: s3:DeleteObject"));

        let url = message
            .lines()
            .last()
            .and_then(|line| line.strip_prefix("Please file a bug at "))
            .unwrap();
        assert!(url.contains("/issues/new?labels=bug&title=Bug%3A%20ShrinkValidationError."));
        assert!(url.contains("s3%3ADeleteObject"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn catalog_errors_pass_through() {
        let err = ShrinkError::from(CatalogError::Other("offline".to_string()));
        assert_eq!(err.to_string(), "Catalog error: offline");
    }
}
