// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command line.
//
// Every technical error is mapped to a plain sentence with a suggestion. The
// severity tells the caller whether the run went on without the failed item
// or stopped.

use crate::error::PhotofolioError;

/// Effect of an error on the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// One image was left out; the rest of the document is fine.
    Skipped,
    /// The user must fix an input and run again.
    ActionRequired,
    /// Nothing the input can fix (disk full, internal failure).
    Permanent,
}

/// A plain-language error with an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-sentence summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `PhotofolioError` into a `HumanError`.
pub fn humanize_error(err: &PhotofolioError) -> HumanError {
    match err {
        PhotofolioError::ImageNotFound(path) => HumanError {
            message: format!("The image {} couldn't be found.", path.display()),
            suggestion: "Check the file name and path, then run again. No PDF was written."
                .into(),
            severity: Severity::ActionRequired,
        },

        PhotofolioError::AnnotationSourceNotFound(path) => HumanError {
            message: format!("The annotation file {} couldn't be found.", path.display()),
            suggestion: "Check the path given with --annotations, or leave the option out to \
                         build the PDF without annotations."
                .into(),
            severity: Severity::ActionRequired,
        },

        PhotofolioError::InvalidConfig(detail) => HumanError {
            message: "The settings for this run are incomplete.".into(),
            suggestion: format!("Fix the options and run again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        PhotofolioError::ImageDecode { path, .. } => HumanError {
            message: format!("The image {} couldn't be read and was left out.", path.display()),
            suggestion: "The file may be damaged or in an unusual format. Try saving it as a \
                         JPEG or PNG first."
                .into(),
            severity: Severity::Skipped,
        },

        PhotofolioError::Layout(detail) => HumanError {
            message: "An image couldn't be placed on its page and was left out.".into(),
            suggestion: format!("Check that the image is not empty. ({detail})"),
            severity: Severity::Skipped,
        },

        PhotofolioError::Persist { path, source } => {
            if source.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: format!("There is no permission to write {}.", path.display()),
                    suggestion: "Choose an output location you can write to.".into(),
                    severity: Severity::ActionRequired,
                }
            } else if source.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: format!("The folder for {} doesn't exist.", path.display()),
                    suggestion: "Create the folder first or pick another output path.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: format!("The PDF couldn't be saved to {}.", path.display()),
                    suggestion: "Check that the disk isn't full and try again.".into(),
                    severity: Severity::Permanent,
                }
            }
        }

        PhotofolioError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::InvalidData {
                HumanError {
                    message: "A text file isn't valid UTF-8.".into(),
                    suggestion: "Save the annotation file with UTF-8 encoding.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, the disk may be full."
                        .into(),
                    severity: Severity::Permanent,
                }
            }
        }

        PhotofolioError::Serialization(_) => HumanError {
            message: "The configuration file couldn't be read.".into(),
            suggestion: "Check that it is valid JSON.".into(),
            severity: Severity::ActionRequired,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_requires_action() {
        let human = humanize_error(&PhotofolioError::ImageNotFound("cat.png".into()));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.message.contains("cat.png"));
    }

    #[test]
    fn decode_failure_is_skipped() {
        let err = PhotofolioError::ImageDecode {
            path: "x.jpg".into(),
            reason: "bad header".into(),
        };
        assert_eq!(humanize_error(&err).severity, Severity::Skipped);
    }

    #[test]
    fn permission_denied_on_save_requires_action() {
        let err = PhotofolioError::Persist {
            path: "/root/out.pdf".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(humanize_error(&err).severity, Severity::ActionRequired);
    }

    #[test]
    fn full_disk_on_save_is_permanent() {
        let err = PhotofolioError::Persist {
            path: "out.pdf".into(),
            source: std::io::Error::other("no space left on device"),
        };
        assert_eq!(humanize_error(&err).severity, Severity::Permanent);
    }
}
