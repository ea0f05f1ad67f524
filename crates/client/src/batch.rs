//! Fetch-with-fallback for pages that load several independent sections.
//!
//! ```ignore
//! let (stats, classes) = futures::join!(
//!     section("stats", api.dashboard_stats::<TeacherStats>(Role::Teacher)),
//!     section("classes", api.classes()),
//! );
//! ```

use std::future::Future;

use crate::error::ApiError;

/// Outcome of one section of a batch: the fetched value or the default,
/// plus the message to show when the fetch failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section<T> {
    pub value: T,
    pub error: Option<String>,
}

impl<T> Section<T> {
    pub fn ok(value: T) -> Self {
        Self { value, error: None }
    }
}

/// Await one fetch. Failures are logged and replaced by `T::default()`.
///
/// A rejected session yields no message: the sign-out redirect already
/// tells the user what happened.
pub async fn section<T, F>(label: &str, fetch: F) -> Section<T>
where
    T: Default,
    F: Future<Output = Result<T, ApiError>>,
{
    match fetch.await {
        Ok(value) => Section::ok(value),
        Err(ApiError::Unauthorized) => Section {
            value: T::default(),
            error: None,
        },
        Err(err) => {
            tracing::warn!(section = label, error = %err, "section failed, using fallback");
            Section {
                value: T::default(),
                error: Some(err.user_message()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use shared_types::AppError;

    #[test]
    fn one_failure_degrades_one_section() {
        let (stats, classes) = block_on(async {
            futures::join!(
                section("stats", async { Ok::<_, ApiError>(12_i64) }),
                section("classes", async {
                    Err::<Vec<String>, _>(ApiError::App(AppError::not_found("")))
                }),
            )
        });
        assert_eq!(stats, Section::ok(12));
        assert!(classes.value.is_empty());
        assert_eq!(
            classes.error.as_deref(),
            Some("The requested resource could not be found.")
        );
    }

    #[test]
    fn unauthorized_is_silent() {
        let result = block_on(section("stats", async { Err::<u32, _>(ApiError::Unauthorized) }));
        assert_eq!(result, Section { value: 0, error: None });
    }
}
