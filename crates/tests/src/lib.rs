#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod session_expiry_tests;

#[cfg(test)]
mod forbidden_tests;

#[cfg(test)]
mod batch_tests;

#[cfg(test)]
mod assignment_upload_tests;

#[cfg(test)]
mod attendance_tests;

#[cfg(test)]
mod records_tests;

#[cfg(test)]
mod dashboard_tests;
