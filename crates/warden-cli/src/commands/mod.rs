pub mod dashboard;
pub mod dispatch;
pub mod password;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;
